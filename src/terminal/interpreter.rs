use uuid::Uuid;

use crate::auth::CredentialVerifier;
use crate::db::models::Post;
use crate::db::posts::PostRepository;
use crate::error::AppResult;
use crate::terminal::command::{self, Command};
use crate::terminal::{editor, format, text};
use crate::terminal::session::SessionState;

pub const INVALID: &str = "Comando inválido. Digite /help para ajuda.";

/// What the route layer should do with the result of one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Append (command, output) to the session history and re-render.
    Output(String),
    /// /clear: wipe the history, append nothing.
    Clear,
}

/// The command interpreter: one trimmed input line plus the session state in,
/// output text plus state mutations out. Storage and the password check are
/// injected so this stays a plain function of its inputs.
pub struct Interpreter<'a> {
    posts: &'a dyn PostRepository,
    verifier: &'a dyn CredentialVerifier,
}

impl<'a> Interpreter<'a> {
    pub fn new(posts: &'a dyn PostRepository, verifier: &'a dyn CredentialVerifier) -> Self {
        Self { posts, verifier }
    }

    pub fn run(&self, input: &str, session: &mut SessionState) -> Reply {
        match command::parse(input) {
            Command::Empty => Reply::Output(String::new()),
            Command::Clear => Reply::Clear,
            Command::Help => Reply::Output(text::help(session.admin)),
            Command::About => Reply::Output(text::ABOUT.to_string()),
            Command::Login(password) => Reply::Output(self.login(password, session)),
            Command::Logout => {
                *session = SessionState::default();
                Reply::Output("Logout realizado com sucesso!".to_string())
            }
            Command::List => Reply::Output(self.list()),
            Command::View(query) => Reply::Output(self.view(query)),
            other => {
                if session.admin {
                    Reply::Output(editor::apply(other, session, self.posts))
                } else {
                    Reply::Output(INVALID.to_string())
                }
            }
        }
    }

    fn login(&self, password: Option<&str>, session: &mut SessionState) -> String {
        let Some(password) = password else {
            return "Formato correto: /login <senha>".to_string();
        };
        if self.verifier.verify(password) {
            session.admin = true;
            "Login realizado com sucesso!".to_string()
        } else {
            "Senha incorreta!".to_string()
        }
    }

    fn list(&self) -> String {
        match self.posts.find_all() {
            Ok(posts) => format::list(&posts),
            Err(e) => format!("Erro: {}", e),
        }
    }

    fn view(&self, query: Option<&str>) -> String {
        let query = query.map(str::trim).unwrap_or_default();
        if query.is_empty() {
            return "Formato: /view <id_do_post>".to_string();
        }
        match self.find_post(query) {
            Ok(Some(post)) => format::view(&post),
            Ok(None) => format!("Nenhum post encontrado com ID contendo: {}", query),
            Err(e) => format!("Erro: {}", e),
        }
    }

    /// Full-id lookup when the argument parses as a uuid, falling back to a
    /// case-insensitive suffix match either way.
    fn find_post(&self, query: &str) -> AppResult<Option<Post>> {
        if Uuid::parse_str(query).is_ok() {
            if let Some(post) = self.posts.find_by_id(query)? {
                return Ok(Some(post));
            }
        }
        self.posts.find_by_suffix(query)
    }
}
