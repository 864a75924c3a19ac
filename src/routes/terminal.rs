use askama::Template;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::auth::session::SessionStore;
use crate::auth::BcryptVerifier;
use crate::config::Config;
use crate::db::posts::SqlitePosts;
use crate::error::AppResult;
use crate::extractors::SessionCookie;
use crate::routes::Html;
use crate::state::AppState;
use crate::terminal::interpreter::{Interpreter, Reply};
use crate::terminal::session::HistoryEntry;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/command", post(command))
}

#[derive(Template)]
#[template(path = "pages/terminal.html")]
struct TerminalTemplate {
    history: Vec<HistoryEntry>,
    admin: bool,
    editing: bool,
}

fn session_store(state: &AppState) -> SessionStore {
    SessionStore::new(state.db.clone(), state.config.auth.session_hours)
}

fn session_cookie(config: &Config, token: &str) -> String {
    format!(
        "{}={}; HttpOnly; SameSite=Strict; Path=/; Max-Age={}",
        config.auth.cookie_name,
        token,
        config.auth.session_hours * 3600
    )
}

/// The terminal page: prompt plus the session's past turns.
async fn index(State(state): State<AppState>, cookie: SessionCookie) -> AppResult<Response> {
    let store = session_store(&state);
    let (token, session) = store.open(cookie.0.as_deref())?;

    let template = TerminalTemplate {
        history: session.history.clone(),
        admin: session.admin,
        editing: session.is_editing(),
    };

    Ok((
        [(header::SET_COOKIE, session_cookie(&state.config, &token))],
        Html(template),
    )
        .into_response())
}

#[derive(Deserialize)]
struct CommandForm {
    command: String,
}

/// One terminal turn: interpret, record, redirect back to the screen.
async fn command(
    State(state): State<AppState>,
    cookie: SessionCookie,
    Form(form): Form<CommandForm>,
) -> AppResult<Response> {
    let store = session_store(&state);
    let (token, mut session) = store.open(cookie.0.as_deref())?;

    let input = form.command.trim().to_string();
    let posts = SqlitePosts::new(state.db.clone());
    let verifier = BcryptVerifier::new(state.config.auth.admin_hash.clone());
    let interpreter = Interpreter::new(&posts, &verifier);

    match interpreter.run(&input, &mut session) {
        Reply::Clear => session.history.clear(),
        Reply::Output(output) => {
            session.push_history(&input, &output, state.config.terminal.history_limit)
        }
    }
    store.save(&token, &session)?;

    Ok((
        [(header::SET_COOKIE, session_cookie(&state.config, &token))],
        Redirect::to("/"),
    )
        .into_response())
}
