use chrono::Utc;

use crate::db::models::{normalize_tags, Post, Segment};
use crate::db::posts::PostRepository;
use crate::terminal::command::Command;
use crate::terminal::session::{PostDraft, SessionState};
use crate::terminal::text;

pub const ADMIN_INVALID: &str = "Comando admin inválido";

/// Authoring state machine. Reached only for admin sessions, with the
/// navigation verbs already peeled off by the interpreter.
///
/// Idle means no draft; /newpost enters editing (restarting the draft if one
/// was already open, like the original terminal). Every other verb requires
/// an open draft.
pub fn apply(cmd: Command<'_>, session: &mut SessionState, posts: &dyn PostRepository) -> String {
    match cmd {
        Command::New => {
            session.draft = Some(PostDraft::default());
            text::EDIT_MENU.to_string()
        }
        Command::Save => {
            if session.is_editing() {
                save(session, posts)
            } else {
                ADMIN_INVALID.to_string()
            }
        }
        Command::Cancel => {
            if session.draft.take().is_some() {
                "Edição cancelada".to_string()
            } else {
                ADMIN_INVALID.to_string()
            }
        }
        Command::Title(title) => match session.draft.as_mut() {
            Some(draft) => {
                draft.title = title.to_string();
                format!("Título definido: {}", title)
            }
            None => ADMIN_INVALID.to_string(),
        },
        Command::Kind(kind) => match session.draft.as_mut() {
            Some(draft) => {
                draft.kind = kind.to_string();
                format!("Tipo definido: {}", kind)
            }
            None => ADMIN_INVALID.to_string(),
        },
        Command::Tags(raw) => match session.draft.as_mut() {
            Some(draft) => {
                draft.tags = normalize_tags(raw);
                format!("Tags definidas: {}", raw)
            }
            None => ADMIN_INVALID.to_string(),
        },
        Command::Free(line) => match session.draft.as_mut() {
            Some(draft) => {
                draft.content.push(line.to_string());
                let start = draft.content.len().saturating_sub(3);
                let preview = draft.content[start..].join("\n");
                format!(
                    "Conteúdo adicionado (linha {})\nÚltimas linhas:\n{}\nContinue digitando ou use /salvar",
                    draft.content.len(),
                    preview
                )
            }
            None => ADMIN_INVALID.to_string(),
        },
        // Navigation verbs never reach the editor.
        _ => ADMIN_INVALID.to_string(),
    }
}

fn save(session: &mut SessionState, posts: &dyn PostRepository) -> String {
    let Some(draft) = session.draft.as_ref() else {
        return ADMIN_INVALID.to_string();
    };
    if draft.content.is_empty() {
        return "Adicione conteúdo antes de salvar!".to_string();
    }

    let post = Post {
        id: uuid::Uuid::now_v7().to_string(),
        title: draft.title.clone(),
        kind: draft.kind.clone(),
        content: draft.content.iter().map(Segment::line).collect(),
        tags: draft.tags.clone(),
        author: "admin".to_string(),
        created_at: Utc::now(),
    };

    match posts.insert(&post) {
        Ok(()) => {
            session.draft = None;
            "Post salvo com sucesso!".to_string()
        }
        // Draft stays open on failure so nothing already typed is lost.
        Err(e) => format!("Erro ao salvar: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::posts::SqlitePosts;
    use crate::db::test_pool;
    use crate::terminal::command::parse;

    fn admin_session() -> SessionState {
        SessionState {
            admin: true,
            ..Default::default()
        }
    }

    fn run(input: &str, session: &mut SessionState, posts: &SqlitePosts) -> String {
        apply(parse(input), session, posts)
    }

    #[test]
    fn newpost_enters_editing_with_defaults() {
        let posts = SqlitePosts::new(test_pool());
        let mut session = admin_session();

        let out = run("/newpost", &mut session, &posts);
        assert_eq!(out, text::EDIT_MENU);
        let draft = session.draft.as_ref().unwrap();
        assert_eq!(draft.title, "Sem título");
        assert_eq!(draft.kind, "diario");
    }

    #[test]
    fn newpost_while_editing_restarts_the_draft() {
        let posts = SqlitePosts::new(test_pool());
        let mut session = admin_session();
        run("/newpost", &mut session, &posts);
        run("/title velho", &mut session, &posts);

        run("/newpost", &mut session, &posts);
        assert_eq!(session.draft.as_ref().unwrap().title, "Sem título");
    }

    #[test]
    fn title_type_and_tags_update_the_draft() {
        let posts = SqlitePosts::new(test_pool());
        let mut session = admin_session();
        run("/newpost", &mut session, &posts);

        assert_eq!(
            run("/title Meu Post", &mut session, &posts),
            "Título definido: Meu Post"
        );
        assert_eq!(
            run("/type projeto", &mut session, &posts),
            "Tipo definido: projeto"
        );
        assert_eq!(
            run("/tags ascii, arte,", &mut session, &posts),
            "Tags definidas: ascii, arte,"
        );

        let draft = session.draft.as_ref().unwrap();
        assert_eq!(draft.title, "Meu Post");
        assert_eq!(draft.kind, "projeto");
        assert_eq!(draft.tags, vec!["ascii", "arte"]);
    }

    #[test]
    fn free_text_appends_lines_with_preview() {
        let posts = SqlitePosts::new(test_pool());
        let mut session = admin_session();
        run("/newpost", &mut session, &posts);

        let out = run("primeira", &mut session, &posts);
        assert!(out.starts_with("Conteúdo adicionado (linha 1)"));

        run("segunda", &mut session, &posts);
        run("terceira", &mut session, &posts);
        let out = run("quarta", &mut session, &posts);
        assert!(out.starts_with("Conteúdo adicionado (linha 4)"));
        // Preview shows only the last three lines.
        assert!(out.contains("segunda\nterceira\nquarta"));
        assert!(!out.contains("primeira"));
    }

    #[test]
    fn save_without_content_warns_and_stays_editing() {
        let posts = SqlitePosts::new(test_pool());
        let mut session = admin_session();
        run("/newpost", &mut session, &posts);

        let out = run("/salvar", &mut session, &posts);
        assert_eq!(out, "Adicione conteúdo antes de salvar!");
        assert!(session.is_editing());
        assert!(posts.find_all().unwrap().is_empty());
    }

    #[test]
    fn save_persists_the_draft_and_leaves_editing() {
        let posts = SqlitePosts::new(test_pool());
        let mut session = admin_session();
        run("/newpost", &mut session, &posts);
        run("/title T", &mut session, &posts);
        run("/type arte", &mut session, &posts);
        run("linha única", &mut session, &posts);

        let out = run("/salvar", &mut session, &posts);
        assert_eq!(out, "Post salvo com sucesso!");
        assert!(!session.is_editing());

        let all = posts.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "T");
        assert_eq!(all[0].kind, "arte");
        assert_eq!(all[0].author, "admin");
        assert_eq!(all[0].content, vec![Segment::line("linha única")]);
    }

    #[test]
    fn cancel_discards_the_draft() {
        let posts = SqlitePosts::new(test_pool());
        let mut session = admin_session();
        run("/newpost", &mut session, &posts);
        run("x", &mut session, &posts);

        let out = run("/cancelar", &mut session, &posts);
        assert_eq!(out, "Edição cancelada");
        assert!(!session.is_editing());
        assert!(posts.find_all().unwrap().is_empty());
    }

    #[test]
    fn editing_verbs_outside_editing_are_invalid() {
        let posts = SqlitePosts::new(test_pool());
        let mut session = admin_session();

        for input in ["/salvar", "/cancelar", "/title x", "/type x", "/tags x", "texto solto"] {
            assert_eq!(run(input, &mut session, &posts), ADMIN_INVALID);
            assert!(!session.is_editing());
        }
    }
}
