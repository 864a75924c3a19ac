use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Utc;
use serde::Deserialize;

use crate::ascii;
use crate::db::models::{normalize_tags, Post};
use crate::db::posts::{PostRepository, SqlitePosts};
use crate::error::{AppError, AppResult};
use crate::extractors::AdminSession;
use crate::routes::Html;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/console", get(console))
        .route("/admin/newpost", post(new_post))
}

#[derive(Template)]
#[template(path = "pages/admin_console.html")]
struct ConsoleTemplate;

async fn console(_admin: AdminSession) -> AppResult<impl IntoResponse> {
    Ok(Html(ConsoleTemplate))
}

#[derive(Deserialize)]
struct NewPostForm {
    title: String,
    #[serde(rename = "type")]
    kind: String,
    content: String,
    #[serde(default)]
    tags: String,
}

/// Direct submission: a whole post in one form, bypassing the terminal.
/// Triple-backtick spans in the content become inline ASCII images.
async fn new_post(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<NewPostForm>,
) -> AppResult<Redirect> {
    let (rewritten, images) = ascii::extract(&form.content);
    let segments = ascii::segments_from_submission(&rewritten, images);
    if segments.is_empty() {
        return Err(AppError::BadRequest("Conteúdo vazio".into()));
    }

    let post = Post {
        id: uuid::Uuid::now_v7().to_string(),
        title: form.title,
        kind: form.kind,
        content: segments,
        tags: normalize_tags(&form.tags),
        author: "admin".to_string(),
        created_at: Utc::now(),
    };
    SqlitePosts::new(state.db.clone()).insert(&post)?;

    tracing::info!("Post {} created via admin console", post.id);
    Ok(Redirect::to("/admin/console"))
}
