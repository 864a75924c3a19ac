use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::auth::session::SessionStore;
use crate::error::AppError;
use crate::state::AppState;
use crate::terminal::session::SessionState;

/// The session cookie value, if the browser sent one. Terminal routes use
/// this and mint a session themselves when it is absent or stale.
pub struct SessionCookie(pub Option<String>);

impl FromRequestParts<AppState> for SessionCookie {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(parts, &state.config.auth.cookie_name);
        Ok(SessionCookie(token.map(str::to_string)))
    }
}

/// Extractor that requires a live admin session.
/// Returns 401 when the cookie is missing, expired, or not logged in.
#[derive(Debug)]
pub struct AdminSession {
    pub token: String,
    pub session: SessionState,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(parts, &state.config.auth.cookie_name)
            .ok_or(AppError::Unauthorized)?
            .to_string();

        let store = SessionStore::new(state.db.clone(), state.config.auth.session_hours);
        let session = store.load(&token)?.ok_or(AppError::Unauthorized)?;
        if !session.admin {
            return Err(AppError::Unauthorized);
        }

        Ok(AdminSession { token, session })
    }
}

fn extract_session_token<'a>(parts: &'a Parts, cookie_name: &str) -> Option<&'a str> {
    parts
        .headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .map(|s| s.trim())
        .find_map(|cookie| {
            let mut split = cookie.splitn(2, '=');
            let key = split.next()?.trim();
            let val = split.next()?.trim();
            if key == cookie_name {
                Some(val)
            } else {
                None
            }
        })
}
