use rand::Rng;
use rusqlite::params;
use rusqlite::OptionalExtension;

use crate::error::AppResult;
use crate::state::DbPool;
use crate::terminal::session::SessionState;

/// Sqlite-backed store for per-browser terminal sessions. Each cookie token
/// maps to one serialized SessionState row with an expiry.
#[derive(Clone)]
pub struct SessionStore {
    pool: DbPool,
    hours: u64,
}

impl SessionStore {
    pub fn new(pool: DbPool, hours: u64) -> Self {
        Self { pool, hours }
    }

    /// Resolve the state for a request: reuse the cookie token when it still
    /// maps to a live row, otherwise mint a fresh session.
    pub fn open(&self, token: Option<&str>) -> AppResult<(String, SessionState)> {
        if let Some(token) = token {
            if let Some(state) = self.load(token)? {
                return Ok((token.to_string(), state));
            }
            // Cookie points at an expired or unknown row; drop it.
            self.clear(token)?;
        }
        let token = self.create()?;
        Ok((token, SessionState::default()))
    }

    pub fn create(&self) -> AppResult<String> {
        let conn = self.pool.get()?;
        let token = generate_token();
        let state = serde_json::to_string(&SessionState::default())?;
        conn.execute(
            "INSERT INTO sessions (token, state, expires_at) VALUES (?1, ?2, datetime('now', ?3))",
            params![token, state, format!("+{} hours", self.hours)],
        )?;
        Ok(token)
    }

    pub fn load(&self, token: &str) -> AppResult<Option<SessionState>> {
        let conn = self.pool.get()?;
        let state: Option<String> = conn
            .query_row(
                "SELECT state FROM sessions WHERE token = ?1 AND expires_at > datetime('now')",
                params![token],
                |row| row.get(0),
            )
            .optional()?;
        match state {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn save(&self, token: &str, state: &SessionState) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "UPDATE sessions SET state = ?2 WHERE token = ?1",
            params![token, serde_json::to_string(state)?],
        )?;
        Ok(())
    }

    pub fn clear(&self, token: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM sessions WHERE token = ?1", params![token])?;
        Ok(())
    }

    /// Drop rows past their expiry. Called at startup.
    pub fn purge_expired(&self) -> AppResult<usize> {
        let conn = self.pool.get()?;
        let n = conn.execute(
            "DELETE FROM sessions WHERE expires_at <= datetime('now')",
            [],
        )?;
        Ok(n)
    }
}

/// Generate a cryptographically random 32-byte hex token.
fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; 32] = rng.gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
