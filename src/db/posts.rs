use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::params;
use rusqlite::Row;

use crate::db::models::Post;
use crate::error::{AppError, AppResult};
use crate::state::DbPool;

/// Storage contract the command interpreter depends on. Kept as a trait so
/// the interpreter stays a plain function of its inputs.
pub trait PostRepository {
    fn insert(&self, post: &Post) -> AppResult<()>;
    /// All posts, newest first.
    fn find_all(&self) -> AppResult<Vec<Post>>;
    fn find_by_id(&self, id: &str) -> AppResult<Option<Post>>;
    /// Case-insensitive match on the trailing characters of the id.
    fn find_by_suffix(&self, suffix: &str) -> AppResult<Option<Post>>;
}

pub struct SqlitePosts {
    pool: DbPool,
}

impl SqlitePosts {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

const POST_COLUMNS: &str = "id, title, type, content, tags, author, created_at";

/// Columns as stored: content, tags and created_at still serialized.
struct RawPost {
    id: String,
    title: String,
    kind: String,
    content: String,
    tags: String,
    author: String,
    created_at: String,
}

fn post_from_row(row: &Row<'_>) -> rusqlite::Result<RawPost> {
    Ok(RawPost {
        id: row.get(0)?,
        title: row.get(1)?,
        kind: row.get(2)?,
        content: row.get(3)?,
        tags: row.get(4)?,
        author: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn finish_post(raw: RawPost) -> AppResult<Post> {
    Ok(Post {
        id: raw.id,
        title: raw.title,
        kind: raw.kind,
        content: serde_json::from_str(&raw.content)?,
        tags: serde_json::from_str(&raw.tags)?,
        author: raw.author,
        created_at: DateTime::parse_from_rfc3339(&raw.created_at)
            .map_err(|e| AppError::Internal(format!("bad created_at in posts table: {}", e)))?
            .with_timezone(&Utc),
    })
}

impl PostRepository for SqlitePosts {
    fn insert(&self, post: &Post) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO posts (id, title, type, content, tags, author, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                post.id,
                post.title,
                post.kind,
                serde_json::to_string(&post.content)?,
                serde_json::to_string(&post.tags)?,
                post.author,
                post.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            ],
        )?;
        Ok(())
    }

    fn find_all(&self) -> AppResult<Vec<Post>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM posts ORDER BY created_at DESC, rowid DESC",
            POST_COLUMNS
        ))?;
        let rows: Vec<_> = stmt
            .query_map([], post_from_row)?
            .collect::<rusqlite::Result<_>>()?;
        rows.into_iter().map(finish_post).collect()
    }

    fn find_by_id(&self, id: &str) -> AppResult<Option<Post>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM posts WHERE id = ?1",
            POST_COLUMNS
        ))?;
        let mut rows: Vec<_> = stmt
            .query_map(params![id], post_from_row)?
            .collect::<rusqlite::Result<_>>()?;
        match rows.pop() {
            Some(raw) => Ok(Some(finish_post(raw)?)),
            None => Ok(None),
        }
    }

    fn find_by_suffix(&self, suffix: &str) -> AppResult<Option<Post>> {
        if suffix.is_empty() {
            return Ok(None);
        }
        let conn = self.pool.get()?;
        // SUBSTR with a negative start takes the tail, so user input never
        // acts as a LIKE pattern.
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM posts
             WHERE LOWER(SUBSTR(id, -LENGTH(?1))) = LOWER(?1)
             ORDER BY created_at DESC, rowid DESC LIMIT 1",
            POST_COLUMNS
        ))?;
        let mut rows: Vec<_> = stmt
            .query_map(params![suffix], post_from_row)?
            .collect::<rusqlite::Result<_>>()?;
        match rows.pop() {
            Some(raw) => Ok(Some(finish_post(raw)?)),
            None => Ok(None),
        }
    }
}
