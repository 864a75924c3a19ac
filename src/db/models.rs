use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One piece of post content, in display order.
///
/// The terminal authoring flow only ever produces `Line` segments; the admin
/// console form can interleave `AsciiImage` segments extracted from
/// triple-backtick blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Line {
        text: String,
    },
    AsciiImage {
        name: String,
        content: String,
        position: String,
    },
}

impl Segment {
    pub fn line(text: impl Into<String>) -> Self {
        Segment::Line { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    /// Post category. Free-form; the terminal suggests
    /// diario, projeto, reflexao and arte.
    #[serde(rename = "type")]
    pub kind: String,
    pub content: Vec<Segment>,
    pub tags: Vec<String>,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Canonical tag handling: split on comma, trim, drop empties. Applied to
/// both the terminal /tags command and the admin console form.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

impl Post {
    /// Trailing four characters of the id, shown by /list and accepted
    /// by /view as a suffix lookup.
    pub fn short_id(&self) -> &str {
        let n = self.id.len().saturating_sub(4);
        &self.id[n..]
    }

    pub fn kind_display(&self) -> &str {
        if self.kind.is_empty() {
            "sem tipo"
        } else {
            &self.kind
        }
    }
}
