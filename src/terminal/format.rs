use crate::db::models::{Post, Segment};

/// One /list entry: `[last4] title (type) - dd/mm/yyyy`.
pub fn list_line(post: &Post) -> String {
    format!(
        "[{}] {} ({}) - {}",
        post.short_id(),
        post.title,
        post.kind_display(),
        post.created_at.format("%d/%m/%Y")
    )
}

pub fn list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "Nenhum post encontrado".to_string();
    }
    posts.iter().map(list_line).collect::<Vec<_>>().join("\n")
}

/// Post content as terminal text: lines verbatim, ASCII images reinserted
/// in place, joined by newlines.
pub fn content_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Line { text } => text.as_str(),
            Segment::AsciiImage { content, .. } => content.as_str(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full /view rendering. The shape (indentation, rules, the two spaces after
/// the content block) is fixed; output tests assert it byte-for-byte.
pub fn view(post: &Post) -> String {
    let tags = if post.tags.is_empty() {
        "Nenhuma".to_string()
    } else {
        post.tags.join(", ")
    };
    format!(
        "{title}\n    {date}\n    ━━━━━━━━━━━━━━━━━━\n    {content}  \n    ━━━━━━━━━━━━━━━━━━\n    ID: {id}\n    Tags: {tags}",
        title = post.title.to_uppercase(),
        date = post.created_at.format("%d/%m/%Y %H:%M"),
        content = content_text(&post.content),
        id = post.id,
        tags = tags,
    )
}
