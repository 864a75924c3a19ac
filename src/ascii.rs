//! ASCII-art extraction for the admin console submission path.
//!
//! Raw content may carry triple-backtick blocks; each one is pulled out as
//! an image record and replaced in the text by an `[ASCII_IMAGE_n]` marker,
//! then the marked-up text is folded into the canonical segment shape.

use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;

use crate::db::models::Segment;

#[derive(Debug, Clone, PartialEq)]
pub struct AsciiImage {
    pub name: String,
    pub content: String,
    pub position: String,
}

fn block_re() -> &'static Regex {
    static BLOCK_RE: OnceLock<Regex> = OnceLock::new();
    // Non-greedy and (?s) so a block can span newlines without swallowing
    // the next one.
    BLOCK_RE.get_or_init(|| Regex::new(r"(?s)```(.*?)```").expect("valid regex"))
}

/// Replace each ```block``` with `[ASCII_IMAGE_n]` (n = 0-based occurrence
/// order) and return the extracted image records alongside.
pub fn extract(content: &str) -> (String, Vec<AsciiImage>) {
    let mut images = Vec::new();
    let mut rewritten = String::with_capacity(content.len());
    let mut last = 0;

    for (idx, m) in block_re().find_iter(content).enumerate() {
        rewritten.push_str(&content[last..m.start()]);
        rewritten.push_str(&format!("[ASCII_IMAGE_{}]", idx));

        let block = &content[m.start() + 3..m.end() - 3];
        images.push(AsciiImage {
            name: format!("ascii_{}.txt", generated_suffix()),
            content: block.trim().to_string(),
            position: format!("inline_{}", idx),
        });
        last = m.end();
    }
    rewritten.push_str(&content[last..]);

    (rewritten, images)
}

/// Fold marked-up text plus its image records into segments: text becomes
/// one `Line` per line, each marker becomes an `AsciiImage` in occurrence
/// order.
pub fn segments_from_submission(rewritten: &str, images: Vec<AsciiImage>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = rewritten;

    for (idx, image) in images.into_iter().enumerate() {
        let marker = format!("[ASCII_IMAGE_{}]", idx);
        let Some((before, after)) = rest.split_once(marker.as_str()) else {
            break;
        };
        push_lines(&mut segments, before);
        segments.push(Segment::AsciiImage {
            name: image.name,
            content: image.content,
            position: image.position,
        });
        rest = after;
    }
    push_lines(&mut segments, rest);

    segments
}

fn push_lines(segments: &mut Vec<Segment>, chunk: &str) {
    let chunk = chunk.trim_matches(&['\r', '\n'][..]);
    if chunk.is_empty() {
        return;
    }
    for line in chunk.lines() {
        segments.push(Segment::line(line));
    }
}

/// Random 6-hex suffix so every extracted image gets its own filename.
fn generated_suffix() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; 3] = rng.gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
