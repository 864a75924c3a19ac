use serde::{Deserialize, Serialize};

/// One past turn of the terminal conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub command: String,
    pub output: String,
}

/// Post being written line-by-line through the terminal. Lives only inside
/// the session; discarded on /cancelar, turned into a Post on /salvar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: Vec<String>,
    pub tags: Vec<String>,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: "Sem título".to_string(),
            kind: "diario".to_string(),
            content: Vec::new(),
            tags: Vec::new(),
        }
    }
}

/// Everything the server remembers about one browser session.
///
/// A draft being present is what "editing mode" means; there is no separate
/// flag to drift out of sync.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub draft: Option<PostDraft>,
}

impl SessionState {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Append a command/output pair, keeping only the most recent `limit`
    /// entries so a long-lived session cannot grow without bound.
    pub fn push_history(&mut self, command: &str, output: &str, limit: usize) {
        self.history.push(HistoryEntry {
            command: command.to_string(),
            output: output.to_string(),
        });
        if self.history.len() > limit {
            let overflow = self.history.len() - limit;
            self.history.drain(..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_anonymous_and_idle() {
        let state = SessionState::default();
        assert!(state.history.is_empty());
        assert!(!state.admin);
        assert!(!state.is_editing());
    }

    #[test]
    fn default_draft_has_documented_defaults() {
        let draft = PostDraft::default();
        assert_eq!(draft.title, "Sem título");
        assert_eq!(draft.kind, "diario");
        assert!(draft.content.is_empty());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn push_history_appends_in_order() {
        let mut state = SessionState::default();
        state.push_history("/help", "ajuda", 10);
        state.push_history("/list", "posts", 10);
        assert_eq!(state.history[0].command, "/help");
        assert_eq!(state.history[1].command, "/list");
    }

    #[test]
    fn push_history_drops_oldest_past_the_limit() {
        let mut state = SessionState::default();
        for i in 0..5 {
            state.push_history(&format!("cmd{}", i), "out", 3);
        }
        assert_eq!(state.history.len(), 3);
        assert_eq!(state.history[0].command, "cmd2");
        assert_eq!(state.history[2].command, "cmd4");
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = SessionState::default();
        state.admin = true;
        state.draft = Some(PostDraft::default());
        state.push_history("/newpost", "Modo edição ativado", 10);

        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
