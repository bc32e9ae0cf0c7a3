use super::Turn;

/// Ordered, append-only record of the turns exchanged during one session.
///
/// Held in memory only and owned by the caller; one instance per session.
/// The sequence grows monotonically via [`append`](Self::append), may be
/// reset via [`clear`](Self::clear), and is never reordered or deduplicated.
/// Insertion order is significant: it is what gets serialized as
/// conversational context for the remote flow.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed exchange at the end of the sequence.
    ///
    /// Error replies are stored like any other assistant text so the
    /// conversational record stays continuous.
    pub fn append(&mut self, user_text: impl Into<String>, assistant_text: impl Into<String>) {
        self.turns.push(Turn::new(user_text, assistant_text));
    }

    /// Reset to empty. Only invoked by an explicit user action.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Read-only snapshot of all turns, in insertion order.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recent `cap` turns, in insertion order.
    ///
    /// Used to bound the context window sent per request; the container
    /// itself keeps every turn.
    pub fn recent(&self, cap: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(cap);
        &self.turns[start..]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
