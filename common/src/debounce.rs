//! Ticket based debounce with duplicate suppression.
//!
//! Every input value is pushed and returns a [`DebounceTicket`]. The caller
//! waits out the quiet period (see [`crate::search_const::SEARCH_DEBOUNCE_MS`])
//! and then settles the ticket. Only the most recent ticket settles, and only
//! when its value differs from the last value that was let through.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
    last_emitted: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None, last_emitted: None }
    }
}

impl<T: PartialEq + Clone> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes any pending value.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Returns the pending value if `ticket` is still the latest push and the
    /// value is not a repeat of the previous emission.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        let value = self.pending.take()?;
        if self.last_emitted.as_ref() == Some(&value) {
            return None;
        }
        self.last_emitted = Some(value.clone());
        Some(value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes `value` as the last emission when it arrived from elsewhere, such
    /// as a history navigation, so typing it again is not suppressed.
    pub fn sync_emitted(&mut self, value: T) {
        self.last_emitted = Some(value);
    }
}
