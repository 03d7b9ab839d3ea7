//! Transcript state for the hosted chat panel.
//!
//! DESIGN
//! ======
//! Wraps [`Transcript`] so the Leptos signal holds a plain value. Sends go
//! through `begin_send` (user entry appended immediately) and `finish_send`
//! (bot entry appended when the request settles).

use protocol::{ChatMessage, ExchangeError, PendingExchange, Transcript};

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// State for the chat panel, provided via context as `RwSignal<ChatState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    transcript: Transcript,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { transcript: Transcript::greeted() }
    }
}

impl ChatState {
    /// Append the user entry for `raw`; `None` when the input is blank.
    pub fn begin_send(&mut self, raw: &str) -> Option<PendingExchange> {
        self.transcript.submit(raw)
    }

    /// Append the reply (or fallback) for a settled exchange.
    pub fn finish_send(&mut self, pending: &PendingExchange, outcome: Result<String, ExchangeError>) {
        self.transcript.settle(pending, outcome);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.transcript.entries()
    }

    /// Whether any reply is still outstanding.
    pub fn awaiting_reply(&self) -> bool {
        self.transcript.in_flight() > 0
    }
}
