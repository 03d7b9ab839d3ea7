//! Ordered chat transcript and the two-stage send pipeline.
//!
//! DESIGN
//! ======
//! A send is split into [`Transcript::submit`], which validates the input and
//! appends the user entry synchronously, and [`Transcript::settle`], which
//! appends the bot entry once the network call has finished. The transcript is
//! append-only.
//!
//! TRADE-OFFS
//! ==========
//! Bot entries are appended in settle order, not send order. Each
//! [`PendingExchange`] carries a sequence number so callers can log the
//! pairing, but replies to concurrent sends are never reordered.

use crate::GREETING;
use crate::message::{ChatMessage, ExchangeError, reply_text};

#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

/// A submitted message whose reply has not arrived yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingExchange {
    /// Position of this send among all sends on the transcript (0-based).
    pub seq: u64,
    /// Trimmed text that was appended as the user entry.
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<ChatMessage>,
    sent: u64,
    in_flight: u64,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript that already holds the greeting.
    #[must_use]
    pub fn greeted() -> Self {
        let mut transcript = Self::new();
        transcript.greet_if_empty();
        transcript
    }

    /// Append the greeting bot entry when nothing has been rendered yet.
    /// Returns `true` if the greeting was added.
    pub fn greet_if_empty(&mut self) -> bool {
        if !self.entries.is_empty() {
            return false;
        }
        self.entries.push(ChatMessage::bot(GREETING));
        true
    }

    /// Validate and append a user entry.
    ///
    /// Returns `None` (and appends nothing) for empty or whitespace-only input.
    pub fn submit(&mut self, raw: &str) -> Option<PendingExchange> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let pending = PendingExchange { seq: self.sent, text: text.to_owned() };
        self.sent += 1;
        self.in_flight += 1;
        self.entries.push(ChatMessage::user(text));
        Some(pending)
    }

    /// Append the bot entry for a settled exchange and return it.
    pub fn settle(&mut self, pending: &PendingExchange, outcome: Result<String, ExchangeError>) -> &ChatMessage {
        debug_assert!(pending.seq < self.sent, "settled an exchange that was never submitted");
        self.in_flight = self.in_flight.saturating_sub(1);
        self.entries.push(ChatMessage::bot(reply_text(outcome)));
        let last = self.entries.len() - 1;
        &self.entries[last]
    }

    #[must_use]
    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    /// Number of submitted exchanges still waiting for a reply.
    #[must_use]
    pub fn in_flight(&self) -> u64 {
        self.in_flight
    }
}
