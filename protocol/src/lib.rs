//! Shared chat wire model for the receptionist server and browser crates.
//!
//! This crate owns the `/chat` request/response schema, the fixed fallback
//! texts rendered when an exchange fails, the transcript model used by every
//! chat surface, and the widget parameter handling shared by the loader and
//! the hosted widget page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`message`] | Wire types, fallback texts, reply classification |
//! | [`transcript`] | Ordered chat transcript and the submit/settle pipeline |
//! | [`widget`] | Widget query parameters and content-surface URLs |
//! | `fetch` | Browser `POST /chat` helper (feature `fetch`) |

pub mod message;
pub mod transcript;
pub mod widget;

#[cfg(feature = "fetch")]
pub mod fetch;

pub use message::{ChatMessage, ChatReply, ChatRequest, ExchangeError, Sender};
pub use transcript::{PendingExchange, Transcript};
pub use widget::WidgetConfig;

/// Path of the chat endpoint on the hosting application.
pub const CHAT_ENDPOINT: &str = "/chat";

/// Greeting shown in an empty transcript and returned by the server when it
/// has nothing more specific to say.
pub const GREETING: &str = "Hello! How can I help you today?";
