//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `chat` holds the transcript shared by the page and the panel; `surface`
//! describes how the page was asked to render (full page or widget mode).

pub mod chat;
pub mod surface;
