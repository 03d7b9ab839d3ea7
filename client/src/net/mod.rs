//! Networking helpers for the chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the one HTTP call the page makes: `POST /chat`.

pub mod api;
