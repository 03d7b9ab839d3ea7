//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat transcript while reading/writing shared state
//! from Leptos context providers.

pub mod chat_panel;
