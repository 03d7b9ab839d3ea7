//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the receptionist behaviour and persistence concerns so
//! route handlers can stay focused on protocol translation and rate limiting.

pub mod booking;
pub mod faq;
pub mod notify;
pub mod pg_store;
pub mod reception;
pub mod store;
