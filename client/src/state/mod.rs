//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `files`, `ui`) so individual
//! components can depend on small focused models. `build` holds the
//! send/reply/logout transitions that touch more than one of them.

pub mod auth;
pub mod build;
pub mod chat;
pub mod files;
pub mod ui;
