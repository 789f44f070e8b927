//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the IDE chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod auth_modal;
pub mod chat_panel;
pub mod file_list;
pub mod header;
pub mod workspace_panel;
