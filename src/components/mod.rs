//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surfaces while reading/writing shared state
//! from Leptos context providers.

pub mod chat_panel;
pub mod document_panel;
pub mod sources;
