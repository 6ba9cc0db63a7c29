//! Shared state modules provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat` owns the transcript, `documents` the sidebar list, and `ui` the
//! presentation toggles. Components read and mutate these through
//! `RwSignal` context providers; state lives exactly as long as the page.

pub mod chat;
pub mod documents;
pub mod ui;
