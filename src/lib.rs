//! Browser client for the RagChat retrieval-augmented QA service.
//!
//! ARCHITECTURE
//! ============
//! A single-page Leptos app: `app` wires shared state and layout, `net`
//! speaks HTTP to the backend, `state` holds the transcript and sidebar
//! models, `components` render them, and `util` isolates markdown rendering.
//! The backend (retrieval, answer synthesis, document indexing) is an
//! external service reached only through its JSON endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
