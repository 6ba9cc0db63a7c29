//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of domain state (`chat`, `documents`) so
//! they can evolve independently of wire data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the chat panel controls.
#[derive(Clone, Copy, Debug)]
pub struct UiState {
    /// Whether answers should request and display retrieval citations.
    /// Sampled at submit time for the request body and again when the
    /// response arrives to decide whether the citation block renders.
    pub show_sources: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { show_sources: true }
    }
}
