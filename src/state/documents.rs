//! Sidebar document-list state.
//!
//! DESIGN
//! ======
//! The list is always the backend's current truth: each successful fetch
//! overwrites it wholesale, and a failed fetch leaves the previous render
//! untouched. No local cache survives the page.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

/// Names of the documents currently indexed by the backend.
#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    pub items: Vec<String>,
}

impl DocumentsState {
    /// Replace the list with the backend's latest answer.
    pub fn replace(&mut self, items: Vec<String>) {
        self.items = items;
    }
}
