//! Root application component wiring shared state and layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once per page session: provides the transcript, document,
//! and UI signals via context, kicks off the initial document-list fetch,
//! and lays out the chat panel beside the document sidebar. There is no
//! teardown; navigation discards the whole thing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_panel::ChatPanel;
use crate::components::document_panel::DocumentPanel;
use crate::state::chat::ChatState;
use crate::state::documents::DocumentsState;
use crate::state::ui::UiState;

/// Application root: one instance per page session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let documents = RwSignal::new(DocumentsState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(chat);
    provide_context(documents);
    provide_context(ui);

    // Load available documents once on startup.
    #[cfg(feature = "csr")]
    crate::components::document_panel::refresh_documents(documents);

    view! {
        <Title text="RagChat" />
        <div class="app">
            <header class="app__header">
                <h1 class="app__title">"RagChat"</h1>
                <span class="app__subtitle">"Ask questions about your documents"</span>
            </header>
            <main class="app__main">
                <ChatPanel />
                <DocumentPanel />
            </main>
        </div>
    }
}
