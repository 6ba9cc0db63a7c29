//! Document sidebar: upload flow and the indexed-document list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the file input and drives `POST /api/upload` and `GET /api/docs`.
//! Upload progress is narrated into the shared transcript; list-refresh
//! failures stay log-only so a flaky backend does not spam the chat.

#[cfg(test)]
#[path = "document_panel_test.rs"]
mod document_panel_test;

use leptos::prelude::*;

use crate::state::chat::{ChatState, MessageRole};
use crate::state::documents::DocumentsState;

/// Blocking alert when upload is clicked with no file selected.
pub const SELECT_FILE_ALERT: &str = "Please select a file to upload";
/// Blocking alert when the selected file is not a `.txt` file.
pub const TXT_ONLY_ALERT: &str = "Only .txt files are supported";
/// Fixed user-facing text for transport or decode failures on the upload path.
pub const UPLOAD_FAILED_TEXT: &str = "Error uploading file. Please try again.";
/// Placeholder list entry when the backend has no documents.
pub const NO_DOCUMENTS_TEXT: &str = "No documents loaded";

/// Sidebar with the upload controls and the current document list.
#[component]
pub fn DocumentPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let documents = expect_context::<RwSignal<DocumentsState>>();

    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let on_upload = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(input_el) = file_input_ref.get() else {
                return;
            };
            let Some(file) = input_el.files().and_then(|files| files.get(0)) else {
                alert(SELECT_FILE_ALERT);
                return;
            };

            // Suffix check only; the backend performs authoritative validation.
            let name = file.name();
            if !is_txt_file(&name) {
                alert(TXT_ONLY_ALERT);
                return;
            }

            chat.update(|c| {
                c.push(uploading_message(&name), MessageRole::System);
            });

            leptos::task::spawn_local(async move {
                match crate::net::api::upload_document(&file).await {
                    Ok(response) if response.success => {
                        chat.update(|c| {
                            c.push(uploaded_message(&name), MessageRole::System);
                        });
                        input_el.set_value("");
                        refresh_documents(documents);
                    }
                    Ok(response) => {
                        chat.update(|c| {
                            c.push(upload_error_message(response.error), MessageRole::System);
                        });
                    }
                    Err(error) => {
                        log::error!("upload failed: {error}");
                        chat.update(|c| {
                            c.push(UPLOAD_FAILED_TEXT, MessageRole::System);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (chat, file_input_ref);
        }
    };

    view! {
        <aside class="document-panel">
            <h2 class="document-panel__title">"Documents"</h2>

            <div class="document-panel__upload">
                <input
                    class="document-panel__file"
                    type="file"
                    accept=".txt"
                    node_ref=file_input_ref
                />
                <button class="btn document-panel__upload-button" on:click=on_upload>
                    "Upload"
                </button>
            </div>

            <ul class="document-panel__list">
                {move || {
                    let items = documents.get().items;
                    if items.is_empty() {
                        return view! {
                            <li class="document-panel__item document-panel__item--empty">
                                {NO_DOCUMENTS_TEXT}
                            </li>
                        }
                            .into_any();
                    }

                    items
                        .into_iter()
                        .map(|name| {
                            view! { <li class="document-panel__item">{name}</li> }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </ul>
        </aside>
    }
}

/// Re-fetch the document list and overwrite the sidebar state.
///
/// Failures are logged, not surfaced: the previously rendered list stays as
/// is. Called once on mount and again after each successful upload.
#[cfg(feature = "csr")]
pub fn refresh_documents(documents: RwSignal<DocumentsState>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_documents().await {
            Ok(items) => documents.update(|d| d.replace(items)),
            Err(error) => log::error!("failed to fetch documents: {error}"),
        }
    });
}

#[cfg(feature = "csr")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Case-sensitive literal suffix check, matching the backend's ingest filter.
#[cfg(any(test, feature = "csr"))]
fn is_txt_file(name: &str) -> bool {
    name.ends_with(".txt")
}

#[cfg(any(test, feature = "csr"))]
fn uploading_message(name: &str) -> String {
    format!("Uploading {name}...")
}

#[cfg(any(test, feature = "csr"))]
fn uploaded_message(name: &str) -> String {
    format!("Successfully uploaded {name}!")
}

#[cfg(any(test, feature = "csr"))]
fn upload_error_message(error: Option<String>) -> String {
    format!("Error: {}", error.unwrap_or_else(|| "unknown error".to_owned()))
}
