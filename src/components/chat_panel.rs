//! Chat panel: transcript rendering and the ask-question flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the question input and drives `POST /api/query`. The transient
//! "Thinking..." placeholder is appended synchronously before the request
//! goes out and removed as the first act of the completion handler, so the
//! transcript never shows a resolved answer behind a stale placeholder.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::components::sources::SourcesBlock;
#[cfg(feature = "csr")]
use crate::net::types::QueryRequest;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::Source;
use crate::state::chat::{ChatState, MessageRole};
use crate::state::ui::UiState;

/// Placeholder text shown while a query is in flight.
pub const THINKING_TEXT: &str = "Thinking...";
/// Fixed user-facing text for transport or decode failures on the query path.
pub const QUERY_ERROR_TEXT: &str =
    "Error: Could not get a response. Please make sure Ollama is running.";
/// Fallback answer when the backend responds without one.
pub const NO_ANSWER_TEXT: &str = "Sorry, I could not find an answer.";

/// Chat panel showing the transcript and a question input row.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let question = input.get().trim().to_owned();
        if question.is_empty() {
            return;
        }

        chat.update(|c| {
            c.push(question.clone(), MessageRole::User);
        });
        input.set(String::new());

        let mut placeholder_id = String::new();
        chat.update(|c| placeholder_id = c.push(THINKING_TEXT, MessageRole::System));

        #[cfg(feature = "csr")]
        {
            // Toggle state is sampled now, not when the response lands.
            let request = QueryRequest {
                question,
                show_sources: ui.get_untracked().show_sources,
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::query(&request).await;

                chat.update(|c| {
                    c.remove(&placeholder_id);
                });

                match result {
                    Ok(response) => {
                        let answer = answer_or_fallback(response.answer);
                        let sources =
                            visible_sources(response.sources, ui.get_untracked().show_sources);
                        chat.update(|c| {
                            c.push_answer(answer, sources);
                        });
                    }
                    Err(error) => {
                        log::error!("query failed: {error}");
                        chat.update(|c| {
                            c.push(QUERY_ERROR_TEXT, MessageRole::System);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = placeholder_id;
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <section class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"Ask a question about your documents"</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let text = msg.text.clone();
                            let sources = msg.sources.clone();
                            let is_user = msg.role == MessageRole::User;
                            let is_system = msg.role == MessageRole::System;
                            let is_assistant = msg.role == MessageRole::Assistant;

                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--user=is_user
                                    class:chat-panel__message--system=is_system
                                    class:chat-panel__message--assistant=is_assistant
                                >
                                    {if is_assistant {
                                        let rendered = crate::util::markdown::render_html(&text);
                                        view! {
                                            <div class="chat-panel__answer" inner_html=rendered></div>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span>{text}</span> }.into_any()
                                    }}
                                    {(!sources.is_empty())
                                        .then(|| {
                                            view! { <SourcesBlock sources=sources /> }
                                        })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask a question..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__ask" on:click=on_click>
                    "Ask"
                </button>
                <label class="chat-panel__sources-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || ui.get().show_sources
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ui.update(|u| u.show_sources = checked);
                        }
                    />
                    "Show sources"
                </label>
            </div>
        </section>
    }
}

/// Pick the answer text, falling back when the backend sent none.
///
/// An empty string counts as "no answer": the backend emits empty strings
/// when generation fails quietly, and those should read as a miss rather
/// than render a blank bubble.
#[cfg(any(test, feature = "csr"))]
fn answer_or_fallback(answer: Option<String>) -> String {
    match answer {
        Some(text) if !text.is_empty() => text,
        _ => NO_ANSWER_TEXT.to_owned(),
    }
}

/// Sources render only while the toggle is still enabled at response time.
#[cfg(any(test, feature = "csr"))]
fn visible_sources(sources: Vec<Source>, show_sources: bool) -> Vec<Source> {
    if show_sources { sources } else { Vec::new() }
}
