//! Citation block rendered under an assistant answer.

#[cfg(test)]
#[path = "sources_test.rs"]
mod sources_test;

use leptos::prelude::*;

use crate::net::types::Source;

/// Renders each citation in backend ranking order: file name, similarity
/// label, excerpt. No client-side sorting or deduplication.
#[component]
pub fn SourcesBlock(sources: Vec<Source>) -> impl IntoView {
    view! {
        <div class="sources-block">
            <div class="sources-block__title">"Sources:"</div>
            {sources
                .into_iter()
                .map(|source| {
                    let label = similarity_label(&source.similarity);
                    view! {
                        <div class="sources-block__item">
                            <div class="sources-block__file">
                                {source.file}
                                <span class="sources-block__similarity">{label}</span>
                            </div>
                            <div class="sources-block__text">{source.text}</div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

fn similarity_label(similarity: &str) -> String {
    format!("Similarity: {similarity}")
}
