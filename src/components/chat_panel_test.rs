use super::*;

fn source(file: &str) -> Source {
    Source {
        file: file.to_owned(),
        similarity: "0.9".to_owned(),
        text: "excerpt".to_owned(),
    }
}

// =============================================================
// Fixed user-facing strings
// =============================================================

#[test]
fn thinking_text_is_exact() {
    assert_eq!(THINKING_TEXT, "Thinking...");
}

#[test]
fn query_error_text_is_exact() {
    assert_eq!(
        QUERY_ERROR_TEXT,
        "Error: Could not get a response. Please make sure Ollama is running."
    );
}

#[test]
fn no_answer_text_is_exact() {
    assert_eq!(NO_ANSWER_TEXT, "Sorry, I could not find an answer.");
}

// =============================================================
// answer_or_fallback
// =============================================================

#[test]
fn answer_or_fallback_keeps_present_answer() {
    assert_eq!(answer_or_fallback(Some("**hi**".to_owned())), "**hi**");
}

#[test]
fn answer_or_fallback_substitutes_when_absent() {
    assert_eq!(answer_or_fallback(None), NO_ANSWER_TEXT);
}

#[test]
fn answer_or_fallback_treats_empty_answer_as_absent() {
    assert_eq!(answer_or_fallback(Some(String::new())), NO_ANSWER_TEXT);
}

// =============================================================
// visible_sources
// =============================================================

#[test]
fn visible_sources_pass_through_when_toggle_enabled() {
    let sources = visible_sources(vec![source("a.txt"), source("b.txt")], true);
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].file, "a.txt");
    assert_eq!(sources[1].file, "b.txt");
}

#[test]
fn visible_sources_drop_all_when_toggle_disabled() {
    let sources = visible_sources(vec![source("a.txt")], false);
    assert!(sources.is_empty());
}

#[test]
fn visible_sources_keep_server_order_without_dedup() {
    let sources = visible_sources(vec![source("a.txt"), source("a.txt")], true);
    assert_eq!(sources.len(), 2);
}
