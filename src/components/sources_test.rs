use super::*;

#[test]
fn similarity_label_formats_score() {
    assert_eq!(similarity_label("0.9"), "Similarity: 0.9");
}

#[test]
fn similarity_label_passes_numeric_strings_through() {
    assert_eq!(similarity_label("0.8732"), "Similarity: 0.8732");
}
