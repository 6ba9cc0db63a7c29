use super::*;

// =============================================================
// QueryRequest
// =============================================================

#[test]
fn query_request_serializes_wire_field_names() {
    let request = QueryRequest {
        question: "What is chunking?".to_owned(),
        show_sources: true,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "question": "What is chunking?", "show_sources": true })
    );
}

// =============================================================
// QueryResponse
// =============================================================

#[test]
fn query_response_decodes_answer_and_sources() {
    let response: QueryResponse = serde_json::from_str(
        r#"{"answer":"**hi**","sources":[{"file":"a.txt","similarity":"0.9","text":"x"}]}"#,
    )
    .unwrap();
    assert_eq!(response.answer.as_deref(), Some("**hi**"));
    assert_eq!(response.sources.len(), 1);
    assert_eq!(response.sources[0].file, "a.txt");
    assert_eq!(response.sources[0].similarity, "0.9");
    assert_eq!(response.sources[0].text, "x");
}

#[test]
fn query_response_tolerates_missing_answer() {
    let response: QueryResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(response.answer, None);
    assert!(response.sources.is_empty());
}

#[test]
fn query_response_tolerates_missing_sources() {
    let response: QueryResponse = serde_json::from_str(r#"{"answer":"ok"}"#).unwrap();
    assert_eq!(response.answer.as_deref(), Some("ok"));
    assert!(response.sources.is_empty());
}

// =============================================================
// Source similarity coercion
// =============================================================

#[test]
fn source_similarity_accepts_string() {
    let source: Source =
        serde_json::from_str(r#"{"file":"a.txt","similarity":"0.87","text":"x"}"#).unwrap();
    assert_eq!(source.similarity, "0.87");
}

#[test]
fn source_similarity_accepts_number() {
    let source: Source =
        serde_json::from_str(r#"{"file":"a.txt","similarity":0.5,"text":"x"}"#).unwrap();
    assert_eq!(source.similarity, "0.5");
}

#[test]
fn source_similarity_rejects_other_json_types() {
    let result =
        serde_json::from_str::<Source>(r#"{"file":"a.txt","similarity":[1],"text":"x"}"#);
    assert!(result.is_err());
}

// =============================================================
// UploadResponse
// =============================================================

#[test]
fn upload_response_decodes_success() {
    let response: UploadResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(response.success);
    assert_eq!(response.error, None);
}

#[test]
fn upload_response_decodes_failure_with_error() {
    let response: UploadResponse =
        serde_json::from_str(r#"{"success":false,"error":"file too large"}"#).unwrap();
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("file too large"));
}

// =============================================================
// DocumentsResponse
// =============================================================

#[test]
fn documents_response_decodes_names_in_order() {
    let response: DocumentsResponse =
        serde_json::from_str(r#"{"documents":["a","b"]}"#).unwrap();
    assert_eq!(response.documents, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn documents_response_tolerates_missing_array() {
    let response: DocumentsResponse = serde_json::from_str("{}").unwrap();
    assert!(response.documents.is_empty());
}
