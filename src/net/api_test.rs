use super::*;

#[test]
fn query_endpoint_matches_backend_route() {
    assert_eq!(QUERY_ENDPOINT, "/api/query");
}

#[test]
fn upload_endpoint_matches_backend_route() {
    assert_eq!(UPLOAD_ENDPOINT, "/api/upload");
}

#[test]
fn docs_endpoint_matches_backend_route() {
    assert_eq!(DOCS_ENDPOINT, "/api/docs");
}

#[test]
fn upload_field_matches_backend_form_contract() {
    assert_eq!(UPLOAD_FIELD, "file");
}
