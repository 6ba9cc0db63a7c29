//! REST API helpers for communicating with the backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host-side: stubs returning errors so unit tests compile and run without
//! a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<T, String>`. HTTP status codes are not
//! consulted: the body is decoded as JSON regardless, so a non-2xx response
//! carrying a well-formed payload (e.g. `{"success": false, ...}`) takes
//! the application-level path and only transport or decode failures land in
//! `Err`. Callers decide what to show the user and what to log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{QueryRequest, QueryResponse};
#[cfg(feature = "csr")]
use super::types::{DocumentsResponse, UploadResponse};

pub const QUERY_ENDPOINT: &str = "/api/query";
pub const UPLOAD_ENDPOINT: &str = "/api/upload";
pub const DOCS_ENDPOINT: &str = "/api/docs";

/// Multipart form field name the backend expects the uploaded file under.
pub const UPLOAD_FIELD: &str = "file";

/// Ask a question via `POST /api/query`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response
/// body is not valid JSON for [`QueryResponse`].
pub async fn query(request: &QueryRequest) -> Result<QueryResponse, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(QUERY_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<QueryResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}

/// Upload a document via `POST /api/upload` as multipart form data.
///
/// The browser derives the multipart boundary and filename from the `File`
/// itself; only the field name is ours to choose.
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the request cannot
/// be sent, or the response body is not valid JSON for [`UploadResponse`].
#[cfg(feature = "csr")]
pub async fn upload_document(file: &web_sys::File) -> Result<UploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob(UPLOAD_FIELD, file)
        .map_err(|e| format!("{e:?}"))?;

    let resp = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<UploadResponse>().await.map_err(|e| e.to_string())
}

/// Fetch the current document list via `GET /api/docs`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response
/// body is not valid JSON for [`DocumentsResponse`].
pub async fn fetch_documents() -> Result<Vec<String>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(DOCS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body: DocumentsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.documents)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
