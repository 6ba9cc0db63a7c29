//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Optional fields default
//! rather than fail so a sparse response (no answer, no sources) decodes
//! into the fallback paths instead of the transport-error path.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /api/query`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The user's question, already trimmed.
    pub question: String,
    /// Whether the backend should attach retrieval sources to the answer.
    pub show_sources: bool,
}

/// Response body for `POST /api/query`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Generated answer in markdown. Absent when retrieval found nothing.
    #[serde(default)]
    pub answer: Option<String>,
    /// Retrieval citations in backend ranking order.
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// A single retrieval citation attached to an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Name of the document the excerpt came from.
    pub file: String,
    /// Cosine-similarity score, kept as the backend's display string.
    #[serde(deserialize_with = "deserialize_similarity")]
    pub similarity: String,
    /// The matched excerpt.
    pub text: String,
}

/// Response body for `POST /api/upload`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Whether the backend accepted and indexed the document.
    pub success: bool,
    /// Backend-provided failure reason when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body for `GET /api/docs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentsResponse {
    /// Names of the currently indexed documents.
    #[serde(default)]
    pub documents: Vec<String>,
}

/// The backend reports `similarity` as either a JSON number or an already
/// formatted string depending on version; normalize both to a string.
fn deserialize_similarity<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number for similarity, got {other}"
        ))),
    }
}
