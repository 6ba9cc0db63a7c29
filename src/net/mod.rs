//! Networking modules for the backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the three REST calls (query, upload, document list) and
//! `types` defines the shared wire schema. The backend performs all
//! retrieval and generation; this layer only moves JSON.

pub mod api;
pub mod types;
