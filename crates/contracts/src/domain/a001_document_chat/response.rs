use serde::{Deserialize, Serialize};

/// Body returned by `POST /api/files/upload`
///
/// Only `file_id` is required; the server may echo the stored metadata as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub file_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl UploadResponse {
    /// Session id issued by the server, ignoring an empty string
    pub fn issued_session(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|s| !s.is_empty())
    }
}

/// Body returned by `POST /api/files/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}
