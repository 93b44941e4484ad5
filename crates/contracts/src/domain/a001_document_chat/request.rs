use serde::{Deserialize, Serialize};

use super::aggregate::ChatTurn;

/// Multipart field carrying the file blob
pub const UPLOAD_FIELD_FILE: &str = "file";
/// Multipart field carrying the session id (empty when no session yet)
pub const UPLOAD_FIELD_SESSION_ID: &str = "session_id";

/// Non-file fields of the `/api/files/upload` multipart body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFields {
    pub session_id: String,
}

impl UploadFields {
    pub fn new(session_id: Option<&str>) -> Self {
        Self {
            session_id: session_id.unwrap_or_default().to_string(),
        }
    }
}

/// Body of `POST /api/files/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// History preceding the new turn, followed by the new user turn
    pub messages: Vec<ChatTurn>,
    pub file_id: String,
    pub session_id: String,
}
