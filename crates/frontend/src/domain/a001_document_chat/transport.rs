//! HTTP capability the orchestrators depend on

use std::rc::Rc;

use contracts::domain::a001_document_chat::{
    ChatRequest, ChatResponse, FileDescriptor, UploadFields, UploadResponse,
};
use thiserror::Error;

pub const UPLOAD_PATH: &str = "/api/files/upload";
pub const CHAT_PATH: &str = "/api/files/chat";
pub const LIST_PATH: &str = "/api/files/list";

/// `GET` path listing the files of `session_id` (may be empty)
pub fn list_path(session_id: &str) -> String {
    format!(
        "{}?session_id={}",
        LIST_PATH,
        urlencoding::encode(session_id)
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Rejected before any request was made
    #[error("file is {size} bytes, limit is {limit} bytes")]
    Validation { size: u64, limit: u64 },
    /// No response from the server
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx response
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// A user-chosen file as the upload path sees it
pub trait FileBlob {
    fn name(&self) -> String;
    /// Size in bytes
    fn size(&self) -> u64;
}

/// Receives `(loaded, total)` byte counts while an upload is sent.
pub type ProgressFn = Rc<dyn Fn(u64, u64)>;

#[allow(async_fn_in_trait)]
pub trait Transport {
    type File: FileBlob;

    async fn upload(
        &self,
        file: &Self::File,
        fields: UploadFields,
        on_progress: ProgressFn,
    ) -> Result<UploadResponse, ApiError>;

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;

    async fn list_files(&self, session_id: &str) -> Result<Vec<FileDescriptor>, ApiError>;
}
