//! Scripted in-memory transport for orchestrator tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use contracts::domain::a001_document_chat::{
    ChatRequest, ChatResponse, FileDescriptor, UploadFields, UploadResponse,
};
use futures::channel::oneshot;

use super::transport::{ApiError, FileBlob, ProgressFn, Transport};

#[derive(Clone, Debug)]
pub struct MemoryFile {
    pub name: String,
    pub size: u64,
}

impl MemoryFile {
    pub fn new(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            size,
        }
    }
}

impl FileBlob for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Upload { name: String, session_id: String },
    Chat(ChatRequest),
    List(String),
}

#[derive(Default)]
pub struct FakeTransport {
    pub uploads: RefCell<VecDeque<Result<UploadResponse, ApiError>>>,
    pub chats: RefCell<VecDeque<Result<ChatResponse, ApiError>>>,
    pub lists: RefCell<VecDeque<Result<Vec<FileDescriptor>, ApiError>>>,
    /// `(loaded, total)` ticks reported during each upload
    pub ticks: Vec<(u64, u64)>,
    pub calls: RefCell<Vec<Call>>,
    chat_gate: RefCell<Option<oneshot::Receiver<()>>>,
    pub panic_on_upload: Cell<bool>,
}

impl FakeTransport {
    pub fn upload_ok(self, file_id: &str, session_id: Option<&str>) -> Self {
        self.uploads.borrow_mut().push_back(Ok(UploadResponse {
            file_id: file_id.to_string(),
            session_id: session_id.map(str::to_string),
            filename: None,
            size: None,
            mime_type: None,
        }));
        self
    }

    pub fn upload_err(self, err: ApiError) -> Self {
        self.uploads.borrow_mut().push_back(Err(err));
        self
    }

    pub fn chat_ok(self, reply: &str) -> Self {
        self.chats.borrow_mut().push_back(Ok(ChatResponse {
            response: reply.to_string(),
        }));
        self
    }

    pub fn chat_err(self, err: ApiError) -> Self {
        self.chats.borrow_mut().push_back(Err(err));
        self
    }

    pub fn list(self, result: Result<Vec<FileDescriptor>, ApiError>) -> Self {
        self.lists.borrow_mut().push_back(result);
        self
    }

    pub fn with_ticks(mut self, ticks: &[(u64, u64)]) -> Self {
        self.ticks = ticks.to_vec();
        self
    }

    /// Hold the next chat request open until the returned sender fires.
    pub fn hold_chat(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.chat_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(*c)).count()
    }
}

pub fn is_upload(call: &Call) -> bool {
    matches!(call, Call::Upload { .. })
}

pub fn is_chat(call: &Call) -> bool {
    matches!(call, Call::Chat(_))
}

pub fn is_list(call: &Call) -> bool {
    matches!(call, Call::List(_))
}

pub fn descriptor(file_id: &str, filename: &str, size: u64) -> FileDescriptor {
    FileDescriptor {
        file_id: file_id.to_string(),
        filename: filename.to_string(),
        size,
        created_at: contracts::domain::a001_document_chat::aggregate::parse_timestamp(
            "2024-03-15T14:02:26Z",
        )
        .unwrap(),
        mime_type: None,
    }
}

impl Transport for FakeTransport {
    type File = MemoryFile;

    async fn upload(
        &self,
        file: &MemoryFile,
        fields: UploadFields,
        on_progress: ProgressFn,
    ) -> Result<UploadResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Upload {
            name: file.name.clone(),
            session_id: fields.session_id,
        });
        for (loaded, total) in &self.ticks {
            on_progress(*loaded, *total);
        }
        if self.panic_on_upload.get() {
            panic!("transport blew up");
        }
        self.uploads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted upload".to_string())))
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Chat(request.clone()));
        let gate = self.chat_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.chats
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted chat".to_string())))
    }

    async fn list_files(&self, session_id: &str) -> Result<Vec<FileDescriptor>, ApiError> {
        self.calls.borrow_mut().push(Call::List(session_id.to_string()));
        self.lists
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
