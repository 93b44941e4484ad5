//! Document chat state and its reducer
//!
//! Every mutation goes through [`reduce`]; views only read [`ChatState`] and its
//! projections ([`ChatState::transcript`], [`ChatState::can_chat`], ...).

use contracts::domain::a001_document_chat::{ChatTurn, FileDescriptor};

use super::context::{FileId, SessionContext, SessionId};

/// Client-side upload limit: 10 MiB
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const WELCOME_NOTICE: &str = "Welcome! Please upload a file to get started.";
pub const UPLOAD_FAILED_NOTICE: &str =
    "Sorry, there was an error uploading your file. Please try again.";

pub fn uploaded_notice(file_name: &str) -> String {
    format!(
        "File \"{}\" uploaded successfully! You can now ask questions about it.",
        file_name
    )
}

pub fn switched_notice(file_name: &str) -> String {
    format!("Now chatting about \"{}\"", file_name)
}

/// File chosen in the picker, not yet uploaded
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub size: u64,
}

impl PickedFile {
    pub fn exceeds_limit(&self) -> bool {
        self.size > MAX_UPLOAD_BYTES
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub picked: Option<PickedFile>,
    pub in_flight: bool,
    /// Fraction in `[0, 1]`, never decreasing within one upload
    pub progress: f64,
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistryState {
    pub files: Vec<FileDescriptor>,
    /// Bumped on every list load and every selection; file list rows are keyed on it
    /// so a reselect rebuilds them.
    pub revision: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub context: SessionContext,
    pub history: Vec<ChatTurn>,
    pub draft: String,
    /// History length at the moment the pending user turn was appended.
    /// The typing placeholder renders right after that turn.
    pub reply_pending: Option<usize>,
    pub upload: UploadState,
    pub registry: RegistryState,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Notice(String),
    DraftChanged(String),
    FilePicked(PickedFile),
    UploadStarted,
    UploadProgress {
        loaded: u64,
        total: u64,
    },
    UploadSucceeded {
        file_name: String,
        file_id: FileId,
        session_id: Option<SessionId>,
    },
    UploadFailed,
    UploadSettled,
    TurnSubmitted(String),
    ReplyReceived(String),
    ReplyFailed,
    FilesListed(Vec<FileDescriptor>),
    FileSelected(FileId),
}

/// Item of the rendered conversation
#[derive(Clone, Debug, PartialEq)]
pub enum TranscriptItem {
    Turn { index: usize, turn: ChatTurn },
    Typing,
}

impl ChatState {
    pub fn with_welcome() -> Self {
        let mut state = Self::default();
        reduce(&mut state, Action::Notice(WELCOME_NOTICE.to_string()));
        state
    }

    pub fn can_upload(&self) -> bool {
        !self.upload.in_flight
            && self
                .upload
                .picked
                .as_ref()
                .is_some_and(|file| !file.exceeds_limit())
    }

    pub fn can_chat(&self) -> bool {
        self.context.has_file() && !self.upload.in_flight && self.reply_pending.is_none()
    }

    pub fn validation_message(&self) -> Option<String> {
        self.upload
            .picked
            .as_ref()
            .filter(|file| file.exceeds_limit())
            .map(|_| {
                format!(
                    "File size exceeds {}MB limit",
                    MAX_UPLOAD_BYTES / (1024 * 1024)
                )
            })
    }

    pub fn progress_percent(&self) -> u32 {
        (self.upload.progress * 100.0).round() as u32
    }

    /// History in render order with the typing placeholder spliced in.
    pub fn transcript(&self) -> Vec<TranscriptItem> {
        let mut items = Vec::with_capacity(self.history.len() + 1);
        for (index, turn) in self.history.iter().enumerate() {
            if self.reply_pending == Some(index) {
                items.push(TranscriptItem::Typing);
            }
            items.push(TranscriptItem::Turn {
                index,
                turn: turn.clone(),
            });
        }
        if self.reply_pending == Some(self.history.len()) {
            items.push(TranscriptItem::Typing);
        }
        items
    }

    fn push_turn(&mut self, turn: ChatTurn) {
        log::debug!("[chat] {}: {}", turn.role.as_str(), turn.content);
        self.history.push(turn);
    }
}

fn fraction(loaded: u64, total: u64) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (loaded as f64 / total as f64).clamp(0.0, 1.0)
}

pub fn reduce(state: &mut ChatState, action: Action) {
    match action {
        Action::Notice(text) => state.push_turn(ChatTurn::assistant(text)),
        Action::DraftChanged(text) => state.draft = text,
        Action::FilePicked(file) => state.upload.picked = Some(file),
        Action::UploadStarted => {
            state.upload.in_flight = true;
            state.upload.progress = 0.0;
            state.upload.status.clear();
        }
        Action::UploadProgress { loaded, total } => {
            if !state.upload.in_flight {
                return;
            }
            state.upload.progress = state.upload.progress.max(fraction(loaded, total));
            state.upload.status = format!("Uploading: {}%", state.progress_percent());
        }
        Action::UploadSucceeded {
            file_name,
            file_id,
            session_id,
        } => {
            if let Some(session_id) = session_id {
                state.context.bind_session(&session_id);
            }
            state.context.select_file(&file_id);
            state.registry.revision += 1;
            state.push_turn(ChatTurn::assistant(uploaded_notice(&file_name)));
        }
        Action::UploadFailed => {
            state.push_turn(ChatTurn::assistant(UPLOAD_FAILED_NOTICE));
        }
        Action::UploadSettled => {
            state.upload.in_flight = false;
            state.upload.progress = 0.0;
            state.upload.status.clear();
        }
        Action::TurnSubmitted(text) => {
            state.push_turn(ChatTurn::user(text));
            state.draft.clear();
            state.reply_pending = Some(state.history.len());
        }
        Action::ReplyReceived(text) => {
            state.reply_pending = None;
            state.push_turn(ChatTurn::assistant(text));
        }
        Action::ReplyFailed => state.reply_pending = None,
        Action::FilesListed(files) => {
            state.registry.files = files;
            state.registry.revision += 1;
        }
        Action::FileSelected(file_id) => {
            state.context.select_file(&file_id);
            state.registry.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picked(size: u64) -> PickedFile {
        PickedFile {
            name: "report.pdf".to_string(),
            size,
        }
    }

    #[test]
    fn test_welcome_is_an_assistant_turn() {
        let state = ChatState::with_welcome();
        assert_eq!(state.history, vec![ChatTurn::assistant(WELCOME_NOTICE)]);
        assert!(!state.can_chat());
    }

    #[test]
    fn test_pick_validation() {
        let mut state = ChatState::default();
        assert!(!state.can_upload());

        reduce(&mut state, Action::FilePicked(picked(MAX_UPLOAD_BYTES)));
        assert!(state.can_upload());
        assert!(state.validation_message().is_none());

        reduce(&mut state, Action::FilePicked(picked(MAX_UPLOAD_BYTES + 1)));
        assert!(!state.can_upload());
        assert_eq!(
            state.validation_message().as_deref(),
            Some("File size exceeds 10MB limit")
        );
    }

    #[test]
    fn test_progress_never_decreases() {
        let mut state = ChatState::default();
        reduce(&mut state, Action::UploadStarted);
        reduce(&mut state, Action::UploadProgress { loaded: 50, total: 100 });
        assert_eq!(state.progress_percent(), 50);
        assert_eq!(state.upload.status, "Uploading: 50%");

        reduce(&mut state, Action::UploadProgress { loaded: 20, total: 100 });
        assert_eq!(state.progress_percent(), 50);

        reduce(&mut state, Action::UploadProgress { loaded: 0, total: 0 });
        assert_eq!(state.progress_percent(), 100);

        reduce(&mut state, Action::UploadSettled);
        assert!(!state.upload.in_flight);
        assert_eq!(state.upload.progress, 0.0);
        assert!(state.upload.status.is_empty());
    }

    #[test]
    fn test_progress_ignored_outside_upload() {
        let mut state = ChatState::default();
        reduce(&mut state, Action::UploadProgress { loaded: 5, total: 10 });
        assert_eq!(state.upload.progress, 0.0);
        assert!(state.upload.status.is_empty());
    }

    #[test]
    fn test_upload_blocks_chat_and_reupload() {
        let mut state = ChatState::default();
        reduce(&mut state, Action::FilePicked(picked(10)));
        reduce(&mut state, Action::FileSelected("F0".to_string()));
        assert!(state.can_chat());

        reduce(&mut state, Action::UploadStarted);
        assert!(!state.can_upload());
        assert!(!state.can_chat());
    }

    #[test]
    fn test_upload_success_binds_context() {
        let mut state = ChatState::default();
        reduce(
            &mut state,
            Action::UploadSucceeded {
                file_name: "report.pdf".to_string(),
                file_id: "F1".to_string(),
                session_id: Some("S1".to_string()),
            },
        );
        assert_eq!(state.context.current_session(), Some("S1"));
        assert_eq!(state.context.current_file(), Some("F1"));
        assert_eq!(
            state.history.last(),
            Some(&ChatTurn::assistant(uploaded_notice("report.pdf")))
        );
    }

    #[test]
    fn test_typing_follows_pending_user_turn() {
        let mut state = ChatState::default();
        reduce(&mut state, Action::DraftChanged("hello".to_string()));
        reduce(&mut state, Action::TurnSubmitted("hello".to_string()));
        assert!(state.draft.is_empty());
        // a notice arriving while the reply is pending goes after the placeholder
        reduce(&mut state, Action::Notice("note".to_string()));

        let items = state.transcript();
        assert_eq!(items.len(), 3);
        assert!(matches!(&items[0], TranscriptItem::Turn { turn, .. } if turn.is_user()));
        assert_eq!(items[1], TranscriptItem::Typing);
        assert!(matches!(&items[2], TranscriptItem::Turn { index: 1, .. }));

        reduce(&mut state, Action::ReplyFailed);
        assert!(!state
            .transcript()
            .iter()
            .any(|item| *item == TranscriptItem::Typing));
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_selection_bumps_revision_even_when_unchanged() {
        let mut state = ChatState::default();
        reduce(&mut state, Action::FileSelected("F1".to_string()));
        let revision = state.registry.revision;
        reduce(&mut state, Action::FileSelected("F1".to_string()));
        assert_eq!(state.registry.revision, revision + 1);
        assert_eq!(state.context.current_file(), Some("F1"));
    }
}
