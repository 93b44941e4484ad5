//! Session/File context
//!
//! Holds the server-issued session id and the file currently active for chat.
//! Only the upload and file-selection paths mutate it.

/// Server-assigned session identifier
pub type SessionId = String;
/// Server-assigned file identifier
pub type FileId = String;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionContext {
    session_id: Option<SessionId>,
    file_id: Option<FileId>,
}

impl SessionContext {
    pub fn current_session(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn current_file(&self) -> Option<&str> {
        self.file_id.as_deref()
    }

    /// Session id as sent on the wire: empty string while unbound.
    pub fn session_or_empty(&self) -> &str {
        self.current_session().unwrap_or_default()
    }

    pub fn has_file(&self) -> bool {
        self.file_id.is_some()
    }

    /// Bind the session issued by the server.
    ///
    /// The upload response is the source of truth, so a differing id replaces the
    /// current one. Returns `true` when the bound session changed.
    pub fn bind_session(&mut self, id: &str) -> bool {
        if id.is_empty() || self.current_session() == Some(id) {
            return false;
        }
        if let Some(previous) = &self.session_id {
            log::warn!("session rotated by server: {} -> {}", previous, id);
        } else {
            log::info!("session bound: {}", id);
        }
        self.session_id = Some(id.to_string());
        true
    }

    /// Make `id` the active file. Returns `true` when the active file changed.
    pub fn select_file(&mut self, id: &str) -> bool {
        if self.current_file() == Some(id) {
            return false;
        }
        self.file_id = Some(id.to_string());
        true
    }

    pub fn is_active(&self, file_id: &str) -> bool {
        self.current_file() == Some(file_id)
    }
}
