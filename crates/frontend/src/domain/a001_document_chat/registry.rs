//! File registry: files uploaded in the current session and which one is active

use chrono::Local;
use contracts::domain::a001_document_chat::FileDescriptor;

use super::state::{switched_notice, Action, ChatState};
use super::store::StateStore;
use super::transport::Transport;
use crate::shared::date_utils::format_datetime;
use crate::shared::number_format::format_megabytes;

pub const SELECTED_LABEL: &str = "Selected";
pub const SELECT_LABEL: &str = "Select";

/// One rendered line of the file list
#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    pub file_id: String,
    pub filename: String,
    pub size_label: String,
    pub created_label: String,
    pub selected: bool,
    /// Registry revision the row was built from; part of the list key
    pub revision: u64,
}

impl FileRow {
    fn from_descriptor(file: &FileDescriptor, selected: bool, revision: u64) -> Self {
        Self {
            file_id: file.file_id.clone(),
            filename: file.filename.clone(),
            size_label: format_megabytes(file.size),
            created_label: format_datetime(&file.created_at.with_timezone(&Local)),
            selected,
            revision,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.selected {
            SELECTED_LABEL
        } else {
            SELECT_LABEL
        }
    }

    pub fn enabled(&self) -> bool {
        !self.selected
    }
}

pub fn rows(state: &ChatState) -> Vec<FileRow> {
    state
        .registry
        .files
        .iter()
        .map(|file| {
            let selected = state.context.is_active(&file.file_id);
            FileRow::from_descriptor(file, selected, state.registry.revision)
        })
        .collect()
}

pub fn is_visible(state: &ChatState) -> bool {
    !state.registry.files.is_empty()
}

/// Reload the list for the current session. A failed load keeps the previous list.
pub async fn refresh<S, T>(store: &S, transport: &T) -> bool
where
    S: StateStore,
    T: Transport,
{
    let session_id =
        store.with_state(|state| state.context.session_or_empty().to_string());
    match transport.list_files(&session_id).await {
        Ok(files) => {
            log::debug!("file list for '{}': {} entries", session_id, files.len());
            store.dispatch(Action::FilesListed(files));
            true
        }
        Err(err) => {
            log::error!("failed to load file list: {}", err);
            false
        }
    }
}

/// Make `file_id` the active file and refresh the list, even when it already was active.
pub async fn select_file<S, T>(store: &S, transport: &T, file_id: &str)
where
    S: StateStore,
    T: Transport,
{
    store.dispatch(Action::FileSelected(file_id.to_string()));
    refresh(store, transport).await;
}

/// Row "Select" control: switch the chat to `file_id` and announce it.
pub async fn activate<S, T>(store: &S, transport: &T, file_id: &str)
where
    S: StateStore,
    T: Transport,
{
    let (filename, already_active) = store.with_state(|state| {
        let filename = state
            .registry
            .files
            .iter()
            .find(|file| file.file_id == file_id)
            .map(|file| file.filename.clone());
        (filename, state.context.is_active(file_id))
    });
    let Some(filename) = filename else {
        log::warn!("select for unknown file {}", file_id);
        return;
    };

    store.dispatch(Action::FileSelected(file_id.to_string()));
    if !already_active {
        store.dispatch(Action::Notice(switched_notice(&filename)));
    }
    refresh(store, transport).await;
}
