//! Document Chat - View Model

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use super::super::state::{Action, ChatState, PickedFile};
use super::super::store::StateStore;
use super::super::transport::FileBlob;
use super::super::upload::UploadOutcome;
use super::super::{chat, registry, upload};
use super::model::BrowserTransport;

#[derive(Clone, Copy)]
pub struct DocumentChatVm {
    pub state: RwSignal<ChatState>,
    /// Blob chosen in the file input; the state only keeps its name and size.
    pub picked: RwSignal<Option<File>, LocalStorage>,
}

impl DocumentChatVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ChatState::with_welcome()),
            picked: RwSignal::new_local(None),
        }
    }

    pub fn pick(&self, file: Option<File>) {
        let Some(file) = file else {
            return;
        };
        let picked = PickedFile {
            name: FileBlob::name(&file),
            size: FileBlob::size(&file),
        };
        if picked.exceeds_limit() {
            log::warn!("{} is over the upload limit ({} bytes)", picked.name, picked.size);
        }
        self.state.dispatch(Action::FilePicked(picked));
        self.picked.set(Some(file));
    }

    pub fn set_draft(&self, text: String) {
        self.state.dispatch(Action::DraftChanged(text));
    }

    /// Upload the picked file; `on_uploaded` runs after a successful upload.
    pub fn upload(&self, on_uploaded: impl FnOnce() + 'static) {
        let Some(file) = self.picked.get_untracked() else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            let outcome = upload::upload(&state, &BrowserTransport, &file).await;
            if matches!(outcome, UploadOutcome::Uploaded { .. }) {
                on_uploaded();
            }
        });
    }

    pub fn send(&self) {
        let message = self.state.with_untracked(|s| s.draft.clone());
        let state = self.state;
        spawn_local(async move {
            chat::send(&state, &BrowserTransport, &message).await;
        });
    }

    pub fn activate(&self, file_id: String) {
        let state = self.state;
        spawn_local(async move {
            registry::activate(&state, &BrowserTransport, &file_id).await;
        });
    }
}

impl Default for DocumentChatVm {
    fn default() -> Self {
        Self::new()
    }
}
