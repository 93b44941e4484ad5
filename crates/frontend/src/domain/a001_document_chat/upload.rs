//! Upload orchestrator
//!
//! Validates the chosen file, sends it together with the current session id and
//! binds the returned session/file into the context.

use std::rc::Rc;

use contracts::domain::a001_document_chat::UploadFields;

use super::registry;
use super::state::{Action, MAX_UPLOAD_BYTES};
use super::store::StateStore;
use super::transport::{ApiError, FileBlob, ProgressFn, Transport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded { file_id: String },
    /// Over the size limit, nothing was sent
    Rejected(ApiError),
    /// Another upload is still in flight
    Ignored,
    Failed(ApiError),
}

pub fn validate_size(size: u64) -> Result<(), ApiError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ApiError::Validation {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Resets the upload UI when dropped, whichever way the upload ends.
struct SettleOnDrop<S: StateStore>(S);

impl<S: StateStore> Drop for SettleOnDrop<S> {
    fn drop(&mut self) {
        self.0.dispatch(Action::UploadSettled);
    }
}

pub async fn upload<S, T>(store: &S, transport: &T, file: &T::File) -> UploadOutcome
where
    S: StateStore,
    T: Transport,
{
    let name = file.name();
    let size = file.size();

    if let Err(err) = validate_size(size) {
        log::warn!("upload of {} rejected: {}", name, err);
        return UploadOutcome::Rejected(err);
    }
    if store.with_state(|state| state.upload.in_flight) {
        log::warn!("upload of {} ignored: another upload is in flight", name);
        return UploadOutcome::Ignored;
    }

    let fields =
        store.with_state(|state| UploadFields::new(state.context.current_session()));
    log::info!(
        "upload start: {} ({:.2} MB), session '{}'",
        name,
        size as f64 / (1024.0 * 1024.0),
        fields.session_id
    );

    let result = {
        store.dispatch(Action::UploadStarted);
        let _settle = SettleOnDrop(store.clone());

        let progress_store = store.clone();
        let on_progress: ProgressFn = Rc::new(move |loaded, total| {
            progress_store.dispatch(Action::UploadProgress { loaded, total });
        });

        let result = transport.upload(file, fields, on_progress).await;
        match &result {
            Ok(response) => {
                log::info!("upload done: {:?}", response);
                store.dispatch(Action::UploadSucceeded {
                    file_name: name.clone(),
                    file_id: response.file_id.clone(),
                    session_id: response.issued_session().map(str::to_string),
                });
            }
            Err(err) => {
                log::error!("upload of {} failed: {}", name, err);
                store.dispatch(Action::UploadFailed);
            }
        }
        result
    };

    match result {
        Ok(response) => {
            registry::refresh(store, transport).await;
            UploadOutcome::Uploaded {
                file_id: response.file_id,
            }
        }
        Err(err) => UploadOutcome::Failed(err),
    }
}
