//! Chat orchestrator
//!
//! One turn at a time: while a reply is pending further sends are skipped.

use contracts::domain::a001_document_chat::{ChatRequest, ChatTurn};

use super::state::Action;
use super::store::StateStore;
use super::transport::{ApiError, Transport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty message, no active file, or a turn already in progress
    Skipped,
    Replied,
    Failed(ApiError),
}

/// Request for `message` against the current state, or `None` when sending is not
/// allowed right now.
fn prepare(store: &impl StateStore, message: &str) -> Option<ChatRequest> {
    store.with_state(|state| {
        if message.is_empty() || !state.can_chat() {
            return None;
        }
        let file_id = state.context.current_file()?.to_string();
        let mut messages = state.history.clone();
        messages.push(ChatTurn::user(message));
        Some(ChatRequest {
            messages,
            file_id,
            session_id: state.context.session_or_empty().to_string(),
        })
    })
}

pub async fn send<S, T>(store: &S, transport: &T, message: &str) -> SendOutcome
where
    S: StateStore,
    T: Transport,
{
    let message = message.trim();
    let Some(request) = prepare(store, message) else {
        log::debug!("send skipped");
        return SendOutcome::Skipped;
    };

    store.dispatch(Action::TurnSubmitted(message.to_string()));
    log::debug!(
        "chat request: {} messages, file {}, session '{}'",
        request.messages.len(),
        request.file_id,
        request.session_id
    );

    match transport.chat(&request).await {
        Ok(response) => {
            store.dispatch(Action::ReplyReceived(response.response));
            SendOutcome::Replied
        }
        Err(err) => {
            log::error!("chat request failed: {}", err);
            store.dispatch(Action::ReplyFailed);
            SendOutcome::Failed(err)
        }
    }
}
