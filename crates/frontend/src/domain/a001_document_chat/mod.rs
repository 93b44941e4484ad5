//! Document chat
//!
//! Structure:
//! - context.rs: SessionContext (session id + active file)
//! - state.rs: ChatState, Action, reduce
//! - store.rs: StateStore over a Leptos signal or a plain cell
//! - transport.rs: Transport trait and ApiError
//! - upload.rs / chat.rs / registry.rs: orchestrators
//! - ui/: browser transport and Leptos views

pub mod chat;
pub mod context;
pub mod registry;
pub mod state;
pub mod store;
pub mod transport;
pub mod ui;
pub mod upload;

#[cfg(test)]
mod testing;
