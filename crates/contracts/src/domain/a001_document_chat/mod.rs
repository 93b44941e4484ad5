//! Document chat wire types
//!
//! - aggregate.rs: ChatTurn, ChatRole, FileDescriptor
//! - request.rs: bodies sent to `/api/files/*`
//! - response.rs: bodies returned by `/api/files/*`

pub mod aggregate;
pub mod request;
pub mod response;

pub use aggregate::{ChatRole, ChatTurn, FileDescriptor};
pub use request::{ChatRequest, UploadFields};
pub use response::{ChatResponse, UploadResponse};
