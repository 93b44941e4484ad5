//! Document Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: BrowserTransport (XHR upload, gloo-net JSON calls)
//! - view_model.rs: DocumentChatVm over the state signal
//! - view.rs: Main component DocumentChat
//! - upload_panel.rs / file_list.rs: sub-components

mod file_list;
mod model;
mod upload_panel;
mod view;
mod view_model;

pub use file_list::FileList;
pub use model::BrowserTransport;
pub use upload_panel::UploadPanel;
pub use view::DocumentChat;
pub use view_model::DocumentChatVm;
