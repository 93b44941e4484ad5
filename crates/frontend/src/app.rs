use crate::domain::a001_document_chat::ui::DocumentChat;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <DocumentChat />
        </ConfigProvider>
    }
}
