//! Document Chat - View Component

use contracts::domain::a001_document_chat::ChatTurn;
use leptos::prelude::*;
use thaw::*;

use super::super::state::TranscriptItem;
use super::file_list::FileList;
use super::upload_panel::UploadPanel;
use super::view_model::DocumentChatVm;
use crate::shared::icons::icon;

fn transcript_key(item: &TranscriptItem) -> String {
    match item {
        TranscriptItem::Turn { index, .. } => index.to_string(),
        TranscriptItem::Typing => "typing".to_string(),
    }
}

fn render_turn(turn: ChatTurn) -> AnyView {
    let is_user = turn.is_user();
    view! {
        <div style=if is_user {
            "align-self: flex-end; max-width: 70%;"
        } else {
            "align-self: flex-start; max-width: 70%;"
        }>
            <div style=if is_user {
                "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
            } else {
                "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
            }>
                <div style="white-space: pre-wrap;">{turn.content}</div>
            </div>
        </div>
    }
    .into_any()
}

fn render_typing() -> AnyView {
    view! {
        <div style="align-self: flex-start;">
            <div style="background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px; color: var(--colorNeutralForeground3);">
                "•••"
            </div>
        </div>
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn DocumentChat() -> impl IntoView {
    let vm = DocumentChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    // Scroll to bottom whenever the transcript changes
    Effect::new(move |_| {
        vm.state.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let focus_input = Callback::new(move |_| {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    });

    view! {
        <div style="height: 100vh; display: flex; flex-direction: column; gap: 12px; padding: 20px; max-width: 900px; margin: 0 auto;">
            <h1 style="font-size: 24px; font-weight: bold;">"Chat with a document"</h1>

            <UploadPanel vm=vm on_uploaded=focus_input />
            <FileList vm=vm />

            // Messages area
            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
            >
                <For
                    each=move || vm.state.with(|s| s.transcript())
                    key=transcript_key
                    let:item
                >
                    {match item {
                        TranscriptItem::Turn { turn, .. } => render_turn(turn),
                        TranscriptItem::Typing => render_typing(),
                    }}
                </For>
            </div>

            // Input area
            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <textarea
                        node_ref=input_ref
                        rows="2"
                        placeholder="Ask something about the document... (Enter to send, Shift+Enter for a new line)"
                        style="width: 100%; min-height: 60px; max-height: 200px; resize: vertical;"
                        disabled=move || !vm.state.with(|s| s.context.has_file())
                        prop:value=move || vm.state.with(|s| s.draft.clone())
                        on:input=move |ev| vm.set_draft(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                vm.send();
                            }
                        }
                    ></textarea>
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.state.with(|s| s.can_chat()))
                    on_click=move |_| vm.send()
                >
                    {icon("send")}
                    " Send"
                </Button>
            </Flex>
        </div>
    }
}
