//! Document Chat - files of the current session

use leptos::prelude::*;
use thaw::*;

use super::super::registry::{self, FileRow};
use super::view_model::DocumentChatVm;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn FileList(vm: DocumentChatVm) -> impl IntoView {
    view! {
        <Show when=move || vm.state.with(registry::is_visible)>
            <div style="display: flex; flex-direction: column; gap: 4px; padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                <label class="form__label">"Uploaded files"</label>
                <For
                    each=move || vm.state.with(registry::rows)
                    key=|row: &FileRow| (row.file_id.clone(), row.selected, row.revision)
                    let:row
                >
                    {
                        let file_id = row.file_id.clone();
                        let enabled = row.enabled();
                        view! {
                            <Flex
                                justify=FlexJustify::SpaceBetween
                                align=FlexAlign::Center
                                style="padding: 8px; border-radius: 6px;"
                            >
                                <div style="flex: 1;">
                                    <div style="font-weight: 500;">{row.filename.clone()}</div>
                                    <div style="font-size: 13px; color: var(--colorNeutralForeground3);">
                                        {format!("{} • {}", row.size_label, row.created_label)}
                                    </div>
                                </div>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    disabled=!enabled
                                    on_click=move |_| vm.activate(file_id.clone())
                                >
                                    {(!enabled).then(|| icon("check"))}
                                    {row.button_label()}
                                </Button>
                            </Flex>
                        }
                    }
                </For>
            </div>
        </Show>
    }
}
