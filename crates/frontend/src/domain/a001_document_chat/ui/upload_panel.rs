//! Document Chat - upload controls

use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

use super::view_model::DocumentChatVm;
use crate::shared::icons::icon;
use crate::shared::number_format::format_megabytes;

#[component]
#[allow(non_snake_case)]
pub fn UploadPanel(vm: DocumentChatVm, on_uploaded: Callback<()>) -> impl IntoView {
    let picked_label = move || {
        vm.state.with(|s| {
            s.upload
                .picked
                .as_ref()
                .map(|f| (f.name.clone(), format!("({})", format_megabytes(f.size))))
        })
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 8px; padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
            <Flex align=FlexAlign::Center style="gap: 8px;">
                <input
                    type="file"
                    id="file-input"
                    disabled=move || vm.state.with(|s| s.upload.in_flight)
                    on:change=move |ev| {
                        let input = event_target::<HtmlInputElement>(&ev);
                        vm.pick(input.files().and_then(|files| files.get(0)));
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.state.with(|s| s.can_upload()))
                    on_click=move |_| vm.upload(move || on_uploaded.run(()))
                >
                    {icon("upload")}
                    " Upload"
                </Button>
            </Flex>

            {move || {
                picked_label()
                    .map(|(name, size)| {
                        view! {
                            <div style="font-size: 14px;">
                                {icon("document")}
                                " "
                                <span>{name}</span>
                                " "
                                <span style="color: var(--colorNeutralForeground3);">{size}</span>
                            </div>
                        }
                    })
            }}

            {move || {
                vm.state
                    .with(|s| s.validation_message())
                    .map(|msg| {
                        view! {
                            <div style="padding: 8px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                                <span style="color: var(--color-error);">{msg}</span>
                            </div>
                        }
                    })
            }}

            <Show when=move || vm.state.with(|s| s.upload.in_flight)>
                <div style="height: 6px; background: var(--colorNeutralBackground3); border-radius: 3px; overflow: hidden;">
                    <div style=move || {
                        format!(
                            "height: 100%; background: var(--colorBrandBackground); width: {}%;",
                            vm.state.with(|s| s.progress_percent()),
                        )
                    }></div>
                </div>
            </Show>
            <span style="font-size: 12px; color: var(--colorNeutralForeground3);">
                {move || vm.state.with(|s| s.upload.status.clone())}
            </span>
        </div>
    }
}
