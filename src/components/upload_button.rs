use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use equipment_dashboard::dashboard;
use equipment_dashboard::UploadFile;

use crate::app::DashboardContext;

/// CSV picker. Disabled while an upload is in flight.
#[component]
pub fn UploadButton() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let state = ctx.state;
    let uploading = move || state.with(|d| d.is_uploading());

    let on_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let file = input
            .files()
            .and_then(|files| files.get(0))
            .map(UploadFile::from_browser);
        // Clear so picking the same file again still fires a change event
        input.set_value("");

        let api = ctx.api();
        spawn_local(async move {
            let submission = dashboard::upload(&api, &state, file).await;
            if !submission.is_started() {
                return;
            }
            let failure = state.with_untracked(|d| d.upload_failure().map(str::to_string));
            if let Some(reason) = failure {
                notify_failure(&reason);
            }
        });
    };

    view! {
        <label class="upload-button" class:upload-button-busy=uploading>
            <input
                type="file"
                accept=".csv"
                class="upload-input"
                on:change=on_change
                disabled=uploading
            />
            {move || if uploading() { "Uploading..." } else { "Upload CSV" }}
        </label>
    }
}

fn notify_failure(reason: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let message = format!(
        "Failed to upload file: {}. Make sure the summary service is running.",
        reason
    );
    if let Err(e) = window.alert_with_message(&message) {
        warn!("Could not show upload failure alert: {:?}", e);
    }
}
