use leptos::prelude::*;

use crate::components::history_panel::HistoryPanel;
use crate::components::upload_button::UploadButton;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Equipment Dashboard"</h1>
                <p class="sidebar-subtitle">"Chemical Equipment Telemetry"</p>
            </div>
            <UploadButton />
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Overview"</a>
                </li>
                <li class="nav-item">
                    <a href="/distribution" class="nav-link">"Distribution"</a>
                </li>
                <li class="nav-item">
                    <a href="/comparison" class="nav-link">"Comparison"</a>
                </li>
            </ul>
            <HistoryPanel />
        </nav>
    }
}
