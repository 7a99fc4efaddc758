//! Recent uploads, newest first.
//!
//! Clicking an entry makes its stored summary the active one without
//! another round trip to the server.

use leptos::prelude::*;

use crate::app::DashboardContext;

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let state = ctx.state;
    let limit = ctx.config.history_limit;

    view! {
        <div class="history-panel">
            <h4 class="history-title">{format!("Upload History (Last {})", limit)}</h4>

            {move || {
                state.with(|d| {
                    let history = d.history();
                    if history.is_loading() && history.entries().is_empty() {
                        view! { <p class="history-loading">"Loading history..."</p> }.into_any()
                    } else if history.entries().is_empty() {
                        view! { <p class="history-empty">"No previous uploads"</p> }.into_any()
                    } else {
                        let selected = history.selected();
                        view! {
                            <ul class="history-list">
                                {history.entries().iter().enumerate().map(|(index, entry)| {
                                    let filename = entry.filename.clone();
                                    let date = entry.uploaded_label();
                                    let active = selected == Some(index);
                                    view! {
                                        <li
                                            class="history-item"
                                            class:history-item-active=active
                                            on:click=move |_| {
                                                state.update(|d| {
                                                    d.select_at(index);
                                                });
                                            }
                                        >
                                            <span class="history-filename">{filename}</span>
                                            <span class="history-date">{date}</span>
                                        </li>
                                    }
                                }).collect::<Vec<_>>()}
                            </ul>
                        }.into_any()
                    }
                })
            }}
        </div>
    }
}
