use leptos::prelude::*;

use equipment_dashboard::stats::{StatCard, StatKind};

use crate::app::DashboardContext;

#[component]
pub fn StatCardView(card: StatCard) -> impl IntoView {
    let class = match card.kind {
        StatKind::Count => "stat-card stat-count",
        StatKind::Flowrate => "stat-card stat-flowrate",
        StatKind::Pressure => "stat-card stat-pressure",
        StatKind::Temperature => "stat-card stat-temperature",
    };

    view! {
        <div class=class>
            <p class="stat-label">{card.label}</p>
            <p class="stat-value">{card.display()}</p>
        </div>
    }
}

/// Stat cards plus the upload failure notice.
#[component]
pub fn DashboardHeader() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let state = ctx.state;
    let dashboard_view = ctx.view;

    view! {
        <header class="dashboard-header">
            {move || {
                state.with(|d| d.upload_failure().map(|reason| view! {
                    <div class="upload-error">
                        <span class="status-text status-error">
                            {format!("Upload failed: {}", reason)}
                        </span>
                    </div>
                }))
            }}
            {move || {
                // keyed on the revision so the cards re-animate on every new summary
                let revision = state.with(|d| d.revision());
                view! {
                    <div class="stat-grid" data-revision=revision.to_string()>
                        {dashboard_view.get().stat_cards.into_iter().map(|card| {
                            view! { <StatCardView card=card /> }
                        }).collect::<Vec<_>>()}
                    </div>
                }
            }}
        </header>
    }
}
