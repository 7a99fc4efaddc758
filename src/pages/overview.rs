use leptos::prelude::*;

use crate::app::DashboardContext;
use crate::components::charts::{Bar, BarChart, RadarChartView};

#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let dashboard_view = ctx.view;

    view! {
        <div class="page overview-page">
            {move || {
                let view_model = dashboard_view.get();
                if view_model.is_empty() {
                    view! { <EmptyState /> }.into_any()
                } else {
                    view! {
                        <div class="chart-grid">
                            <BarChart
                                title="Equipment Type Distribution"
                                bars=Bar::from_counts(&view_model.bar)
                            />
                            <RadarChartView
                                title="Performance Comparison (Top 5)"
                                chart=view_model.radar
                            />
                            <BarChart
                                title="Average Equipment Parameters"
                                bars=Bar::from_values(&view_model.averages)
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>"No data yet"</h2>
            <p class="page-description">
                "Upload a CSV of equipment readings, or pick a previous upload from the history."
            </p>
        </div>
    }
}
