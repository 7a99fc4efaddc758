use leptos::prelude::*;

use crate::app::DashboardContext;
use crate::components::charts::DoughnutChart;
use crate::pages::overview::EmptyState;

#[component]
pub fn DistributionPage() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let dashboard_view = ctx.view;

    view! {
        <div class="page distribution-page">
            {move || {
                let view_model = dashboard_view.get();
                if view_model.doughnut.is_empty() {
                    view! { <EmptyState /> }.into_any()
                } else {
                    view! {
                        <DoughnutChart title="Type Distribution Analysis" chart=view_model.doughnut />
                    }.into_any()
                }
            }}
        </div>
    }
}
