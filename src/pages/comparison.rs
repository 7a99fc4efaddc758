use leptos::prelude::*;

use crate::app::DashboardContext;
use crate::pages::overview::EmptyState;

/// Every uploaded unit with its raw readings, in upload order.
#[component]
pub fn ComparisonPage() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let dashboard_view = ctx.view;

    view! {
        <div class="page comparison-page">
            {move || {
                let rows = dashboard_view.get().table_rows;
                if rows.is_empty() {
                    return view! { <EmptyState /> }.into_any();
                }
                view! {
                    <div class="chart-card">
                        <h3 class="chart-title">"Equipment Comparison Table"</h3>
                        <table class="comparison-table">
                            <thead>
                                <tr>
                                    <th>"Equipment"</th>
                                    <th>"Type"</th>
                                    <th>"Flowrate"</th>
                                    <th>"Pressure"</th>
                                    <th>"Temp"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|row| {
                                    view! {
                                        <tr>
                                            <td class="cell-name">{row.name}</td>
                                            <td>{row.kind}</td>
                                            <td>{row.flowrate}</td>
                                            <td>{row.pressure}</td>
                                            <td>{row.temperature}</td>
                                        </tr>
                                    }
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
