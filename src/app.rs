use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use equipment_dashboard::dashboard::{self, Dashboard};
use equipment_dashboard::{DashboardConfig, DashboardView, HttpApi};

use crate::components::sidebar::Sidebar;
use crate::components::stat_card::DashboardHeader;
use crate::pages::comparison::ComparisonPage;
use crate::pages::distribution::DistributionPage;
use crate::pages::overview::OverviewPage;

/// Shared dashboard state, provided at the root.
#[derive(Clone)]
pub struct DashboardContext {
    pub state: RwSignal<Dashboard>,
    /// View-models recomputed whenever the active summary changes.
    pub view: Memo<DashboardView>,
    pub config: DashboardConfig,
    /// One client for the whole app; handlers take cheap clones of it.
    pub api: StoredValue<HttpApi, LocalStorage>,
}

impl DashboardContext {
    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }
}

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let state = RwSignal::new(Dashboard::new(&config));
    let dashboard_view = Memo::new(move |_| state.with(Dashboard::view));
    let api = StoredValue::new_local(HttpApi::new(&config));
    let ctx = DashboardContext {
        state,
        view: dashboard_view,
        config,
        api,
    };
    provide_context(ctx.clone());

    // Initial history load; may interleave with an upload
    let api = ctx.api();
    spawn_local(async move {
        dashboard::refresh_history(&api, &state).await;
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <DashboardHeader />
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=OverviewPage />
                        <Route path=path!("/distribution") view=DistributionPage />
                        <Route path=path!("/comparison") view=ComparisonPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
