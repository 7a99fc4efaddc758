mod app;
mod components;
mod pages;

use app::App;
use equipment_dashboard::{logging, DashboardConfig};
use leptos::prelude::*;

fn main() {
    let (config, config_error) = match DashboardConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    };
    logging::init(&config.log_filter);
    if let Some(e) = config_error {
        tracing::warn!("Ignoring dashboard config override: {}", e);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
