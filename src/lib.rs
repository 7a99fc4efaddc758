pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod history;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod stats;
pub mod upload;
pub mod view_model;

pub use api::{DashboardApi, HttpApi, UploadFile};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardStore};
pub use error::DashboardError;
pub use model::{EquipmentRecord, EquipmentSummary, HistoryEntry};
pub use upload::{Submission, UploadState};
pub use view_model::DashboardView;
