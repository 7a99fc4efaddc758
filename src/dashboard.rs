//! The single owned state container behind the UI.
//!
//! [`Dashboard`] holds the active summary, the upload lifecycle and the
//! history list. All mutation goes through its methods; the async drivers
//! [`upload`] and [`refresh_history`] sequence them around network calls.

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};
use tracing::{debug, info};

use crate::api::{DashboardApi, UploadFile};
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::history::HistoryReconciler;
use crate::model::{EquipmentSummary, HistoryEntry};
use crate::upload::{Submission, UploadController, UploadState};
use crate::view_model::{self, DashboardView};

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    upload: UploadController,
    history: HistoryReconciler,
    active: Option<EquipmentSummary>,
    /// Bumped every time `active` is replaced.
    revision: u64,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            history: HistoryReconciler::new(config.history_limit),
            ..Default::default()
        }
    }

    pub fn active(&self) -> Option<&EquipmentSummary> {
        self.active.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn upload_state(&self) -> &UploadState {
        self.upload.state()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload.is_uploading()
    }

    /// Reason the last upload failed, while that failure is current.
    pub fn upload_failure(&self) -> Option<&str> {
        self.upload.failure()
    }

    pub fn history(&self) -> &HistoryReconciler {
        &self.history
    }

    /// View-models for the active summary.
    pub fn view(&self) -> DashboardView {
        view_model::build(self.active())
    }

    pub fn submit(&mut self, file: Option<&UploadFile>) -> Submission {
        self.upload.submit(file)
    }

    /// Commit an upload outcome. Returns true when a history refresh should follow.
    ///
    /// A failure leaves the active summary as it was.
    pub fn finish_upload(&mut self, result: Result<EquipmentSummary, DashboardError>) -> bool {
        match self.upload.resolve(result).cloned() {
            Some(summary) => {
                self.activate(summary);
                self.history.mark_selected(None);
                true
            }
            None => false,
        }
    }

    pub fn begin_history_refresh(&mut self) {
        self.history.begin_refresh();
    }

    pub fn finish_history_refresh(&mut self, result: Result<Vec<HistoryEntry>, DashboardError>) -> bool {
        self.history.apply_refresh(result)
    }

    /// Make `entry`'s summary the active one. The entry itself is left untouched.
    pub fn select(&mut self, entry: &HistoryEntry) {
        info!("Showing upload {} from history", entry.filename);
        let index = self.history.entries().iter().position(|e| e == entry);
        self.activate(entry.summary.clone());
        self.history.mark_selected(index);
    }

    /// Select the `index`-th history entry, newest first.
    pub fn select_at(&mut self, index: usize) -> bool {
        match self.history.get(index).cloned() {
            Some(entry) => {
                self.select(&entry);
                true
            }
            None => false,
        }
    }

    fn activate(&mut self, summary: EquipmentSummary) {
        self.active = Some(summary);
        self.revision += 1;
    }
}

/// Somewhere a [`Dashboard`] lives and can be mutated in place.
///
/// Returns `None` if the backing storage is gone (a disposed signal).
pub trait DashboardStore {
    fn update_dashboard<R>(&self, f: impl FnOnce(&mut Dashboard) -> R) -> Option<R>;
}

impl DashboardStore for RefCell<Dashboard> {
    fn update_dashboard<R>(&self, f: impl FnOnce(&mut Dashboard) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl DashboardStore for RwSignal<Dashboard> {
    fn update_dashboard<R>(&self, f: impl FnOnce(&mut Dashboard) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Run one upload through the lifecycle.
///
/// The summary is committed before the follow-up history refresh is issued,
/// so the dashboard never shows refreshed history ahead of the new summary.
pub async fn upload<A, S>(api: &A, store: &S, file: Option<UploadFile>) -> Submission
where
    A: DashboardApi + ?Sized,
    S: DashboardStore,
{
    let submission = store
        .update_dashboard(|d| d.submit(file.as_ref()))
        .unwrap_or(Submission::EmptySelection);
    let (true, Some(file)) = (submission.is_started(), file) else {
        debug!("Upload not started: {:?}", submission);
        return submission;
    };

    let result = api.upload(file).await;
    let refresh = store
        .update_dashboard(|d| d.finish_upload(result))
        .unwrap_or(false);
    if refresh {
        refresh_history(api, store).await;
    }
    submission
}

/// Best-effort history reload. Failures are logged and otherwise ignored.
pub async fn refresh_history<A, S>(api: &A, store: &S)
where
    A: DashboardApi + ?Sized,
    S: DashboardStore,
{
    store.update_dashboard(Dashboard::begin_history_refresh);
    let result = api.history().await;
    store.update_dashboard(|d| d.finish_history_refresh(result));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: u64) -> EquipmentSummary {
        let mut s = EquipmentSummary {
            total_equipment: total,
            avg_flowrate: total as f64 * 1.5,
            ..Default::default()
        };
        s.type_distribution.insert("Pump".into(), total);
        s
    }

    #[test]
    fn test_failed_upload_keeps_active_summary() {
        let mut dashboard = Dashboard::default();
        dashboard.submit(Some(&UploadFile::from_bytes("a.csv", vec![])));
        assert!(dashboard.finish_upload(Ok(summary(3))));
        let before = dashboard.view();
        let revision = dashboard.revision();

        dashboard.submit(Some(&UploadFile::from_bytes("b.csv", vec![])));
        assert!(!dashboard.finish_upload(Err(DashboardError::Transport("reset".into()))));

        assert_eq!(dashboard.view(), before);
        assert_eq!(dashboard.revision(), revision);
        assert!(matches!(dashboard.upload_state(), UploadState::Failed(_)));
        assert_eq!(dashboard.upload_failure(), Some("Request failed: reset"));
    }

    #[test]
    fn test_upload_failure_cleared_by_next_submit() {
        let mut dashboard = Dashboard::default();
        assert_eq!(dashboard.upload_failure(), None);

        dashboard.submit(Some(&UploadFile::from_bytes("a.csv", vec![])));
        dashboard.finish_upload(Err(DashboardError::Status(500)));
        assert_eq!(dashboard.upload_failure(), Some("Server responded with status 500"));

        dashboard.submit(Some(&UploadFile::from_bytes("a.csv", vec![])));
        assert_eq!(dashboard.upload_failure(), None);
        dashboard.finish_upload(Ok(summary(1)));
        assert_eq!(dashboard.upload_failure(), None);
    }

    #[test]
    fn test_select_at_out_of_range() {
        let mut dashboard = Dashboard::default();
        assert!(!dashboard.select_at(0));
        assert!(dashboard.active().is_none());
    }

    #[test]
    fn test_new_uses_configured_history_limit() {
        let config = DashboardConfig {
            history_limit: 2,
            ..Default::default()
        };
        let mut dashboard = Dashboard::new(&config);
        let entries = (0..4)
            .map(|i| HistoryEntry {
                filename: format!("{}.csv", i),
                uploaded_at: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH,
                summary: summary(i),
            })
            .collect();
        dashboard.finish_history_refresh(Ok(entries));
        assert_eq!(dashboard.history().entries().len(), 2);
    }
}
