//! Upload lifecycle.
//!
//! ```text
//! Idle ──submit──▶ Uploading ──ok──▶ Succeeded
//!                      │
//!                      └──err──▶ Failed
//! Succeeded | Failed ──submit──▶ Uploading
//! ```
//!
//! Only one upload can be in flight; a submit while `Uploading` is refused.

use tracing::{info, warn};

use crate::api::UploadFile;
use crate::error::DashboardError;
use crate::model::EquipmentSummary;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Succeeded(EquipmentSummary),
    /// Human-readable reason shown in the failure notice.
    Failed(String),
}

/// What happened to a submit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Started,
    /// No file was chosen. Ignored, not an error.
    EmptySelection,
    /// Another upload has not resolved yet.
    AlreadyUploading,
}

impl Submission {
    pub fn is_started(self) -> bool {
        self == Submission::Started
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadController {
    state: UploadState,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// True while the file input should be disabled.
    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading)
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            UploadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn submit(&mut self, file: Option<&UploadFile>) -> Submission {
        let Some(file) = file else {
            return Submission::EmptySelection;
        };
        if self.is_uploading() {
            warn!("Ignoring upload of {} while another upload is in flight", file.name);
            return Submission::AlreadyUploading;
        }
        info!("Uploading {}", file.name);
        self.state = UploadState::Uploading;
        Submission::Started
    }

    /// Apply the transport outcome. Returns the new summary on success.
    ///
    /// The outcome is applied even if it arrives late; there is no
    /// cancellation.
    pub fn resolve(
        &mut self,
        result: Result<EquipmentSummary, DashboardError>,
    ) -> Option<&EquipmentSummary> {
        match result {
            Ok(summary) => {
                info!(
                    "Upload succeeded with {} equipment records",
                    summary.equipment_list.len()
                );
                self.state = UploadState::Succeeded(summary);
                match &self.state {
                    UploadState::Succeeded(summary) => Some(summary),
                    _ => None,
                }
            }
            Err(e) => {
                warn!("Upload failed: {}", e);
                self.state = UploadState::Failed(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv() -> UploadFile {
        UploadFile::from_bytes("plant.csv", b"Equipment Name,Type\n".to_vec())
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let mut controller = UploadController::new();
        assert_eq!(controller.submit(None), Submission::EmptySelection);
        assert_eq!(controller.state(), &UploadState::Idle);
    }

    #[test]
    fn test_submit_enters_uploading() {
        let mut controller = UploadController::new();
        assert!(controller.submit(Some(&csv())).is_started());
        assert!(controller.is_uploading());
    }

    #[test]
    fn test_second_submit_refused_while_uploading() {
        let mut controller = UploadController::new();
        controller.submit(Some(&csv()));
        assert_eq!(controller.submit(Some(&csv())), Submission::AlreadyUploading);
        assert!(controller.is_uploading());
    }

    #[test]
    fn test_success_then_new_submit() {
        let mut controller = UploadController::new();
        controller.submit(Some(&csv()));
        let summary = EquipmentSummary {
            total_equipment: 4,
            ..Default::default()
        };
        let resolved = controller.resolve(Ok(summary.clone())).cloned();
        assert_eq!(resolved, Some(summary.clone()));
        assert_eq!(controller.state(), &UploadState::Succeeded(summary));

        assert!(controller.submit(Some(&csv())).is_started());
    }

    #[test]
    fn test_failure_records_reason() {
        let mut controller = UploadController::new();
        controller.submit(Some(&csv()));
        assert!(controller.resolve(Err(DashboardError::Status(500))).is_none());
        assert_eq!(controller.failure(), Some("Server responded with status 500"));
        assert!(!controller.is_uploading());

        // an empty selection after a failure leaves the failure visible
        controller.submit(None);
        assert!(controller.failure().is_some());
    }
}
