//! Local copy of the server's recent-uploads list.
//!
//! The server owns the history; a refresh replaces the local list wholesale.
//! Refreshing is a best-effort read: on failure the previous list stays in
//! place and the failure is only logged.

use tracing::{debug, warn};

use crate::error::DashboardError;
use crate::model::HistoryEntry;

/// The server keeps at most this many uploads.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct HistoryReconciler {
    entries: Vec<HistoryEntry>,
    limit: usize,
    /// Refreshes started but not yet applied.
    loading: u32,
    selected: Option<usize>,
}

impl Default for HistoryReconciler {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryReconciler {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
            loading: 0,
            selected: None,
        }
    }

    /// Entries newest first, as delivered.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn is_loading(&self) -> bool {
        self.loading > 0
    }

    /// Index of the entry whose summary is currently active, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn begin_refresh(&mut self) {
        self.loading += 1;
    }

    /// Replace the local list with a fetched one. Returns false if the fetch
    /// failed and the old list was kept.
    pub fn apply_refresh(&mut self, result: Result<Vec<HistoryEntry>, DashboardError>) -> bool {
        self.loading = self.loading.saturating_sub(1);
        match result {
            Ok(mut entries) => {
                if entries.len() > self.limit {
                    warn!(
                        "History endpoint returned {} entries, keeping the newest {}",
                        entries.len(),
                        self.limit
                    );
                    entries.truncate(self.limit);
                }
                debug!("History refreshed with {} entries", entries.len());
                self.entries = entries;
                // indexes refer to the old list
                self.selected = None;
                true
            }
            Err(e) => {
                warn!("Failed to fetch upload history: {}", e);
                false
            }
        }
    }

    pub(crate) fn mark_selected(&mut self, index: Option<usize>) {
        self.selected = index;
    }
}
