use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;

use async_trait::async_trait;
use futures::executor::block_on;

use equipment_dashboard::api::decode;
use equipment_dashboard::dashboard::{self, Dashboard};
use equipment_dashboard::view_model;
use equipment_dashboard::{
    DashboardApi, DashboardError, EquipmentSummary, HistoryEntry, Submission, UploadFile,
    UploadState,
};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}

fn upload_response() -> EquipmentSummary {
    decode(&fixture("upload_response.json")).expect("Failed to parse upload fixture")
}

fn history_response() -> Vec<HistoryEntry> {
    decode(&fixture("history.json")).expect("Failed to parse history fixture")
}

fn csv() -> Option<UploadFile> {
    Some(UploadFile::from_bytes(
        "sample_equipment_data.csv",
        b"Equipment Name,Type,Flowrate,Pressure,Temperature\n".to_vec(),
    ))
}

/// Scripted summary service that also records what the dashboard looked
/// like when each call arrived.
struct FakeApi<'a> {
    store: &'a RefCell<Dashboard>,
    uploads: RefCell<VecDeque<Result<EquipmentSummary, DashboardError>>>,
    histories: RefCell<VecDeque<Result<Vec<HistoryEntry>, DashboardError>>>,
    calls: RefCell<Vec<String>>,
}

impl<'a> FakeApi<'a> {
    fn new(store: &'a RefCell<Dashboard>) -> Self {
        Self {
            store,
            uploads: RefCell::new(VecDeque::new()),
            histories: RefCell::new(VecDeque::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn with_upload(self, result: Result<EquipmentSummary, DashboardError>) -> Self {
        self.uploads.borrow_mut().push_back(result);
        self
    }

    fn with_history(self, result: Result<Vec<HistoryEntry>, DashboardError>) -> Self {
        self.histories.borrow_mut().push_back(result);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi<'_> {
    async fn upload(&self, file: UploadFile) -> Result<EquipmentSummary, DashboardError> {
        let uploading = self.store.borrow().is_uploading();
        self.calls
            .borrow_mut()
            .push(format!("upload {} uploading={}", file.name, uploading));
        self.uploads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(DashboardError::Transport("no scripted upload".into())))
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, DashboardError> {
        let has_summary = self.store.borrow().active().is_some();
        self.calls
            .borrow_mut()
            .push(format!("history active={}", has_summary));
        self.histories
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(DashboardError::Transport("no scripted history".into())))
    }
}

#[test]
fn test_upload_end_to_end() {
    let store = RefCell::new(Dashboard::default());
    let api = FakeApi::new(&store)
        .with_upload(Ok(upload_response()))
        .with_history(Ok(history_response()));

    let submission = block_on(dashboard::upload(&api, &store, csv()));
    assert_eq!(submission, Submission::Started);

    let dashboard = store.borrow();
    let view = dashboard.view();

    let flow = view
        .stat_cards
        .iter()
        .find(|c| c.label == "Avg Flowrate")
        .expect("Avg Flowrate card missing");
    assert_eq!(flow.display(), "12.5 L/min");

    assert_eq!(view.table_rows.len(), 2);
    assert_eq!(view.table_rows[0].name, "P-1");
    assert_eq!(view.table_rows[1].name, "V-1");
    assert_eq!(view.radar.labels, vec!["P-1", "V-1"]);
    assert_eq!(view.bar.labels, vec!["Pump", "Valve"]);
    assert_eq!(view.bar.values, vec![1, 1]);

    assert!(matches!(dashboard.upload_state(), UploadState::Succeeded(_)));
    assert_eq!(dashboard.history().entries().len(), 3);
}

#[test]
fn test_history_refresh_follows_committed_summary() {
    let store = RefCell::new(Dashboard::default());
    let api = FakeApi::new(&store)
        .with_upload(Ok(upload_response()))
        .with_history(Ok(history_response()));

    block_on(dashboard::upload(&api, &store, csv()));

    assert_eq!(
        api.calls(),
        vec![
            "upload sample_equipment_data.csv uploading=true".to_string(),
            "history active=true".to_string(),
        ]
    );
}

#[test]
fn test_failed_upload_leaves_dashboard_untouched() {
    let store = RefCell::new(Dashboard::default());
    let api = FakeApi::new(&store)
        .with_upload(Ok(upload_response()))
        .with_history(Ok(history_response()))
        .with_upload(Err(DashboardError::Status(502)));

    block_on(dashboard::upload(&api, &store, csv()));
    let before = view_model::build(store.borrow().active());

    block_on(dashboard::upload(&api, &store, csv()));

    let dashboard = store.borrow();
    assert_eq!(dashboard.view(), before);
    assert_eq!(
        dashboard.upload_state(),
        &UploadState::Failed("Server responded with status 502".to_string())
    );
    // no refresh after a failure
    assert_eq!(api.calls().len(), 3);
    assert_eq!(dashboard.history().entries().len(), 3);
}

#[test]
fn test_empty_selection_makes_no_request() {
    let store = RefCell::new(Dashboard::default());
    let api = FakeApi::new(&store);

    let submission = block_on(dashboard::upload(&api, &store, None));

    assert_eq!(submission, Submission::EmptySelection);
    assert!(api.calls().is_empty());
    assert_eq!(store.borrow().upload_state(), &UploadState::Idle);
}

#[test]
fn test_submit_refused_while_uploading() {
    let store = RefCell::new(Dashboard::default());
    store.borrow_mut().submit(csv().as_ref());
    let api = FakeApi::new(&store);

    let submission = block_on(dashboard::upload(&api, &store, csv()));

    assert_eq!(submission, Submission::AlreadyUploading);
    assert!(api.calls().is_empty());
    assert!(store.borrow().is_uploading());
}

#[test]
fn test_history_failure_is_silent() {
    let store = RefCell::new(Dashboard::default());
    let api = FakeApi::new(&store)
        .with_history(Ok(history_response()))
        .with_history(Err(DashboardError::Transport("connection refused".into())));

    block_on(dashboard::refresh_history(&api, &store));
    block_on(dashboard::refresh_history(&api, &store));

    let dashboard = store.borrow();
    assert_eq!(dashboard.history().entries(), history_response().as_slice());
    assert!(!dashboard.history().is_loading());
    assert_eq!(dashboard.upload_state(), &UploadState::Idle);
    assert!(dashboard.active().is_none());
}

#[test]
fn test_upload_succeeds_even_if_history_refresh_fails() {
    let store = RefCell::new(Dashboard::default());
    let api = FakeApi::new(&store).with_upload(Ok(upload_response()));

    block_on(dashboard::upload(&api, &store, csv()));

    let dashboard = store.borrow();
    assert_eq!(dashboard.active(), Some(&upload_response()));
    assert!(dashboard.history().entries().is_empty());
}

#[test]
fn test_select_is_idempotent() {
    let store = RefCell::new(Dashboard::default());
    let api = FakeApi::new(&store).with_history(Ok(history_response()));
    block_on(dashboard::refresh_history(&api, &store));

    let entry = store.borrow().history().get(0).cloned().expect("history entry");

    store.borrow_mut().select(&entry);
    let first = store.borrow().view();
    store.borrow_mut().select(&entry);
    let second = store.borrow().view();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(store.borrow().history().get(0), Some(&entry));
    assert_eq!(store.borrow().history().selected(), Some(0));
}

#[test]
fn test_select_nth_entry_activates_its_summary() {
    let store = RefCell::new(Dashboard::default());
    let api = FakeApi::new(&store).with_history(Ok(history_response()));
    block_on(dashboard::refresh_history(&api, &store));
    let entries = history_response();

    for (n, entry) in entries.iter().enumerate() {
        assert!(store.borrow_mut().select_at(n));
        assert_eq!(store.borrow().active(), Some(&entry.summary), "entry {}", n);
    }
    assert_eq!(store.borrow().revision(), entries.len() as u64);
}

#[test]
fn test_history_fixture_order_and_shape() {
    let entries = history_response();
    assert!(entries.len() <= 5);
    let names: Vec<&str> = entries.iter().map(|e| e.filename.as_str()).collect();
    assert_eq!(
        names,
        vec!["reactor_hall_b.csv", "sample_equipment_data.csv", "empty_line.csv"]
    );
    assert!(entries.windows(2).all(|w| w[0].uploaded_at >= w[1].uploaded_at));

    let empty = view_model::build(Some(&entries[2].summary));
    assert!(empty.bar.is_empty() && empty.radar.is_empty() && empty.table_rows.is_empty());
    // the averages chart still renders for a summary without records
    assert!(!empty.is_empty());
    assert_eq!(empty.averages.values, vec![0.0, 0.0, 0.0]);
    assert_eq!(empty.stat_cards[1].display(), "0.0 L/min");
}

#[test]
fn test_upload_after_selection_clears_selection() {
    let store = RefCell::new(Dashboard::default());
    let api = FakeApi::new(&store)
        .with_history(Ok(history_response()))
        .with_upload(Ok(upload_response()));
    block_on(dashboard::refresh_history(&api, &store));
    store.borrow_mut().select_at(0);

    block_on(dashboard::upload(&api, &store, csv()));

    let dashboard = store.borrow();
    assert_eq!(dashboard.history().selected(), None);
    assert_eq!(dashboard.active(), Some(&upload_response()));
}
