use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::{Chart, Project, ProjectUpdate};
use crate::state::dashboard::PendingEdits;
use crate::state::toast::ToastKind;
use crate::util::color::Rgba;

// =============================================================
// Fakes
// =============================================================

/// In-memory backend: stores the project and applies updates to it.
struct FakeApi {
    project: RefCell<Option<Project>>,
    fail_update: bool,
    fail_fetch: Cell<bool>,
    updates: RefCell<Vec<(i64, ProjectUpdate)>>,
}

impl FakeApi {
    fn with_project(project: Project) -> Self {
        Self {
            project: RefCell::new(Some(project)),
            fail_update: false,
            fail_fetch: Cell::new(false),
            updates: RefCell::new(Vec::new()),
        }
    }

    fn missing() -> Self {
        Self {
            project: RefCell::new(None),
            fail_update: false,
            fail_fetch: Cell::new(false),
            updates: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi {
    async fn fetch_public_dashboard(&self, name: &str) -> Result<Project, ApiError> {
        let _ = name;
        if self.fail_fetch.get() {
            return Err(ApiError::Network("down".to_owned()));
        }
        self.project.borrow().clone().ok_or(ApiError::NotFound)
    }

    async fn fetch_project(&self, project_id: i64) -> Result<Project, ApiError> {
        let _ = project_id;
        self.project.borrow().clone().ok_or(ApiError::NotFound)
    }

    async fn update_project(&self, project_id: i64, update: &ProjectUpdate) -> Result<Project, ApiError> {
        self.updates.borrow_mut().push((project_id, update.clone()));
        if self.fail_update {
            return Err(ApiError::Validation("rejected".to_owned()));
        }
        let mut guard = self.project.borrow_mut();
        let project = guard.as_mut().ok_or(ApiError::NotFound)?;
        project.background_color = Some(update.background_color.clone());
        project.title_color = Some(update.title_color.clone());
        project.dashboard_title = Some(update.dashboard_title.clone());
        Ok(project.clone())
    }
}

struct FakeProbe(Result<bool, ApiError>);

#[async_trait(?Send)]
impl AuthorizationProbe for FakeProbe {
    async fn can_edit(&self, project_id: i64) -> Result<bool, ApiError> {
        let _ = project_id;
        self.0.clone()
    }
}

fn sample_project() -> Project {
    Project {
        id: 1,
        team_id: 3,
        name: "Ops".to_owned(),
        dashboard_title: None,
        background_color: None,
        title_color: None,
        charts: vec![Chart {
            id: 10,
            public: true,
            draft: false,
            chart_size: 4,
            name: None,
            kind: None,
            payload: serde_json::Map::new(),
        }],
    }
}

fn cells() -> (RefCell<DashboardState>, RefCell<ToastState>) {
    (RefCell::new(DashboardState::default()), RefCell::new(ToastState::default()))
}

// =============================================================
// load
// =============================================================

#[test]
fn load_sets_project_and_editor_when_probe_allows() {
    let controller = DashboardController::new(FakeApi::with_project(sample_project()), FakeProbe(Ok(true)));
    let (state, toasts) = cells();
    block_on(controller.load("ops", &state, &toasts)).unwrap();

    let state = state.borrow();
    assert!(!state.loading);
    assert!(state.editor_visible);
    assert!(state.is_saved);
    assert_eq!(state.project.as_ref().map(|p| p.id), Some(1));
    assert!(toasts.borrow().items.is_empty());
}

#[test]
fn load_with_denied_probe_hides_edit_controls() {
    let controller = DashboardController::new(FakeApi::with_project(sample_project()), FakeProbe(Ok(false)));
    let (state, toasts) = cells();
    block_on(controller.load("ops", &state, &toasts)).unwrap();

    assert!(!state.with_state(|s| s.editor_visible));
    assert!(!state.with_state(DashboardState::show_save));
    assert!(state.with_state(DashboardState::show_body));
}

#[test]
fn load_swallows_probe_errors() {
    let probe = FakeProbe(Err(ApiError::Network("offline".to_owned())));
    let controller = DashboardController::new(FakeApi::with_project(sample_project()), probe);
    let (state, toasts) = cells();
    assert!(block_on(controller.load("ops", &state, &toasts)).is_ok());
    assert!(!state.borrow().editor_visible);
    assert!(toasts.borrow().items.is_empty());
}

#[test]
fn load_failure_toasts_and_leaves_project_empty() {
    let controller = DashboardController::new(FakeApi::missing(), FakeProbe(Ok(true)));
    let (state, toasts) = cells();
    let result = block_on(controller.load("nope", &state, &toasts));

    assert_eq!(result, Err(DashboardError::Fetch(ApiError::NotFound)));
    assert!(state.borrow().project.is_none());
    assert!(!state.borrow().editor_visible);
    let toasts = toasts.borrow();
    let latest = toasts.latest().unwrap();
    assert_eq!(latest.kind, ToastKind::Error);
    assert_eq!(latest.message, LOAD_FAILED_MESSAGE);
}

#[test]
fn load_of_other_dashboard_drops_previous_edit_rights() {
    let (state, toasts) = cells();
    let mine = DashboardController::new(FakeApi::with_project(sample_project()), FakeProbe(Ok(true)));
    block_on(mine.load("mine", &state, &toasts)).unwrap();
    state.borrow_mut().begin_edit_title();
    assert!(state.borrow().editor_visible);

    let mut other = sample_project();
    other.id = 2;
    let theirs = DashboardController::new(FakeApi::with_project(other), FakeProbe(Ok(false)));
    block_on(theirs.load("theirs", &state, &toasts)).unwrap();

    let snapshot = state.borrow();
    assert_eq!(snapshot.project.as_ref().map(|p| p.id), Some(2));
    assert!(!snapshot.editor_visible);
    assert!(!snapshot.editing_title);
    assert!(!snapshot.show_save());
}

#[test]
fn load_after_failed_probe_does_not_keep_earlier_rights() {
    let (state, toasts) = cells();
    let mine = DashboardController::new(FakeApi::with_project(sample_project()), FakeProbe(Ok(true)));
    block_on(mine.load("mine", &state, &toasts)).unwrap();

    let offline = FakeProbe(Err(ApiError::Network("offline".to_owned())));
    let theirs = DashboardController::new(FakeApi::with_project(sample_project()), offline);
    block_on(theirs.load("theirs", &state, &toasts)).unwrap();
    assert!(!state.borrow().editor_visible);
}

// =============================================================
// save
// =============================================================

#[test]
fn saved_flag_holds_when_refresh_after_save_fails() {
    let controller = DashboardController::new(FakeApi::with_project(sample_project()), FakeProbe(Ok(true)));
    let (state, toasts) = cells();
    block_on(controller.load("ops", &state, &toasts)).unwrap();
    state.borrow_mut().set_background_color(Rgba::new(10, 20, 30, 1.0));
    controller.api.fail_fetch.set(true);

    let result = block_on(controller.save("ops", &state, &toasts));

    assert_eq!(result, Err(DashboardError::Fetch(ApiError::Network("down".to_owned()))));
    let snapshot = state.borrow();
    let project = snapshot.project.as_ref().unwrap();
    assert_eq!(project.background_color.as_deref(), Some("rgba(10,20,30,1)"));
    assert_eq!(project.charts.len(), 1);
    assert_eq!(snapshot.edits, PendingEdits::from_project(project));
    assert!(snapshot.is_saved);
    assert!(!snapshot.save_loading);
    assert!(snapshot.editor_visible);
}

#[test]
fn save_persists_background_and_refreshes() {
    let controller = DashboardController::new(FakeApi::with_project(sample_project()), FakeProbe(Ok(true)));
    let (state, toasts) = cells();
    block_on(controller.load("ops", &state, &toasts)).unwrap();

    state.borrow_mut().set_background_color(Rgba::new(10, 20, 30, 1.0));
    assert!(!state.borrow().is_saved);

    block_on(controller.save("ops", &state, &toasts)).unwrap();

    let snapshot = state.borrow();
    assert!(snapshot.is_saved);
    assert!(!snapshot.save_loading);
    assert_eq!(
        snapshot.project.as_ref().and_then(|p| p.background_color.as_deref()),
        Some("rgba(10,20,30,1)")
    );
    assert_eq!(snapshot.edits.background_color, "rgba(10,20,30,1)");
    assert_eq!(toasts.borrow().latest().map(|t| t.kind), Some(ToastKind::Success));
    assert_eq!(toasts.borrow().latest().map(|t| t.message.as_str()), Some(SAVE_SUCCEEDED_MESSAGE));
}

#[test]
fn save_then_load_reflects_saved_background() {
    let controller = DashboardController::new(FakeApi::with_project(sample_project()), FakeProbe(Ok(true)));
    let (state, toasts) = cells();
    block_on(controller.load("ops", &state, &toasts)).unwrap();
    state.borrow_mut().set_background_color(Rgba::new(10, 20, 30, 1.0));
    block_on(controller.save("ops", &state, &toasts)).unwrap();

    let (fresh, fresh_toasts) = cells();
    block_on(controller.load("ops", &fresh, &fresh_toasts)).unwrap();
    assert_eq!(fresh.borrow().edits.background_color, "rgba(10,20,30,1)");
    assert!(fresh.borrow().is_saved);
}

#[test]
fn save_sends_all_pending_fields() {
    let controller = DashboardController::new(FakeApi::with_project(sample_project()), FakeProbe(Ok(true)));
    let (state, toasts) = cells();
    block_on(controller.load("ops", &state, &toasts)).unwrap();
    state.borrow_mut().commit_edit_title("Ops board");
    state.borrow_mut().toggle_title_color();
    block_on(controller.save("ops", &state, &toasts)).unwrap();

    let updates = controller.api.updates.borrow();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, 1);
    assert_eq!(updates[0].1.dashboard_title, "Ops board");
    assert_eq!(updates[0].1.title_color, "black");
    assert_eq!(updates[0].1.background_color, crate::util::color::DEFAULT_BACKGROUND);
}

#[test]
fn rejected_save_keeps_unsaved_edits() {
    let mut api = FakeApi::with_project(sample_project());
    api.fail_update = true;
    let controller = DashboardController::new(api, FakeProbe(Ok(true)));
    let (state, toasts) = cells();
    block_on(controller.load("ops", &state, &toasts)).unwrap();
    state.borrow_mut().commit_edit_title("Unsaved");

    let result = block_on(controller.save("ops", &state, &toasts));

    assert_eq!(result, Err(DashboardError::Save(ApiError::Validation("rejected".to_owned()))));
    let snapshot = state.borrow();
    assert_eq!(snapshot.edits.dashboard_title, "Unsaved");
    assert!(!snapshot.is_saved);
    assert!(!snapshot.save_loading);
    assert_eq!(snapshot.project.as_ref().and_then(|p| p.dashboard_title.clone()), None);
    assert_eq!(toasts.borrow().latest().map(|t| t.message.as_str()), Some(SAVE_FAILED_MESSAGE));
}

#[test]
fn save_before_load_is_rejected_without_request() {
    let controller = DashboardController::new(FakeApi::with_project(sample_project()), FakeProbe(Ok(true)));
    let (state, toasts) = cells();
    let result = block_on(controller.save("ops", &state, &toasts));
    assert_eq!(result, Err(DashboardError::NotLoaded));
    assert!(controller.api.updates.borrow().is_empty());
    assert!(toasts.borrow().items.is_empty());
}
