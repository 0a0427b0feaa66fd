use std::time::{Duration, Instant};

use dealdesk::{
    ActionKind, Config, StoreError, Surface, SurfaceConfig, SurfaceError, SurfaceState, View,
};

use crate::support::{self, Task, TaskKind, TaskState};

fn view(surface: SurfaceConfig) -> View<Task> {
    View::new(support::store(), surface)
}

fn done(t: &mut Task) {
    t.state = TaskState::Done;
}

#[test]
fn close_returns_to_idle_from_any_state() {
    let mut view = view(SurfaceConfig::modal());

    view.select("T-1").unwrap();
    view.close().unwrap();
    assert!(view.surface().is_idle());

    view.select("T-1").unwrap();
    view.edit().unwrap();
    view.close().unwrap();
    assert!(view.surface().is_idle());

    view.select("T-1").unwrap();
    view.request_remove().unwrap();
    view.close().unwrap();
    assert!(view.surface().is_idle());
    assert!(view.store().contains("T-1"));
}

#[test]
fn selecting_again_replaces_the_selection() {
    let mut view = view(SurfaceConfig::modal());

    view.select("T-1").unwrap();
    view.select("T-4").unwrap();

    assert_eq!(view.surface().selected_id(), Some("T-4"));
    assert_eq!(view.selected().map(|t| t.id.as_str()), Some("T-4"));
}

#[test]
fn select_replaces_an_open_draft() {
    let mut view = view(SurfaceConfig::modal());
    view.select("T-1").unwrap();
    view.edit().unwrap();
    view.draft_mut().unwrap().title = "Changed".into();

    view.select("T-2").unwrap();

    assert!(view.surface().draft().is_none());
    assert_eq!(view.store().get("T-1").unwrap().title, "Fix login redirect");
}

#[test]
fn unknown_id_leaves_state_alone() {
    let mut view = view(SurfaceConfig::modal());
    view.select("T-1").unwrap();

    let err = view.select("T-404").unwrap_err();

    assert!(matches!(err, SurfaceError::Store(StoreError::NotFound { .. })));
    assert_eq!(view.surface().selected_id(), Some("T-1"));
}

#[test]
fn row_click_uses_the_visible_list() {
    let mut view = view(SurfaceConfig::modal());
    view.set_facet("type", "Bug");

    view.select_visible(1).unwrap();
    assert_eq!(view.surface().selected_id(), Some("T-5"));

    let err = view.select_visible(2).unwrap_err();
    assert_eq!(err, SurfaceError::NoSuchRow { index: 2, len: 2 });
}

#[test]
fn modal_save_writes_and_closes() {
    let mut view = view(SurfaceConfig::modal());
    view.select("T-2").unwrap();
    view.edit().unwrap();
    view.draft_mut().unwrap().title = "Dark mode everywhere".into();

    view.save().unwrap();

    assert!(view.surface().is_idle());
    assert_eq!(view.store().get("T-2").unwrap().title, "Dark mode everywhere");
}

#[test]
fn drawer_stays_open_with_fresh_data() {
    let mut view = view(SurfaceConfig::drawer());
    view.select("T-2").unwrap();

    view.act(done).unwrap();

    assert_eq!(view.surface().selected_id(), Some("T-2"));
    assert_eq!(view.selected().unwrap().state, TaskState::Done);
}

#[test]
fn failed_save_keeps_the_form_open() {
    let mut view = view(SurfaceConfig::modal());
    view.select("T-2").unwrap();
    view.edit().unwrap();
    view.draft_mut().unwrap().title.clear();

    let err = view.save().unwrap_err();

    assert!(matches!(err, SurfaceError::Store(StoreError::Validation { .. })));
    assert!(matches!(view.surface().state(), SurfaceState::Editing { .. }));
    assert_eq!(view.store().get("T-2").unwrap().title, "Dark mode");
}

#[test]
fn create_with_taken_id_keeps_the_draft() {
    let mut view = view(SurfaceConfig::modal());
    let draft = Task::new("T-1", "Copy", "Erin", TaskState::Todo, TaskKind::Chore);
    view.compose(draft).unwrap();

    let err = view.save().unwrap_err();

    assert!(matches!(err, SurfaceError::Store(StoreError::DuplicateId { .. })));
    assert_eq!(view.surface().draft().unwrap().title, "Copy");
    assert_eq!(view.store().len(), 6);
}

#[test]
fn removal_waits_for_confirmation() {
    let mut view = view(SurfaceConfig::drawer());
    view.select("T-3").unwrap();

    view.request_remove().unwrap();
    assert!(matches!(view.surface().state(), SurfaceState::Confirming { .. }));
    assert!(view.store().contains("T-3"));

    view.confirm().unwrap();
    assert!(view.surface().is_idle());
    assert!(!view.store().contains("T-3"));
}

#[test]
fn confirm_without_request_is_rejected() {
    let mut view = view(SurfaceConfig::modal());
    view.select("T-3").unwrap();

    let err = view.confirm().unwrap_err();

    assert_eq!(
        err,
        SurfaceError::InvalidTransition {
            state: "viewing",
            action: "confirm",
        }
    );
    assert!(view.store().contains("T-3"));
}

#[test]
fn latency_defers_the_write_until_polled() {
    let config = SurfaceConfig::drawer().with_latency(Duration::from_millis(200));
    let mut view = view(config);
    view.select("T-1").unwrap();

    view.act(done).unwrap();
    let pending = view.surface().pending().unwrap();
    assert_eq!(pending.kind(), ActionKind::Patch);
    assert_eq!(pending.id(), Some("T-1"));
    let due = pending.due();

    assert_eq!(view.store().get("T-1").unwrap().state, TaskState::Todo);
    assert!(!view.poll_at(due - Duration::from_millis(1)).unwrap());
    assert_eq!(view.store().get("T-1").unwrap().state, TaskState::Todo);

    assert!(view.poll_at(due).unwrap());
    assert_eq!(view.store().get("T-1").unwrap().state, TaskState::Done);
    assert_eq!(view.surface().selected_id(), Some("T-1"));
}

#[test]
fn nothing_else_is_accepted_while_pending() {
    let config = SurfaceConfig::modal().with_latency(Duration::from_secs(60));
    let mut view = view(config);
    view.select("T-1").unwrap();
    view.act(done).unwrap();

    assert_eq!(view.close(), Err(SurfaceError::Busy));
    assert_eq!(view.select("T-2"), Err(SurfaceError::Busy));
    assert_eq!(view.act(done), Err(SurfaceError::Busy));
    assert_eq!(view.request_remove(), Err(SurfaceError::Busy));
    assert!(!view.poll().unwrap());
    assert!(view.surface().is_pending());
}

#[test]
fn failed_pending_write_falls_back_to_the_form() {
    let config = SurfaceConfig::modal().with_latency(Duration::from_millis(10));
    let mut view = view(config);
    let draft = Task::new("T-9", "Fresh", "Erin", TaskState::Todo, TaskKind::Bug);
    view.compose(draft).unwrap();
    view.save().unwrap();

    // Someone else takes the id before the write lands
    view.store_mut()
        .add(Task::new("T-9", "Other", "Dave", TaskState::Done, TaskKind::Bug))
        .unwrap();

    let err = view.poll_at(Instant::now() + Duration::from_secs(1)).unwrap_err();

    assert!(matches!(err, SurfaceError::Store(StoreError::DuplicateId { .. })));
    assert!(matches!(view.surface().state(), SurfaceState::Creating { .. }));
    assert_eq!(view.surface().draft().unwrap().title, "Fresh");
}

#[test]
fn surface_mode_comes_from_config() {
    let config = Config::from_json(r#"{"surface":{"mode":"drawer"}}"#).unwrap();
    let mut view = View::from_seed(support::tasks(), &config).unwrap();
    view.select("T-4").unwrap();
    view.edit().unwrap();

    view.save().unwrap();

    assert_eq!(view.surface().selected_id(), Some("T-4"));
}

#[test]
fn default_surface_is_idle_modal() {
    let surface: Surface<Task> = Surface::default();
    assert!(surface.is_idle());
    assert_eq!(*surface.config(), SurfaceConfig::modal());
}
