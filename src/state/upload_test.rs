use super::*;

fn session(uid: &str) -> Session {
    Session { uid: uid.to_owned() }
}

fn assert_percent(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "progress {actual} != {expected}");
}

fn file(name: &str, size: u64) -> SelectedFile {
    SelectedFile { name: name.to_owned(), size }
}

fn progress(done: u64, total: u64) -> TransferEvent {
    TransferEvent::Progress { bytes_transferred: done, total_bytes: total }
}

fn started(name: &str) -> (UploadTracker, UploadPlan) {
    let mut tracker = UploadTracker::default();
    tracker.select_file(Some(file(name, 100)));
    let plan = tracker.begin(Some(&session("u1"))).unwrap();
    (tracker, plan)
}

// =============================================================
// Paths and percentages
// =============================================================

#[test]
fn object_path_namespaces_by_user() {
    assert_eq!(object_path("u1", "report.pdf"), "uploads/u1/report.pdf");
    assert_eq!(object_path("u1", "report.pdf"), object_path("u1", "report.pdf"));
    assert_ne!(object_path("u1", "report.pdf"), object_path("u2", "report.pdf"));
}

#[test]
fn progress_percent_maps_and_clamps() {
    assert_percent(progress_percent(0, 200), 0.0);
    assert_percent(progress_percent(50, 200), 25.0);
    assert_percent(progress_percent(200, 200), 100.0);
    assert_percent(progress_percent(300, 200), 100.0);
}

#[test]
fn progress_percent_empty_file_is_complete() {
    assert_percent(progress_percent(0, 0), 100.0);
}

// =============================================================
// Preconditions
// =============================================================

#[test]
fn begin_without_file_is_noop() {
    let mut tracker = UploadTracker::default();
    let before = tracker.clone();
    assert_eq!(tracker.begin(Some(&session("u1"))), None);
    assert_eq!(tracker, before);
}

#[test]
fn begin_without_session_is_noop() {
    let mut tracker = UploadTracker::default();
    tracker.select_file(Some(file("a.txt", 10)));
    let before = tracker.clone();
    assert_eq!(tracker.begin(None), None);
    assert_eq!(tracker, before);
}

#[test]
fn begin_derives_path_and_marks_in_flight() {
    let (tracker, plan) = started("photo.png");
    assert_eq!(plan.path, "uploads/u1/photo.png");
    assert_eq!(plan.attempt, tracker.attempt());
    assert!(tracker.is_in_flight());
    assert!(!tracker.can_upload());
}

// =============================================================
// Event application
// =============================================================

#[test]
fn progress_then_completion_ends_complete() {
    let (mut tracker, plan) = started("a.bin");
    assert_eq!(tracker.apply(plan.attempt, &progress(30, 100)), EventOutcome::Applied);
    assert_eq!(tracker.apply(plan.attempt, &progress(100, 100)), EventOutcome::Applied);
    assert_eq!(tracker.apply(plan.attempt, &TransferEvent::Completed), EventOutcome::Applied);
    assert_eq!(
        tracker.state,
        UploadState { progress_percent: 100.0, completed: true, error: None }
    );
    assert!(!tracker.can_upload());
}

#[test]
fn failure_after_progress_is_terminal() {
    let (mut tracker, plan) = started("a.bin");
    tracker.apply(plan.attempt, &progress(10, 100));
    tracker.apply(plan.attempt, &TransferEvent::Failed("network".to_owned()));
    let expected = UploadState {
        progress_percent: 10.0,
        completed: false,
        error: Some(UPLOAD_FAILED_MESSAGE.to_owned()),
    };
    assert_eq!(tracker.state, expected);

    assert_eq!(tracker.apply(plan.attempt, &progress(50, 100)), EventOutcome::AfterTerminal);
    assert_eq!(tracker.apply(plan.attempt, &TransferEvent::Completed), EventOutcome::AfterTerminal);
    assert_eq!(tracker.state, expected);
}

#[test]
fn failed_attempt_can_be_started_again() {
    let (mut tracker, plan) = started("a.bin");
    tracker.apply(plan.attempt, &TransferEvent::Failed("x".to_owned()));
    assert!(tracker.can_upload());
    let retry = tracker.begin(Some(&session("u1"))).unwrap();
    assert!(retry.attempt > plan.attempt);
    assert_eq!(tracker.state, UploadState::default());
}

#[test]
fn progress_never_decreases_within_attempt() {
    let (mut tracker, plan) = started("a.bin");
    tracker.apply(plan.attempt, &progress(60, 100));
    tracker.apply(plan.attempt, &progress(40, 100));
    assert_percent(tracker.state.progress_percent, 60.0);
}

#[test]
fn completion_without_final_progress_reports_full() {
    let (mut tracker, plan) = started("a.bin");
    tracker.apply(plan.attempt, &progress(70, 100));
    tracker.apply(plan.attempt, &TransferEvent::Completed);
    assert_percent(tracker.state.progress_percent, 100.0);
    assert!(tracker.state.completed);
}

// =============================================================
// Supersession
// =============================================================

#[test]
fn selecting_new_file_resets_completed_state() {
    let (mut tracker, plan) = started("a.bin");
    tracker.apply(plan.attempt, &TransferEvent::Completed);
    tracker.select_file(Some(file("b.bin", 5)));
    assert_eq!(
        tracker.state,
        UploadState { progress_percent: 0.0, completed: false, error: None }
    );
    assert!(tracker.can_upload());
}

#[test]
fn events_from_superseded_attempt_are_stale() {
    let (mut tracker, first) = started("a.bin");
    tracker.apply(first.attempt, &progress(20, 100));
    tracker.select_file(Some(file("b.bin", 5)));
    let second = tracker.begin(Some(&session("u1"))).unwrap();

    assert_eq!(tracker.apply(first.attempt, &progress(90, 100)), EventOutcome::Stale);
    assert_eq!(tracker.apply(first.attempt, &TransferEvent::Completed), EventOutcome::Stale);
    assert_eq!(tracker.state, UploadState::default());

    assert_eq!(tracker.apply(second.attempt, &progress(1, 5)), EventOutcome::Applied);
    assert_percent(tracker.state.progress_percent, 20.0);
}

#[test]
fn events_after_selection_without_restart_are_stale() {
    let (mut tracker, plan) = started("a.bin");
    tracker.select_file(Some(file("b.bin", 5)));
    assert_eq!(tracker.apply(plan.attempt, &TransferEvent::Failed("late".to_owned())), EventOutcome::Stale);
    assert!(tracker.state.error.is_none());
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn progress_bar_visible_only_mid_transfer() {
    let mut state = UploadState::default();
    assert!(!state.shows_progress_bar());
    state.progress_percent = 42.0;
    assert!(state.shows_progress_bar());
    state.progress_percent = 100.0;
    assert!(!state.shows_progress_bar());
}
