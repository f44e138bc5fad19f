//! Integration tests for the EcoLogic terminal client.
//!
//! Drives the app through its command handler the way the event loop
//! does, with a tempdir-backed client store.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use ecologic::app::{App, Outcome};
use ecologic::cli::Config;
use ecologic::ticker::AppEvent;
use ecologic_core::dashboard::{Modal, View};
use ecologic_core::facts::FALLBACK_FACTS;
use ecologic_core::features::teacher::TeacherTab;
use ecologic_core::i18n::Language;
use ecologic_core::registry::FeatureId;
use ecologic_core::session::Role;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn test_config(dir: &TempDir) -> Config {
    Config {
        data_dir: dir.path().to_path_buf(),
        language: None,
        tick_interval_ms: 20,
        api_key: None,
    }
}

fn new_app(dir: &TempDir) -> (App, mpsc::Receiver<AppEvent>) {
    App::new(&test_config(dir)).expect("app builds")
}

async fn cmd(app: &mut App, line: &str) {
    assert_eq!(app.handle_command(line).await.unwrap(), Outcome::Continue);
}

async fn login_student(app: &mut App) {
    cmd(app, "login aarav@school.example hunter2").await;
}

// =============================================================================
// SESSION TESTS
// =============================================================================

#[tokio::test]
async fn login_mounts_student_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);

    login_student(&mut app).await;

    assert!(app.session.is_authenticated());
    assert_eq!(app.session.role(), Some(Role::Student));
    assert!(app.student.is_some());
    assert!(app.teacher.is_none());
}

#[tokio::test]
async fn login_with_missing_password_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);

    assert!(app.handle_command("login aarav@school.example").await.is_err());
    assert!(!app.session.is_authenticated());
    assert!(app.student.is_none());
}

#[tokio::test]
async fn register_as_teacher_mounts_teacher_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);

    cmd(&mut app, "register priya priya@school.example pw teacher yes").await;

    assert_eq!(app.session.role(), Some(Role::Teacher));
    assert!(app.teacher.is_some());
}

#[tokio::test]
async fn register_without_terms_leaves_session_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);

    assert!(app
        .handle_command("register priya priya@school.example pw teacher no")
        .await
        .is_err());
    assert!(!app.session.is_authenticated());
}

#[tokio::test]
async fn logout_unmounts_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);

    login_student(&mut app).await;
    cmd(&mut app, "logout").await;

    assert!(!app.session.is_authenticated());
    assert!(app.student.is_none());
}

// =============================================================================
// FACT PROVIDER TESTS
// =============================================================================

#[tokio::test]
async fn dashboard_mount_delivers_fallback_fact() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = new_app(&dir);

    login_student(&mut app).await;

    let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("fact arrives")
        .expect("channel open");
    let AppEvent::Fact(fact) = event else {
        panic!("expected a fact event, got {event:?}");
    };
    assert!(FALLBACK_FACTS.contains(&fact.as_str()));
}

// =============================================================================
// NAVIGATION TESTS
// =============================================================================

#[tokio::test]
async fn reserved_feature_shows_coming_soon_and_keeps_pointer() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);
    login_student(&mut app).await;

    cmd(&mut app, "open lessons").await;

    let state = app.student.as_ref().unwrap();
    assert_eq!(state.dash.view(), View::Dashboard);
    assert!(matches!(state.dash.modal(), Some(Modal::ComingSoon(_))));

    cmd(&mut app, "dismiss").await;
    assert!(app.student.as_ref().unwrap().dash.modal().is_none());
}

#[tokio::test]
async fn open_and_back_navigate_features() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);
    login_student(&mut app).await;

    cmd(&mut app, "open shop").await;
    assert_eq!(
        app.student.as_ref().unwrap().dash.view(),
        View::Feature(FeatureId::Shop)
    );

    cmd(&mut app, "back").await;
    assert_eq!(app.student.as_ref().unwrap().dash.view(), View::Dashboard);
    cmd(&mut app, "back").await; // Idempotent
    assert_eq!(app.student.as_ref().unwrap().dash.view(), View::Dashboard);
}

#[tokio::test]
async fn unknown_feature_key_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);
    login_student(&mut app).await;

    cmd(&mut app, "open warpdrive").await;
    let state = app.student.as_ref().unwrap();
    assert_eq!(state.dash.view(), View::Dashboard);
    assert!(state.dash.modal().is_none());
}

// =============================================================================
// ECO POINTS TESTS
// =============================================================================

#[tokio::test]
async fn challenge_submission_awards_points_once() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);
    login_student(&mut app).await;

    cmd(&mut app, "open challenges").await;
    cmd(&mut app, "submit 0").await; // Tree Plantation Drive, 100
    assert_eq!(app.student.as_ref().unwrap().dash.ledger().balance(), 1350);

    cmd(&mut app, "submit 0").await; // Idempotent
    assert_eq!(app.student.as_ref().unwrap().dash.ledger().balance(), 1350);
}

#[tokio::test]
async fn purchase_deducts_points_and_gates_on_balance() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);
    login_student(&mut app).await;

    cmd(&mut app, "open shop").await;
    // Bee Hotel costs 400; three fit in the 1250 starting balance.
    for _ in 0..3 {
        cmd(&mut app, "dismiss").await;
        cmd(&mut app, "buy 5").await;
    }
    assert_eq!(app.student.as_ref().unwrap().dash.ledger().balance(), 50);

    cmd(&mut app, "dismiss").await;
    cmd(&mut app, "buy 5").await;
    let state = app.student.as_ref().unwrap();
    assert_eq!(state.dash.ledger().balance(), 50); // Untouched
    assert!(matches!(state.dash.modal(), Some(Modal::Info(_))));
}

#[tokio::test(start_paused = true)]
async fn quiz_completion_awards_score_once() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);
    login_student(&mut app).await;

    cmd(&mut app, "open quiz").await;
    // All three correct answers: 20 + 20 + 10.
    cmd(&mut app, "answer 1").await;
    cmd(&mut app, "answer 1").await;
    cmd(&mut app, "answer 0").await;

    let state = app.student.as_ref().unwrap();
    assert!(state.quiz.as_ref().unwrap().is_finished());
    assert_eq!(state.dash.ledger().balance(), 1300);

    // A stray extra answer changes nothing.
    cmd(&mut app, "answer 0").await;
    assert_eq!(app.student.as_ref().unwrap().dash.ledger().balance(), 1300);
}

// =============================================================================
// PET TESTS
// =============================================================================

#[tokio::test]
async fn adoption_starts_ticker_and_feeding_replenishes() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = new_app(&dir);
    login_student(&mut app).await;

    cmd(&mut app, "open petRescue").await;
    cmd(&mut app, "adopt 0").await; // Rusty

    // Adoption returns to the dashboard, per the rescue flow.
    assert_eq!(app.student.as_ref().unwrap().dash.view(), View::Dashboard);

    // Drain events until two decay ticks have been applied.
    let mut ticks = 0;
    while ticks < 2 {
        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("event arrives")
            .expect("channel open");
        if event == AppEvent::PetTick {
            ticks += 1;
        }
        app.handle_event(event);
    }

    let pet = app.student.as_ref().unwrap().dash.pet().unwrap();
    assert_eq!(pet.hunger, 98);
    assert_eq!(pet.thirst, 96);

    // Pet Food resets hunger only.
    cmd(&mut app, "open shop").await;
    cmd(&mut app, "buy 0").await;
    let pet = app.student.as_ref().unwrap().dash.pet().unwrap();
    assert_eq!(pet.hunger, 100);
    assert_eq!(pet.thirst, 96);
}

#[tokio::test]
async fn second_adoption_keeps_existing_pet() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);
    login_student(&mut app).await;

    cmd(&mut app, "open petRescue").await;
    cmd(&mut app, "adopt 0").await;
    cmd(&mut app, "open petRescue").await;
    cmd(&mut app, "adopt 1").await;

    let pet = app.student.as_ref().unwrap().dash.pet().unwrap();
    assert_eq!(pet.name, "Rusty");
}

// =============================================================================
// STORAGE TESTS
// =============================================================================

#[tokio::test]
async fn journal_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let (mut app, _rx) = new_app(&dir);
        login_student(&mut app).await;
        cmd(&mut app, "open journaling").await;
        cmd(&mut app, "write Planted a mango sapling today").await;
        assert_eq!(app.journal.len(), 1);
    }

    let (app, _rx) = new_app(&dir);
    assert_eq!(app.journal.len(), 1);
    assert_eq!(app.journal.entries()[0].text, "Planted a mango sapling today");
}

#[tokio::test]
async fn language_preference_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let (mut app, _rx) = new_app(&dir);
        cmd(&mut app, "lang hi").await;
        assert_eq!(app.language, Language::Hindi);
    }

    let (app, _rx) = new_app(&dir);
    assert_eq!(app.language, Language::Hindi);
}

// =============================================================================
// TEACHER DASHBOARD TESTS
// =============================================================================

#[tokio::test]
async fn teacher_reviews_submissions_idempotently() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);

    cmd(&mut app, "register priya priya@school.example pw teacher yes").await;
    cmd(&mut app, "tab verify").await;
    cmd(&mut app, "approve 1").await;
    cmd(&mut app, "reject 1").await; // Already reviewed: no-op

    let teacher = app.teacher.as_ref().unwrap();
    assert_eq!(teacher.tab(), TeacherTab::Verify);
    assert_eq!(
        teacher.submissions()[0].status,
        ecologic_core::features::teacher::SubmissionStatus::Approved
    );
}

#[tokio::test]
async fn teacher_creates_challenge_with_validation() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = new_app(&dir);

    cmd(&mut app, "register priya priya@school.example pw teacher yes").await;
    cmd(&mut app, "tab manage").await;

    assert!(app.handle_command("create | no title | 50").await.is_err());
    cmd(&mut app, "create River Cleanup | Join the weekend cleanup. | 120").await;

    let teacher = app.teacher.as_ref().unwrap();
    assert_eq!(teacher.authored().len(), 1);
    assert_eq!(teacher.authored()[0].points, 120);
}
