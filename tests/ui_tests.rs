//! UI automation tests using egui_kittest and AccessKit
//!
//! These drive the real app frame function and check navigation and
//! session state after simulated clicks.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use mockview::config::AppConfig;
use mockview::interview::{Phase, SessionConfig};
use mockview::models::{demo_listings, Attachment, InterviewResult, ManualEntry};
use mockview::navigation::{NavigationEvent, ScreenId};
use mockview::ui::MockviewApp;
use uuid::Uuid;

fn harness(app: MockviewApp) -> Harness<'static, MockviewApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(420.0, 820.0))
        .build_state(|ctx, app: &mut MockviewApp| app.ui(ctx), app)
}

fn manual_entry() -> ManualEntry {
    ManualEntry {
        job_title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        job_description: String::new(),
        resume: Attachment {
            name: "resume.pdf".to_string(),
            size_bytes: 2048,
            mime_type: "application/pdf".to_string(),
            locator: "/tmp/resume.pdf".to_string(),
        },
        cover_letter: "I have built payment APIs for three years and want to keep doing it.".to_string(),
        portfolio: None,
    }
}

fn app_in_interview() -> MockviewApp {
    let mut app = MockviewApp::with_config(AppConfig::default());
    app.dispatch(NavigationEvent::GoTo(ScreenId::Input));
    app.dispatch(NavigationEvent::ContinueToInterview(manual_entry()));
    app
}

#[test]
fn test_main_menu_opens_job_list() {
    let mut harness = harness(MockviewApp::with_config(AppConfig::default()));
    harness.run();

    harness.get_by_label("Browse job listings").click();
    harness.run();

    assert_eq!(harness.state().navigation().current_screen(), ScreenId::JobList);
}

#[test]
fn test_picking_a_listing_opens_its_detail() {
    let job = demo_listings()[1].clone();
    let mut app = MockviewApp::with_config(AppConfig::default());
    app.dispatch(NavigationEvent::GoTo(ScreenId::JobList));

    let mut harness = harness(app);
    harness.run();

    harness.get_by_label(&format!("View {}", job.title)).click();
    harness.run();

    let nav = harness.state().navigation();
    assert_eq!(nav.current_screen(), ScreenId::JobDetail);
    assert_eq!(nav.state().selected_job.as_ref().map(|j| j.id), Some(job.id));
}

#[test]
fn test_apply_leads_to_cover_letter() {
    let mut app = MockviewApp::with_config(AppConfig::default());
    app.dispatch(NavigationEvent::SelectJob(demo_listings()[0].clone()));
    app.dispatch(NavigationEvent::GoTo(ScreenId::JobDetail));

    let mut harness = harness(app);
    harness.run();

    harness.get_by_label("Apply with a mock interview").click();
    harness.run();

    assert_eq!(harness.state().navigation().current_screen(), ScreenId::CoverLetter);
}

#[test]
fn test_empty_cover_letter_does_not_start_interview() {
    let mut app = MockviewApp::with_config(AppConfig::default());
    app.dispatch(NavigationEvent::StartInterviewFromJob(demo_listings()[0].clone()));

    let mut harness = harness(app);
    harness.run();

    harness.get_by_label("Start interview").click();
    harness.run();

    let nav = harness.state().navigation();
    assert_eq!(nav.current_screen(), ScreenId::CoverLetter);
    assert!(nav.state().interview_input.is_none());
    let _error = harness.get_by_label("Please write a cover letter.");
}

#[test]
fn test_entering_interview_starts_a_session() {
    let mut harness = harness(app_in_interview());
    harness.run();

    let session = harness.state().session().expect("session");
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.input().position, "Backend Engineer");

    harness.get_by_label("Start answer").click();
    harness.run();

    assert_eq!(harness.state().session().unwrap().phase(), Phase::Prep);
}

#[test]
fn test_space_stops_recording_after_clicking_control() {
    let config = AppConfig::default().with_interview(SessionConfig::default().with_timing(0, 15, 180));
    let mut app = MockviewApp::with_config(config);
    app.dispatch(NavigationEvent::GoTo(ScreenId::Input));
    app.dispatch(NavigationEvent::ContinueToInterview(manual_entry()));

    let mut harness = harness(app);
    harness.run();

    harness.get_by_label("Start answer").click();
    harness.run();
    assert_eq!(harness.state().session().unwrap().phase(), Phase::Rec);

    harness.input_mut().events.push(egui::Event::Key {
        key: egui::Key::Space,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    });
    harness.run();

    assert_eq!(harness.state().session().unwrap().phase(), Phase::Done);
}

#[test]
fn test_skip_asks_before_advancing() {
    let mut harness = harness(app_in_interview());
    harness.run();

    harness.get_by_label("Skip question").click();
    harness.run();
    assert!(harness.state().session().unwrap().pending_prompt().is_some());

    harness.get_by_label("Skip").click();
    harness.run();

    let session = harness.state().session().unwrap();
    assert_eq!(session.index(), 1);
    assert!(session.record(0).unwrap().skipped);
}

#[test]
fn test_leaving_interview_tears_down_session() {
    let mut harness = harness(app_in_interview());
    harness.run();
    assert!(harness.state().session().is_some());

    harness.get_by_label("‹ Back").click();
    harness.run();

    assert_eq!(harness.state().navigation().current_screen(), ScreenId::Input);
    assert!(harness.state().session().is_none());
}

#[test]
fn test_results_start_over_returns_home() {
    let mut app = app_in_interview();
    app.dispatch(NavigationEvent::CompleteInterview(InterviewResult {
        session_id: Uuid::new_v4(),
        answers: Vec::new(),
        interview_input: Default::default(),
    }));
    assert!(app.session().is_none());

    let mut harness = harness(app);
    harness.run();

    harness.get_by_label("Start over").click();
    harness.run();

    let nav = harness.state().navigation();
    assert_eq!(nav.current_screen(), ScreenId::Main);
    assert!(nav.state().interview_result.is_none());
}
