//! Navigation controller flows across several screens

use crossbeam_channel::Receiver;
use mockview::models::{
    demo_listings, Attachment, CoverLetterDraft, InterviewResult, JobApplication, JobListing,
    ManualEntry, Profile,
};
use mockview::navigation::{
    back_target, NavigationController, NavigationEvent, Notice, NoticeLevel, Notifier,
    RestartPolicy, ScreenId,
};
use uuid::Uuid;

fn controller(policy: RestartPolicy) -> (NavigationController, Receiver<Notice>) {
    let (notifier, rx) = Notifier::channel();
    (NavigationController::new(policy, notifier), rx)
}

fn file(name: &str) -> Attachment {
    Attachment {
        name: name.to_string(),
        size_bytes: 4096,
        mime_type: "application/pdf".to_string(),
        locator: format!("/home/user/{}", name),
    }
}

fn listing(title: &str, company: &str) -> JobListing {
    JobListing {
        title: title.to_string(),
        company: company.to_string(),
        ..demo_listings()[0].clone()
    }
}

fn empty_result() -> InterviewResult {
    InterviewResult {
        session_id: Uuid::new_v4(),
        answers: Vec::new(),
        interview_input: Default::default(),
    }
}

#[test]
fn test_back_undoes_forward_moves() {
    let forward = [
        (ScreenId::Main, ScreenId::Input),
        (ScreenId::Main, ScreenId::JobList),
        (ScreenId::Main, ScreenId::Profile),
        (ScreenId::JobList, ScreenId::JobDetail),
    ];
    for (from, to) in forward {
        let (mut nav, _rx) = controller(RestartPolicy::KeepProfile);
        nav.go_to(from);
        nav.go_to(to);
        nav.back();
        assert_eq!(nav.current_screen(), from, "back from {}", to);
    }
}

#[test]
fn test_back_from_every_screen() {
    let expected = [
        (ScreenId::Input, false, Some(ScreenId::Main)),
        (ScreenId::Interview, true, Some(ScreenId::CoverLetter)),
        (ScreenId::Interview, false, Some(ScreenId::Input)),
        (ScreenId::Results, false, Some(ScreenId::Interview)),
        (ScreenId::JobList, false, Some(ScreenId::Main)),
        (ScreenId::JobDetail, false, Some(ScreenId::JobList)),
        (ScreenId::CoverLetter, false, Some(ScreenId::JobDetail)),
        (ScreenId::Profile, false, Some(ScreenId::Main)),
        (ScreenId::Main, false, None),
    ];
    for (screen, has_job, target) in expected {
        assert_eq!(back_target(screen, has_job), target, "from {}", screen);
    }
}

#[test]
fn test_cover_letter_merge_prefers_explicit_fields() {
    let (mut nav, _rx) = controller(RestartPolicy::KeepProfile);
    let resume = file("resume.pdf");

    nav.save_profile(Profile {
        name: "Lee".to_string(),
        resume_file: Some(resume.clone()),
        ..Default::default()
    });
    nav.start_interview_from_job(listing("A", "B"));
    nav.start_interview_from_cover_letter(JobApplication {
        title: Some("A".to_string()),
        company: Some("B".to_string()),
        cover_letter: Some("X".to_string()),
        ..Default::default()
    });

    assert_eq!(nav.current_screen(), ScreenId::Interview);
    let input = nav.state().interview_input.clone().unwrap();
    assert_eq!(input.position, "A");
    assert_eq!(input.company, "B");
    assert_eq!(input.resume, Some(resume));
    assert_eq!(input.cover_letter, "X");
}

#[test]
fn test_cover_letter_merge_falls_back_to_saved_state() {
    let (mut nav, _rx) = controller(RestartPolicy::KeepProfile);
    let portfolio = file("portfolio.pdf");

    nav.start_interview_from_job(listing("Data Engineer", "Acme"));
    nav.save_cover_letter(CoverLetterDraft {
        body: "Saved letter".to_string(),
        portfolio_file: Some(portfolio.clone()),
    });
    nav.start_interview_from_cover_letter(JobApplication::default());

    let input = nav.state().interview_input.clone().unwrap();
    assert_eq!(input.position, "Data Engineer");
    assert_eq!(input.company, "Acme");
    assert_eq!(input.cover_letter, "Saved letter");
    assert_eq!(input.portfolio, Some(portfolio));
    assert!(input.resume.is_none());
}

#[test]
fn test_application_listing_replaces_selected_job() {
    let (mut nav, _rx) = controller(RestartPolicy::KeepProfile);
    nav.select_job(listing("Old", "Corp"));

    let job = listing("New", "Corp");
    nav.start_interview_from_cover_letter(JobApplication::for_listing(&job, "letter"));

    assert_eq!(nav.state().selected_job.as_ref(), Some(&job));
    assert_eq!(nav.state().interview_input.as_ref().unwrap().position, "New");
}

#[test]
fn test_manual_entry_goes_straight_to_interview() {
    let (mut nav, _rx) = controller(RestartPolicy::KeepProfile);
    nav.go_to(ScreenId::Input);
    nav.handle(NavigationEvent::ContinueToInterview(ManualEntry {
        job_title: "QA Engineer".to_string(),
        company: String::new(),
        job_description: "Test things".to_string(),
        resume: file("cv.pdf"),
        cover_letter: "I like breaking software before users do.".to_string(),
        portfolio: None,
    }));

    assert_eq!(nav.current_screen(), ScreenId::Interview);
    let input = nav.state().interview_input.as_ref().unwrap();
    assert_eq!(input.position, "QA Engineer");
    assert_eq!(input.resume.as_ref().unwrap().name, "cv.pdf");

    // No job selected, so back leads to the form
    nav.back();
    assert_eq!(nav.current_screen(), ScreenId::Input);
}

#[test]
fn test_complete_interview_routes_to_results() {
    let (mut nav, _rx) = controller(RestartPolicy::KeepProfile);
    let result = empty_result();
    nav.go_to(ScreenId::Interview);
    nav.complete_interview(result.clone());
    assert_eq!(nav.current_screen(), ScreenId::Results);
    assert_eq!(nav.state().interview_result, Some(result));
}

#[test]
fn test_restart_keeps_profile_by_default() {
    let (mut nav, _rx) = controller(RestartPolicy::KeepProfile);
    nav.save_profile(Profile::default());
    nav.start_interview_from_job(listing("A", "B"));
    nav.save_cover_letter(CoverLetterDraft::default());
    nav.start_interview_from_cover_letter(JobApplication::default());
    nav.complete_interview(empty_result());

    nav.restart();
    let state = nav.state();
    assert_eq!(state.current_screen, ScreenId::Main);
    assert!(state.selected_job.is_none());
    assert!(state.cover_letter.is_none());
    assert!(state.interview_input.is_none());
    assert!(state.interview_result.is_none());
    assert!(state.profile.is_some());
}

#[test]
fn test_restart_can_clear_profile() {
    let (mut nav, _rx) = controller(RestartPolicy::ClearProfile);
    nav.save_profile(Profile::default());
    nav.handle(NavigationEvent::Restart);
    assert!(nav.state().profile.is_none());
}

#[test]
fn test_saves_emit_info_notices() {
    let (mut nav, rx) = controller(RestartPolicy::KeepProfile);
    nav.save_profile(Profile::default());
    nav.save_cover_letter(CoverLetterDraft::default());

    let notices: Vec<Notice> = rx.try_iter().collect();
    assert_eq!(notices.len(), 2);
    assert!(notices.iter().all(|n| n.level == NoticeLevel::Info));
    assert_eq!(notices[1].message, "Your cover letter has been saved.");
}

#[test]
fn test_notices_are_fire_and_forget() {
    let (mut nav, rx) = controller(RestartPolicy::KeepProfile);
    drop(rx);
    nav.save_profile(Profile::default());
    assert!(nav.state().profile.is_some());
}
