//! Navigation controller
//!
//! Owns the current screen and the data that crosses screens. Screens never
//! set the screen themselves; they hand a [`NavigationEvent`] to
//! [`NavigationController::handle`]. Every operation is total: payloads are
//! validated by the form that produced them.

use super::notice::Notifier;
use super::screen::ScreenId;
use crate::models::{
    CoverLetterDraft, InterviewInput, InterviewResult, JobApplication, JobListing, ManualEntry,
    Profile,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What `restart` does with the saved profile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    #[default]
    KeepProfile,
    ClearProfile,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub current_screen: ScreenId,
    pub selected_job: Option<JobListing>,
    pub profile: Option<Profile>,
    pub cover_letter: Option<CoverLetterDraft>,
    pub interview_input: Option<InterviewInput>,
    pub interview_result: Option<InterviewResult>,
}

/// Outbound event of a screen
#[derive(Clone, Debug, PartialEq)]
pub enum NavigationEvent {
    GoTo(ScreenId),
    SelectJob(JobListing),
    StartInterviewFromJob(JobListing),
    SaveProfile(Profile),
    SaveCoverLetter(CoverLetterDraft),
    StartInterviewFromCoverLetter(JobApplication),
    ContinueToInterview(ManualEntry),
    CompleteInterview(InterviewResult),
    Restart,
    Back,
}

/// Where "back" leads from `current`. `None` means stay.
pub fn back_target(current: ScreenId, has_selected_job: bool) -> Option<ScreenId> {
    match current {
        ScreenId::Input => Some(ScreenId::Main),
        ScreenId::Interview if has_selected_job => Some(ScreenId::CoverLetter),
        ScreenId::Interview => Some(ScreenId::Input),
        ScreenId::Results => Some(ScreenId::Interview),
        ScreenId::JobList => Some(ScreenId::Main),
        ScreenId::JobDetail => Some(ScreenId::JobList),
        ScreenId::CoverLetter => Some(ScreenId::JobDetail),
        ScreenId::Profile => Some(ScreenId::Main),
        ScreenId::Main => None,
    }
}

/// Build the interview input for the job-listing flow.
///
/// Each field takes the first value present in: the application itself,
/// the selected job, the saved profile (resume), the saved cover letter.
pub fn merge_interview_input(application: &JobApplication, state: &NavigationState) -> InterviewInput {
    let job = state.selected_job.as_ref();
    let draft = state.cover_letter.as_ref();

    InterviewInput {
        position: application
            .title
            .clone()
            .or_else(|| job.map(|j| j.title.clone()))
            .unwrap_or_default(),
        company: application
            .company
            .clone()
            .or_else(|| job.map(|j| j.company.clone()))
            .unwrap_or_default(),
        job_description: application
            .description
            .clone()
            .or_else(|| job.and_then(|j| j.description.clone()))
            .unwrap_or_default(),
        resume: state.profile.as_ref().and_then(|p| p.resume_file.clone()),
        cover_letter: application
            .cover_letter
            .clone()
            .or_else(|| draft.map(|d| d.body.clone()))
            .unwrap_or_default(),
        portfolio: draft.and_then(|d| d.portfolio_file.clone()),
    }
}

pub struct NavigationController {
    state: NavigationState,
    policy: RestartPolicy,
    notifier: Notifier,
}

impl NavigationController {
    pub fn new(policy: RestartPolicy, notifier: Notifier) -> Self {
        Self {
            state: NavigationState::default(),
            policy,
            notifier,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_screen(&self) -> ScreenId {
        self.state.current_screen
    }

    pub fn policy(&self) -> RestartPolicy {
        self.policy
    }

    /// Apply one screen event
    pub fn handle(&mut self, event: NavigationEvent) {
        debug!("[NAV] {:?} on {}", event_name(&event), self.state.current_screen);
        match event {
            NavigationEvent::GoTo(screen) => self.go_to(screen),
            NavigationEvent::SelectJob(job) => self.select_job(job),
            NavigationEvent::StartInterviewFromJob(job) => self.start_interview_from_job(job),
            NavigationEvent::SaveProfile(profile) => self.save_profile(profile),
            NavigationEvent::SaveCoverLetter(draft) => self.save_cover_letter(draft),
            NavigationEvent::StartInterviewFromCoverLetter(application) => {
                self.start_interview_from_cover_letter(application)
            }
            NavigationEvent::ContinueToInterview(entry) => self.continue_to_interview(entry),
            NavigationEvent::CompleteInterview(result) => self.complete_interview(result),
            NavigationEvent::Restart => self.restart(),
            NavigationEvent::Back => self.back(),
        }
    }

    pub fn go_to(&mut self, screen: ScreenId) {
        if self.state.current_screen != screen {
            info!("[NAV] {} -> {}", self.state.current_screen, screen);
        }
        self.state.current_screen = screen;
    }

    pub fn select_job(&mut self, job: JobListing) {
        debug!("[NAV] Selected job #{} {}", job.id, job.title);
        self.state.selected_job = Some(job);
    }

    pub fn start_interview_from_job(&mut self, job: JobListing) {
        self.state.selected_job = Some(job);
        self.go_to(ScreenId::CoverLetter);
    }

    pub fn save_profile(&mut self, profile: Profile) {
        self.state.profile = Some(profile);
        self.notifier.info("Your profile has been saved.");
    }

    pub fn save_cover_letter(&mut self, draft: CoverLetterDraft) {
        self.state.cover_letter = Some(draft);
        self.notifier.info("Your cover letter has been saved.");
    }

    pub fn start_interview_from_cover_letter(&mut self, application: JobApplication) {
        let input = merge_interview_input(&application, &self.state);
        if let Some(job) = application.job {
            self.state.selected_job = Some(job);
        }
        self.state.interview_input = Some(input);
        self.go_to(ScreenId::Interview);
    }

    pub fn continue_to_interview(&mut self, entry: ManualEntry) {
        self.state.interview_input = Some(InterviewInput::from(entry));
        self.go_to(ScreenId::Interview);
    }

    pub fn complete_interview(&mut self, result: InterviewResult) {
        self.state.interview_result = Some(result);
        self.go_to(ScreenId::Results);
    }

    pub fn restart(&mut self) {
        self.state.selected_job = None;
        self.state.cover_letter = None;
        self.state.interview_result = None;
        self.state.interview_input = None;
        if self.policy == RestartPolicy::ClearProfile {
            self.state.profile = None;
        }
        info!("[NAV] Restart ({:?})", self.policy);
        self.go_to(ScreenId::Main);
    }

    pub fn back(&mut self) {
        let has_job = self.state.selected_job.is_some();
        match back_target(self.state.current_screen, has_job) {
            Some(screen) => self.go_to(screen),
            None => debug!("[NAV] No back target from {}", self.state.current_screen),
        }
    }
}

fn event_name(event: &NavigationEvent) -> &'static str {
    match event {
        NavigationEvent::GoTo(_) => "GoTo",
        NavigationEvent::SelectJob(_) => "SelectJob",
        NavigationEvent::StartInterviewFromJob(_) => "StartInterviewFromJob",
        NavigationEvent::SaveProfile(_) => "SaveProfile",
        NavigationEvent::SaveCoverLetter(_) => "SaveCoverLetter",
        NavigationEvent::StartInterviewFromCoverLetter(_) => "StartInterviewFromCoverLetter",
        NavigationEvent::ContinueToInterview(_) => "ContinueToInterview",
        NavigationEvent::CompleteInterview(_) => "CompleteInterview",
        NavigationEvent::Restart => "Restart",
        NavigationEvent::Back => "Back",
    }
}
