//! Main application struct and eframe integration
//!
//! `MockviewApp` wires the navigation controller, the live interview
//! session and the screens together. One frame: pump the session, draw,
//! then apply whatever the screens and the session pushed.

use crate::config::AppConfig;
use crate::interview::{ClockScheduler, InterviewSession, SessionEvent};
use crate::models::{demo_listings, AttachmentRule, JobListing};
use crate::navigation::{NavigationController, NavigationEvent, Notice, Notifier, ScreenId};
use crate::forms::{CoverLetterForm, ProfileForm};
use crate::ui::components::{nav_bar, Toasts};
use crate::ui::screens::{self, FormState};
use crate::ui::theme::Theme;
use crossbeam_channel::Receiver;
use egui::CentralPanel;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct MockviewApp {
    config: AppConfig,
    theme: Theme,
    nav: NavigationController,
    notifier: Notifier,
    notices: Receiver<Notice>,
    toasts: Toasts,
    session: Option<InterviewSession<ClockScheduler>>,
    forms: FormState,
    listings: Vec<JobListing>,
    resume_rule: AttachmentRule,
    portfolio_rule: AttachmentRule,
    /// Screen drawn last frame, for enter/leave hooks
    shown_screen: Option<ScreenId>,
    initialized: bool,
}

impl MockviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let app = Self::with_config(config);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    /// Build the app without an eframe context (used by UI tests)
    pub fn with_config(config: AppConfig) -> Self {
        let (notifier, notices) = Notifier::channel();
        let nav = NavigationController::new(config.navigation.restart_policy, notifier.clone());

        Self {
            theme: Theme::for_choice(config.ui.theme),
            nav,
            notifier,
            notices,
            toasts: Toasts::new(),
            session: None,
            forms: FormState::default(),
            listings: demo_listings(),
            resume_rule: AttachmentRule::resume(config.attachments.resume_max_bytes),
            portfolio_rule: AttachmentRule::portfolio(config.attachments.portfolio_max_bytes),
            shown_screen: None,
            initialized: false,
            config,
        }
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn session(&self) -> Option<&InterviewSession<ClockScheduler>> {
        self.session.as_ref()
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Apply an event as if a screen had pushed it
    pub fn dispatch(&mut self, event: NavigationEvent) {
        self.nav.handle(event);
        self.sync_screen();
    }

    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.sync_screen();
        info!(
            "Mockview UI initialized ({} listings, {} questions)",
            self.listings.len(),
            self.config.interview.questions.len()
        );
    }

    /// Draw one frame. `eframe::App::update` calls this; tests call it
    /// through the kittest harness.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.initialize();

        let mut outbox = Vec::new();
        if let Some(session) = self.session.as_mut() {
            session.pump();
        }
        self.toasts.collect(&self.notices, ctx.input(|i| i.time));

        let screen = self.nav.current_screen();
        nav_bar::show(ctx, &self.theme, screen, &mut outbox);

        CentralPanel::default().show(ctx, |ui| {
            self.show_screen(ui, screen, &mut outbox);
        });
        self.forward_session_events(&mut outbox);

        for event in outbox {
            self.nav.handle(event);
        }
        self.sync_screen();

        // Notices raised by this frame's events
        self.toasts.collect(&self.notices, ctx.input(|i| i.time));
        let toast_wait = self.toasts.show(ctx, &self.theme);
        self.schedule_repaint(ctx, toast_wait);
    }

    fn show_screen(&mut self, ui: &mut egui::Ui, screen: ScreenId, outbox: &mut Vec<NavigationEvent>) {
        let state = self.nav.state();
        match screen {
            ScreenId::Main => screens::main_menu::show(ui, &self.theme, state.profile.is_some(), outbox),
            ScreenId::JobList => screens::job_list::show(
                ui,
                &self.theme,
                &self.listings,
                &mut self.forms.job_filter,
                outbox,
            ),
            ScreenId::JobDetail => {
                screens::job_detail::show(ui, &self.theme, state.selected_job.as_ref(), outbox)
            }
            ScreenId::Profile => screens::profile::show(
                ui,
                &self.theme,
                &mut self.forms,
                &self.resume_rule,
                &self.notifier,
                outbox,
            ),
            ScreenId::CoverLetter => screens::cover_letter::show(
                ui,
                &self.theme,
                state.selected_job.as_ref(),
                &mut self.forms,
                &self.portfolio_rule,
                &self.notifier,
                outbox,
            ),
            ScreenId::Input => screens::input::show(
                ui,
                &self.theme,
                &mut self.forms,
                screens::input::InputRules {
                    resume: &self.resume_rule,
                    portfolio: &self.portfolio_rule,
                },
                &self.notifier,
                outbox,
            ),
            ScreenId::Interview => match self.session.as_mut() {
                Some(session) => screens::interview::show(ui, &self.theme, session),
                None => {
                    ui.label("Preparing the interview...");
                }
            },
            ScreenId::Results => screens::results::show(
                ui,
                &self.theme,
                state.interview_result.as_ref(),
                &self.notifier,
                outbox,
            ),
        }
    }

    /// Turn session completion into a navigation event
    fn forward_session_events(&mut self, outbox: &mut Vec<NavigationEvent>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        for event in session.drain_events() {
            match event {
                SessionEvent::Completed(result) => {
                    outbox.push(NavigationEvent::CompleteInterview(result));
                }
                other => debug!("[INTERVIEW] {:?}", other),
            }
        }
    }

    /// Run enter/leave hooks when the current screen changed
    fn sync_screen(&mut self) {
        let current = self.nav.current_screen();
        let previous = self.shown_screen.replace(current);
        if previous == Some(current) {
            return;
        }

        if previous == Some(ScreenId::Interview) {
            if let Some(mut session) = self.session.take() {
                session.teardown();
            }
        }

        match current {
            ScreenId::Interview => self.start_session(),
            ScreenId::Profile => {
                if let Some(profile) = &self.nav.state().profile {
                    self.forms.profile = ProfileForm::from_profile(profile);
                }
                self.forms.profile_errors.clear();
            }
            ScreenId::CoverLetter => {
                if let Some(draft) = &self.nav.state().cover_letter {
                    self.forms.cover_letter = CoverLetterForm::from_draft(draft);
                }
                self.forms.cover_letter_errors.clear();
            }
            ScreenId::Input => {
                if let Some(profile) = &self.nav.state().profile {
                    self.forms.interview.prefill_from_profile(profile);
                }
                self.forms.interview_errors.clear();
            }
            ScreenId::Main if previous == Some(ScreenId::Results) => self.reset_forms(),
            _ => {}
        }
    }

    /// Drop edit buffers after a restart. The profile form survives only
    /// while the controller still holds a profile.
    fn reset_forms(&mut self) {
        let profile = self.nav.state().profile.as_ref().map(ProfileForm::from_profile);
        self.forms = FormState {
            profile: profile.unwrap_or_default(),
            ..FormState::default()
        };
    }

    fn start_session(&mut self) {
        let Some(input) = self.nav.state().interview_input.clone() else {
            warn!("[NAV] Interview screen without input, returning home");
            self.nav.go_to(ScreenId::Main);
            self.shown_screen = Some(ScreenId::Main);
            return;
        };
        self.session = Some(InterviewSession::new(
            input,
            self.config.interview.clone(),
            ClockScheduler::new(),
        ));
    }

    fn schedule_repaint(&self, ctx: &egui::Context, toast_wait: Option<Duration>) {
        let timer_wait = self
            .session
            .as_ref()
            .and_then(|s| s.scheduler().next_deadline());
        let wait = match (timer_wait, toast_wait) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        if let Some(wait) = wait {
            ctx.request_repaint_after(wait);
        }
    }
}

impl eframe::App for MockviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(mut session) = self.session.take() {
            session.teardown();
        }
        info!("Mockview shutting down");
    }
}
