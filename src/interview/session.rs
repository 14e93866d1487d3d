//! Interview session state machine
//!
//! One session walks a fixed list of questions. Each question cycles
//! `Idle -> Prep -> Rec -> Done`, with `Done -> Prep` for a redo. Every call
//! that does not fit the current phase is a no-op, so the UI can forward
//! button presses without pre-checking.
//!
//! At most one timer is live. Every phase change cancels the old one before
//! anything else happens, and ticks from any other handle are dropped.

use super::scheduler::{Scheduler, TimerHandle};
use crate::models::{AnswerRecord, InterviewInput, InterviewResult};
use crate::{MockviewError, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const DEFAULT_QUESTIONS: [&str; 6] = [
    "Please introduce yourself.",
    "What motivated you to apply for this role?",
    "Describe your strengths and how they would help in this job.",
    "Tell us about your most challenging project and how you solved it.",
    "Where do you see yourself in five years?",
    "Do you have any questions for us?",
];

const TICK: Duration = Duration::from_secs(1);

/// Timing rules and questions for a session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Countdown before recording starts
    pub prep_seconds: u32,
    /// Shortest answer that lets the user move on
    pub min_seconds: u32,
    /// Recording stops on its own at this length
    pub max_seconds: u32,
    pub questions: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prep_seconds: 5,
            min_seconds: 15,
            max_seconds: 180,
            questions: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }
}

impl SessionConfig {
    pub fn with_questions<I, Q>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        self.questions = questions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timing(mut self, prep_seconds: u32, min_seconds: u32, max_seconds: u32) -> Self {
        self.prep_seconds = prep_seconds;
        self.min_seconds = min_seconds;
        self.max_seconds = max_seconds;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_seconds == 0 {
            return Err(MockviewError::ConfigError(
                "max_seconds must be greater than zero".to_string(),
            ));
        }
        if self.min_seconds > self.max_seconds {
            return Err(MockviewError::ConfigError(format!(
                "min_seconds ({}) must not exceed max_seconds ({})",
                self.min_seconds, self.max_seconds
            )));
        }
        if self.questions.is_empty() {
            return Err(MockviewError::ConfigError(
                "An interview needs at least one question".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-question phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing recorded yet for this question
    #[default]
    Idle,
    /// Countdown before recording
    Prep,
    /// Recording, elapsed time counting up
    Rec,
    /// Answer stored (stopped or skipped)
    Done,
}

impl Phase {
    pub fn is_recording(&self) -> bool {
        matches!(self, Phase::Rec)
    }

    /// Phases from which a new prep countdown may start
    pub fn can_start_prep(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Done)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::Prep => write!(f, "Prep"),
            Phase::Rec => write!(f, "Recording"),
            Phase::Done => write!(f, "Done"),
        }
    }
}

/// Destructive actions that wait for the user to confirm
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    Redo,
    Skip,
}

impl PromptKind {
    pub fn title(&self) -> &'static str {
        match self {
            PromptKind::Redo => "Record again",
            PromptKind::Skip => "Skip question",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PromptKind::Redo => "Overwrite the existing recording for this question?",
            PromptKind::Skip => {
                "Skipping this question may count against you. Skip anyway?"
            }
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            PromptKind::Redo => "Overwrite",
            PromptKind::Skip => "Skip",
        }
    }

    pub fn cancel_label(&self) -> &'static str {
        match self {
            PromptKind::Redo => "Cancel",
            PromptKind::Skip => "Keep answering",
        }
    }
}

/// Notifications emitted by a session
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    PhaseChanged { index: usize, phase: Phase },
    CountdownTick { prep_left: u32 },
    RecordingTick { elapsed: u32 },
    Recorded { index: usize, duration_seconds: u32 },
    Skipped { index: usize },
    Advanced { index: usize },
    PromptOpened(PromptKind),
    PromptDismissed { kind: PromptKind, accepted: bool },
    /// Emitted exactly once, after the last question
    Completed(InterviewResult),
}

/// Format whole seconds as `m:ss`
pub fn format_mmss(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub struct InterviewSession<S: Scheduler> {
    id: Uuid,
    config: SessionConfig,
    input: InterviewInput,
    scheduler: S,
    timer: Option<TimerHandle>,
    index: usize,
    phase: Phase,
    elapsed: u32,
    prep_left: u32,
    records: Vec<Option<AnswerRecord>>,
    prompt: Option<PromptKind>,
    result: Option<InterviewResult>,
    torn_down: bool,
    event_tx: Sender<SessionEvent>,
    event_rx: Receiver<SessionEvent>,
}

impl<S: Scheduler> InterviewSession<S> {
    /// Start a session over `config.questions`. An empty list falls back to
    /// the default questions.
    pub fn new(input: InterviewInput, mut config: SessionConfig, scheduler: S) -> Self {
        if config.questions.is_empty() {
            warn!("[INTERVIEW] No questions configured, using defaults");
            config.questions = SessionConfig::default().questions;
        }
        let (event_tx, event_rx) = unbounded();
        let id = Uuid::new_v4();
        info!(
            "[INTERVIEW] Session {} started: {} questions for {:?}",
            id,
            config.questions.len(),
            input.position
        );

        Self {
            id,
            records: vec![None; config.questions.len()],
            prep_left: config.prep_seconds,
            config,
            input,
            scheduler,
            timer: None,
            index: 0,
            phase: Phase::Idle,
            elapsed: 0,
            prompt: None,
            result: None,
            torn_down: false,
            event_tx,
            event_rx,
        }
    }

    // === Queries ===

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.config.questions.len()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total()
    }

    pub fn current_question(&self) -> &str {
        &self.config.questions[self.index]
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn input(&self) -> &InterviewInput {
        &self.input
    }

    /// Seconds recorded so far in the current take
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn prep_left(&self) -> u32 {
        self.prep_left
    }

    pub fn record(&self, index: usize) -> Option<&AnswerRecord> {
        self.records.get(index).and_then(Option::as_ref)
    }

    pub fn current_record(&self) -> Option<&AnswerRecord> {
        self.record(self.index)
    }

    /// Number of questions with a stored answer or skip
    pub fn record_count(&self) -> usize {
        self.records.iter().flatten().count()
    }

    pub fn pending_prompt(&self) -> Option<PromptKind> {
        self.prompt
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn result(&self) -> Option<&InterviewResult> {
        self.result.as_ref()
    }

    pub fn progress_percent(&self) -> f32 {
        (self.index + 1) as f32 / self.total() as f32 * 100.0
    }

    /// True iff the current question has a skip, or a recording of at least
    /// `min_seconds`
    pub fn can_proceed(&self) -> bool {
        match self.current_record() {
            Some(record) => record.skipped || record.duration_seconds >= self.config.min_seconds,
            None => false,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    // === Events ===

    pub fn try_recv_event(&self) -> Option<SessionEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn drain_events(&self) -> Vec<SessionEvent> {
        self.event_rx.try_iter().collect()
    }

    fn emit(&self, event: SessionEvent) {
        if self.event_tx.send(event).is_err() {
            warn!("[INTERVIEW] Event channel closed");
        }
    }

    // === Transitions ===

    fn accepts_input(&self) -> bool {
        !self.torn_down && self.result.is_none() && self.prompt.is_none()
    }

    /// Start the prep countdown (from `Idle` or `Done`)
    pub fn begin_prep(&mut self) {
        if !self.accepts_input() || !self.phase.can_start_prep() {
            debug!("[INTERVIEW] begin_prep ignored in {}", self.phase);
            return;
        }
        self.start_prep();
    }

    fn start_prep(&mut self) {
        self.cancel_timer();
        self.set_phase(Phase::Prep);
        self.prep_left = self.config.prep_seconds;

        if self.prep_left == 0 {
            self.begin_rec();
            return;
        }
        self.timer = Some(self.scheduler.schedule_repeating(TICK));
    }

    /// The prep timer keeps running into the recording, so ticks already
    /// queued behind prep expiry count as recorded seconds.
    fn begin_rec(&mut self) {
        self.elapsed = 0;
        self.set_phase(Phase::Rec);
        if self.timer.is_none() {
            self.timer = Some(self.scheduler.schedule_repeating(TICK));
        }
    }

    /// Stop recording and store the take for the current question
    pub fn stop_rec(&mut self) {
        if !self.accepts_input() || self.phase != Phase::Rec {
            debug!("[INTERVIEW] stop_rec ignored in {}", self.phase);
            return;
        }
        self.finish_recording();
    }

    fn finish_recording(&mut self) {
        self.cancel_timer();
        let record = AnswerRecord::recorded(self.current_question(), self.elapsed);
        self.records[self.index] = Some(record);
        self.set_phase(Phase::Done);
        info!(
            "[INTERVIEW] Q{} recorded: {}s",
            self.index + 1,
            self.elapsed
        );
        self.emit(SessionEvent::Recorded {
            index: self.index,
            duration_seconds: self.elapsed,
        });
    }

    /// Record the current question again. Overwriting an existing answer
    /// waits for confirmation.
    pub fn request_redo(&mut self) {
        if !self.accepts_input() || self.phase != Phase::Done {
            return;
        }
        match self.current_record() {
            Some(record) if !record.skipped => self.open_prompt(PromptKind::Redo),
            _ => self.start_prep(),
        }
    }

    /// Ask to skip the current question (not while recording)
    pub fn request_skip(&mut self) {
        if !self.accepts_input() || self.phase.is_recording() {
            return;
        }
        self.open_prompt(PromptKind::Skip);
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(kind);
        self.emit(SessionEvent::PromptOpened(kind));
    }

    /// Answer the open prompt. Declining leaves everything as it was.
    pub fn resolve_prompt(&mut self, accepted: bool) {
        let Some(kind) = self.prompt.take() else {
            return;
        };
        self.emit(SessionEvent::PromptDismissed { kind, accepted });
        if !accepted {
            return;
        }

        match kind {
            PromptKind::Redo => self.start_prep(),
            PromptKind::Skip => {
                self.cancel_timer();
                self.records[self.index] = Some(AnswerRecord::skipped(self.current_question()));
                info!("[INTERVIEW] Q{} skipped", self.index + 1);
                self.emit(SessionEvent::Skipped { index: self.index });
                self.advance();
            }
        }
    }

    /// Move to the next question, or finish after the last one
    pub fn go_next(&mut self) {
        if !self.accepts_input() || self.phase.is_recording() || !self.can_proceed() {
            debug!("[INTERVIEW] go_next blocked on Q{}", self.index + 1);
            return;
        }
        self.advance();
    }

    fn advance(&mut self) {
        self.cancel_timer();

        if self.is_last() {
            let result = InterviewResult {
                session_id: self.id,
                answers: self.records.iter().flatten().cloned().collect(),
                interview_input: self.input.clone(),
            };
            info!(
                "[INTERVIEW] Session {} complete: {} answers",
                self.id,
                result.answers.len()
            );
            self.result = Some(result.clone());
            self.emit(SessionEvent::Completed(result));
            return;
        }

        self.index += 1;
        self.elapsed = 0;
        self.prep_left = self.config.prep_seconds;
        self.emit(SessionEvent::Advanced { index: self.index });
        let phase = if self.current_record().is_some() {
            Phase::Done
        } else {
            Phase::Idle
        };
        self.set_phase(phase);
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.emit(SessionEvent::PhaseChanged {
            index: self.index,
            phase,
        });
    }

    // === Timers ===

    /// Apply every tick the scheduler has fired since the last call
    pub fn pump(&mut self) {
        if self.torn_down {
            return;
        }
        for handle in self.scheduler.fired() {
            if self.timer != Some(handle) {
                debug!("[TIMER] Dropping stale tick from #{}", handle.id());
                continue;
            }
            if self.prompt.is_some() {
                continue;
            }
            self.on_tick();
        }
    }

    fn on_tick(&mut self) {
        match self.phase {
            Phase::Prep => {
                if self.prep_left <= 1 {
                    self.prep_left = 0;
                    self.begin_rec();
                } else {
                    self.prep_left -= 1;
                    self.emit(SessionEvent::CountdownTick {
                        prep_left: self.prep_left,
                    });
                }
            }
            Phase::Rec => {
                self.elapsed += 1;
                self.emit(SessionEvent::RecordingTick {
                    elapsed: self.elapsed,
                });
                if self.elapsed >= self.config.max_seconds {
                    info!("[INTERVIEW] Q{} hit the {}s limit", self.index + 1, self.config.max_seconds);
                    self.finish_recording();
                }
            }
            Phase::Idle | Phase::Done => {}
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Stop any live timer and refuse further input. Called when the
    /// interview screen is left.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_timer();
        self.prompt = None;
        self.torn_down = true;
        info!("[INTERVIEW] Session {} torn down in {}", self.id, self.phase);
    }
}

impl<S: Scheduler> Drop for InterviewSession<S> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
