//! Interview session: per-question recording cycle and its timers

mod scheduler;
mod session;

pub use scheduler::{ClockScheduler, ManualScheduler, Scheduler, TimerHandle};
pub use session::{
    format_mmss, InterviewSession, Phase, PromptKind, SessionConfig, SessionEvent,
    DEFAULT_QUESTIONS,
};
