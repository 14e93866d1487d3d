//! Mockview: mock interview practice
//!
//! The core is two state machines. [`navigation::NavigationController`]
//! owns the current screen and the data shared between screens.
//! [`interview::InterviewSession`] runs the per-question prep, record and
//! review cycle on an injected [`interview::Scheduler`]. Everything under
//! [`ui`] is presentation.

pub mod config;
mod error;
pub mod forms;
pub mod interview;
pub mod models;
pub mod navigation;
pub mod results;
pub mod ui;

pub use error::{MockviewError, Result};
