//! Screen navigation and cross-screen data

mod controller;
mod notice;
mod screen;

pub use controller::{
    back_target, merge_interview_input, NavigationController, NavigationEvent, NavigationState,
    RestartPolicy,
};
pub use notice::{Notice, NoticeLevel, Notifier};
pub use screen::ScreenId;
