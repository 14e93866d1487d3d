pub mod attachment_field;
pub mod confirm_dialog;
pub mod nav_bar;
pub mod record_control;
mod toast;

pub use record_control::{RecordAction, RecordControl};
pub use toast::Toasts;
