//! One module per screen
//!
//! A screen draws from borrowed state and pushes the events it wants
//! applied into `outbox`. Only the app hands those to the navigation
//! controller.

pub mod cover_letter;
pub mod input;
pub mod interview;
pub mod job_detail;
pub mod job_list;
pub mod main_menu;
pub mod profile;
pub mod results;

use crate::forms::{CoverLetterForm, FieldErrors, InterviewForm, ProfileForm};
use crate::models::JobFilter;
use crate::ui::theme::Theme;
use egui::RichText;

/// Edit buffers that outlive a single frame
#[derive(Debug, Default)]
pub struct FormState {
    pub profile: ProfileForm,
    pub profile_errors: FieldErrors,
    pub resume_path: String,

    pub cover_letter: CoverLetterForm,
    pub cover_letter_errors: FieldErrors,
    pub portfolio_path: String,

    pub interview: InterviewForm,
    pub interview_errors: FieldErrors,
    pub input_resume_path: String,
    pub input_portfolio_path: String,

    pub job_filter: JobFilter,
}

/// Single-line input with a label the accessibility tree can find
pub(crate) fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    let label = ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    )
    .labelled_by(label.id);
}

pub(crate) fn field_error(ui: &mut egui::Ui, theme: &Theme, errors: &FieldErrors, field: &str) {
    if let Some(message) = errors.get(field) {
        ui.label(RichText::new(message).small().color(theme.error));
    }
}

pub(crate) fn section_title(ui: &mut egui::Ui, theme: &Theme, title: &str) {
    ui.add_space(theme.spacing_sm);
    ui.label(RichText::new(title).size(16.0).strong().color(theme.text_primary));
}

pub(crate) fn primary_button(theme: &Theme, text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(egui::Color32::WHITE))
        .fill(theme.primary)
        .min_size(egui::vec2(0.0, 36.0))
}
