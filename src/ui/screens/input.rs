use super::{field_error, primary_button, section_title, text_field, FormState};
use crate::forms::{Validation, MAX_COVER_LETTER_CHARS};
use crate::models::AttachmentRule;
use crate::navigation::{NavigationEvent, Notifier};
use crate::ui::components::attachment_field;
use crate::ui::theme::Theme;
use egui::{RichText, ScrollArea, TextEdit};
use tracing::debug;

pub struct InputRules<'a> {
    pub resume: &'a AttachmentRule,
    pub portfolio: &'a AttachmentRule,
}

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    forms: &mut FormState,
    rules: InputRules<'_>,
    notifier: &Notifier,
    outbox: &mut Vec<NavigationEvent>,
) {
    ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        let form = &mut forms.interview;
        let errors = &forms.interview_errors;

        section_title(ui, theme, "The role");
        text_field(ui, "Position", &mut form.job_title, "e.g. Backend Engineer");
        field_error(ui, theme, errors, "job_title");
        text_field(ui, "Company", &mut form.company, "Optional");

        let heading = ui.label("Job description");
        ui.add(
            TextEdit::multiline(&mut form.job_description)
                .hint_text("Paste the posting (optional)")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        )
        .labelled_by(heading.id);

        section_title(ui, theme, "About you");
        attachment_field::show(
            ui,
            theme,
            "Resume",
            &mut forms.input_resume_path,
            &mut form.resume,
            rules.resume,
            notifier,
        );
        field_error(ui, theme, errors, "resume");

        let heading = ui.label("Cover letter");
        ui.add(
            TextEdit::multiline(&mut form.cover_letter)
                .hint_text("At least 50 characters")
                .desired_rows(8)
                .desired_width(f32::INFINITY)
                .char_limit(MAX_COVER_LETTER_CHARS),
        )
        .labelled_by(heading.id);
        ui.label(
            RichText::new(format!(
                "{} / {}",
                form.cover_letter.trim().chars().count(),
                MAX_COVER_LETTER_CHARS
            ))
            .small()
            .color(theme.text_muted),
        );
        field_error(ui, theme, errors, "cover_letter");

        attachment_field::show(
            ui,
            theme,
            "Portfolio",
            &mut forms.input_portfolio_path,
            &mut form.portfolio,
            rules.portfolio,
            notifier,
        );

        ui.add_space(theme.spacing_lg);
        if ui.add(primary_button(theme, "Continue to interview")).clicked() {
            match form.validate() {
                Validation::Valid(entry) => {
                    forms.interview_errors.clear();
                    outbox.push(NavigationEvent::ContinueToInterview(entry));
                }
                Validation::Invalid(errors) => {
                    debug!("[FORM] Interview setup has {} invalid fields", errors.len());
                    forms.interview_errors = errors;
                }
            }
        }
    });
}
