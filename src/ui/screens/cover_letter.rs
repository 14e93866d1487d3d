use super::{field_error, primary_button, FormState};
use crate::forms::{Validation, MAX_COVER_LETTER_CHARS};
use crate::models::{AttachmentRule, JobApplication, JobListing};
use crate::navigation::{NavigationEvent, Notifier};
use crate::ui::components::attachment_field;
use crate::ui::theme::Theme;
use egui::{RichText, ScrollArea, TextEdit};

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    job: Option<&JobListing>,
    forms: &mut FormState,
    portfolio_rule: &AttachmentRule,
    notifier: &Notifier,
    outbox: &mut Vec<NavigationEvent>,
) {
    ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        if let Some(job) = job {
            theme.card().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&job.title).strong());
                ui.label(RichText::new(&job.company).color(theme.text_secondary));
            });
            ui.add_space(theme.spacing_sm);
        }

        let form = &mut forms.cover_letter;
        let heading = ui.label(RichText::new("Cover letter").strong());
        ui.add(
            TextEdit::multiline(&mut form.body)
                .hint_text("Tell the interviewer why you want this role")
                .desired_rows(10)
                .desired_width(f32::INFINITY)
                .char_limit(MAX_COVER_LETTER_CHARS),
        )
        .labelled_by(heading.id);
        ui.label(
            RichText::new(format!("{} / {}", form.char_count(), MAX_COVER_LETTER_CHARS))
                .small()
                .color(theme.text_muted),
        );
        field_error(ui, theme, &forms.cover_letter_errors, "cover_letter");

        ui.add_space(theme.spacing_sm);
        attachment_field::show(
            ui,
            theme,
            "Portfolio",
            &mut forms.portfolio_path,
            &mut form.portfolio_file,
            portfolio_rule,
            notifier,
        );

        ui.add_space(theme.spacing_lg);
        let mut save = false;
        let mut start = false;
        ui.horizontal(|ui| {
            save = ui.button("Save draft").clicked();
            start = ui.add(primary_button(theme, "Start interview")).clicked();
        });
        if !(save || start) {
            return;
        }

        let draft = match form.validate() {
            Validation::Valid(draft) => draft,
            Validation::Invalid(errors) => {
                forms.cover_letter_errors = errors;
                return;
            }
        };
        forms.cover_letter_errors.clear();

        let application = match job {
            Some(job) => JobApplication::for_listing(job, draft.body.clone()),
            None => JobApplication {
                cover_letter: Some(draft.body.clone()),
                ..Default::default()
            },
        };
        outbox.push(NavigationEvent::SaveCoverLetter(draft));
        if start {
            outbox.push(NavigationEvent::StartInterviewFromCoverLetter(application));
        }
    });
}
