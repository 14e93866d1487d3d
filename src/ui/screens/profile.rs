use super::{field_error, primary_button, text_field, FormState};
use crate::forms::Validation;
use crate::models::AttachmentRule;
use crate::navigation::{NavigationEvent, Notifier};
use crate::ui::components::attachment_field;
use crate::ui::theme::Theme;
use egui::ScrollArea;
use tracing::debug;

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    forms: &mut FormState,
    resume_rule: &AttachmentRule,
    notifier: &Notifier,
    outbox: &mut Vec<NavigationEvent>,
) {
    ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        let form = &mut forms.profile;
        let errors = &forms.profile_errors;

        text_field(ui, "Name", &mut form.name, "Your full name");
        field_error(ui, theme, errors, "name");

        text_field(ui, "Email", &mut form.email, "name@example.com");
        field_error(ui, theme, errors, "email");

        text_field(ui, "Phone", &mut form.phone, "010-0000-0000");
        field_error(ui, theme, errors, "phone");

        text_field(ui, "Birth date", &mut form.birth_date, "YYYY-MM-DD (optional)");
        field_error(ui, theme, errors, "birth_date");

        text_field(ui, "Address", &mut form.address, "Optional");

        ui.add_space(theme.spacing_sm);
        attachment_field::show(
            ui,
            theme,
            "Resume",
            &mut forms.resume_path,
            &mut form.resume_file,
            resume_rule,
            notifier,
        );

        ui.add_space(theme.spacing_lg);
        if ui.add(primary_button(theme, "Save profile")).clicked() {
            match form.validate() {
                Validation::Valid(profile) => {
                    forms.profile_errors.clear();
                    outbox.push(NavigationEvent::SaveProfile(profile));
                }
                Validation::Invalid(errors) => {
                    debug!("[FORM] Profile has {} invalid fields", errors.len());
                    forms.profile_errors = errors;
                }
            }
        }
    });
}
