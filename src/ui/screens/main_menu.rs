use super::primary_button;
use crate::navigation::{NavigationEvent, ScreenId};
use crate::ui::theme::Theme;
use egui::RichText;

pub fn show(ui: &mut egui::Ui, theme: &Theme, has_profile: bool, outbox: &mut Vec<NavigationEvent>) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme.spacing_lg * 2.0);
        ui.label(
            RichText::new("Mockview")
                .size(32.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(
            RichText::new("Practice the interview before the interview.")
                .color(theme.text_muted),
        );
        ui.add_space(theme.spacing_lg * 2.0);

        let width = ui.available_width().min(320.0);
        if ui
            .add(primary_button(theme, "Start a mock interview").min_size(egui::vec2(width, 44.0)))
            .clicked()
        {
            outbox.push(NavigationEvent::GoTo(ScreenId::Input));
        }
        if ui
            .add(egui::Button::new("Browse job listings").min_size(egui::vec2(width, 44.0)))
            .clicked()
        {
            outbox.push(NavigationEvent::GoTo(ScreenId::JobList));
        }
        let profile_label = if has_profile { "Edit profile" } else { "Set up profile" };
        if ui
            .add(egui::Button::new(profile_label).min_size(egui::vec2(width, 44.0)))
            .clicked()
        {
            outbox.push(NavigationEvent::GoTo(ScreenId::Profile));
        }
    });
}
