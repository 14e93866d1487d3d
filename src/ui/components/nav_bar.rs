use crate::navigation::{NavigationEvent, ScreenId};
use crate::ui::theme::Theme;
use egui::{Frame, Margin, RichText, TopBottomPanel};

/// Top bar with a back button and the screen title. Hidden on screens that
/// draw their own header.
pub fn show(ctx: &egui::Context, theme: &Theme, screen: ScreenId, outbox: &mut Vec<NavigationEvent>) {
    if !screen.shows_nav_bar() {
        return;
    }

    TopBottomPanel::top("nav_bar")
        .frame(
            Frame::none()
                .fill(theme.bg_secondary)
                .inner_margin(Margin::symmetric(theme.spacing, theme.spacing_sm)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("‹ Back").clicked() {
                    outbox.push(NavigationEvent::Back);
                }
                ui.label(
                    RichText::new(screen.title())
                        .size(17.0)
                        .strong()
                        .color(theme.text_primary),
                );
            });
        });
}
