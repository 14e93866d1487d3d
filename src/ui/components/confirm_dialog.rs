use crate::interview::PromptKind;
use crate::ui::theme::Theme;
use egui::{Align2, RichText, Window};

/// Modal for a pending redo/skip prompt. Returns the answer once the user
/// picks a button.
pub fn show(ctx: &egui::Context, theme: &Theme, kind: PromptKind) -> Option<bool> {
    let mut answer = None;

    Window::new(kind.title())
        .id(egui::Id::new("confirm_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(kind.message()).color(theme.text_secondary));
            ui.add_space(theme.spacing);
            ui.horizontal(|ui| {
                if ui.button(kind.cancel_label()).clicked() {
                    answer = Some(false);
                }
                let confirm = egui::Button::new(
                    RichText::new(kind.confirm_label()).color(egui::Color32::WHITE),
                )
                .fill(match kind {
                    PromptKind::Skip => theme.error,
                    PromptKind::Redo => theme.primary,
                });
                if ui.add(confirm).clicked() {
                    answer = Some(true);
                }
            });
        });

    answer
}
