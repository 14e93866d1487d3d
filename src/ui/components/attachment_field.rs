use crate::forms::pick_attachment;
use crate::models::{format_file_size, Attachment, AttachmentRule};
use crate::navigation::Notifier;
use crate::ui::theme::Theme;
use egui::RichText;
use tracing::warn;

/// File slot: a path box and an attach button, or the attached file with
/// a remove button. Rejected files surface as an error notice.
pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    label: &str,
    path: &mut String,
    slot: &mut Option<Attachment>,
    rule: &AttachmentRule,
    notifier: &Notifier,
) {
    let heading = ui.label(RichText::new(label).strong());

    match slot {
        Some(file) => {
            let mut remove = false;
            ui.horizontal(|ui| {
                ui.label(RichText::new(&file.name).color(theme.text_primary));
                ui.label(RichText::new(file.display_size()).color(theme.text_muted));
                remove = ui.button("Remove").clicked();
            });
            if remove {
                *slot = None;
            }
        }
        None => {
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(path)
                        .hint_text("Path to file")
                        .desired_width(240.0),
                )
                .labelled_by(heading.id);
                if ui.button(format!("Attach {}", label.to_lowercase())).clicked() {
                    match pick_attachment(path.trim(), rule) {
                        Ok(Some(file)) => {
                            *slot = Some(file);
                            path.clear();
                        }
                        Ok(None) => {}
                        Err(e) => {
                            if !e.is_recoverable() {
                                warn!("[FORM] Could not read {}: {}", path, e);
                            }
                            notifier.error(e.user_message());
                        }
                    }
                }
            });
            ui.label(
                RichText::new(format!(
                    "{} up to {}",
                    rule.label,
                    format_file_size(rule.max_bytes)
                ))
                .small()
                .color(theme.text_muted),
            );
        }
    }
}
