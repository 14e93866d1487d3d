use super::{primary_button, section_title};
use crate::interview::format_mmss;
use crate::models::InterviewResult;
use crate::navigation::{NavigationEvent, Notifier, ScreenId};
use crate::results::{overall_score, ResultSummary, ScoreBadge, FEEDBACK, SKILL_SCORES};
use crate::ui::theme::Theme;
use egui::{ProgressBar, RichText, ScrollArea};

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    result: Option<&InterviewResult>,
    notifier: &Notifier,
    outbox: &mut Vec<NavigationEvent>,
) {
    let Some(result) = result else {
        ui.label("No interview result yet.");
        if ui.button("Home").clicked() {
            outbox.push(NavigationEvent::GoTo(ScreenId::Main));
        }
        return;
    };
    let summary = ResultSummary::from_result(result);
    let overall = overall_score();
    let badge = ScoreBadge::for_score(overall);

    ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        theme.card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(summary.headline()).color(theme.text_secondary));
            ui.horizontal(|ui| {
                ui.label(RichText::new(overall.to_string()).size(40.0).strong());
                ui.label(RichText::new(badge.label()).color(badge_color(theme, badge)));
            });
            ui.label(
                RichText::new(format!(
                    "{} of {} answered · about {} min",
                    summary.answered,
                    summary.question_count,
                    summary.total_minutes()
                ))
                .color(theme.text_muted),
            );
        });

        section_title(ui, theme, "Skills");
        for skill in SKILL_SCORES {
            ui.horizontal(|ui| {
                ui.add_sized([120.0, 18.0], egui::Label::new(skill.skill));
                ui.add(
                    ProgressBar::new(f32::from(skill.score) / 100.0)
                        .text(skill.score.to_string())
                        .desired_width(ui.available_width()),
                );
            });
        }

        for group in FEEDBACK {
            section_title(ui, theme, group.kind.title());
            for item in group.items {
                ui.label(format!("• {}", item));
            }
        }

        section_title(ui, theme, "Your answers");
        for (i, answer) in result.answers.iter().enumerate() {
            let status = if answer.skipped {
                "skipped".to_string()
            } else {
                format_mmss(answer.duration_seconds)
            };
            ui.label(format!("Q{}. {} ({})", i + 1, answer.question, status));
        }

        ui.add_space(theme.spacing_lg);
        ui.horizontal(|ui| {
            if ui.button("Copy summary").clicked() {
                ui.ctx().copy_text(summary.share_message());
                notifier.info("Summary copied to the clipboard.");
            }
            if ui.button("Copy as JSON").clicked() {
                match result.to_json_pretty() {
                    Ok(json) => {
                        ui.ctx().copy_text(json);
                        notifier.info("Result copied as JSON.");
                    }
                    Err(e) => notifier.error(e.user_message()),
                }
            }
            if ui.add(primary_button(theme, "Start over")).clicked() {
                outbox.push(NavigationEvent::Restart);
            }
        });
    });
}

fn badge_color(theme: &Theme, badge: ScoreBadge) -> egui::Color32 {
    match badge {
        ScoreBadge::Excellent => theme.success,
        ScoreBadge::Good => theme.primary,
        ScoreBadge::Fair => theme.warning,
        ScoreBadge::NeedsWork => theme.error,
    }
}
