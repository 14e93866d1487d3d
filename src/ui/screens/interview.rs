use super::primary_button;
use crate::interview::{format_mmss, InterviewSession, Phase, Scheduler};
use crate::ui::components::{confirm_dialog, RecordControl};
use crate::ui::theme::Theme;
use egui::{ProgressBar, RichText};

pub fn show<S: Scheduler>(ui: &mut egui::Ui, theme: &Theme, session: &mut InterviewSession<S>) {
    let input = session.input();
    let heading = match (input.position.is_empty(), input.company.is_empty()) {
        (false, false) => format!("{} · {}", input.position, input.company),
        (false, true) => input.position.clone(),
        (true, false) => input.company.clone(),
        (true, true) => "Mock interview".to_string(),
    };
    ui.label(RichText::new(heading).color(theme.text_secondary));

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("Question {} / {}", session.index() + 1, session.total()))
                .strong(),
        );
    });
    ui.add(ProgressBar::new(session.progress_percent() / 100.0).desired_height(6.0));

    ui.add_space(theme.spacing_lg);
    theme.card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(session.current_question())
                .size(18.0)
                .color(theme.text_primary),
        );
    });

    ui.add_space(theme.spacing_lg);
    ui.vertical_centered(|ui| {
        RecordControl::new(session, theme).show(ui);
        ui.add_space(theme.spacing_sm);
        status_line(ui, theme, session);
    });

    ui.add_space(theme.spacing_lg);
    let prompt_open = session.pending_prompt().is_some();
    let recording = session.phase().is_recording();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!recording && !prompt_open, egui::Button::new("Skip question"))
            .clicked()
        {
            session.request_skip();
        }

        let next_label = if session.is_last() { "Finish interview" } else { "Next question" };
        let can_go = session.can_proceed() && !recording && !prompt_open;
        if ui
            .add_enabled(can_go, primary_button(theme, next_label))
            .clicked()
        {
            session.go_next();
        }
    });

    if let Some(kind) = session.pending_prompt() {
        if let Some(accepted) = confirm_dialog::show(ui.ctx(), theme, kind) {
            session.resolve_prompt(accepted);
        }
    }
}

fn status_line<S: Scheduler>(ui: &mut egui::Ui, theme: &Theme, session: &InterviewSession<S>) {
    let config = session.config();
    let (text, color) = match session.phase() {
        Phase::Idle => ("Press the button when you are ready.".to_string(), theme.text_muted),
        Phase::Prep => (
            format!("Recording starts in {}s", session.prep_left()),
            theme.countdown,
        ),
        Phase::Rec => {
            let mut text = format!(
                "Recording {} / {}",
                format_mmss(session.elapsed()),
                format_mmss(config.max_seconds)
            );
            if session.elapsed() < config.min_seconds {
                text.push_str(&format!(
                    " · answer at least {}s to continue",
                    config.min_seconds
                ));
            }
            (text, theme.recording)
        }
        Phase::Done => match session.current_record() {
            Some(record) if record.skipped => ("Skipped".to_string(), theme.text_muted),
            Some(record) if record.duration_seconds < config.min_seconds => (
                format!(
                    "Recorded {}. Too short to continue; record again.",
                    format_mmss(record.duration_seconds)
                ),
                theme.warning,
            ),
            Some(record) => (
                format!("Recorded {}", format_mmss(record.duration_seconds)),
                theme.success,
            ),
            None => (String::new(), theme.text_muted),
        },
    };
    ui.label(RichText::new(text).color(color));
}
