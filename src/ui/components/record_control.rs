//! Round record control for the interview screen
//!
//! The painted state follows the session phase: a mic glyph while idle, the
//! remaining seconds during prep, a stop square while recording and a
//! replay arrow once a take exists.

use crate::interview::{InterviewSession, Phase, Scheduler};
use crate::ui::theme::Theme;
use egui::{Color32, FontId, Key, Pos2, Rect, Sense, Stroke, Vec2};

const RADIUS: f32 = 36.0;

/// What a press on the control asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordAction {
    StartPrep,
    Stop,
    Redo,
}

/// Action for a press in `phase`, if any
pub fn action_for(phase: Phase) -> Option<RecordAction> {
    match phase {
        Phase::Idle => Some(RecordAction::StartPrep),
        Phase::Prep => None,
        Phase::Rec => Some(RecordAction::Stop),
        Phase::Done => Some(RecordAction::Redo),
    }
}

pub struct RecordControl<'a, S: Scheduler> {
    session: &'a mut InterviewSession<S>,
    theme: &'a Theme,
}

impl<'a, S: Scheduler> RecordControl<'a, S> {
    pub fn new(session: &'a mut InterviewSession<S>, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let size = Vec2::splat(RADIUS * 2.0 + 16.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let phase = self.session.phase();
        let blocked = self.session.pending_prompt().is_some();

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, !blocked, label_for(phase))
        });

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, &response);
        }

        let space = ui.input(|i| i.key_pressed(Key::Space));
        // Space belongs to a focused text field, not to the control
        let typing = ui.ctx().wants_keyboard_input();
        let pressed = response.clicked() || (space && !typing);

        if pressed && !blocked {
            match action_for(phase) {
                Some(RecordAction::StartPrep) => self.session.begin_prep(),
                Some(RecordAction::Stop) => self.session.stop_rec(),
                Some(RecordAction::Redo) => self.session.request_redo(),
                None => {}
            }
        }

        response.on_hover_text(label_for(phase))
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, response: &egui::Response) {
        let painter = ui.painter();
        let center = rect.center();
        let phase = self.session.phase();

        let fill = match phase {
            Phase::Rec => self.theme.recording,
            Phase::Prep => self.theme.countdown,
            _ if response.hovered() => self.theme.primary.gamma_multiply(1.2),
            _ => self.theme.primary,
        };
        painter.circle_filled(center, RADIUS, fill);

        match phase {
            Phase::Idle => draw_mic(painter, center),
            Phase::Prep => {
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    self.session.prep_left().to_string(),
                    FontId::proportional(30.0),
                    Color32::WHITE,
                );
            }
            Phase::Rec => {
                painter.rect_filled(
                    Rect::from_center_size(center, Vec2::splat(22.0)),
                    3.0,
                    Color32::WHITE,
                );
                self.draw_pulse(ui, painter, center);
            }
            Phase::Done => draw_replay(painter, center),
        }
    }

    fn draw_pulse(&self, ui: &egui::Ui, painter: &egui::Painter, center: Pos2) {
        let t = ui.ctx().input(|i| i.time);
        let pulse = ((t * 3.0).sin() * 0.5 + 0.5) as f32;
        painter.circle_stroke(
            center,
            RADIUS + 2.0 + pulse * 6.0,
            Stroke::new(
                2.0 + pulse * 2.0,
                self.theme.recording.gamma_multiply((1.0 - pulse) * 0.6),
            ),
        );
        ui.ctx().request_repaint();
    }
}

fn label_for(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Start answer",
        Phase::Prep => "Get ready",
        Phase::Rec => "Stop recording",
        Phase::Done => "Record again",
    }
}

fn draw_mic(painter: &egui::Painter, center: Pos2) {
    let stroke = Stroke::new(2.5, Color32::WHITE);
    painter.rect_filled(
        Rect::from_center_size(center - Vec2::new(0.0, 4.0), Vec2::new(10.0, 18.0)),
        5.0,
        Color32::WHITE,
    );

    // Stand: lower half circle, stem, base
    let arc_center = center + Vec2::new(0.0, 2.0);
    let radius = 12.0;
    let segments = 10;
    for i in 0..segments {
        let a0 = std::f32::consts::PI * (i as f32 / segments as f32);
        let a1 = std::f32::consts::PI * ((i + 1) as f32 / segments as f32);
        painter.line_segment(
            [
                arc_center + Vec2::new(-radius * a0.cos(), radius * a0.sin()),
                arc_center + Vec2::new(-radius * a1.cos(), radius * a1.sin()),
            ],
            stroke,
        );
    }
    let base_y = arc_center.y + radius + 5.0;
    painter.line_segment([Pos2::new(center.x, arc_center.y + radius), Pos2::new(center.x, base_y)], stroke);
    painter.line_segment(
        [Pos2::new(center.x - 7.0, base_y), Pos2::new(center.x + 7.0, base_y)],
        stroke,
    );
}

fn draw_replay(painter: &egui::Painter, center: Pos2) {
    let stroke = Stroke::new(3.0, Color32::WHITE);
    let radius = 13.0;
    let segments = 14;
    // Three-quarter circle, open at the top right
    let start = -std::f32::consts::FRAC_PI_4;
    let sweep = std::f32::consts::PI * 1.5;
    let point = |a: f32| center + Vec2::new(radius * a.cos(), radius * a.sin());
    for i in 0..segments {
        let a0 = start - sweep * (i as f32 / segments as f32);
        let a1 = start - sweep * ((i + 1) as f32 / segments as f32);
        painter.line_segment([point(a0), point(a1)], stroke);
    }
    let tip = point(start);
    painter.add(egui::Shape::convex_polygon(
        vec![tip + Vec2::new(-7.0, -3.0), tip + Vec2::new(3.0, -8.0), tip + Vec2::new(3.0, 4.0)],
        Color32::WHITE,
        Stroke::NONE,
    ));
}
