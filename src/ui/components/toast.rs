//! Short-lived notices in the bottom corner

use crate::navigation::{Notice, NoticeLevel};
use crate::ui::theme::Theme;
use crossbeam_channel::Receiver;
use egui::{Align2, Area, Frame, Margin, RichText};
use std::time::Duration;

const TOAST_TTL: f64 = 3.0;

struct Toast {
    notice: Notice,
    shown_at: f64,
}

#[derive(Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every notice waiting on `rx`
    pub fn collect(&mut self, rx: &Receiver<Notice>, now: f64) {
        for notice in rx.try_iter() {
            self.items.push(Toast {
                notice,
                shown_at: now,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|t| t.notice.message.as_str())
    }

    /// Draw live toasts and drop expired ones. Returns how long until the
    /// next one expires.
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<Duration> {
        let now = ctx.input(|i| i.time);
        self.items.retain(|t| now - t.shown_at < TOAST_TTL);
        if self.items.is_empty() {
            return None;
        }

        Area::new(egui::Id::new("toasts"))
            .anchor(Align2::CENTER_BOTTOM, [0.0, -theme.spacing_lg])
            .show(ctx, |ui| {
                for toast in &self.items {
                    let color = match toast.notice.level {
                        NoticeLevel::Info => theme.success,
                        NoticeLevel::Error => theme.error,
                    };
                    Frame::none()
                        .fill(theme.bg_tertiary)
                        .rounding(theme.button_rounding)
                        .inner_margin(Margin::symmetric(theme.spacing, theme.spacing_sm))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&toast.notice.message).color(color));
                        });
                }
            });

        self.items
            .iter()
            .map(|t| TOAST_TTL - (now - t.shown_at))
            .fold(None, |min: Option<f64>, left| {
                Some(min.map_or(left, |m| m.min(left)))
            })
            .map(|secs| Duration::from_secs_f64(secs.max(0.0)))
    }
}
