//! egui shell: app, theme, screens and shared components

mod app;
pub mod components;
pub mod screens;
mod theme;

pub use app::MockviewApp;
pub use theme::Theme;
