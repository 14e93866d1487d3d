use super::{primary_button, section_title};
use crate::models::catalog::StepStatus;
use crate::models::{JobDetail, JobListing};
use crate::navigation::{NavigationEvent, ScreenId};
use crate::ui::theme::Theme;
use egui::{RichText, ScrollArea};

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    job: Option<&JobListing>,
    outbox: &mut Vec<NavigationEvent>,
) {
    let Some(job) = job else {
        ui.label("No listing selected.");
        if ui.button("Browse job listings").clicked() {
            outbox.push(NavigationEvent::GoTo(ScreenId::JobList));
        }
        return;
    };
    let detail = JobDetail::for_listing(job);

    ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        theme.card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&job.title).size(20.0).strong());
            ui.label(RichText::new(&job.company).color(theme.text_secondary));
            ui.label(
                RichText::new(format!(
                    "{} · {} · {} · until {}",
                    job.location, job.experience, job.employment_type, job.deadline
                ))
                .small()
                .color(theme.text_muted),
            );
        });

        if let Some(description) = &job.description {
            section_title(ui, theme, "About the role");
            ui.label(description);
        }

        bullet_section(ui, theme, "Responsibilities", &detail.responsibilities);
        bullet_section(ui, theme, "Requirements", &detail.essential);
        bullet_section(ui, theme, "Nice to have", &detail.preferred);

        section_title(ui, theme, "Tech stack");
        ui.horizontal_wrapped(|ui| {
            for tech in &detail.tech_stack {
                ui.label(RichText::new(tech).color(theme.primary));
            }
        });

        section_title(ui, theme, "Hiring process");
        ui.horizontal_wrapped(|ui| {
            for (i, step) in detail.process.iter().enumerate() {
                let color = match step.status {
                    StepStatus::Active => theme.primary,
                    StepStatus::Inactive => theme.text_muted,
                };
                ui.label(RichText::new(format!("{}. {}", i + 1, step.step)).color(color));
            }
        });

        section_title(ui, theme, "Conditions");
        egui::Grid::new("conditions").num_columns(2).show(ui, |ui| {
            for (key, value) in [
                ("Salary", &detail.conditions.salary),
                ("Location", &detail.conditions.work_location),
                ("Type", &detail.conditions.employment_type),
                ("Hours", &detail.conditions.work_hours),
            ] {
                ui.label(RichText::new(key).color(theme.text_muted));
                ui.label(value);
                ui.end_row();
            }
        });

        ui.add_space(theme.spacing_lg);
        if ui
            .add(primary_button(theme, "Apply with a mock interview"))
            .clicked()
        {
            outbox.push(NavigationEvent::StartInterviewFromJob(job.clone()));
        }
    });
}

fn bullet_section(ui: &mut egui::Ui, theme: &Theme, title: &str, items: &[String]) {
    section_title(ui, theme, title);
    for item in items {
        ui.label(format!("• {}", item));
    }
}
