use crate::models::catalog::{CATEGORIES, LOCATIONS};
use crate::models::{JobFilter, JobListing};
use crate::navigation::{NavigationEvent, ScreenId};
use crate::ui::theme::Theme;
use egui::{RichText, ScrollArea};

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    listings: &[JobListing],
    filter: &mut JobFilter,
    outbox: &mut Vec<NavigationEvent>,
) {
    ui.horizontal(|ui| {
        if ui.button("‹ Home").clicked() {
            outbox.push(NavigationEvent::Back);
        }
        ui.label(RichText::new("Job listings").size(20.0).strong());
    });

    let search = ui.label("Search");
    ui.add(
        egui::TextEdit::singleline(&mut filter.query)
            .hint_text("Title or company")
            .desired_width(f32::INFINITY),
    )
    .labelled_by(search.id);

    ui.horizontal_wrapped(|ui| {
        for category in CATEGORIES {
            let selected = filter.categories.contains(*category);
            if ui.selectable_label(selected, *category).clicked() {
                filter.toggle_category(category);
            }
        }
    });
    ui.horizontal_wrapped(|ui| {
        for location in LOCATIONS {
            let selected = filter.locations.contains(*location);
            if ui.selectable_label(selected, *location).clicked() {
                filter.toggle_location(location);
            }
        }
        if filter.is_active() && ui.small_button("Clear filters").clicked() {
            filter.clear();
        }
    });

    let visible = filter.apply(listings);
    ui.label(
        RichText::new(format!("{} listings", visible.len()))
            .small()
            .color(theme.text_muted),
    );

    ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        if visible.is_empty() {
            ui.label(RichText::new("No listings match your filters.").color(theme.text_muted));
        }
        for job in visible {
            theme.card().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&job.title).strong().color(theme.text_primary));
                ui.label(RichText::new(&job.company).color(theme.text_secondary));
                ui.label(
                    RichText::new(format!(
                        "{} · {} · {}",
                        job.location, job.experience, job.deadline
                    ))
                    .small()
                    .color(theme.text_muted),
                );
                ui.horizontal_wrapped(|ui| {
                    for tag in &job.tags {
                        ui.label(RichText::new(format!("#{}", tag)).small().color(theme.primary));
                    }
                });
                if ui.button(format!("View {}", job.title)).clicked() {
                    outbox.push(NavigationEvent::SelectJob(job.clone()));
                    outbox.push(NavigationEvent::GoTo(ScreenId::JobDetail));
                }
            });
            ui.add_space(theme.spacing_sm);
        }
    });
}
