mod event_card;
mod event_list;
mod reason_select;
mod stats;

use crate::app::FloorTagApp;
use crate::model::EventCategory;
use eframe::egui;

pub fn render_app(ctx: &egui::Context, app: &mut FloorTagApp) {
    top_bar(ctx, app);
    status_bar(ctx, app);

    egui::CentralPanel::default().show(ctx, |ui| {
        stats::stats_row(ui, &app.stats);
        ui.add_space(10.0);
        event_list::event_list(ui, app);
    });
}

fn top_bar(ctx: &egui::Context, app: &mut FloorTagApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(app.machine_name());
                ui.label(egui::RichText::new("DOWNTIME EVENTS").small().weak());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("▶").clicked()
                    && let Some(next) = crate::util::date::shift_iso(&app.active_date, 1)
                {
                    app.set_active_date(next);
                }
                ui.monospace(&app.active_date);
                if ui.button("◀").clicked()
                    && let Some(prev) = crate::util::date::shift_iso(&app.active_date, -1)
                {
                    app.set_active_date(prev);
                }
            });
        });
        ui.add_space(6.0);
    });
}

fn status_bar(ctx: &egui::Context, app: &mut FloorTagApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Events: {}", app.events.len()));
            ui.separator();
            ui.monospace(&app.machine_id);
            if app.device_fetch_pending() {
                ui.separator();
                ui.weak("resolving device name...");
            }
            if let Some(route) = &app.ui.requested_route {
                ui.separator();
                ui.label("Details:");
                ui.monospace(route);
            }
        });
    });
}

/// Presentation lookup only; never feeds back into card state.
pub struct CategoryStyle {
    pub icon: &'static str,
    pub tint: egui::Color32,
    pub icon_bg: egui::Color32,
    pub card_fill: egui::Color32,
    pub status_label: &'static str,
}

pub fn category_style(category: EventCategory) -> CategoryStyle {
    match category {
        EventCategory::Untagged => CategoryStyle {
            icon: "❗",
            tint: egui::Color32::from_rgb(234, 88, 12),
            icon_bg: egui::Color32::from_rgb(255, 237, 213),
            card_fill: egui::Color32::from_rgb(255, 247, 237),
            status_label: "Action",
        },
        EventCategory::Offline => CategoryStyle {
            icon: "⚡",
            tint: egui::Color32::from_rgb(239, 68, 68),
            icon_bg: egui::Color32::from_rgb(254, 226, 226),
            card_fill: egui::Color32::from_rgb(254, 242, 242),
            status_label: "Offline",
        },
        EventCategory::Logged => CategoryStyle {
            icon: "✔",
            tint: egui::Color32::from_rgb(107, 114, 128),
            icon_bg: egui::Color32::from_rgb(243, 244, 246),
            card_fill: egui::Color32::WHITE,
            status_label: "Logged",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_lookup_covers_every_category() {
        assert_eq!(category_style(EventCategory::Untagged).status_label, "Action");
        assert_eq!(category_style(EventCategory::Offline).status_label, "Offline");
        assert_eq!(category_style(EventCategory::Logged).status_label, "Logged");
    }
}
