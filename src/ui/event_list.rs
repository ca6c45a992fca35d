use crate::app::FloorTagApp;
use crate::model::{EventId, FilterCriteria};
use crate::ui::event_card::{CardAction, event_card};
use crate::util::route;
use eframe::egui;
use tracing::warn;

pub fn event_list(ui: &mut egui::Ui, app: &mut FloorTagApp) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.text_edit_singleline(&mut app.ui.search);
        if ui.button("Clear").clicked() {
            app.ui.search.clear();
        }
    });

    ui.add_space(8.0);

    let criteria = FilterCriteria::new(&app.active_date, &app.ui.search);
    let visible: Vec<EventId> = app
        .events
        .filter(&criteria)
        .into_iter()
        .map(|event| event.id.clone())
        .collect();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Detected Events").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("{} Events", visible.len()));
        });
    });

    if visible.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.weak("No events found for this date");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_source("event_list_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for id in &visible {
                let Some(event) = app.events.get(id) else {
                    continue;
                };
                let state = app.ui.card_mut(event);

                match event_card(ui, event, state) {
                    Some(CardAction::SaveReason) => {
                        let reason = state.committed_reason();
                        if !app.events.commit_reason(id, reason) {
                            warn!(event_id = id.as_str(), "reason commit for unknown event");
                        }
                    }
                    Some(CardAction::OpenDetails) => {
                        app.ui.requested_route =
                            Some(route::detail_route(&app.machine_id, id.as_str()));
                    }
                    None => {}
                }

                ui.add_space(6.0);
            }
        });
}
