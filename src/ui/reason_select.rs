use crate::model::{EventCategory, EventId, catalog_label, reason_catalog};
use eframe::egui;

/// Single-choice picker over the fixed catalog; writes into `draft` only.
pub fn reason_select(
    ui: &mut egui::Ui,
    event_id: &EventId,
    category: EventCategory,
    draft: &mut String,
) {
    let popup_id = ui.make_persistent_id(("reason_select", event_id.as_str()));

    let text = if draft.is_empty() {
        egui::RichText::new("Select a reason...").weak()
    } else {
        egui::RichText::new(draft.as_str())
    };
    let response = ui.add_sized([ui.available_width(), 0.0], egui::Button::new(text));
    if response.clicked() {
        ui.memory_mut(|mem| mem.toggle_popup(popup_id));
    }

    // Clicking outside or pressing Escape closes the popup for us.
    egui::popup_below_widget(ui, popup_id, &response, |ui| {
        ui.set_min_width(220.0);
        ui.label(egui::RichText::new(catalog_label(category)).small().weak());
        for code in reason_catalog(category) {
            if ui.selectable_label(draft.as_str() == *code, *code).clicked() {
                *draft = (*code).to_string();
                ui.memory_mut(|mem| mem.close_popup());
            }
        }
    });
}
