use crate::app::CardState;
use crate::model::{Event, EventCategory};
use crate::ui::{category_style, reason_select::reason_select};
use eframe::egui;

/// Follow-up the caller performs; the store is mutated there, not here.
pub enum CardAction {
    SaveReason,
    OpenDetails,
}

pub fn event_card(ui: &mut egui::Ui, event: &Event, state: &mut CardState) -> Option<CardAction> {
    let style = category_style(event.category);
    let mut action = None;

    egui::Frame::group(ui.style())
        .fill(style.card_fill)
        .rounding(8.0)
        .show(ui, |ui| {
            let header = ui.horizontal(|ui| {
                egui::Frame::none()
                    .fill(style.icon_bg)
                    .rounding(6.0)
                    .inner_margin(egui::Margin::same(6.0))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(style.icon).color(style.tint));
                    });

                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(card_title(event)).strong());
                    ui.label(
                        egui::RichText::new(format!(
                            "{} - {} • {}",
                            event.start_time, event.end_time, event.duration
                        ))
                        .small()
                        .weak(),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(if state.expanded { "▲" } else { "▼" }).weak());
                    ui.label(
                        egui::RichText::new(style.status_label)
                            .small()
                            .color(style.tint),
                    );
                });
            });

            // The whole header row is the toggle, same as clicking the
            // chevron.
            let header_id = ui.make_persistent_id(("card_header", event.id.as_str()));
            let response = ui
                .interact(header.response.rect, header_id, egui::Sense::click())
                .on_hover_text(format!("{} on {}", event.machine_id, event.date));
            if response.clicked() {
                state.toggle();
            }

            if state.expanded {
                ui.separator();
                ui.label(egui::RichText::new("REASON CODE").small().weak());
                reason_select(ui, &event.id, event.category, &mut state.draft);

                if ui.link("Add more details").clicked() {
                    action = Some(CardAction::OpenDetails);
                }

                ui.add_space(4.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        action = Some(CardAction::SaveReason);
                    }
                    if ui.button("Cancel").clicked() {
                        state.cancel(event);
                    }
                });
            }
        });

    action
}

fn card_title(event: &Event) -> String {
    if event.category == EventCategory::Logged
        && let Some(reason) = &event.reason
    {
        format!("{} • {reason}", event.category.label())
    } else {
        event.category.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventCategory, EventId};

    fn event(category: EventCategory, reason: Option<&str>) -> Event {
        Event {
            id: EventId::new("ev-1"),
            machine_id: "CNC-01".to_string(),
            date: "2025-06-15".to_string(),
            start_time: "10:30".to_string(),
            end_time: "10:45".to_string(),
            duration: "15m".to_string(),
            category,
            reason: reason.map(str::to_string),
        }
    }

    #[test]
    fn logged_title_carries_the_reason() {
        let ev = event(EventCategory::Logged, Some("Tool Change"));
        assert_eq!(card_title(&ev), "Logged • Tool Change");
    }

    #[test]
    fn untagged_title_is_the_bare_label() {
        let ev = event(EventCategory::Untagged, None);
        assert_eq!(card_title(&ev), "Untagged");
    }

    #[test]
    fn logged_without_reason_falls_back_to_label() {
        let ev = event(EventCategory::Logged, None);
        assert_eq!(card_title(&ev), "Logged");
    }
}
