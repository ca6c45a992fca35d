use std::collections::HashMap;

use crate::model::{Event, EventId};

/// Per-card tagging state: two states (collapsed, expanded) plus the local
/// reason draft. Cards are independent; any number may be expanded at once.
#[derive(Clone, Debug, Default)]
pub struct CardState {
    pub expanded: bool,
    pub draft: String,
}

impl CardState {
    /// Collapsed, draft seeded from the committed reason (empty when untagged).
    pub fn seeded(event: &Event) -> Self {
        Self {
            expanded: false,
            draft: event.reason.clone().unwrap_or_default(),
        }
    }

    /// Header click. Collapsing this way keeps the draft; only Cancel discards it.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Collapse and reset the draft to the event's last-committed reason.
    pub fn cancel(&mut self, event: &Event) {
        self.draft = event.reason.clone().unwrap_or_default();
        self.expanded = false;
    }

    /// The value Save commits. An empty draft is legal and commits as unset.
    pub fn committed_reason(&self) -> Option<String> {
        if self.draft.is_empty() {
            None
        } else {
            Some(self.draft.clone())
        }
    }
}

#[derive(Default)]
pub struct UiState {
    pub search: String,
    /// Created on first touch; survives filter changes, cleared on date change.
    pub cards: HashMap<EventId, CardState>,
    /// Last "add more details" route asked for; following it is outside this app.
    pub requested_route: Option<String>,
}

impl UiState {
    pub fn card_mut(&mut self, event: &Event) -> &mut CardState {
        self.cards
            .entry(event.id.clone())
            .or_insert_with(|| CardState::seeded(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventCategory, EventStore};

    fn untagged_event() -> Event {
        Event {
            id: EventId::new("ev-101"),
            machine_id: "CNC-01".into(),
            date: "2025-06-01".into(),
            start_time: "10:30".into(),
            end_time: "10:45".into(),
            duration: "15m".into(),
            category: EventCategory::Untagged,
            reason: None,
        }
    }

    #[test]
    fn seeded_draft_mirrors_the_committed_reason() {
        let mut event = untagged_event();
        assert_eq!(CardState::seeded(&event).draft, "");
        event.reason = Some("Breakdown".into());
        assert_eq!(CardState::seeded(&event).draft, "Breakdown");
    }

    #[test]
    fn toggle_round_trip_keeps_the_committed_draft() {
        let event = untagged_event();
        let mut state = CardState::seeded(&event);
        state.toggle();
        assert!(state.expanded);
        state.toggle();
        assert!(!state.expanded);
        assert_eq!(state.draft, "");
        assert_eq!(state.committed_reason(), event.reason);
    }

    #[test]
    fn cancel_discards_an_uncommitted_selection() {
        let mut store = EventStore::demo("2025-06-01");
        let id = EventId::new("ev-101");
        let before = store.get(&id).unwrap().reason.clone();

        let mut state = CardState::seeded(store.get(&id).unwrap());
        state.toggle();
        state.draft = "Tool Change".into();
        state.cancel(store.get(&id).unwrap());

        assert!(!state.expanded);
        assert_eq!(state.draft, "");
        assert_eq!(store.get(&id).unwrap().reason, before);
        // A later commit is what mutates the store, never the draft edit.
        assert!(store.commit_reason(&id, state.committed_reason()));
        assert_eq!(store.get(&id).unwrap().reason, None);
    }

    #[test]
    fn save_commits_the_selected_reason() {
        let mut store = EventStore::demo("2025-06-01");
        let id = EventId::new("ev-101");

        let mut state = CardState::seeded(store.get(&id).unwrap());
        state.toggle();
        state.draft = "Breakdown".into();
        assert!(store.commit_reason(&id, state.committed_reason()));

        assert_eq!(store.get(&id).unwrap().reason.as_deref(), Some("Breakdown"));
        // Save leaves the card expanded; only toggle/Cancel collapse.
        assert!(state.expanded);
    }

    #[test]
    fn empty_save_commits_unset() {
        let state = CardState::default();
        assert_eq!(state.committed_reason(), None);
    }

    #[test]
    fn cards_are_created_independently_per_event() {
        let mut ui = UiState::default();
        let a = untagged_event();
        let mut b = untagged_event();
        b.id = EventId::new("ev-102");
        b.reason = Some("Power Loss".into());

        ui.card_mut(&a).toggle();
        assert!(ui.card_mut(&a).expanded);
        assert!(!ui.card_mut(&b).expanded);
        assert_eq!(ui.card_mut(&b).draft, "Power Loss");
    }
}
