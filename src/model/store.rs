use crate::model::{Event, EventCategory, EventId, FilterCriteria, filter_events};

/// Event collection for one machine, in the order the data source delivered
/// it. Events are never removed; the only mutation is `commit_reason`.
#[derive(Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Single-writer commit path for the tagging workflow. Returns false when
    /// the id is unknown.
    pub fn commit_reason(&mut self, id: &EventId, reason: Option<String>) -> bool {
        match self.events.iter_mut().find(|e| &e.id == id) {
            Some(event) => {
                event.reason = reason;
                true
            }
            None => false,
        }
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Event> {
        filter_events(self.iter(), criteria)
    }

    /// Three events on the active date plus one history event.
    pub fn demo(active_date: &str) -> Self {
        Self::new(vec![
            Event {
                id: EventId::new("ev-101"),
                machine_id: "CNC-01".into(),
                date: active_date.into(),
                start_time: "10:30".into(),
                end_time: "10:45".into(),
                duration: "15m".into(),
                category: EventCategory::Untagged,
                reason: None,
            },
            Event {
                id: EventId::new("ev-102"),
                machine_id: "LATHE-05".into(),
                date: active_date.into(),
                start_time: "08:00".into(),
                end_time: "08:20".into(),
                duration: "20m".into(),
                category: EventCategory::Offline,
                reason: None,
            },
            Event {
                id: EventId::new("ev-103"),
                machine_id: "CNC-02".into(),
                date: active_date.into(),
                start_time: "09:15".into(),
                end_time: "09:45".into(),
                duration: "30m".into(),
                category: EventCategory::Logged,
                reason: None,
            },
            Event {
                id: EventId::new("ev-099"),
                machine_id: "CNC-01".into(),
                date: "2025-01-01".into(),
                start_time: "14:00".into(),
                end_time: "14:20".into(),
                duration: "20m".into(),
                category: EventCategory::Logged,
                reason: Some("Maintenance".into()),
            },
        ])
    }
}
