#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventCategory {
    Untagged,
    Offline,
    Logged,
}

impl EventCategory {
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Untagged => "Untagged",
            EventCategory::Offline => "Offline",
            EventCategory::Logged => "Logged",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Event {
    pub id: EventId,
    pub machine_id: String,
    /// ISO `YYYY-MM-DD`; compared by string equality against the active date.
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    /// Fixed at creation; only `reason` changes after that, via the store.
    pub category: EventCategory,
    pub reason: Option<String>,
}
