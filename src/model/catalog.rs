use crate::model::EventCategory;

pub const IDLE_REASON_CODES: [&str; 7] = [
    "Breakdown",
    "No Operator",
    "No Work / Material",
    "Tool Change",
    "Operator Break",
    "Machine Setup",
    "Quality Check",
];

pub const OFFLINE_REASON_CODES: [&str; 5] = [
    "Power Loss",
    "MCB Trip",
    "Sensor Failure",
    "Network Issue",
    "Emergency Stop",
];

/// Catalog for a category. Offline events tag against the offline codes;
/// every other category, Logged included, uses the idle catalog.
pub fn reason_catalog(category: EventCategory) -> &'static [&'static str] {
    match category {
        EventCategory::Offline => &OFFLINE_REASON_CODES,
        _ => &IDLE_REASON_CODES,
    }
}

pub fn catalog_label(category: EventCategory) -> &'static str {
    match category {
        EventCategory::Offline => "Offline Codes",
        _ => "Idle Codes",
    }
}
