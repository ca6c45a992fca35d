use crate::model::Event;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub active_date: String,
    pub search: String,
}

impl FilterCriteria {
    pub fn new(active_date: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            active_date: active_date.into(),
            search: search.into(),
        }
    }
}

pub fn passes_filter(event: &Event, criteria: &FilterCriteria) -> bool {
    if event.date != criteria.active_date {
        return false;
    }
    if criteria.search.is_empty() {
        return true;
    }

    let q = criteria.search.to_ascii_lowercase();
    let reason = event.reason.as_deref().unwrap_or("");
    event.category.label().to_ascii_lowercase().contains(&q)
        || reason.to_ascii_lowercase().contains(&q)
        || event.start_time.to_ascii_lowercase().contains(&q)
}

/// Stable filter over the input order; an empty result is a normal outcome.
pub fn filter_events<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    criteria: &FilterCriteria,
) -> Vec<&'a Event> {
    events
        .into_iter()
        .filter(|e| passes_filter(e, criteria))
        .collect()
}
