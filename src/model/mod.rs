mod catalog;
mod event;
pub mod filter;
mod stats;
mod store;

pub use catalog::{catalog_label, reason_catalog};
pub use event::{Event, EventCategory, EventId};
pub use filter::{FilterCriteria, filter_events};
pub use stats::MachineStats;
pub use store::EventStore;
