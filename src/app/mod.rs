mod run;
mod ui_state;

use eframe::egui;
use tracing::warn;

use crate::fetch::{DeviceListFetch, DeviceSummary};
use crate::model::{EventStore, MachineStats};
use crate::util::route;

pub use run::run;
pub use ui_state::{CardState, UiState};

pub struct FloorTagApp {
    pub machine_id: String,
    pub active_date: String,
    pub events: EventStore,
    pub stats: MachineStats,
    pub devices: Vec<DeviceSummary>,
    pub ui: UiState,
    device_fetch: Option<DeviceListFetch>,
}

impl FloorTagApp {
    /// The raw launch parameter is percent-decoded exactly once, here.
    pub fn new(machine_param: &str, active_date: String) -> Self {
        let machine_id = route::decode_route_param(machine_param);
        let events = EventStore::demo(&active_date);

        // Resolve display names only when a cluster is configured, and only
        // while the list is still empty.
        let cluster_id = std::env::var("FLOORTAG_CLUSTER_ID")
            .ok()
            .filter(|id| !id.is_empty());
        let device_fetch = cluster_id.map(crate::fetch::spawn_device_list);

        Self {
            machine_id,
            active_date,
            events,
            stats: MachineStats::demo(),
            devices: Vec::new(),
            ui: UiState::default(),
            device_fetch,
        }
    }

    pub fn machine_name(&self) -> String {
        self.devices
            .iter()
            .find(|d| d.id == self.machine_id)
            .map(|d| d.device_name.clone())
            .unwrap_or_else(|| self.machine_id.clone())
    }

    pub fn device_fetch_pending(&self) -> bool {
        self.device_fetch.is_some()
    }

    /// Date navigation. Leaving a date abandons that date's drafts.
    pub fn set_active_date(&mut self, date: String) {
        if date == self.active_date {
            return;
        }
        self.active_date = date;
        self.ui.cards.clear();
    }

    /// Non-blocking pickup of the device-list fetch; failure is logged and swallowed.
    pub fn poll_devices(&mut self) {
        let Some(fetch) = &self.device_fetch else {
            return;
        };
        let Some(result) = fetch.poll() else {
            return;
        };
        match result {
            Ok(devices) => self.devices = devices,
            Err(err) => warn!("device list fetch failed: {err:#}"),
        }
        self.device_fetch = None;
    }
}

impl eframe::App for FloorTagApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_devices();
        if self.device_fetch_pending() {
            // Pick up the fetch result even without user input.
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }
        crate::ui::render_app(ctx, self);
    }
}
