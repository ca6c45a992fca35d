use crate::app::FloorTagApp;
use eframe::egui;

pub fn run() -> eframe::Result<()> {
    let (machine_param, active_date) = parse_args();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("FloorTag")
            .with_inner_size([440.0, 780.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FloorTag",
        native_options,
        Box::new(move |cc| {
            // Card tints assume a light background.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(FloorTagApp::new(&machine_param, active_date))
        }),
    )
}

/// `floortag [MACHINE_ID] [--date=YYYY-MM-DD]`. The machine id may arrive
/// percent-encoded; decoding happens in the app, not here.
fn parse_args() -> (String, String) {
    let mut machine = None;
    let mut date = None;
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--date=") {
            date = Some(value.to_string());
        } else if machine.is_none() {
            machine = Some(arg);
        }
    }
    (
        machine.unwrap_or_else(|| "CNC-01".into()),
        date.unwrap_or_else(crate::util::date::today_iso),
    )
}
