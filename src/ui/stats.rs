use crate::model::MachineStats;
use eframe::egui;

pub fn stats_row(ui: &mut egui::Ui, stats: &MachineStats) {
    ui.columns(3, |cols| {
        stat_box(&mut cols[0], "UNTAGGED", &stats.untagged_display());
        stat_box(&mut cols[1], "TOTAL IDLE", &stats.total_idle);
        stat_box(&mut cols[2], "OFFLINE", &stats.offline_display());
    });
}

fn stat_box(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(label).small().weak());
            ui.label(egui::RichText::new(value).strong());
        });
    });
}
