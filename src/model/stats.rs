/// Machine-wide counters from the reporting backend, rendered as-is; never
/// recomputed from the visible list.
#[derive(Clone, Debug, Default)]
pub struct MachineStats {
    pub untagged_count: u32,
    pub untagged_unit: String,
    pub total_idle: String,
    pub total_offline: String,
    pub total_offline_unit: String,
}

impl MachineStats {
    pub fn untagged_display(&self) -> String {
        format!("{}{}", self.untagged_count, self.untagged_unit)
    }

    pub fn offline_display(&self) -> String {
        format!("{}{}", self.total_offline, self.total_offline_unit)
    }

    pub fn demo() -> Self {
        Self {
            untagged_count: 45,
            untagged_unit: "min".into(),
            total_idle: "2h 10m".into(),
            total_offline: "15".into(),
            total_offline_unit: "min".into(),
        }
    }
}
