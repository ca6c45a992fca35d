use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSummary {
    pub id: String,
    pub device_name: String,
}

/// In-flight device-list load; the UI picks the result up via `poll`.
pub struct DeviceListFetch {
    rx: Receiver<Result<Vec<DeviceSummary>>>,
}

impl DeviceListFetch {
    pub fn poll(&self) -> Option<Result<Vec<DeviceSummary>>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(anyhow!("device list worker died"))),
        }
    }
}

pub fn spawn_device_list(cluster_id: String) -> DeviceListFetch {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(load_device_list(&cluster_id));
    });
    DeviceListFetch { rx }
}

/// JSON from the file named by `FLOORTAG_DEVICES`, or the built-in demo list.
fn load_device_list(cluster_id: &str) -> Result<Vec<DeviceSummary>> {
    let raw = match std::env::var("FLOORTAG_DEVICES") {
        Ok(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("read device list {path}"))?,
        Err(_) => DEMO_DEVICE_LIST.to_string(),
    };
    let devices: Vec<DeviceSummary> = serde_json::from_str(&raw).context("parse device list")?;
    debug!(cluster = cluster_id, count = devices.len(), "device list loaded");
    Ok(devices)
}

const DEMO_DEVICE_LIST: &str = r#"[
  { "id": "CNC-01", "deviceName": "CNC Mill 01" },
  { "id": "CNC-02", "deviceName": "CNC Mill 02" },
  { "id": "LATHE-05", "deviceName": "Lathe 05" }
]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn demo_directory_parses_with_camel_case_names() {
        let devices: Vec<DeviceSummary> = serde_json::from_str(DEMO_DEVICE_LIST).unwrap();
        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].id, "CNC-01");
        assert_eq!(devices[0].device_name, "CNC Mill 01");
    }

    #[test]
    fn background_fetch_delivers_through_poll() {
        let fetch = spawn_device_list("demo-cluster".into());
        let mut result = None;
        for _ in 0..100 {
            if let Some(r) = fetch.poll() {
                result = Some(r);
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        let devices = result.expect("fetch never completed").unwrap();
        assert!(devices.iter().any(|d| d.id == "CNC-01"));
    }
}
