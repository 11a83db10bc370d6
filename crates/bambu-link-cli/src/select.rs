//! Device selection strategies.
//!
//! Exactly one device is chosen per run. The strategy is fixed at startup
//! from the flag surface and the terminal; all three implement the same
//! "pick one device from a non-empty list" contract.

use bambu_link_core::types::Device;

use crate::cli::RunMode;
use crate::error::{CliError, Result};
use crate::prompt;

/// How to pick the one device a run operates on.
#[derive(Debug, Clone)]
pub enum Selection {
    /// `--serial` was given: exact match or failure.
    BySerial(String),
    /// Attached to a terminal: numbered prompt.
    Interactive,
    /// Scripted with no serial: first online printer, else the first one.
    FirstAvailable,
}

/// Resolve the selection strategy once at startup.
pub fn resolve(serial: Option<String>, mode: RunMode) -> Selection {
    match serial {
        Some(s) => Selection::BySerial(s),
        None if mode == RunMode::Interactive => Selection::Interactive,
        None => Selection::FirstAvailable,
    }
}

impl Selection {
    /// Pick one device from a non-empty list.
    pub async fn pick(&self, devices: &[Device]) -> Result<Device> {
        match self {
            Selection::BySerial(serial) => devices
                .iter()
                .find(|d| d.dev_id == *serial)
                .cloned()
                .ok_or_else(|| CliError::DeviceNotFound(serial.clone())),

            Selection::Interactive => {
                let listed = devices.to_vec();
                let idx = tokio::task::spawn_blocking(move || prompt::pick_device(&listed))
                    .await
                    .map_err(|_| CliError::Cancelled)??;
                Ok(devices[idx].clone())
            }

            Selection::FirstAvailable => Ok(devices
                .iter()
                .find(|d| d.online)
                .unwrap_or(&devices[0])
                .clone()),
        }
    }
}
