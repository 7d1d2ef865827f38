//! Adapter Module
//!
//! Reads the host's Bluetooth radio state. Enable requests power the radio
//! on through BlueZ on Linux and otherwise hand off to the operating
//! system's own Bluetooth settings flow.
//!
//! ## Backends
//!
//! - [`bluez`] - Linux, the BlueZ default adapter's `Powered` property
//! - [`winrt`] - Windows, `Windows.Devices.Radios`
//! - [`UnsupportedAdapter`] - everything else, always reports disabled

#[cfg(target_os = "linux")]
pub mod bluez;
#[cfg(windows)]
pub mod winrt;

use crate::domain::platform::{AdapterPlatform, PlatformError};
use std::process::Command;
use tracing::info;

/// Build the adapter for the current host
pub fn default_adapter(settings_command: Vec<String>) -> Box<dyn AdapterPlatform> {
    #[cfg(target_os = "linux")]
    {
        match bluez::BluezAdapter::new() {
            Ok(adapter) => Box::new(adapter),
            Err(e) => {
                tracing::warn!("BlueZ adapter unavailable: {}", e);
                Box::new(UnsupportedAdapter::new(settings_command))
            }
        }
    }

    #[cfg(windows)]
    {
        match winrt::WinRtAdapter::new(settings_command.clone()) {
            Ok(adapter) => Box::new(adapter),
            Err(e) => {
                tracing::warn!("WinRT adapter unavailable: {}", e);
                Box::new(UnsupportedAdapter::new(settings_command))
            }
        }
    }

    #[cfg(not(any(target_os = "linux", windows)))]
    {
        tracing::warn!("No Bluetooth adapter backend for this OS; reporting disabled");
        Box::new(UnsupportedAdapter::new(settings_command))
    }
}

/// Spawn the configured settings command without waiting for it.
pub fn launch_settings_command(command: &[String]) -> Result<(), PlatformError> {
    let (program, args) = command.split_first().ok_or(PlatformError::EmptyCommand)?;

    info!("Opening Bluetooth settings: {}", command.join(" "));
    Command::new(program)
        .args(args)
        .spawn()
        .map(|_| ())
        .map_err(|source| PlatformError::Launch {
            command: command.join(" "),
            source,
        })
}

/// Host without a radio backend
pub struct UnsupportedAdapter {
    settings_command: Vec<String>,
}

impl UnsupportedAdapter {
    pub fn new(settings_command: Vec<String>) -> Self {
        Self { settings_command }
    }
}

impl AdapterPlatform for UnsupportedAdapter {
    fn is_enabled(&self) -> bool {
        false
    }

    fn request_enable(&mut self) -> Result<(), PlatformError> {
        launch_settings_command(&self.settings_command)
    }
}
