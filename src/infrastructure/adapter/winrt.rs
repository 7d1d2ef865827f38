//! Windows radio state through WinRT.

use super::launch_settings_command;
use crate::domain::platform::{AdapterPlatform, PlatformError};
use tracing::debug;
use windows::Devices::Bluetooth::BluetoothAdapter;
use windows::Devices::Radios::RadioState;

pub struct WinRtAdapter {
    // WinRT async operations are driven on a private runtime
    runtime: tokio::runtime::Runtime,
    settings_command: Vec<String>,
}

impl WinRtAdapter {
    pub fn new(settings_command: Vec<String>) -> Result<Self, PlatformError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(PlatformError::Runtime)?;
        Ok(Self {
            runtime,
            settings_command,
        })
    }

    fn radio_state(&self) -> Result<RadioState, PlatformError> {
        self.runtime.block_on(async {
            let adapter = BluetoothAdapter::GetDefaultAsync()?.await?;
            let radio = adapter.GetRadioAsync()?.await?;
            Ok::<_, PlatformError>(radio.State()?)
        })
    }
}

impl AdapterPlatform for WinRtAdapter {
    fn is_enabled(&self) -> bool {
        match self.radio_state() {
            Ok(state) => state == RadioState::On,
            Err(e) => {
                // No default adapter surfaces as an error here.
                debug!("Bluetooth radio lookup failed: {}", e);
                false
            }
        }
    }

    fn request_enable(&mut self) -> Result<(), PlatformError> {
        launch_settings_command(&self.settings_command)
    }
}
