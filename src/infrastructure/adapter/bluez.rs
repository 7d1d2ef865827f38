//! Linux radio state through BlueZ.
//!
//! The radio counts as enabled when the default adapter's `Powered`
//! property is set. Enable requests power the adapter on in the background.

use crate::domain::platform::{AdapterPlatform, PlatformError};
use std::fmt::Display;
use tracing::{debug, info, warn};

pub struct BluezAdapter {
    // Keeps the D-Bus connection and background power requests running
    runtime: tokio::runtime::Runtime,
    session: bluer::Session,
}

impl BluezAdapter {
    pub fn new() -> Result<Self, PlatformError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(PlatformError::Runtime)?;
        let session = runtime.block_on(bluer::Session::new())?;
        info!("BlueZ session created");
        Ok(Self { runtime, session })
    }

    fn is_powered(&self) -> Result<bool, PlatformError> {
        self.runtime.block_on(async {
            let adapter = self.session.default_adapter().await?;
            Ok::<_, PlatformError>(adapter.is_powered().await?)
        })
    }
}

/// Radio state from a `Powered` lookup. No adapter reads as disabled.
fn radio_on<E: Display>(lookup: Result<bool, E>) -> bool {
    match lookup {
        Ok(powered) => powered,
        Err(e) => {
            debug!("Bluetooth adapter lookup failed: {}", e);
            false
        }
    }
}

impl AdapterPlatform for BluezAdapter {
    fn is_enabled(&self) -> bool {
        let enabled = radio_on(self.is_powered());
        debug!("Bluetooth radio enabled: {}", enabled);
        enabled
    }

    fn request_enable(&mut self) -> Result<(), PlatformError> {
        let session = self.session.clone();
        self.runtime.spawn(async move {
            let result = async {
                let adapter = session.default_adapter().await?;
                info!("Powering on Bluetooth adapter {}", adapter.name());
                adapter.set_powered(true).await
            }
            .await;
            if let Err(e) = result {
                warn!("Failed to power on Bluetooth adapter: {}", e);
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powered_off_adapter_reads_disabled() {
        assert!(!radio_on::<String>(Ok(false)));
    }

    #[test]
    fn powered_adapter_reads_enabled() {
        assert!(radio_on::<String>(Ok(true)));
    }

    #[test]
    fn missing_adapter_reads_disabled() {
        assert!(!radio_on(Err("No Bluetooth adapter present")));
    }
}
