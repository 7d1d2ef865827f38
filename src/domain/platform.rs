//! Platform Ports
//!
//! The host services the screen controller depends on. Concrete
//! implementations live in `infrastructure`; tests use in-memory fakes.

use crate::domain::models::{Capability, PermissionResult};
use thiserror::Error;
use tokio::sync::oneshot;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no Bluetooth settings command configured")]
    EmptyCommand,

    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(any(target_os = "linux", windows))]
    #[error("failed to start the Bluetooth runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[cfg(target_os = "linux")]
    #[error("BlueZ call failed: {0}")]
    Bluez(#[from] bluer::Error),

    #[cfg(windows)]
    #[error("WinRT call failed: {0}")]
    WinRt(#[from] windows::core::Error),
}

/// The host's Bluetooth radio.
pub trait AdapterPlatform {
    /// Radio state at the time of the call
    fn is_enabled(&self) -> bool;

    /// Ask the host to turn the radio on. Returns as soon as the request is
    /// issued; the outcome is only visible to a later `is_enabled` call.
    fn request_enable(&mut self) -> Result<(), PlatformError>;
}

/// The host's runtime permission service.
pub trait PermissionPlatform {
    fn is_granted(&self, capability: Capability) -> bool;

    /// Issue one batched request. The answer arrives later through the
    /// returned handle.
    fn request(&mut self, capabilities: &[Capability]) -> PermissionRequest;
}

impl<T: AdapterPlatform + ?Sized> AdapterPlatform for Box<T> {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn request_enable(&mut self) -> Result<(), PlatformError> {
        (**self).request_enable()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RequestPoll {
    Pending,
    Ready(PermissionResult),
}

/// Single-fire handle to an outstanding permission request.
#[derive(Debug)]
pub struct PermissionRequest {
    receiver: oneshot::Receiver<PermissionResult>,
}

impl PermissionRequest {
    /// Create a linked sender / request pair
    pub fn channel() -> (oneshot::Sender<PermissionResult>, Self) {
        let (sender, receiver) = oneshot::channel();
        (sender, Self { receiver })
    }

    /// Check for the answer without blocking. A sender dropped without
    /// answering resolves as an empty (denied) result.
    pub fn poll(&mut self) -> RequestPoll {
        match self.receiver.try_recv() {
            Ok(result) => RequestPoll::Ready(result),
            Err(oneshot::error::TryRecvError::Empty) => RequestPoll::Pending,
            Err(oneshot::error::TryRecvError::Closed) => RequestPoll::Ready(PermissionResult::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::REQUIRED_CAPABILITIES;

    #[test]
    fn request_resolves_once_answered() {
        let (sender, mut request) = PermissionRequest::channel();
        assert_eq!(request.poll(), RequestPoll::Pending);

        let answer = PermissionResult::uniform(&REQUIRED_CAPABILITIES, true);
        sender.send(answer.clone()).unwrap();
        assert_eq!(request.poll(), RequestPoll::Ready(answer));
    }

    #[test]
    fn dropped_sender_is_a_denial() {
        let (sender, mut request) = PermissionRequest::channel();
        drop(sender);
        match request.poll() {
            RequestPoll::Ready(result) => assert!(!result.all_granted()),
            RequestPoll::Pending => panic!("dropped request should resolve"),
        }
    }
}
