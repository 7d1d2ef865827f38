use crate::domain::models::{Capability, REQUIRED_CAPABILITIES};
use crate::domain::platform::PermissionPlatform;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionStatus {
    AllGranted,
    Missing(Vec<Capability>),
}

/// Checks the batch a scan needs, the same batch the reducer requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionGate;

impl PermissionGate {
    pub fn status<P: PermissionPlatform + ?Sized>(&self, platform: &P) -> PermissionStatus {
        let missing: Vec<Capability> = REQUIRED_CAPABILITIES
            .into_iter()
            .filter(|capability| !platform.is_granted(*capability))
            .collect();

        if missing.is_empty() {
            PermissionStatus::AllGranted
        } else {
            debug!("Missing capabilities: {:?}", missing);
            PermissionStatus::Missing(missing)
        }
    }
}
