//! Consent-backed permission platform
//!
//! Desktop hosts have no runtime permission service for Bluetooth, so the
//! request surfaces as an in-app consent dialog. The dialog answers the
//! pending request; grants are remembered so later scans skip the dialog.

use crate::domain::models::{Capability, PermissionResult};
use crate::domain::platform::{PermissionPlatform, PermissionRequest};
use std::collections::BTreeSet;
use tokio::sync::oneshot;
use tracing::{debug, info};

struct PendingConsent {
    capabilities: Vec<Capability>,
    reply: oneshot::Sender<PermissionResult>,
}

#[derive(Default)]
pub struct ConsentPermissions {
    granted: BTreeSet<Capability>,
    pending: Option<PendingConsent>,
}

impl ConsentPermissions {
    pub fn new(granted: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            granted: granted.into_iter().collect(),
            pending: None,
        }
    }

    /// Capabilities awaiting the user's answer
    pub fn pending(&self) -> Option<&[Capability]> {
        self.pending.as_ref().map(|p| p.capabilities.as_slice())
    }

    pub fn granted(&self) -> Vec<Capability> {
        self.granted.iter().copied().collect()
    }

    /// Resolve the pending consent. Returns the grant set to persist when
    /// it changed.
    pub fn answer(&mut self, allow: bool) -> Option<Vec<Capability>> {
        let pending = self.pending.take()?;
        info!(
            "Consent {} for {:?}",
            if allow { "given" } else { "refused" },
            pending.capabilities
        );

        let result: PermissionResult = pending
            .capabilities
            .iter()
            .map(|c| (*c, allow || self.granted.contains(c)))
            .collect();

        let before = self.granted.len();
        self.granted.extend(result.granted());
        let changed = self.granted.len() != before;

        if pending.reply.send(result).is_err() {
            debug!("Permission request was dropped before the answer arrived");
        }

        changed.then(|| self.granted())
    }

    /// Forget every remembered grant
    pub fn revoke_all(&mut self) {
        info!("Revoking remembered grants");
        self.granted.clear();
    }
}

impl PermissionPlatform for ConsentPermissions {
    fn is_granted(&self, capability: Capability) -> bool {
        self.granted.contains(&capability)
    }

    fn request(&mut self, capabilities: &[Capability]) -> PermissionRequest {
        let (reply, request) = PermissionRequest::channel();
        // A replaced consent drops its sender, which its requester sees as a denial.
        self.pending = Some(PendingConsent {
            capabilities: capabilities.to_vec(),
            reply,
        });
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::REQUIRED_CAPABILITIES;
    use crate::domain::controller::ScanController;
    use crate::domain::platform::RequestPoll;
    use crate::infrastructure::adapter::UnsupportedAdapter;

    #[test]
    fn seeded_grants() {
        let permissions = ConsentPermissions::new([Capability::BluetoothScan]);
        assert!(permissions.is_granted(Capability::BluetoothScan));
        assert!(!permissions.is_granted(Capability::FineLocation));
    }

    #[test]
    fn allow_grants_whole_batch() {
        let mut permissions = ConsentPermissions::default();
        let mut request = permissions.request(&REQUIRED_CAPABILITIES);
        assert_eq!(permissions.pending(), Some(&REQUIRED_CAPABILITIES[..]));

        let persisted = permissions.answer(true);
        assert_eq!(persisted, Some(REQUIRED_CAPABILITIES.to_vec()));
        assert!(permissions.pending().is_none());

        match request.poll() {
            RequestPoll::Ready(result) => assert!(result.all_granted()),
            RequestPoll::Pending => panic!("answer not delivered"),
        }
    }

    #[test]
    fn refuse_keeps_earlier_grants() {
        let mut permissions = ConsentPermissions::new([Capability::BluetoothConnect]);
        let mut request = permissions.request(&REQUIRED_CAPABILITIES);

        assert_eq!(permissions.answer(false), None);
        match request.poll() {
            RequestPoll::Ready(result) => {
                assert!(!result.all_granted());
                assert_eq!(result.get(Capability::BluetoothConnect), Some(true));
                assert_eq!(result.get(Capability::FineLocation), Some(false));
            }
            RequestPoll::Pending => panic!("answer not delivered"),
        }
    }

    #[test]
    fn replaced_request_resolves_as_denied() {
        let mut permissions = ConsentPermissions::default();
        let mut first = permissions.request(&REQUIRED_CAPABILITIES);
        let _second = permissions.request(&REQUIRED_CAPABILITIES);

        assert_eq!(first.poll(), RequestPoll::Ready(PermissionResult::new()));
    }

    #[test]
    fn revoke_clears_grants() {
        let mut permissions = ConsentPermissions::new(REQUIRED_CAPABILITIES);
        permissions.revoke_all();
        assert!(permissions.granted().is_empty());
        assert!(!permissions.is_granted(Capability::BluetoothScan));
    }

    #[test]
    fn answer_without_request_is_noop() {
        let mut permissions = ConsentPermissions::default();
        assert_eq!(permissions.answer(true), None);
    }

    #[test]
    fn consent_drives_controller_into_scanning() {
        let mut controller =
            ScanController::new(UnsupportedAdapter::new(Vec::new()), ConsentPermissions::default());

        controller.toggle_scan();
        assert_eq!(
            controller.permissions().pending(),
            Some(&REQUIRED_CAPABILITIES[..])
        );
        assert!(!controller.state().is_scanning);

        let persisted = controller.permissions_mut().answer(true);
        assert_eq!(persisted, Some(REQUIRED_CAPABILITIES.to_vec()));
        controller.poll();
        assert!(controller.state().is_scanning);

        // Remembered grants skip the dialog on the next start.
        controller.toggle_scan();
        controller.toggle_scan();
        assert!(controller.state().is_scanning);
        assert!(controller.permissions().pending().is_none());
    }

    #[test]
    fn refused_consent_keeps_controller_idle() {
        let mut controller =
            ScanController::new(UnsupportedAdapter::new(Vec::new()), ConsentPermissions::default());

        controller.toggle_scan();
        assert_eq!(controller.permissions_mut().answer(false), None);
        controller.poll();
        assert!(!controller.state().is_scanning);
    }
}
