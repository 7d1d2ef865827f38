use crate::domain::permission::PermissionGate;
use crate::domain::platform::{AdapterPlatform, PermissionPlatform, PermissionRequest, RequestPoll};
use crate::domain::reducer::{reduce, Effect, ScanEvent, ScanState};
use tracing::{debug, info, warn};

/// Owns the screen state and runs reducer effects against the platform.
pub struct ScanController<A, P> {
    state: ScanState,
    gate: PermissionGate,
    pending: Option<PermissionRequest>,
    adapter: A,
    permissions: P,
}

impl<A: AdapterPlatform, P: PermissionPlatform> ScanController<A, P> {
    pub fn new(adapter: A, permissions: P) -> Self {
        Self {
            state: ScanState::default(),
            gate: PermissionGate::default(),
            pending: None,
            adapter,
            permissions,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn permissions(&self) -> &P {
        &self.permissions
    }

    pub fn permissions_mut(&mut self) -> &mut P {
        &mut self.permissions
    }

    /// Whether a permission request is waiting for the platform's answer
    #[cfg(test)]
    pub fn is_awaiting_permissions(&self) -> bool {
        self.pending.is_some()
    }

    pub fn enable_bluetooth(&mut self) {
        let adapter_enabled = self.adapter.is_enabled();
        self.dispatch(ScanEvent::BluetoothToggleRequested { adapter_enabled });
    }

    pub fn toggle_scan(&mut self) {
        let permissions = self.gate.status(&self.permissions);
        self.dispatch(ScanEvent::ScanToggleRequested { permissions });
    }

    /// Deliver a resolved permission request, if any. Call once per frame.
    pub fn poll(&mut self) {
        let Some(request) = self.pending.as_mut() else {
            return;
        };

        if let RequestPoll::Ready(result) = request.poll() {
            self.pending = None;
            debug!("Permission result: {:?}", result);
            self.dispatch(ScanEvent::PermissionsResolved(result));
        }
    }

    fn dispatch(&mut self, event: ScanEvent) {
        let transition = reduce(self.state, event);
        self.state = transition.state;
        for effect in transition.effects {
            self.run(effect);
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::RequestAdapterEnable => {
                info!("Requesting Bluetooth enable");
                if let Err(e) = self.adapter.request_enable() {
                    warn!("Bluetooth enable request failed: {}", e);
                }
            }
            Effect::RefreshAdapterState => {
                let enabled = self.adapter.is_enabled();
                self.dispatch(ScanEvent::AdapterChecked { enabled });
            }
            Effect::RequestPermissions(capabilities) => {
                if self.pending.is_some() {
                    debug!("Permission request already in flight");
                    return;
                }
                info!("Requesting permissions: {:?}", capabilities);
                self.pending = Some(self.permissions.request(&capabilities));
            }
            Effect::StartScan => info!("TESSEN scan started"),
            Effect::StopScan => info!("TESSEN scan stopped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Capability, PermissionResult, REQUIRED_CAPABILITIES};
    use crate::domain::platform::PlatformError;
    use std::collections::HashSet;
    use tokio::sync::oneshot;

    #[derive(Default)]
    struct FakeAdapter {
        enabled: bool,
        enable_requests: usize,
        // Radio state after an enable request has been handled by the host
        turns_on: bool,
    }

    impl AdapterPlatform for FakeAdapter {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn request_enable(&mut self) -> Result<(), PlatformError> {
            self.enable_requests += 1;
            if self.turns_on {
                self.enabled = true;
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakePermissions {
        granted: HashSet<Capability>,
        requests: usize,
        reply: Option<oneshot::Sender<PermissionResult>>,
    }

    impl FakePermissions {
        fn all_granted() -> Self {
            Self {
                granted: REQUIRED_CAPABILITIES.into_iter().collect(),
                ..Default::default()
            }
        }

        fn answer(&mut self, result: PermissionResult) {
            let sender = self.reply.take().expect("no request in flight");
            sender.send(result).unwrap();
        }
    }

    impl PermissionPlatform for FakePermissions {
        fn is_granted(&self, capability: Capability) -> bool {
            self.granted.contains(&capability)
        }

        fn request(&mut self, _capabilities: &[Capability]) -> PermissionRequest {
            self.requests += 1;
            let (sender, request) = PermissionRequest::channel();
            self.reply = Some(sender);
            request
        }
    }

    fn enabled_adapter() -> FakeAdapter {
        FakeAdapter {
            enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn initial_state_ignores_adapter() {
        let controller = ScanController::new(enabled_adapter(), FakePermissions::default());
        assert_eq!(controller.state(), ScanState::default());
    }

    #[test]
    fn granted_toggle_scans_without_request() {
        let mut controller = ScanController::new(enabled_adapter(), FakePermissions::all_granted());
        controller.toggle_scan();

        assert!(controller.state().is_scanning);
        assert_eq!(controller.permissions().requests, 0);
        assert!(!controller.is_awaiting_permissions());
    }

    #[test]
    fn denied_request_leaves_scan_idle() {
        let mut controller = ScanController::new(enabled_adapter(), FakePermissions::default());
        controller.toggle_scan();
        assert_eq!(controller.permissions().requests, 1);
        assert!(!controller.state().is_scanning);

        let mut answer = PermissionResult::uniform(&REQUIRED_CAPABILITIES, true);
        answer.insert(Capability::BluetoothScan, false);
        controller.permissions_mut().answer(answer);
        controller.poll();

        assert!(!controller.state().is_scanning);
        assert!(!controller.is_awaiting_permissions());
    }

    #[test]
    fn granted_request_starts_scan_on_poll() {
        let mut controller = ScanController::new(enabled_adapter(), FakePermissions::default());
        controller.toggle_scan();
        controller.poll();
        assert!(!controller.state().is_scanning);

        controller
            .permissions_mut()
            .answer(PermissionResult::uniform(&REQUIRED_CAPABILITIES, true));
        controller.poll();
        assert!(controller.state().is_scanning);
    }

    #[test]
    fn dropped_request_is_denial() {
        let mut controller = ScanController::new(enabled_adapter(), FakePermissions::default());
        controller.toggle_scan();
        controller.permissions_mut().reply = None;
        controller.poll();

        assert!(!controller.state().is_scanning);
        assert!(!controller.is_awaiting_permissions());
    }

    #[test]
    fn second_toggle_while_pending_does_not_request_again() {
        let mut controller = ScanController::new(enabled_adapter(), FakePermissions::default());
        controller.toggle_scan();
        controller.toggle_scan();
        assert_eq!(controller.permissions().requests, 1);
    }

    #[test]
    fn toggle_while_scanning_stops_regardless_of_grants() {
        let mut controller = ScanController::new(enabled_adapter(), FakePermissions::all_granted());
        controller.toggle_scan();
        controller.permissions_mut().granted.clear();
        controller.toggle_scan();

        assert!(!controller.state().is_scanning);
        assert_eq!(controller.permissions().requests, 0);
    }

    #[test]
    fn enable_on_enabled_adapter_only_refreshes() {
        let mut controller = ScanController::new(enabled_adapter(), FakePermissions::default());
        controller.enable_bluetooth();

        assert!(controller.state().is_bluetooth_enabled);
        assert_eq!(controller.adapter.enable_requests, 0);
    }

    #[test]
    fn enable_reads_state_right_after_request() {
        let mut controller = ScanController::new(FakeAdapter::default(), FakePermissions::default());
        controller.enable_bluetooth();

        // The host has not switched the radio on yet.
        assert_eq!(controller.adapter.enable_requests, 1);
        assert!(!controller.state().is_bluetooth_enabled);

        controller.adapter.enabled = true;
        controller.enable_bluetooth();
        assert!(controller.state().is_bluetooth_enabled);
        assert_eq!(controller.adapter.enable_requests, 1);
    }

    #[test]
    fn enable_reflects_synchronous_hosts() {
        let adapter = FakeAdapter {
            turns_on: true,
            ..Default::default()
        };
        let mut controller = ScanController::new(adapter, FakePermissions::default());
        controller.enable_bluetooth();
        assert!(controller.state().is_bluetooth_enabled);
    }
}
