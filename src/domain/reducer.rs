//! Scan State Reducer
//!
//! All screen state transitions as a pure function of `(state, event)`.
//! Side effects are returned as data and executed by the controller.

use crate::domain::models::{Capability, PermissionResult, ScanPhase, REQUIRED_CAPABILITIES};
use crate::domain::permission::PermissionStatus;

/// Observable screen state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Radio state at the last explicit check, not live
    pub is_bluetooth_enabled: bool,
    pub is_scanning: bool,
}

impl ScanState {
    pub fn phase(&self) -> ScanPhase {
        if self.is_scanning {
            ScanPhase::Scanning
        } else {
            ScanPhase::Idle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    AdapterChecked { enabled: bool },
    BluetoothToggleRequested { adapter_enabled: bool },
    ScanToggleRequested { permissions: PermissionStatus },
    PermissionsResolved(PermissionResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestAdapterEnable,
    RefreshAdapterState,
    RequestPermissions(Vec<Capability>),
    StartScan,
    StopScan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ScanState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: ScanState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

pub fn reduce(state: ScanState, event: ScanEvent) -> Transition {
    match event {
        ScanEvent::AdapterChecked { enabled } => Transition::unchanged(ScanState {
            is_bluetooth_enabled: enabled,
            ..state
        }),

        ScanEvent::BluetoothToggleRequested { adapter_enabled } => {
            let mut effects = Vec::with_capacity(2);
            if !adapter_enabled {
                effects.push(Effect::RequestAdapterEnable);
            }
            // Re-read right away, without waiting for the enable request.
            effects.push(Effect::RefreshAdapterState);
            Transition { state, effects }
        }

        ScanEvent::ScanToggleRequested { permissions } => match (state.phase(), permissions) {
            (ScanPhase::Scanning, _) => Transition {
                state: ScanState {
                    is_scanning: false,
                    ..state
                },
                effects: vec![Effect::StopScan],
            },
            (ScanPhase::Idle, PermissionStatus::AllGranted) => start_scan(state),
            (ScanPhase::Idle, PermissionStatus::Missing(_)) => Transition {
                state,
                effects: vec![Effect::RequestPermissions(REQUIRED_CAPABILITIES.to_vec())],
            },
        },

        ScanEvent::PermissionsResolved(result) => {
            if result.all_granted() && state.phase() == ScanPhase::Idle {
                start_scan(state)
            } else {
                Transition::unchanged(state)
            }
        }
    }
}

fn start_scan(state: ScanState) -> Transition {
    Transition {
        state: ScanState {
            is_scanning: true,
            ..state
        },
        effects: vec![Effect::StartScan],
    }
}
