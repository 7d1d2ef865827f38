use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A host capability the sensor scan depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    BluetoothScan,
    BluetoothConnect,
    FineLocation,
}

impl Capability {
    /// Name shown in the consent dialog
    pub fn label(&self) -> &'static str {
        match self {
            Self::BluetoothScan => "Bluetooth 스캔",
            Self::BluetoothConnect => "Bluetooth 연결",
            Self::FineLocation => "정밀 위치",
        }
    }
}

/// Capabilities requested as one batch before a scan may start.
pub const REQUIRED_CAPABILITIES: [Capability; 3] = [
    Capability::BluetoothScan,
    Capability::BluetoothConnect,
    Capability::FineLocation,
];

/// Answer to a batched permission request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionResult {
    answers: BTreeMap<Capability, bool>,
}

impl PermissionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same answer for every capability in `capabilities`
    #[cfg(test)]
    pub fn uniform(capabilities: &[Capability], granted: bool) -> Self {
        capabilities.iter().map(|c| (*c, granted)).collect()
    }

    #[cfg(test)]
    pub fn insert(&mut self, capability: Capability, granted: bool) {
        self.answers.insert(capability, granted);
    }

    #[cfg(test)]
    pub fn get(&self, capability: Capability) -> Option<bool> {
        self.answers.get(&capability).copied()
    }

    /// True only when something was answered and every answer is a grant.
    /// An empty answer (dismissed dialog, dropped request) is a denial.
    pub fn all_granted(&self) -> bool {
        !self.answers.is_empty() && self.answers.values().all(|granted| *granted)
    }

    pub fn granted(&self) -> impl Iterator<Item = Capability> + '_ {
        self.answers
            .iter()
            .filter(|(_, granted)| **granted)
            .map(|(capability, _)| *capability)
    }
}

impl FromIterator<(Capability, bool)> for PermissionResult {
    fn from_iter<I: IntoIterator<Item = (Capability, bool)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
}
