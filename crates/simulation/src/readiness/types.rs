//! Readiness gate state: which assets the scene waits on and how far each has got.

use bevy::prelude::*;

use crate::config::{ENVIRONMENT_MAP_PATH, MODEL_PATH};

/// The two assets the scene needs before it can leave `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    EnvironmentMap,
    Model,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::EnvironmentMap, AssetKind::Model];

    /// Human-readable label used in log lines and error messages.
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::EnvironmentMap => "environment map",
            AssetKind::Model => "model",
        }
    }

    /// Path relative to the asset root.
    pub fn path(self) -> &'static str {
        match self {
            AssetKind::EnvironmentMap => ENVIRONMENT_MAP_PATH,
            AssetKind::Model => MODEL_PATH,
        }
    }
}

/// Progress of a single asset slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotStatus {
    #[default]
    Pending,
    Loaded,
    /// Terminal: there is no retry, so a failed slot never becomes `Loaded`.
    Failed,
}

/// Result of feeding one completion signal into the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// At least one asset is still pending and none has failed.
    Waiting,
    /// This signal completed the set. Returned exactly once per gate.
    BecameReady,
    /// The gate already fired; the signal changed nothing.
    AlreadyReady,
    /// An asset failed. The gate will never fire.
    Blocked,
}

/// Two-slot readiness gate.
///
/// Fires at most once, on the first signal after which both slots are
/// `Loaded`. Signals may arrive in any order, including both in one frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct LoadGate {
    environment: SlotStatus,
    model: SlotStatus,
    fired: bool,
}

impl LoadGate {
    pub fn status(&self, kind: AssetKind) -> SlotStatus {
        match kind {
            AssetKind::EnvironmentMap => self.environment,
            AssetKind::Model => self.model,
        }
    }

    fn slot_mut(&mut self, kind: AssetKind) -> &mut SlotStatus {
        match kind {
            AssetKind::EnvironmentMap => &mut self.environment,
            AssetKind::Model => &mut self.model,
        }
    }

    /// Record a successful load.
    pub fn record_loaded(&mut self, kind: AssetKind) -> GateOutcome {
        if self.fired {
            return GateOutcome::AlreadyReady;
        }
        let slot = self.slot_mut(kind);
        if *slot == SlotStatus::Pending {
            *slot = SlotStatus::Loaded;
        }
        self.evaluate()
    }

    /// Record a failed load. Once any slot fails the gate stays blocked.
    pub fn record_failed(&mut self, kind: AssetKind) -> GateOutcome {
        if self.fired {
            return GateOutcome::AlreadyReady;
        }
        *self.slot_mut(kind) = SlotStatus::Failed;
        GateOutcome::Blocked
    }

    fn evaluate(&mut self) -> GateOutcome {
        match (self.environment, self.model) {
            (SlotStatus::Loaded, SlotStatus::Loaded) => {
                self.fired = true;
                GateOutcome::BecameReady
            }
            (SlotStatus::Failed, _) | (_, SlotStatus::Failed) => GateOutcome::Blocked,
            _ => GateOutcome::Waiting,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.fired
    }

    pub fn is_blocked(&self) -> bool {
        self.environment == SlotStatus::Failed || self.model == SlotStatus::Failed
    }

    /// Slots that are not `Loaded`, in declaration order.
    pub fn unresolved(&self) -> Vec<(AssetKind, SlotStatus)> {
        AssetKind::ALL
            .iter()
            .map(|&kind| (kind, self.status(kind)))
            .filter(|&(_, status)| status != SlotStatus::Loaded)
            .collect()
    }
}
