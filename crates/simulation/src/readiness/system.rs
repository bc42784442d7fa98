//! ECS systems and plugin for the readiness gate.
//!
//! Loaders (in the rendering crate) never touch `AppState` directly. They send
//! one [`AssetLoadSignal`] per asset and `apply_load_signals` feeds those into
//! the [`LoadGate`], which decides when to move to `AppState::Ready`.

use bevy::prelude::*;

use crate::app_state::AppState;
use crate::config::LOAD_STALL_WARNING_SECS;
use crate::SceneSet;

use super::error::AssetLoadError;
use super::types::{AssetKind, GateOutcome, LoadGate};

/// Completion signal sent by an asset loader.
#[derive(Event, Debug, Clone)]
pub enum AssetLoadSignal {
    Loaded(AssetKind),
    Failed(AssetLoadError),
}

/// Bookkeeping around the ready transition, mostly for logs and tests.
#[derive(Resource, Debug, Default)]
pub struct LoadTimeline {
    /// Number of times `AppState::Ready` was entered. Never exceeds 1.
    pub ready_transitions: u32,
    pub ready_at_secs: Option<f64>,
    pub stall_warned: bool,
}

/// System: drain loader signals into the gate and request `Ready` when it fires.
pub fn apply_load_signals(
    mut signals: EventReader<AssetLoadSignal>,
    mut gate: ResMut<LoadGate>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for signal in signals.read() {
        match signal {
            AssetLoadSignal::Loaded(kind) => {
                info!("Loaded {} '{}'", kind.label(), kind.path());
                if gate.record_loaded(*kind) == GateOutcome::BecameReady {
                    next_state.set(AppState::Ready);
                }
            }
            AssetLoadSignal::Failed(err) => {
                error!("{err}");
                if gate.record_failed(err.kind) == GateOutcome::Blocked {
                    warn!("Scene will stay in the loading state: no retry is attempted");
                }
            }
        }
    }
}

/// System (OnEnter Ready): record when the scene became visible.
pub fn mark_scene_ready(time: Res<Time<Real>>, mut timeline: ResMut<LoadTimeline>) {
    let elapsed = time.elapsed_secs_f64();
    timeline.ready_transitions += 1;
    timeline.ready_at_secs = Some(elapsed);
    info!("Scene ready after {:.2}s", elapsed);
}

/// System: log once if loading is taking suspiciously long. Never changes state.
pub fn warn_on_stalled_load(
    time: Res<Time<Real>>,
    gate: Res<LoadGate>,
    mut timeline: ResMut<LoadTimeline>,
) {
    if timeline.stall_warned || time.elapsed_secs_f64() < LOAD_STALL_WARNING_SECS {
        return;
    }
    timeline.stall_warned = true;

    let unresolved: Vec<String> = gate
        .unresolved()
        .iter()
        .map(|(kind, status)| format!("{} ({:?})", kind.label(), status))
        .collect();
    warn!(
        "Still loading after {:.0}s; unresolved assets: {}",
        LOAD_STALL_WARNING_SECS,
        unresolved.join(", ")
    );
}

// =============================================================================
// Plugin
// =============================================================================

pub struct ReadinessPlugin;

impl Plugin for ReadinessPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_event::<AssetLoadSignal>()
            .init_resource::<LoadGate>()
            .init_resource::<LoadTimeline>()
            .add_systems(
                Update,
                (
                    apply_load_signals,
                    warn_on_stalled_load.run_if(in_state(AppState::Loading)),
                )
                    .chain()
                    .in_set(SceneSet::Loading),
            )
            .add_systems(OnEnter(AppState::Ready), mark_scene_ready);
    }
}
