//! Readiness gate: decides when the scene leaves the loading overlay.
//!
//! Two asset loaders report independently. The [`LoadGate`] resource tracks
//! both slots and fires the `Loading -> Ready` transition exactly once, when
//! both have succeeded. A failure is logged and blocks the gate for good.

pub mod error;
mod system;
pub mod types;


pub use error::AssetLoadError;
pub use system::{
    apply_load_signals, mark_scene_ready, warn_on_stalled_load, AssetLoadSignal, LoadTimeline,
    ReadinessPlugin,
};
pub use types::{AssetKind, GateOutcome, LoadGate, SlotStatus};
