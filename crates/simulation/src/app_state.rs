//! Top-level application state machine.
//!
//! Defines [`AppState`], a Bevy [`States`] enum that governs whether the scene
//! is still waiting on its assets or fully rendered. The readiness gate in
//! [`crate::readiness`] is the only writer of this state.
//!
//! The state is defined here (in the `simulation` crate) rather than in `app`
//! or `ui` so that all crates can gate systems on it without circular
//! dependencies.

use bevy::prelude::*;

/// Top-level scene state.
///
/// The season animator only runs in `Ready`; the loading overlay is only drawn
/// in `Loading`. There is no way back from `Ready`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Waiting for the environment map and the model. A failed load keeps the
    /// application here.
    #[default]
    Loading,
    /// Both assets are in the scene and the animator is running.
    Ready,
}
