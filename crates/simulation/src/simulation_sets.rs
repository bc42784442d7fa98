//! Frame ordering via `SystemSet` phases.
//!
//! Plugins in every crate place their systems into one of these sets so that
//! cross-crate ordering is explicit rather than relying on registration order.
//!
//! # Startup
//!
//! * **Scatter** – Seed the particle field. Rendering spawns one sprite per
//!   particle after this set.
//!
//! # Update phases
//!
//! ```text
//! Input  →  Loading  →  Animate  →  Visual
//! ```
//!
//! * **Input** – Per-frame input (pause toggle, orbit drag).
//! * **Loading** – Poll asset loaders and feed the readiness gate.
//! * **Animate** – Season clock and particle motion. Only runs in
//!   `AppState::Ready` while the animation loop is not paused.
//! * **Visual** – Push the frame's simulation state into rendered components
//!   (clear color, particle material, sprite transforms, camera).

use bevy::prelude::*;

use crate::animation_loop::animation_running;
use crate::app_state::AppState;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneSet {
    /// Startup: particle scatter.
    Scatter,
    /// Per-frame input processing.
    Input,
    /// Asset load polling and the readiness gate.
    Loading,
    /// Season and particle animation.
    Animate,
    /// Visual-only updates derived from the animated state.
    Visual,
}

pub(crate) fn configure_scene_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            SceneSet::Input,
            SceneSet::Loading,
            SceneSet::Animate,
            SceneSet::Visual,
        )
            .chain(),
    )
    .configure_sets(
        Update,
        SceneSet::Animate
            .run_if(in_state(AppState::Ready))
            .run_if(animation_running),
    );
}
