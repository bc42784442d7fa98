use bevy::prelude::*;

use crate::*;

/// Register all scene feature plugins.
///
/// Each plugin is registered on its own line. Readiness comes first because it
/// initializes `AppState`, which the animation run conditions read.
pub(crate) fn register_feature_plugins(app: &mut App) {
    app.add_plugins(readiness::ReadinessPlugin);
    app.add_plugins(season::SeasonPlugin);
    app.add_plugins(particles::ParticlesPlugin);
}
