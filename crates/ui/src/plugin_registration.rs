use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::*;

/// Register all UI plugins and systems.
pub(crate) fn register_ui_systems(app: &mut App) {
    // Core egui
    app.add_plugins(EguiPlugin);
    app.add_systems(Startup, theme::apply_scene_theme);

    // UI feature plugins
    app.add_plugins(loading_screen::LoadingScreenPlugin);
    app.add_plugins(season_hud::SeasonHudPlugin);
}
