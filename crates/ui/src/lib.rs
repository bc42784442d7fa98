use bevy::prelude::*;

pub mod loading_screen;
mod plugin_registration;
pub mod season_hud;
pub mod theme;

/// egui overlays: the loading screen and the season HUD band.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        plugin_registration::register_ui_systems(app);
    }
}
