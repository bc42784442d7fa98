//! Season readout in the bottom band under the 3D view, and the Space
//! keybind that pauses the animation.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::config::VIEWPORT_HEIGHT_FRACTION;
use simulation::season::{Season, SeasonFrame};
use simulation::{AnimationLoop, AppState, SceneSet};

use crate::theme;

const SWATCH_SIZE: f32 = 18.0;

pub fn season_label(current: Season, next: Season) -> String {
    format!("{} \u{2192} {}", current.name(), next.name())
}

/// Blend toward the next season as a whole percentage.
pub fn progress_label(blend: f32) -> String {
    format!("{:.0}%", (blend.clamp(0.0, 1.0) * 100.0).floor())
}

/// Logical height of the band left below the 3D view.
pub fn hud_band_height(screen_height: f32) -> f32 {
    (screen_height * (1.0 - VIEWPORT_HEIGHT_FRACTION)).max(0.0)
}

fn swatch(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(3), color);
    ui.painter().rect_stroke(
        rect,
        egui::CornerRadius::same(3),
        egui::Stroke::new(1.0, theme::TEXT_MUTED),
        egui::StrokeKind::Inside,
    );
}

/// Bottom band: current season, next season, blend progress and paused state.
pub fn season_hud_ui(
    mut contexts: EguiContexts,
    frame: Res<SeasonFrame>,
    animation: Res<AnimationLoop>,
) {
    let ctx = contexts.ctx_mut();
    let height = hud_band_height(ctx.screen_rect().height());
    if height < 1.0 {
        return;
    }

    let sample = frame.sample;
    egui::TopBottomPanel::bottom("season_hud")
        .exact_height(height)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                swatch(ui, theme::color32(frame.particle));
                ui.label(
                    egui::RichText::new(season_label(sample.current, sample.next))
                        .size(theme::FONT_HUD)
                        .strong()
                        .color(theme::TEXT_HUD),
                );
                ui.add_space(12.0);
                ui.add(
                    egui::ProgressBar::new(sample.blend.clamp(0.0, 1.0))
                        .fill(theme::color32(frame.background))
                        .text(progress_label(sample.blend))
                        .desired_width(ui.available_width().min(240.0)),
                );
                ui.add_space(12.0);
                let status = if animation.is_running() {
                    "Space to pause"
                } else {
                    "Paused (Space)"
                };
                ui.label(egui::RichText::new(status).color(theme::TEXT_MUTED));
            });
        });
}

/// Space toggles the animation loop unless egui has keyboard focus.
pub fn toggle_animation_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut animation: ResMut<AnimationLoop>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    animation.toggle();
}

pub struct SeasonHudPlugin;

impl Plugin for SeasonHudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                toggle_animation_keybind.in_set(SceneSet::Input),
                season_hud_ui.after(SceneSet::Visual),
            )
                .run_if(in_state(AppState::Ready)),
        );
    }
}
