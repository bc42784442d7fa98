//! Loading overlay shown until the scene is ready.
//!
//! Displays a full-screen dark overlay with a white "Loading" label. An
//! animated dots effect shows the app has not frozen. The overlay is drawn
//! only in `AppState::Loading`; a failed load leaves it up for good.

use std::time::Duration;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::AppState;

use crate::theme;

// =============================================================================
// Resources
// =============================================================================

/// Tracks the animated dots state for the loading message.
#[derive(Resource)]
pub struct LoadingAnimation {
    /// Number of dots currently shown (cycles 1 -> 2 -> 3 -> 1 ...).
    pub dots: usize,
    /// Timer controlling the animation speed.
    pub timer: Timer,
}

impl Default for LoadingAnimation {
    fn default() -> Self {
        Self {
            dots: 1,
            timer: Timer::from_seconds(0.4, TimerMode::Repeating),
        }
    }
}

impl LoadingAnimation {
    /// Advance by `delta` and return the label to draw.
    pub fn advance(&mut self, delta: Duration) -> String {
        self.timer.tick(delta);
        for _ in 0..self.timer.times_finished_this_tick() {
            self.dots = self.dots % 3 + 1;
        }
        self.label()
    }

    pub fn label(&self) -> String {
        format!("Loading{}", ".".repeat(self.dots))
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Draws the overlay. Scheduled with `run_if(in_state(AppState::Loading))`.
pub fn loading_screen_ui(
    mut contexts: EguiContexts,
    time: Res<Time>,
    mut animation: ResMut<LoadingAnimation>,
) {
    let display_text = animation.advance(time.delta());

    let ctx = contexts.ctx_mut();
    let screen_rect = ctx.screen_rect();

    // Full-screen overlay, above the HUD and the scene.
    egui::Area::new(egui::Id::new("loading_overlay"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(theme::OVERLAY_ALPHA),
            );
            // Allocate the full rect so the area consumes input.
            ui.allocate_rect(screen_rect, egui::Sense::click_and_drag());
        });

    egui::Area::new(egui::Id::new("loading_label"))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(display_text)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_HEADING),
            );
        });
}

/// System (OnExit Loading): reset so a later overlay would start fresh.
pub fn reset_loading_animation(mut animation: ResMut<LoadingAnimation>) {
    *animation = LoadingAnimation::default();
}

pub struct LoadingScreenPlugin;

impl Plugin for LoadingScreenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoadingAnimation>()
            .add_systems(
                Update,
                loading_screen_ui.run_if(in_state(AppState::Loading)),
            )
            .add_systems(OnExit(AppState::Loading), reset_loading_animation);
    }
}
