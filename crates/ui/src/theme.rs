use bevy::color::Srgba;
use bevy_egui::{egui, EguiContexts};

/// Loading label size, in points.
pub const FONT_HEADING: f32 = 24.0;
pub const FONT_HUD: f32 = 16.0;

pub const TEXT_HEADING: egui::Color32 = egui::Color32::WHITE;
pub const TEXT_HUD: egui::Color32 = egui::Color32::from_rgb(230, 230, 235);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(150, 155, 165);

/// Black at 80% opacity.
pub const OVERLAY_ALPHA: u8 = 204;

pub fn apply_scene_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Dark neutral band under the scene
    let panel = egui::Color32::from_rgb(28, 28, 32);
    let inactive = egui::Color32::from_rgb(50, 52, 60);
    let accent = egui::Color32::from_rgb(220, 170, 120);

    style.visuals.panel_fill = panel;
    style.visuals.window_fill = panel;
    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(20, 20, 24);

    // Progress bar fill
    style.visuals.selection.bg_fill = accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);

    // egui 0.31+ uses CornerRadius with u8 values
    style.visuals.window_corner_radius = egui::CornerRadius::same(8);
    style.visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(4);

    ctx.set_style(style);
}

/// Opaque egui color for an sRGB scene color.
pub fn color32(color: Srgba) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(channel(color.red), channel(color.green), channel(color.blue))
}
