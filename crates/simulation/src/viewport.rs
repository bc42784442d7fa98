//! Split of the window between the 3D view (top) and the season HUD band (bottom).

use bevy::prelude::*;

use crate::config::VIEWPORT_HEIGHT_FRACTION;

/// Size of the 3D view in physical pixels. Recomputed on every resize.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportLayout {
    pub window_width: f32,
    pub window_height: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportLayout {
    fn default() -> Self {
        Self::for_window(1280.0, 720.0)
    }
}

impl ViewportLayout {
    /// Full width, top `VIEWPORT_HEIGHT_FRACTION` of the height.
    pub fn for_window(window_width: f32, window_height: f32) -> Self {
        let window_width = window_width.max(0.0);
        let window_height = window_height.max(0.0);
        Self {
            window_width,
            window_height,
            width: window_width,
            height: window_height * VIEWPORT_HEIGHT_FRACTION,
        }
    }

    /// `width / height` of the 3D view. 1.0 for a collapsed window so the
    /// projection never sees a zero or NaN aspect.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return 1.0;
        }
        self.width / self.height
    }

    /// Height of the HUD band under the 3D view.
    pub fn hud_height(&self) -> f32 {
        self.window_height - self.height
    }

    /// Viewport size in whole pixels, never zero on either axis.
    pub fn physical_size(&self) -> UVec2 {
        UVec2::new(
            (self.width.floor() as u32).max(1),
            (self.height.floor() as u32).max(1),
        )
    }

    pub fn is_collapsed(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }
}
