//! Keeps orbit drags from starting on top of egui widgets (the season HUD
//! band, the loading overlay).

use bevy_egui::EguiContexts;

/// `true` while the cursor is over an egui area or egui is handling a press.
/// Camera input systems skip new drags when this holds.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.is_pointer_over_area() || ctx.wants_pointer_input()
}
