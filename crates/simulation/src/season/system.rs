use bevy::prelude::*;

use crate::SceneSet;

use super::clock::SeasonFrame;
use super::types::SeasonTable;

/// System: recompute this frame's colors from elapsed wall-clock time.
/// Reads `Time<Real>` so a long frame never holds the cycle back.
pub fn advance_season_frame(
    time: Res<Time<Real>>,
    table: Res<SeasonTable>,
    mut frame: ResMut<SeasonFrame>,
) {
    let next = SeasonFrame::at(&table, time.elapsed_secs_f64());
    if next.sample.current != frame.sample.current {
        debug!(
            "Season changed: {} -> {}",
            frame.sample.current.name(),
            next.sample.current.name()
        );
    }
    *frame = next;
}

pub struct SeasonPlugin;

impl Plugin for SeasonPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SeasonTable>()
            .init_resource::<SeasonFrame>()
            .add_systems(Update, advance_season_frame.in_set(SceneSet::Animate));
    }
}
