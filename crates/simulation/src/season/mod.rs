//! Season cycle: four seasons of fixed length, each with a background and a
//! particle color. Colors blend linearly toward the next season.

pub mod clock;
mod system;
pub mod types;


pub use clock::{cycle_duration_secs, lerp, lerp_srgba, SeasonFrame, SeasonSample};
pub use system::{advance_season_frame, SeasonPlugin};
pub use types::{srgb_hex, Season, SeasonColors, SeasonTable};
