//! Season enum and the fixed color table.

use bevy::color::Srgba;
use bevy::prelude::*;

use crate::config::{SEASON_COUNT, SEASON_DURATION_SECS};

use super::clock::SeasonSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Cycle order. A season's index is its position here.
    pub const ALL: [Season; SEASON_COUNT] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Wraps: `from_index(4) == Spring`.
    pub fn from_index(index: usize) -> Season {
        Self::ALL[index % SEASON_COUNT]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Season {
        Self::from_index(self.index() + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

/// Background and particle color for one season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonColors {
    pub background: Srgba,
    pub particle: Srgba,
}

impl SeasonColors {
    pub fn from_hex(background: u32, particle: u32) -> Self {
        Self {
            background: srgb_hex(background),
            particle: srgb_hex(particle),
        }
    }
}

/// Opaque sRGB color from a `0xRRGGBB` literal.
pub fn srgb_hex(rgb: u32) -> Srgba {
    Srgba::rgb_u8(
        ((rgb >> 16) & 0xff) as u8,
        ((rgb >> 8) & 0xff) as u8,
        (rgb & 0xff) as u8,
    )
}

/// The four (background, particle) pairs plus the length of one season.
/// Immutable once the app is running.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SeasonTable {
    entries: [SeasonColors; SEASON_COUNT],
    season_duration_secs: f64,
}

impl Default for SeasonTable {
    fn default() -> Self {
        Self::new(
            [
                // Spring: pale sky, cherry blossom
                SeasonColors::from_hex(0xbff6f9, 0xff68c3),
                // Summer: bright sky, green leaves
                SeasonColors::from_hex(0x18f1ff, 0x07e102),
                // Autumn: dusty beige, falling maple
                SeasonColors::from_hex(0xe0d5c0, 0xa0522d),
                // Winter: night sky, snow
                SeasonColors::from_hex(0x1c1c1c, 0xffffff),
            ],
            SEASON_DURATION_SECS,
        )
    }
}

impl SeasonTable {
    pub fn new(entries: [SeasonColors; SEASON_COUNT], season_duration_secs: f64) -> Self {
        Self {
            entries,
            season_duration_secs,
        }
    }

    pub fn colors(&self, season: Season) -> SeasonColors {
        self.entries[season.index()]
    }

    pub fn season_duration_secs(&self) -> f64 {
        self.season_duration_secs
    }

    /// Where in the cycle `elapsed_secs` falls.
    pub fn sample(&self, elapsed_secs: f64) -> SeasonSample {
        SeasonSample::at(elapsed_secs, self.season_duration_secs)
    }
}
