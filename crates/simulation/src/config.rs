//! Scene constants. Tunable copies live in the `Default` impls of
//! `ParticleMotion`, `SpawnVolume` and `SeasonTable`.

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// Equirectangular HDR environment map, relative to the asset root.
pub const ENVIRONMENT_MAP_PATH: &str = "goegap_road_4k.exr";
/// Castle model, relative to the asset root.
pub const MODEL_PATH: &str = "edo-castle.glb";
/// Entity name given to the spawned castle scene.
pub const MODEL_NAME: &str = "model_castle";
pub const MODEL_SCALE: f32 = 50.0;
pub const MODEL_OFFSET_Y: f32 = -200.0;

/// Seconds spent in `Loading` before a single "still waiting" warning is logged.
pub const LOAD_STALL_WARNING_SECS: f64 = 30.0;

// ---------------------------------------------------------------------------
// Season cycle
// ---------------------------------------------------------------------------

pub const SEASON_COUNT: usize = 4;
pub const SEASON_DURATION_SECS: f64 = 10.0;

// ---------------------------------------------------------------------------
// Particles
// ---------------------------------------------------------------------------

pub const PARTICLE_COUNT: usize = 2000;
/// Environment variable holding a `u64` seed for the particle scatter.
pub const PARTICLE_SEED_VAR: &str = "CASTLE_PARTICLE_SEED";
/// Lateral sway per frame, scaled by sin/cos of `time + phase`.
pub const SWAY_SPEED: f32 = 0.5;
/// Vertical fall per frame while the current season is winter.
pub const FALL_SPEED_WINTER: f32 = 0.6;
/// Vertical fall per frame in every other season.
pub const FALL_SPEED_OTHER: f32 = 0.3;
/// Particles below this height are recycled.
pub const PARTICLE_FLOOR_Y: f32 = -200.0;
/// Recycled particles restart in `[RESET_MIN_Y, RESET_MIN_Y + RESET_SPAN_Y)`.
pub const PARTICLE_RESET_MIN_Y: f32 = 500.0;
pub const PARTICLE_RESET_SPAN_Y: f32 = 500.0;
/// Initial scatter: x and z in `[-HALF_EXTENT, HALF_EXTENT)`.
pub const SPAWN_HALF_EXTENT_XZ: f32 = 250.0;
/// Initial scatter: y in `[0, SPAWN_MAX_Y)`.
pub const SPAWN_MAX_Y: f32 = 400.0;
pub const PARTICLE_SIZE: f32 = 4.0;
pub const PARTICLE_OPACITY: f32 = 0.8;

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Fraction of the window height given to the 3D view. The rest is the HUD band.
pub const VIEWPORT_HEIGHT_FRACTION: f32 = 0.9;
