//! # TestScene: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so the readiness gate, season
//! clock and particle field can be driven without a window, renderer or real
//! asset files. Loader completion is simulated by sending `AssetLoadSignal`s.
//!
//! The clock is manual: every update advances time by exactly [`TICK`]. The
//! very first update (which runs `Startup`) has a zero delta, so after `n`
//! updates the elapsed time is `(n - 1) * TICK`.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::animation_loop::AnimationLoop;
use crate::app_state::AppState;
use crate::particles::{ParticleField, SpawnVolume};
use crate::readiness::{AssetKind, AssetLoadError, AssetLoadSignal, LoadGate, LoadTimeline};
use crate::season::SeasonFrame;
use crate::sim_rng::SimRng;
use crate::SimulationPlugin;

/// Time step per `App::update`.
pub const TICK: Duration = Duration::from_millis(100);

/// Seed used by [`TestScene::new`].
pub const TEST_SEED: u64 = 1234;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestScene {
    app: App,
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}

impl TestScene {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Fresh scene in `Loading`, startup already run.
    pub fn new() -> Self {
        Self::build(TEST_SEED, None)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(seed, None)
    }

    /// Scene with a smaller particle field, for tests that inspect every particle.
    pub fn with_particle_count(count: usize) -> Self {
        Self::build(
            TEST_SEED,
            Some(SpawnVolume {
                count,
                ..default()
            }),
        )
    }

    /// Scene that already went through a successful load and sits in `Ready`.
    pub fn ready() -> Self {
        let mut scene = Self::new();
        scene.load_all();
        scene
    }

    fn build(seed: u64, volume: Option<SpawnVolume>) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));
        app.insert_resource(SimRng::from_seed_u64(seed));
        if let Some(volume) = volume {
            app.insert_resource(volume);
        }
        app.add_plugins(SimulationPlugin);

        // First update runs Startup systems.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Loader signals
    // -----------------------------------------------------------------------

    /// Queue a successful load for `kind`. Processed on the next tick.
    pub fn signal_loaded(&mut self, kind: AssetKind) -> &mut Self {
        self.app.world_mut().send_event(AssetLoadSignal::Loaded(kind));
        self
    }

    /// Queue a failed load for `kind`. Processed on the next tick.
    pub fn signal_failed(&mut self, kind: AssetKind, reason: &str) -> &mut Self {
        self.app
            .world_mut()
            .send_event(AssetLoadSignal::Failed(AssetLoadError::new(kind, reason)));
        self
    }

    /// Report both assets loaded and run until the state change has applied.
    pub fn load_all(&mut self) -> &mut Self {
        self.signal_loaded(AssetKind::EnvironmentMap)
            .signal_loaded(AssetKind::Model);
        // One update to feed the gate, one for `StateTransition`.
        self.tick(2)
    }

    // -----------------------------------------------------------------------
    // Time
    // -----------------------------------------------------------------------

    /// Run `n` updates, each advancing the clock by [`TICK`].
    pub fn tick(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    /// Run `n` updates that each advance the clock by `step`, then go back
    /// to [`TICK`]. Used for frames longer than virtual time allows.
    pub fn tick_by(&mut self, step: Duration, n: u32) -> &mut Self {
        self.app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
        self.tick(n);
        self.app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));
        self
    }

    /// Tick until the wall clock reads at least `secs`.
    pub fn run_until(&mut self, secs: f64) -> &mut Self {
        while self.elapsed_secs() < secs {
            self.app.update();
        }
        self
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.app.world().resource::<Time<Real>>().elapsed_secs_f64()
    }

    // -----------------------------------------------------------------------
    // Controls
    // -----------------------------------------------------------------------

    pub fn pause(&mut self) -> &mut Self {
        self.app.world_mut().resource_mut::<AnimationLoop>().pause();
        self
    }

    pub fn resume(&mut self) -> &mut Self {
        self.app.world_mut().resource_mut::<AnimationLoop>().resume();
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn state(&self) -> AppState {
        *self.app.world().resource::<State<AppState>>().get()
    }

    pub fn gate(&self) -> &LoadGate {
        self.app.world().resource::<LoadGate>()
    }

    pub fn timeline(&self) -> &LoadTimeline {
        self.app.world().resource::<LoadTimeline>()
    }

    pub fn field(&self) -> &ParticleField {
        self.app.world().resource::<ParticleField>()
    }

    pub fn frame(&self) -> SeasonFrame {
        *self.app.world().resource::<SeasonFrame>()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
