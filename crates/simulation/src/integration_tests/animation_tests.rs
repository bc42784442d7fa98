//! Season clock and particle motion inside a running App.

use std::time::Duration;

use crate::app_state::AppState;
use crate::season::{srgb_hex, Season, SeasonFrame};
use crate::test_harness::TestScene;

#[test]
fn test_field_is_scattered_at_startup() {
    let scene = TestScene::new();
    assert_eq!(scene.field().len(), 2000);
}

#[test]
fn test_same_seed_scatters_same_field() {
    let a = TestScene::with_seed(77);
    let b = TestScene::with_seed(77);
    assert_eq!(a.field(), b.field());
}

#[test]
fn test_nothing_animates_while_loading() {
    let mut scene = TestScene::with_particle_count(50);
    let before = scene.field().clone();
    scene.tick(30);

    assert_eq!(scene.state(), AppState::Loading);
    assert_eq!(scene.field(), &before);
    assert_eq!(scene.frame(), SeasonFrame::default());
}

#[test]
fn test_particles_move_once_ready() {
    let mut scene = TestScene::with_particle_count(50);
    let before = scene.field().clone();
    scene.load_all().tick(5);

    assert_eq!(scene.field().len(), 50);
    assert_ne!(scene.field(), &before);
}

#[test]
fn test_pause_freezes_and_resume_continues() {
    let mut scene = TestScene::ready();
    scene.tick(3);
    scene.pause();
    let frozen = scene.field().clone();
    let frozen_frame = scene.frame();
    scene.tick(10);
    assert_eq!(scene.field(), &frozen);
    assert_eq!(scene.frame(), frozen_frame);

    scene.resume().tick(1);
    assert_ne!(scene.field(), &frozen);
}

#[test]
fn test_season_follows_elapsed_time() {
    let mut scene = TestScene::ready();

    scene.run_until(5.0);
    assert_eq!(scene.frame().sample.current, Season::Spring);

    scene.run_until(10.0);
    let frame = scene.frame();
    assert_eq!(frame.sample.current, Season::Summer);
    assert_eq!(frame.sample.blend, 0.0);
    assert_eq!(frame.background, srgb_hex(0x18f1ff));

    scene.run_until(35.0);
    assert_eq!(scene.frame().sample.current, Season::Winter);
    assert_eq!(scene.frame().sample.next, Season::Spring);

    scene.run_until(40.0);
    assert_eq!(scene.frame().sample.current, Season::Spring);
}

#[test]
fn test_particles_stay_above_floor_through_a_full_cycle() {
    let mut scene = TestScene::with_particle_count(200);
    scene.load_all();
    for _ in 0..400 {
        scene.tick(1);
        assert!(scene.field().positions().iter().all(|p| p.y >= -200.0));
    }
    assert_eq!(scene.field().len(), 200);
}

#[test]
fn test_long_frames_keep_season_on_wall_clock() {
    let mut scene = TestScene::ready();
    scene.tick_by(Duration::from_secs(2), 10);

    assert!((scene.elapsed_secs() - 20.2).abs() < 1e-9);
    assert_eq!(scene.frame().sample.current, Season::Autumn);
    assert_eq!(scene.frame().sample.next, Season::Winter);
}

#[test]
fn test_single_long_frame_jumps_to_current_season() {
    let mut scene = TestScene::ready();
    scene.tick_by(Duration::from_secs(35), 1);
    assert_eq!(scene.frame().sample.current, Season::Winter);
}
