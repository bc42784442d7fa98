//! `Loading -> Ready` transitions driven by simulated loader signals.

use std::time::Duration;

use crate::app_state::AppState;
use crate::readiness::{AssetKind, SlotStatus};
use crate::test_harness::TestScene;

#[test]
fn test_scene_starts_loading() {
    let scene = TestScene::new();
    assert_eq!(scene.state(), AppState::Loading);
    assert!(!scene.gate().is_ready());
    assert_eq!(scene.timeline().ready_transitions, 0);
}

#[test]
fn test_both_assets_in_one_frame_reach_ready_once() {
    let mut scene = TestScene::new();
    scene.load_all();
    assert_eq!(scene.state(), AppState::Ready);
    assert_eq!(scene.timeline().ready_transitions, 1);

    scene.tick(20);
    assert_eq!(scene.timeline().ready_transitions, 1);
}

#[test]
fn test_model_first_then_environment_later() {
    let mut scene = TestScene::new();
    scene.signal_loaded(AssetKind::Model).tick(5);
    assert_eq!(scene.state(), AppState::Loading);

    scene.signal_loaded(AssetKind::EnvironmentMap).tick(2);
    assert_eq!(scene.state(), AppState::Ready);
    assert_eq!(scene.timeline().ready_transitions, 1);
}

#[test]
fn test_duplicate_signals_after_ready_do_not_retrigger() {
    let mut scene = TestScene::ready();
    scene
        .signal_loaded(AssetKind::Model)
        .signal_loaded(AssetKind::EnvironmentMap)
        .tick(3);
    assert_eq!(scene.state(), AppState::Ready);
    assert_eq!(scene.timeline().ready_transitions, 1);
}

#[test]
fn test_environment_failure_keeps_scene_loading() {
    let mut scene = TestScene::new();
    scene
        .signal_failed(AssetKind::EnvironmentMap, "file not found")
        .signal_loaded(AssetKind::Model)
        .tick(10);

    assert_eq!(scene.state(), AppState::Loading);
    assert!(scene.gate().is_blocked());
    assert_eq!(
        scene.gate().status(AssetKind::EnvironmentMap),
        SlotStatus::Failed
    );
    assert_eq!(scene.timeline().ready_transitions, 0);
}

#[test]
fn test_model_failure_keeps_scene_loading() {
    let mut scene = TestScene::new();
    scene
        .signal_loaded(AssetKind::EnvironmentMap)
        .signal_failed(AssetKind::Model, "invalid glb header")
        .tick(10);
    assert_eq!(scene.state(), AppState::Loading);
}

#[test]
fn test_ready_time_is_recorded() {
    let mut scene = TestScene::new();
    scene.tick(4);
    scene.load_all();
    let ready_at = scene.timeline().ready_at_secs.expect("ready time recorded");
    assert!(ready_at > 0.0);
    assert!(ready_at <= scene.elapsed_secs());
}

#[test]
fn test_stall_warning_fires_once_and_never_changes_state() {
    let mut scene = TestScene::new();
    scene.signal_loaded(AssetKind::Model);
    scene.run_until(31.0);
    assert!(scene.timeline().stall_warned);
    assert_eq!(scene.state(), AppState::Loading);
}

#[test]
fn test_stall_warning_counts_one_long_frame_in_full() {
    let mut scene = TestScene::new();
    scene.tick_by(Duration::from_secs(31), 1);
    assert!(scene.timeline().stall_warned);
    assert_eq!(scene.state(), AppState::Loading);
}

#[test]
fn test_no_stall_warning_once_ready() {
    let mut scene = TestScene::ready();
    scene.run_until(31.0);
    assert!(!scene.timeline().stall_warned);
}
