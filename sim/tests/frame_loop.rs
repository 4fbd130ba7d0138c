mod support;

use bevy_math::Vec3;
use sim::{
    ControlEvent, SimConfig, SoundEffect,
    constants::{MISSION_COMPLETE_TEXT, MISSION_START_TEXT},
    input::Action,
    locomotion::Player,
    mission::MissionText,
    projectiles::Projectiles,
    session::GameSession,
    target::Target,
    tasks::{DelayedTask, DelayedTasks},
};
use support::Harness;

// Target straight ahead of the player at a fixed distance.
fn lane_config() -> SimConfig {
    SimConfig {
        target_spread_x: 0.0,
        target_min_distance: 15.0,
        target_max_distance: 15.0,
        ..SimConfig::default()
    }
}

// Started game with the player standing at target height facing -Z.
fn started_in_lane() -> Harness {
    let mut harness = Harness::with_config(lane_config(), 1);
    harness.resource_mut::<Player>().position = Vec3::new(0.0, 0.5, 0.0);
    harness.send(ControlEvent::StartGame);
    harness.step_millis(16);
    harness
}

fn step_until_hit(harness: &mut Harness, max_frames: usize) -> usize {
    for frame in 1..=max_frames {
        harness.step_millis(16);
        if harness.take_sounds().contains(&SoundEffect::Hit) {
            return frame;
        }
    }
    panic!("no hit within {max_frames} frames");
}

#[test]
fn start_game_spawns_target_and_shows_mission() {
    let mut harness = Harness::new(3);
    assert!(!harness.resource::<Target>().is_alive());

    harness.send(ControlEvent::StartGame);
    harness.step_millis(16);

    let session = *harness.resource::<GameSession>();
    assert!(session.started);
    assert!(session.controls_locked);
    assert!(harness.resource::<Target>().is_alive());
    assert_eq!(harness.resource::<MissionText>().text(), Some(MISSION_START_TEXT));
}

#[test]
fn fire_before_start_does_nothing() {
    let mut harness = Harness::new(3);
    harness.send(ControlEvent::Fire);
    harness.step_millis(16);

    assert!(harness.resource::<Projectiles>().is_empty());
    assert!(harness.take_sounds().is_empty());
}

#[test]
fn projectile_travels_fifty_units_per_second() {
    let mut harness = Harness::new(5);
    harness.send(ControlEvent::StartGame);
    harness.step_millis(16);
    harness.resource_mut::<Player>().position = Vec3::ZERO;

    harness.send(ControlEvent::Fire);
    harness.step_millis(1000);

    let projectiles = harness.resource::<Projectiles>();
    assert_eq!(projectiles.len(), 1);
    let position = projectiles.iter().next().unwrap().position;
    assert!(position.distance(Vec3::new(0.0, 0.0, -50.0)) < 1e-3, "{position}");
    assert_eq!(harness.take_sounds(), vec![SoundEffect::Shoot]);
}

#[test]
fn projectile_expires_beyond_range() {
    let mut harness = Harness::new(5);
    harness.send(ControlEvent::StartGame);
    harness.step_millis(16);
    // Aim away from the target band
    harness.resource_mut::<Player>().facing = Vec3::Z;

    harness.send(ControlEvent::Fire);
    harness.step_millis(1000);
    assert_eq!(harness.resource::<Projectiles>().len(), 1);

    // 50 more units puts it just past 100 from the player
    harness.step_millis(1100);
    assert!(harness.resource::<Projectiles>().is_empty());
}

#[test]
fn hit_destroys_target_and_respawns_after_delay() {
    let mut harness = started_in_lane();
    harness.take_sounds();

    harness.send(ControlEvent::Fire);
    step_until_hit(&mut harness, 60);

    assert!(!harness.resource::<Target>().is_alive());
    assert!(harness.resource::<Projectiles>().is_empty());
    assert_eq!(harness.resource::<MissionText>().text(), Some(MISSION_COMPLETE_TEXT));
    assert!(harness.resource::<DelayedTasks>().contains(DelayedTask::SpawnTarget));

    // Respawn is relative to where the player stands when it fires
    let player = Vec3::new(30.0, 0.5, -50.0);
    harness.resource_mut::<Player>().position = player;

    for _ in 0..3 {
        harness.step_millis(500);
        assert!(!harness.resource::<Target>().is_alive());
    }
    harness.step_millis(500);

    let position = harness.resource::<Target>().position().unwrap();
    assert_eq!(position, Vec3::new(30.0, 0.5, -65.0));
    assert!(harness.take_sounds().is_empty());
}

#[test]
fn respawn_lands_in_band_around_player() {
    let mut harness = Harness::new(11);
    harness.resource_mut::<Player>().position = Vec3::new(0.0, 0.5, 0.0);
    harness.send(ControlEvent::StartGame);
    harness.step_millis(16);

    let target = harness.resource::<Target>().position().unwrap();
    harness.resource_mut::<Player>().facing = (target - Vec3::new(0.0, 0.5, 0.0)).normalize();
    harness.send(ControlEvent::Fire);
    step_until_hit(&mut harness, 60);

    let player = Vec3::new(-7.0, 0.5, 12.0);
    harness.resource_mut::<Player>().position = player;
    harness.step_millis(2000);

    let position = harness.resource::<Target>().position().unwrap();
    assert!((position.x - player.x).abs() <= 10.0);
    assert_eq!(position.y, 0.5);
    assert!((10.0..=20.0).contains(&(player.z - position.z)));
}

#[test]
fn only_one_kill_per_frame() {
    let config = SimConfig {
        projectile_speed: 0.0,
        ..lane_config()
    };
    let mut harness = Harness::with_config(config, 2);
    harness.resource_mut::<Player>().position = Vec3::new(0.0, 0.5, 0.0);
    harness.send(ControlEvent::StartGame);
    harness.step_millis(16);

    let target = harness.resource::<Target>().position().unwrap();
    {
        let mut projectiles = harness.resource_mut::<Projectiles>();
        projectiles.spawn(target, Vec3::NEG_Z);
        projectiles.spawn(target + Vec3::new(0.2, 0.0, 0.0), Vec3::NEG_Z);
    }
    harness.step_millis(16);

    assert_eq!(harness.take_sounds(), vec![SoundEffect::Hit]);
    assert_eq!(harness.resource::<Projectiles>().len(), 1);
    assert!(!harness.resource::<Target>().is_alive());

    // The survivor has nothing to hit while the target is down
    harness.step_millis(16);
    assert!(harness.take_sounds().is_empty());
    assert_eq!(harness.resource::<Projectiles>().len(), 1);
}

#[test]
fn rapid_shots_each_request_a_sound() {
    let mut harness = Harness::new(4);
    harness.send(ControlEvent::StartGame);
    harness.step_millis(16);

    harness.send(ControlEvent::Fire);
    harness.send(ControlEvent::Fire);
    harness.step_millis(16);

    assert_eq!(harness.resource::<Projectiles>().len(), 2);
    assert_eq!(
        harness.take_sounds(),
        vec![SoundEffect::Shoot, SoundEffect::Shoot]
    );
}

#[test]
fn movement_only_while_controls_locked() {
    let mut harness = Harness::new(6);
    harness.send(ControlEvent::KeyDown("W".to_string()));
    harness.step_millis(1000);
    assert_eq!(harness.resource::<Player>().position, Vec3::new(0.0, 2.0, 0.0));

    harness.send(ControlEvent::StartGame);
    harness.step_millis(1000);

    let position = harness.resource::<Player>().position;
    assert!(position.distance(Vec3::new(0.0, 2.0, -10.0)) < 1e-4, "{position}");
}

#[test]
fn unlocking_releases_held_keys() {
    let mut harness = Harness::new(6);
    harness.send(ControlEvent::StartGame);
    harness.send(ControlEvent::KeyDown("d".to_string()));
    harness.step_millis(16);

    harness.send(ControlEvent::SetControlsLocked(false));
    harness.step_millis(16);
    let parked = harness.resource::<Player>().position;

    // Relocking does not bring the key back
    harness.send(ControlEvent::SetControlsLocked(true));
    harness.step_millis(500);
    assert_eq!(harness.resource::<Player>().position, parked);
}

#[test]
fn rebind_event_moves_control() {
    let mut harness = Harness::new(8);
    harness.send(ControlEvent::StartGame);
    harness.send(ControlEvent::Rebind {
        action: Action::Forward,
        key: "ArrowUp".to_string(),
    });
    harness.send(ControlEvent::KeyDown("w".to_string()));
    harness.step_millis(500);
    assert_eq!(harness.resource::<Player>().position, Vec3::new(0.0, 2.0, 0.0));

    harness.send(ControlEvent::KeyDown("arrowup".to_string()));
    harness.step_millis(500);
    let position = harness.resource::<Player>().position;
    assert!(position.distance(Vec3::new(0.0, 2.0, -5.0)) < 1e-4, "{position}");
}

#[test]
fn reset_cancels_pending_respawn() {
    let mut harness = started_in_lane();
    harness.send(ControlEvent::Fire);
    step_until_hit(&mut harness, 60);

    harness.send(ControlEvent::Reset);
    harness.step_millis(3000);

    assert!(!harness.resource::<Target>().is_alive());
    assert!(harness.resource::<DelayedTasks>().is_empty());
    assert_eq!(*harness.resource::<GameSession>(), GameSession::default());
    assert_eq!(*harness.resource::<Player>(), Player::default());
    assert!(harness.resource::<MissionText>().text().is_none());
}

#[test]
fn stale_message_timer_keeps_newer_text() {
    let config = SimConfig {
        projectile_speed: 0.0,
        ..lane_config()
    };
    let mut harness = Harness::with_config(config, 9);
    harness.resource_mut::<Player>().position = Vec3::new(0.0, 0.5, 0.0);
    harness.send(ControlEvent::StartGame);
    harness.step_millis(16);
    assert_eq!(harness.resource::<MissionText>().text(), Some(MISSION_START_TEXT));

    // Parked projectile on the target kills it one second into the start message
    let target = harness.resource::<Target>().position().unwrap();
    harness.resource_mut::<Projectiles>().spawn(target, Vec3::NEG_Z);
    harness.step_millis(1000);
    assert_eq!(harness.resource::<MissionText>().text(), Some(MISSION_COMPLETE_TEXT));

    // Start message timer runs out here; the newer text stays
    harness.step_millis(2000);
    assert_eq!(harness.resource::<MissionText>().text(), Some(MISSION_COMPLETE_TEXT));

    harness.step_millis(1000);
    assert!(harness.resource::<MissionText>().text().is_none());
}
