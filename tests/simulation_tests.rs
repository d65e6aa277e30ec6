//! Simulation Tests
//!
//! Tests for:
//! - Pause gating of updates and commands
//! - Command code decoding at the host entry points
//! - Draw submission with composed transforms
//! - Restart, asset loading and settings validation

use glam::{Affine3A, Vec3};

use lander::animation::AnimationState;
use lander::render::DrawList;
use lander::scene::{Anchor, BoundingBox, Mesh};
use lander::settings::LanderSettings;
use lander::{
    Axis, AxisCoupling, LanderCommand, LanderError, ManifestSource, Simulation, SpeedState,
};

fn unit_box() -> BoundingBox {
    BoundingBox::from_center(Vec3::ZERO, Vec3::ONE)
}

fn running_sim() -> Simulation {
    let mut sim = Simulation::default();
    sim.resize(1280, 720);
    sim.apply_command(LanderCommand::RotateLeft);
    sim.apply_command(LanderCommand::ThrustForward);
    sim.update(0.1, 0.1);
    sim
}

// ============================================================================
// Pause
// ============================================================================

#[test]
fn paused_update_changes_nothing() {
    let mut sim = running_sim();
    sim.set_paused(true);

    let animation = *sim.animation();
    let position = sim.camera().position();
    let look_at = sim.camera().look_at();
    let frames = sim.frame_count();
    let time = sim.time();

    for i in 0..10 {
        sim.update(1.0 + i as f32, 0.5);
    }

    assert_eq!(*sim.animation(), animation);
    assert_eq!(sim.camera().position(), position);
    assert_eq!(sim.camera().look_at(), look_at);
    assert_eq!(sim.frame_count(), frames);
    assert_eq!(sim.time(), time);
}

#[test]
fn commands_are_dropped_while_paused() {
    let mut sim = running_sim();
    let speed = sim.speed();
    let animation = *sim.animation();

    sim.set_paused(true);
    sim.rotate_command(LanderCommand::ROTATE_LEFT);
    sim.thrust_command(LanderCommand::THRUST_FORWARD);
    sim.apply_command(LanderCommand::RotateDown);

    assert_eq!(sim.speed(), speed);
    assert_eq!(*sim.animation(), animation);
}

#[test]
fn paused_time_does_not_count_towards_animation() {
    let mut paused = running_sim();
    let mut reference = running_sim();

    paused.set_paused(true);
    paused.update(5.0, 4.9);
    paused.set_paused(false);

    paused.update(5.1, 0.1);
    reference.update(0.2, 0.1);

    assert_eq!(*paused.animation(), *reference.animation());
}

// ============================================================================
// Command codes
// ============================================================================

#[test]
fn unknown_codes_are_ignored() {
    let mut sim = Simulation::default();
    let animation = *sim.animation();

    for code in [-1, 6, 42, i32::MAX] {
        sim.rotate_command(code);
        sim.thrust_command(code);
    }

    assert_eq!(sim.speed(), SpeedState::default());
    assert_eq!(*sim.animation(), animation);
}

#[test]
fn codes_on_the_wrong_entry_point_are_ignored() {
    let mut sim = Simulation::default();

    sim.rotate_command(LanderCommand::THRUST_FORWARD);
    sim.thrust_command(LanderCommand::ROTATE_LEFT);

    assert_eq!(sim.speed(), SpeedState::default());
}

#[test]
fn each_code_drives_its_axis() {
    let mut sim = Simulation::default();

    sim.rotate_command(LanderCommand::ROTATE_UP);
    assert!(sim.speed().rotation.x < 0.0);
    sim.rotate_command(LanderCommand::ROTATE_DOWN);
    sim.rotate_command(LanderCommand::ROTATE_DOWN);
    assert!(sim.speed().rotation.x > 0.0);

    sim.rotate_command(LanderCommand::ROTATE_RIGHT);
    assert!(sim.speed().rotation.y < 0.0);

    sim.thrust_command(LanderCommand::THRUST_BACKWARD);
    assert!(sim.speed().translation < 0.0);

    assert_eq!(sim.speed().rotation.z, 0.0);
}

#[test]
fn configured_coupling_turns_steep_pitch_into_roll() {
    let mut settings = LanderSettings::default();
    settings.gravity.enabled = false;
    settings.controls.couplings = vec![AxisCoupling {
        from: Axis::X,
        to: Axis::Z,
        threshold: 0.003,
    }];
    let mut sim = Simulation::new(settings).unwrap();

    sim.apply_command(LanderCommand::RotateDown);
    sim.update(0.2, 0.2);
    assert!(sim.pose().rotation.x > 0.003);

    sim.apply_command(LanderCommand::RotateDown);
    assert!((sim.speed().rotation.z - 0.01).abs() < 1e-6);
    assert!((sim.speed().rotation.x - 0.01).abs() < 1e-6);
}

// ============================================================================
// Render
// ============================================================================

#[test]
fn render_submits_every_mesh_with_its_transform() {
    let mut sim = Simulation::default();
    let ground = sim.add_mesh(Mesh::new("Moon", unit_box()).with_anchor(Anchor::World));
    let ship = sim.add_mesh(Mesh::new("Lander", unit_box()));

    sim.apply_command(LanderCommand::RotateLeft);
    sim.apply_command(LanderCommand::ThrustForward);
    sim.update(0.3, 0.3);

    let mut draws = DrawList::new();
    sim.render(&mut draws);

    assert_eq!(draws.calls.len(), 2);
    let ground_call = draws.calls.iter().find(|c| c.handle == ground).unwrap();
    let ship_call = draws.calls.iter().find(|c| c.handle == ship).unwrap();

    assert_eq!(ground_call.name, "Moon");
    assert_eq!(ground_call.world, Affine3A::IDENTITY);
    assert_eq!(ship_call.name, "Lander");
    assert_eq!(ship_call.world, sim.pose().world_matrix());
    assert_eq!(ship_call.world, sim.pose().world_transform(Anchor::Vehicle));
    assert_eq!(ground_call.world, sim.pose().world_transform(Anchor::World));

    let origin = ship_call.world.transform_point3(Vec3::ZERO);
    assert!((origin - sim.pose().position()).length() < 1e-5);
}

#[test]
fn render_does_not_advance_state() {
    let mut sim = running_sim();
    let animation = *sim.animation();
    let frames = sim.frame_count();

    let mut draws = DrawList::new();
    sim.render(&mut draws);
    sim.render(&mut draws);

    assert_eq!(*sim.animation(), animation);
    assert_eq!(sim.frame_count(), frames);
}

// ============================================================================
// Restart
// ============================================================================

#[test]
fn restart_returns_to_rest_but_keeps_meshes() {
    let mut sim = running_sim();
    sim.add_mesh(Mesh::new("Lander", unit_box()));
    sim.update(3.0, 2.9);

    sim.restart();

    assert_eq!(sim.speed(), SpeedState::default());
    assert_eq!(*sim.animation(), AnimationState::new(&sim.settings().gravity));
    assert_eq!(sim.pose().position(), Vec3::ZERO);
    assert_eq!(sim.meshes().len(), 1);

    // the first frame after restart starts a fresh gravity leg
    sim.update(3.5, 0.5);
    assert!((sim.pose().gravity_offset.y + 0.125).abs() < 1e-5);
}

// ============================================================================
// Setup
// ============================================================================

#[test]
fn initialize_loads_configured_assets() {
    let mut source = ManifestSource::new();
    source.insert(
        "Moon.cmo",
        vec![
            Mesh::new("Moon", unit_box()).with_anchor(Anchor::World),
            Mesh::new("Lander", unit_box()),
        ],
    );

    let mut sim = Simulation::default();
    sim.initialize(&mut source).unwrap();

    assert_eq!(sim.meshes().len(), 2);
    let lander = sim.meshes().find("Lander").unwrap();
    assert_eq!(sim.meshes().get(lander).unwrap().anchor, Anchor::Vehicle);
}

#[test]
fn initialize_reports_missing_asset() {
    let mut sim = Simulation::default();
    let err = sim.initialize(&mut ManifestSource::new()).unwrap_err();
    assert!(matches!(err, LanderError::AssetNotFound(name) if name == "Moon.cmo"));
    assert!(sim.meshes().is_empty());
}

#[test]
fn invalid_settings_are_rejected() {
    let mut settings = LanderSettings::default();
    settings.camera.near = 10.0;
    settings.camera.far = 1.0;
    assert!(matches!(
        Simulation::new(settings),
        Err(LanderError::InvalidSettings(_))
    ));

    let mut settings = LanderSettings::default();
    settings.pacing.gravity.cap = 0.0;
    assert!(Simulation::new(settings).is_err());
}

#[test]
fn settings_round_trip_through_json_with_couplings() {
    let settings = LanderSettings::from_json_str(
        r#"{
            "controls": {
                "thrust_frame": "World",
                "couplings": [ { "from": "X", "to": "Z", "threshold": 1.2 } ]
            },
            "gravity": { "pull": [0.0, -1.0, 0.0] }
        }"#,
    )
    .unwrap();

    assert_eq!(settings.controls.couplings.len(), 1);
    assert_eq!(settings.controls.couplings[0].to, Axis::Z);
    assert_eq!(settings.gravity.pull, Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(settings.mesh_assets, vec!["Moon.cmo".to_string()]);

    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(LanderSettings::from_json_str(&json).unwrap(), settings);
}
