//! Bevy 2D viewer for the sandbox
//!
//! Wires the simulation into a windowed app: a 2D camera, cursor
//! tracking, the click-then-click spawn gesture, keyboard tuning of the
//! spawn settings, and a frame system that runs one simulation tick and
//! draws its render instructions with gizmos.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::engine::tick;
use crate::simulation::scenario::{Scenario, SpawnGesture};
use crate::simulation::states::NVec2;

// Fixed increments for the arrow-key spawn tuning
const MASS_STEP: f64 = 1.0; // input units
const RADIUS_STEP: f64 = 2.0; // screen units

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting viewer with {} bodies",
        scenario.system.body_count()
    );

    App::new()
        .insert_resource(scenario)
        .init_resource::<SpawnGesture>()
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_camera_system)
        .add_systems(
            Update,
            (
                cursor_track_system,
                spawn_tuning_system,
                spawn_gesture_system,
                frame_tick_system,
            )
                .chain(),
        )
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Keeps the gesture's live cursor in world coordinates.
fn cursor_track_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut gesture: ResMut<SpawnGesture>,
) {
    let (Ok(window), Ok((camera, cam_transform))) = (windows.get_single(), cameras.get_single())
    else {
        return;
    };

    if let Some(world) = window
        .cursor_position()
        .and_then(|p| camera.viewport_to_world_2d(cam_transform, p))
    {
        gesture.cursor = NVec2::new(world.x as f64, world.y as f64);
    }
}

/// Arrow keys adjust the next spawn's mass (up/down) and radius
/// (right/left). Values may be driven non-positive; the spawn boundary
/// rejects them.
fn spawn_tuning_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    let spawn = &mut scenario.spawn;
    let mut changed = false;

    if keys.just_pressed(KeyCode::ArrowUp) {
        spawn.mass = Some(spawn.mass.unwrap_or(0.0) + MASS_STEP);
        changed = true;
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        spawn.mass = Some(spawn.mass.unwrap_or(0.0) - MASS_STEP);
        changed = true;
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        spawn.radius = Some(spawn.radius.unwrap_or(0.0) + RADIUS_STEP);
        changed = true;
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        spawn.radius = Some(spawn.radius.unwrap_or(0.0) - RADIUS_STEP);
        changed = true;
    }

    if changed {
        info!(
            "spawn settings: mass {:?}, radius {:?}",
            spawn.mass, spawn.radius
        );
    }
}

/// Click-then-click spawning: the first accepted click anchors the
/// gesture, the second releases a body with velocity = cursor - anchor.
fn spawn_gesture_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut scenario: ResMut<Scenario>,
    mut gesture: ResMut<SpawnGesture>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    // Both clicks of the gesture notify on missing/invalid inputs.
    if let Err(e) = scenario.spawn.validated() {
        warn!("spawn rejected: {e}");
        return;
    }

    if !gesture.is_pending() {
        let at = gesture.cursor;
        gesture.begin(at);
        info!("spawn gesture anchored at ({:.1}, {:.1})", at.x, at.y);
    } else if let Some((anchor, velocity)) = gesture.finish() {
        match scenario.spawn_body(anchor, velocity) {
            Ok(()) => info!("spawned body, {} total", scenario.system.body_count()),
            Err(e) => warn!("spawn rejected: {e}"),
        }
    }
}

/// Runs one simulation tick with the frame's wall-clock delta and draws
/// the returned instructions.
fn frame_tick_system(
    time: Res<Time>,
    mut scenario: ResMut<Scenario>,
    gesture: Res<SpawnGesture>,
    mut gizmos: Gizmos,
) {
    let delta_ms = time.delta_seconds_f64() * 1000.0;
    let frame = tick(&mut scenario, &gesture, delta_ms);

    for c in &frame.circles {
        let color = c
            .color
            .map(|[r, g, b]| Color::rgb(r, g, b))
            .unwrap_or(Color::WHITE);
        gizmos.circle_2d(
            Vec2::new(c.center.x as f32, c.center.y as f32),
            c.radius as f32,
            color,
        );
    }

    if let Some(p) = &frame.preview {
        let anchor = Vec2::new(p.anchor.x as f32, p.anchor.y as f32);
        let cursor = Vec2::new(p.cursor.x as f32, p.cursor.y as f32);
        // The body that will be released, plus its launch-velocity vector
        gizmos.circle_2d(anchor, p.radius as f32, Color::GRAY);
        gizmos.line_2d(anchor, cursor, Color::GRAY);
    }
}
