//! Frame driver for the sandbox
//!
//! One tick, in order: resolve collisions, emit the frame's render
//! instructions, integrate with the elapsed time. `tick` takes the
//! elapsed milliseconds directly, so it runs identically under the Bevy
//! viewer and under a test harness feeding synthetic deltas.

use super::collisions::resolve_collisions;
use super::integrator::euler_step;
use super::scenario::{Scenario, SpawnGesture};
use super::states::NVec2;

/// One circle to draw: a surviving body.
#[derive(Debug, Clone)]
pub struct CircleInstruction {
    pub center: NVec2,
    pub radius: f64,
    pub color: Option<[f32; 3]>,
}

/// Overlay shown while a spawn gesture is pending: the body-to-be at the
/// anchor plus the launch-velocity segment out to the cursor.
#[derive(Debug, Clone)]
pub struct PreviewInstruction {
    pub anchor: NVec2,
    pub cursor: NVec2,
    pub radius: f64,
}

/// Render output of one tick.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub circles: Vec<CircleInstruction>,
    pub preview: Option<PreviewInstruction>,
}

/// Advance the scenario by one frame of `delta_ms` wall-clock
/// milliseconds and return what to draw.
pub fn tick(scenario: &mut Scenario, gesture: &SpawnGesture, delta_ms: f64) -> Frame {
    resolve_collisions(&mut scenario.system);

    let frame = render_frame(scenario, gesture);

    // The host hands over milliseconds; the integrator runs in seconds.
    euler_step(
        &mut scenario.system,
        &scenario.parameters,
        delta_ms / 1000.0,
    );

    frame
}

/// Build the frame's render instructions: one circle per surviving body,
/// in store order, plus the gesture preview when one is pending.
pub fn render_frame(scenario: &Scenario, gesture: &SpawnGesture) -> Frame {
    let circles = scenario
        .system
        .bodies
        .iter()
        .map(|b| CircleInstruction {
            center: b.x,
            radius: b.radius,
            color: b.color,
        })
        .collect();

    // A gesture can only anchor once its settings validate, so the radius
    // is present whenever the preview is.
    let preview = gesture.anchor.map(|anchor| PreviewInstruction {
        anchor,
        cursor: gesture.cursor,
        radius: scenario.spawn.radius.unwrap_or(0.0),
    });

    Frame { circles, preview }
}
