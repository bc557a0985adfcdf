//! Collision-merge reducer
//!
//! Coalesces overlapping bodies into a single survivor per cluster. The
//! survivor is the cluster member with the largest radius (later index on
//! ties) and takes the cluster's summed mass and summed radius; its own
//! position and velocity are kept as-is.
//!
//! This is a single forward scan, not a union-find: a cluster reachable
//! only through a later pairwise overlap that does not touch the scan's
//! anchor is picked up on the next frame. Known one-frame-lag property.

use log::debug;

use super::states::{Body, System};

/// Two bodies collide iff their center distance is within the sum of
/// their radii. Touching exactly counts.
pub fn colliding(a: &Body, b: &Body) -> bool {
    a.distance_to(b) <= a.radius + b.radius
}

/// Merge every overlap cluster in the store, in place.
pub fn resolve_collisions(sys: &mut System) {
    let n = sys.bodies.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        if sys.bodies[i].collided {
            continue;
        }

        let mut largest = i; // cluster member with the largest radius
        let mut total_mass = sys.bodies[i].m;
        let mut total_radius = sys.bodies[i].radius;
        let mut collision_found = false;

        for j in i + 1..n {
            if sys.bodies[j].collided || !colliding(&sys.bodies[i], &sys.bodies[j]) {
                continue;
            }
            collision_found = true;

            // >= so radius ties go to the later index
            if sys.bodies[j].radius >= sys.bodies[largest].radius {
                largest = j;
            }

            total_mass += sys.bodies[j].m;
            total_radius += sys.bodies[j].radius;
            sys.bodies[j].collided = true;
        }

        if collision_found {
            sys.bodies[largest].m = total_mass;
            sys.bodies[largest].radius = total_radius;

            // Swap the survivor into slot i so the outer scan does not
            // reprocess it.
            if largest != i {
                sys.bodies[largest].collided = false;
                sys.bodies[i].collided = true;
                sys.bodies.swap(i, largest);
            }
        }
    }

    // Rebuild the store from survivors rather than filtering in place.
    sys.bodies = std::mem::take(&mut sys.bodies)
        .into_iter()
        .filter(|b| !b.collided)
        .collect();

    let remaining = sys.bodies.len();
    if remaining < n {
        debug!("collision pass absorbed {} bodies, {} remain", n - remaining, remaining);
    }
}
