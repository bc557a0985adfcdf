//! Semi-implicit Euler pass for the sandbox
//!
//! Advances every body by one step: position from the pre-step velocity,
//! velocity from the previous step's acceleration, then a fresh
//! acceleration from the pairwise gravity sum. O(n^2) per step; fine for
//! the interactive body counts this sandbox targets.

use super::forces::pair_force;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step of `dt` seconds, in place.
///
/// Force terms read the partner's position through a snapshot taken
/// before anything moved, while the receiving body is already advanced.
/// That asymmetry keeps the pass a single loop whose result does not
/// depend on the mutation of earlier bodies, and the resulting
/// mixed-timestep force law is what the sandbox's visuals are tuned to.
pub fn euler_step(sys: &mut System, params: &Parameters, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 {
        // nothing to move
        return;
    }

    // Position snapshot for the force pass below.
    let old_positions: Vec<NVec2> = sys.bodies.iter().map(|b| b.x).collect();

    for i in 0..n {
        // x_n+1 = x_n + dt v_n, then v_n+1 = v_n + dt a_n
        let (x_i, m_i) = {
            let b = &mut sys.bodies[i];
            b.x += b.v * dt;
            b.v += b.a * dt;
            (b.x, b.m)
        };

        // Net force on body i, accumulated over every other body using
        // its snapshot position.
        let mut net_force = NVec2::zeros();
        for j in 0..n {
            if j != i {
                net_force += pair_force(x_i, m_i, old_positions[j], sys.bodies[j].m, params);
            }
        }

        // Newton's second law. m_i cancels against the force term
        // analytically but is kept for symmetry with it.
        sys.bodies[i].a = net_force / m_i;
    }

    sys.t += dt;
}
