//! Pairwise gravitational force term
//!
//! One Newtonian pair interaction, evaluated against a mixed position
//! snapshot by the integrator: the receiving body's position is the
//! already-advanced one, the partner's position is the pre-step snapshot.

use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Gravitational force on a body of mass `m_i` at `x_i`, exerted by a
/// partner of mass `m_j` whose snapshot position is `x_j`.
///
/// The separation is scaled to meters before the inverse-square term, and
/// the direction cosines divide by that same scaled distance. On-screen
/// behavior is tuned against this combination, so both scalings stay.
pub fn pair_force(x_i: NVec2, m_i: f64, x_j: NVec2, m_j: f64, p: &Parameters) -> NVec2 {
    let r = x_j - x_i;

    let mut d = r.norm() * p.distance_multiplier;
    if d < p.min_distance {
        // Coincident pair: floor the separation instead of letting the
        // division produce NaN/Infinity.
        d = p.min_distance;
    }

    // F = G * m_i * m_j / d^2, decomposed along (r.x / d, r.y / d)
    let magnitude = p.g * m_i * m_j / (d * d);
    r * (magnitude / d)
}
