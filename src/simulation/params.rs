//! Physical parameters for the simulation
//!
//! `Parameters` holds the runtime constants:
//! - gravitational constant `g`,
//! - unit multipliers mapping screen units and spawn inputs to
//!   physical scales,
//! - `min_distance`, the separation floor applied to coincident pairs

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64,                   // gravitational constant (m^3 kg^-1 s^-2)
    pub distance_multiplier: f64, // screen units -> meters
    pub mass_multiplier: f64,     // spawn-input mass units -> kg
    pub min_distance: f64,        // floor (meters) for the pair separation
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: 6.67e-11,
            distance_multiplier: 1.0e5,
            mass_multiplier: 1.0e29,
            min_distance: 1.0,
        }
    }
}
