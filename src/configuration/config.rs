//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and unit multipliers
//! - [`SpawnConfig`]      – mass/radius/color the spawn gesture starts with
//! - [`BodyConfig`]       – optional pre-seeded bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 6.67e-11               # gravitational constant (m^3 kg^-1 s^-2)
//!   distance_multiplier: 1.0e5  # screen units -> meters
//!   mass_multiplier: 1.0e29     # spawn-input mass -> kg
//!   min_distance: 1.0           # separation floor (m) for coincident pairs
//!
//! spawn:
//!   mass: 5.0                 # input units, scaled by mass_multiplier
//!   radius: 10.0              # screen units
//!   color: [0.9, 0.9, 1.0]    # optional rgb
//!
//! bodies:                     # optional, store starts empty without it
//!   - x: [ -120.0, 0.0 ]
//!     v: [  0.0, 12.0 ]
//!     m: 1.0e26               # kg, taken verbatim
//!     radius: 12.0
//! ```

use serde::Deserialize;

/// Physical constants and unit multipliers for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64,                   // gravitational constant
    pub distance_multiplier: f64, // screen units -> meters
    pub mass_multiplier: f64,     // spawn-input mass units -> kg
    pub min_distance: f64,        // separation floor in meters
}

/// Values the spawn gesture starts with. Mass or radius left unset means
/// spawns are rejected until the user supplies one.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SpawnConfig {
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub color: Option<[f32; 3]>,
}

/// Initial state for one pre-seeded body
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2],             // position in screen units
    pub v: [f64; 2],             // velocity in screen units per second
    pub m: f64,                  // mass in kg
    pub radius: f64,             // radius in screen units
    pub color: Option<[f32; 3]>, // optional rgb, display-only
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub spawn: SpawnConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}
