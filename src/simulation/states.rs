//! Core state types for the gravity sandbox.
//!
//! Defines the body record and the `System` store that owns every live
//! body plus the simulation clock `t`.
//!
//! Bodies only enter the store through the validating constructor; the
//! store's mutation entry points are `push_body` and the survivor rebuild
//! done by the collision pass.

use std::fmt;

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// A simulated circular mass point.
#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2,                // position (screen units)
    pub v: NVec2,                // velocity (screen units per second)
    pub a: NVec2,                // acceleration, recomputed every step
    pub m: f64,                  // mass (kg)
    pub radius: f64,             // radius (screen units), also the collision extent
    pub collided: bool,          // transient marker consumed by the collision pass
    pub color: Option<[f32; 3]>, // display-only
}

impl Body {
    /// Validated construction. Non-positive or non-finite mass/radius is
    /// rejected here so no partial body ever reaches the store.
    pub fn new(
        m: f64,
        radius: f64,
        x: NVec2,
        v: NVec2,
        color: Option<[f32; 3]>,
    ) -> Result<Self, SpawnError> {
        if !m.is_finite() || m <= 0.0 {
            return Err(SpawnError::NonPositiveMass(m));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SpawnError::NonPositiveRadius(radius));
        }
        Ok(Self {
            x,
            v,
            a: NVec2::zeros(),
            m,
            radius,
            collided: false,
            color,
        })
    }

    /// Euclidean distance between two body centers (screen units).
    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.x - self.x).norm()
    }
}

/// The body store: an ordered collection of live bodies and the current
/// simulation time `t` in seconds.
#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>,
    pub t: f64,
}

impl System {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            t: 0.0,
        }
    }

    /// Appends an already-validated body to the store.
    pub fn push_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Total mass over all live bodies (kg).
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }
}

/// Why a spawn was rejected at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnError {
    /// No mass value is set in the spawn settings.
    MissingMass,
    /// No radius value is set in the spawn settings.
    MissingRadius,
    /// Mass value is zero, negative, or non-finite.
    NonPositiveMass(f64),
    /// Radius value is zero, negative, or non-finite.
    NonPositiveRadius(f64),
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingMass => write!(f, "no mass value entered"),
            Self::MissingRadius => write!(f, "no radius value entered"),
            Self::NonPositiveMass(m) => write!(f, "mass must be positive, got {m}"),
            Self::NonPositiveRadius(r) => write!(f, "radius must be positive, got {r}"),
        }
    }
}

impl std::error::Error for SpawnError {}
