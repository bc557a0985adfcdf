//! Build a fully-initialized sandbox scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - physical parameters (`Parameters`)
//! - spawn settings for the click gesture (`SpawnSettings`)
//! - system state (`System` with any pre-seeded bodies at t = 0)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input and frame-tick systems, alongside the transient `SpawnGesture`.

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, SpawnError, System};

/// Bevy resource holding the whole simulation: parameters, the spawn
/// settings the next gesture will use, and the body store.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub spawn: SpawnSettings,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> anyhow::Result<Self> {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            distance_multiplier: p_cfg.distance_multiplier,
            mass_multiplier: p_cfg.mass_multiplier,
            min_distance: p_cfg.min_distance,
        };

        let spawn = SpawnSettings {
            mass: cfg.spawn.mass,
            radius: cfg.spawn.radius,
            color: cfg.spawn.color,
        };

        // Pre-seeded bodies go through the same validation as spawned
        // ones; their masses are already in kg.
        let mut system = System::new();
        for bc in &cfg.bodies {
            let body = Body::new(
                bc.m,
                bc.radius,
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.color,
            )?;
            system.push_body(body);
        }

        Ok(Self {
            parameters,
            spawn,
            system,
        })
    }

    /// Validated spawn: builds a body from the current spawn settings at
    /// `at` with the given launch velocity and appends it to the store.
    /// The configured mass is in input units and is scaled to kg here.
    pub fn spawn_body(&mut self, at: NVec2, velocity: NVec2) -> Result<(), SpawnError> {
        let (mass, radius, color) = self.spawn.validated()?;
        let body = Body::new(
            mass * self.parameters.mass_multiplier,
            radius,
            at,
            velocity,
            color,
        )?;
        self.system.push_body(body);
        Ok(())
    }
}

/// Mass/radius/color the next spawn gesture will use. Mass and radius are
/// optional because the user may not have entered them yet; a spawn with
/// either missing is rejected at the boundary.
#[derive(Debug, Clone, Default)]
pub struct SpawnSettings {
    pub mass: Option<f64>,   // input units, scaled by mass_multiplier on spawn
    pub radius: Option<f64>, // screen units
    pub color: Option<[f32; 3]>,
}

impl SpawnSettings {
    /// Checks that mass and radius are present and positive.
    pub fn validated(&self) -> Result<(f64, f64, Option<[f32; 3]>), SpawnError> {
        let mass = self.mass.ok_or(SpawnError::MissingMass)?;
        let radius = self.radius.ok_or(SpawnError::MissingRadius)?;
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SpawnError::NonPositiveMass(mass));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SpawnError::NonPositiveRadius(radius));
        }
        Ok((mass, radius, self.color))
    }
}

/// Transient click-then-click spawn gesture state: the anchoring first
/// click and the live cursor position. Read by the frame tick for the
/// preview overlay; one frame of staleness is acceptable.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpawnGesture {
    pub anchor: Option<NVec2>,
    pub cursor: NVec2,
}

impl SpawnGesture {
    /// Anchors a new gesture at the clicked position.
    pub fn begin(&mut self, at: NVec2) {
        self.anchor = Some(at);
        self.cursor = at;
    }

    pub fn is_pending(&self) -> bool {
        self.anchor.is_some()
    }

    /// Finishes a pending gesture, returning the spawn position (the
    /// anchor) and the launch velocity (cursor minus anchor).
    pub fn finish(&mut self) -> Option<(NVec2, NVec2)> {
        self.anchor.take().map(|anchor| (anchor, self.cursor - anchor))
    }
}
