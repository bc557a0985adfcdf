pub mod benchmark;
pub mod configuration;
pub mod simulation;
pub mod visualization;

pub use simulation::collisions::{colliding, resolve_collisions};
pub use simulation::engine::{render_frame, tick, CircleInstruction, Frame, PreviewInstruction};
pub use simulation::forces::pair_force;
pub use simulation::integrator::euler_step;
pub use simulation::params::Parameters;
pub use simulation::scenario::{Scenario, SpawnGesture, SpawnSettings};
pub use simulation::states::{Body, NVec2, SpawnError, System};

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, SpawnConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_euler, bench_resolver};
