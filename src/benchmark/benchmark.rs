//! Timing sweeps for the integrator and the collision pass
//!
//! Not wired into a bench harness; run with `gravsim --bench` to print
//! wall-clock timings over a range of body counts.

use std::time::Instant;

use crate::simulation::collisions::resolve_collisions;
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Deterministic spread-out layout, no rand needed.
fn seeded_system(n: usize, radius: f64) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        bodies.push(Body {
            x: NVec2::new((i_f * 0.37).sin() * 500.0, (i_f * 0.13).cos() * 500.0),
            v: NVec2::zeros(),
            a: NVec2::zeros(),
            m: 1.0e26,
            radius,
            collided: false,
            color: None,
        });
    }

    System { bodies, t: 0.0 }
}

pub fn bench_euler() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let params = Parameters::default();

    for n in ns {
        let mut sys = seeded_system(n, 0.5);

        // Warm up
        euler_step(&mut sys, &params, 0.016);

        let t0 = Instant::now();
        euler_step(&mut sys, &params, 0.016);
        let dt = t0.elapsed().as_secs_f64();

        println!("euler:    N = {n:5}, step = {dt:9.6} s");
    }
}

pub fn bench_resolver() {
    let ns = [50, 100, 200, 400, 800, 1600];

    for n in ns {
        // Large radii so the pass actually merges clusters.
        let mut sys = seeded_system(n, 40.0);
        let before = sys.body_count();

        let t0 = Instant::now();
        resolve_collisions(&mut sys);
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "resolver: N = {n:5}, pass = {dt:9.6} s, {} -> {} bodies",
            before,
            sys.body_count()
        );
    }
}
