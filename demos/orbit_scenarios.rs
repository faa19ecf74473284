//! Two-body scenario tour.
//!
//! Runs the four Mars presets with the Verlet scheme and prints a
//! radius/energy summary for each qualitative trajectory family.
//!
//! Run with: cargo run --example orbit_scenarios

use stormer::prelude::*;

fn main() -> SimResult<()> {
    println!("=== Mars two-body scenarios (position Verlet) ===\n");

    let runs = [
        ("descent from 10 km", TwoBodyScenario::mars_descent(), 300.0, 0.1),
        ("circular orbit", TwoBodyScenario::mars_circular(), 8000.0, 1.0),
        ("elliptical orbit", TwoBodyScenario::mars_elliptical(), 3200.0, 0.2),
        ("hyperbolic escape", TwoBodyScenario::mars_hyperbolic(), 8000.0, 1.0),
    ];

    println!(
        "{:<22} {:>12} {:>14} {:>14} {:>14}",
        "scenario", "launch (m/s)", "|r0| (m)", "|r final| (m)", "energy drift"
    );

    for (name, scenario, t_max, dt) in runs {
        let traj = integrate_two_body(&scenario, SchemeKind::Verlet, t_max, dt)?;
        let r_first = traj.position[0].magnitude();
        let r_last = traj.position[traj.len() - 1].magnitude();
        println!(
            "{name:<22} {:>12.1} {r_first:>14.4e} {r_last:>14.4e} {:>14.2e}",
            scenario.speed(),
            traj.max_energy_drift()
        );
    }

    println!("\nDescent shrinks, circular holds, elliptical stays bound, hyperbolic grows.");

    Ok(())
}
