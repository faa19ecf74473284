//! Oscillator scheme comparison.
//!
//! Runs the explicit and position-Verlet schemes against the closed-form
//! solution, prints the deviation and energy-drift summary, then sweeps
//! the step size to expose the stability knee near dt = 1 for the unit
//! oscillator.
//!
//! Run with: cargo run --example oscillator_comparison

use stormer::prelude::*;

fn main() -> SimResult<()> {
    println!("=== Spring-mass scheme comparison ===\n");

    let (x0, v0, mass, k) = (0.0, 1.0, 1.0, 1.0);
    let (t_max, dt) = (100.0, 0.01);

    let comparison = compare_schemes(x0, v0, mass, k, t_max, dt)?;
    println!(
        "unit oscillator, {} samples at dt = {dt}",
        comparison.analytical.len()
    );
    println!(
        "\n{:<10} {:>14} {:>14} {:>16}",
        "scheme", "max |err|", "mse", "energy drift"
    );
    for (name, report) in [
        ("explicit", comparison.explicit_report),
        ("verlet", comparison.verlet_report),
    ] {
        println!(
            "{:<10} {:>14.3e} {:>14.3e} {:>16.3e}",
            name, report.max_abs_error, report.mse, report.final_energy_drift
        );
    }

    println!("\n=== Step-size stability sweep ===\n");

    let dt_values = log_spaced(-3.0, 1.0, 17);
    let sweep = stability_sweep(200.0, &dt_values)?;
    println!("{:>12} {:>14}", "dt", "mse");
    for (dt, mse) in sweep.dt_values.iter().zip(&sweep.mse_values) {
        println!("{dt:>12.4e} {mse:>14.4e}");
    }
    println!("\nThe sharp knee marks the critical step size.");

    let json = serde_json::to_string(&comparison.verlet_report)
        .map_err(|e| SimError::serialization(e.to_string()))?;
    println!("\nverlet report (json): {json}");

    Ok(())
}
