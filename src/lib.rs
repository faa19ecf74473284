//! # stormer
//!
//! Numerical integration engine for conservative mechanical systems: a 1-D
//! spring-mass oscillator and a 3-D two-body gravitational system.
//!
//! The crate exists to compare integration schemes — a first-order explicit
//! step against second-order position Verlet — and to quantify stability as
//! a function of step size:
//!
//! - closed-form amplitude/phase reference for simple harmonic motion
//! - explicit and position-Verlet schemes, written once over a generic
//!   state type shared by the 1-D and 3-D systems
//! - per-sample energy diagnostic for drift detection
//! - step-size stability sweep locating the critical step
//! - vis-viva orbit presets (descent, circular, elliptical, hyperbolic)
//!
//! The crate only produces arrays and summary numbers; plotting, training
//! loops, and orchestration live elsewhere.
//!
//! ## Example
//!
//! ```rust
//! use stormer::prelude::*;
//!
//! // Unit oscillator released from the origin with unit velocity.
//! let comparison = compare_schemes(0.0, 1.0, 1.0, 1.0, 10.0, 0.001)
//!     .expect("valid step parameters");
//!
//! // The symplectic scheme tracks the closed form more tightly.
//! assert!(comparison.verlet_report.max_abs_error
//!     < comparison.explicit_report.max_abs_error);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops, // Numerical code choices are intentional
    clippy::imprecise_flops,
    clippy::needless_range_loop, // Index-coupled recurrences read clearer
    clippy::missing_const_for_fn
)]

pub mod config;
pub mod error;
pub mod forces;
pub mod grid;
pub mod integrate;
pub mod orbit;
pub mod oscillator;
pub mod stability;
pub mod vector;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{OrbitSection, OscillatorSection, SimConfig, SweepSection};
    pub use crate::error::{SimError, SimResult};
    pub use crate::forces::{
        gravity_acceleration, spring_acceleration, ForceModel, PointMassGravity, SpringModel,
    };
    pub use crate::grid::TimeGrid;
    pub use crate::integrate::{
        integrate, integrate_explicit, integrate_verlet, SchemeKind, Trajectory,
    };
    pub use crate::orbit::{
        circular_orbit_speed, escape_speed, integrate_two_body, ScenarioKind, TwoBodyScenario, G,
        MARS_MASS, MARS_RADIUS,
    };
    pub use crate::oscillator::{
        analytical_oscillator, compare_schemes, SchemeComparison, SchemeReport, Waveform,
    };
    pub use crate::stability::{
        log_spaced, mean_squared_error, stability_sweep, SweepReport, UNIT_OSCILLATOR,
    };
    pub use crate::vector::{StateVector, Vec3};
}

/// Re-export for public API
pub use error::{SimError, SimResult};
