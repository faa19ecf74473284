//! Configuration with YAML schema and validation.
//!
//! Type-safe sections for the oscillator comparison, the stability sweep,
//! and the two-body scenario, loaded from YAML and checked twice: schema
//! validation via `validator`, then semantic validation of the numeric
//! ranges the schemes require. Defaults reproduce the canonical unit
//! oscillator and the circular Mars orbit.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{SimError, SimResult};
use crate::integrate::SchemeKind;
use crate::orbit::TwoBodyScenario;
use crate::stability::log_spaced;

/// Top-level configuration for a comparison run.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Spring-oscillator comparison parameters.
    #[validate(nested)]
    #[serde(default)]
    pub oscillator: OscillatorSection,

    /// Step-size sweep parameters.
    #[validate(nested)]
    #[serde(default)]
    pub sweep: SweepSection,

    /// Two-body scenario parameters.
    #[serde(default)]
    pub orbit: OrbitSection,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            oscillator: OscillatorSection::default(),
            sweep: SweepSection::default(),
            orbit: OrbitSection::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SimResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Validate numeric constraints beyond what the schema expresses.
    fn validate_semantic(&self) -> SimResult<()> {
        let positives = [
            ("oscillator.mass", self.oscillator.mass),
            ("oscillator.spring_constant", self.oscillator.spring_constant),
            ("oscillator.t_max", self.oscillator.t_max),
            ("oscillator.dt", self.oscillator.dt),
            ("sweep.t_max", self.sweep.t_max),
            ("orbit.t_max", self.orbit.t_max),
            ("orbit.dt", self.orbit.dt),
            ("orbit.scenario.grav_constant", self.orbit.scenario.grav_constant),
            ("orbit.scenario.central_mass", self.orbit.scenario.central_mass),
            ("orbit.scenario.mass", self.orbit.scenario.mass),
        ];
        for (name, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        if self.sweep.min_exponent >= self.sweep.max_exponent {
            return Err(SimError::config(format!(
                "sweep exponents must satisfy min < max, got [{}, {}]",
                self.sweep.min_exponent, self.sweep.max_exponent
            )));
        }

        Ok(())
    }
}

/// Spring-oscillator comparison parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields, default)]
pub struct OscillatorSection {
    /// Oscillating mass (kg).
    pub mass: f64,
    /// Spring constant (N/m).
    pub spring_constant: f64,
    /// Initial position (m).
    pub x0: f64,
    /// Initial velocity (m/s).
    pub v0: f64,
    /// Total duration (s).
    pub t_max: f64,
    /// Step size (s).
    pub dt: f64,
}

impl Default for OscillatorSection {
    fn default() -> Self {
        // Unit oscillator released from the origin with unit velocity.
        Self {
            mass: 1.0,
            spring_constant: 1.0,
            x0: 0.0,
            v0: 1.0,
            t_max: 100.0,
            dt: 0.01,
        }
    }
}

/// Step-size sweep parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields, default)]
pub struct SweepSection {
    /// Total duration per sweep point (s).
    pub t_max: f64,
    /// Smallest step size as a base-10 exponent.
    pub min_exponent: f64,
    /// Largest step size as a base-10 exponent.
    pub max_exponent: f64,
    /// Number of log-spaced step sizes.
    #[validate(range(min = 1))]
    pub samples: usize,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            t_max: 1000.0,
            min_exponent: -4.0,
            max_exponent: 2.0,
            samples: 50,
        }
    }
}

impl SweepSection {
    /// Materialize the log-spaced step-size ladder.
    #[must_use]
    pub fn dt_values(&self) -> Vec<f64> {
        log_spaced(self.min_exponent, self.max_exponent, self.samples)
    }
}

/// Two-body scenario parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OrbitSection {
    /// Scenario preset.
    pub scenario: TwoBodyScenario,
    /// Integration scheme.
    pub scheme: SchemeKind,
    /// Total duration (s).
    pub t_max: f64,
    /// Step size (s).
    pub dt: f64,
}

impl Default for OrbitSection {
    fn default() -> Self {
        // Roughly one circular orbit at 1.2 Mars radii.
        Self {
            scenario: TwoBodyScenario::mars_circular(),
            scheme: SchemeKind::Verlet,
            t_max: 8000.0,
            dt: 0.1,
        }
    }
}
