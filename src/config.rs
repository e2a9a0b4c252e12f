//! Simulation configuration.
//!
//! The host's menu selections are captured once as an immutable
//! [`SimulationConfig`] and passed explicitly to grid creation and stepping.
//! Configurations can be built in code, read from TOML, or assembled from the
//! integer codes used by the C ABI.

use serde::Deserialize;

use crate::automaton::grid::StartPattern;
use crate::automaton::neighborhood::NeighborhoodKind;
use crate::error::{AutomatonError, Result};

/// Grid density, which fixes the side length of the square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Density {
    Low,
    Medium,
    High,
}

impl Density {
    /// Side length of the grid for this density.
    pub fn dimension(self) -> i16 {
        match self {
            Density::Low => 10,
            Density::Medium => 50,
            Density::High => 55,
        }
    }
}

impl TryFrom<u8> for Density {
    type Error = AutomatonError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Density::Low),
            1 => Ok(Density::Medium),
            2 => Ok(Density::High),
            _ => Err(AutomatonError::InvalidConfig("unknown density code")),
        }
    }
}

impl TryFrom<u8> for StartPattern {
    type Error = AutomatonError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(StartPattern::Clustered),
            1 => Ok(StartPattern::Random),
            _ => Err(AutomatonError::InvalidConfig("unknown start pattern code")),
        }
    }
}

impl TryFrom<u8> for NeighborhoodKind {
    type Error = AutomatonError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(NeighborhoodKind::Moore),
            1 => Ok(NeighborhoodKind::VonNeumann),
            2 => Ok(NeighborhoodKind::LargeMoore),
            3 => Ok(NeighborhoodKind::RandomVonNeumann),
            _ => Err(AutomatonError::InvalidConfig("unknown neighborhood code")),
        }
    }
}

fn default_threads() -> u8 {
    1
}

/// Immutable settings for one simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    pub density: Density,
    pub start_pattern: StartPattern,
    pub neighborhood: NeighborhoodKind,
    /// Seed for every random draw of the run. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Worker threads for a step; 0 and 1 both mean sequential.
    #[serde(default = "default_threads")]
    pub threads: u8,
}

impl SimulationConfig {
    pub fn new(
        density: Density,
        start_pattern: StartPattern,
        neighborhood: NeighborhoodKind,
    ) -> Self {
        SimulationConfig {
            density,
            start_pattern,
            neighborhood,
            seed: None,
            threads: default_threads(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_threads(mut self, threads: u8) -> Self {
        self.threads = threads;
        self
    }

    /// Build a configuration from C ABI integer codes.
    pub fn from_codes(density: u8, start_pattern: u8, neighborhood: u8) -> Result<Self> {
        Ok(SimulationConfig::new(
            Density::try_from(density)?,
            StartPattern::try_from(start_pattern)?,
            NeighborhoodKind::try_from(neighborhood)?,
        ))
    }

    /// Parse a configuration document such as:
    ///
    /// ```toml
    /// density = "Medium"
    /// start_pattern = "Random"
    /// neighborhood = "VonNeumann"
    /// seed = 42
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn dimension(&self) -> i16 {
        self.density.dimension()
    }
}
