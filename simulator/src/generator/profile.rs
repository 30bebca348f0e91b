use serde::{Deserialize, Serialize};
use spectralcore::spectrum::Profile;

/// Magnitude shape selectable from a workflow file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MagnitudeConfig {
    Constant { value: f64 },
    Pink,
}

impl Default for MagnitudeConfig {
    fn default() -> Self {
        MagnitudeConfig::Constant { value: 1.0 }
    }
}

impl MagnitudeConfig {
    pub fn to_profile(&self) -> Profile {
        match self {
            MagnitudeConfig::Constant { value } => Profile::constant(*value),
            MagnitudeConfig::Pink => Profile::pink(),
        }
    }
}

/// Phase shape selectable from a workflow file. Radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhaseConfig {
    Constant {
        value: f64,
    },
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl Default for PhaseConfig {
    fn default() -> Self {
        PhaseConfig::Random { seed: None }
    }
}

impl PhaseConfig {
    /// Pins an unseeded random phase to a freshly drawn seed so the run can be replayed.
    pub fn pinned(&self) -> Self {
        match self {
            PhaseConfig::Random { seed: None } => PhaseConfig::Random {
                seed: Some(rand::random()),
            },
            other => other.clone(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        match self {
            PhaseConfig::Random { seed } => *seed,
            PhaseConfig::Constant { .. } => None,
        }
    }

    pub fn to_profile(&self) -> Profile {
        match self {
            PhaseConfig::Constant { value } => Profile::constant(*value),
            PhaseConfig::Random { seed: Some(seed) } => Profile::seeded_random_phase(*seed),
            PhaseConfig::Random { seed: None } => Profile::random_phase(),
        }
    }
}
