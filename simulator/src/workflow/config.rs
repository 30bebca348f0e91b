use crate::generator::profile::{MagnitudeConfig, PhaseConfig};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use spectralcore::spectrum::GenerateOptions;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub name: Option<String>,
    pub n: usize,
    pub fs: f64,
    pub dc_offset: f64,
    pub spectral_density: bool,
    pub magnitude: MagnitudeConfig,
    pub phase: PhaseConfig,
    /// Record length used for power spectra; defaults to `1 / bin_size`.
    pub duration: Option<f64>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            name: None,
            n: 65536,
            fs: 0.0,
            dc_offset: 0.0,
            spectral_density: true,
            magnitude: MagnitudeConfig::default(),
            phase: PhaseConfig::default(),
            duration: None,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        n: usize,
        fs: f64,
        pink: bool,
        seed: Option<u64>,
        spectral_density: bool,
    ) -> Self {
        let magnitude = if pink {
            MagnitudeConfig::Pink
        } else {
            MagnitudeConfig::default()
        };
        Self {
            n,
            fs,
            spectral_density,
            magnitude,
            phase: PhaseConfig::Random { seed },
            ..Default::default()
        }
    }

    pub fn to_generate_options(&self) -> GenerateOptions {
        GenerateOptions::default()
            .with_len(self.n)
            .with_magnitude(self.magnitude.to_profile())
            .with_phase(self.phase.to_profile())
            .with_sample_rate(self.fs)
            .with_dc_offset(self.dc_offset)
            .with_spectral_density(self.spectral_density)
    }
}
