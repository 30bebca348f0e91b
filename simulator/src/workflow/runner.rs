use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use serde::Serialize;
use spectralcore::analyzer::{AnalyzerReport, PowerSeries, SpectrumAnalyzer};
use spectralcore::spectrum::generate_spectrum;
use spectralcore::telemetry::LogManager;

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowResult {
    pub summary: AnalyzerReport,
    pub phase_seed: Option<u64>,
    pub sample_rate: f64,
    pub time_rms: f64,
    pub max_imaginary: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_density: Option<PowerSeries>,
}

pub struct Runner {
    config: WorkflowConfig,
    analyzer: SpectrumAnalyzer,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            analyzer: SpectrumAnalyzer::default(),
            logger: LogManager::new("runner"),
        }
    }

    pub fn execute(&self, include_psd: bool) -> anyhow::Result<WorkflowResult> {
        let mut config = self.config.clone();
        config.phase = config.phase.pinned();

        let mut spectrum = generate_spectrum(config.to_generate_options())
            .with_context(|| format!("generating spectrum of {} bins", config.n))?;
        if let Some(name) = &config.name {
            spectrum = spectrum.with_name(name.clone());
        }
        self.logger.detail(&format!(
            "generated {} bins at {} Hz/bin",
            spectrum.num_samples(),
            spectrum.bin_size()
        ));

        let timeseries = spectrum
            .to_timeseries()
            .context("converting spectrum to time series")?;

        let duration = config.duration.unwrap_or(1.0 / spectrum.bin_size());
        let summary = self
            .analyzer
            .summarize(&spectrum, duration)
            .context("summarizing spectrum")?;
        let power_density = if include_psd {
            Some(
                self.analyzer
                    .power_density_db(&spectrum, duration)
                    .context("computing power density")?,
            )
        } else {
            None
        };

        Ok(WorkflowResult {
            summary,
            phase_seed: config.phase.seed(),
            sample_rate: timeseries.sample_rate(),
            time_rms: timeseries.rms(),
            max_imaginary: timeseries.max_imaginary(),
            power_density,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::PhaseConfig;

    #[test]
    fn runner_executes_workflow() {
        let cfg = WorkflowConfig::from_args(64, 0.0, true, Some(1), true);
        let result = Runner::new(cfg).execute(true).unwrap();
        assert_eq!(result.summary.num_samples, 64);
        assert_eq!(result.phase_seed, Some(1));
        assert!(result.max_imaginary < 1e-9);
        assert_eq!(result.power_density.map(|p| p.power_db.len()), Some(31));
    }

    #[test]
    fn runner_pins_unseeded_phase() {
        let cfg = WorkflowConfig {
            n: 16,
            ..Default::default()
        };
        let result = Runner::new(cfg).execute(false).unwrap();
        assert!(result.phase_seed.is_some());
        assert!(result.power_density.is_none());
    }

    #[test]
    fn constant_phase_has_no_seed() {
        let cfg = WorkflowConfig {
            n: 8,
            name: Some("flat".into()),
            phase: PhaseConfig::Constant { value: 0.0 },
            duration: Some(2.0),
            ..Default::default()
        };
        let result = Runner::new(cfg).execute(false).unwrap();
        assert_eq!(result.phase_seed, None);
        assert_eq!(result.summary.name, "flat");
        assert_eq!(result.summary.duration, 2.0);
    }

    #[test]
    fn invalid_length_is_reported_with_context() {
        let cfg = WorkflowConfig {
            n: 7,
            ..Default::default()
        };
        let err = Runner::new(cfg).execute(false).unwrap_err();
        assert!(err.to_string().contains("generating spectrum of 7 bins"));
    }
}
