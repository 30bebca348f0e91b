//! Presentation settings and plot-ready views of a spectrum.
//!
//! Nothing here renders; the analyzer prepares series and summaries for an
//! external plotting front end.

use crate::math::stats::StatsHelper;
use crate::prelude::SpectrumResult;
use crate::spectrum::Spectrum;
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};

/// Power floor used when a bin carries no energy.
pub const MIN_POWER_DB: f64 = -300.0;

/// Annotation box styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextboxStyle {
    pub boxstyle: String,
    pub facecolor: String,
    pub alpha: f64,
}

impl Default for TextboxStyle {
    fn default() -> Self {
        Self {
            boxstyle: "round".into(),
            facecolor: "white".into(),
            alpha: 0.75,
        }
    }
}

/// Plot styling handed to whatever front end draws the analyzer output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub context: String,
    pub theme: String,
    pub textbox: TextboxStyle,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            context: "paper".into(),
            theme: "darkgrid".into(),
            textbox: TextboxStyle::default(),
        }
    }
}

/// Single-sided power density on the positive frequency axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerSeries {
    pub frequencies: Vec<f64>,
    pub power_db: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerReport {
    pub name: String,
    pub num_samples: usize,
    pub bin_size: f64,
    pub duration: f64,
    pub dc_offset: f64,
    pub nyquist_magnitude: f64,
    pub total_power: f64,
    pub peak_frequency: Option<f64>,
    pub peak_power: Option<f64>,
}

pub struct SpectrumAnalyzer {
    style: PlotStyle,
    logger: LogManager,
}

impl SpectrumAnalyzer {
    pub fn new(style: PlotStyle) -> Self {
        Self {
            style,
            logger: LogManager::new("analyzer"),
        }
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    pub fn power_density_db(
        &self,
        spectrum: &Spectrum,
        duration: f64,
    ) -> SpectrumResult<PowerSeries> {
        let power = spectrum.single_sided_power_spectrum(duration)?;
        let half = spectrum.num_samples() / 2;
        let frequencies = spectrum
            .frequencies()
            .get(1..half)
            .unwrap_or(&[])
            .to_vec();
        let power_db = power.into_iter().map(to_db).collect();
        Ok(PowerSeries {
            frequencies,
            power_db,
        })
    }

    pub fn summarize(&self, spectrum: &Spectrum, duration: f64) -> SpectrumResult<AnalyzerReport> {
        let power = spectrum.single_sided_power_spectrum(duration)?;
        let total_power = power.iter().sum::<f64>() * spectrum.bin_size();
        let peak = StatsHelper::peak(&power);
        // Peak index is relative to the positive content, which starts at bin 1.
        let peak_frequency = peak.and_then(|(idx, _)| spectrum.frequencies().get(idx + 1).copied());

        let report = AnalyzerReport {
            name: spectrum.name().to_string(),
            num_samples: spectrum.num_samples(),
            bin_size: spectrum.bin_size(),
            duration,
            dc_offset: spectrum.dc_offset().map_or(0.0, |v| v.re),
            nyquist_magnitude: spectrum.nyquist().map_or(0.0, |v| v.norm()),
            total_power,
            peak_frequency,
            peak_power: peak.map(|(_, p)| p),
        };

        self.logger.record(&format!(
            "spectrum bins={} total_power={:.6e} peak={:?}",
            report.num_samples, report.total_power, report.peak_frequency
        ));
        Ok(report)
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new(PlotStyle::default())
    }
}

fn to_db(power: f64) -> f64 {
    if power > 0.0 {
        (10.0 * power.log10()).max(MIN_POWER_DB)
    } else {
        MIN_POWER_DB
    }
}
