//! Time-domain counterpart of [`Spectrum`](crate::spectrum::Spectrum).

use crate::math::fft::FftHelper;
use crate::math::stats::StatsHelper;
use crate::prelude::{SpectrumError, SpectrumResult};
use crate::spectrum::Spectrum;
use num_complex::Complex64;
use serde::Serialize;

/// Uniformly sampled signal with a complex amplitude per sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeseries {
    time: Vec<f64>,
    amplitude: Vec<Complex64>,
    sample_rate: f64,
    name: String,
}

impl Timeseries {
    pub fn new(time: Vec<f64>, amplitude: Vec<Complex64>, sample_rate: f64) -> SpectrumResult<Self> {
        if time.len() != amplitude.len() {
            return Err(SpectrumError::LengthMismatch {
                frequencies: time.len(),
                amplitude: amplitude.len(),
            });
        }
        if sample_rate == 0.0 {
            return Err(SpectrumError::DivisionByZero("time series sample rate is zero"));
        }
        Ok(Self {
            time,
            amplitude,
            sample_rate,
            name: String::new(),
        })
    }

    /// Builds a real-valued series starting at `t = 0`.
    pub fn from_real(samples: &[f64], sample_rate: f64) -> SpectrumResult<Self> {
        let time = (0..samples.len())
            .map(|k| k as f64 / sample_rate)
            .collect();
        let amplitude = samples.iter().map(|&v| Complex64::new(v, 0.0)).collect();
        Self::new(time, amplitude, sample_rate)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn amplitude(&self) -> &[Complex64] {
        &self.amplitude
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn num_samples(&self) -> usize {
        self.amplitude.len()
    }

    pub fn duration(&self) -> f64 {
        self.num_samples() as f64 / self.sample_rate
    }

    pub fn real(&self) -> Vec<f64> {
        self.amplitude.iter().map(|v| v.re).collect()
    }

    /// Largest imaginary magnitude; near zero for signals built from Hermitian spectra.
    pub fn max_imaginary(&self) -> f64 {
        self.amplitude
            .iter()
            .map(|v| v.im.abs())
            .fold(0.0, f64::max)
    }

    pub fn rms(&self) -> f64 {
        StatsHelper::rms(&self.real())
    }

    /// Forward transform using the same scaling as [`Spectrum::to_timeseries`],
    /// so the two conversions undo each other.
    pub fn to_spectrum(&self) -> SpectrumResult<Spectrum> {
        let n = self.num_samples();
        let bin_size = 1.0 / self.sample_rate;
        let mut amplitude = FftHelper::new(n).forward(&self.amplitude);
        let scale = 1.0 / (n as f64 * bin_size);
        amplitude.iter_mut().for_each(|v| *v *= scale);

        let frequencies = (0..n).map(|k| k as f64 * bin_size).collect();
        Spectrum::new(frequencies, amplitude, bin_size).map(|s| s.with_name(self.name.clone()))
    }
}
