//! Frequency-domain container and the synthetic spectrum generator.
//!
//! Bins are stored in FFT order: index 0 is DC, indices `1..n/2` hold the
//! positive frequencies, `n/2` is Nyquist and the remainder holds the wrapped
//! negative frequencies.

pub mod generate;
pub mod profile;

pub use generate::{generate_spectrum, GenerateOptions};
pub use profile::{pink, random_phase, seeded_random_phase, Profile};

use crate::math::fft::FftHelper;
use crate::math::stats::StatsHelper;
use crate::prelude::{SpectrumError, SpectrumResult};
use crate::timeseries::Timeseries;
use num_complex::Complex64;
use serde::Serialize;

/// One discrete frequency-domain sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub frequency: f64,
    pub amplitude: Complex64,
}

/// Frequency axis paired with a complex amplitude axis.
///
/// Hermitian symmetry is only guaranteed for spectra built by
/// [`generate_spectrum`]; spectra built through [`Spectrum::new`] carry
/// whatever the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    amplitude: Vec<Complex64>,
    bin_size: f64,
    name: String,
}

impl Spectrum {
    pub fn new(
        frequencies: Vec<f64>,
        amplitude: Vec<Complex64>,
        bin_size: f64,
    ) -> SpectrumResult<Self> {
        if frequencies.len() != amplitude.len() {
            return Err(SpectrumError::LengthMismatch {
                frequencies: frequencies.len(),
                amplitude: amplitude.len(),
            });
        }
        Ok(Self {
            frequencies,
            amplitude,
            bin_size,
            name: String::new(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bin_size(&self) -> f64 {
        self.bin_size
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn amplitude(&self) -> &[Complex64] {
        &self.amplitude
    }

    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.frequencies
            .iter()
            .zip(self.amplitude.iter())
            .map(|(&frequency, &amplitude)| Bin {
                frequency,
                amplitude,
            })
    }

    pub fn num_samples(&self) -> usize {
        self.amplitude.len()
    }

    /// Amplitude at index `n/2`. Only meaningful for even `n`.
    pub fn nyquist(&self) -> Option<Complex64> {
        self.amplitude.get(self.num_samples() / 2).copied()
    }

    pub fn dc_offset(&self) -> Option<Complex64> {
        self.amplitude.first().copied()
    }

    /// Strictly positive frequencies, excluding DC and Nyquist.
    pub fn positive_content(&self) -> &[Complex64] {
        let half = self.num_samples() / 2;
        self.amplitude.get(1..half).unwrap_or(&[])
    }

    /// Wrapped negative frequencies after the Nyquist bin.
    pub fn negative_content(&self) -> &[Complex64] {
        let half = self.num_samples() / 2;
        self.amplitude.get(half + 1..).unwrap_or(&[])
    }

    /// `(2 / duration) * |X_k|^2` over the positive content.
    pub fn single_sided_power_spectrum(&self, duration: f64) -> SpectrumResult<Vec<f64>> {
        let scale = power_scale(2.0, duration)?;
        Ok(StatsHelper::power(self.positive_content())
            .into_iter()
            .map(|p| p * scale)
            .collect())
    }

    /// `(1 / duration) * |X_k|^2` over every bin.
    pub fn double_sided_power_spectrum(&self, duration: f64) -> SpectrumResult<Vec<f64>> {
        let scale = power_scale(1.0, duration)?;
        Ok(StatsHelper::power(&self.amplitude)
            .into_iter()
            .map(|p| p * scale)
            .collect())
    }

    /// Checks `X[n-k] == conj(X[k])` for `k in 1..n/2` and a real Nyquist bin.
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        let n = self.num_samples();
        if n % 2 != 0 {
            return false;
        }
        let mirrored = (1..n / 2)
            .all(|k| (self.amplitude[n - k] - self.amplitude[k].conj()).norm() <= tolerance);
        let real_nyquist = self
            .nyquist()
            .map_or(true, |value| value.im.abs() <= tolerance);
        mirrored && real_nyquist
    }

    /// Inverse transform of `amplitude * n * bin_size`, sampled at `1 / bin_size`.
    pub fn to_timeseries(&self) -> SpectrumResult<Timeseries> {
        if self.bin_size == 0.0 {
            return Err(SpectrumError::DivisionByZero("spectrum bin size is zero"));
        }
        let n = self.num_samples();
        let scale = n as f64 * self.bin_size;
        let scaled: Vec<Complex64> = self.amplitude.iter().map(|&v| v * scale).collect();
        let amplitude = FftHelper::new(n).inverse(&scaled);

        let sample_rate = 1.0 / self.bin_size;
        let time = (0..n).map(|k| k as f64 / sample_rate).collect();
        Timeseries::new(time, amplitude, sample_rate).map(|ts| ts.with_name(self.name.clone()))
    }
}

fn power_scale(numerator: f64, duration: f64) -> SpectrumResult<f64> {
    if duration == 0.0 {
        return Err(SpectrumError::DivisionByZero("power spectrum duration is zero"));
    }
    Ok(numerator / duration)
}
