use super::profile::Profile;
use super::Spectrum;
use crate::prelude::{ProfileRole, SpectrumError, SpectrumResult};
use log::debug;
use num_complex::Complex64;

/// Inputs for [`generate_spectrum`].
#[derive(Debug)]
pub struct GenerateOptions {
    /// Total bin count; must be even and at least 2.
    pub n: usize,
    pub magnitude: Profile,
    /// Phase in radians.
    pub phase: Profile,
    /// Sample rate. Zero means unspecified and yields a resolution of 1.0.
    pub fs: f64,
    pub dc_offset: f64,
    /// Divide magnitudes and DC offset by the frequency resolution.
    pub spectral_density: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            n: 65536,
            magnitude: Profile::Constant(1.0),
            phase: Profile::random_phase(),
            fs: 0.0,
            dc_offset: 0.0,
            spectral_density: true,
        }
    }
}

impl GenerateOptions {
    pub fn with_len(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_magnitude(mut self, magnitude: impl Into<Profile>) -> Self {
        self.magnitude = magnitude.into();
        self
    }

    pub fn with_phase(mut self, phase: impl Into<Profile>) -> Self {
        self.phase = phase.into();
        self
    }

    pub fn with_sample_rate(mut self, fs: f64) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_dc_offset(mut self, dc_offset: f64) -> Self {
        self.dc_offset = dc_offset;
        self
    }

    pub fn with_spectral_density(mut self, spectral_density: bool) -> Self {
        self.spectral_density = spectral_density;
        self
    }

    /// Frequency resolution `fs / n`, or 1.0 when no sample rate is given.
    pub fn resolution(&self) -> f64 {
        if self.fs == 0.0 {
            1.0
        } else {
            self.fs / self.n as f64
        }
    }
}

/// Synthesizes a Hermitian-symmetric spectrum whose inverse transform is real.
///
/// The positive bins `1..n/2` carry `magnitude * exp(i * phase)`, bin `n-k`
/// carries the conjugate of bin `k`, DC carries the offset with zero phase and
/// the Nyquist bin is zero.
pub fn generate_spectrum(options: GenerateOptions) -> SpectrumResult<Spectrum> {
    let n = options.n;
    if n < 2 || n % 2 != 0 {
        return Err(SpectrumError::InvalidLength(n));
    }
    let f_res = options.resolution();
    if f_res == 0.0 {
        return Err(SpectrumError::DivisionByZero("frequency resolution is zero"));
    }

    let half = n / 2;
    let count = half - 1;
    let mut magnitude = options
        .magnitude
        .resolve(count)
        .map_err(|source| SpectrumError::InvalidArgument {
            role: ProfileRole::Magnitude,
            source,
        })?;
    let theta = options
        .phase
        .resolve(count)
        .map_err(|source| SpectrumError::InvalidArgument {
            role: ProfileRole::Phase,
            source,
        })?;

    let mut dc_offset = options.dc_offset;
    if options.spectral_density {
        magnitude.iter_mut().for_each(|a| *a /= f_res);
        dc_offset /= f_res;
    }

    let positive: Vec<Complex64> = magnitude
        .iter()
        .zip(theta.iter())
        .map(|(&a, &phase)| Complex64::from_polar(a, phase))
        .collect();

    let mut amplitude = Vec::with_capacity(n);
    amplitude.push(Complex64::new(dc_offset, 0.0));
    amplitude.extend_from_slice(&positive);
    amplitude.push(Complex64::new(0.0, 0.0));
    amplitude.extend(positive.iter().rev().map(|v| v.conj()));

    let frequencies = (0..n).map(|k| k as f64 * f_res).collect();

    debug!(
        "generated spectrum n={} f_res={} density={}",
        n, f_res, options.spectral_density
    );
    Spectrum::new(frequencies, amplitude, f_res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::ProfileError;
    use crate::spectrum::profile::pink;
    use std::error::Error;

    const TOL: f64 = 1e-9;

    fn close(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < TOL
    }

    #[test]
    fn generated_spectrum_is_hermitian() {
        for &n in &[2usize, 4, 8, 64, 1000] {
            let spectrum = generate_spectrum(
                GenerateOptions::default()
                    .with_len(n)
                    .with_magnitude(Profile::pink())
                    .with_phase(Profile::seeded_random_phase(3)),
            )
            .unwrap();

            let amplitude = spectrum.amplitude();
            assert_eq!(amplitude.len(), n);
            for k in 1..n / 2 {
                assert!(close(amplitude[n - k], amplitude[k].conj()));
            }
            assert_eq!(spectrum.nyquist(), Some(Complex64::new(0.0, 0.0)));
            assert!(spectrum.is_hermitian(TOL));
        }
    }

    #[test]
    fn content_halves_have_expected_length() {
        let spectrum = generate_spectrum(GenerateOptions::default().with_len(16)).unwrap();
        assert_eq!(spectrum.positive_content().len(), 7);
        assert_eq!(spectrum.negative_content().len(), 7);
    }

    #[test]
    fn zero_profile_yields_zero_signal() {
        let spectrum = generate_spectrum(
            GenerateOptions::default()
                .with_len(8)
                .with_magnitude(0.0)
                .with_phase(0.0)
                .with_dc_offset(0.0),
        )
        .unwrap();

        let ts = spectrum.to_timeseries().unwrap();
        assert_eq!(ts.num_samples(), 8);
        assert!(ts.amplitude().iter().all(|v| v.norm() == 0.0));
    }

    #[test]
    fn constant_magnitude_without_density_is_exact() {
        let spectrum = generate_spectrum(
            GenerateOptions::default()
                .with_len(32)
                .with_magnitude(2.5)
                .with_phase(Profile::seeded_random_phase(11))
                .with_sample_rate(1000.0)
                .with_spectral_density(false),
        )
        .unwrap();

        for value in spectrum.positive_content() {
            assert!((value.norm() - 2.5).abs() < 1e-12);
        }
    }

    #[test]
    fn phase_profile_sets_bin_angle() {
        let spectrum = generate_spectrum(
            GenerateOptions::default()
                .with_len(8)
                .with_magnitude(1.0)
                .with_phase(Profile::from_fn(|count| vec![0.5; count])),
        )
        .unwrap();

        for value in spectrum.positive_content() {
            assert!((value.arg() - 0.5).abs() < 1e-12);
        }
        for value in spectrum.negative_content() {
            assert!((value.arg() + 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn density_divides_by_resolution() {
        let spectrum = generate_spectrum(
            GenerateOptions::default()
                .with_len(8)
                .with_magnitude(1.0)
                .with_phase(0.0)
                .with_sample_rate(16.0)
                .with_dc_offset(3.0),
        )
        .unwrap();

        assert_eq!(spectrum.bin_size(), 2.0);
        assert_eq!(spectrum.dc_offset(), Some(Complex64::new(1.5, 0.0)));
        assert!(close(spectrum.positive_content()[0], Complex64::new(0.5, 0.0)));
        assert_eq!(
            spectrum.frequencies(),
            &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0]
        );
    }

    #[test]
    fn unspecified_sample_rate_uses_unit_resolution() {
        let options = GenerateOptions::default().with_len(8);
        assert_eq!(options.resolution(), 1.0);

        let spectrum = generate_spectrum(
            GenerateOptions::default()
                .with_len(8)
                .with_magnitude(Profile::pink())
                .with_phase(0.0),
        )
        .unwrap();
        let magnitudes: Vec<f64> = spectrum.positive_content().iter().map(|v| v.norm()).collect();
        for (value, want) in magnitudes.iter().zip(pink(3).iter()) {
            assert!((value - want).abs() < 1e-12);
        }
    }

    #[test]
    fn round_trip_reproduces_amplitude() {
        let original = generate_spectrum(
            GenerateOptions::default()
                .with_len(64)
                .with_magnitude(Profile::pink())
                .with_phase(Profile::seeded_random_phase(42))
                .with_sample_rate(640.0)
                .with_dc_offset(0.75)
                .with_spectral_density(false),
        )
        .unwrap();

        let ts = original.to_timeseries().unwrap();
        assert!(ts.max_imaginary() < TOL);

        let restored = ts.to_spectrum().unwrap();
        assert_eq!(restored.num_samples(), original.num_samples());
        for (a, b) in original.amplitude().iter().zip(restored.amplitude()) {
            assert!(close(*a, *b));
        }
    }

    #[test]
    fn failing_magnitude_generator_keeps_message_and_cause() {
        let err = generate_spectrum(GenerateOptions::default().with_len(8).with_magnitude(
            Profile::try_from_fn(|_| Err(ProfileError::Failed("expects two arguments".into()))),
        ))
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "magnitude must be float or single-argument callable"
        );
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("expects two arguments"));
    }

    #[test]
    fn short_phase_generator_is_invalid_argument() {
        let err = generate_spectrum(
            GenerateOptions::default()
                .with_len(8)
                .with_phase(Profile::from_fn(|_| vec![0.0])),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SpectrumError::InvalidArgument {
                role: ProfileRole::Phase,
                source: ProfileError::LengthMismatch {
                    expected: 3,
                    actual: 1
                },
            }
        ));
        assert_eq!(err.to_string(), "phase must be float or single-argument callable");
    }

    #[test]
    fn odd_or_tiny_lengths_are_rejected() {
        for &n in &[0usize, 1, 7] {
            let err = generate_spectrum(GenerateOptions::default().with_len(n)).unwrap_err();
            assert!(matches!(err, SpectrumError::InvalidLength(len) if len == n));
        }
    }
}
