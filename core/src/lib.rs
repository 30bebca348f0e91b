//! Synthetic spectrum generation for test and calibration signals.
//!
//! [`generate_spectrum`] builds a conjugate-symmetric [`Spectrum`] from a
//! magnitude and a phase [`Profile`]; the spectrum converts to a real-valued
//! [`Timeseries`] and back through the FFT helpers in [`math`].

pub mod analyzer;
pub mod math;
pub mod prelude;
pub mod spectrum;
pub mod telemetry;
pub mod timeseries;

pub use analyzer::SpectrumAnalyzer;
pub use prelude::{ProfileError, ProfileRole, SpectrumError, SpectrumResult};
pub use spectrum::{generate_spectrum, GenerateOptions, Profile, Spectrum};
pub use timeseries::Timeseries;
