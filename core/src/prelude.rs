use std::fmt;

/// Which profile of a generated spectrum a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRole {
    Magnitude,
    Phase,
}

impl fmt::Display for ProfileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileRole::Magnitude => f.write_str("magnitude"),
            ProfileRole::Phase => f.write_str("phase"),
        }
    }
}

/// Failure raised while resolving a magnitude or phase profile.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("profile produced {actual} values, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("profile generator failed: {0}")]
    Failed(String),
}

/// Common error type for spectrum construction and conversion.
#[derive(thiserror::Error, Debug)]
pub enum SpectrumError {
    #[error("{role} must be float or single-argument callable")]
    InvalidArgument {
        role: ProfileRole,
        #[source]
        source: ProfileError,
    },
    #[error("spectrum length must be even and at least 2, got {0}")]
    InvalidLength(usize),
    #[error("frequency axis has {frequencies} bins but amplitude has {amplitude}")]
    LengthMismatch { frequencies: usize, amplitude: usize },
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),
}

pub type SpectrumResult<T> = Result<T, SpectrumError>;
