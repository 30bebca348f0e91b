use crate::prelude::ProfileError;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::PI;
use std::fmt;

type GeneratorFn = dyn Fn(usize) -> Result<Vec<f64>, ProfileError>;

/// Magnitude or phase specification over the positive-frequency bins.
///
/// A constant is broadcast to every bin; a generator is called once with the
/// bin count and must return exactly that many values.
pub enum Profile {
    Constant(f64),
    Generator(Box<GeneratorFn>),
}

impl Profile {
    pub fn constant(value: f64) -> Self {
        Profile::Constant(value)
    }

    pub fn from_fn<F>(generator: F) -> Self
    where
        F: Fn(usize) -> Vec<f64> + 'static,
    {
        Profile::Generator(Box::new(move |count| Ok::<_, ProfileError>(generator(count))))
    }

    pub fn try_from_fn<F>(generator: F) -> Self
    where
        F: Fn(usize) -> Result<Vec<f64>, ProfileError> + 'static,
    {
        Profile::Generator(Box::new(generator))
    }

    /// `1/sqrt(k+1)` amplitude shaping.
    pub fn pink() -> Self {
        Profile::from_fn(pink)
    }

    /// Uniform phase over `[0, 2π)` drawn from the thread-local generator.
    pub fn random_phase() -> Self {
        Profile::from_fn(random_phase)
    }

    /// Uniform phase over `[0, 2π)`, reproducible for a given seed.
    pub fn seeded_random_phase(seed: u64) -> Self {
        Profile::from_fn(move |count| seeded_random_phase(count, seed))
    }

    pub fn resolve(&self, count: usize) -> Result<Vec<f64>, ProfileError> {
        match self {
            Profile::Constant(value) => Ok(vec![*value; count]),
            Profile::Generator(generator) => {
                let values = generator(count)?;
                if values.len() != count {
                    return Err(ProfileError::LengthMismatch {
                        expected: count,
                        actual: values.len(),
                    });
                }
                Ok(values)
            }
        }
    }
}

impl From<f64> for Profile {
    fn from(value: f64) -> Self {
        Profile::Constant(value)
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Profile::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

pub fn pink(count: usize) -> Vec<f64> {
    (0..count).map(|k| 1.0 / ((k + 1) as f64).sqrt()).collect()
}

pub fn random_phase(count: usize) -> Vec<f64> {
    uniform_phase(&mut rand::thread_rng(), count)
}

pub fn seeded_random_phase(count: usize, seed: u64) -> Vec<f64> {
    uniform_phase(&mut StdRng::seed_from_u64(seed), count)
}

fn uniform_phase<R: Rng>(rng: &mut R, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(0.0..2.0 * PI)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pink_follows_inverse_square_root() {
        let expected = [
            1.0,
            1.0 / 2f64.sqrt(),
            1.0 / 3f64.sqrt(),
            0.5,
            1.0 / 5f64.sqrt(),
        ];
        let values = pink(5);
        assert_eq!(values.len(), 5);
        for (value, want) in values.iter().zip(expected.iter()) {
            assert!((value - want).abs() < 1e-15);
        }
    }

    #[test]
    fn random_phase_stays_in_range() {
        let values = random_phase(1024);
        assert_eq!(values.len(), 1024);
        assert!(values.iter().all(|&v| (0.0..2.0 * PI).contains(&v)));
    }

    #[test]
    fn seeded_phase_is_reproducible() {
        assert_eq!(seeded_random_phase(16, 7), seeded_random_phase(16, 7));
        assert_ne!(seeded_random_phase(16, 7), seeded_random_phase(16, 8));
    }

    #[test]
    fn constant_profile_broadcasts() {
        assert_eq!(Profile::constant(0.25).resolve(3).unwrap(), vec![0.25; 3]);
        assert!(Profile::from(1.0).resolve(0).unwrap().is_empty());
    }

    #[test]
    fn generator_with_wrong_length_is_rejected() {
        let profile = Profile::from_fn(|count| vec![1.0; count + 1]);
        assert_eq!(
            profile.resolve(4).unwrap_err(),
            ProfileError::LengthMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn generator_failure_is_propagated() {
        let profile = Profile::try_from_fn(|_| Err(ProfileError::Failed("no table".into())));
        assert_eq!(
            profile.resolve(2).unwrap_err(),
            ProfileError::Failed("no table".into())
        );
    }
}
