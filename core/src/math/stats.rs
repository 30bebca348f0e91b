use num_complex::Complex64;

pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// Squared magnitude `conj(z) * z` of each value.
    pub fn power(values: &[Complex64]) -> Vec<f64> {
        values.iter().map(|v| v.norm_sqr()).collect()
    }

    /// Index and value of the largest entry, first occurrence on ties.
    pub fn peak(values: &[f64]) -> Option<(usize, f64)> {
        values
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (idx, value)| match best {
                Some((_, current)) if current >= value => best,
                _ => Some((idx, value)),
            })
    }
}
