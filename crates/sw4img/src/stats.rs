//! Summary statistics over patch samples.

/// Minimum, maximum, population standard deviation and RMS of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub min: f64,
    pub max: f64,
    pub std: f64,
    pub rms: f64,
}

impl Default for Statistics {
    fn default() -> Self {
        Statistics {
            min: 0.0,
            max: 0.0,
            std: 0.0,
            rms: 0.0,
        }
    }
}

impl Statistics {
    /// All four values NaN; the result for an empty sample set.
    pub const UNDEFINED: Statistics = Statistics {
        min: f64::NAN,
        max: f64::NAN,
        std: f64::NAN,
        rms: f64::NAN,
    };

    /// Compute statistics in one pass.
    ///
    /// The standard deviation divides by N (population), and
    /// `rms = sqrt(mean(x^2))`. A NaN sample makes `min` and `max` NaN as well
    /// as the moments.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut saw_nan = false;
        // Welford running mean and sum of squared deviations.
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut sum_sq = 0.0;

        for x in samples {
            count += 1;
            if x.is_nan() {
                saw_nan = true;
            } else {
                if x < min {
                    min = x;
                }
                if x > max {
                    max = x;
                }
            }
            let delta = x - mean;
            mean += delta / count as f64;
            m2 += delta * (x - mean);
            sum_sq += x * x;
        }

        if count == 0 {
            return Statistics::UNDEFINED;
        }
        if saw_nan {
            min = f64::NAN;
            max = f64::NAN;
        }
        let n = count as f64;
        Statistics {
            min,
            max,
            std: libm::sqrt(m2 / n),
            rms: libm::sqrt(sum_sq / n),
        }
    }
}
