/// Descriptive statistics over one tool's runtimes, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeStats {
    pub executions: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub mean: f64,
}

impl RuntimeStats {
    /// `None` for an empty sample. Even-length samples use the mean of the
    /// two middle values as the median.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };
        let mean = sorted.iter().sum::<f64>() / n as f64;

        Some(Self {
            executions: n,
            min: sorted[0],
            max: sorted[n - 1],
            median,
            mean,
        })
    }
}

/// Rounds half-to-even, so 12.5 becomes 12 and 13.5 becomes 14.
pub fn whole_seconds(value: f64) -> i64 {
    value.round_ties_even() as i64
}
