use crate::sampler::Sample;

/// Reduction of one run's sample sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStats {
    /// Running maximum of resident memory over the run, in bytes.
    pub peak_memory_bytes: u64,

    /// Arithmetic mean of the CPU readings; 0.0 when no sample was
    /// captured (the process exited before the first tick).
    pub average_cpu_percent: f64,
}

impl RunStats {
    /// Pure reduction: running max of memory plus mean CPU. An empty
    /// sequence reduces to the all-zero sentinel, never a division
    /// error.
    #[must_use]
    pub fn from_samples(samples: &[Sample]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mut peak = 0u64;
        let mut cpu_sum = 0f64;
        for sample in samples {
            peak = peak.max(sample.memory_bytes);
            cpu_sum += f64::from(sample.cpu_percent);
        }

        Self {
            peak_memory_bytes: peak,
            average_cpu_percent: cpu_sum / samples.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(memory_bytes: u64, cpu_percent: f32) -> Sample {
        Sample {
            memory_bytes,
            cpu_percent,
        }
    }

    #[test]
    fn empty_sequence_is_zero_sentinel() {
        let stats = RunStats::from_samples(&[]);
        assert_eq!(stats, RunStats::default());
        assert_eq!(stats.peak_memory_bytes, 0);
        assert_eq!(stats.average_cpu_percent, 0.0);
    }

    #[test]
    fn peak_is_maximum_not_last() {
        let stats = RunStats::from_samples(&[
            sample(100, 0.0),
            sample(5_000, 0.0),
            sample(300, 0.0),
        ]);
        assert_eq!(stats.peak_memory_bytes, 5_000);
    }

    #[test]
    fn average_cpu_is_arithmetic_mean() {
        let stats = RunStats::from_samples(&[
            sample(0, 10.0),
            sample(0, 20.0),
            sample(0, 60.0),
        ]);
        assert!((stats.average_cpu_percent - 30.0).abs() < 1e-9);
    }

    #[test]
    fn single_sample_reduces_to_itself() {
        let stats = RunStats::from_samples(&[sample(42, 7.5)]);
        assert_eq!(stats.peak_memory_bytes, 42);
        assert!((stats.average_cpu_percent - 7.5).abs() < 1e-6);
    }
}
