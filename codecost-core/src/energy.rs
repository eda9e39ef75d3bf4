/// Nominal per-core draw used when no calibration is supplied.
pub const DEFAULT_WATTS_PER_CORE: f64 = 10.0;

/// Linear CPU-utilization power model.
///
/// `power = utilization/100 × logical_cores × watts_per_core` is a coarse
/// approximation, not a hardware measurement. Both knobs live here so a
/// host can be recalibrated without touching the profiler.
#[derive(Debug, Clone, Copy)]
pub struct PowerModel {
    pub watts_per_core: f64,
    pub logical_cores: usize,
}

impl Default for PowerModel {
    fn default() -> Self {
        Self {
            watts_per_core: DEFAULT_WATTS_PER_CORE,
            logical_cores: num_cpus::get(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyEstimate {
    pub power_watts: f64,
    pub energy_joules: f64,
}

impl PowerModel {
    /// Derive power from mean utilization and integrate it over the run.
    /// Energy is exactly `power × elapsed`; nothing is re-measured.
    #[must_use]
    pub fn estimate(&self, average_cpu_percent: f64, elapsed_seconds: f64) -> EnergyEstimate {
        let power_watts =
            (average_cpu_percent / 100.0) * self.logical_cores as f64 * self.watts_per_core;
        EnergyEstimate {
            power_watts,
            energy_joules: power_watts * elapsed_seconds,
        }
    }
}
