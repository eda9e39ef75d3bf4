use std::path::Path;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::aggregate::RunStats;
use crate::energy::PowerModel;
use crate::error::{Error, Result};
use crate::launcher::spawn_script;
use crate::sampler::sample_until_exit;
use crate::script::{InterpreterBindings, ScriptKind};

/// Reference sampling cadence.
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(50);

/// Everything one profiling run depends on, passed explicitly so runs
/// stay deterministic and testable without ambient state.
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub bindings: InterpreterBindings,
    pub cadence: Duration,
    pub power: PowerModel,

    /// Upper bound on one script's run; the child is killed when it
    /// passes. `None` leaves runs unbounded.
    pub timeout: Option<Duration>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            bindings: InterpreterBindings::default(),
            cadence: DEFAULT_CADENCE,
            power: PowerModel::default(),
            timeout: None,
        }
    }
}

/// Aggregate runtime cost of one profiled run.
///
/// The all-zero value doubles as the "unmeasured" sentinel for files
/// that were never launched.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct ResourceProfile {
    pub elapsed_seconds: f64,
    pub peak_memory_bytes: u64,
    pub average_cpu_percent: f64,
    pub power_watts: f64,
    pub energy_joules: f64,
}

impl ResourceProfile {
    #[must_use]
    pub fn unmeasured() -> Self {
        Self::default()
    }
}

/// Launch, sample, reap, and reduce one script run.
///
/// Files with no interpreter binding come back as the unmeasured
/// sentinel, not an error; anything that went wrong after a successful
/// spawn is surfaced for the caller to record against this one file.
pub fn profile_script(path: &Path, config: &ProfileConfig) -> Result<ResourceProfile> {
    let Some(kind) = ScriptKind::from_path(path) else {
        warn!(path = %path.display(), "unsupported file type, skipping runtime profile");
        return Ok(ResourceProfile::unmeasured());
    };

    let mut child = match spawn_script(path, kind, &config.bindings) {
        Ok(child) => child,
        Err(Error::UnsupportedFileType { ext }) => {
            warn!(path = %path.display(), %ext, "no interpreter binding, skipping runtime profile");
            return Ok(ResourceProfile::unmeasured());
        }
        Err(err) => return Err(err),
    };

    let start = Instant::now();
    let deadline = config.timeout.map(|timeout| start + timeout);

    let sampled = sample_until_exit(&mut child, config.cadence, deadline);

    // Reap on every exit path, including a failed poll.
    let waited = child.wait();
    let elapsed_seconds = start.elapsed().as_secs_f64();

    let samples = sampled?;
    waited.map_err(Error::Sample)?;

    let stats = RunStats::from_samples(&samples);
    let estimate = config
        .power
        .estimate(stats.average_cpu_percent, elapsed_seconds);

    Ok(ResourceProfile {
        elapsed_seconds,
        peak_memory_bytes: stats.peak_memory_bytes,
        average_cpu_percent: stats.average_cpu_percent,
        power_watts: estimate.power_watts,
        energy_joules: estimate.energy_joules,
    })
}
