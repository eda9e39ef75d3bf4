use std::process::Child;
use std::time::{Duration, Instant};

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, RefreshKind, System};

use crate::error::{Error, Result};

/// One observation of a live child process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Resident set size, in bytes.
    pub memory_bytes: u64,

    /// Instantaneous CPU utilization since the previous observation,
    /// where 100.0 means one fully busy logical core.
    pub cpu_percent: f32,
}

/// Poll the child at `cadence` until it terminates, collecting one
/// `Sample` per tick.
///
/// Memory is re-read on every tick. CPU is re-read only once at least
/// `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL` has elapsed since the previous
/// CPU refresh — refreshing inside that window reports 0.0 — and the
/// last valid reading is carried into the ticks in between.
///
/// The liveness check and the metrics read race against process exit; a
/// pid that disappears between the two ends sampling cleanly instead of
/// erroring, and no retry is attempted. A child that exits inside the
/// first cadence interval yields an empty sample vector, which is valid.
///
/// With a `deadline`, the child is killed once the deadline passes and
/// the loop keeps polling until it observes the termination. On every
/// path the caller still owns the final blocking `wait` that reaps the
/// child.
pub fn sample_until_exit(
    child: &mut Child,
    cadence: Duration,
    deadline: Option<Instant>,
) -> Result<Vec<Sample>> {
    let pid = Pid::from_u32(child.id());
    let refresh = RefreshKind::nothing().with_processes(ProcessRefreshKind::everything());
    let mut sys = System::new_with_specifics(refresh);

    let memory_only = ProcessRefreshKind::nothing().with_memory();
    let memory_and_cpu = ProcessRefreshKind::nothing().with_memory().with_cpu();

    // Prime the per-process CPU counter so the first real reading is a
    // delta over a full interval.
    sys.refresh_processes_specifics(ProcessesToUpdate::Some(&[pid]), true, memory_and_cpu);
    let mut last_cpu_refresh = Instant::now();
    let mut last_cpu = 0.0f32;

    let mut samples = Vec::new();
    let mut killed = false;

    loop {
        if child.try_wait().map_err(Error::Sample)?.is_some() {
            break;
        }

        if let Some(deadline) = deadline
            && !killed
            && Instant::now() >= deadline
        {
            // Forced termination; keep polling so the exit is observed.
            let _ = child.kill();
            killed = true;
        }

        let read_cpu = last_cpu_refresh.elapsed() >= sysinfo::MINIMUM_CPU_UPDATE_INTERVAL;
        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            if read_cpu { memory_and_cpu } else { memory_only },
        );
        let Some(proc_) = sys.process(pid) else {
            // Exited between the liveness check and the read.
            break;
        };

        if read_cpu {
            last_cpu = proc_.cpu_usage();
            last_cpu_refresh = Instant::now();
        }

        samples.push(Sample {
            // sysinfo reports process memory in bytes.
            memory_bytes: proc_.memory(),
            cpu_percent: last_cpu,
        });

        std::thread::sleep(cadence);
    }

    Ok(samples)
}
