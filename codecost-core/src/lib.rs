mod aggregate;
mod analysis;
mod discover;
mod energy;
mod error;
mod launcher;
mod profile;
mod report;
mod sampler;
mod script;

pub use aggregate::RunStats;
pub use analysis::{StaticMetrics, analyze_source, metrics_from_source};
pub use discover::discover_scripts;
pub use energy::{DEFAULT_WATTS_PER_CORE, EnergyEstimate, PowerModel};
pub use error::{Error, Result};
pub use launcher::spawn_script;
pub use profile::{DEFAULT_CADENCE, ProfileConfig, ResourceProfile, profile_script};
pub use report::{FileReport, analyze_file};
pub use sampler::{Sample, sample_until_exit};
pub use script::{InterpreterBindings, ScriptKind};
