use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::analysis::{StaticMetrics, analyze_source};
use crate::profile::{ProfileConfig, ResourceProfile, profile_script};
use crate::script::ScriptKind;

/// Combined per-file record handed to the report/export layer.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,

    /// Raw line count, blanks and comments included.
    pub line_count: u64,

    pub size_bytes: u64,

    #[serde(flatten)]
    pub static_metrics: StaticMetrics,

    #[serde(flatten)]
    pub profile: ResourceProfile,
}

/// Assemble one file's record.
///
/// Every failure stays inside this record: a script that cannot be
/// spawned, sampled, or parsed gets sentinel fields and a warning, and
/// the batch moves on to the next file.
pub fn analyze_file(path: &Path, config: &ProfileConfig) -> FileReport {
    let size_bytes = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to stat file");
            0
        }
    };

    let line_count = match fs::read(path) {
        Ok(bytes) => count_lines(&bytes),
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read file");
            0
        }
    };

    let profile = match profile_script(path, config) {
        Ok(profile) => profile,
        Err(err) => {
            warn!(path = %path.display(), %err, "runtime profiling failed");
            ResourceProfile::unmeasured()
        }
    };

    let static_metrics = match ScriptKind::from_path(path) {
        Some(kind) => match analyze_source(path, kind) {
            Ok(metrics) => metrics,
            Err(err) => {
                warn!(path = %path.display(), %err, "static analysis failed");
                StaticMetrics::default()
            }
        },
        None => StaticMetrics::default(),
    };

    FileReport {
        path: path.to_path_buf(),
        line_count,
        size_bytes,
        static_metrics,
        profile,
    }
}

/// Line count tolerant of non-UTF-8 content: newline count, plus one for
/// a trailing fragment without a newline.
fn count_lines(bytes: &[u8]) -> u64 {
    let newlines = bytes.iter().filter(|&&b| b == b'\n').count() as u64;
    if bytes.last().is_some_and(|&b| b != b'\n') {
        newlines + 1
    } else {
        newlines
    }
}
