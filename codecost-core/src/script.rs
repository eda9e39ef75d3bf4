use std::collections::HashMap;
use std::path::Path;

/// Script kind (the string form used in logs/CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
pub enum ScriptKind {
    #[strum(serialize = "python")]
    Python,

    #[strum(serialize = "node", serialize = "javascript")]
    Node,

    #[strum(serialize = "shell", serialize = "sh")]
    Shell,
}

impl ScriptKind {
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "py" => Some(Self::Python),
            "js" => Some(Self::Node),
            "sh" => Some(Self::Shell),
            _ => None,
        }
    }
}

/// Which interpreter launches which script kind.
///
/// Fixed at startup; the profiler only reads it. A kind with no entry is
/// skipped as unsupported rather than failing the run.
#[derive(Debug, Clone)]
pub struct InterpreterBindings {
    commands: HashMap<ScriptKind, String>,
}

impl Default for InterpreterBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.set(ScriptKind::Python, "python3");
        bindings.set(ScriptKind::Node, "node");
        bindings.set(ScriptKind::Shell, "bash");
        bindings
    }
}

impl InterpreterBindings {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn set(&mut self, kind: ScriptKind, program: impl Into<String>) {
        self.commands.insert(kind, program.into());
    }

    #[must_use]
    pub fn get(&self, kind: ScriptKind) -> Option<&str> {
        self.commands.get(&kind).map(String::as_str)
    }
}
