use std::path::Path;
use std::process::{Child, Command};

use crate::error::{Error, Result};
use crate::script::{InterpreterBindings, ScriptKind};

/// Spawn `interpreter <script>` without waiting for completion.
///
/// The child inherits the parent's standard streams; nothing is captured
/// or redirected. Returns as soon as the OS process exists.
pub fn spawn_script(
    path: &Path,
    kind: ScriptKind,
    bindings: &InterpreterBindings,
) -> Result<Child> {
    let interpreter = bindings
        .get(kind)
        .ok_or_else(|| Error::UnsupportedFileType {
            ext: kind.to_string(),
        })?;

    Command::new(interpreter)
        .arg(path)
        .spawn()
        .map_err(|source| Error::Spawn {
            interpreter: interpreter.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn missing_binding_is_unsupported() {
        let bindings = InterpreterBindings::empty();
        let result = spawn_script(Path::new("x.sh"), ScriptKind::Shell, &bindings);
        assert!(matches!(result, Err(Error::UnsupportedFileType { .. })));
    }

    #[test]
    fn missing_interpreter_is_spawn_failure() {
        let mut bindings = InterpreterBindings::empty();
        bindings.set(ScriptKind::Shell, "codecost-no-such-interpreter");
        let result = spawn_script(Path::new("x.sh"), ScriptKind::Shell, &bindings);
        assert!(matches!(result, Err(Error::Spawn { .. })));
    }

    #[test]
    fn spawns_without_blocking() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let script = dir.path().join("hello.sh");
        let mut file = std::fs::File::create(&script)?;
        writeln!(file, "exit 0")?;
        drop(file);

        let mut child = spawn_script(&script, ScriptKind::Shell, &InterpreterBindings::default())?;
        let status = child.wait()?;
        assert!(status.success());
        Ok(())
    }
}
