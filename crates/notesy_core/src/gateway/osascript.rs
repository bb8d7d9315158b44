//! `osascript` runner.

use crate::config::RunnerConfig;
use crate::gateway::{ExecutionError, ExecutionResult, ScriptRunner};
use log::{info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

const SCRIPT_FILE_PREFIX: &str = "notescript_";
const SCRIPT_FILE_SUFFIX: &str = ".scpt";

/// Runs scripts by writing them to a temp file and invoking an interpreter.
///
/// The temp file is removed once the run finishes, whatever the outcome.
#[derive(Debug, Clone)]
pub struct OsaScriptRunner {
    program: PathBuf,
    script_dir: PathBuf,
}

impl OsaScriptRunner {
    pub fn new(program: impl Into<PathBuf>, script_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            script_dir: script_dir.into(),
        }
    }

    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(config.program.clone(), config.script_dir.clone())
    }
}

impl ScriptRunner for OsaScriptRunner {
    fn run_script(&self, script: &str) -> ExecutionResult<String> {
        let mut file = tempfile::Builder::new()
            .prefix(SCRIPT_FILE_PREFIX)
            .suffix(SCRIPT_FILE_SUFFIX)
            .tempfile_in(&self.script_dir)
            .map_err(ExecutionError::WriteScript)?;
        file.write_all(script.as_bytes())
            .and_then(|()| file.flush())
            .map_err(ExecutionError::WriteScript)?;

        let output = Command::new(&self.program)
            .arg(file.path())
            .output()
            .map_err(|source| ExecutionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(
                "event=script_run module=gateway status=error exit_code={:?} stderr_len={}",
                output.status.code(),
                stderr.len()
            );
            return Err(ExecutionError::Failed {
                status: output.status.code(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        info!(
            "event=script_run module=gateway status=ok script_len={} stdout_len={}",
            script.len(),
            stdout.len()
        );
        Ok(stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::OsaScriptRunner;
    use crate::gateway::{ExecutionError, ScriptRunner};

    #[test]
    fn returns_raw_stdout_of_interpreter() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let runner = OsaScriptRunner::new("cat", dir.path());
        let output = runner.run_script("return \"hi\"\n").expect("script run");
        assert_eq!(output, "return \"hi\"\n");
    }

    #[test]
    fn removes_script_file_after_run() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let runner = OsaScriptRunner::new("cat", dir.path());
        runner.run_script("beep").expect("script run");
        assert_eq!(std::fs::read_dir(dir.path()).expect("read script dir").count(), 0);
    }

    #[test]
    fn non_zero_exit_maps_to_failed() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let runner = OsaScriptRunner::new("false", dir.path());
        let err = runner.run_script("beep").expect_err("script run should fail");
        assert!(matches!(err, ExecutionError::Failed { .. }));
        assert!(err.to_string().starts_with("AppleScript execution error:"));
    }

    #[test]
    fn missing_program_maps_to_spawn() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let runner = OsaScriptRunner::new("/nonexistent/notesy-osascript", dir.path());
        let err = runner.run_script("beep").expect_err("script run should fail");
        assert!(matches!(err, ExecutionError::Spawn { .. }));
    }

    #[test]
    fn missing_script_dir_maps_to_write_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let runner = OsaScriptRunner::new("cat", dir.path().join("missing"));
        let err = runner.run_script("beep").expect_err("script run should fail");
        assert!(matches!(err, ExecutionError::WriteScript(_)));
    }
}
