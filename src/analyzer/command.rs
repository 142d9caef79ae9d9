//! External command execution for the analyzers

use crate::error::AnalyzerError;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Captured result of a finished command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit status
    pub status: ExitStatus,
    /// Standard output, lossily decoded
    pub stdout: String,
    /// Standard error, lossily decoded
    pub stderr: String,
}

/// Render a command line for logs and error messages
pub fn display_command(command: &[String]) -> String {
    command.join(" ")
}

/// Run a command in `working_dir` and capture its output
pub async fn run_command(
    command: &[String],
    working_dir: &Path,
) -> Result<CommandOutput, AnalyzerError> {
    let Some((program, args)) = command.split_first() else {
        return Err(AnalyzerError::spawn_failed(
            "",
            working_dir,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "Empty command"),
        ));
    };

    tracing::debug!(
        command = %display_command(command),
        dir = %working_dir.display(),
        "running external command"
    );

    let output = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| AnalyzerError::spawn_failed(display_command(command), working_dir, e))?;

    Ok(CommandOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        let command = vec!["npx".to_string(), "libyear".to_string(), "--json".to_string()];
        assert_eq!(display_command(&command), "npx libyear --json");
    }

    #[tokio::test]
    async fn test_empty_command_is_error() {
        let err = run_command(&[], Path::new(".")).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::SpawnFailed { .. }));
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let command = vec!["depreport-definitely-not-a-program".to_string()];
        let err = run_command(&command, Path::new(".")).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::SpawnFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_streams_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        let command = vec![
            "sh".to_string(),
            "-c".to_string(),
            "pwd; echo warn >&2".to_string(),
        ];
        let output = run_command(&command, dir.path()).await.unwrap();

        assert!(output.status.success());
        let reported = std::fs::canonicalize(output.stdout.trim()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(dir.path()).unwrap());
        assert_eq!(output.stderr.trim(), "warn");
    }
}
