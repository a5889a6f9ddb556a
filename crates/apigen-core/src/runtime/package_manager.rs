//! Running `bun` subcommands with streamed output
//!
//! Output from the child is forwarded line by line so users see install progress.
//! Every command is bounded by a timeout.

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for a single package manager command (5 minutes)
const COMMAND_TIMEOUT: Duration = Duration::from_secs(300);

/// Wrapper around a package manager binary
#[derive(Debug, Clone)]
pub struct PackageManager {
    program: String,
    timeout: Duration,
}

impl PackageManager {
    /// Create a manager for the given binary
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: COMMAND_TIMEOUT,
        }
    }

    /// The bun package manager
    pub fn bun() -> Self {
        Self::new("bun")
    }

    /// Override the per-command timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Display form of a command line
    pub fn command_line(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `bun init -y`
    pub async fn init(&self, cwd: &Path) -> Result<()> {
        self.run(&["init", "-y"], cwd).await
    }

    /// `bun add [-d] <packages>`; a no-op for an empty package list
    pub async fn add(&self, packages: &[&str], dev: bool, cwd: &Path) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add"];
        if dev {
            args.push("-d");
        }
        args.extend_from_slice(packages);
        self.run(&args, cwd).await
    }

    /// Run a command in `cwd`, streaming its output
    pub async fn run(&self, args: &[&str], cwd: &Path) -> Result<()> {
        let cmd = self.command_line(args);
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        tracing::debug!("Spawning `{}` in {}", cmd, cwd.display());

        let mut child = TokioCommand::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to start `{}`", cmd))?;

        let stdout = child.stdout.take().context("Failed to capture stdout")?;
        let stderr = child.stderr.take().context("Failed to capture stderr")?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        // Stream output until both pipes close
        let output_task = async {
            let mut stdout_open = true;
            let mut stderr_open = true;
            while stdout_open || stderr_open {
                tokio::select! {
                    line = stdout_reader.next_line(), if stdout_open => {
                        match line {
                            Ok(Some(line)) => println!("  {}", line),
                            Ok(None) => stdout_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stdout:".red(), e);
                                stdout_open = false;
                            }
                        }
                    }
                    line = stderr_reader.next_line(), if stderr_open => {
                        match line {
                            Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                            Ok(None) => stderr_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stderr:".red(), e);
                                stderr_open = false;
                            }
                        }
                    }
                }
            }
        };

        if timeout(self.timeout, output_task).await.is_err() {
            let _ = child.kill().await;
            anyhow::bail!(
                "`{}` timed out after {} seconds",
                cmd,
                self.timeout.as_secs()
            );
        }

        let status = match timeout(Duration::from_secs(5), child.wait()).await {
            Ok(result) => result.with_context(|| format!("Failed to wait for `{}`", cmd))?,
            Err(_) => {
                let _ = child.kill().await;
                anyhow::bail!("`{}` hung after closing its output", cmd);
            }
        };

        if !status.success() {
            return Err(ScaffoldError::ExternalCommand {
                cmd,
                status: status
                    .code()
                    .map_or_else(|| "signal".to_string(), |c| c.to_string()),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_command_line() {
        let pm = PackageManager::bun();
        assert_eq!(pm.command_line(&["add", "-d", "@types/mongodb"]), "bun add -d @types/mongodb");
    }

    #[tokio::test]
    async fn test_add_with_no_packages_is_noop() {
        let dir = tempdir().unwrap();
        let pm = PackageManager::new("definitely-not-a-real-binary-apigen");
        pm.add(&[], false, dir.path()).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_binary_fails_to_start() {
        let dir = tempdir().unwrap();
        let pm = PackageManager::new("definitely-not-a-real-binary-apigen");
        let err = pm.run(&["init"], dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to start"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_external_command_error() {
        let dir = tempdir().unwrap();
        let pm = PackageManager::new("sh");
        let err = pm.run(&["-c", "echo out; echo err >&2; exit 3"], dir.path()).await.unwrap_err();
        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::ExternalCommand { status, .. }) => assert_eq!(status, "3"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_command() {
        let dir = tempdir().unwrap();
        let pm = PackageManager::new("sh").with_timeout(Duration::from_secs(10));
        pm.run(&["-c", "touch created"], dir.path()).await.unwrap();
        assert!(dir.path().join("created").exists());
    }
}
