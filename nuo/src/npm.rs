use crate::error::{Result, UpdateError};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;
use update_outdated_core::UpdateDirective;

/// Environment variable overriding the npm executable
pub const NPM_ENV: &str = "NPM_UPDATE_OUTDATED_NPM";

#[cfg(windows)]
const NPM_COMMAND: &str = "npm.cmd";
#[cfg(not(windows))]
const NPM_COMMAND: &str = "npm";

/// The external package manager, seen as three commands
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Executable name, for progress messages
    fn program(&self) -> &str;

    /// Bring installed packages in line with the lockfile
    async fn sync(&self) -> Result<()>;

    /// Raw "outdated" table; empty when nothing is outdated
    async fn outdated(&self) -> Result<String>;

    /// Install exactly `name@version`
    async fn install(&self, directive: &UpdateDirective) -> Result<()>;
}

/// npm, run as a child process in the current directory
pub struct NpmClient {
    program: String,
}

impl NpmClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use `NPM_UPDATE_OUTDATED_NPM` when set, otherwise the platform's npm
    pub fn from_env() -> Self {
        match std::env::var(NPM_ENV) {
            Ok(program) if !program.trim().is_empty() => Self::new(program),
            _ => Self::new(NPM_COMMAND),
        }
    }

    fn command_line(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    async fn run(&self, args: &[&str]) -> Result<Output> {
        let command = self.command_line(args);
        debug!(%command, "running package manager");

        let progress = spinner(&command);
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await;
        progress.finish_and_clear();

        let output = output.map_err(|source| UpdateError::Spawn {
            command: command.clone(),
            source,
        })?;

        debug!(
            %command,
            status = %output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "package manager finished"
        );
        Ok(output)
    }

    async fn run_checked(&self, args: &[&str]) -> Result<Output> {
        let output = self.run(args).await?;
        if !output.status.success() {
            return Err(command_failed(self.command_line(args), &output));
        }
        Ok(output)
    }
}

impl Default for NpmClient {
    fn default() -> Self {
        Self::new(NPM_COMMAND)
    }
}

#[async_trait]
impl PackageManager for NpmClient {
    fn program(&self) -> &str {
        &self.program
    }

    async fn sync(&self) -> Result<()> {
        self.run_checked(&["install"]).await.map(|_| ())
    }

    async fn outdated(&self) -> Result<String> {
        let args = ["outdated"];
        let output = self.run(&args).await?;
        if !outdated_succeeded(&output) {
            return Err(command_failed(self.command_line(&args), &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn install(&self, directive: &UpdateDirective) -> Result<()> {
        let spec = directive.to_string();
        self.run_checked(&["install", spec.as_str()]).await.map(|_| ())
    }
}

/// `npm outdated` exits 1 whenever something is outdated, so 1 only counts
/// as failure when it printed no table but did print errors.
fn outdated_succeeded(output: &Output) -> bool {
    match output.status.code() {
        Some(0) => true,
        Some(1) => {
            !output.stdout.trim_ascii().is_empty() || output.stderr.trim_ascii().is_empty()
        }
        _ => false,
    }
}

fn command_failed(command: String, output: &Output) -> UpdateError {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    UpdateError::CommandFailed {
        command,
        status: output.status.to_string(),
        stderr: if stderr.is_empty() {
            "no error output".to_string()
        } else {
            stderr
        },
    }
}

fn spinner(message: &str) -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_message(message.to_string());
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}
