//! Shell-backed command executor.
//!
//! Each switch command is run as its own shell command built from a
//! template, so any non-interactive transport works:
//!
//! ```text
//! ssh -T admin@10.0.0.1 {command}
//! sshpass -e ssh admin@sw1 {command}
//! ```
//!
//! The switch command is quoted with [`shellquote`] before it replaces
//! `{command}`, so pipes such as `| include Gi` reach the device instead of
//! the local shell.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use macmap_core::{BoxError, CommandExecutor};

use crate::error::{MacmapError, Result};

/// Placeholder replaced by the quoted switch command.
pub const COMMAND_PLACEHOLDER: &str = "{command}";

/// Default per-command timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Regex for characters that need escaping in shell double-quotes.
/// Matches: $, `, ", \, and newline
static SHELL_ESCAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([$`"\\\n])"#).expect("Invalid regex pattern"));

/// Quotes a string for safe use in shell commands.
///
/// Wraps the string in double quotes and escapes `$`, `` ` ``, `"`, `\`
/// and newline.
///
/// # Example
///
/// ```
/// use macmap::shell::shellquote;
///
/// assert_eq!(shellquote("show version"), "\"show version\"");
/// assert_eq!(shellquote("with$var"), "\"with\\$var\"");
/// ```
pub fn shellquote(s: &str) -> String {
    let escaped = SHELL_ESCAPE_RE.replace_all(s, r"\$1");
    format!("\"{}\"", escaped)
}

/// Result of a shell command execution.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// The exit code of the command (0 = success).
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecResult {
    /// Returns true if the command succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns the combined output (stdout + stderr) for error messages.
    pub fn combined_output(&self) -> String {
        let stdout = self.stdout.trim();
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            stdout.to_string()
        } else if stdout.is_empty() {
            stderr.to_string()
        } else {
            format!("{}\n{}", stdout, stderr)
        }
    }
}

/// Runs a command through `/bin/sh -c` and waits at most `timeout`.
///
/// Stdout is returned untrimmed; the table parsers expect the device's
/// line layout.
pub async fn exec(cmd: &str, timeout: Duration) -> Result<ExecResult> {
    tracing::debug!(command = %cmd, "Executing shell command");

    let child = Command::new("/bin/sh")
        .arg("-c")
        .arg(cmd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(timeout, child)
        .await
        .map_err(|_| MacmapError::ShellTimeout {
            command: cmd.to_string(),
            timeout_secs: timeout.as_secs(),
        })?
        .map_err(|e| MacmapError::ShellExec {
            command: cmd.to_string(),
            source: e,
        })?;

    let result = ExecResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    if result.success() {
        tracing::trace!(command = %cmd, bytes = result.stdout.len(), "Command succeeded");
    } else {
        tracing::warn!(
            command = %cmd,
            exit_code = result.exit_code,
            stderr = %result.stderr.trim(),
            "Command failed"
        );
    }

    Ok(result)
}

/// Runs a command and turns a non-zero exit into an error.
pub async fn exec_or_throw(cmd: &str, timeout: Duration) -> Result<String> {
    let result = exec(cmd, timeout).await?;
    if result.success() {
        Ok(result.stdout)
    } else {
        Err(MacmapError::ShellCommandFailed {
            command: cmd.to_string(),
            exit_code: result.exit_code,
            output: result.combined_output(),
        })
    }
}

/// [`CommandExecutor`] that runs every switch command through a shell
/// command template.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    template: String,
    timeout: Duration,
    prompt: Option<String>,
}

impl ShellExecutor {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            timeout: DEFAULT_TIMEOUT,
            prompt: None,
        }
    }

    /// Validates that the template contains [`COMMAND_PLACEHOLDER`].
    pub fn from_template(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(COMMAND_PLACEHOLDER) {
            return Err(MacmapError::configuration(format!(
                "shell command template '{}' has no {} placeholder",
                template, COMMAND_PLACEHOLDER
            )));
        }
        Ok(Self::new(template))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Prompt to report to the collector; a non-interactive transport
    /// never sees the device prompt itself.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Shell command line for one switch command.
    pub fn render(&self, command: &str) -> String {
        self.template.replace(COMMAND_PLACEHOLDER, &shellquote(command))
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn capture(&mut self, command: &str) -> std::result::Result<String, BoxError> {
        let cmd = self.render(command);
        Ok(exec_or_throw(&cmd, self.timeout).await?)
    }

    async fn prompt(&mut self) -> std::result::Result<Option<String>, BoxError> {
        Ok(self.prompt.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shellquote_simple() {
        assert_eq!(shellquote("simple"), "\"simple\"");
        assert_eq!(shellquote("show interfaces status | include /"), "\"show interfaces status | include /\"");
    }

    #[test]
    fn test_shellquote_special_chars() {
        assert_eq!(shellquote("$HOME"), "\"\\$HOME\"");
        assert_eq!(shellquote("`whoami`"), "\"\\`whoami\\`\"");
        assert_eq!(shellquote("say \"hello\""), "\"say \\\"hello\\\"\"");
        assert_eq!(shellquote("path\\to"), "\"path\\\\to\"");
    }

    #[test]
    fn test_render_template() {
        let executor = ShellExecutor::new("ssh -T admin@sw1 {command}");
        assert_eq!(
            executor.render("show mac address-table dynamic | include Gi"),
            "ssh -T admin@sw1 \"show mac address-table dynamic | include Gi\""
        );
    }

    #[test]
    fn test_template_requires_placeholder() {
        assert!(ShellExecutor::from_template("ssh admin@sw1").is_err());
        assert!(ShellExecutor::from_template("ssh admin@sw1 {command}").is_ok());
    }

    #[test]
    fn test_exec_result_combined() {
        let result = ExecResult {
            exit_code: 1,
            stdout: "partial\n".to_string(),
            stderr: "error message\n".to_string(),
        };
        assert!(!result.success());
        assert_eq!(result.combined_output(), "partial\nerror message");
    }

    #[tokio::test]
    async fn test_capture_through_echo_template() {
        // `printf '%s\n'` stands in for the transport and prints the command back.
        let mut executor = ShellExecutor::new("printf '%s\\n' {command}");
        let output = executor.capture("show interfaces status | include /").await.unwrap();
        assert_eq!(output, "show interfaces status | include /\n");
    }

    #[tokio::test]
    async fn test_capture_failure() {
        let mut executor = ShellExecutor::new("exit 3; {command}");
        let err = executor.capture("show version").await.unwrap_err();
        assert!(err.to_string().contains("exit code 3"));
    }

    #[tokio::test]
    async fn test_exec_timeout() {
        let err = exec("sleep 5", Duration::from_millis(50)).await.unwrap_err();
        assert!(matches!(err, MacmapError::ShellTimeout { .. }));
    }

    #[tokio::test]
    async fn test_prompt_is_configured_value() {
        let mut executor = ShellExecutor::new("true {command}").with_prompt("sw1#");
        assert_eq!(executor.prompt().await.unwrap(), Some("sw1#".to_string()));
    }
}
