//! One collection run: capture both tables and assemble the report.

use chrono::Utc;
use tracing::{info, warn};

use crate::capture::{is_config_prompt, switch_name_from_prompt, CommandExecutor, SessionCommands};
use crate::error::{CollectError, CollectResult};
use crate::report::SwitchReport;

/// Switch name used when neither the prompt nor the caller supplies one.
pub const DEFAULT_SWITCH_NAME: &str = "switch";

/// Drives a [`CommandExecutor`] through one run.
pub struct Collector<E> {
    executor: E,
    commands: SessionCommands,
    switch_name: Option<String>,
}

impl<E: CommandExecutor> Collector<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            commands: SessionCommands::default(),
            switch_name: None,
        }
    }

    pub fn with_commands(mut self, commands: SessionCommands) -> Self {
        self.commands = commands;
        self
    }

    /// Name to use when the executor reports no prompt.
    pub fn with_switch_name(mut self, name: impl Into<String>) -> Self {
        self.switch_name = Some(name.into());
        self
    }

    /// Runs both captures and returns the assembled report.
    ///
    /// Fails only when the session is in configuration mode or the
    /// executor fails; irregular output ends up in the report's anomalies.
    pub async fn collect(&mut self) -> CollectResult<SwitchReport> {
        let prompt = self
            .executor
            .prompt()
            .await
            .map_err(|e| CollectError::capture("<prompt>", e))?;

        if let Some(prompt) = prompt.as_deref() {
            if is_config_prompt(prompt) {
                return Err(CollectError::ConfigMode {
                    prompt: prompt.to_string(),
                });
            }
        }

        let switch_name = prompt
            .as_deref()
            .and_then(switch_name_from_prompt)
            .or_else(|| self.switch_name.clone())
            .unwrap_or_else(|| DEFAULT_SWITCH_NAME.to_string());

        info!(switch = %switch_name, "Collecting MAC table and interface status");

        if let Some(command) = self.commands.paging_off.clone() {
            self.run(&command).await?;
        }

        let mac_command = self.commands.mac_table.clone();
        let mac_text = self.capture_text(&mac_command).await?;

        let status_command = self.commands.interface_status.clone();
        let status_text = self.capture_text(&status_command).await?;

        if let Some(command) = self.commands.paging_restore.clone() {
            if let Err(e) = self.run(&command).await {
                warn!(command = %command, error = %e, "Failed to restore paging");
            }
        }

        let report = SwitchReport::from_captures(switch_name, Utc::now(), &mac_text, &status_text);

        info!(
            switch = %report.switch_name,
            mac_rows = report.mac_rows.len(),
            status_rows = report.status_rows.len(),
            ambiguous = report.summary.ambiguous,
            unresolved = report.summary.unresolved,
            malformed = report.malformed_lines(),
            "Collection complete"
        );

        Ok(report)
    }

    async fn run(&mut self, command: &str) -> CollectResult<String> {
        tracing::debug!(command = %command, "Sending command");
        self.executor
            .capture(command)
            .await
            .map_err(|e| CollectError::capture(command, e))
    }

    async fn capture_text(&mut self, command: &str) -> CollectResult<String> {
        let text = self.run(command).await?;
        if text.is_empty() {
            return Err(CollectError::empty_capture(command));
        }
        tracing::debug!(command = %command, bytes = text.len(), "Captured output");
        Ok(text)
    }
}
