//! Replay executor: serves saved command output from files.
//!
//! Useful for re-running a report from a capture taken earlier, or from a
//! terminal log. Saved output may be unfiltered, so the `| include`
//! filter at the end of a command is applied here the way the device
//! would apply it.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use macmap_core::{BoxError, CommandExecutor, SessionCommands};

use crate::error::{MacmapError, Result};

/// Matches a trailing `| include <pattern>` filter, accepting any
/// abbreviation from `i` to `include`.
static INCLUDE_FILTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\|\s*i(?:n(?:c(?:l(?:u(?:d(?:e)?)?)?)?)?)?\s+(?P<pattern>.+?)\s*$")
        .expect("Invalid regex pattern")
});

/// Returns the pattern of a trailing include filter, if present.
pub fn include_pattern(command: &str) -> Option<&str> {
    INCLUDE_FILTER_RE
        .captures(command)
        .and_then(|caps| caps.name("pattern"))
        .map(|m| m.as_str())
}

/// Keeps the lines matching `pattern`, as the device's include filter does.
pub fn apply_include_filter(text: &str, pattern: &str) -> Result<String> {
    let re = Regex::new(pattern).map_err(|source| MacmapError::ReplayFilter {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut filtered = String::with_capacity(text.len());
    for line in text.lines().filter(|line| re.is_match(line)) {
        filtered.push_str(line);
        filtered.push('\n');
    }
    Ok(filtered)
}

/// [`CommandExecutor`] answering from saved output.
#[derive(Debug, Clone, Default)]
pub struct ReplayExecutor {
    outputs: HashMap<String, String>,
    prompt: Option<String>,
}

impl ReplayExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a replay of one run from two saved captures.
    ///
    /// Paging commands answer with no output.
    pub fn from_files(
        commands: &SessionCommands,
        mac_table: impl AsRef<Path>,
        interface_status: impl AsRef<Path>,
    ) -> Result<Self> {
        let mut replay = Self::new()
            .with_output(&commands.mac_table, fs::read_to_string(mac_table)?)
            .with_output(
                &commands.interface_status,
                fs::read_to_string(interface_status)?,
            );
        for command in [&commands.paging_off, &commands.paging_restore]
            .into_iter()
            .flatten()
        {
            replay = replay.with_output(command, "");
        }
        Ok(replay)
    }

    pub fn with_output(mut self, command: &str, output: impl Into<String>) -> Self {
        self.outputs.insert(command.to_string(), output.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    fn replay(&self, command: &str) -> Result<String> {
        let raw = self
            .outputs
            .get(command)
            .ok_or_else(|| MacmapError::ReplayMissing(command.to_string()))?;

        match include_pattern(command) {
            Some(pattern) => apply_include_filter(raw, pattern),
            None => Ok(raw.clone()),
        }
    }
}

#[async_trait]
impl CommandExecutor for ReplayExecutor {
    async fn capture(&mut self, command: &str) -> std::result::Result<String, BoxError> {
        Ok(self.replay(command)?)
    }

    async fn prompt(&mut self) -> std::result::Result<Option<String>, BoxError> {
        Ok(self.prompt.clone())
    }
}
