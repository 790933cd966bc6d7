//! Command executor seam and the commands a run sends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BoxError;

/// Runs CLI commands against one device session.
///
/// Implementations return everything the device printed for the command,
/// up to the next prompt. No line ending normalization is expected.
#[async_trait]
pub trait CommandExecutor: Send {
    /// Sends `command` and returns its raw output.
    async fn capture(&mut self, command: &str) -> Result<String, BoxError>;

    /// Current session prompt (e.g. `sw1#`), if the executor can see one.
    async fn prompt(&mut self) -> Result<Option<String>, BoxError> {
        Ok(None)
    }
}

/// Commands sent during one run, in order: paging off, MAC table,
/// interface status, paging restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionCommands {
    /// Disables output paging; skipped when `None`.
    pub paging_off: Option<String>,
    /// Restores output paging; skipped when `None`.
    pub paging_restore: Option<String>,
    pub mac_table: String,
    pub interface_status: String,
}

impl Default for SessionCommands {
    fn default() -> Self {
        Self {
            paging_off: Some("terminal length 0".to_string()),
            paging_restore: Some("terminal no length".to_string()),
            mac_table: "show mac address-table dynamic | include Gi".to_string(),
            interface_status: "show interfaces status | include /".to_string(),
        }
    }
}

/// Prompt mode suffixes stripped to get the host name.
const PROMPT_SUFFIXES: &[char] = &['#', '>'];

/// Marker of any configuration sub-mode prompt (`sw1(config-if)#`).
pub const CONFIG_MODE_MARKER: &str = "config";

/// Returns true if the prompt belongs to a configuration mode.
pub fn is_config_prompt(prompt: &str) -> bool {
    prompt.contains(CONFIG_MODE_MARKER)
}

/// Host name shown in a prompt such as `sw1#` or `sw1>`.
///
/// Returns `None` for an empty prompt.
pub fn switch_name_from_prompt(prompt: &str) -> Option<String> {
    let name = prompt.trim().trim_end_matches(PROMPT_SUFFIXES).trim_end();
    (!name.is_empty()).then(|| name.to_string())
}
