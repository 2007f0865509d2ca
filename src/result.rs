use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

pub const STATUS_SUCCESS: &str = "success";

/// The reply a process tool hands back to the orchestrator: one JSON line on
/// stdout, after which the process exits.
#[derive(Debug, Serialize)]
pub struct ToolResult {
    pub message: String,
    pub runtime: String,
    pub config_received: Value,
    pub status: &'static str,
}

impl ToolResult {
    pub fn success(message: String, runtime: String, config_received: Value) -> Self {
        Self {
            message,
            runtime,
            config_received,
            status: STATUS_SUCCESS,
        }
    }

    /// Writes the result as a single JSON line. Write failures propagate so
    /// the caller can report them on stderr instead of panicking mid-output.
    pub fn write_line(&self, mut out: impl Write) -> Result<()> {
        let line = serde_json::to_string(self)?;
        writeln!(out, "{line}")?;
        Ok(())
    }
}
