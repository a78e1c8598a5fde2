//! Required toolchain detection

use regex::Regex;
use tracing::{debug, warn};

use super::ProjectGate;
use crate::core::{Error, Result, ToolchainConfig};
use crate::infrastructure::shell::CommandExecutor;

/// Extract the major version from toolchain output.
///
/// `pattern`'s first capture group must match the major version digits.
pub fn parse_major_version(pattern: &Regex, output: &str) -> Option<u32> {
    pattern
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Run the configured toolchain and check its major version
pub async fn ensure_tool_installed(
    toolchain: &ToolchainConfig,
    executor: &dyn CommandExecutor,
) -> Result<()> {
    let pattern = Regex::new(&toolchain.version_pattern).map_err(|e| {
        Error::config(format!(
            "invalid version pattern '{}': {e}",
            toolchain.version_pattern
        ))
    })?;
    let command = &toolchain.command;

    debug!(%command, args = ?toolchain.version_args, "Checking toolchain version");
    let output = executor.run(command, &toolchain.version_args).await?;

    if !output.is_success() {
        warn!(%command, exit_code = output.exit_code, stderr = %output.stderr.trim(), "Toolchain exited unsuccessfully");
        return Err(Error::ProcessExit {
            command: command.clone(),
            code: output.exit_code,
        });
    }

    let found = parse_major_version(&pattern, &output.stdout).ok_or_else(|| {
        Error::VersionParse {
            command: command.clone(),
        }
    })?;

    if found < toolchain.minimum_major {
        return Err(Error::VersionTooLow {
            command: command.clone(),
            found,
            required: toolchain.minimum_major,
        });
    }

    debug!(%command, major = found, "Toolchain version accepted");
    Ok(())
}

impl ProjectGate {
    /// Fails unless the configured toolchain runs and is recent enough
    pub async fn ensure_required_tool_installed(
        &self,
        executor: &dyn CommandExecutor,
    ) -> Result<()> {
        ensure_tool_installed(&self.config().toolchain, executor).await
    }
}
