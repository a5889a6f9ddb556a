//! Runtime detection for Bun

use crate::error::ScaffoldError;
use crate::runtime::version;
use anyhow::Result;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Probe `<program> --version`
fn check_program(program: &str, name: &'static str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Bun is available
pub fn check_bun() -> RuntimeInfo {
    check_program("bun", "Bun")
}

/// Require Bun, warning (not failing) when it is older than `min_version`
///
/// Returns the detected runtime and an optional version warning.
pub fn require_bun(min_version: &str) -> Result<(RuntimeInfo, Option<String>)> {
    let bun = check_bun();
    if !bun.available {
        return Err(ScaffoldError::MissingRuntime(
            "Bun (install from https://bun.sh)".to_string(),
        )
        .into());
    }

    let warning = bun
        .version
        .as_deref()
        .and_then(|installed| version::check_minimum(installed, min_version, "bun upgrade"));
    Ok((bun, warning))
}
