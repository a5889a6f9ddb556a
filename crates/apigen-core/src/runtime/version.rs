//! Version comparison for installed tools

use anyhow::Result;
use semver::Version;

/// Compare an installed tool version against the minimum a project needs
/// Returns a warning message if the installed version is older
pub fn check_minimum(installed: &str, minimum: &str, upgrade_command: &str) -> Option<String> {
    let installed_ver = match parse_version(installed) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let minimum_ver = match parse_version(minimum) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    if installed_ver < minimum_ver {
        Some(format!(
            "Warning: Generated projects expect version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            minimum, installed, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse version string, handling various formats
pub fn parse_version(version_str: &str) -> Result<Version> {
    // Remove leading 'v' if present
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
