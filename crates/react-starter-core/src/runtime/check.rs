//! Runtime detection for Node.js and the package manager

use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release the Vite templates support
pub const MIN_NODE_VERSION: &str = "18.0.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(binary: &str, name: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: name.to_string(),
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: name.to_string(),
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("node", "Node.js")
}

/// Check if the package manager binary is available
pub fn check_package_manager(binary: &str) -> RuntimeInfo {
    probe(binary, binary)
}

/// Parse version string, handling a leading `v` as printed by `node --version`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Returns a warning message if the detected Node.js is older than Vite expects
pub fn node_version_warning(node_version: &str) -> Option<String> {
    let detected = parse_version(node_version).ok()?; // Can't compare, skip warning
    let minimum = Version::parse(MIN_NODE_VERSION).ok()?;

    if detected < minimum {
        Some(format!(
            "Node.js {} detected; Vite requires {} or newer.",
            node_version.trim(),
            MIN_NODE_VERSION
        ))
    } else {
        None
    }
}

/// Check that the package manager exists; Node.js is reported but only warned on.
///
/// Returns the detected runtimes plus any advisory warnings.
pub fn check_runtimes(package_manager: &str) -> Result<(Vec<RuntimeInfo>, Vec<String>)> {
    let mut results = Vec::new();
    let mut warnings = Vec::new();

    let node = check_node();
    match node.version.as_deref() {
        Some(version) => {
            if let Some(warning) = node_version_warning(version) {
                warnings.push(warning);
            }
        }
        None => warnings.push("Node.js not found (install from https://nodejs.org)".to_string()),
    }
    results.push(node);

    let pm = check_package_manager(package_manager);
    if !pm.available {
        anyhow::bail!(
            "Missing required runtimes:\n  - {} (install from https://nodejs.org)",
            package_manager
        );
    }
    results.push(pm);

    Ok((results, warnings))
}
