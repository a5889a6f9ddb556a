//! Shared helpers for the hono-cli integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// `hono-cli` with colors off and no inherited project dir
pub fn hono_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hono-cli").expect("hono-cli binary is built");
    cmd.env("NO_COLOR", "1").env_remove("HONO_CLI_PROJECT_DIR");
    cmd
}

/// Run `init --skip-install <name>` under `parent` and return the project root
pub fn init_project(parent: &Path, name: &str) -> PathBuf {
    hono_cmd()
        .arg("-C")
        .arg(parent)
        .args(["init", "--skip-install", name])
        .assert()
        .success();
    parent.join(name)
}
