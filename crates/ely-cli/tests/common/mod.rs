//! Shared helpers for the ely-cli integration tests

use assert_cmd::Command;
use std::path::Path;

/// `ely-cli` with colors off and no inherited project dir
pub fn ely_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ely-cli").expect("ely-cli binary is built");
    cmd.env("NO_COLOR", "1").env_remove("ELY_CLI_PROJECT_DIR");
    cmd
}

/// Run `init --skip-install <name>` under `parent`
pub fn init_project(parent: &Path, name: &str) {
    ely_cmd()
        .arg("-C")
        .arg(parent)
        .args(["init", "--skip-install", name])
        .assert()
        .success();
}
