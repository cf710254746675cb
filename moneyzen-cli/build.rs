//! Stamps `moneyzen --version` with the short commit hash of the checkout.

use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    let crate_dir =
        PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR").unwrap_or_else(|| ".".into()));
    let workspace = crate_dir.parent().unwrap_or(&crate_dir);

    watch_git_head(workspace);

    let sha = short_sha(workspace).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=MONEYZEN_BUILD_SHA={sha}");
}

/// Rebuild when HEAD moves, either to another branch or to a new commit on it.
fn watch_git_head(workspace: &Path) {
    let git = workspace.join(".git");
    let head = git.join("HEAD");
    if !head.exists() {
        return;
    }
    println!("cargo:rerun-if-changed={}", head.display());

    let Ok(contents) = std::fs::read_to_string(&head) else {
        return;
    };
    if let Some(branch_ref) = contents.trim().strip_prefix("ref: ") {
        println!("cargo:rerun-if-changed={}", git.join(branch_ref).display());
    }
}

fn short_sha(workspace: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!sha.is_empty()).then_some(sha)
}
