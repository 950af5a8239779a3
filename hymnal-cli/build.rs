//! Stamps the binaries with the revision they were built from.
//!
//! `HYMNAL_BUILD_ID` overrides the git lookup for source tarballs built
//! outside a checkout. A checkout with uncommitted changes gets a `+dirty`
//! suffix.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok().map(|s| s.trim().to_string())
}

fn revision() -> String {
    if let Ok(id) = std::env::var("HYMNAL_BUILD_ID") {
        if !id.trim().is_empty() {
            return id.trim().to_string();
        }
    }
    match git(&["rev-parse", "--short=8", "HEAD"]) {
        Some(hash) => {
            let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
                .map_or(false, |changes| !changes.is_empty());
            if dirty {
                format!("{}+dirty", hash)
            } else {
                hash
            }
        }
        None => "unknown".to_string(),
    }
}

fn main() {
    let built_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", revision());
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", built_at);
    println!("cargo:rustc-env=BUILD_PROFILE={}", profile);
}
