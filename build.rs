//! Embeds build metadata for `herotype --version`.
//!
//! Always emits `HEROTYPE_BUILD_DATE`. Builds without the `release` feature
//! also emit `VERGEN_GIT_SHA`, so dev binaries name their commit.

use std::process::Command;

fn main() {
    println!("cargo:rustc-env=HEROTYPE_BUILD_DATE={}", build_date());

    #[cfg(not(feature = "release"))]
    emit_git_sha();
}

/// Today as YYYY-MM-DD, or "unknown" without a usable `date`.
fn build_date() -> String {
    Command::new("date")
        .arg("+%Y-%m-%d")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let emitted = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(|e| e.to_string())
        .and_then(|git| {
            let mut emitter = Emitter::default();
            emitter.add_instructions(&git).map_err(|e| e.to_string())?;
            emitter.emit().map_err(|e| e.to_string())
        });

    if let Err(e) = emitted {
        // Source tarballs have no git checkout; keep building
        println!("cargo:warning=Failed to get git info: {e}");
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}
