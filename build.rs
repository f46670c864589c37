//! Build script: embeds the build date and, for dev builds, the git commit.
//!
//! Without the `release` feature `VERGEN_GIT_SHA` is emitted alongside
//! `HTML_EXTRACTOR_BUILD_DATE`. Release builds only carry the date so the
//! version string stays clean.

use std::process::Command;

/// Current date as YYYY-MM-DD, or "unknown" when `date` is unavailable.
fn get_build_date() -> String {
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

fn main() {
    println!("cargo:rustc-env=HTML_EXTRACTOR_BUILD_DATE={}", get_build_date());
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let emitted = GitclBuilder::default()
            .sha(true)
            .build()
            .map_err(|e| e.to_string())
            .and_then(|git| {
                Emitter::default()
                    .add_instructions(&git)
                    .and_then(|emitter| emitter.emit())
                    .map_err(|e| e.to_string())
            });

        if let Err(e) = emitted {
            // Not a git checkout (e.g. a crates.io tarball)
            println!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
