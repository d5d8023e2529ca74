//! Embeds the commit hash and build date for `flapper --version`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    // CI sets BUILD_COMMIT; local builds ask git
    let commit = env::var("BUILD_COMMIT").unwrap_or_else(|_| {
        Command::new("git")
            .args(["rev-parse", "--short=7", "HEAD"])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| s.len() == 7)
            .unwrap_or_else(|| "unknown".to_string())
    });

    let date = env::var("BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("build_info.rs");

    fs::write(
        &dest_path,
        format!(
            r#"pub const BUILD_COMMIT: &str = "{}";
pub const BUILD_DATE: &str = "{}";"#,
            commit, date
        ),
    )
    .unwrap();

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
