//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner printed by `flapper --version`.
pub fn version_line() -> String {
    format!(
        "flapper {} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}
