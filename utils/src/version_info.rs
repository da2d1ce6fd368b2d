//! Version information for the application, populated at build time.

/// Get the build date in `YYYY-MM-DD` format.
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Get the package version.
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version string shown in the UI, e.g. `v0.1.0 (2026-08-23)`.
pub fn format_version() -> String {
    format!("v{} ({})", build_version(), build_date())
}
