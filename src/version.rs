//! Version information for Rustdex

/// The version of Rustdex, taken from Cargo.toml at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the application
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Get the full version string for display
pub fn full_version() -> String {
    format!("{} v{}", APP_NAME, VERSION)
}

/// Get a short version identifier suitable for logging
pub fn short_version() -> String {
    VERSION.to_string()
}
