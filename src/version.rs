//! Build version information
//!
//! `GIT_COMMIT` and `BUILD_TIME` are read at compile time only; release
//! builds set them, local builds fall back to "unknown".

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn git_commit() -> &'static str {
    option_env!("GIT_COMMIT").unwrap_or("unknown")
}

pub fn build_time() -> &'static str {
    option_env!("BUILD_TIME").unwrap_or("unknown")
}

/// Version string in the form `0.1.0 (abc1234) built at 2025-01-01T00:00:00Z`
pub fn full_version() -> String {
    format!("{} ({}) built at {}", VERSION, git_commit(), build_time())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_version_starts_with_package_version() {
        let version = full_version();
        assert!(version.starts_with(VERSION));
        assert!(version.contains(" built at "));
    }
}
