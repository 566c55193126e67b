//! CI detection.
//!
//! Checks well-known environment variables to decide whether jobsim is
//! running under a CI provider, where styled terminal output is turned off.

/// Variables whose presence marks a CI environment.
pub const CI_MARKERS: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    detect_ci_with(|key| std::env::var_os(key).is_some()).is_some()
}

/// Return the first CI marker reported present by `is_set`.
pub fn detect_ci_with(is_set: impl Fn(&str) -> bool) -> Option<&'static str> {
    CI_MARKERS.iter().copied().find(|key| is_set(key))
}
