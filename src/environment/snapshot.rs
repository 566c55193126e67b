//! Environment snapshot.
//!
//! Captures the tracked variables once at startup. A missing variable is
//! replaced by its fixed default so every entry always has a value to report.

use serde::Serialize;

/// Variables reported by the `report-env` step, with their defaults.
pub const TRACKED_VARS: [(&str, &str); 2] = [
    ("NODE_ENV", "development"),
    ("DATABASE_URL", "no definida"),
];

/// Where a snapshot value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// Read from the process environment.
    Process,
    /// The variable was unset; the default was substituted.
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Process => write!(f, "environment"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// One captured variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvEntry {
    /// Variable name.
    pub key: String,
    /// Value to report.
    pub value: String,
    /// How the value was determined.
    pub source: ValueSource,
}

/// Immutable view of the tracked variables, taken once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvSnapshot {
    entries: Vec<EnvEntry>,
}

impl EnvSnapshot {
    /// Capture the tracked variables from the process environment.
    pub fn capture() -> Self {
        Self::capture_with(|key| std::env::var(key).ok())
    }

    /// Capture the tracked variables through an explicit lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use jobsim::environment::EnvSnapshot;
    ///
    /// let snapshot = EnvSnapshot::capture_with(|key| {
    ///     (key == "NODE_ENV").then(|| "production".to_string())
    /// });
    /// assert_eq!(snapshot.get("NODE_ENV"), Some("production"));
    /// assert_eq!(snapshot.get("DATABASE_URL"), Some("no definida"));
    /// ```
    pub fn capture_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let entries = TRACKED_VARS
            .iter()
            .map(|(key, default)| match lookup(key) {
                Some(value) => EnvEntry {
                    key: key.to_string(),
                    value,
                    source: ValueSource::Process,
                },
                None => EnvEntry {
                    key: key.to_string(),
                    value: default.to_string(),
                    source: ValueSource::Default,
                },
            })
            .collect();

        Self { entries }
    }

    /// Value for a tracked key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// All entries in reporting order.
    pub fn entries(&self) -> &[EnvEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_node_env_defaults_to_development() {
        let snapshot = EnvSnapshot::capture_with(lookup_from(&[]));
        assert_eq!(snapshot.get("NODE_ENV"), Some("development"));
        assert_eq!(snapshot.entries()[0].source, ValueSource::Default);
    }

    #[test]
    fn unset_database_url_defaults_to_no_definida() {
        let snapshot = EnvSnapshot::capture_with(lookup_from(&[]));
        assert_eq!(snapshot.get("DATABASE_URL"), Some("no definida"));
    }

    #[test]
    fn set_node_env_is_reported_verbatim() {
        let snapshot = EnvSnapshot::capture_with(lookup_from(&[("NODE_ENV", "production")]));
        assert_eq!(snapshot.get("NODE_ENV"), Some("production"));
        assert_eq!(snapshot.entries()[0].source, ValueSource::Process);
    }

    #[test]
    fn empty_value_is_kept() {
        let snapshot = EnvSnapshot::capture_with(lookup_from(&[("DATABASE_URL", "")]));
        assert_eq!(snapshot.get("DATABASE_URL"), Some(""));
    }

    #[test]
    fn entries_follow_tracked_order() {
        let snapshot = EnvSnapshot::capture_with(lookup_from(&[]));
        let keys: Vec<_> = snapshot.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["NODE_ENV", "DATABASE_URL"]);
    }

    #[test]
    fn untracked_key_is_absent() {
        let snapshot = EnvSnapshot::capture_with(lookup_from(&[("HOME", "/root")]));
        assert_eq!(snapshot.get("HOME"), None);
    }

    #[test]
    fn source_display() {
        assert_eq!(ValueSource::Process.to_string(), "environment");
        assert_eq!(ValueSource::Default.to_string(), "default");
    }
}
