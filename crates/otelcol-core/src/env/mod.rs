//! Snapshot of the process environment.
//!
//! Resolvers read and write this map instead of the real environment. The
//! final map is layered over the environment the collector service
//! inherits from the launcher.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap(BTreeMap<String, String>);

impl EnvMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Entries that are not valid UTF-8 are skipped here. The service still
    /// inherits them unchanged.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Value of `name`, treating an empty value the same as an unset one.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_reads_as_unset() {
        let env: EnvMap = [("SPLUNK_CONFIG", "")].into_iter().collect();
        assert_eq!(env.get("SPLUNK_CONFIG"), None);
        assert!(!env.is_set("SPLUNK_CONFIG"));
    }

    #[test]
    fn test_set_overwrites() {
        let mut env: EnvMap = [("SPLUNK_REALM", "us0")].into_iter().collect();
        env.set("SPLUNK_REALM", "eu0");
        assert_eq!(env.get("SPLUNK_REALM"), Some("eu0"));
        assert_eq!(env.iter().count(), 1);
    }
}
