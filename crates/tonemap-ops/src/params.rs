//! Parameter bag and YAML filter descriptions.
//!
//! Hosts hand filters a loosely typed set of named float arguments. Any
//! argument left out takes the filter's default; arguments the filter does
//! not declare are rejected when the filter is built.
//!
//! # Example
//!
//! ```rust
//! use tonemap_ops::{FilterKind, FilterSpec, ParamMap};
//!
//! let params = ParamMap::new().with("peak", 4.0);
//! assert_eq!(params.get("peak"), Some(4.0));
//! assert_eq!(params.get_or("transition", 0.3), 0.3);
//!
//! let spec = FilterSpec::from_yaml("filter: Mobius\nparams: {peak: 4.0}\n").unwrap();
//! assert_eq!(spec.filter, FilterKind::Mobius);
//! assert_eq!(spec.params, params);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tonemap_core::VideoInfo;

use crate::error::OpsResult;
use crate::filter::{FilterKind, TonemapFilter};

/// Named float arguments supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamMap {
    values: BTreeMap<String, f64>,
}

impl ParamMap {
    /// Empty bag: every parameter takes its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Sets or replaces a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Removes a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    /// Value of `name`, if supplied.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Value of `name`, or `default` when omitted.
    pub fn get_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).unwrap_or(default)
    }

    /// Whether `name` was supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Supplied parameter names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of supplied parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A filter name plus its arguments, as stored in YAML.
///
/// ```yaml
/// filter: Hable
/// params:
///   exposure: 1.5
///   w: 8.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Which curve to build.
    pub filter: FilterKind,
    /// Overrides; missing entries use defaults.
    #[serde(default)]
    pub params: ParamMap,
}

impl FilterSpec {
    /// Filter with all defaults.
    pub fn new(filter: FilterKind) -> Self {
        Self {
            filter,
            params: ParamMap::new(),
        }
    }

    /// Parses a single description.
    pub fn from_yaml(yaml: &str) -> OpsResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a YAML sequence of descriptions.
    pub fn list_from_yaml(yaml: &str) -> OpsResult<Vec<Self>> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes back to YAML.
    pub fn to_yaml(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validates against `info` and builds the filter.
    pub fn build(&self, info: &VideoInfo) -> OpsResult<TonemapFilter> {
        TonemapFilter::new(self.filter, &self.params, info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let params = ParamMap::new();
        assert!(params.is_empty());
        assert_eq!(params.get("exposure"), None);
        assert_eq!(params.get_or("exposure", 2.0), 2.0);
    }

    #[test]
    fn test_set_replaces() {
        let mut params = ParamMap::new().with("a", 0.1);
        params.set("a", 0.2);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some(0.2));
        assert_eq!(params.remove("a"), Some(0.2));
        assert!(!params.contains("a"));
    }

    #[test]
    fn test_from_iter_sorted_names() {
        let params: ParamMap = [("w", 8.0), ("a", 0.2)].into_iter().collect();
        let names: Vec<&str> = params.names().collect();
        assert_eq!(names, ["a", "w"]);
    }

    #[test]
    fn test_yaml_without_params() {
        let spec = FilterSpec::from_yaml("filter: Reinhard").unwrap();
        assert_eq!(spec, FilterSpec::new(FilterKind::Reinhard));
    }

    #[test]
    fn test_yaml_list() {
        let yaml = "- filter: Hable\n  params: {w: 8.0}\n- filter: Mobius\n";
        let specs = FilterSpec::list_from_yaml(yaml).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].params.get("w"), Some(8.0));
        assert_eq!(specs[1].filter, FilterKind::Mobius);
    }

    #[test]
    fn test_yaml_unknown_filter() {
        let err = FilterSpec::from_yaml("filter: Drago").unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_yaml_filter_name_case_insensitive() {
        for yaml in ["filter: hable", "filter: HABLE", "filter: Hable"] {
            let spec = FilterSpec::from_yaml(yaml).unwrap();
            assert_eq!(spec.filter, FilterKind::Hable, "{}", yaml);
        }
        let err = FilterSpec::from_yaml("filter: Drago").unwrap_err();
        assert!(err.to_string().contains("unknown filter: Drago"), "{}", err);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let spec = FilterSpec {
            filter: FilterKind::Hable,
            params: ParamMap::new().with("exposure", 1.5),
        };
        let yaml = spec.to_yaml().unwrap();
        assert_eq!(FilterSpec::from_yaml(&yaml).unwrap(), spec);
    }
}
