//! Active search parameters, one entry per query-string key.

use serde::{Deserialize, Serialize};

use crate::query_params::QueryParams;
use crate::search_const::KEY_FROM;

/// One query-string key and its selected values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParameter {
    pub key: String,
    pub values: Vec<String>,
}

impl UrlParameter {
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Self { key: key.into(), values }
    }

    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(|v| v.as_str())
    }
}

/// Ordered set of [`UrlParameter`]s. Keys are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlParameters(Vec<UrlParameter>);

impl UrlParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list from a raw query map, splitting every value on `,`.
    pub fn from_query(raw: &QueryParams) -> Self {
        let mut parameters = Self::new();
        for (key, joined) in raw.iter() {
            let values = joined.split(',').map(|v| v.to_string()).collect::<Vec<_>>();
            match parameters.position(key) {
                Some(i) => parameters.0[i].values = values,
                None => parameters.0.push(UrlParameter::new(key, values)),
            }
        }
        parameters
    }

    pub fn iter(&self) -> impl Iterator<Item = &UrlParameter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&UrlParameter> {
        self.0.iter().find(|p| p.key == key)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.0.iter().position(|p| p.key == key)
    }

    /// Replaces the values of `key` with `[value]`, appending the key if it is new.
    pub fn set_parameter(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.position(key) {
            Some(i) => self.0[i].values = vec![value],
            None => self.0.push(UrlParameter::new(key, vec![value])),
        }
    }

    /// Adds or removes one value of a multi-valued key.
    ///
    /// Adding a value that was not selected yet resets the result offset to 0.
    /// Removing the last value of a key drops the key.
    ///
    /// Values travel comma-joined in the URL, so a value containing `,` comes
    /// back from the next ingest as two values.
    pub fn toggle_value(&mut self, key: &str, value: &str, checked: bool) {
        if checked {
            match self.position(key) {
                Some(i) => {
                    if !self.0[i].values.iter().any(|v| v == value) {
                        self.0[i].values.push(value.to_string());
                        self.set_parameter(KEY_FROM, "0");
                    }
                }
                None => {
                    self.set_parameter(KEY_FROM, "0");
                    self.0.push(UrlParameter::new(key, vec![value.to_string()]));
                }
            }
        } else if let Some(i) = self.position(key) {
            self.0[i].values.retain(|v| v != value);
            if self.0[i].values.is_empty() {
                self.0.remove(i);
            }
        }
    }

    pub fn clear(&mut self, key: &str) {
        self.0.retain(|p| p.key != key);
    }

    /// Flattens the list into `key -> "v1,v2"` pairs for navigation.
    pub fn to_query_map(&self) -> QueryParams {
        let mut map = QueryParams::default();
        for parameter in &self.0 {
            map.insert(parameter.key.clone(), parameter.values.join(","));
        }
        map
    }
}

impl<'a> IntoIterator for &'a UrlParameters {
    type Item = &'a UrlParameter;
    type IntoIter = std::slice::Iter<'a, UrlParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn ingest_splits_comma_joined_values() {
        let parameters = UrlParameters::from_query(&raw(&[("portfolios", "ai,bio"), ("from", "20")]));
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters.get("portfolios").unwrap().values, vec!["ai", "bio"]);
        assert_eq!(parameters.get("from").and_then(|p| p.first_value()), Some("20"));
    }

    #[test]
    fn ingest_keeps_empty_value() {
        let parameters = UrlParameters::from_query(&raw(&[("query", "")]));
        assert_eq!(parameters.get("query").unwrap().values, vec![""]);
    }

    #[test]
    fn set_parameter_replaces_existing_entry() {
        let mut parameters = UrlParameters::new();
        parameters.set_parameter("query", "gpu");
        parameters.set_parameter("query", "cpu");
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters.get("query").unwrap().values, vec!["cpu"]);
    }

    #[test]
    fn set_parameter_collapses_multi_valued_entry() {
        let mut parameters = UrlParameters::from_query(&raw(&[("trl", "7,8")]));
        parameters.set_parameter("trl", "9");
        assert_eq!(parameters.get("trl").unwrap().values, vec!["9"]);
    }

    #[test]
    fn checking_a_new_value_resets_offset() {
        let mut parameters = UrlParameters::from_query(&raw(&[("from", "40"), ("portfolios", "ai")]));
        parameters.toggle_value("portfolios", "bio", true);
        assert_eq!(parameters.get("portfolios").unwrap().values, vec!["ai", "bio"]);
        assert_eq!(parameters.get("from").and_then(|p| p.first_value()), Some("0"));
    }

    #[test]
    fn checking_a_selected_value_changes_nothing() {
        let mut parameters = UrlParameters::from_query(&raw(&[("from", "40"), ("portfolios", "ai")]));
        let before = parameters.clone();
        parameters.toggle_value("portfolios", "ai", true);
        assert_eq!(parameters, before);
    }

    #[test]
    fn checking_a_new_key_appends_after_offset() {
        let mut parameters = UrlParameters::new();
        parameters.toggle_value("users", "researchers", true);
        let keys = parameters.iter().map(|p| p.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["from", "users"]);
    }

    #[test]
    fn unchecking_last_value_drops_key() {
        let mut parameters = UrlParameters::from_query(&raw(&[("portfolios", "ai")]));
        parameters.toggle_value("portfolios", "ai", false);
        assert!(parameters.get("portfolios").is_none());
        assert!(parameters.is_empty());
    }

    #[test]
    fn toggle_round_trip_restores_facet_entries() {
        let before = UrlParameters::from_query(&raw(&[("from", "0"), ("portfolios", "ai"), ("query", "gpu")]));
        let mut parameters = before.clone();
        parameters.toggle_value("trl", "7", true);
        parameters.toggle_value("trl", "7", false);
        assert_eq!(parameters, before);

        parameters.toggle_value("portfolios", "bio", true);
        parameters.toggle_value("portfolios", "bio", false);
        assert_eq!(parameters, before);
    }

    #[test]
    fn clear_removes_key() {
        let mut parameters = UrlParameters::from_query(&raw(&[("portfolios", "ai,bio"), ("trl", "7")]));
        parameters.clear("portfolios");
        assert!(parameters.get("portfolios").is_none());
        assert!(parameters.get("trl").is_some());
        parameters.clear("missing");
        assert_eq!(parameters.len(), 1);
    }

    #[test]
    fn query_map_joins_values() {
        let parameters = UrlParameters::from_query(&raw(&[("portfolios", "ai,bio"), ("from", "20")]));
        let map = parameters.to_query_map();
        assert_eq!(map.get("portfolios"), Some("ai,bio"));
        assert_eq!(map.get("from"), Some("20"));
        assert_eq!(UrlParameters::from_query(&map), parameters);
    }

    #[test]
    fn comma_in_value_splits_on_ingest() {
        let mut parameters = UrlParameters::new();
        parameters.toggle_value("providers", "Foo, Inc.", true);
        assert_eq!(parameters.get("providers").unwrap().values, vec!["Foo, Inc."]);

        let reingested = UrlParameters::from_query(&parameters.to_query_map());
        assert_eq!(reingested.get("providers").unwrap().values, vec!["Foo", " Inc."]);
    }
}
