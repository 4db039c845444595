//! Ordered series of named parameters.
//!
//! A [`Form`] keeps parameters in insertion order and allows the same name to
//! appear more than once, which is what both `application/x-www-form-urlencoded`
//! bodies and header parameter lists need.

use crate::RestError;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::trace;

/// A single named parameter, the value is optional (`lr` vs `expires=60`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self { name: name.into(), value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// Ordered multi-map of [`Parameter`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    params: Vec<Parameter>,
}

impl Form {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parses an `application/x-www-form-urlencoded` payload.
    pub fn parse(bytes: &[u8]) -> Result<Self, RestError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(bytes).map_err(RestError::invalid_form)?;
        trace!(count = pairs.len(), "parsed urlencoded form");
        Ok(pairs.into_iter().map(|(name, value)| Parameter::new(name, Some(value))).collect())
    }

    /// Encodes the form as `application/x-www-form-urlencoded`, valueless
    /// parameters are written with an empty value.
    pub fn encode(&self) -> Result<String, RestError> {
        let pairs: Vec<(&str, &str)> = self.params.iter().map(|p| (p.name(), p.value().unwrap_or(""))).collect();
        serde_urlencoded::to_string(pairs).map_err(RestError::invalid_form)
    }

    /// Deserializes the form into a typed structure.
    ///
    /// # Example
    /// ```
    /// # use serde::Deserialize;
    /// # use micro_rest::data::Form;
    /// #[derive(Deserialize, Debug)]
    /// struct Params {
    ///     name: String,
    ///     zip: String,
    /// }
    ///
    /// let form = Form::parse(b"name=micro&zip=10001").unwrap();
    /// let params: Params = form.deserialize().unwrap();
    /// assert_eq!(params.zip, "10001");
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        let encoded = self.encode()?;
        serde_urlencoded::from_str(&encoded).map_err(RestError::invalid_form)
    }

    pub fn push(&mut self, param: Parameter) {
        self.params.push(param);
    }

    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push(Parameter::new(name, Some(value.into())));
    }

    /// Adds a parameter without value
    pub fn add_flag(&mut self, name: impl Into<String>) {
        self.params.push(Parameter::new(name, None));
    }

    /// Replaces the value of the first parameter named `name` and removes any
    /// later duplicate, or appends the parameter when absent.
    pub fn set(&mut self, name: &str, value: Option<String>) {
        let mut found = false;
        self.params.retain_mut(|p| {
            if p.name != name {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            p.value.clone_from(&value);
            true
        });

        if !found {
            self.params.push(Parameter::new(name, value));
        }
    }

    pub fn first(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.first(name).and_then(Parameter::value)
    }

    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params.iter().filter(move |p| p.name == name).filter_map(Parameter::value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }

    /// Removes every parameter named `name`, returns whether one was removed.
    pub fn remove_all(&mut self, name: &str) -> bool {
        let before = self.params.len();
        self.params.retain(|p| p.name != name);
        before != self.params.len()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.params.iter()
    }

    pub fn clear(&mut self) {
        self.params.clear();
    }
}

impl FromIterator<Parameter> for Form {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self { params: iter.into_iter().collect() }
    }
}

impl Extend<Parameter> for Form {
    fn extend<I: IntoIterator<Item = Parameter>>(&mut self, iter: I) {
        self.params.extend(iter);
    }
}

impl IntoIterator for Form {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl<'a> IntoIterator for &'a Form {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::data::{Form, Parameter};
    use serde::Deserialize;

    #[test]
    fn test_keeps_order_and_duplicates() {
        let mut form = Form::new();
        form.add("b", "1");
        form.add("a", "2");
        form.add("b", "3");

        let names: Vec<&str> = form.iter().map(Parameter::name).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
        assert_eq!(form.values("b").collect::<Vec<_>>(), vec!["1", "3"]);
        assert_eq!(form.first_value("b"), Some("1"));
    }

    #[test]
    fn test_set_replaces_first_and_drops_duplicates() {
        let mut form = Form::new();
        form.add("expires", "60");
        form.add("id", "7");
        form.add("expires", "120");

        form.set("expires", Some("3600".into()));
        assert_eq!(form.len(), 2);
        assert_eq!(form.first_value("expires"), Some("3600"));
        assert_eq!(form.iter().next().map(Parameter::name), Some("expires"));

        form.set("lr", None);
        assert!(form.contains("lr"));
        assert_eq!(form.first_value("lr"), None);
    }

    #[test]
    fn test_remove_all() {
        let mut form = Form::new();
        form.add("a", "1");
        form.add("a", "2");
        assert!(form.remove_all("a"));
        assert!(form.is_empty());
        assert!(!form.remove_all("a"));
    }

    #[test]
    fn test_parse_and_encode() {
        let form = Form::parse(b"name=hello+world&zip=10001&zip=10002").unwrap();
        assert_eq!(form.first_value("name"), Some("hello world"));
        assert_eq!(form.values("zip").count(), 2);

        assert_eq!(form.encode().unwrap(), "name=hello+world&zip=10001&zip=10002");
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Params {
            name: String,
            age: u8,
        }

        let form = Form::parse(b"name=zava&age=30").unwrap();
        let params: Params = form.deserialize().unwrap();
        assert_eq!(params.name, "zava");
        assert_eq!(params.age, 30);

        let bad = Form::parse(b"name=zava&age=old").unwrap();
        assert!(bad.deserialize::<Params>().is_err());
    }
}
