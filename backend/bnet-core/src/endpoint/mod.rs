//! Endpoint templates and the parameters that fill them.
//!
//! A template such as `/User/GetBungieNetUserById/{id}/` is static data. The
//! platform root (`https://www.bungie.net/Platform`) is joined in at render
//! time so tests can point the whole client at a mock server.

pub mod encode;
pub mod render;

pub use render::render;

use crate::error::RenderError;

use std::fmt::Display;

/// One path template of a resource module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointTemplate {
    pub name: &'static str,
    pub path: &'static str,
}

impl EndpointTemplate {
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Self { name, path }
    }

    /// Root and path joined without doubling the slash between them.
    pub fn full_template(&self, root_path: &str) -> String {
        let root = root_path.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{root}{}", self.path)
        } else {
            format!("{root}/{}", self.path)
        }
    }

    pub fn render(
        &self,
        root_path: &str,
        path_params: &ParamMap,
        query_params: Option<&ParamMap>,
    ) -> Result<String, RenderError> {
        render(&self.full_template(root_path), path_params, query_params)
    }
}

/// Ordered name/value pairs for path placeholders or a query string.
///
/// `None` marks a parameter the caller left undefined. Inserting a name that
/// is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, Option<String>)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, Some(value.to_string()));
        self
    }

    pub fn with_opt<V: Display>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.insert(name, value.map(|v| v.to_string()));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// The value for `name`, if it is present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs with a value, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
    }

    pub fn has_present_values(&self) -> bool {
        self.present().next().is_some()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ParamMap::new();
        for (key, value) in iter {
            map.insert(key, Some(value.to_string()));
        }
        map
    }
}
