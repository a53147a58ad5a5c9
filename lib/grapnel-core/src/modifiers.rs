//! Request modifier types.
//!
//! Tagged wrapper types a caller passes as invocation arguments to shape
//! the outgoing request: [`Headers`], [`Query`], and [`PathVars`]. All
//! three are pure builders with no validation; their overwrite/accumulate
//! semantics differ deliberately:
//!
//! - [`Headers::set`] replaces the value list for a key (last write wins);
//! - [`Query::add`] appends, preserving insertion order;
//! - [`PathVars::set`] replaces the binding for a placeholder name.

use std::collections::HashMap;

use crate::Result;

/// Request header modifier: a name → value-list mapping.
///
/// Passed as an invocation argument, it replaces the assembled header set
/// wholesale. [`Headers`] doubles as the response header mapping produced
/// by the output demultiplexer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: HashMap<String, Vec<String>>,
}

impl Headers {
    /// Create an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing name → values mapping.
    #[must_use]
    pub const fn from_map(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Set a header to a single value, replacing any prior values (chainable).
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(name.into(), vec![value.into()]);
        self
    }

    /// Set a header to a list of values, replacing any prior values (chainable).
    #[must_use]
    pub fn set_all<V>(mut self, name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<String>,
    {
        self.entries
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Set many single-valued headers from key-value pairs (chainable).
    #[must_use]
    pub fn pairs<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in pairs {
            self.entries.insert(name.into(), vec![value.into()]);
        }
        self
    }

    /// All values for a header name.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// First value for a header name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Number of header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume into the underlying mapping.
    #[must_use]
    pub fn into_map(self) -> HashMap<String, Vec<String>> {
        self.entries
    }
}

/// Query parameter modifier: an ordered, multi-valued pair list.
///
/// Passed as an invocation argument, its rendered query string overwrites
/// any previously applied query modifier (the last one wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter; repeated keys accumulate (chainable).
    #[must_use]
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Append many parameters from key-value pairs (chainable).
    #[must_use]
    pub fn pairs<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.pairs.push((key.into(), value.into()));
        }
        self
    }

    /// Build a query from any serializable value.
    ///
    /// Repeated parameters (`Vec<T>` fields) are supported via
    /// `serde_html_form`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Encoding`] if serialization fails.
    pub fn from_serialize<T: serde::Serialize>(value: &T) -> Result<Self> {
        let encoded = serde_html_form::to_string(value)?;
        let pairs = url::form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();
        Ok(Self { pairs })
    }

    /// Render the query string, percent-escaped, in insertion order.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Path variable modifier: placeholder name → replacement string.
///
/// Each `{name}` literal in the path template is textually replaced by its
/// bound value; unresolved placeholders are left verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathVars {
    vars: HashMap<String, String>,
}

impl PathVars {
    /// Create an empty variable set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a placeholder, replacing any prior binding for it (chainable).
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Bind many placeholders from key-value pairs (chainable).
    #[must_use]
    pub fn pairs<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in pairs {
            self.vars.insert(name.into(), value.into());
        }
        self
    }

    /// Substitute every bound `{name}` placeholder in the template.
    #[must_use]
    pub fn apply(&self, template: &str) -> String {
        let mut path = template.to_string();
        for (name, value) in &self.vars {
            let placeholder = format!("{{{name}}}");
            path = path.replace(&placeholder, value);
        }
        path
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
