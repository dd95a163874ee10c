//! URL composition and form encoding for Robot requests.
//!
//! Both builders are pure: the same inputs always produce byte-identical
//! output, since pairs keep insertion order and nothing is sorted or hashed.

use url::form_urlencoded;

/// Ordered form/query parameters.
///
/// Absent optional values are skipped at insertion time, so whatever ends up
/// in the encoded payload is exactly what the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `push`.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    /// Adds `key` only when `value` is present.
    pub fn push_opt<V: Into<String>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Adds one `key[]` field per element, in order.
    pub fn push_list<I, S>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let field = format!("{key}[]");
        for value in values {
            self.pairs.push((field.clone(), value.as_ref().to_string()));
        }
        self
    }

    /// Adds `key=true` when `flag` is set; a cleared flag is omitted.
    pub fn push_flag(&mut self, key: &str, flag: bool) -> &mut Self {
        if flag {
            self.push(key, "true");
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` serialization.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

/// A resource URL: base URL, fixed path, optional identifier segments and an
/// optional query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUrl {
    url: String,
}

impl ResourceUrl {
    /// `path` starts with `/`; `base_url` is expected without a trailing
    /// slash (the client strips it).
    pub fn new(base_url: &str, path: &str) -> Self {
        Self {
            url: format!("{base_url}{path}"),
        }
    }

    pub fn segment(mut self, segment: &str) -> Self {
        self.url.push('/');
        self.url.push_str(segment);
        self
    }

    /// Appends `segment` only when it is present and non-empty: absence
    /// addresses the collection, presence one item.
    pub fn segment_opt(self, segment: Option<&str>) -> Self {
        match segment.filter(|s| !s.is_empty()) {
            Some(segment) => self.segment(segment),
            None => self,
        }
    }

    pub fn with_query(mut self, query: &FormParams) -> Self {
        if !query.is_empty() {
            self.url.push('?');
            self.url.push_str(&query.encode());
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn into_string(self) -> String {
        self.url
    }
}
