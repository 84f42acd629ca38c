//! Query-string construction for list endpoints.

use url::form_urlencoded;

/// Value that stands for "no filter" in governorate pickers.
pub const ALL_SENTINEL: &str = "All";

/// Ordered query parameters. Absent, empty and `All` values never make it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<V: AsRef<str>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.as_ref();
            if !value.is_empty() && value != ALL_SENTINEL {
                self.pairs.push((key.to_string(), value.to_string()));
            }
        }
        self
    }

    /// Multi-value filter, serialized as one comma-joined value.
    pub fn push_list<V: AsRef<str>>(self, key: &str, values: &[V]) -> Self {
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        self.push(key, Some(joined))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(key, _)| key.as_str())
    }

    /// `?a=1&b=2`, or an empty string when nothing survived.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        format!("?{}", encoded)
    }

    pub fn append_to(&self, path: &str) -> String {
        format!("{}{}", path, self.to_query_string())
    }
}
