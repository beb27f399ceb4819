use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Parameter names that act as path placeholders.
///
/// A URL template segment spelled exactly like one of these names is
/// replaced by the value of that key, if the caller supplied it.
pub static PATH_PARAMS: &[&str] = &["id", "playlist_id", "user_id", "category_id"];

/// Parameter names forwarded as query-string parameters.
///
/// Any other key in a [`RequestParams`] map is left out of the query string.
pub static QUERY_PARAMS: &[&str] = &[
    "market",
    "limit",
    "offset",
    "ids",
    "country",
    "locale",
    "timestamp",
    "include_groups",
    "fields",
    "additional_types",
    "q",
    "type",
    "include_external",
    "after",
    "before",
    "uris",
    "uri",
    "position",
    "device_id",
    "position_ms",
    "state",
    "volume_percent",
];

/// Parameter names sent as a JSON object body on POST and PUT requests.
pub static BODY_PARAMS: &[&str] = &["name", "public", "collaborative", "description"];

/// A single parameter value.
///
/// Lists render as comma-joined strings in paths and query strings, and as
/// JSON arrays in request bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        ParamValue::Str(s.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i as i64)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        ParamValue::List(items)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(items: Vec<&str>) -> Self {
        ParamValue::List(items.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(items: &[&str]) -> Self {
        ParamValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

/// Caller-supplied parameters for a single request.
///
/// Keys are free-form. Which keys end up in the path, the query string or
/// the body is decided by [`PATH_PARAMS`], [`QUERY_PARAMS`] and
/// [`BODY_PARAMS`]; anything else is ignored. Required keys are never
/// checked locally, the remote service reports them.
///
/// # Example
///
/// ```
/// use tunesrs::RequestParams;
///
/// let params = RequestParams::new()
///     .with("id", "0sNOF9WDwhWunNAHPD3Baj")
///     .with("market", "SE");
///
/// assert_eq!(params.query_pairs(), vec![("market".to_string(), "SE".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams(BTreeMap<String, ParamValue>);

impl RequestParams {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add a parameter using the builder pattern.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a parameter, returning the previous value for that key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// Keep only the entries whose key is one of `names`.
    pub fn restrict(&self, names: &[&str]) -> RequestParams {
        self.0
            .iter()
            .filter(|(key, _)| names.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Query-string pairs: the entries named in [`QUERY_PARAMS`], in key order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.restrict(QUERY_PARAMS)
            .0
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect()
    }

    /// JSON body built from the entries named in [`BODY_PARAMS`], or `None`
    /// if there are none.
    pub fn body(&self) -> Option<serde_json::Value> {
        let body = self.restrict(BODY_PARAMS);
        if body.is_empty() {
            return None;
        }

        // Untagged values serialize to their natural JSON type
        serde_json::to_value(&body.0).ok()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a RequestParams {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
