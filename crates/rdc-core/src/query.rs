//! Query strings from sparse filter maps.
//!
//! A `Filter` keeps keys in insertion order (no sorting) and may hold null
//! entries; nulls are dropped when the query string is built, mirroring how
//! list screens pass "unset" filters.

use serde::Serialize;
use std::fmt;

/// A scalar filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Str(String),
    Int(i64),
    /// Unsigned values above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Unset; omitted from the query string.
    Null,
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Str(s) => f.write_str(s),
            FilterValue::Int(n) => write!(f, "{}", n),
            FilterValue::UInt(n) => write!(f, "{}", n),
            FilterValue::Float(x) => write!(f, "{}", x),
            FilterValue::Bool(b) => write!(f, "{}", b),
            FilterValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Str(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Str(s)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

impl From<f64> for FilterValue {
    fn from(x: f64) -> Self {
        FilterValue::Float(x)
    }
}

macro_rules! int_filter_value {
    ($($t:ty),*) => {
        $(impl From<$t> for FilterValue {
            fn from(n: $t) -> Self {
                FilterValue::Int(i64::from(n))
            }
        })*
    };
}

int_filter_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for FilterValue {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(i) => FilterValue::Int(i),
            Err(_) => FilterValue::UInt(n),
        }
    }
}

impl From<usize> for FilterValue {
    fn from(n: usize) -> Self {
        FilterValue::from(n as u64)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FilterValue::Null)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("filter must serialize to a JSON object")]
    NotAnObject,
    #[error("filter key `{0}` is not a scalar")]
    NotScalar(String),
    #[error("filter serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Ordered, sparse key/value filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    entries: Vec<(String, FilterValue)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `set`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build from any struct or map that serializes to a flat JSON object.
    /// Field order is kept; `None` fields become nulls.
    pub fn from_serializable<S: Serialize + ?Sized>(value: &S) -> Result<Self, FilterError> {
        let serde_json::Value::Object(map) = serde_json::to_value(value)? else {
            return Err(FilterError::NotAnObject);
        };
        let mut filter = Filter::new();
        for (key, v) in map {
            let fv = match v {
                serde_json::Value::Null => FilterValue::Null,
                serde_json::Value::Bool(b) => FilterValue::Bool(b),
                serde_json::Value::String(s) => FilterValue::Str(s),
                serde_json::Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        FilterValue::Int(i)
                    } else if let Some(u) = n.as_u64() {
                        FilterValue::UInt(u)
                    } else {
                        FilterValue::Float(n.as_f64().unwrap_or(f64::NAN))
                    }
                }
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(FilterError::NotScalar(key));
                }
            };
            filter.entries.push((key, fv));
        }
        Ok(filter)
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filter = Filter::new();
        for (k, v) in iter {
            filter.set(k, v);
        }
        filter
    }
}

/// URL-encoded `k=v&...` for every non-null entry, in insertion order.
pub fn build_query(filter: &Filter) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in filter.iter() {
        if *value == FilterValue::Null {
            continue;
        }
        ser.append_pair(key, &value.to_string());
    }
    ser.finish()
}

/// Append the filter's query string to `url`. Returns `url` unchanged when
/// every entry is null.
pub fn with_query(url: &str, filter: &Filter) -> String {
    let query = build_query(filter);
    if query.is_empty() {
        return url.to_string();
    }
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{query}")
}
