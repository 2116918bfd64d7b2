//! Query string handling for ethereum URIs.
//!
//! Reserved keys (`value`, `gas`, `gasLimit`, `gasPrice`) are collected into
//! [`Parameters`]; every other entry is a positional call argument whose key
//! is the ABI type name (`address`, `uint256`, ...).

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::constants::is_reserved_parameter;
use crate::decimal::{is_numeric_shaped, normalize_number};
use crate::error::FormatErrorKind;

/// Characters escaped when a key or value is written into the query.
///
/// Parsing percent-decodes every key and value, so `%` is escaped as well
/// and a written query always decodes back to the same strings.
pub const QUERY_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Named parameters of an ethereum URI.
///
/// Stores key-value pairs sorted lexicographically by key. Parsing only
/// ever fills the reserved keys, with values in canonical decimal form.
/// Records assembled by hand may carry other keys, such as the `uint256`
/// amount of a token transfer.
///
/// # Reserved Parameters
///
/// - `value`: Amount of ether to send, in wei
/// - `gas`, `gasLimit`: Gas limit for the transaction
/// - `gasPrice`: Gas price, in wei
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Parameters {
    params: BTreeMap<String, String>,
}

impl Parameters {
    /// Creates an empty parameters instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Sets a parameter, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.params.insert(name.into(), value.into())
    }

    /// Removes a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.params.remove(name)
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the `value` parameter, if present.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.get("value")
    }

    /// Returns the `gas` parameter, if present.
    #[must_use]
    pub fn gas(&self) -> Option<&str> {
        self.get("gas")
    }

    /// Returns the `gasLimit` parameter, if present.
    #[must_use]
    pub fn gas_limit(&self) -> Option<&str> {
        self.get("gasLimit")
    }

    /// Returns the `gasPrice` parameter, if present.
    #[must_use]
    pub fn gas_price(&self) -> Option<&str> {
        self.get("gasPrice")
    }
}

impl fmt::Display for Parameters {
    /// Writes the parameters as an encoded `key=value&...` query.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter().map(|(k, v)| encode_pair(k, v)).collect();
        write!(f, "{}", pairs.join("&"))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A query string split into named parameters and call arguments.
#[derive(Debug, Default)]
pub(crate) struct DecodedQuery {
    pub parameters: Parameters,
    pub arguments: Vec<(String, String)>,
}

impl DecodedQuery {
    /// Decodes a query string (without leading '?').
    ///
    /// Every entry must be exactly `key=value` with a non-empty key. Keys
    /// and values are percent-decoded after splitting; `+` stays a plus
    /// sign. An empty query decodes to nothing. A repeated reserved key
    /// keeps its last value.
    pub fn parse(input: &str) -> Result<Self, FormatErrorKind> {
        let mut decoded = Self::default();

        if input.is_empty() {
            return Ok(decoded);
        }

        for entry in input.split('&') {
            let (raw_key, raw_value) = split_entry(entry)?;
            let key = decode_component(entry, raw_key)?;
            let value = decode_component(entry, raw_value)?;
            let value = process_value(&key, value)?;

            if is_reserved_parameter(&key) {
                decoded.parameters.insert(key, value);
            } else {
                decoded.arguments.push((key, value));
            }
        }

        Ok(decoded)
    }
}

/// Writes one `key=value` pair with both sides escaped.
pub(crate) fn encode_pair(key: &str, value: &str) -> String {
    format!(
        "{}={}",
        utf8_percent_encode(key, QUERY_ENCODE),
        utf8_percent_encode(value, QUERY_ENCODE)
    )
}

fn split_entry(entry: &str) -> Result<(&str, &str), FormatErrorKind> {
    let mut parts = entry.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) if !key.is_empty() => Ok((key, value)),
        _ => Err(FormatErrorKind::MalformedQueryEntry {
            entry: entry.to_string(),
        }),
    }
}

fn decode_component(entry: &str, raw: &str) -> Result<String, FormatErrorKind> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| FormatErrorKind::MalformedQueryEntry {
            entry: entry.to_string(),
        })
}

/// Normalizes numeric values; reserved keys must hold numbers.
///
/// An argument too large to expand is kept as written.
fn process_value(key: &str, value: String) -> Result<String, FormatErrorKind> {
    let reserved = is_reserved_parameter(key);

    if !is_numeric_shaped(&value) {
        if reserved {
            return Err(FormatErrorKind::NonNumericParameter {
                name: key.to_string(),
                value,
            });
        }
        return Ok(value);
    }

    match normalize_number(&value) {
        Ok(normalized) => Ok(normalized),
        Err(_) if !reserved => Ok(value),
        Err(_) => Err(FormatErrorKind::NumberOutOfRange {
            name: key.to_string(),
            value,
        }),
    }
}
