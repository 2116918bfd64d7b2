//! Main ethereum URI type.

use std::fmt::Display;
use std::str::FromStr;

use crate::config::BuildOptions;
use crate::constants::{
    SCHEME, SCHEME_TAG, TRANSFER_AMOUNT_PARAMETER, TRANSFER_FUNCTION, VALUE_PARAMETER,
};
use crate::decimal::Decimal;
use crate::error::{FormatError, FormatErrorKind};
use crate::query::{DecodedQuery, Parameters, encode_pair};
use crate::target::Target;

/// A parsed ethereum URI.
///
/// Covers plain payments (`ethereum:0x...?value=1e18`), ERC-831 prefixed
/// requests (`ethereum:pay-...`) and contract calls
/// (`ethereum:0x.../transfer?address=0x...&uint256=1`).
///
/// # Structure
///
/// ```text
/// ethereum:[prefix-]<target>[@chain_id][/function_name][?query]
/// ```
///
/// # Examples
///
/// ```
/// use ethereum_uri::EthereumUri;
///
/// let uri = EthereumUri::parse(
///     "ethereum:pay-0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@137?value=1e18&gas=21000",
/// ).unwrap();
/// assert_eq!(uri.prefix(), Some("pay"));
/// assert_eq!(uri.chain_id(), Some("137"));
/// assert_eq!(uri.parameters().value(), Some("1000000000000000000"));
/// assert_eq!(uri.parameters().gas(), Some("21000"));
///
/// assert_eq!(
///     uri.to_uri_string().unwrap(),
///     "ethereum:pay-0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@137?gas=21000&value=1e18",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "scheme", rename = "ethereum"))]
pub struct EthereumUri {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    prefix: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "target_address"))]
    target: Target,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    chain_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    function_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Parameters::is_empty"))]
    parameters: Parameters,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    arguments: Vec<(String, String)>,
}

impl EthereumUri {
    /// Parses an ethereum URI from a string.
    ///
    /// Query keys and values are percent-decoded, and numeric values are
    /// rewritten in plain decimal form (`2.014e18` becomes
    /// `2014000000000000000`).
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if:
    /// - The URI is empty
    /// - The URI does not start with "ethereum:"
    /// - The target is missing or is neither a hex address nor a dotted name
    /// - The chain id or function name contains invalid characters
    /// - A query entry is not exactly `key=value`
    /// - A query key or value does not percent-decode to UTF-8
    /// - A reserved parameter (`value`, `gas`, `gasLimit`, `gasPrice`) is not a number
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let result = Self::parse_inner(input).map_err(|kind| FormatError::new(input, kind));
        record_outcome("parse", &result);
        result
    }

    pub(crate) const fn from_parts(
        prefix: Option<String>,
        target: Target,
        chain_id: Option<String>,
        function_name: Option<String>,
        parameters: Parameters,
        arguments: Vec<(String, String)>,
    ) -> Self {
        Self {
            prefix,
            target,
            chain_id,
            function_name,
            parameters,
            arguments,
        }
    }

    /// Returns the scheme, always "ethereum".
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        SCHEME
    }

    /// Returns the ERC-831 prefix (e.g., "pay"), if present.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the target.
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// Returns the target as written in the URI.
    #[must_use]
    pub fn target_address(&self) -> &str {
        self.target.as_str()
    }

    /// Returns the chain id, if present.
    #[must_use]
    pub fn chain_id(&self) -> Option<&str> {
        self.chain_id.as_deref()
    }

    /// Returns the contract function name, if present.
    #[must_use]
    pub fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }

    /// Returns the named parameters.
    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the call arguments as `(type, value)` pairs, in URI order.
    #[must_use]
    pub fn arguments(&self) -> &[(String, String)] {
        &self.arguments
    }

    /// Returns the value of the first argument of the given type.
    #[must_use]
    pub fn argument(&self, type_name: &str) -> Option<&str> {
        self.arguments
            .iter()
            .find(|(t, _)| t == type_name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the URI is a plain payment (no function call).
    #[must_use]
    pub const fn is_payment(&self) -> bool {
        self.function_name.is_none()
    }

    /// Returns true if the URI calls `transfer`.
    #[must_use]
    pub fn is_transfer(&self) -> bool {
        self.function_name() == Some(TRANSFER_FUNCTION)
    }

    /// Returns the parameter key the amount is stored under.
    ///
    /// `uint256` for `transfer` calls, `value` otherwise.
    #[must_use]
    pub fn amount_key(&self) -> &'static str {
        if self.is_transfer() {
            TRANSFER_AMOUNT_PARAMETER
        } else {
            VALUE_PARAMETER
        }
    }

    /// Returns the amount parameter, if present.
    ///
    /// Parsed transfer URIs keep `uint256` as an argument, so this looks in
    /// the arguments as well for `transfer` calls.
    #[must_use]
    pub fn amount(&self) -> Option<&str> {
        let key = self.amount_key();
        self.parameters.get(key).or_else(|| {
            if self.is_transfer() {
                self.argument(key)
            } else {
                None
            }
        })
    }

    /// Writes the URI with default [`BuildOptions`].
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the amount is not a number or is negative.
    pub fn to_uri_string(&self) -> Result<String, FormatError> {
        self.to_uri_string_with(&BuildOptions::default())
    }

    /// Writes the URI.
    ///
    /// The amount (see [`amount_key`](Self::amount_key)) is written in
    /// exponential form without a `+` sign or `e0` suffix, e.g.
    /// `uint256=2.014e18` or `value=1`. Parameters follow in key order.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the amount is not a number or is negative.
    pub fn to_uri_string_with(&self, options: &BuildOptions) -> Result<String, FormatError> {
        let result = self.build_inner(options);
        record_outcome("build", &result);
        result
    }

    fn parse_inner(input: &str) -> Result<Self, FormatErrorKind> {
        if input.is_empty() {
            return Err(FormatErrorKind::Empty);
        }

        // Check and strip scheme
        let Some(rest) = input.strip_prefix(SCHEME_TAG) else {
            let found = input.split_once(':').map(|(scheme, _)| scheme.to_string());
            return Err(FormatErrorKind::InvalidScheme { found });
        };

        let (rest, query) = Self::split_query(rest);
        let (rest, function_name) = Self::split_function_name(rest)?;
        let (rest, chain_id) = Self::split_chain_id(rest)?;
        let (prefix, target) = Self::split_prefix(rest)?;
        let DecodedQuery {
            parameters,
            arguments,
        } = DecodedQuery::parse(query)?;

        Ok(Self {
            prefix: prefix.map(str::to_string),
            target,
            chain_id: chain_id.map(str::to_string),
            function_name: function_name.map(str::to_string),
            parameters,
            arguments,
        })
    }

    fn split_query(input: &str) -> (&str, &str) {
        input.split_once('?').unwrap_or((input, ""))
    }

    fn split_function_name(input: &str) -> Result<(&str, Option<&str>), FormatErrorKind> {
        match input.split_once('/') {
            Some((rest, name)) => Ok((rest, validate_function_name(name)?)),
            None => Ok((input, None)),
        }
    }

    fn split_chain_id(input: &str) -> Result<(&str, Option<&str>), FormatErrorKind> {
        match input.split_once('@') {
            Some((rest, chain_id)) => Ok((rest, validate_chain_id(chain_id)?)),
            None => Ok((input, None)),
        }
    }

    /// Splits `[prefix "-"] target`.
    ///
    /// A leading run of letters before `-` is a prefix whenever the rest is a
    /// valid target, so `pay-alice.eth` reads as prefix `pay`, target
    /// `alice.eth`. Otherwise the whole input is the target.
    fn split_prefix(input: &str) -> Result<(Option<&str>, Target), FormatErrorKind> {
        let Some((prefix, rest)) = input
            .split_once('-')
            .filter(|(prefix, _)| validate_prefix(prefix).is_ok())
        else {
            return Ok((None, Target::parse(input)?));
        };

        match Target::parse(rest) {
            Ok(target) => Ok((Some(prefix), target)),
            Err(prefixed_err) => Target::parse(input)
                .map(|target| (None, target))
                .map_err(|_| prefixed_err),
        }
    }

    fn build_inner(&self, options: &BuildOptions) -> Result<String, FormatError> {
        let amount_key = self.amount_key();
        let mut parameters = self.parameters.clone();

        if let Some(amount) = self.parameters.get(amount_key) {
            let encoded = encode_amount(amount).map_err(|kind| FormatError::new(amount, kind))?;
            parameters.insert(amount_key, encoded);
        }

        let mut query = Vec::new();
        if !parameters.is_empty() {
            query.push(parameters.to_string());
        }
        if options.include_arguments {
            query.extend(self.arguments.iter().map(|(k, v)| encode_pair(k, v)));
        }

        let mut result = String::from(SCHEME_TAG);

        if let Some(prefix) = &self.prefix {
            result.push_str(prefix);
            result.push('-');
        }

        result.push_str(self.target.as_str());

        if let Some(chain_id) = &self.chain_id {
            result.push('@');
            result.push_str(chain_id);
        }

        if let Some(function_name) = &self.function_name {
            result.push('/');
            result.push_str(function_name);
        }

        if !query.is_empty() {
            result.push('?');
            result.push_str(&query.join("&"));
        }

        Ok(result)
    }
}

/// Parses an ethereum URI into a record.
///
/// # Errors
///
/// See [`EthereumUri::parse`].
pub fn parse(uri: &str) -> Result<EthereumUri, FormatError> {
    EthereumUri::parse(uri)
}

/// Writes a record back into an ethereum URI, leaving out call arguments.
///
/// # Errors
///
/// Returns `FormatError` if the amount is not a number or is negative.
///
/// # Examples
///
/// ```
/// use ethereum_uri::{build, EthereumUriBuilder};
///
/// let record = EthereumUriBuilder::new()
///     .try_target("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359")?
///     .function_name("transfer")
///     .parameter("uint256", "2014000000000000000")
///     .build();
///
/// assert_eq!(
///     build(&record)?,
///     "ethereum:0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359/transfer?uint256=2.014e18",
/// );
/// # Ok::<(), ethereum_uri::FormatError>(())
/// ```
pub fn build(record: &EthereumUri) -> Result<String, FormatError> {
    record.to_uri_string()
}

/// Writes a record back into an ethereum URI using the given options.
///
/// # Errors
///
/// Returns `FormatError` if the amount is not a number or is negative.
pub fn build_with(record: &EthereumUri, options: &BuildOptions) -> Result<String, FormatError> {
    record.to_uri_string_with(options)
}

pub(crate) fn validate_prefix(prefix: &str) -> Result<&str, FormatErrorKind> {
    if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(prefix)
    } else {
        Err(FormatErrorKind::InvalidPrefix {
            prefix: prefix.to_string(),
        })
    }
}

/// Empty means absent; anything else must be digits.
pub(crate) fn validate_chain_id(chain_id: &str) -> Result<Option<&str>, FormatErrorKind> {
    if chain_id.is_empty() {
        return Ok(None);
    }
    if chain_id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(Some(chain_id))
    } else {
        Err(FormatErrorKind::InvalidChainId {
            chain_id: chain_id.to_string(),
        })
    }
}

/// Empty means absent; anything else must be a word token.
pub(crate) fn validate_function_name(name: &str) -> Result<Option<&str>, FormatErrorKind> {
    if name.is_empty() {
        return Ok(None);
    }
    if name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        Ok(Some(name))
    } else {
        Err(FormatErrorKind::InvalidFunctionName {
            name: name.to_string(),
        })
    }
}

/// Rewrites an amount in ERC-681 exponential form (`2.014e18`, `1`).
///
/// Zero has no sign, so `-0` is written as `0`.
fn encode_amount(amount: &str) -> Result<String, FormatErrorKind> {
    let decimal = Decimal::parse(amount).map_err(|_| FormatErrorKind::InvalidAmount {
        value: amount.to_string(),
        reason: "not a finite number",
    })?;

    if decimal.is_negative() {
        return Err(FormatErrorKind::InvalidAmount {
            value: amount.to_string(),
            reason: "amount cannot be negative",
        });
    }

    let encoded = format!("{decimal:e}");
    if let Some(mantissa) = encoded.strip_suffix("e0") {
        return Ok(mantissa.to_string());
    }
    Ok(encoded)
}

#[cfg(feature = "telemetry")]
fn record_outcome<T, E: Display>(operation: &'static str, result: &Result<T, E>) {
    match result {
        Ok(_) => tracing::trace!(operation, "ethereum_uri.ok"),
        Err(err) => tracing::debug!(operation, error = %err, "ethereum_uri.rejected"),
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_outcome<T, E: Display>(_operation: &'static str, _result: &Result<T, E>) {}

impl FromStr for EthereumUri {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EthereumUri {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&EthereumUri> for String {
    type Error = FormatError;

    fn try_from(uri: &EthereumUri) -> Result<Self, Self::Error> {
        uri.to_uri_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";

    fn uri(rest: &str) -> String {
        format!("ethereum:{ADDRESS}{rest}")
    }

    #[test]
    fn parse_plain_address() {
        let parsed = EthereumUri::parse(&uri("")).unwrap();
        assert_eq!(parsed.scheme(), "ethereum");
        assert_eq!(parsed.target_address(), ADDRESS);
        assert!(parsed.target().is_address());
        assert_eq!(parsed.prefix(), None);
        assert_eq!(parsed.chain_id(), None);
        assert_eq!(parsed.function_name(), None);
        assert!(parsed.parameters().is_empty());
        assert!(parsed.arguments().is_empty());
        assert!(parsed.is_payment());
    }

    #[test]
    fn parse_transfer_call() {
        let input = format!(
            "ethereum:{ADDRESS}@1/transfer?address=0x8e23ee67d1332ad560396262c48ffbb01f93d052&uint256=2.014e18"
        );
        let parsed = EthereumUri::parse(&input).unwrap();

        assert_eq!(parsed.function_name(), Some("transfer"));
        assert_eq!(parsed.chain_id(), Some("1"));
        assert!(parsed.parameters().is_empty());
        assert_eq!(
            parsed.arguments(),
            &[
                (
                    "address".to_string(),
                    "0x8e23ee67d1332ad560396262c48ffbb01f93d052".to_string()
                ),
                ("uint256".to_string(), "2014000000000000000".to_string()),
            ]
        );
        assert!(parsed.is_transfer());
        assert_eq!(parsed.amount(), Some("2014000000000000000"));
    }

    #[test]
    fn parse_prefixed_payment() {
        let input = "ethereum:pay-0x8e23ee67d1332ad560396262c48ffbb01f93d052@137?value=1e18&gas=21000";
        let parsed = EthereumUri::parse(input).unwrap();

        assert_eq!(parsed.prefix(), Some("pay"));
        assert_eq!(
            parsed.target_address(),
            "0x8e23ee67d1332ad560396262c48ffbb01f93d052"
        );
        assert_eq!(parsed.chain_id(), Some("137"));
        assert_eq!(parsed.parameters().value(), Some("1000000000000000000"));
        assert_eq!(parsed.parameters().gas(), Some("21000"));
        assert_eq!(parsed.parameters().len(), 2);
        assert_eq!(parsed.amount(), Some("1000000000000000000"));
    }

    #[test]
    fn parse_name_target() {
        let parsed = EthereumUri::parse("ethereum:alice.eth?value=5").unwrap();
        assert!(parsed.target().is_name());
        assert_eq!(parsed.target_address(), "alice.eth");
        assert_eq!(parsed.parameters().value(), Some("5"));
    }

    #[test]
    fn parse_hyphenated_name_reads_prefix() {
        let parsed = EthereumUri::parse("ethereum:my-wallet.eth").unwrap();
        assert_eq!(parsed.prefix(), Some("my"));
        assert_eq!(parsed.target_address(), "wallet.eth");
    }

    #[test]
    fn parse_hyphen_inside_label_without_prefix() {
        let parsed = EthereumUri::parse("ethereum:my2-wallet.eth").unwrap();
        assert_eq!(parsed.prefix(), None);
        assert_eq!(parsed.target_address(), "my2-wallet.eth");
    }

    #[test]
    fn parse_empty_returns_error() {
        let result = EthereumUri::parse("");
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::Empty,
                ..
            })
        ));
    }

    #[test]
    fn parse_wrong_scheme_returns_error() {
        let result = EthereumUri::parse("not-an-ethereum-uri");
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::InvalidScheme { found: None },
                ..
            })
        ));

        let result = EthereumUri::parse(&format!("bitcoin:{ADDRESS}"));
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::InvalidScheme { found: Some(ref s) },
                ..
            }) if s == "bitcoin"
        ));
    }

    #[test]
    fn parse_scheme_is_case_sensitive() {
        assert!(EthereumUri::parse(&format!("Ethereum:{ADDRESS}")).is_err());
    }

    #[test]
    fn parse_missing_target() {
        for input in ["ethereum:", "ethereum:@1", "ethereum:/transfer", "ethereum:?value=1"] {
            let result = EthereumUri::parse(input);
            assert!(
                matches!(
                    result,
                    Err(FormatError {
                        kind: FormatErrorKind::MissingTarget,
                        ..
                    })
                ),
                "{input} should fail with MissingTarget"
            );
        }
    }

    #[test]
    fn parse_prefix_without_target_fails() {
        let result = EthereumUri::parse("ethereum:pay-");
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::MissingTarget,
                ..
            })
        ));
    }

    #[test]
    fn parse_malformed_address_fails() {
        let result = EthereumUri::parse("ethereum:0x1234");
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::InvalidTarget { .. },
                ..
            })
        ));
        assert!(EthereumUri::parse(&uri("junk")).is_err());
    }

    #[test]
    fn parse_entry_without_equals_fails() {
        let result = EthereumUri::parse(&uri("?badentry"));
        assert_eq!(
            result.unwrap_err().kind,
            FormatErrorKind::MalformedQueryEntry {
                entry: "badentry".to_string()
            }
        );
    }

    #[test]
    fn parse_non_numeric_reserved_fails() {
        let result = EthereumUri::parse(&uri("?value=abc"));
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::NonNumericParameter { ref name, .. },
                ..
            }) if name == "value"
        ));
    }

    #[test]
    fn parse_invalid_chain_id_fails() {
        let result = EthereumUri::parse(&uri("@main"));
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::InvalidChainId { .. },
                ..
            })
        ));
    }

    #[test]
    fn parse_invalid_function_name_fails() {
        let result = EthereumUri::parse(&uri("/transfer@1"));
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::InvalidFunctionName { .. },
                ..
            })
        ));
    }

    #[test]
    fn empty_segments_are_absent() {
        let parsed = EthereumUri::parse(&uri("@/?")).unwrap();
        assert_eq!(parsed.chain_id(), None);
        assert_eq!(parsed.function_name(), None);
        assert!(parsed.parameters().is_empty());
        assert!(parsed.arguments().is_empty());
    }

    #[test]
    fn build_plain_payment_roundtrip() {
        let input = "ethereum:pay-0x8e23ee67d1332ad560396262c48ffbb01f93d052@137?gas=21000&value=1e18";
        let parsed = EthereumUri::parse(input).unwrap();
        assert_eq!(build(&parsed).unwrap(), input);
    }

    #[test]
    fn build_minimal() {
        let parsed = EthereumUri::parse(&uri("")).unwrap();
        assert_eq!(parsed.to_uri_string().unwrap(), uri(""));
    }

    #[test]
    fn build_transfer_amount_uses_exponent_without_plus() {
        let record = EthereumUri::from_parts(
            None,
            Target::parse(ADDRESS).unwrap(),
            None,
            Some("transfer".to_string()),
            [("uint256", "2014000000000000000")].into_iter().collect(),
            Vec::new(),
        );
        assert_eq!(
            build(&record).unwrap(),
            uri("/transfer?uint256=2.014e18")
        );
    }

    #[test]
    fn build_drops_e0_suffix() {
        let record = EthereumUri::parse(&uri("?value=1.5")).unwrap();
        assert_eq!(build(&record).unwrap(), uri("?value=1.5"));

        let record = EthereumUri::parse(&uri("?value=7")).unwrap();
        assert_eq!(build(&record).unwrap(), uri("?value=7"));

        let record = EthereumUri::parse(&uri("?value=0")).unwrap();
        assert_eq!(build(&record).unwrap(), uri("?value=0"));
    }

    #[test]
    fn build_keeps_negative_exponent() {
        let record = EthereumUri::parse(&uri("?value=0.001")).unwrap();
        assert_eq!(build(&record).unwrap(), uri("?value=1e-3"));
    }

    #[test]
    fn build_only_reformats_amount_key() {
        let record = EthereumUri::parse(&uri("/approve?gasPrice=2e10&value=2e10")).unwrap();
        assert_eq!(
            build(&record).unwrap(),
            uri("/approve?gasPrice=20000000000&value=2e10")
        );
    }

    #[test]
    fn build_negative_amount_fails() {
        let record = EthereumUri::parse(&uri("?value=-5")).unwrap();
        let err = build(&record).unwrap_err();
        assert!(matches!(err.kind, FormatErrorKind::InvalidAmount { .. }));
    }

    #[test]
    fn build_negative_zero_amount_drops_sign() {
        let record = EthereumUri::parse(&uri("?value=-0")).unwrap();
        assert_eq!(build(&record).unwrap(), uri("?value=0"));
    }

    #[test]
    fn build_non_numeric_amount_fails() {
        let record = EthereumUri::from_parts(
            None,
            Target::parse(ADDRESS).unwrap(),
            None,
            None,
            [("value", "Infinity")].into_iter().collect(),
            Vec::new(),
        );
        let err = build(&record).unwrap_err();
        assert_eq!(err.input, "Infinity");
        assert!(matches!(err.kind, FormatErrorKind::InvalidAmount { .. }));
    }

    #[test]
    fn build_leaves_arguments_out_by_default() {
        let input = uri("/transfer?address=0xabc&uint256=1");
        let parsed = EthereumUri::parse(&input).unwrap();
        assert_eq!(build(&parsed).unwrap(), uri("/transfer"));
    }

    #[test]
    fn build_with_arguments_roundtrips_calls() {
        let input = uri("@1/transfer?address=0x8e23ee67d1332ad560396262c48ffbb01f93d052&uint256=1");
        let parsed = EthereumUri::parse(&input).unwrap();
        let options = BuildOptions::new().with_include_arguments(true);
        assert_eq!(build_with(&parsed, &options).unwrap(), input);
    }

    #[test]
    fn build_with_arguments_after_parameters() {
        let parsed = EthereumUri::parse(&uri("/deposit?uint8=3&value=1e18&gas=90000")).unwrap();
        let options = BuildOptions::new().with_include_arguments(true);
        assert_eq!(
            parsed.to_uri_string_with(&options).unwrap(),
            uri("/deposit?gas=90000&value=1e18&uint8=3")
        );
    }

    #[test]
    fn build_with_arguments_roundtrips_escaped_values() {
        let input = uri("/foo?string=a+b&bytes=hello%20world&note=100%25");
        let parsed = EthereumUri::parse(&input).unwrap();
        assert_eq!(parsed.argument("string"), Some("a+b"));
        assert_eq!(parsed.argument("bytes"), Some("hello world"));
        assert_eq!(parsed.argument("note"), Some("100%"));

        let options = BuildOptions::new().with_include_arguments(true);
        let built = build_with(&parsed, &options).unwrap();
        assert_eq!(EthereumUri::parse(&built).unwrap(), parsed);
    }

    #[test]
    fn build_escapes_percent_in_parameters() {
        let record = EthereumUri::from_parts(
            None,
            Target::parse(ADDRESS).unwrap(),
            None,
            Some("approve".to_string()),
            [("note", "100%")].into_iter().collect(),
            Vec::new(),
        );
        let built = build(&record).unwrap();
        assert_eq!(built, uri("/approve?note=100%25"));
        assert_eq!(
            EthereumUri::parse(&built).unwrap().argument("note"),
            Some("100%")
        );
    }

    #[test]
    fn huge_exponent_argument_survives_roundtrip() {
        let input = uri("/foo?uint256=1e2000");
        let parsed = EthereumUri::parse(&input).unwrap();
        assert_eq!(parsed.argument("uint256"), Some("1e2000"));

        let options = BuildOptions::new().with_include_arguments(true);
        assert_eq!(build_with(&parsed, &options).unwrap(), input);
    }

    #[test]
    fn huge_exponent_reserved_value_fails() {
        let result = EthereumUri::parse(&uri("?value=1e2000"));
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::NumberOutOfRange { ref name, .. },
                ..
            }) if name == "value"
        ));
    }

    #[test]
    fn from_str_and_try_from() {
        let input = uri("@1");
        let a: EthereumUri = input.parse().unwrap();
        let b = EthereumUri::try_from(input.as_str()).unwrap();
        assert_eq!(a, b);
        assert_eq!(String::try_from(&a).unwrap(), input);
    }
}
