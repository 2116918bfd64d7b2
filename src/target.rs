//! Target address of an ethereum URI.
//!
//! # Grammar Reference
//!
//! ```abnf
//! target     = hexaddress / name
//! hexaddress = "0x" 40HEXDIG
//! name       = label 1*( "." label )
//! label      = ( ALPHA / DIGIT ) [ *( ALPHA / DIGIT / "-" ) ( ALPHA / DIGIT ) ]
//! ```
//!
//! Labels are at most 63 characters. Names are not resolved and addresses
//! are not checksum-validated.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ADDRESS_HEX_LENGTH, MAX_NAME_LABEL_LENGTH};
use crate::error::FormatErrorKind;

/// The recipient or contract an ethereum URI points at.
///
/// # Examples
///
/// ```
/// use ethereum_uri::Target;
///
/// let target = Target::parse("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359").unwrap();
/// assert!(target.is_address());
///
/// let target = Target::parse("alice.eth").unwrap();
/// assert!(target.is_name());
/// assert_eq!(target.as_str(), "alice.eth");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Target {
    /// A `0x`-prefixed 40 hex digit address, case preserved
    Address(String),
    /// A dot-separated name such as an ENS name (e.g., "alice.eth")
    Name(String),
}

impl Target {
    /// Parses a target from a string.
    ///
    /// # Errors
    ///
    /// Returns the error kind if the input is empty, a malformed hex
    /// address, or a name with an invalid label.
    pub fn parse(input: &str) -> Result<Self, FormatErrorKind> {
        if input.is_empty() {
            return Err(FormatErrorKind::MissingTarget);
        }

        if let Some(hex) = input.strip_prefix("0x") {
            if hex.len() == ADDRESS_HEX_LENGTH && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Ok(Self::Address(input.to_string()));
            }
            // `0x` can still start a name label ("0xproject.eth")
            if !input.contains('.') {
                return Err(Self::invalid(input, "address must be 0x followed by 40 hex digits"));
            }
        }

        Self::validate_name(input)?;
        Ok(Self::Name(input.to_string()))
    }

    /// Returns the target as written in the URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Address(s) | Self::Name(s) => s,
        }
    }

    /// Returns true for a hex address.
    #[must_use]
    pub const fn is_address(&self) -> bool {
        matches!(self, Self::Address(_))
    }

    /// Returns true for a dotted name.
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self, Self::Name(_))
    }

    fn validate_name(input: &str) -> Result<(), FormatErrorKind> {
        if !input.contains('.') {
            return Err(Self::invalid(input, "expected a hex address or a dotted name"));
        }

        for label in input.split('.') {
            Self::validate_label(input, label)?;
        }

        Ok(())
    }

    fn validate_label(input: &str, label: &str) -> Result<(), FormatErrorKind> {
        if label.is_empty() {
            return Err(Self::invalid(input, "name label cannot be empty"));
        }

        if label.len() > MAX_NAME_LABEL_LENGTH {
            return Err(Self::invalid(input, "name label exceeds 63 characters"));
        }

        if !label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(Self::invalid(
                input,
                "name labels allow only letters, digits, and hyphens",
            ));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(Self::invalid(
                input,
                "name labels cannot start or end with a hyphen",
            ));
        }

        Ok(())
    }

    fn invalid(input: &str, reason: &'static str) -> FormatErrorKind {
        FormatErrorKind::InvalidTarget {
            target: input.to_string(),
            reason,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = FormatErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Target {
    type Error = FormatErrorKind;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<String> for Target {
    type Error = crate::FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).map_err(|kind| crate::FormatError::new(s, kind))
    }
}

#[cfg(feature = "serde")]
impl From<Target> for String {
    fn from(target: Target) -> Self {
        match target {
            Target::Address(s) | Target::Name(s) => s,
        }
    }
}

impl AsRef<str> for Target {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
