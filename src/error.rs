//! Error types for ethereum URI parsing and building.

use std::fmt;

/// Error returned when a URI or record cannot be parsed or built.
///
/// Every failure of the crate collapses into this one type. The `kind`
/// names what was wrong and carries the offending token where there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// The input that was rejected (the URI, or the token for builder calls)
    pub input: String,
    /// The specific error that occurred
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub(crate) fn new(input: impl Into<String>, kind: FormatErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }
}

/// Specific format error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// URI is empty
    Empty,
    /// Missing or invalid scheme (expected "ethereum:")
    InvalidScheme {
        /// The scheme that was found, if any
        found: Option<String>,
    },
    /// No target address after the scheme
    MissingTarget,
    /// Target is neither a hex address nor a dotted name
    InvalidTarget {
        /// The rejected target
        target: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Prefix is not made of ASCII letters
    InvalidPrefix {
        /// The rejected prefix
        prefix: String,
    },
    /// Chain id is not made of ASCII digits
    InvalidChainId {
        /// The rejected chain id
        chain_id: String,
    },
    /// Function name contains characters outside `[A-Za-z0-9_]`
    InvalidFunctionName {
        /// The rejected function name
        name: String,
    },
    /// Query entry does not split into exactly one key and one value
    MalformedQueryEntry {
        /// The offending entry
        entry: String,
    },
    /// Reserved parameter carries a value that is not a number
    NonNumericParameter {
        /// Parameter name
        name: String,
        /// The rejected value
        value: String,
    },
    /// Number exponent is too large to expand
    NumberOutOfRange {
        /// Parameter name
        name: String,
        /// The rejected value
        value: String,
    },
    /// Amount cannot be encoded
    InvalidAmount {
        /// The rejected amount
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ethereum URI '{}': ", self.input)?;
        match &self.kind {
            FormatErrorKind::Empty => write!(f, "input is empty"),
            FormatErrorKind::InvalidScheme { found } => match found {
                Some(s) => write!(f, "expected scheme 'ethereum:', found '{s}'"),
                None => write!(f, "missing scheme; URI must start with 'ethereum:'"),
            },
            FormatErrorKind::MissingTarget => write!(f, "missing target address"),
            FormatErrorKind::InvalidTarget { target, reason } => {
                write!(f, "invalid target '{target}': {reason}")
            }
            FormatErrorKind::InvalidPrefix { prefix } => {
                write!(f, "invalid prefix '{prefix}'; only ASCII letters allowed")
            }
            FormatErrorKind::InvalidChainId { chain_id } => {
                write!(f, "invalid chain id '{chain_id}'; only digits allowed")
            }
            FormatErrorKind::InvalidFunctionName { name } => write!(
                f,
                "invalid function name '{name}'; only letters, digits and underscores allowed"
            ),
            FormatErrorKind::MalformedQueryEntry { entry } => {
                write!(f, "query parameter malformed ({entry})")
            }
            FormatErrorKind::NonNumericParameter { name, value } => {
                write!(f, "{name} needs to be a number, found '{value}'")
            }
            FormatErrorKind::NumberOutOfRange { name, value } => {
                write!(f, "{name} value '{value}' is out of range")
            }
            FormatErrorKind::InvalidAmount { value, reason } => {
                write!(f, "invalid amount '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors for decimal number parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// Input is empty
    Empty,
    /// Character outside the number grammar
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// A digit run (integer, fraction or exponent) is empty
    MissingDigits {
        /// Which part of the number has no digits
        part: &'static str,
    },
    /// Exponent does not fit the supported range
    ExponentOutOfRange,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "number cannot be empty"),
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
            Self::MissingDigits { part } => write!(f, "{part} has no digits"),
            Self::ExponentOutOfRange => write!(f, "exponent out of range"),
        }
    }
}

impl std::error::Error for DecimalError {}
