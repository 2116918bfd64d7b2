//! Arbitrary-precision decimal numbers for amounts and numeric arguments.
//!
//! # Grammar Reference
//!
//! ```abnf
//! number   = [ "+" / "-" ] 1*DIGIT [ "." 1*DIGIT ] [ ( "e" / "E" ) 1*DIGIT ]
//! ```
//!
//! Values from a parsed URI must match this grammar exactly. Amounts handed
//! to the builder may also carry a signed exponent (`5e-1`).

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};

use crate::error::DecimalError;

/// Largest exponent literal accepted after `e`/`E`.
///
/// Plain rendering writes out every zero, so the literal is bounded to keep
/// the output proportional to the input.
pub const MAX_EXPONENT_LITERAL: i64 = 1024;

/// An exact decimal number: `mantissa * 10^exponent`.
///
/// The mantissa never has trailing zeros, so every value has exactly one
/// representation and derived equality is numeric equality.
///
/// # Examples
///
/// ```
/// use ethereum_uri::Decimal;
///
/// let amount: Decimal = "2.014e18".parse().unwrap();
/// assert_eq!(amount.to_string(), "2014000000000000000");
/// assert_eq!(format!("{amount:e}"), "2.014e18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: BigInt,
    exponent: i64,
}

/// Borrowed pieces of a scanned number literal.
struct Literal<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: Option<(bool, &'a str)>,
}

impl Decimal {
    /// Parses a number using the strict URI grammar (unsigned exponent).
    ///
    /// # Errors
    ///
    /// Returns `DecimalError` if the input is not numeric-shaped or the
    /// exponent exceeds [`MAX_EXPONENT_LITERAL`].
    pub fn parse_strict(input: &str) -> Result<Self, DecimalError> {
        Self::from_literal(&scan(input, false)?)
    }

    /// Parses a number, also accepting a signed exponent.
    ///
    /// # Errors
    ///
    /// Returns `DecimalError` if the input is not a number or the exponent
    /// exceeds [`MAX_EXPONENT_LITERAL`].
    pub fn parse(input: &str) -> Result<Self, DecimalError> {
        Self::from_literal(&scan(input, true)?)
    }

    /// Returns the unscaled value.
    #[must_use]
    pub const fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Returns the power of ten applied to the mantissa.
    #[must_use]
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Returns true if the value is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Returns true if the value has no fractional part.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.exponent >= 0
    }

    fn from_literal(literal: &Literal<'_>) -> Result<Self, DecimalError> {
        let exponent = match literal.exponent {
            Some((negative, digits)) => {
                let digits = digits.trim_start_matches('0');
                let value: i64 = if digits.is_empty() {
                    0
                } else {
                    digits
                        .parse()
                        .map_err(|_| DecimalError::ExponentOutOfRange)?
                };
                if value > MAX_EXPONENT_LITERAL {
                    return Err(DecimalError::ExponentOutOfRange);
                }
                if negative { -value } else { value }
            }
            None => 0,
        };

        let mut digits = String::with_capacity(literal.integer.len() + literal.fraction.len());
        digits.push_str(literal.integer);
        digits.push_str(literal.fraction);

        let significant = digits.trim_end_matches('0');
        let trailing_zeros = digits.len() - significant.len();
        let significant = significant.trim_start_matches('0');

        if significant.is_empty() {
            return Ok(Self::zero());
        }

        let magnitude = BigUint::parse_bytes(significant.as_bytes(), 10).ok_or(
            DecimalError::MissingDigits {
                part: "integer part",
            },
        )?;
        let sign = if literal.negative {
            Sign::Minus
        } else {
            Sign::Plus
        };

        Ok(Self {
            mantissa: BigInt::from_biguint(sign, magnitude),
            exponent: exponent + len_i64(trailing_zeros) - len_i64(literal.fraction.len()),
        })
    }

    fn zero() -> Self {
        Self {
            mantissa: BigInt::zero(),
            exponent: 0,
        }
    }

    fn sign_str(&self) -> &'static str {
        if self.is_negative() { "-" } else { "" }
    }
}

impl fmt::Display for Decimal {
    /// Writes the plain positional form, without exponent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.magnitude().to_string();
        let sign = self.sign_str();

        if self.exponent >= 0 {
            let zeros = "0".repeat(to_usize(self.exponent));
            return write!(f, "{sign}{digits}{zeros}");
        }

        let point = len_i64(digits.len()) + self.exponent;
        if point > 0 {
            let (int, frac) = digits.split_at(to_usize(point));
            write!(f, "{sign}{int}.{frac}")
        } else {
            let zeros = "0".repeat(to_usize(-point));
            write!(f, "{sign}0.{zeros}{digits}")
        }
    }
}

impl fmt::LowerExp for Decimal {
    /// Writes the shortest exponential form: `2.014e18`, `1e0`, `5e-1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.magnitude().to_string();
        let sign = self.sign_str();
        let exponent = self.exponent + len_i64(digits.len()) - 1;
        let (lead, rest) = digits.split_at(1);

        if rest.is_empty() {
            write!(f, "{sign}{lead}e{exponent}")
        } else {
            write!(f, "{sign}{lead}.{rest}e{exponent}")
        }
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = DecimalError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<u64> for Decimal {
    fn from(mut value: u64) -> Self {
        let mut exponent = 0;
        while value != 0 && value % 10 == 0 {
            value /= 10;
            exponent += 1;
        }
        Self {
            mantissa: BigInt::from(value),
            exponent,
        }
    }
}

/// Returns true if `input` matches the strict number grammar.
///
/// ```
/// assert!(ethereum_uri::is_numeric_shaped("2.014e18"));
/// assert!(!ethereum_uri::is_numeric_shaped("1e-5"));
/// ```
#[must_use]
pub fn is_numeric_shaped(input: &str) -> bool {
    scan(input, false).is_ok()
}

/// Renders a numeric-shaped string as its canonical plain decimal form.
///
/// Exponents are expanded, leading zeros and trailing fractional zeros are
/// dropped, and a `+` sign is removed. Precision is never lost.
///
/// # Errors
///
/// Returns `DecimalError` if the input is not numeric-shaped or its exponent
/// exceeds [`MAX_EXPONENT_LITERAL`].
///
/// # Examples
///
/// ```
/// use ethereum_uri::normalize_number;
///
/// assert_eq!(normalize_number("2.014e18").unwrap(), "2014000000000000000");
/// assert_eq!(normalize_number("+007.50").unwrap(), "7.5");
/// ```
pub fn normalize_number(input: &str) -> Result<String, DecimalError> {
    Decimal::parse_strict(input).map(|d| d.to_string())
}

fn scan(input: &str, signed_exponent: bool) -> Result<Literal<'_>, DecimalError> {
    if input.is_empty() {
        return Err(DecimalError::Empty);
    }

    let bytes = input.as_bytes();
    let mut pos = 0;

    let negative = match bytes[0] {
        b'-' => {
            pos = 1;
            true
        }
        b'+' => {
            pos = 1;
            false
        }
        _ => false,
    };

    let start = pos;
    pos = skip_digits(bytes, pos);
    let integer = &input[start..pos];
    if integer.is_empty() {
        return Err(missing_or_invalid(input, pos, "integer part"));
    }

    let mut fraction = "";
    if bytes.get(pos) == Some(&b'.') {
        let start = pos + 1;
        pos = skip_digits(bytes, start);
        fraction = &input[start..pos];
        if fraction.is_empty() {
            return Err(missing_or_invalid(input, pos, "fraction"));
        }
    }

    let mut exponent = None;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        let mut exponent_negative = false;
        if signed_exponent {
            match bytes.get(pos) {
                Some(b'-') => {
                    exponent_negative = true;
                    pos += 1;
                }
                Some(b'+') => pos += 1,
                _ => {}
            }
        }
        let start = pos;
        pos = skip_digits(bytes, start);
        let digits = &input[start..pos];
        if digits.is_empty() {
            return Err(missing_or_invalid(input, pos, "exponent"));
        }
        exponent = Some((exponent_negative, digits));
    }

    if pos < input.len() {
        return Err(invalid_char_at(input, pos));
    }

    Ok(Literal {
        negative,
        integer,
        fraction,
        exponent,
    })
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

fn missing_or_invalid(input: &str, pos: usize, part: &'static str) -> DecimalError {
    if pos < input.len() {
        invalid_char_at(input, pos)
    } else {
        DecimalError::MissingDigits { part }
    }
}

// `pos` only ever advances over ASCII bytes, so it is a char boundary.
fn invalid_char_at(input: &str, pos: usize) -> DecimalError {
    DecimalError::InvalidChar {
        char: input[pos..].chars().next().unwrap_or_default(),
        position: input[..pos].chars().count(),
    }
}

fn len_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

fn to_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or_default()
}
