//! Parser and builder for `ethereum:` URIs.
//!
//! This crate converts between the textual form of Ethereum payment and
//! contract-call URIs (ERC-681, with the ERC-831 prefix scheme) and a
//! structured [`EthereumUri`] record.
//!
//! # Overview
//!
//! Ethereum URIs have the structure:
//!
//! ```text
//! ethereum:[prefix-]<target>[@chain_id][/function_name][?query]
//! ```
//!
//! Query entries under the reserved keys `value`, `gas`, `gasLimit` and
//! `gasPrice` are collected as named [`Parameters`]. All other entries are
//! positional call arguments, kept in order as `(type, value)` pairs.
//!
//! # Quick Start
//!
//! ```rust
//! use ethereum_uri::{build, parse};
//!
//! let uri = parse(
//!     "ethereum:0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@1/transfer\
//!      ?address=0x8e23ee67d1332ad560396262c48ffbb01f93d052&uint256=2.014e18",
//! ).unwrap();
//!
//! assert_eq!(uri.function_name(), Some("transfer"));
//! assert_eq!(uri.chain_id(), Some("1"));
//! assert_eq!(uri.argument("uint256"), Some("2014000000000000000"));
//!
//! // Arguments are not written back by default
//! assert_eq!(
//!     build(&uri).unwrap(),
//!     "ethereum:0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@1/transfer",
//! );
//! ```
//!
//! # Numbers
//!
//! Amounts routinely exceed 64-bit and floating point precision, so every
//! numeric value goes through the arbitrary-precision [`Decimal`] type.
//! Parsing expands numbers to plain decimal strings (`1e18` becomes
//! `1000000000000000000`); building writes the amount back in exponential
//! form without a `+` sign (`2.014e18`).
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the record types
//! - `telemetry`: `tracing` events for rejected and accepted URIs

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod config;
mod constants;
mod decimal;
mod error;
pub mod prelude;
mod query;
mod target;
mod uri;

pub use builder::{Empty, EthereumUriBuilder};
pub use config::BuildOptions;
pub use constants::{
    ADDRESS_HEX_LENGTH, MAX_NAME_LABEL_LENGTH, RESERVED_PARAMETERS, SCHEME, SCHEME_TAG,
    TRANSFER_AMOUNT_PARAMETER, TRANSFER_FUNCTION, VALUE_PARAMETER, is_reserved_parameter,
};
pub use decimal::{Decimal, MAX_EXPONENT_LITERAL, is_numeric_shaped, normalize_number};
pub use error::{DecimalError, FormatError, FormatErrorKind};
pub use query::{Parameters, QUERY_ENCODE};
pub use target::Target;
pub use uri::{EthereumUri, build, build_with, parse};
