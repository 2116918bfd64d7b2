//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use ethereum_uri::prelude::*;
//!
//! let uri = parse("ethereum:alice.eth?value=1e18").unwrap();
//! assert_eq!(uri.parameters().value(), Some("1000000000000000000"));
//! ```
//!
//! The builder state marker `Empty` is left out.

pub use crate::{
    // Operations
    build, build_with, is_numeric_shaped, normalize_number, parse,
    // Core types
    BuildOptions, Decimal, EthereumUri, Parameters, Target,
    // Builder
    EthereumUriBuilder,
    // Errors
    DecimalError, FormatError, FormatErrorKind,
    // Constants
    RESERVED_PARAMETERS, SCHEME,
};
