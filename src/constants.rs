//! Constants for ethereum URI parsing and building.

/// The URI scheme.
pub const SCHEME: &str = "ethereum";

/// Scheme tag every ethereum URI starts with (scheme plus `:`).
pub const SCHEME_TAG: &str = "ethereum:";

/// Query keys that are routed into [`Parameters`](crate::Parameters) instead
/// of the positional call arguments.
///
/// Values under these keys must be numbers.
pub const RESERVED_PARAMETERS: [&str; 4] = ["value", "gas", "gasLimit", "gasPrice"];

/// Reserved key holding the amount of ether sent along with the request.
pub const VALUE_PARAMETER: &str = "value";

/// Function name of the ERC-20 token transfer call.
pub const TRANSFER_FUNCTION: &str = "transfer";

/// Key holding the amount of a [`TRANSFER_FUNCTION`] call.
pub const TRANSFER_AMOUNT_PARAMETER: &str = "uint256";

/// Number of hex digits in an address after the `0x` marker.
pub const ADDRESS_HEX_LENGTH: usize = 40;

/// Maximum length of a single dot-separated name label.
pub const MAX_NAME_LABEL_LENGTH: usize = 63;

/// Returns true if `key` is one of the [`RESERVED_PARAMETERS`].
#[must_use]
pub fn is_reserved_parameter(key: &str) -> bool {
    RESERVED_PARAMETERS.contains(&key)
}
