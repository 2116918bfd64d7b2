//! Typestate builder for constructing [`EthereumUri`] records.
//!
//! The target is the only required component, so the builder has two
//! states: [`Empty`] and ready, where the type parameter is the
//! [`Target`] itself.

use crate::error::{FormatError, FormatErrorKind};
use crate::query::Parameters;
use crate::target::Target;
use crate::uri::{EthereumUri, validate_chain_id, validate_function_name, validate_prefix};

/// Marker: No target set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// A typestate builder for constructing [`EthereumUri`] records.
///
/// `build()` only exists once a target has been set. Every other
/// component is optional and can be set in any state; setting it twice
/// keeps the last value.
///
/// # Examples
///
/// ```
/// use ethereum_uri::{EthereumUriBuilder, Target};
///
/// let uri = EthereumUriBuilder::new()
///     .target(Target::parse("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359").unwrap())
///     .chain_id(1)
///     .parameter("value", "2014000000000000000")
///     .build();
///
/// assert_eq!(
///     uri.to_uri_string().unwrap(),
///     "ethereum:0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@1?value=2.014e18"
/// );
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use ethereum_uri::EthereumUriBuilder;
///
/// // Error: cannot call build() without a target
/// let uri = EthereumUriBuilder::new().chain_id(1).build();
/// ```
#[derive(Debug, Clone)]
pub struct EthereumUriBuilder<T = Empty> {
    target: T,
    prefix: Option<String>,
    chain_id: Option<String>,
    function_name: Option<String>,
    parameters: Parameters,
    arguments: Vec<(String, String)>,
}

impl EthereumUriBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: Empty,
            prefix: None,
            chain_id: None,
            function_name: None,
            parameters: Parameters::new(),
            arguments: Vec::new(),
        }
    }
}

impl Default for EthereumUriBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl EthereumUriBuilder<Target> {
    /// Builds the record.
    ///
    /// Amounts are checked when the record is written out with
    /// [`EthereumUri::to_uri_string`], not here.
    #[must_use]
    pub fn build(self) -> EthereumUri {
        EthereumUri::from_parts(
            self.prefix,
            self.target,
            self.chain_id,
            self.function_name,
            self.parameters,
            self.arguments,
        )
    }
}

/// Methods available in all states.
impl<T> EthereumUriBuilder<T> {
    /// Sets the target, making the builder ready to build.
    #[must_use]
    pub fn target(self, target: Target) -> EthereumUriBuilder<Target> {
        EthereumUriBuilder {
            target,
            prefix: self.prefix,
            chain_id: self.chain_id,
            function_name: self.function_name,
            parameters: self.parameters,
            arguments: self.arguments,
        }
    }

    /// Parses and sets the target from a string.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the string is neither a hex address nor a
    /// dotted name.
    ///
    /// # Examples
    ///
    /// ```
    /// use ethereum_uri::EthereumUriBuilder;
    ///
    /// let uri = EthereumUriBuilder::new().try_target("alice.eth")?.build();
    /// assert_eq!(uri.target_address(), "alice.eth");
    /// # Ok::<(), ethereum_uri::FormatError>(())
    /// ```
    pub fn try_target(self, s: &str) -> Result<EthereumUriBuilder<Target>, FormatError> {
        let target = Target::parse(s).map_err(|kind| FormatError::new(s, kind))?;
        Ok(self.target(target))
    }

    /// Sets the ERC-831 prefix (e.g., "pay") without validation.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the prefix after checking it is made of ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the prefix is empty or not alphabetic.
    pub fn try_prefix(self, s: &str) -> Result<Self, FormatError> {
        let prefix = validate_prefix(s).map_err(|kind| FormatError::new(s, kind))?;
        Ok(self.prefix(prefix))
    }

    /// Sets the chain id.
    #[must_use]
    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id.to_string());
        self
    }

    /// Parses and sets the chain id from a decimal string.
    ///
    /// Chain ids are kept as text, so values beyond `u64` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the string is empty or contains non-digits.
    pub fn try_chain_id(mut self, s: &str) -> Result<Self, FormatError> {
        match validate_chain_id(s) {
            Ok(Some(chain_id)) => {
                self.chain_id = Some(chain_id.to_string());
                Ok(self)
            }
            Ok(None) => Err(FormatError::new(
                s,
                FormatErrorKind::InvalidChainId {
                    chain_id: s.to_string(),
                },
            )),
            Err(kind) => Err(FormatError::new(s, kind)),
        }
    }

    /// Sets the contract function name without validation.
    #[must_use]
    pub fn function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = Some(name.into());
        self
    }

    /// Sets the function name after checking it is a word token.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the name is empty or contains characters
    /// outside `[A-Za-z0-9_]`.
    pub fn try_function_name(self, s: &str) -> Result<Self, FormatError> {
        match validate_function_name(s) {
            Ok(Some(name)) => Ok(self.function_name(name)),
            Ok(None) => Err(FormatError::new(
                s,
                FormatErrorKind::InvalidFunctionName {
                    name: s.to_string(),
                },
            )),
            Err(kind) => Err(FormatError::new(s, kind)),
        }
    }

    /// Sets a named parameter.
    ///
    /// Any key is accepted; a `transfer` amount goes under `uint256`.
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name, value);
        self
    }

    /// Replaces all named parameters.
    #[must_use]
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Appends a call argument as `(type, value)`.
    #[must_use]
    pub fn argument(mut self, type_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.push((type_name.into(), value.into()));
        self
    }
}
