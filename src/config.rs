//! Configuration for URI building.

/// Options controlling how a record is written back into a URI.
///
/// The default writes only the named parameters, leaving call arguments
/// out of the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Whether to append the positional call arguments after the parameters.
    ///
    /// Parsing keeps non-reserved query entries as arguments. With this set,
    /// `build_with(&parse(uri)?, &options)` writes them back in their
    /// URI order.
    /// Default: false
    pub include_arguments: bool,
}

impl BuildOptions {
    /// Creates options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables writing call arguments.
    #[must_use]
    pub const fn with_include_arguments(mut self, include: bool) -> Self {
        self.include_arguments = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert!(!BuildOptions::new().include_arguments);
    }

    #[test]
    fn builder_pattern() {
        let options = BuildOptions::new().with_include_arguments(true);
        assert!(options.include_arguments);
    }
}
