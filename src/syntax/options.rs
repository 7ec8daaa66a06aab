//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Default bound on list nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options that shape how [`Parser`](super::Parser) accepts input.
///
/// # Examples
///
/// ```rust
/// use sexpr::ParseOptions;
/// let options = ParseOptions::from_json_str(r#"{ "allow_trailing": false }"#).unwrap();
/// assert!(!options.allow_trailing);
/// assert_eq!(options.max_depth, ParseOptions::default().max_depth);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Deepest list nesting accepted; `None` removes the bound.
    pub max_depth: Option<usize>,
    /// Whether input may follow the top-level expression.
    pub allow_trailing: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            allow_trailing: true,
        }
    }
}

impl ParseOptions {
    /// Default options that also reject trailing input.
    pub fn strict() -> Self {
        Self {
            allow_trailing: false,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_allow_trailing(mut self, allow_trailing: bool) -> Self {
        self.allow_trailing = allow_trailing;
        self
    }

    /// Reads options from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive() {
        let options = ParseOptions::default();
        assert!(options.allow_trailing);
        assert_eq!(options.max_depth, Some(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn test_json_null_depth_disables_bound() {
        let options = ParseOptions::from_json_str(r#"{ "max_depth": null }"#).unwrap();
        assert_eq!(options.max_depth, None);
        assert!(options.allow_trailing);
    }

    #[test]
    fn test_json_rejects_wrong_types() {
        assert!(ParseOptions::from_json_str(r#"{ "max_depth": "deep" }"#).is_err());
    }
}
