//! Per-call selection configuration

use serde::{Deserialize, Serialize};

/// Options for [`InputReader::select`](crate::InputReader::select)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputOptions {
    /// Label chosen when the user submits an empty line
    ///
    /// An empty string is treated the same as no default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl InputOptions {
    /// Options with the given default label
    pub fn with_default(default: impl Into<String>) -> Self {
        Self {
            default: Some(default.into()),
        }
    }

    /// The default label, if one is set and non-empty
    pub fn default_label(&self) -> Option<&str> {
        self.default.as_deref().filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_default_is_no_default() {
        assert_eq!(InputOptions::default().default_label(), None);
        assert_eq!(InputOptions::with_default("").default_label(), None);
        assert_eq!(InputOptions::with_default("b").default_label(), Some("b"));
    }

    #[test]
    fn test_deserialize_missing_default() {
        let opts: InputOptions = toml::from_str("").unwrap();
        assert_eq!(opts, InputOptions::default());

        let opts: InputOptions = toml::from_str("default = \"green\"").unwrap();
        assert_eq!(opts.default_label(), Some("green"));
    }
}
