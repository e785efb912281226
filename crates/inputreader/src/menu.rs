//! Selection menus from command-line arguments or TOML files

use std::fs;
use std::io;
use std::path::Path;

use inputreader_core::InputOptions;
use serde::Deserialize;
use thiserror::Error;

/// Errors building a menu
#[derive(Error, Debug)]
pub enum MenuError {
    /// M001: Menu file could not be read
    #[error("M001: cannot read menu file {path}: {source}")]
    Read { path: String, source: io::Error },

    /// M002: Menu file is not valid TOML or misses required keys
    #[error("M002: invalid menu file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    /// M003: Nothing to choose from
    #[error("M003: menu has no options")]
    NoOptions,

    /// M004: Inline menu without a prompt
    #[error("M004: a prompt is required unless --menu is given")]
    MissingPrompt,
}

impl MenuError {
    /// Get the error code (e.g., "M001")
    pub fn code(&self) -> &'static str {
        match self {
            MenuError::Read { .. } => "M001",
            MenuError::Parse { .. } => "M002",
            MenuError::NoOptions => "M003",
            MenuError::MissingPrompt => "M004",
        }
    }
}

/// A prompt with its options and optional default
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Menu {
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub default: Option<String>,
}

impl Menu {
    /// Parse a menu from TOML text
    pub fn from_toml_str(content: &str, path: &str) -> Result<Self, MenuError> {
        let menu: Menu = toml::from_str(content).map_err(|source| MenuError::Parse {
            path: path.to_string(),
            source,
        })?;
        menu.validated()
    }

    /// Load a menu from a TOML file
    pub fn load(path: &Path) -> Result<Self, MenuError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| MenuError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&content, &display)
    }

    /// Build a menu from `select` arguments
    ///
    /// A `--menu` file wins over inline prompt and options; an explicit
    /// `--default` overrides the file's default.
    pub fn resolve(
        prompt: Option<String>,
        options: Vec<String>,
        default: Option<String>,
        menu_path: Option<&Path>,
    ) -> Result<Self, MenuError> {
        let mut menu = match menu_path {
            Some(path) => Self::load(path)?,
            None => Menu {
                prompt: prompt.ok_or(MenuError::MissingPrompt)?,
                options,
                default: None,
            }
            .validated()?,
        };
        if default.is_some() {
            menu.default = default;
        }
        Ok(menu)
    }

    /// Selection options for the reader
    pub fn input_options(&self) -> InputOptions {
        InputOptions {
            default: self.default.clone(),
        }
    }

    fn validated(self) -> Result<Self, MenuError> {
        if self.options.is_empty() {
            return Err(MenuError::NoOptions);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_menu() {
        let menu = Menu::from_toml_str(
            "prompt = \"Pick\"\noptions = [\"a\", \"b\"]\ndefault = \"b\"\n",
            "m.toml",
        )
        .unwrap();
        assert_eq!(menu.prompt, "Pick");
        assert_eq!(menu.options, vec!["a", "b"]);
        assert_eq!(menu.input_options().default_label(), Some("b"));
    }

    #[test]
    fn test_parse_without_default() {
        let menu = Menu::from_toml_str("prompt = \"Pick\"\noptions = [\"a\"]\n", "m.toml").unwrap();
        assert_eq!(menu.default, None);
    }

    #[test]
    fn test_parse_missing_options() {
        let err = Menu::from_toml_str("prompt = \"Pick\"\n", "m.toml").unwrap_err();
        assert_eq!(err.code(), "M002");
        assert!(err.to_string().contains("m.toml"));
    }

    #[test]
    fn test_empty_options_rejected() {
        let err = Menu::from_toml_str("prompt = \"Pick\"\noptions = []\n", "m.toml").unwrap_err();
        assert!(matches!(err, MenuError::NoOptions));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Menu::load(Path::new("/nonexistent/menu.toml")).unwrap_err();
        assert_eq!(err.code(), "M001");
    }

    #[test]
    fn test_resolve_inline() {
        let menu = Menu::resolve(
            Some("Pick".to_string()),
            vec!["x".to_string(), "y".to_string()],
            Some("y".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(menu.options, vec!["x", "y"]);
        assert_eq!(menu.default.as_deref(), Some("y"));
    }

    #[test]
    fn test_resolve_inline_without_prompt() {
        let err = Menu::resolve(None, vec!["x".to_string()], None, None).unwrap_err();
        assert!(matches!(err, MenuError::MissingPrompt));
    }

    #[test]
    fn test_resolve_file_with_default_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "prompt = \"Color?\"\noptions = [\"red\", \"green\"]\ndefault = \"red\"\n"
        )
        .unwrap();

        let menu = Menu::resolve(None, vec![], None, Some(file.path())).unwrap();
        assert_eq!(menu.default.as_deref(), Some("red"));

        let menu = Menu::resolve(None, vec![], Some("green".to_string()), Some(file.path())).unwrap();
        assert_eq!(menu.prompt, "Color?");
        assert_eq!(menu.default.as_deref(), Some("green"));
    }
}
