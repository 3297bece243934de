use doccomment_engine::{ForeignIndex, OutputFormat, RenderOptions, SymbolTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid note marker {0:?}: expected two or more uppercase letters")]
    InvalidNoteMarker(String),

    #[error("Invalid heading level {0}: expected 1 to 6")]
    InvalidHeadingLevel(u8),

    #[error("Failed to read symbol index at {index_path}: {source}")]
    SymbolIndexReadError {
        index_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse symbol index at {index_path}: {source}")]
    SymbolIndexParseError {
        index_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Note markers shown in the rendered notes section.
    pub allowed_note_markers: Vec<String>,
    pub output_format: OutputFormat,
    /// Output level of top-level comment headings.
    pub heading_level: u8,
    /// Base URL for links into other packages.
    pub foreign_link_base: String,
    /// TOML file listing the exported names of other packages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_index: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            allowed_note_markers: options.allowed_note_markers.into_iter().collect(),
            output_format: options.format,
            heading_level: options.heading_level,
            foreign_link_base: ForeignIndex::DEFAULT_BASE_URL.to_string(),
            symbol_index: None,
        }
    }
}

/// On-disk symbol index:
///
/// ```toml
/// [packages]
/// "net/http" = ["Client", "Get"]
/// fmt = ["Println"]
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
struct SymbolIndexFile {
    #[serde(default)]
    packages: BTreeMap<String, Vec<String>>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        // Expand shell variables and tilde in the symbol index path
        config.symbol_index = config
            .symbol_index
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/doccomment");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(marker) = self
            .allowed_note_markers
            .iter()
            .find(|m| m.len() < 2 || !m.chars().all(|c| c.is_ascii_uppercase()))
        {
            return Err(ConfigError::InvalidNoteMarker(marker.clone()));
        }
        if !(1..=6).contains(&self.heading_level) {
            return Err(ConfigError::InvalidHeadingLevel(self.heading_level));
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.output_format,
            allowed_note_markers: self.allowed_note_markers.iter().cloned().collect(),
            heading_level: self.heading_level,
        }
    }

    /// Loads the configured symbol index. Without one the index is empty
    /// and only local names resolve.
    pub fn load_symbol_index(&self) -> Result<ForeignIndex, ConfigError> {
        let mut index = ForeignIndex::new(self.foreign_link_base.as_str());
        let Some(index_path) = &self.symbol_index else {
            return Ok(index);
        };

        let content = std::fs::read_to_string(index_path).map_err(|source| {
            ConfigError::SymbolIndexReadError {
                index_path: index_path.clone(),
                source,
            }
        })?;
        let file: SymbolIndexFile =
            toml::from_str(&content).map_err(|source| ConfigError::SymbolIndexParseError {
                index_path: index_path.clone(),
                source,
            })?;

        log::debug!(
            "loaded {} packages from symbol index {}",
            file.packages.len(),
            index_path.display()
        );
        for (import_path, names) in file.packages {
            index.insert_package(import_path, names);
        }
        Ok(index)
    }

    /// A symbol table with no local names, backed by the symbol index.
    pub fn symbol_table(&self) -> Result<SymbolTable, ConfigError> {
        Ok(SymbolTable::with_foreign(self.load_symbol_index()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doccomment_engine::{CommentBlock, parse_comment, render};
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/doccomment/config.toml"));
    }

    #[test]
    fn test_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from_path(temp_dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "").unwrap();

        let config = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.allowed_note_markers, vec!["BUG"]);
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_load_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
allowed_note_markers = ["BUG", "TODO"]
output_format = "text"
heading_level = 2
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&config_path).unwrap().unwrap();
        let options = config.render_options();
        assert_eq!(options.format, OutputFormat::Plaintext);
        assert_eq!(options.heading_level, 2);
        assert!(options.allowed_note_markers.contains("TODO"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        std::fs::write(&config_path, "allowed_note_markers = [\"Bug\"]").unwrap();
        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNoteMarker(m) if m == "Bug"));

        std::fs::write(&config_path, "heading_level = 7").unwrap();
        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeadingLevel(7)));

        std::fs::write(&config_path, "output_format = \"pdf\"").unwrap();
        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let original = Config {
            output_format: OutputFormat::Markdown,
            symbol_index: Some(PathBuf::from("/tmp/symbols.toml")),
            ..Config::default()
        };
        original.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_symbol_index_links_foreign_packages() {
        let temp_dir = TempDir::new().unwrap();
        let index_path = temp_dir.path().join("symbols.toml");
        std::fs::write(
            &index_path,
            r#"
[packages]
"net/http" = ["Client", "Get"]
fmt = ["Println"]
"#,
        )
        .unwrap();

        let config = Config {
            symbol_index: Some(index_path),
            ..Config::default()
        };
        let symbols = config.symbol_table().unwrap();
        let doc = parse_comment(&CommentBlock::from_text("Use [http.Client] or [fmt]."));
        let rendered = render(&doc, &symbols, &config.render_options());
        assert_eq!(
            rendered.body,
            "<p>Use <a href=\"https://pkg.go.dev/net/http#Client\">http.Client</a> or <a href=\"https://pkg.go.dev/fmt\">fmt</a>.</p>\n"
        );
    }

    #[test]
    fn test_missing_symbol_index_is_an_error() {
        let config = Config {
            symbol_index: Some(PathBuf::from("/nonexistent/symbols.toml")),
            ..Config::default()
        };
        assert!(matches!(
            config.load_symbol_index(),
            Err(ConfigError::SymbolIndexReadError { .. })
        ));
    }

    #[test]
    fn test_without_symbol_index_the_index_is_empty() {
        let config = Config {
            foreign_link_base: "http://localhost:6060/pkg".into(),
            ..Config::default()
        };
        let index = config.load_symbol_index().unwrap();
        assert!(index.is_empty());
        assert_eq!(index.base_url(), "http://localhost:6060/pkg/");
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("DOCCOMMENT_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$DOCCOMMENT_TEST_VAR/symbols.toml");
        let expanded = Config::expand_path(&path);
        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/symbols.toml")));

        unsafe {
            env::remove_var("DOCCOMMENT_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(Path::new("~/symbols.toml")).unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("symbols.toml"));
    }
}
