use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

/// Name of the optional configuration file, looked up in the working directory.
const CONFIG_FILE: &str = "rolodex.toml";

/// Prefix for environment overrides, e.g. `ROLODEX__PARSER__MAX_INPUT_BYTES`.
const ENV_PREFIX: &str = "ROLODEX";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub parser: ParserConfig,
}

/// Knobs for the vCard parser.
///
/// The defaults follow RFC 6350 strictly: CRLF line endings only and no
/// input size limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Rewrite bare LF line endings to CRLF before unfolding.
    pub normalize_newlines: bool,
    /// Reject documents larger than this many bytes.
    pub max_input_bytes: Option<usize>,
}

impl ParserConfig {
    /// ## Summary
    /// Returns whether an input of `len` bytes is within the configured limit.
    #[must_use]
    pub fn accepts_len(&self, len: usize) -> bool {
        self.max_input_bytes.is_none_or(|max| len <= max)
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `rolodex.toml` and `ROLODEX__*` environment
    /// variables. Environment variables take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE, ENV_PREFIX)
    }

    fn load_from(file: &str, env_prefix: &str) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!(?settings, "Configuration loaded");

        Ok(settings)
    }

    /// ## Summary
    /// Builds a `Settings` from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match
    /// the settings schema.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder().set_default("parser.normalize_newlines", false)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_config_default_is_strict() {
        let config = ParserConfig::default();
        assert!(!config.normalize_newlines);
        assert_eq!(config.max_input_bytes, None);
        assert!(config.accepts_len(usize::MAX));
    }

    #[test]
    fn accepts_len_respects_limit() {
        let config = ParserConfig {
            normalize_newlines: false,
            max_input_bytes: Some(10),
        };
        assert!(config.accepts_len(10));
        assert!(!config.accepts_len(11));
    }

    #[test_log::test]
    fn from_toml_overrides_defaults() {
        let settings = Settings::from_toml_str(
            "[parser]\nnormalize_newlines = true\nmax_input_bytes = 4096\n",
        )
        .unwrap();

        assert!(settings.parser.normalize_newlines);
        assert_eq!(settings.parser.max_input_bytes, Some(4096));
    }

    #[test]
    fn from_toml_empty_document_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.parser, ParserConfig::default());
    }

    #[test]
    fn from_toml_rejects_wrong_type() {
        let result = Settings::from_toml_str("[parser]\nmax_input_bytes = \"lots\"\n");
        assert!(result.is_err());
    }

    #[test_log::test]
    fn load_without_sources_uses_defaults() {
        let settings =
            Settings::load_from("rolodex-config-test-missing", "ROLODEX_CONFIG_TEST_UNSET")
                .unwrap();
        assert_eq!(settings.parser, ParserConfig::default());
    }
}
