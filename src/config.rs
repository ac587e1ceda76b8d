//! Configuration file support for license-sniffer.
//!
//! Provides YAML-based configuration through `license-sniffer.config.yml`
//! files, and the merge of file values with command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::cli::Args;
use license_sniffer::application::dto::{OutputFormat, SniffOptions};
use license_sniffer::shared::Result;

pub const CONFIG_FILENAME: &str = "license-sniffer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub generate_body: Option<bool>,
    pub fail_on_unknown: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after CLI flags are applied over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub options: SniffOptions,
    pub fail_on_unknown: bool,
}

impl Settings {
    /// Flags given on the command line win; a flag that was not given
    /// leaves the config value (or the default) in place.
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let config_format = config
            .and_then(|c| c.format.as_deref())
            .map(|raw| {
                raw.parse::<OutputFormat>()
                    .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
            })
            .transpose()?;

        let generate_body = !args.no_generate_body
            && config.and_then(|c| c.generate_body).unwrap_or(true);
        let fail_on_unknown =
            args.fail_on_unknown || config.and_then(|c| c.fail_on_unknown).unwrap_or(false);

        Ok(Self {
            format: args.format.or(config_format).unwrap_or_default(),
            options: SniffOptions::new(generate_body),
            fail_on_unknown,
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(flags: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("license-sniffer").chain(flags.iter().copied())).unwrap()
    }

    fn config(yaml: &str) -> ConfigFile {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: markdown
generate_body: false
fail_on_unknown: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.generate_body, Some(false));
        assert_eq!(config.fail_on_unknown, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let config = config("format: json\nexclude_packages: [a]\n");
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("exclude_packages"));
    }

    #[test]
    fn test_resolve_without_config_uses_defaults() {
        let settings = Settings::resolve(&args(&[]), None).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.options.generate_body);
        assert!(!settings.fail_on_unknown);
    }

    #[test]
    fn test_resolve_takes_config_values() {
        let config = config("format: md\ngenerate_body: false\nfail_on_unknown: true\n");
        let settings = Settings::resolve(&args(&[]), Some(&config)).unwrap();
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert!(!settings.options.generate_body);
        assert!(settings.fail_on_unknown);
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let config = config("format: markdown\ngenerate_body: true\n");
        let settings = Settings::resolve(
            &args(&["--format", "json", "--no-generate-body", "--fail-on-unknown"]),
            Some(&config),
        )
        .unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.options.generate_body);
        assert!(settings.fail_on_unknown);
    }

    #[test]
    fn test_resolve_rejects_invalid_config_format() {
        let config = config("format: xml\n");
        let err = Settings::resolve(&args(&[]), Some(&config)).unwrap_err();
        assert!(format!("{}", err).contains("Invalid config"));
    }
}
