use std::fs;
use std::path::Path;

use anyhow::Context;
use engine_logging::engine_info;
use fileharvest_core::HarvestConfig;

use crate::cli::Cli;

/// Loads the config file if one is given, then applies command-line
/// overrides on top.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<HarvestConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => HarvestConfig::default(),
    };
    if let Some(root) = &cli.output_root {
        config.output_root = root.clone();
    }
    if let Some(url) = &cli.source_url {
        config.source_url = url.clone();
    }
    if let Some(domain) = &cli.base_domain {
        config.base_domain = domain.clone();
    }
    Ok(config)
}

pub fn load_config(path: &Path) -> anyhow::Result<HarvestConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: HarvestConfig = ron::from_str(&text)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    engine_info!("Loaded configuration from {}", path.display());
    Ok(config)
}

pub fn render_config(config: &HarvestConfig) -> anyhow::Result<String> {
    let pretty = ron::ser::PrettyConfig::new();
    ron::ser::to_string_pretty(config, pretty).context("serializing configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("harvest.ron");
        fs::write(
            &path,
            r#"(source_url: "https://example.com/downloads", request_timeout_secs: 30)"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.source_url, "https://example.com/downloads");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.categories, HarvestConfig::default().categories);
    }

    #[test]
    fn rendered_default_config_loads_back() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("harvest.ron");
        fs::write(&path, render_config(&HarvestConfig::default()).unwrap()).unwrap();

        assert_eq!(load_config(&path).unwrap(), HarvestConfig::default());
    }

    #[test]
    fn cli_flags_override_file_values() {
        let cli = Cli::try_parse_from([
            "fileharvest",
            "--output-root",
            "/srv/harvest",
            "--base-domain",
            "https://mirror.example.com",
        ])
        .unwrap();

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.output_root, PathBuf::from("/srv/harvest"));
        assert_eq!(config.base_domain, "https://mirror.example.com");
        assert_eq!(config.source_url, HarvestConfig::default().source_url);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Path::new("/nonexistent/harvest.ron")).unwrap_err();
        assert!(err.to_string().contains("reading config file"));
    }
}
