use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use evelina_models::embed::DEFAULT_COLOR;
use evelina_models::preview::PreviewData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub embed: EmbedConfig,
    /// Sample data used to fill placeholders in previews and payloads.
    #[serde(default)]
    pub preview: PreviewData,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EmbedConfig {
    /// Colour applied to encoded embeds that do not set one.
    #[serde(default = "default_color")]
    pub default_color: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_cache_ttl(),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_cache_ttl() -> u64 {
    300
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config file '{}'", path))?
        } else {
            tracing::info!("Config file not found at '{}', using defaults", path);
            Config::default()
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    // Environment variable overrides
    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(value) = var("EVELINA_DEFAULT_COLOR") {
            self.embed.default_color = value;
        }
        if let Some(value) = var("EVELINA_CACHE_TTL_SECS") {
            match value.parse::<u64>() {
                Ok(parsed) => self.cache.ttl_seconds = parsed,
                Err(_) => tracing::warn!(
                    "Ignoring invalid EVELINA_CACHE_TTL_SECS value '{}'",
                    value
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.embed.default_color, DEFAULT_COLOR);
        assert_eq!(config.preview, PreviewData::default());
        assert!(!path.exists());
    }

    #[test]
    fn file_overrides_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
[embed]
default_color = "#2b2d31"

[preview.guild]
name = "evict"
count = 101

[cache]
ttl_seconds = 5
"##
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.embed.default_color, "#2b2d31");
        assert_eq!(config.preview.guild.name, "evict");
        assert_eq!(config.preview.guild.count, 101);
        assert_eq!(config.preview.user.name, "curet");
        assert_eq!(config.cache.ttl(), Duration::from_secs(5));
    }

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut config = Config::default();
        config.cache.ttl_seconds = 5;
        config.apply_env_overrides(env(&[
            ("EVELINA_DEFAULT_COLOR", "#ff0000"),
            ("EVELINA_CACHE_TTL_SECS", "42"),
        ]));
        assert_eq!(config.embed.default_color, "#ff0000");
        assert_eq!(config.cache.ttl(), Duration::from_secs(42));
    }

    #[test]
    fn unparseable_ttl_override_is_ignored() {
        let mut config = Config::default();
        config.cache.ttl_seconds = 5;
        config.apply_env_overrides(env(&[("EVELINA_CACHE_TTL_SECS", "soon")]));
        assert_eq!(config.cache.ttl_seconds, 5);
        assert_eq!(config.embed.default_color, DEFAULT_COLOR);
    }

    #[test]
    fn absent_env_leaves_config_alone() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[]));
        assert_eq!(config.cache.ttl_seconds, 300);
        assert_eq!(config.embed.default_color, DEFAULT_COLOR);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[embed\ndefault_color = 3").unwrap();
        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }
}
