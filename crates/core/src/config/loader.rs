use crate::config::types::{ConfigFile, ResolvedConfig, ResolvedNotion};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("cannot expand '{0}': undefined variable or no home directory")]
    Expand(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration.
    ///
    /// An explicit `config_path` must exist. Without one, the default path is
    /// tried and built-in defaults are used when it is absent.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = default_config_path();
                if !default.exists() {
                    debug!(path = %default.display(), "no config file, using defaults");
                    return Self::parse_str(DEFAULT_CONFIG, None);
                }
                default
            }
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        Self::parse_str(&s, Some(path))
    }

    /// Parse and resolve TOML config text.
    pub fn parse_str(
        s: &str,
        source: Option<PathBuf>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let origin = source
            .as_ref()
            .map_or_else(|| "<defaults>".to_string(), |p| p.display().to_string());

        let cf: ConfigFile =
            toml::from_str(s).map_err(|e| ConfigError::ParseError(origin, e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        Self::resolve(cf, source)
    }

    fn resolve(
        cf: ConfigFile,
        source: Option<PathBuf>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let excluded_folders = cf
            .output
            .excluded_folders
            .iter()
            .map(|f| expand_path(f))
            .collect::<Result<Vec<_>, _>>()?;

        // Resolve log file path if present
        let mut logging = cf.logging;
        if let Some(file) = logging.file.take() {
            logging.file = Some(expand_path(&file.to_string_lossy())?);
        }

        let notion = ResolvedNotion {
            output_dir: expand_path(&cf.notion.output_dir)?,
            token_env: cf.notion.token_env,
            api_base: cf.notion.api_base.trim_end_matches('/').to_string(),
            version: cf.notion.version,
        };

        Ok(ResolvedConfig {
            source,
            format: cf.output.format,
            related_heading: cf.output.related_heading,
            collision: cf.output.collision,
            excluded_folders,
            logging,
            notion,
        })
    }
}

const DEFAULT_CONFIG: &str = "version = 1\n";

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("mdqmd").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("mdqmd").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::Expand(input.to_string()))?;
    Ok(PathBuf::from(expanded.to_string()))
}
