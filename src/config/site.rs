//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::theme::{HeadTag, OutlineLevel, ThemeConfig};

/// Errors raised while loading or validating the site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Main site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub lang: String,
    pub head: Vec<HeadTag>,
    pub theme_config: ThemeConfig,
    pub content: ContentConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            lang: "en-US".to_string(),
            head: Vec::new(),
            theme_config: ThemeConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Check the constraints serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (lo, hi) = self.theme_config.outline.level.bounds();
        if !(1..=6).contains(&lo) || !(1..=6).contains(&hi) {
            return Err(ConfigError::Invalid(format!(
                "outline level {:?} must stay within 1..=6",
                self.theme_config.outline.level
            )));
        }
        if let OutlineLevel::Range(lo, hi) = self.theme_config.outline.level {
            if lo > hi {
                return Err(ConfigError::Invalid(format!(
                    "outline range [{}, {}] is reversed",
                    lo, hi
                )));
            }
        }

        let route = &self.content.index_route;
        if !route.starts_with('/') || !route.ends_with('/') {
            return Err(ConfigError::Invalid(format!(
                "index route {:?} must start and end with '/'",
                route
            )));
        }

        if self.head.iter().any(|tag| tag.tag().trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "head entry without a tag name".to_string(),
            ));
        }

        if let Some(item) = self
            .theme_config
            .nav
            .iter()
            .find(|item| item.route.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "nav item {:?} has no link",
                item.label
            )));
        }
        if self
            .theme_config
            .social_links
            .iter()
            .any(|link| link.url.trim().is_empty())
        {
            return Err(ConfigError::Invalid(
                "social link without a link target".to_string(),
            ));
        }

        Ok(())
    }

    /// The social link pointing at the feed, if any
    pub fn feed_link(&self) -> Option<&str> {
        self.theme_config
            .social_links
            .iter()
            .find(|link| link.is_feed())
            .map(|link| link.url.as_str())
    }
}

/// Where posts live and how their records are produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    /// Source directory, relative to the site root
    pub src_dir: String,
    /// Glob selecting post documents, relative to `src_dir`
    pub posts: String,
    /// Route of the listing page itself
    pub index_route: String,
    /// Drop the `.html` suffix from derived routes
    pub clean_urls: bool,
    /// Output file for the post index, relative to the site root
    pub data_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            src_dir: "docs".to_string(),
            posts: "posts/*.md".to_string(),
            index_route: crate::posts::INDEX_ROUTE.to_string(),
            clean_urls: false,
            data_file: "posts.data.json".to_string(),
        }
    }
}
