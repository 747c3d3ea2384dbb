//! press-blog: configuration and post index for a personal blog
//!
//! The site itself is rendered by an external static-site framework. This
//! crate owns the pieces with actual behavior: the site configuration record
//! the framework consumes, a scan of the post documents, and the date-sorted,
//! paginated post index the blog list page renders from.

pub mod commands;
pub mod config;
pub mod content;
pub mod posts;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::ContentLoader;
use posts::{PostListResult, PostLister};

/// Name of the configuration file at the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source directory holding the markdown documents
    pub source_dir: PathBuf,
    /// Where the post index is written
    pub data_path: PathBuf,
}

impl Blog {
    /// Create a new instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance from an already resolved configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let source_dir = base_dir.join(&config.content.src_dir);
        let data_path = base_dir.join(&config.content.data_file);

        Self {
            config,
            base_dir,
            source_dir,
            data_path,
        }
    }

    /// Scan the posts and build the index
    pub fn list_posts(&self) -> Result<PostListResult> {
        let records = ContentLoader::new(self)?.scan();
        let lister = PostLister::new(self.config.content.index_route.as_str());
        Ok(lister.list(&records))
    }

    /// Write the post index to the data file
    pub fn write_data(&self) -> Result<PostListResult> {
        commands::data::run(self, None)
    }

    /// Remove generated files
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::create_post(self, title, None)
    }
}
