//! Content loader - scans the source directory for post documents

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::frontmatter;
use super::record::ContentRecord;
use crate::Blog;

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Produces [`ContentRecord`]s for every document matching the posts glob
pub struct ContentLoader {
    source_dir: PathBuf,
    pattern: Pattern,
    clean_urls: bool,
}

impl ContentLoader {
    /// Create a loader from the site's content settings
    pub fn new(blog: &Blog) -> Result<Self> {
        let content = &blog.config.content;
        let pattern = Pattern::new(&content.posts)
            .with_context(|| format!("Invalid posts glob {:?}", content.posts))?;

        Ok(Self {
            source_dir: blog.source_dir.clone(),
            pattern,
            clean_urls: content.clean_urls,
        })
    }

    /// Scan the source directory. Records come back in path order.
    pub fn scan(&self) -> Vec<ContentRecord> {
        if !self.source_dir.exists() {
            tracing::debug!("Source directory {:?} does not exist", self.source_dir);
            return Vec::new();
        }

        let mut records = Vec::new();

        for entry in WalkDir::new(&self.source_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
        {
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(relative) = relative_slash_path(&self.source_dir, path) else {
                continue;
            };
            if !self.pattern.matches_with(&relative, GLOB_OPTIONS) {
                continue;
            }

            match self.load_record(path, &relative) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Scanned {} records from {:?}", records.len(), self.source_dir);
        records
    }

    /// Load a single document
    fn load_record(&self, path: &Path, relative: &str) -> Result<ContentRecord> {
        let content = fs::read_to_string(path)?;
        let (frontmatter, _body) = frontmatter::split(&content);

        Ok(ContentRecord {
            url: route_for(relative, self.clean_urls),
            frontmatter,
        })
    }
}

/// `path` relative to `base`, joined with `/` regardless of platform
fn relative_slash_path(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts: Option<Vec<&str>> = relative
        .components()
        .map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();
    Some(parts?.join("/"))
}

/// Derive the page route for a source document.
///
/// `posts/index.md` maps to `/posts/`, `posts/foo.md` to `/posts/foo.html`
/// (or `/posts/foo` with clean URLs).
pub fn route_for(relative: &str, clean_urls: bool) -> String {
    let stem = relative
        .strip_suffix(".md")
        .or_else(|| relative.strip_suffix(".markdown"))
        .unwrap_or(relative);

    if stem == "index" {
        return "/".to_string();
    }
    if let Some(dir) = stem.strip_suffix("/index") {
        return format!("/{}/", dir);
    }

    if clean_urls {
        format!("/{}", stem)
    } else {
        format!("/{}.html", stem)
    }
}
