//! Write the post index consumed by the blog list page

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::posts::PostListResult;
use crate::Blog;

/// Build the post index and write it as JSON.
///
/// `out` overrides the configured data file and is resolved against the
/// site root when relative; `-` writes to stdout.
pub fn run(blog: &Blog, out: Option<&Path>) -> Result<PostListResult> {
    let result = blog.list_posts()?;
    let json = serde_json::to_string_pretty(&result)?;

    match out {
        Some(path) if path == Path::new("-") => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
        _ => {
            let target = match out {
                Some(path) => blog.base_dir.join(path),
                None => blog.data_path.clone(),
            };
            let path = target.as_path();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!(
                "Wrote {} posts ({} pages) to {:?}",
                result.posts.len(),
                result.total_pages,
                path
            );
        }
    }

    Ok(result)
}
