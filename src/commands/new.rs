//! Create a new post

use anyhow::{bail, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::Blog;

/// Create a new post under the posts directory and return its path
pub fn create_post(blog: &Blog, title: &str, name: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let target_dir = blog.source_dir.join(posts_dir(&blog.config.content.posts));
    fs::create_dir_all(&target_dir)?;

    let stem = match name {
        Some(name) => name.trim_end_matches(".md").to_string(),
        None => slug::slugify(title),
    };
    if stem.is_empty() || stem == "index" {
        bail!("Cannot derive a post file name from {:?}", title);
    }
    let mut components = Path::new(&stem).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        bail!("Post name {:?} must be a plain file name", stem);
    }

    let file_path = target_dir.join(format!("{}.md", stem));
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\n---\n",
        serde_yaml::to_string(title)?.trim_end(),
        now.format("%Y-%m-%d %H:%M:%S")
    );
    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Literal directory prefix of the posts glob (`posts/*.md` -> `posts`)
fn posts_dir(glob: &str) -> PathBuf {
    let dir: PathBuf = glob
        .split('/')
        .take_while(|part| !part.contains(['*', '?', '[']))
        .collect();

    // A glob without wildcards names a single file
    if dir.extension().is_some() {
        dir.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        dir
    }
}
