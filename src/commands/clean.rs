//! Remove generated files

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Delete the post index data file
pub fn run(blog: &Blog) -> Result<()> {
    if blog.data_path.exists() {
        fs::remove_file(&blog.data_path)?;
        tracing::info!("Deleted: {:?}", blog.data_path);
    } else {
        tracing::debug!("Nothing to clean at {:?}", blog.data_path);
    }

    Ok(())
}
