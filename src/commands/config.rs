//! Print the resolved site configuration

use anyhow::Result;

use crate::Blog;

/// The configuration as the framework receives it
pub fn render(blog: &Blog) -> Result<String> {
    Ok(serde_json::to_string_pretty(&blog.config)?)
}

pub fn run(blog: &Blog) -> Result<()> {
    match blog.config.feed_link() {
        Some(link) => tracing::info!("Feed linked from social links: {}", link),
        None => tracing::warn!("No social link points at a feed document"),
    }
    println!("{}", render(blog)?);
    Ok(())
}
