//! Content module - scans post documents into content records

pub mod frontmatter;
pub mod loader;
mod record;

pub use loader::ContentLoader;
pub use record::{ContentRecord, Frontmatter};
