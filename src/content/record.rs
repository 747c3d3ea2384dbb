//! Content records handed from the scan stage to the post lister

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Parsed frontmatter keys, in document order
pub type Frontmatter = IndexMap<String, serde_yaml::Value>;

/// One scanned source document: its route and its frontmatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Route of the rendered page (e.g. `/posts/hello.html`)
    pub url: String,

    /// Frontmatter metadata, empty when the document has none
    #[serde(default)]
    pub frontmatter: Frontmatter,
}

impl ContentRecord {
    /// Create a record without frontmatter
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            frontmatter: Frontmatter::new(),
        }
    }

    /// Builder-style setter for a single frontmatter key
    pub fn with(mut self, key: &str, value: impl Into<serde_yaml::Value>) -> Self {
        self.frontmatter.insert(key.to_string(), value.into());
        self
    }

    /// Raw `date` frontmatter value, if present
    pub fn date(&self) -> Option<&serde_yaml::Value> {
        self.frontmatter.get("date")
    }

    /// `title` frontmatter value, if it is a string
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.get("title").and_then(|v| v.as_str())
    }
}
