//! Theme configuration (`themeConfig` in _config.yml)
//!
//! These records are handed to the framework's default theme untouched; the
//! crate only reads them to validate and to print the resolved config.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default theme options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub search: SearchConfig,
    pub outline: OutlineConfig,
    pub nav: Vec<NavItem>,
    pub doc_footer: DocFooter,
    pub social_links: Vec<SocialLink>,
    pub footer: Footer,
    pub appearance: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            outline: OutlineConfig::default(),
            nav: vec![
                NavItem::new("Home", "/"),
                NavItem::new("Blog", "/posts/"),
                NavItem::new("About", "/about"),
            ],
            doc_footer: DocFooter::default(),
            social_links: vec![SocialLink {
                icon: SocialIcon::Named("rss".to_string()),
                url: "/feed.xml".to_string(),
                aria_label: Some("RSS Feed".to_string()),
            }],
            footer: Footer::default(),
            appearance: true,
        }
    }
}

/// Search provider selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    #[default]
    Local,
    Algolia,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub provider: SearchProvider,
    /// Provider specific options, passed through as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_yaml::Value>,
}

/// Heading depth shown in the in-page outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutlineLevel {
    Depth(u8),
    Range(u8, u8),
    Keyword(OutlineKeyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineKeyword {
    /// Every heading from h2 to h6
    Deep,
}

impl OutlineLevel {
    /// Inclusive heading range covered by this level
    pub fn bounds(&self) -> (u8, u8) {
        match *self {
            OutlineLevel::Depth(n) => (n, n),
            OutlineLevel::Range(lo, hi) => (lo, hi),
            OutlineLevel::Keyword(OutlineKeyword::Deep) => (2, 6),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    pub level: OutlineLevel,
    pub label: String,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            level: OutlineLevel::Range(2, 3),
            label: "On this page".to_string(),
        }
    }
}

/// A top navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(rename = "text")]
    pub label: String,
    #[serde(rename = "link")]
    pub route: String,
}

impl NavItem {
    pub fn new(label: &str, route: &str) -> Self {
        Self {
            label: label.to_string(),
            route: route.to_string(),
        }
    }
}

/// Labels for the previous/next links under each document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocFooter {
    pub prev: String,
    pub next: String,
}

impl Default for DocFooter {
    fn default() -> Self {
        Self {
            prev: "Previous page".to_string(),
            next: "Next page".to_string(),
        }
    }
}

/// Icon of a social link: either a theme icon name or inline SVG markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SocialIcon {
    Named(String),
    Svg { svg: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub icon: SocialIcon,
    #[serde(rename = "link")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

impl SocialLink {
    /// Whether this link points at a feed document (RSS/Atom)
    pub fn is_feed(&self) -> bool {
        let path = self.url.split(['?', '#']).next().unwrap_or_default();
        path.ends_with(".xml") || path.ends_with(".rss") || path.ends_with(".atom")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            message: "Powered by VitePress".to_string(),
            copyright: String::new(),
        }
    }
}

/// A `<head>` tag: `[tag, attrs]` or `[tag, attrs, content]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeadTag {
    WithContent(String, IndexMap<String, String>, String),
    Void(String, IndexMap<String, String>),
}

impl HeadTag {
    pub fn tag(&self) -> &str {
        match self {
            HeadTag::WithContent(tag, _, _) | HeadTag::Void(tag, _) => tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_social_links() {
        let yaml = r#"
- icon: github
  link: https://github.com/someone
- icon:
    svg: '<svg xmlns="http://www.w3.org/2000/svg"></svg>'
  link: /feed.xml
  ariaLabel: RSS Feed
"#;
        let links: Vec<SocialLink> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].icon, SocialIcon::Named("github".to_string()));
        assert!(!links[0].is_feed());
        assert!(matches!(links[1].icon, SocialIcon::Svg { .. }));
        assert_eq!(links[1].aria_label.as_deref(), Some("RSS Feed"));
        assert!(links[1].is_feed());
    }

    #[test]
    fn test_outline_levels() {
        let range: OutlineLevel = serde_yaml::from_str("[2, 3]").unwrap();
        assert_eq!(range, OutlineLevel::Range(2, 3));

        let depth: OutlineLevel = serde_yaml::from_str("2").unwrap();
        assert_eq!(depth.bounds(), (2, 2));

        let deep: OutlineLevel = serde_yaml::from_str("deep").unwrap();
        assert_eq!(deep.bounds(), (2, 6));
    }

    #[test]
    fn test_head_tags() {
        let yaml = r#"
- [link, { rel: icon, href: /favicon.svg }]
- [style, {}, ".title { font-weight: 800; }"]
"#;
        let head: Vec<HeadTag> = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(head[0], HeadTag::Void(..)));
        assert_eq!(head[0].tag(), "link");
        match &head[0] {
            HeadTag::Void(_, attrs) => assert_eq!(attrs["href"], "/favicon.svg"),
            other => panic!("unexpected head tag {:?}", other),
        }
        assert!(matches!(head[1], HeadTag::WithContent(..)));
        assert_eq!(head[1].tag(), "style");
    }

    #[test]
    fn test_nav_uses_framework_keys() {
        let item = NavItem::new("Blog", "/posts/");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["text"], "Blog");
        assert_eq!(json["link"], "/posts/");
    }
}
