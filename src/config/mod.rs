//! Configuration module

mod site;
mod theme;

pub use site::ConfigError;
pub use site::ContentConfig;
pub use site::SiteConfig;
pub use theme::DocFooter;
pub use theme::Footer;
pub use theme::HeadTag;
pub use theme::NavItem;
pub use theme::OutlineConfig;
pub use theme::OutlineKeyword;
pub use theme::OutlineLevel;
pub use theme::SearchConfig;
pub use theme::SearchProvider;
pub use theme::SocialIcon;
pub use theme::SocialLink;
pub use theme::ThemeConfig;
