//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

/// Default `_config.yml`, kept in step with `SiteConfig::default()`
const CONFIG_TEMPLATE: &str = r#"# Site
title: My Blog
description: ''
lang: en-US
head: []

# Default theme
themeConfig:
  search:
    provider: local
  outline:
    level: [2, 3]
    label: On this page
  nav:
    - { text: Home, link: / }
    - { text: Blog, link: /posts/ }
    - { text: About, link: /about }
  docFooter:
    prev: Previous page
    next: Next page
  socialLinks:
    - icon: rss
      link: /feed.xml
      ariaLabel: RSS Feed
  footer:
    message: Powered by VitePress
    copyright: ''
  appearance: true

# Post index
content:
  srcDir: docs
  posts: posts/*.md
  indexRoute: /posts/
  cleanUrls: false
  dataFile: posts.data.json
"#;

const HOME_PAGE: &str = r#"---
layout: home
---
"#;

const INDEX_PAGE: &str = r#"---
title: Blog
---

<BlogList />
"#;

const FIRST_POST: &str = r#"---
title: Hello World
date: {{ date }}
---

Welcome to the blog.
"#;

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let posts_dir = target_dir.join("docs/posts");
    fs::create_dir_all(&posts_dir)?;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    write_if_missing(&target_dir.join(CONFIG_FILE), CONFIG_TEMPLATE)?;
    write_if_missing(&target_dir.join("docs/index.md"), HOME_PAGE)?;
    write_if_missing(&posts_dir.join("index.md"), INDEX_PAGE)?;
    write_if_missing(
        &posts_dir.join("hello-world.md"),
        &FIRST_POST.replace("{{ date }}", &today),
    )?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}
