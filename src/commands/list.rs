//! List the blog's posts

use anyhow::{bail, Result};

use crate::posts::date::display_date;
use crate::posts::PostListResult;
use crate::Blog;

/// Print the post index, optionally restricted to one page
pub fn run(blog: &Blog, page: Option<usize>) -> Result<()> {
    let result = blog.list_posts()?;
    print!("{}", render(&result, page)?);
    Ok(())
}

/// Text listing of `result`, one post per line
pub fn render(result: &PostListResult, page: Option<usize>) -> Result<String> {
    let mut out = String::new();

    let posts = match page {
        Some(n) => match (result.page(n), result.pagination(n)) {
            (Some(posts), Some(nav)) => {
                out.push_str(&format!("Page {} of {}", nav.current, nav.total));
                let links: Vec<String> = nav
                    .prev
                    .map(|p| format!("prev {}", p))
                    .into_iter()
                    .chain(nav.next.map(|n| format!("next {}", n)))
                    .collect();
                if !links.is_empty() {
                    out.push_str(&format!(" ({})", links.join(", ")));
                }
                out.push_str(":\n");
                posts
            }
            _ => bail!(
                "Page {} does not exist ({} pages available)",
                n,
                result.total_pages
            ),
        },
        None => {
            out.push_str(&format!(
                "Posts ({}, {} pages of {}):\n",
                result.posts.len(),
                result.total_pages,
                result.page_size
            ));
            &result.posts[..]
        }
    };

    for post in posts {
        out.push_str(&format!(
            "  {} - {} [{}]\n",
            display_date(post.date()),
            post.title().unwrap_or("Untitled"),
            post.url
        ));
    }

    Ok(out)
}
