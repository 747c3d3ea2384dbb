//! Post listing - orders scanned records for the blog index
//!
//! The lister is a pure transform: it drops the listing page itself, sorts
//! the remaining records newest first, and attaches pagination metadata.
//! Scanning and rendering happen elsewhere.

pub mod date;

use serde::Serialize;

use crate::content::ContentRecord;

/// Posts shown per index page
pub const PAGE_SIZE: usize = 10;

/// Route of the blog index page
pub const INDEX_ROUTE: &str = "/posts/";

/// Sorted, paginated view over the blog's posts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResult {
    /// Posts, newest first
    pub posts: Vec<ContentRecord>,
    pub page_size: usize,
    /// `ceil(posts.len() / page_size)`; zero when there are no posts
    pub total_pages: usize,
}

/// Navigation metadata for one index page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub per_page: usize,
    pub total: usize,
    pub current: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl PostListResult {
    /// Posts on the 1-based page `page`, or `None` past either end
    pub fn page(&self, page: usize) -> Option<&[ContentRecord]> {
        if page == 0 || page > self.total_pages {
            return None;
        }
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.posts.len());
        Some(&self.posts[start..end])
    }

    /// Navigation metadata for the 1-based page `page`
    pub fn pagination(&self, page: usize) -> Option<Pagination> {
        if page == 0 || page > self.total_pages {
            return None;
        }
        Some(Pagination {
            per_page: self.page_size,
            total: self.total_pages,
            current: page,
            prev: (page > 1).then(|| page - 1),
            next: (page < self.total_pages).then(|| page + 1),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Turns raw content records into a [`PostListResult`]
#[derive(Debug, Clone)]
pub struct PostLister {
    index_route: String,
}

impl Default for PostLister {
    fn default() -> Self {
        Self::new(INDEX_ROUTE)
    }
}

impl PostLister {
    pub fn new(index_route: impl Into<String>) -> Self {
        Self {
            index_route: index_route.into(),
        }
    }

    pub fn index_route(&self) -> &str {
        &self.index_route
    }

    /// Filter, sort and paginate `records`.
    ///
    /// Records at the index route are dropped. The rest are ordered by
    /// descending frontmatter `date`; missing or unparsable dates count as
    /// the epoch. Equal dates keep their input order.
    pub fn list(&self, records: &[ContentRecord]) -> PostListResult {
        let mut keyed: Vec<_> = records
            .iter()
            .filter(|record| record.url != self.index_route)
            .map(|record| (date::sort_key(record.date()), record))
            .collect();

        // Vec::sort_by is stable
        keyed.sort_by(|a, b| b.0.cmp(&a.0));

        let posts: Vec<ContentRecord> = keyed
            .into_iter()
            .map(|(_, record)| record.clone())
            .collect();
        let total_pages = posts.len().div_ceil(PAGE_SIZE);

        tracing::debug!(
            "Listed {} of {} records across {} pages",
            posts.len(),
            records.len(),
            total_pages
        );

        PostListResult {
            posts,
            page_size: PAGE_SIZE,
            total_pages,
        }
    }
}

/// [`PostLister::list`] with the default index route
pub fn list(records: &[ContentRecord]) -> PostListResult {
    PostLister::default().list(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(url: &str, date: Option<&str>) -> ContentRecord {
        let record = ContentRecord::new(url);
        match date {
            Some(d) => record.with("date", d),
            None => record,
        }
    }

    fn urls(result: &PostListResult) -> Vec<&str> {
        result.posts.iter().map(|p| p.url.as_str()).collect()
    }

    #[test]
    fn test_sorts_newest_first_and_drops_index() {
        let records = vec![
            post("/posts/", None).with("date", serde_yaml::Value::Null),
            post("/posts/a", Some("2024-01-01")),
            post("/posts/b", Some("2024-06-01")),
        ];

        let result = list(&records);
        assert_eq!(urls(&result), ["/posts/b", "/posts/a"]);
        assert_eq!(result.page_size, 10);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let records: Vec<_> = (0..25)
            .map(|i| {
                let date = format!("2024-01-{:02}", 25 - i);
                post(&format!("/posts/p{}", i), Some(date.as_str()))
            })
            .collect();

        let result = list(&records);
        assert_eq!(result.posts.len(), 25);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_undated_post_is_kept() {
        let result = list(&[post("/posts/x", None)]);
        assert_eq!(urls(&result), ["/posts/x"]);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_empty_input_has_zero_pages() {
        let result = list(&[]);
        assert!(result.is_empty());
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.page(1), None);
        assert_eq!(result.pagination(1), None);
    }

    #[test]
    fn test_only_index_page() {
        let result = list(&[post("/posts/", Some("2024-01-01"))]);
        assert!(result.is_empty());
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn test_undated_posts_sort_last() {
        let records = vec![
            post("/posts/undated", None),
            post("/posts/garbage", Some("not a date")),
            post("/posts/dated", Some("2020-05-05")),
        ];

        let result = list(&records);
        assert_eq!(
            urls(&result),
            ["/posts/dated", "/posts/undated", "/posts/garbage"]
        );
    }

    #[test]
    fn test_pre_epoch_dates_sort_after_undated() {
        let records = vec![
            post("/posts/1969", Some("1969-07-20")),
            post("/posts/undated", None),
            post("/posts/2001", Some("2001-01-01")),
        ];

        let result = list(&records);
        assert_eq!(
            urls(&result),
            ["/posts/2001", "/posts/undated", "/posts/1969"]
        );
    }

    #[test]
    fn test_offset_dates_sort_by_instant() {
        let records = vec![
            post("/posts/old", Some("2020-01-01")),
            post("/posts/new", Some("2024-01-15T10:30:00+0800")),
            post("/posts/hexo-style", Some("2024-01-15 09:30:00 +0000")),
        ];

        let result = list(&records);
        assert_eq!(
            urls(&result),
            ["/posts/hexo-style", "/posts/new", "/posts/old"]
        );
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let records = vec![
            post("/posts/first", Some("2024-03-01")),
            post("/posts/newer", Some("2024-04-01")),
            post("/posts/second", Some("2024-03-01")),
            post("/posts/none-1", None),
            post("/posts/third", Some("2024-03-01T00:00:00Z")),
            post("/posts/none-2", None),
        ];

        let result = list(&records);
        assert_eq!(
            urls(&result),
            [
                "/posts/newer",
                "/posts/first",
                "/posts/second",
                "/posts/third",
                "/posts/none-1",
                "/posts/none-2",
            ]
        );
    }

    #[test]
    fn test_index_route_match_is_exact() {
        let records = vec![
            post("/posts", Some("2024-01-01")),
            post("/posts/index.html", Some("2024-01-02")),
            post("/posts/", Some("2024-01-03")),
        ];

        let result = list(&records);
        assert_eq!(urls(&result), ["/posts/index.html", "/posts"]);
    }

    #[test]
    fn test_every_index_occurrence_is_dropped() {
        let records = vec![
            post("/posts/", None),
            post("/posts/a", None),
            post("/posts/", None),
        ];
        assert_eq!(urls(&list(&records)), ["/posts/a"]);
    }

    #[test]
    fn test_custom_index_route() {
        let lister = PostLister::new("/blog/");
        let records = vec![post("/blog/", None), post("/posts/", None)];
        let result = lister.list(&records);
        assert_eq!(urls(&result), ["/posts/"]);
        assert_eq!(lister.index_route(), "/blog/");
    }

    #[test]
    fn test_input_is_untouched() {
        let records = vec![
            post("/posts/a", Some("2020-01-01")),
            post("/posts/b", Some("2021-01-01")),
        ];
        let before = records.clone();
        let _ = list(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn test_properties_hold_for_mixed_input() {
        let dates = [
            Some("2023-02-01"),
            None,
            Some("2021-12-31 23:59"),
            Some("bogus"),
            Some("2023-02-01"),
            Some("2024/07/04"),
            None,
        ];
        let mut records: Vec<_> = dates
            .iter()
            .enumerate()
            .map(|(i, d)| post(&format!("/posts/{}", i), *d))
            .collect();
        records.insert(3, post(INDEX_ROUTE, Some("2099-01-01")));

        let result = list(&records);
        assert_eq!(result.posts.len(), records.len() - 1);
        assert!(result.posts.iter().all(|p| p.url != INDEX_ROUTE));
        assert!(result.posts.windows(2).all(|w| {
            date::sort_key(w[0].date()) >= date::sort_key(w[1].date())
        }));
        assert_eq!(result.total_pages, result.posts.len().div_ceil(PAGE_SIZE));
    }

    #[test]
    fn test_pages() {
        let records: Vec<_> = (0..23)
            .map(|i| {
                let date = format!("2024-01-{:02}", i + 1);
                post(&format!("/posts/{}", i), Some(date.as_str()))
            })
            .collect();
        let result = list(&records);

        assert_eq!(result.total_pages, 3);
        assert_eq!(result.page(0), None);
        assert_eq!(result.page(1).map(<[_]>::len), Some(10));
        assert_eq!(result.page(3).map(<[_]>::len), Some(3));
        assert_eq!(result.page(4), None);
        assert_eq!(result.page(1).unwrap()[0].url, "/posts/22");

        let first = result.pagination(1).unwrap();
        assert_eq!((first.prev, first.next), (None, Some(2)));
        let last = result.pagination(3).unwrap();
        assert_eq!((last.prev, last.next), (Some(2), None));
        assert_eq!(last.total, 3);

        let json = serde_json::to_value(first).unwrap();
        assert_eq!(json["perPage"], 10);
        assert_eq!(json["next"], 2);
        assert!(json["prev"].is_null());
    }

    #[test]
    fn test_serialized_shape() {
        let result = list(&[post("/posts/a", Some("2024-01-01")).with("title", "A")]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["posts"][0]["url"], "/posts/a");
        assert_eq!(json["posts"][0]["frontmatter"]["title"], "A");
        assert_eq!(json["posts"][0]["frontmatter"]["date"], "2024-01-01");
    }
}
