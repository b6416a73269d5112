use url::Url;

/// A validated, ready-to-render news item. Anything that crosses the
/// delivery channel has already passed URL construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub url: Url,
    pub score: i64,
    pub comments: u64,
}
