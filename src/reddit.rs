use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::time::Duration;

pub const BASE_ORIGIN: &str = "https://www.reddit.com";

/// One post as returned by the listing endpoint. Only the fields the
/// pipeline needs; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub title: String,
    pub permalink: String,
    /// The post's target link (external article or self-post URL).
    /// Logged for diagnostics only; never parsed.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u64,
}

// Listing envelope: {"kind": "Listing", "data": {"children": [{"data": {...}}]}}
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Thing>,
}

#[derive(Debug, Deserialize)]
struct Thing {
    data: Post,
}

/// Anonymous read-only client for Reddit's public listing endpoints.
pub struct RedditClient {
    http: reqwest::Client,
}

impl RedditClient {
    pub fn new(user_agent: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(20))
            .build()
            .context("failed to build http client")?;
        Ok(Self { http })
    }

    /// Fetch the top `limit` posts in `subreddit` ranked over `window`
    /// (e.g. "week"), in the order the API ranks them (highest first).
    pub async fn top_posts(&self, subreddit: &str, window: &str, limit: u32) -> Result<Vec<Post>> {
        let endpoint = format!("{BASE_ORIGIN}/r/{subreddit}/top.json");
        let resp = self
            .http
            .get(&endpoint)
            .query(&[("t", window), ("limit", &limit.to_string()), ("raw_json", "1")])
            .send()
            .await
            .with_context(|| format!("failed to query {endpoint}"))?;
        if !resp.status().is_success() {
            return Err(anyhow!(
                "top listing for r/{} returned {}",
                subreddit,
                resp.status()
            ));
        }
        let text = resp.text().await.context("failed to read listing body")?;
        posts_from_json(&text, limit)
    }
}

/// Decode a listing payload into at most `limit` posts. Split out from the
/// HTTP call so tests can exercise decoding without the network.
///
/// The `limit` query parameter is advisory only — the endpoint pads thin
/// listings and ignores out-of-range values — so the batch is capped here.
pub fn posts_from_json(text: &str, limit: u32) -> Result<Vec<Post>> {
    let listing: Listing = serde_json::from_str(text).context("malformed listing payload")?;
    let mut posts: Vec<Post> = listing.data.children.into_iter().map(|c| c.data).collect();
    posts.truncate(limit as usize);
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing_posts_in_order() {
        let payload = r#"{
            "kind": "Listing",
            "data": {
                "children": [
                    {"kind": "t3", "data": {
                        "title": "Announcing Rust 1.80",
                        "permalink": "/r/rust/comments/abc123/announcing_rust_180/",
                        "url": "https://blog.rust-lang.org/2024/07/25/Rust-1.80.0.html",
                        "score": 912,
                        "num_comments": 187
                    }},
                    {"kind": "t3", "data": {
                        "title": "My first crate",
                        "permalink": "/r/rust/comments/def456/my_first_crate/",
                        "url": "https://www.reddit.com/r/rust/comments/def456/my_first_crate/",
                        "score": 41,
                        "num_comments": 9
                    }}
                ]
            }
        }"#;

        let posts = posts_from_json(payload, 7).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Announcing Rust 1.80");
        assert_eq!(posts[0].permalink, "/r/rust/comments/abc123/announcing_rust_180/");
        assert_eq!(posts[0].score, 912);
        assert_eq!(posts[0].num_comments, 187);
        assert_eq!(posts[1].title, "My first crate");
    }

    #[test]
    fn empty_listing_yields_no_posts() {
        let payload = r#"{"kind": "Listing", "data": {"children": []}}"#;
        let posts = posts_from_json(payload, 7).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn caps_padded_listings_at_limit() {
        let children: Vec<String> = (1..=10)
            .map(|i| {
                format!(
                    r#"{{"kind": "t3", "data": {{"title": "post {i}", "permalink": "/r/rust/comments/p{i}/"}}}}"#
                )
            })
            .collect();
        let payload = format!(
            r#"{{"kind": "Listing", "data": {{"children": [{}]}}}}"#,
            children.join(",")
        );

        let posts = posts_from_json(&payload, 7).unwrap();
        assert_eq!(posts.len(), 7);
        // The cap keeps the head of the ranking, not an arbitrary subset.
        assert_eq!(posts[0].title, "post 1");
        assert_eq!(posts[6].title, "post 7");
    }

    #[test]
    fn missing_counts_default_to_zero() {
        let payload = r#"{
            "kind": "Listing",
            "data": {"children": [
                {"kind": "t3", "data": {"title": "t", "permalink": "/r/rust/comments/x/t/"}}
            ]}
        }"#;
        let posts = posts_from_json(payload, 7).unwrap();
        assert_eq!(posts[0].score, 0);
        assert_eq!(posts[0].num_comments, 0);
        assert_eq!(posts[0].url, "");
    }

    #[test]
    fn rejects_non_listing_payload() {
        assert!(posts_from_json(r#"{"error": 429}"#, 7).is_err());
        assert!(posts_from_json("not json", 7).is_err());
    }
}
