use super::model::NewsItem;
use crate::reddit::{Post, RedditClient, BASE_ORIGIN};
use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use url::Url;

/// Everything the fetcher task needs, owned so it can move into the task.
#[derive(Debug, Clone)]
pub struct FetchParams {
    pub subreddit: String,
    pub window: String,
    pub limit: u32,
    pub user_agent: String,
}

/// Fetch one page of top posts and stream the valid ones into `tx`.
///
/// Setup and query failures come back as `Err`; the caller decides what to
/// do with them. A single post failing URL construction is dropped with an
/// error diagnostic and does not affect the rest of the batch.
pub async fn fetch_news_items(params: FetchParams, tx: mpsc::Sender<NewsItem>) -> Result<()> {
    let client = RedditClient::new(&params.user_agent)?;
    info!(subreddit = %params.subreddit, window = %params.window, "reddit client ready");

    let posts = client
        .top_posts(&params.subreddit, &params.window, params.limit)
        .await?;
    debug!(count = posts.len(), "received posts");

    deliver_posts(posts, &tx).await;
    Ok(())
}

/// One linear pass over the batch in rank order: build each item and send
/// it immediately, or drop it and move on. Returns how many were sent.
pub async fn deliver_posts(posts: Vec<Post>, tx: &mpsc::Sender<NewsItem>) -> usize {
    let mut sent = 0;
    for post in posts {
        match build_item(&post) {
            Ok(item) => {
                debug!(
                    title = %post.title,
                    url = %post.url,
                    score = post.score,
                    comments = post.num_comments,
                    "sending news item"
                );
                // A send error means the consumer is gone; stop producing.
                if tx.send(item).await.is_err() {
                    break;
                }
                sent += 1;
            }
            Err(err) => {
                error!(
                    %err,
                    title = %post.title,
                    url = %post.url,
                    score = post.score,
                    comments = post.num_comments,
                    "failed to parse permalink"
                );
            }
        }
    }
    sent
}

/// Build a [`NewsItem`] from a raw post. Pure (no I/O), deterministic.
pub fn build_item(post: &Post) -> Result<NewsItem> {
    let url = permalink_url(&post.permalink)?;
    Ok(NewsItem {
        title: post.title.clone(),
        url,
        score: post.score,
        comments: post.num_comments,
    })
}

// Url::parse percent-encodes stray whitespace instead of rejecting it, so
// the raw permalink is gated first: it must be an absolute path with no
// whitespace or control characters.
fn permalink_url(permalink: &str) -> Result<Url> {
    if permalink.is_empty() {
        return Err(anyhow!("empty permalink"));
    }
    if !permalink.starts_with('/') {
        return Err(anyhow!("permalink is not an absolute path: {permalink}"));
    }
    if permalink.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(anyhow!("permalink contains whitespace or control characters"));
    }
    let url = Url::parse(&format!("{BASE_ORIGIN}{permalink}"))?;
    Ok(url)
}
