mod fetch;
mod model;

pub use model::NewsItem;

use crate::config::RuntimeConfig;
use crate::ui::PresentationSink;
use anyhow::Result;
use fetch::{fetch_news_items, FetchParams};
use std::future::Future;
use tokio::sync::mpsc;

/// Run one fetch-and-render batch: spawn the fetcher, drain the channel
/// into the sink, then surface any fetcher fault. Returns the number of
/// items delivered.
///
/// The channel has capacity 1, so the fetcher can never run more than one
/// item ahead of the sink; the blocking send is the only backpressure.
pub async fn run<S: PresentationSink>(cfg: &RuntimeConfig, sink: &mut S) -> Result<usize> {
    let (tx, rx) = mpsc::channel::<NewsItem>(1);

    let params = FetchParams {
        subreddit: cfg.subreddit.clone(),
        window: cfg.window.clone(),
        limit: cfg.limit,
        user_agent: cfg.user_agent.clone(),
    };
    run_pipeline(fetch_news_items(params, tx), rx, sink).await
}

/// Drive one producer future against one sink. Split out from [`run`] so
/// the join path can be exercised with a fetcher that fails before
/// sending anything.
async fn run_pipeline<F, S>(fetcher: F, rx: mpsc::Receiver<NewsItem>, sink: &mut S) -> Result<usize>
where
    F: Future<Output = Result<()>> + Send + 'static,
    S: PresentationSink,
{
    let fetcher = tokio::spawn(fetcher);

    let delivered = drain(rx, sink).await;

    // The fetcher dropped its sender, so it has finished; join it and
    // propagate setup/query faults instead of swallowing them.
    fetcher.await??;
    Ok(delivered)
}

/// Receive until the producer closes the channel, handing each item to the
/// sink in arrival order.
async fn drain<S: PresentationSink>(mut rx: mpsc::Receiver<NewsItem>, sink: &mut S) -> usize {
    let mut delivered = 0;
    while let Some(item) = rx.recv().await {
        sink.deliver(item);
        delivered += 1;
    }
    delivered
}
