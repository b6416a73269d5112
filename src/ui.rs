use crate::news::NewsItem;
use crate::util::sanitize::sanitize_for_terminal;
use console::style;

/// Where delivered items end up. The pipeline hands items over one at a
/// time in delivery order and expects nothing back.
pub trait PresentationSink {
    fn deliver(&mut self, item: NewsItem);
}

/// Renders each item as a plain card on stdout.
pub struct ConsoleSink;

impl PresentationSink for ConsoleSink {
    fn deliver(&mut self, item: NewsItem) {
        let title = sanitize_for_terminal(&item.title);
        println!("{}", style(title).bold());
        println!(
            "  Score: {} | Comments: {}",
            style(item.score).green(),
            style(item.comments).cyan()
        );
        println!("  {}", style(item.url.as_str()).underlined());
        println!();
    }
}
