mod config;
mod news;
mod reddit;
mod ui;
mod util;

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap();

    // Parse a minimal CLI: optional --config <path>
    let mut args = env::args().skip(1);
    let mut config_override: Option<String> = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if let Some(p) = args.next() { config_override = Some(p); }
            }
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            _ => {}
        }
    }

    let cfg = config::load(config_override)?;

    println!(
        "{}",
        console::style(format!("Top r/{} posts this {}", cfg.subreddit, cfg.window)).bold()
    );
    println!();

    let mut sink = ui::ConsoleSink;
    let delivered = news::run(&cfg, &mut sink).await?;
    if delivered == 0 {
        println!("(no posts this {})", cfg.window);
    }

    Ok(())
}

// Diagnostics go to stderr so cards on stdout stay clean. RUST_LOG
// overrides the default info level.
fn bootstrap() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn print_help() {
    println!("news-cards");
    println!("Usage: news-cards [--config <path>]");
    println!("  --config <path>  Path to a config.toml (subreddit, window, limit, user_agent)");
}
