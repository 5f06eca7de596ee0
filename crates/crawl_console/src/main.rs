mod cli;
mod config;
mod logging;
mod render;

use std::sync::Arc;

use clap::Parser;
use crawl_client::{ChannelStatusSink, HttpCrawlApi, StatusMonitor};
use crawl_core::CrawlStatus;
use crawl_logging::{crawl_error, crawl_info};

use crate::cli::Cli;
use crate::render::Renderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(config::load_config(&cli.config)?);
    logging::initialize(config.log, logging::level_for_verbosity(cli.verbose));

    let settings = config.client_settings()?;
    let api = Arc::new(HttpCrawlApi::new(&settings)?);
    let (sink, mut updates) = ChannelStatusSink::channel();
    let monitor = StatusMonitor::spawn(api, &settings, Arc::new(sink))?;
    monitor.start(cli.request());

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut renderer = Renderer::default();
    let outcome = loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(update) = update else { break None };
                for line in renderer.render(&update) {
                    println!("{line}");
                }
                if update.status.is_terminal() {
                    break Some(update.status);
                }
            }
            _ = &mut ctrl_c => {
                crawl_info!("Interrupted; cancelling status polling");
                monitor.cancel();
                break None;
            }
        }
    };

    match outcome {
        Some(CrawlStatus::Error(message)) => {
            crawl_error!("Crawl ended with an error: {}", message);
            anyhow::bail!(message)
        }
        _ => Ok(()),
    }
}
