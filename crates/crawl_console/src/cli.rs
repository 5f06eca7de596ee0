use std::path::PathBuf;

use clap::Parser;
use crawl_core::CrawlRequest;

use crate::config::ConsoleConfig;
use crate::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "crawl_console")]
#[command(about = "Start a remote crawl and follow its progress")]
#[command(version)]
pub struct Cli {
    /// Start URL for the crawl
    pub url: String,

    /// Maximum number of pages to crawl
    #[arg(long, default_value_t = 50)]
    pub max_pages: u32,

    /// Number of crawler threads on the server
    #[arg(long = "threads", default_value_t = 4)]
    pub num_threads: u32,

    /// Maximum link depth from the start URL
    #[arg(long = "depth", default_value_t = 2)]
    pub max_depth: u32,

    /// Origin of the crawl-control server
    #[arg(long)]
    pub base_url: Option<String>,

    /// Status poll interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "crawl_console.ron")]
    pub config: PathBuf,

    /// Where log output goes
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn request(&self) -> CrawlRequest {
        CrawlRequest {
            start_url: self.url.clone(),
            max_pages: self.max_pages,
            num_threads: self.num_threads,
            max_depth: self.max_depth,
        }
    }

    /// Command-line flags win over the config file.
    pub fn apply(&self, mut config: ConsoleConfig) -> ConsoleConfig {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(interval_ms) = self.interval_ms {
            config.poll_interval_ms = interval_ms;
        }
        if let Some(log) = self.log {
            config.log = log;
        }
        config
    }
}
