//! EstrenosGO command-line host
//!
//! Plays the part of the media-automation framework: takes an entry title
//! and its search-string variants, runs the site search and prints the
//! resulting entries as JSON.
//!
//! ```text
//! estrenosgo --title "The Boys S04E01" "The Boys S04E01" "The Boys 4x01" --pretty
//! ```

use clap::{ArgAction, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use estrenosgo_core::client::DEFAULT_BASE_URL;
use estrenosgo_core::{ClientConfig, EstrenosClient, EstrenosScraper, SearchRequest, SiteConfig};

#[derive(Debug, Parser)]
#[command(name = "estrenosgo", version, about = "Search EstrenosGO for series episodes")]
struct Cli {
    /// Entry title; used as the search string when none are given
    #[arg(long)]
    title: String,

    /// Search string variants to try
    search_strings: Vec<String>,

    /// Site enable flag as the host would configure it
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    enabled: bool,

    /// Site root
    #[arg(long, env = "ESTRENOSGO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Maximum requests per second
    #[arg(long, env = "ESTRENOSGO_REQUESTS_PER_SECOND", default_value_t = 2.0)]
    requests_per_second: f64,

    /// Request timeout in seconds
    #[arg(long, env = "ESTRENOSGO_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            requests_per_second: self.requests_per_second,
            timeout_secs: self.timeout_secs,
        }
    }

    fn requests(&self) -> Vec<SearchRequest> {
        SearchRequest::for_entry(&self.title, &self.search_strings)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = EstrenosClient::with_config(cli.client_config())?;
    let scraper = EstrenosScraper::with_client(client);

    let entries = scraper
        .search(&cli.requests(), SiteConfig::from(cli.enabled))
        .await;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    println!("{}", json);

    Ok(())
}
