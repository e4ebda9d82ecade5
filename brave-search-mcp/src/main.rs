use anyhow::Result;
use brave_search_api::{BraveConfig, RateLimits, config};
use brave_search_mcp::{ServerConfig, run_server};
use clap::{Arg, ArgMatches, Command};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP stream, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let brave = brave_config(&matches)?;

    // Run the server
    run_server(ServerConfig::new(brave)).await
}

/// Command line arguments, each falling back to its environment variable
fn cli() -> Command {
    Command::new("brave-search-mcp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Brave Search Model Context Protocol server")
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .value_name("TOKEN")
                .env(config::API_KEY_ENV)
                .hide_env_values(true)
                .help("Brave Search API subscription token"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .env(config::BASE_URL_ENV)
                .help("Brave Search API root, when not the public endpoint"),
        )
        .arg(
            Arg::new("timeout-secs")
                .long("timeout-secs")
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64))
                .help("Timeout for each upstream request"),
        )
        .arg(
            Arg::new("rate-limit-per-second")
                .long("rate-limit-per-second")
                .value_name("N")
                .env(config::PER_SECOND_ENV)
                .value_parser(clap::value_parser!(u32))
                .help("Maximum upstream requests per second"),
        )
        .arg(
            Arg::new("rate-limit-per-month")
                .long("rate-limit-per-month")
                .value_name("N")
                .env(config::PER_MONTH_ENV)
                .value_parser(clap::value_parser!(u32))
                .help("Maximum upstream requests before the server must be restarted"),
        )
}

/// Build the API configuration from parsed arguments
fn brave_config(matches: &ArgMatches) -> Result<BraveConfig> {
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .unwrap_or_default();
    let defaults = RateLimits::default();
    let limits = RateLimits::new(
        matches
            .get_one::<u32>("rate-limit-per-second")
            .copied()
            .unwrap_or(defaults.per_second),
        matches
            .get_one::<u32>("rate-limit-per-month")
            .copied()
            .unwrap_or(defaults.per_month),
    );
    let timeout = matches
        .get_one::<u64>("timeout-secs")
        .copied()
        .map_or(config::DEFAULT_TIMEOUT, Duration::from_secs);

    let mut brave = BraveConfig::new(api_key)?
        .with_timeout(timeout)
        .with_limits(limits);
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        brave = brave.with_base_url(base_url.as_str());
    }

    Ok(brave)
}
