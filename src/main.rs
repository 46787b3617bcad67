// src/main.rs
// =============================================================================
// Entry point of the word-spider CLI.
//
// 1. Parse command-line arguments using clap
// 2. Validate the seed URL and the search word
// 3. Run the spider (crawl, then search)
// 4. Exit with a code: 0 = word found, 1 = not found, 2 = error
//
// The crawl/search output goes to stdout. Logs (RUST_LOG=debug for every
// fetch) go to stderr so they never mix with it.
// =============================================================================

mod cli;

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use url::Url;

use cli::Cli;
use word_spider::fetch::HttpSource;
use word_spider::report::{Console, Transcript};
use word_spider::{SearchOutcome, Spider};

#[tokio::main]
async fn main() {
    init_tracing();

    let result = run().await;
    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    std::process::exit(exit_code(&result));
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<SearchOutcome> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = cli.config();
    let source = HttpSource::new(&config)?;

    if cli.json {
        let mut spider = Spider::new(source, Transcript::new()).with_max_pages(config.max_pages);
        let outcome = spider.search(&cli.seed_url, &cli.word).await?;
        println!("{}", json_report(&outcome, spider.reporter().lines())?);
        Ok(outcome)
    } else {
        let mut spider = Spider::new(source, Console).with_max_pages(config.max_pages);
        Ok(spider.search(&cli.seed_url, &cli.word).await?)
    }
}

// Rejects input the spider can't do anything useful with
fn validate(cli: &Cli) -> Result<()> {
    Url::parse(&cli.seed_url).map_err(|e| anyhow!("Invalid URL '{}': {}", cli.seed_url, e))?;
    if cli.word.trim().is_empty() {
        bail!("search word must not be empty");
    }
    Ok(())
}

// Exit codes:
//   0 = word found
//   1 = word not found anywhere
//   2 = bad input, or nothing could be crawled
fn exit_code(result: &Result<SearchOutcome>) -> i32 {
    match result {
        Ok(outcome) if outcome.found => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    outcome: &'a SearchOutcome,
    log: &'a [String],
}

fn json_report(outcome: &SearchOutcome, log: &[String]) -> Result<String> {
    let report = JsonReport { outcome, log };
    Ok(serde_json::to_string_pretty(&report)?)
}
