use anyhow::{Context, Result};
use clap::Parser;
use shared::{Config, LibrarySummary, OmnivoreClient};

#[derive(Parser)]
#[command(name = "omnivore-summary")]
#[command(about = "Summarize the saved items in an Omnivore library")]
struct Args {
    /// Maximum line width for the count tables
    #[arg(short, long, default_value = "80")]
    width: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    let client = OmnivoreClient::new(&config)?;

    println!("Reading data...");
    let items = client
        .fetch_library()
        .await
        .context("Failed to fetch library data")?;

    println!("Summarizing...");
    let summary = LibrarySummary::from_items(&items);
    print!("{}", summary.render(args.width));

    Ok(())
}
