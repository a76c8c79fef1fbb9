use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod health_cmd;
mod predict_cmd;

#[derive(Parser)]
#[command(name = "forecaster", about = "Sales Forecaster CLI - query a forecaster server")]
struct Cli {
    /// Forecaster server URL
    #[arg(long, env = "FORECASTER_URL", default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the server is up
    Health,

    /// Forecast revenue for an ad spend amount
    Predict {
        /// Ad spend (must be greater than zero)
        #[arg(allow_negative_numbers = true)]
        ad_spend: f64,

        /// Print a human-readable summary instead of JSON
        #[arg(long)]
        summary: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let base_url = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Health => health_cmd::run(base_url).await?,
        Commands::Predict { ad_spend, summary } => {
            predict_cmd::run(base_url, ad_spend, summary).await?;
        }
    }

    Ok(())
}
