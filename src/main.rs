mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ticket_vectors::{upload_point, QdrantConfig, QdrantRest};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // logs go to stderr; stdout carries only the response JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();

    let mut config = QdrantConfig::from_env(args.url);
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(secs);
    }
    let qdrant_client = QdrantRest::new(&config).context("failed to build Qdrant client")?;

    let result = upload_point(&qdrant_client, args.id, &args.text, &args.collection)
        .await
        .with_context(|| {
            format!(
                "failed to upload ticket {} to '{}' at {}",
                args.id,
                args.collection,
                qdrant_client.base_url()
            )
        })?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
