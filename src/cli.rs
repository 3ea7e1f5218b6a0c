use clap::Parser;
use ticket_vectors::tickets::COLLECTION_NAME;
use ticket_vectors::PointId;

/// Add ticket text to a Qdrant collection.
#[derive(Parser, Debug)]
#[command(name = "ticket-vectors", version, about)]
pub struct Args {
    /// Ticket ID (unsigned integer or UUID)
    #[arg(long)]
    pub id: PointId,

    /// Ticket text
    #[arg(long)]
    pub text: String,

    /// Collection name
    #[arg(long, default_value = COLLECTION_NAME)]
    pub collection: String,

    /// Qdrant base URL; falls back to QDRANT_URL, then http://localhost:6333
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in seconds; falls back to QDRANT_TIMEOUT_SECS, then 30
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}
