use serde_json::Value;

use crate::error::VectorResult;
use crate::point::{Point, PointId};
use crate::qdrant_util::{self, QdrantRest};
use crate::tickets::VECTOR_SIZE;
use crate::vectorizer::text_to_vector;

/// Stores `text` under `ticket_id` in `collection`, overwriting any point with the same id.
pub async fn upload_point(
    qdrant_client: &QdrantRest,
    ticket_id: impl Into<PointId>,
    text: &str,
    collection: &str,
) -> VectorResult<Value> {
    let vector = text_to_vector(text, VECTOR_SIZE)?;
    let point = Point::new(ticket_id, text, vector);
    tracing::info!(id = %point.id, collection, "uploading ticket text");
    qdrant_util::upsert_points(qdrant_client, collection, &[point]).await
}
