pub mod config;
pub mod error;
pub mod point;
pub mod qdrant_util;
pub mod tickets;
pub mod uploader;
pub mod vectorizer;

pub use config::QdrantConfig;
pub use error::{VectorError, VectorResult};
pub use point::{Point, PointId};
pub use qdrant_util::QdrantRest;
pub use uploader::upload_point;
pub use vectorizer::text_to_vector;
