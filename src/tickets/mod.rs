pub const COLLECTION_NAME: &str = "tickets";
pub const VECTOR_SIZE: usize = 32; // SHA-256 digest length in bytes; longer vectors are zero padded
