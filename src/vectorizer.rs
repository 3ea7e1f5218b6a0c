use sha2::{Digest, Sha256};

use crate::error::{VectorError, VectorResult};

/// Maps `text` to a deterministic vector of `dim` floats in `[0, 1]`.
///
/// Each element is one byte of the SHA-256 digest of the UTF-8 text divided by 255.
/// Dimensions past the 32 digest bytes are filled with `0.0`. The result carries no
/// semantic meaning; it only gives every distinct text a reproducible point.
pub fn text_to_vector(text: &str, dim: usize) -> VectorResult<Vec<f32>> {
    if dim == 0 {
        return Err(VectorError::InvalidDimension(dim));
    }

    let digest = Sha256::digest(text.as_bytes());
    let mut vector: Vec<f32> = digest
        .iter()
        .take(dim)
        .map(|b| f32::from(*b) / 255.0)
        .collect();
    vector.resize(dim, 0.0);
    Ok(vector)
}
