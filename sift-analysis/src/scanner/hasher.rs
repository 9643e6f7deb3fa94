//! Content hashing with xxh3.

use xxhash_rust::xxh3::xxh3_64;

/// Hash file content for identity and change detection.
pub fn hash_content(content: &[u8]) -> u64 {
    xxh3_64(content)
}
