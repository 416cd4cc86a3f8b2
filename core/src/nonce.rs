//! Per request nonce.

use rand::Rng;

/// Smallest nonce that can be generated.
pub const NONCE_MIN: u32 = 100_000;
/// Largest nonce that can be generated.
pub const NONCE_MAX: u32 = 999_999;

/// Generate a six digits random nonce like "482913".
///
/// The nonce space only has 900k values, replay protection relies on the
/// server combining it with access id and timestamp.
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .gen_range(NONCE_MIN..=NONCE_MAX)
        .to_string()
}
