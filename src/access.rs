//! Access codes handed to buyers after purchase.
//!
//! A code is `<product_id>-<suffix>`, e.g. `12-K7Q2ZD`. The prefix is all the
//! builder needs to pick a product; verifying that the code was issued is the
//! web layer's job.

use rand::Rng;

const SUFFIX_LEN: usize = 6;
const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Extracts the product id from an access code.
///
/// Returns `None` when the part before the first `-` is not an integer.
pub fn product_id_from_code(code: &str) -> Option<u32> {
    let prefix = code.trim().split('-').next()?;
    prefix.parse().ok()
}

/// Issues a fresh access code for `product_id`.
pub fn generate_access_code(product_id: u32) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", product_id, suffix)
}
