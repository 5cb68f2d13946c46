//! Client-side transaction reference generation.

use uuid::Uuid;

const REFERENCE_PREFIX: &str = "TXN_";
const REFERENCE_HEX_CHARS: usize = 16;

/// Generate a fresh gateway-safe transaction reference.
///
/// `TXN_` plus the first 16 hex characters of a random UUIDv4, uppercased:
/// 20 characters total, 64 bits of entropy. References are unique by
/// construction; there is no registry or deduplication.
pub fn new_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!(
        "{}{}",
        REFERENCE_PREFIX,
        id[..REFERENCE_HEX_CHARS].to_uppercase()
    )
}
