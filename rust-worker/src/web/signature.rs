//! GitHub webhook signature verification.
//!
//! GitHub signs each delivery with HMAC-SHA256 over the raw request body and
//! sends the result in `X-Hub-Signature-256` as `sha256=<hex digest>`.
//! Reference: https://docs.github.com/en/webhooks/using-webhooks/validating-webhook-deliveries

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the delivery signature.
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

/// Prefix GitHub puts in front of the hex digest.
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// Compute the expected `X-Hub-Signature-256` value for `body`.
///
/// The digest is rendered as lowercase hex, two digits per byte.
/// Returns `None` only if the key is rejected by the HMAC implementation.
pub fn compute_signature(secret: &str, body: &[u8]) -> Option<String> {
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            warn!("signature_invalid_key");
            return None;
        }
    };
    mac.update(body);

    Some(format!(
        "{}{}",
        SIGNATURE_PREFIX,
        hex::encode(mac.finalize().into_bytes())
    ))
}

/// Verify a GitHub webhook signature.
///
/// # Arguments
///
/// * `secret` - The webhook secret shared with GitHub
/// * `body` - The raw request body, exactly as received
/// * `signature` - The `X-Hub-Signature-256` header value
///
/// # Returns
///
/// `true` only if `signature` is byte-for-byte equal to the expected value.
pub fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let expected = match compute_signature(secret, body) {
        Some(s) => s,
        None => return false,
    };

    let valid = constant_time_eq(expected.as_bytes(), signature.as_bytes());

    if !valid {
        warn!(
            expected_length = expected.len(),
            actual_length = signature.len(),
            has_prefix = signature.starts_with(SIGNATURE_PREFIX),
            "signature_mismatch"
        );
    }

    valid
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
