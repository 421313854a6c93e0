//! Expiry inspection for bearer tokens.
//!
//! The credential is an opaque signed JWT; the client never verifies the
//! signature, it only reads the embedded `exp` claim to decide whether the
//! token may still be attached to requests. Every decode failure is treated
//! as expired (fail-closed).

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// The claims the client cares about.
#[derive(Deserialize)]
struct Claims {
    /// Expiry as seconds since the Unix epoch.
    exp: f64,
}

/// Reads the expiry claim embedded in `token`.
///
/// # Returns
///
/// The expiry instant, or `None` when the token cannot be decoded or
/// carries no usable `exp` claim.
pub fn expiry(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))
        .ok()?;

    let claims: Claims = sonic_rs::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp as i64, 0)
}

/// Whether `token` is expired.
///
/// Fail-closed: a token whose expiry cannot be read is expired.
pub fn is_expired(token: &str) -> bool {
    match expiry(token) {
        Some(exp) => exp <= Utc::now(),
        None => true,
    }
}

/// Remaining lifetime of `token`, if it decodes and is still in the future.
pub fn time_to_expiry(token: &str) -> Option<Duration> {
    let remaining = expiry(token)? - Utc::now();
    if remaining > Duration::zero() {
        Some(remaining)
    } else {
        None
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds an unsigned JWT-shaped token with the given `exp` claim.
    pub(crate) fn token_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp));
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn future_token_is_not_expired() {
        let token = token_with_exp(Utc::now().timestamp() + 3600);
        assert!(!is_expired(&token));
        assert!(time_to_expiry(&token).is_some());
    }

    #[test]
    fn past_token_is_expired() {
        let token = token_with_exp(Utc::now().timestamp() - 60);
        assert!(is_expired(&token));
        assert!(time_to_expiry(&token).is_none());
    }

    #[test]
    fn garbage_token_is_expired() {
        assert!(is_expired("not-a-jwt"));
        assert!(is_expired(""));
        assert!(is_expired("a.b.c"));
    }

    #[test]
    fn token_without_exp_claim_is_expired() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"alice"}"#);
        let token = format!("{}.{}.sig", header, payload);
        assert!(is_expired(&token));
        assert!(expiry(&token).is_none());
    }

    #[test]
    fn padded_payload_still_decodes() {
        let header = URL_SAFE.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let exp = Utc::now().timestamp() + 600;
        let payload = URL_SAFE.encode(format!(r#"{{"exp":{}}}"#, exp));
        let token = format!("{}.{}.sig", header, payload);
        assert!(!is_expired(&token));
    }
}
