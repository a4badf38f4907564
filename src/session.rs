//! Session cookie module
//!
//! Issues and verifies the signed `sid` cookie. The cookie value is
//! `<id>.<signature>` where the signature is the hex SHA-256 of the
//! secret and the id. Nothing server-side hangs off the session yet; the
//! cookie only has to survive a round trip intact.

use sha2::{Digest, Sha256};

/// Sign an id with the configured secret
fn sign(secret: &str, id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b".");
    hasher.update(id.as_bytes());
    hex::encode(hasher.finalize())
}

/// Issue a new signed cookie value from a seed (peer address + timestamp)
pub fn issue(secret: &str, seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    let id = hex::encode(&hasher.finalize()[..8]);
    let sig = sign(secret, &id);
    format!("{id}.{sig}")
}

/// Verify a cookie value previously produced by [`issue`]
pub fn verify(secret: &str, value: &str) -> bool {
    let Some((id, sig)) = value.split_once('.') else {
        return false;
    };
    !id.is_empty() && sign(secret, id) == sig
}

/// Extract a named cookie from a `Cookie` request header
pub fn cookie_from_header<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then_some(v)
    })
}

/// Build the `Set-Cookie` header value for a freshly issued session
pub fn set_cookie_value(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; HttpOnly")
}
