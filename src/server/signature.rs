//! HTTP request signatures.
//!
//! Requests from the CI server carry an HMAC-SHA256 signature over a chosen
//! set of headers, in the draft-cavage "Signature" scheme:
//!
//! ```text
//! Signature: keyId="hmac-key",algorithm="hmac-sha256",headers="date digest",signature="<base64>"
//! ```
//!
//! The signing string is each listed header rendered `name: value`, joined
//! by newlines. A `Digest: SHA-256=<base64>` header binds the body to the
//! signature.

use axum::http::{HeaderMap, Method, Uri};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::SignatureError;

type HmacSha256 = Hmac<Sha256>;

/// The only supported algorithm.
pub const ALGORITHM: &str = "hmac-sha256";

/// Pseudo-header covering the method and path.
pub const REQUEST_TARGET: &str = "(request-target)";

const DIGEST_PREFIX: &str = "SHA-256=";

/// A parsed `Signature` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub key_id: String,
    pub headers: Vec<String>,
    signature: Vec<u8>,
}

impl Signature {
    /// Read the signature from request headers.
    ///
    /// Looks at `Signature` first, then `Authorization: Signature ...`.
    ///
    /// # Errors
    ///
    /// Returns `SignatureError::Missing` if neither header is present, or a
    /// parse error from [`Signature::parse`].
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, SignatureError> {
        if let Some(value) = headers.get("signature") {
            let value = value
                .to_str()
                .map_err(|_| SignatureError::Malformed("non-ascii header".to_string()))?;
            return Self::parse(value);
        }

        headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Signature "))
            .map(Self::parse)
            .unwrap_or(Err(SignatureError::Missing))
    }

    /// Parse the parameter list of a signature header.
    ///
    /// # Errors
    ///
    /// Returns `SignatureError::Malformed` if a parameter is not `key="value"`
    /// or `signature` is missing or not base64, and
    /// `SignatureError::UnsupportedAlgorithm` for anything but hmac-sha256.
    pub fn parse(value: &str) -> Result<Self, SignatureError> {
        let mut key_id = None;
        let mut algorithm = None;
        let mut headers = None;
        let mut signature = None;

        for param in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, raw) = param
                .split_once('=')
                .ok_or_else(|| SignatureError::Malformed(format!("bad parameter '{}'", param)))?;
            let raw = raw.trim();
            let unquoted = raw
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(raw);

            match name.trim() {
                "keyId" => key_id = Some(unquoted.to_string()),
                "algorithm" => algorithm = Some(unquoted.to_ascii_lowercase()),
                "headers" => headers = Some(unquoted.to_string()),
                "signature" => signature = Some(unquoted.to_string()),
                _ => {}
            }
        }

        if let Some(algorithm) = algorithm {
            if algorithm != ALGORITHM {
                return Err(SignatureError::UnsupportedAlgorithm(algorithm));
            }
        }

        let signature = signature
            .ok_or_else(|| SignatureError::Malformed("missing signature parameter".to_string()))?;
        let signature = STANDARD
            .decode(signature)
            .map_err(|e| SignatureError::Malformed(format!("signature is not base64: {}", e)))?;

        let headers = headers
            .map(|h| h.split_whitespace().map(str::to_ascii_lowercase).collect())
            .unwrap_or_else(|| vec!["date".to_string()]);

        Ok(Self {
            key_id: key_id.unwrap_or_default(),
            headers,
            signature,
        })
    }

    /// Verify the signature against a request.
    ///
    /// # Errors
    ///
    /// Returns `SignatureError::MissingHeader` if a signed header is absent,
    /// `SignatureError::DigestMismatch` if a `Digest` header does not match
    /// the body, or `SignatureError::Mismatch` if the HMAC differs.
    pub fn verify(
        &self,
        secret: &[u8],
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
        body: &[u8],
    ) -> Result<(), SignatureError> {
        let signing_string = signing_string(&self.headers, method, uri, headers)?;

        let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| SignatureError::Mismatch)?;
        mac.update(signing_string.as_bytes());
        mac.verify_slice(&self.signature)
            .map_err(|_| SignatureError::Mismatch)?;

        if let Some(digest) = headers.get("digest").and_then(|v| v.to_str().ok()) {
            if let Some(expected) = digest.strip_prefix(DIGEST_PREFIX) {
                if expected != digest_value(body) {
                    return Err(SignatureError::DigestMismatch);
                }
            }
        }

        Ok(())
    }
}

/// Build the signing string for a set of header names.
///
/// # Errors
///
/// Returns `SignatureError::MissingHeader` if a named header is absent.
pub fn signing_string(
    names: &[String],
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
) -> Result<String, SignatureError> {
    let mut lines = Vec::with_capacity(names.len());

    for name in names {
        if name == REQUEST_TARGET {
            let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
            lines.push(format!(
                "{}: {} {}",
                REQUEST_TARGET,
                method.as_str().to_ascii_lowercase(),
                target
            ));
            continue;
        }

        let values: Vec<&str> = headers
            .get_all(name.as_str())
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        if values.is_empty() {
            return Err(SignatureError::MissingHeader(name.clone()));
        }
        lines.push(format!("{}: {}", name, values.join(", ")));
    }

    Ok(lines.join("\n"))
}

/// Base64 SHA-256 of a body, without the `SHA-256=` prefix.
pub fn digest_value(body: &[u8]) -> String {
    STANDARD.encode(Sha256::digest(body))
}

/// `Digest` header value for a body.
pub fn digest_header(body: &[u8]) -> String {
    format!("{}{}", DIGEST_PREFIX, digest_value(body))
}

/// Compute the `Signature` header value for a request.
///
/// Used by clients and tests; the server only verifies.
///
/// # Errors
///
/// Returns `SignatureError::MissingHeader` if a named header is absent.
pub fn sign(
    secret: &[u8],
    key_id: &str,
    names: &[&str],
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
) -> Result<String, SignatureError> {
    let names: Vec<String> = names.iter().map(|n| n.to_ascii_lowercase()).collect();
    let signing_string = signing_string(&names, method, uri, headers)?;

    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| SignatureError::Mismatch)?;
    mac.update(signing_string.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());

    Ok(format!(
        "keyId=\"{}\",algorithm=\"{}\",headers=\"{}\",signature=\"{}\"",
        key_id,
        ALGORITHM,
        names.join(" "),
        signature
    ))
}
