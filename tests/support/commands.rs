//! Command and request helpers for tests.

use super::{fixtures, Test};
use assert_cmd::Command;
use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderValue, Method, Request, Uri};
use drone_plain::server::signature;
use std::process::Output;

impl Test {
    /// Create a drone-plain command isolated from the caller's environment.
    ///
    /// Returns a Command with the configuration variables cleared and the
    /// current directory set to the scratch directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("drone-plain").expect("failed to find drone-plain binary");
        for var in ["SERVER_ADDRESS", "SECRET_KEY", "SOURCE", "DEBUG", "DRONE_PLAIN_LOG"] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run the server binary with a source and secret.
    ///
    /// Only useful for configurations expected to fail at startup.
    pub fn start(&self, source: &str, secret: &str) -> Output {
        self.cmd()
            .env("SOURCE", source)
            .env("SECRET_KEY", secret)
            .env("SERVER_ADDRESS", "127.0.0.1:0")
            .output()
            .expect("failed to run drone-plain")
    }
}

/// Build a `POST /` request signed over `date` and `digest`.
pub fn signed_request(body: &str, secret: &str) -> Request<Body> {
    signed_request_with(body, secret, &["date", "digest"], "signature")
}

/// Build a signed request choosing the signed headers and the header that
/// carries the signature (`signature` or `authorization`).
pub fn signed_request_with(
    body: &str,
    secret: &str,
    names: &[&str],
    carrier: &str,
) -> Request<Body> {
    let mut headers = HeaderMap::new();
    headers.insert(header::DATE, HeaderValue::from_static(fixtures::DATE));
    headers.insert(
        "digest",
        HeaderValue::from_str(&signature::digest_header(body.as_bytes()))
            .expect("digest is ascii"),
    );
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let params = signature::sign(
        secret.as_bytes(),
        "hmac-key",
        names,
        &Method::POST,
        &Uri::from_static("/"),
        &headers,
    )
    .expect("failed to sign request");
    let value = if carrier == "authorization" {
        format!("Signature {}", params)
    } else {
        params
    };

    let mut builder = Request::builder().method(Method::POST).uri("/");
    for (name, value) in headers.iter() {
        builder = builder.header(name, value);
    }
    builder
        .header(carrier, value)
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}
