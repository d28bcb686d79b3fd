//! Test fixtures and constants.

/// Shared secret used to sign test requests.
pub const SHARED_SECRET: &str = "correct-horse-battery-staple";

/// Date header used on signed test requests.
pub const DATE: &str = "Tue, 07 Jun 2024 20:51:35 GMT";

/// Repository allowed by the `secret/docker` fixture record.
pub const OCTOCAT_REPO: &str = "octocat/hello-world";

/// Repository rejected by the `secret/docker` fixture record.
pub const SPACEGHOST_REPO: &str = "spaceghost/hello-world";

/// Build a wire-format request body.
pub fn request_body(path: &str, name: &str, event: &str, repo: &str) -> String {
    serde_json::json!({
        "path": path,
        "name": name,
        "build": { "number": 42, "event": event, "ref": "refs/heads/main" },
        "repo": { "namespace": "octocat", "slug": repo, "private": false }
    })
    .to_string()
}
