//! Domain types.

mod record;
mod request;
mod secret;

pub use record::{AttributeValue, SecretRecord};
pub use request::{Build, Repo, Request};
pub use secret::Secret;
