//! Core library components.
//!
//! This module contains the secret store, the access filters and the
//! resolver that decides whether a request may read a secret.

pub mod constants;
pub mod domain;
pub mod filter;
pub mod resolver;
pub mod store;
pub mod types;

pub use resolver::resolve;
pub use store::{SecretStore, Store};
