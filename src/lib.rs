//! drone-plain - A secret extension that serves CI secrets from a plain JSON file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── config            # Flags and environment variables
//! ├── error             # Error taxonomy
//! ├── server/           # HTTP transport
//! │   ├── mod           # Router and request handler
//! │   └── signature     # HMAC request signatures
//! └── core/             # Core library components
//!     ├── constants     # Reserved attribute names
//!     ├── domain/       # Request, record and secret types
//!     ├── store/        # Secret storage
//!     │   ├── mod       # Store trait
//!     │   └── fs        # JSON file implementation
//!     ├── filter        # Event and repository filters
//!     └── resolver      # Lookup and access decision
//! ```
//!
//! # Store format
//!
//! ```json
//! {
//!   "secret/docker": {
//!     "data": {
//!       "username": "david",
//!       "X-Drone-Events": ["push", "tag"],
//!       "X-Drone-Repos": ["octocat/hello-world"]
//!     }
//!   }
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod server;

pub use crate::config::Config;
pub use crate::core::domain::{Request, Secret};
pub use crate::core::{resolve, SecretStore, Store};
pub use crate::error::{Error, Result};
