//! Core components for signed object storage access.
//!
//! This crate provides the foundational types shared by the objsign workspace:
//!
//! - **Context**: A container that holds implementations for HTTP sending, file reading,
//!   and environment access. Service crates never talk to the network or the file
//!   system directly, they go through the context.
//! - **Error**: The error type used across the workspace, with an [`ErrorKind`] that
//!   separates configuration problems from transport failures.
//!
//! ## Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use objsign_core::{Context, HttpSend, Result};
//!
//! #[derive(Debug)]
//! struct MyHttpSend;
//!
//! #[async_trait::async_trait]
//! impl HttpSend for MyHttpSend {
//!     async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         Ok(http::Response::new(Bytes::new()))
//!     }
//! }
//!
//! let ctx = Context::new().with_http_send(MyHttpSend);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and HMAC-SHA256 helpers
//! - [`time`]: Timestamp formatting used by request signing
//! - [`utils`]: General utilities including secret redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::FileRead;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopFileRead;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
