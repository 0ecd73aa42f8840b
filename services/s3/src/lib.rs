//! S3 compatible object store client with AWS SigV4 signing.
//!
//! The client targets providers that accept the `auto` pseudo region, such as
//! Cloudflare R2, and addresses buckets path style: `<endpoint>/<bucket>/<key>`.
//!
//! ## Example
//!
//! ```no_run
//! use objsign_core::{Context, Result};
//! use objsign_s3::{Config, ObjectStoreClient};
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let config = Config::default().from_env(&ctx);
//! let client = ObjectStoreClient::new(ctx, config)?;
//!
//! let resp = client.upload("hello world", "text/plain", "docs/hello.txt").await?;
//! if resp.is_success() {
//!     println!("uploaded to {}", client.public_url("docs/hello.txt"));
//! }
//!
//! for object in client.list("docs/").await? {
//!     println!("{} {}", object.key, object.size);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`RequestSigner`] can also be used on its own to sign requests sent by another
//! transport.

#![warn(missing_docs)]

mod constants;
pub use constants::{
    OBJSIGN_ACCESS_KEY_ID, OBJSIGN_BUCKET, OBJSIGN_CDN_URL, OBJSIGN_ENDPOINT,
    OBJSIGN_SECRET_ACCESS_KEY,
};

mod credential;
pub use credential::Credential;

mod config;
pub use config::Config;
pub use config::StoreConfig;

mod sign_request;
pub use sign_request::RequestSigner;
pub use sign_request::SignedRequest;

mod list;
pub use list::ObjectSummary;

mod client;
pub use client::ObjectResponse;
pub use client::ObjectStoreClient;

pub use objsign_core::hash::EMPTY_STRING_SHA256;
