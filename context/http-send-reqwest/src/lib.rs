//! Reqwest-based HTTP transport for objsign.
//!
//! `ReqwestHttpSend` implements [`HttpSend`] on top of [`reqwest::Client`].
//!
//! ## Example
//!
//! ```no_run
//! use objsign_core::Context;
//! use objsign_http_send_reqwest::ReqwestHttpSend;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), reqwest::Error> {
//! // Deadlines belong to the transport, the signing core never imposes one.
//! let client = reqwest::Client::builder()
//!     .redirect(reqwest::redirect::Policy::none())
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use objsign_core::{Error, HttpSend, Result};
use reqwest::redirect::Policy;
use reqwest::{Client, Request};

/// HttpSend implementation backed by [`reqwest::Client`].
///
/// Clients passed to [`ReqwestHttpSend::new`] should be built with
/// `redirect(Policy::none())`: a followed redirect resends the signature to a host
/// it was not computed for.
#[derive(Debug)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl Default for ReqwestHttpSend {
    /// Build a client that never follows redirects.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`reqwest::Client::new`], i.e. when the TLS
    /// backend cannot be initialized.
    fn default() -> Self {
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("reqwest client must be buildable");
        Self { client }
    }
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request for reqwest").with_source(e)
        })?;
        debug!("sending {} {}", req.method(), req.url());

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport("failed to send request").with_source(e))?;

        let mut builder = http::Response::builder()
            .status(resp.status())
            .version(resp.version());
        if let Some(headers) = builder.headers_mut() {
            headers.extend(resp.headers().clone());
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;

        Ok(builder.body(body)?)
    }
}
