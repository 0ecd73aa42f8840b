// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use crate::Credential;
use http::uri::Scheme;
use http::Uri;
use objsign_core::utils::Redact;
use objsign_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config for an object store client.
///
/// Every field is required by [`ObjectStoreClient::new`](crate::ObjectStoreClient::new);
/// a config with a missing field never produces a client.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OBJSIGN_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OBJSIGN_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `bucket` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OBJSIGN_BUCKET`]
    pub bucket: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OBJSIGN_ENDPOINT`]
    ///
    /// For example: `https://<account>.r2.cloudflarestorage.com`
    pub endpoint: Option<String>,
    /// `cdn_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OBJSIGN_CDN_URL`]
    pub cdn_url: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("bucket", &self.bucket)
            .field("endpoint", &self.endpoint)
            .field("cdn_url", &self.cdn_url)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.access_key_id.is_none() {
            self.access_key_id = ctx.env_var(OBJSIGN_ACCESS_KEY_ID);
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = ctx.env_var(OBJSIGN_SECRET_ACCESS_KEY);
        }
        if self.bucket.is_none() {
            self.bucket = ctx.env_var(OBJSIGN_BUCKET);
        }
        if self.endpoint.is_none() {
            self.endpoint = ctx.env_var(OBJSIGN_ENDPOINT);
        }
        if self.cdn_url.is_none() {
            self.cdn_url = ctx.env_var(OBJSIGN_CDN_URL);
        }
        self
    }

    /// Validate the config into the immutable parts a client is made of.
    pub fn build(&self) -> Result<(Credential, StoreConfig)> {
        let credential = Credential::new(
            required(&self.access_key_id, "access_key_id")?,
            required(&self.secret_access_key, "secret_access_key")?,
        )?;
        let store = StoreConfig::new(
            required(&self.endpoint, "endpoint")?,
            required(&self.bucket, "bucket")?,
            required(&self.cdn_url, "cdn_url")?,
        )?;

        Ok((credential, store))
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::config_invalid(format!("{name} is required"))),
    }
}

/// Validated, immutable location of a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    endpoint: String,
    host: String,
    bucket: String,
    cdn_url: String,
    region: String,
}

impl StoreConfig {
    /// Build a store config.
    ///
    /// `endpoint` must be an absolute `http`/`https` URL without path or query;
    /// trailing slashes are stripped from both `endpoint` and `cdn_url`.
    pub fn new(endpoint: &str, bucket: &str, cdn_url: &str) -> Result<Self> {
        let endpoint = endpoint.trim_end_matches('/');
        let cdn_url = cdn_url.trim_end_matches('/');

        if bucket.is_empty() || bucket.contains('/') {
            return Err(Error::config_invalid(format!(
                "bucket {bucket:?} is not a valid bucket name"
            )));
        }
        if cdn_url.is_empty() {
            return Err(Error::config_invalid("cdn_url is required"));
        }

        let uri: Uri = endpoint.parse().map_err(|e| {
            Error::config_invalid(format!("endpoint {endpoint:?} is not a valid url"))
                .with_source(e)
        })?;
        let host = endpoint_host(&uri).ok_or_else(|| {
            Error::config_invalid(format!(
                "endpoint {endpoint:?} must be an absolute http(s) url without path or query"
            ))
        })?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            host,
            bucket: bucket.to_string(),
            cdn_url: cdn_url.to_string(),
            region: REGION.to_string(),
        })
    }

    /// Endpoint base url without trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Value of the signed `host` header.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// CDN base url without trailing slash.
    pub fn cdn_url(&self) -> &str {
        &self.cdn_url
    }

    /// Signing region, always `auto`.
    pub fn region(&self) -> &str {
        &self.region
    }
}

/// Host header value for the endpoint: the hostname, plus the port when it's not the
/// scheme's default.
fn endpoint_host(uri: &Uri) -> Option<String> {
    let default_port = match uri.scheme() {
        Some(s) if *s == Scheme::HTTPS => 443,
        Some(s) if *s == Scheme::HTTP => 80,
        _ => return None,
    };
    if !matches!(uri.path(), "" | "/") || uri.query().is_some() {
        return None;
    }

    let host = uri.host().filter(|h| !h.is_empty())?;
    match uri.port_u16() {
        Some(port) if port != default_port => Some(format!("{host}:{port}")),
        _ => Some(host.to_string()),
    }
}
