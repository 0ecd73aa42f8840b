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

use crate::list::parse_list_objects;
use crate::{Config, Credential, ObjectSummary, RequestSigner, StoreConfig};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method, Request, StatusCode};
use log::{debug, warn};
use objsign_core::hash::{hex_sha256, EMPTY_STRING_SHA256};
use objsign_core::time::now;
use objsign_core::{Context, Error, Result};

/// Response of a completed upload or delete.
///
/// Any status the service answers with is carried here; only failures to obtain a
/// response are reported as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw response body.
    pub body: Bytes,
}

impl ObjectResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// ObjectStoreClient uploads, deletes and lists objects of a single bucket.
///
/// Every request is signed independently with a freshly captured timestamp, so a
/// client can be shared across tasks.
#[derive(Debug, Clone)]
pub struct ObjectStoreClient {
    ctx: Context,
    credential: Credential,
    config: StoreConfig,
    signer: RequestSigner,
}

impl ObjectStoreClient {
    /// Create a client, validating `config`.
    ///
    /// Fails with a config error when any field is missing or malformed.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let (credential, config) = config.build()?;
        let signer = RequestSigner::new(&config);

        debug!(
            "object store client created for bucket {} at {}",
            config.bucket(),
            config.endpoint()
        );
        Ok(Self {
            ctx,
            credential,
            config,
            signer,
        })
    }

    /// Validated config of this client.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Upload `body` to `remote_path`.
    ///
    /// `remote_path` must name an object: it can't be empty or contain `.` or `..`
    /// segments.
    ///
    /// Non-2xx answers are returned as a response, check [`ObjectResponse::is_success`].
    pub async fn upload(
        &self,
        body: impl Into<Bytes>,
        content_type: &str,
        remote_path: &str,
    ) -> Result<ObjectResponse> {
        let key = object_key(remote_path)?;
        let body = body.into();
        let payload_hash = hex_sha256(&body);

        let content_type = HeaderValue::from_str(content_type).map_err(|e| {
            Error::request_invalid(format!("content type {content_type:?} is invalid"))
                .with_source(e)
        })?;

        let resp = self
            .send(
                Method::PUT,
                key,
                &[],
                &payload_hash,
                Some(content_type),
                body,
            )
            .await?;
        Ok(ObjectResponse {
            status: resp.status(),
            body: resp.into_body(),
        })
    }

    /// Read the file at `local_path` through the context and upload it to `remote_path`.
    pub async fn upload_file(
        &self,
        local_path: &str,
        content_type: &str,
        remote_path: &str,
    ) -> Result<ObjectResponse> {
        object_key(remote_path)?;
        let content = self.ctx.file_read(local_path).await?;
        self.upload(content, content_type, remote_path).await
    }

    /// Delete the object at `remote_path`.
    ///
    /// The same key rules as [`ObjectStoreClient::upload`] apply, so a delete never
    /// targets the bucket itself.
    pub async fn delete(&self, remote_path: &str) -> Result<ObjectResponse> {
        let key = object_key(remote_path)?;
        let resp = self
            .send(
                Method::DELETE,
                key,
                &[],
                EMPTY_STRING_SHA256,
                None,
                Bytes::new(),
            )
            .await?;
        Ok(ObjectResponse {
            status: resp.status(),
            body: resp.into_body(),
        })
    }

    /// Public url of `remote_path` behind the CDN.
    ///
    /// `remote_path` is appended as is, without escaping.
    pub fn public_url(&self, remote_path: &str) -> String {
        format!("{}/{}", self.config.cdn_url(), remote_path)
    }

    /// List objects under `prefix`.
    ///
    /// Only the first page returned by the service is read. A non-200 status or an
    /// unparseable body yields an empty list; errors are only returned when no
    /// response could be obtained.
    pub async fn list(&self, prefix: &str) -> Result<Vec<ObjectSummary>> {
        let resp = self
            .send(
                Method::GET,
                "",
                &[("prefix", prefix)],
                EMPTY_STRING_SHA256,
                None,
                Bytes::new(),
            )
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!(
                "list objects with prefix {prefix:?} got unexpected status {status}: {}",
                String::from_utf8_lossy(resp.body())
            );
            return Ok(vec![]);
        }
        if resp.body().is_empty() {
            return Ok(vec![]);
        }

        match parse_list_objects(resp.body()) {
            Ok(objects) => Ok(objects),
            Err(err) => {
                warn!("list objects with prefix {prefix:?} got malformed response: {err:?}");
                Ok(vec![])
            }
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        payload_hash: &str,
        content_type: Option<HeaderValue>,
        body: Bytes,
    ) -> Result<http::Response<Bytes>> {
        let signed = self.signer.sign(
            &self.credential,
            &method,
            path,
            query,
            payload_hash,
            now(),
        )?;

        let url = format!("{}{}", self.config.endpoint(), signed.path_and_query());
        let mut req = Request::builder()
            .method(method)
            .uri(url)
            .body(body)
            .map_err(|e| Error::request_invalid("failed to build request").with_source(e))?;

        signed.apply(req.headers_mut())?;
        if let Some(content_type) = content_type {
            req.headers_mut().insert(CONTENT_TYPE, content_type);
        }

        debug!("sending {} {}", req.method(), req.uri());
        let resp = self.ctx.http_send(req).await?;
        debug!("got response status {} for {}", resp.status(), signed.canonical_uri);

        Ok(resp)
    }
}

/// Check that `remote_path` addresses an object inside the bucket and return it without
/// leading slashes.
///
/// An empty key would turn the request into a bucket operation. `.` and `..` segments are
/// collapsed by URL parsers on the way out, so the path sent would differ from the one
/// signed. A `%2e` in a key is safe: `%` itself is encoded when signing.
fn object_key(remote_path: &str) -> Result<&str> {
    let key = remote_path.trim_start_matches('/');
    if key.is_empty() {
        return Err(Error::request_invalid("object key must not be empty"));
    }
    if key.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(Error::request_invalid(format!(
            "object key {key:?} must not contain `.` or `..` segments"
        )));
    }
    Ok(key)
}
