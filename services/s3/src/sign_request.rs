use crate::constants::{
    ALGORITHM, AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET, SERVICE, SIGNED_HEADERS,
    X_AMZ_CONTENT_SHA_256, X_AMZ_DATE,
};
use crate::{Credential, StoreConfig};
use http::header::{AUTHORIZATION, HOST};
use http::{HeaderMap, HeaderValue, Method};
use log::debug;
use objsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use objsign_core::time::{date_of_iso8601, format_iso8601, DateTime};
use objsign_core::Result;
use percent_encoding::utf8_percent_encode;
use std::fmt::Write;

/// RequestSigner that implements AWS SigV4 for one bucket.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer holds no secret and no mutable state: the credential is lent for each
/// call and the output only depends on the arguments.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,
    host: String,
    bucket: String,
}

impl RequestSigner {
    /// Create a new signer for the bucket described by `config`.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            service: SERVICE.to_string(),
            region: config.region().to_string(),
            host: config.host().to_string(),
            bucket: config.bucket().to_string(),
        }
    }

    /// Sign a request against `path` inside the bucket.
    ///
    /// - `path` is the object key; an empty path addresses the bucket itself.
    /// - `query` is the full list of query parameters, in any order.
    /// - `payload_hash` is the hex SHA256 of the body that will be sent.
    /// - `now` must be captured once per request; the returned value carries the
    ///   `x-amz-date` derived from it.
    pub fn sign(
        &self,
        cred: &Credential,
        method: &Method,
        path: &str,
        query: &[(&str, &str)],
        payload_hash: &str,
        now: DateTime,
    ) -> Result<SignedRequest> {
        let amz_date = format_iso8601(now);

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = format!(
            "{}/{}/{}/aws4_request",
            date_of_iso8601(&amz_date),
            self.region,
            self.service
        );
        debug!("calculated scope: {scope}");

        let mut signed = SignedRequest {
            method: method.clone(),
            host: self.host.clone(),
            canonical_uri: canonical_uri(&self.bucket, path),
            canonical_query_string: canonical_query_string(query),
            payload_hash: payload_hash.to_string(),
            amz_date,
            scope,
            authorization: String::new(),
        };

        let string_to_sign = signed.string_to_sign()?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            cred.secret_access_key(),
            date_of_iso8601(&signed.amz_date),
            &self.region,
            &self.service,
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        signed.authorization = format!(
            "{ALGORITHM} Credential={}/{}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            cred.access_key_id(),
            signed.scope,
        );
        Ok(signed)
    }
}

/// SignedRequest is the outcome of signing a single request.
///
/// It is built fresh for every call and must be applied to the request it was
/// computed for: the timestamp inside is the one that has been signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// HTTP method.
    pub method: Method,
    /// Value of the `host` header.
    pub host: String,
    /// Percent encoded `/<bucket>[/<key>]`.
    pub canonical_uri: String,
    /// Sorted and encoded query, `k=v` pairs joined by `&`.
    pub canonical_query_string: String,
    /// Hex SHA256 of the body.
    pub payload_hash: String,
    /// `x-amz-date` value, like `20220313T072004Z`.
    pub amz_date: String,
    /// Credential scope, like `20220313/auto/s3/aws4_request`.
    pub scope: String,
    /// Value of the `authorization` header.
    pub authorization: String,
}

impl SignedRequest {
    /// Path and query to send, identical to what has been signed.
    pub fn path_and_query(&self) -> String {
        if self.canonical_query_string.is_empty() {
            self.canonical_uri.clone()
        } else {
            format!("{}?{}", self.canonical_uri, self.canonical_query_string)
        }
    }

    /// Build the canonical request.
    ///
    /// ```shell
    /// GET
    /// /<bucket>
    /// prefix=
    /// host:<host>
    /// x-amz-content-sha256:<payload_hash>
    /// x-amz-date:<amz_date>
    ///
    /// host;x-amz-content-sha256;x-amz-date
    /// <payload_hash>
    /// ```
    pub fn canonical_request(&self) -> Result<String> {
        // 256 is specially chosen to avoid reallocation for most requests.
        let mut f = String::with_capacity(256);

        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.canonical_uri)?;
        writeln!(f, "{}", self.canonical_query_string)?;
        // Keep in sync with SIGNED_HEADERS.
        writeln!(f, "host:{}", self.host)?;
        writeln!(f, "{X_AMZ_CONTENT_SHA_256}:{}", self.payload_hash)?;
        writeln!(f, "{X_AMZ_DATE}:{}", self.amz_date)?;
        writeln!(f)?;
        writeln!(f, "{SIGNED_HEADERS}")?;
        write!(f, "{}", self.payload_hash)?;

        Ok(f)
    }

    /// Build the string to sign.
    ///
    /// ```shell
    /// AWS4-HMAC-SHA256
    /// 20220313T072004Z
    /// 20220313/auto/s3/aws4_request
    /// <hashed_canonical_request>
    /// ```
    pub fn string_to_sign(&self) -> Result<String> {
        let creq = self.canonical_request()?;
        debug!("calculated canonical request: {creq}");

        let mut f = String::with_capacity(128);
        writeln!(f, "{ALGORITHM}")?;
        writeln!(f, "{}", self.amz_date)?;
        writeln!(f, "{}", self.scope)?;
        write!(f, "{}", hex_sha256(creq.as_bytes()))?;
        Ok(f)
    }

    /// Write `host`, `x-amz-content-sha256`, `x-amz-date` and `authorization` into headers.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(HOST, HeaderValue::from_str(&self.host)?);
        headers.insert(
            X_AMZ_CONTENT_SHA_256,
            HeaderValue::from_str(&self.payload_hash)?,
        );
        headers.insert(X_AMZ_DATE, HeaderValue::from_str(&self.amz_date)?);

        let mut authorization = HeaderValue::from_str(&self.authorization)?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        Ok(())
    }
}

fn canonical_uri(bucket: &str, path: &str) -> String {
    let mut uri = format!("/{}", utf8_percent_encode(bucket, &AWS_URI_ENCODE_SET));
    if !path.is_empty() {
        uri.push('/');
        uri.extend(utf8_percent_encode(
            path.trim_start_matches('/'),
            &AWS_URI_ENCODE_SET,
        ));
    }
    uri
}

fn canonical_query_string(query: &[(&str, &str)]) -> String {
    let mut pairs = query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    // Sort by encoded param name, then value.
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn generate_signing_key(secret: &str, date: &str, region: &str, service: &str) -> [u8; 32] {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(&sign_date, region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(&sign_region, service.as_bytes());
    // Sign request
    hmac_sha256(&sign_service, "aws4_request".as_bytes())
}
