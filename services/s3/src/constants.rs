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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used in signed requests.
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";

// Signing parameters. The provider accepts a single pseudo region.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const REGION: &str = "auto";
pub const SERVICE: &str = "s3";
/// Must list exactly the headers written by `SignedRequest::canonical_request`, in the same order.
pub const SIGNED_HEADERS: &str = "host;x-amz-content-sha256;x-amz-date";

// Env values used to build a client.
/// Env name of the access key id.
pub const OBJSIGN_ACCESS_KEY_ID: &str = "OBJSIGN_ACCESS_KEY_ID";
/// Env name of the secret access key.
pub const OBJSIGN_SECRET_ACCESS_KEY: &str = "OBJSIGN_SECRET_ACCESS_KEY";
/// Env name of the bucket.
pub const OBJSIGN_BUCKET: &str = "OBJSIGN_BUCKET";
/// Env name of the endpoint, like `https://<account>.r2.cloudflarestorage.com`.
pub const OBJSIGN_ENDPOINT: &str = "OBJSIGN_ENDPOINT";
/// Env name of the public CDN base url.
pub const OBJSIGN_CDN_URL: &str = "OBJSIGN_CDN_URL";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - '/' is kept so object keys keep their path segments.
pub static AWS_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// But used in query, where '/' is encoded as well.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
