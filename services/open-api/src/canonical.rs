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

use crate::constants::{X_AMZ_CONTENT_SHA_256, X_AMZ_DATE};
use http::Method;
use scpsign_core::hash::{hex_sha256, EMPTY_SHA256};
use scpsign_core::{Error, Result};
use std::fmt::{Display, Formatter, Write};

/// CanonicalRequest is the normalized form of a request that both sides hash.
///
/// The header block and `signed_headers` always list the same names in the
/// same order:
///
/// ```text
/// GET
/// /janus/20180725/azs
///
/// content-type:application/json
/// host:10.0.0.1
/// x-amz-date:20240101T000000Z
///
/// content-type;host;x-amz-date
/// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: Method,
    path: String,
    headers: Vec<(&'static str, String)>,
    signed_headers: String,
    payload_hash: String,
}

impl CanonicalRequest {
    /// HTTP method of the request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Canonical uri, which is the request path verbatim.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Canonical headers in signing order.
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    /// Header names joined by `;`.
    pub fn signed_headers(&self) -> &str {
        &self.signed_headers
    }

    /// Hex encoded sha256 of the payload.
    pub fn payload_hash(&self) -> &str {
        &self.payload_hash
    }

    /// Hex encoded sha256 of the canonical string.
    pub fn hashed(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        // Query string is never signed.
        writeln!(f)?;
        for (name, value) in &self.headers {
            writeln!(f, "{name}:{value}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        f.write_str(&self.payload_hash)
    }
}

/// Build the canonical request for one open-api call.
///
/// Requests without payload sign `content-type;host;x-amz-date`, requests
/// with payload (even an empty one) also sign `x-amz-content-sha256`.
pub fn build_canonical_request(
    method: &Method,
    path: &str,
    amz_date: &str,
    content_type: &str,
    host: &str,
    payload: Option<&[u8]>,
) -> Result<CanonicalRequest> {
    if method != Method::GET && method != Method::POST {
        return Err(Error::request_invalid(format!(
            "method {method} is not supported for signing"
        )));
    }
    if !path.starts_with('/') {
        return Err(Error::request_invalid(format!(
            "path must start with '/': {path}"
        )));
    }
    if path.contains('?') {
        return Err(Error::request_invalid(format!(
            "query string is not supported for signing: {path}"
        )));
    }
    if host.is_empty() {
        return Err(Error::request_invalid("host must not be empty"));
    }
    for (name, value) in [("path", path), ("host", host), ("content-type", content_type)] {
        if value.chars().any(|c| c.is_ascii_control()) {
            return Err(Error::request_invalid(format!(
                "{name} contains control characters"
            )));
        }
    }

    let payload_hash = match payload {
        Some(bs) if !bs.is_empty() => hex_sha256(bs),
        _ => EMPTY_SHA256.to_string(),
    };

    let mut headers = Vec::with_capacity(4);
    headers.push(("content-type", content_type.to_string()));
    headers.push(("host", host.to_string()));
    if payload.is_some() {
        headers.push((X_AMZ_CONTENT_SHA_256, payload_hash.clone()));
    }
    headers.push((X_AMZ_DATE, amz_date.to_string()));

    let mut signed_headers = String::with_capacity(64);
    for (idx, (name, _)) in headers.iter().enumerate() {
        if idx > 0 {
            signed_headers.push(';');
        }
        write!(signed_headers, "{name}")?;
    }

    Ok(CanonicalRequest {
        method: method.clone(),
        path: path.to_string(),
        headers,
        signed_headers,
        payload_hash,
    })
}
