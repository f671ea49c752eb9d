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

use std::mem;

use http::request::Parts;
use http::uri::{Authority, PathAndQuery, Scheme};
use http::{HeaderMap, Method, Uri};

use crate::{Error, Result};

/// SigningRequest is the part of a request a signer works on.
///
/// Only the path is signed, so a request carrying a query string is refused
/// when building.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme, `https` unless the uri says otherwise.
    pub scheme: Scheme,
    /// Host (and port) the request is sent to.
    pub authority: Authority,
    /// Request path, used verbatim.
    pub path: String,
    /// Request headers, moved out of the request until [`SigningRequest::apply`].
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Take the signing view out of `parts`.
    pub fn build(parts: &mut Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();

        let Some(authority) = uri.authority else {
            return Err(Error::request_invalid(
                "request uri must carry the control plane host",
            ));
        };

        let path = match uri.path_and_query {
            Some(paq) if paq.query().is_some() => {
                return Err(Error::request_invalid(format!(
                    "query string is not supported for signing: {paq}"
                )));
            }
            Some(paq) => paq.path().to_string(),
            None => "/".to_string(),
        };

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTPS),
            authority,
            path,
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Host used in the canonical headers.
    pub fn host(&self) -> &str {
        self.authority.as_str()
    }

    /// Write the signed view back into `parts`.
    pub fn apply(self, parts: &mut Parts) -> Result<()> {
        let mut uri = mem::take(&mut parts.uri).into_parts();
        uri.scheme = Some(self.scheme);
        uri.authority = Some(self.authority);
        uri.path_and_query = Some(PathAndQuery::try_from(self.path)?);

        parts.method = self.method;
        parts.uri = Uri::from_parts(uri)?;
        parts.headers = self.headers;
        Ok(())
    }
}
