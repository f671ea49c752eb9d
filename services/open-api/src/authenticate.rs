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

use crate::canonical::build_canonical_request;
use crate::constants::{CONTENT_TYPE_JSON, X_AMZ_CONTENT_SHA_256, X_AMZ_DATE};
use crate::credential::Credential;
use crate::key::{derive_signing_key, SigningKeyCache};
use crate::signature::{authorization_header, sign, string_to_sign, SigningScope};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method};
use log::debug;
use scpsign_core::time::DateTime;
use scpsign_core::{Error, Result, SigningCredential};

/// RequestAuthenticator produces the authentication headers for open-api calls.
///
/// An authenticator is bound to one credential for its whole life, which
/// makes it safe to cache derived signing keys per UTC day.
#[derive(Debug)]
pub struct RequestAuthenticator {
    credential: Credential,
    cache: Option<SigningKeyCache>,
}

impl RequestAuthenticator {
    /// Create a new authenticator for the credential.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            cache: None,
        }
    }

    /// Reuse derived signing keys between requests of the same day.
    pub fn with_key_cache(mut self) -> Self {
        self.cache = Some(SigningKeyCache::new());
        self
    }

    /// The credential used by this authenticator.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Build the headers that authenticate `method path` at `now`.
    ///
    /// The returned map contains `content-type`, `x-amz-date`,
    /// `x-amz-content-sha256` (only when `body` is given) and `authorization`.
    /// `body` must be the exact bytes that will be transmitted.
    pub fn authenticate(
        &self,
        method: &Method,
        path: &str,
        host: &str,
        body: Option<&[u8]>,
        now: DateTime,
    ) -> Result<HeaderMap> {
        let cred = &self.credential;
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "access_key and secret_key must not be empty",
            ));
        }

        let scope = SigningScope::new(now);
        let creq = build_canonical_request(
            method,
            path,
            &scope.amz_date,
            CONTENT_TYPE_JSON,
            host,
            body,
        )?;
        debug!("calculated canonical request: {creq}");

        let credential_scope = scope.credential_scope();
        debug!("calculated scope: {credential_scope}");

        let string_to_sign = string_to_sign(&creq.hashed(), &scope.amz_date, &credential_scope);
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = match &self.cache {
            Some(cache) => cache.get_or_derive(
                &cred.secret_key,
                &scope.date_stamp,
                scope.region,
                scope.service,
            ),
            None => derive_signing_key(
                &cred.secret_key,
                &scope.date_stamp,
                scope.region,
                scope.service,
            ),
        };
        let signature = sign(&string_to_sign, &signing_key);

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(X_AMZ_DATE, HeaderValue::from_str(&scope.amz_date)?);
        if body.is_some() {
            headers.insert(
                X_AMZ_CONTENT_SHA_256,
                HeaderValue::from_str(creq.payload_hash())?,
            );
        }

        let mut authorization = HeaderValue::from_str(&authorization_header(
            &cred.access_key,
            &credential_scope,
            creq.signed_headers(),
            &signature,
        ))
        .map_err(|e| {
            Error::credential_invalid("access_key is not a valid header value").with_source(e)
        })?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        Ok(headers)
    }
}

/// Authenticate a single request without caching anything.
pub fn authenticate(
    method: &Method,
    path: &str,
    host: &str,
    credential: &Credential,
    body: Option<&[u8]>,
    now: DateTime,
) -> Result<HeaderMap> {
    RequestAuthenticator::new(credential.clone()).authenticate(method, path, host, body, now)
}
