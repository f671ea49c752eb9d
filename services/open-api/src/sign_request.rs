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

use crate::authenticate::RequestAuthenticator;
use crate::Credential;
use async_trait::async_trait;
use http::header::HOST;
use http::request::Parts;
use http::HeaderValue;
use scpsign_core::time::{now, DateTime};
use scpsign_core::{Context, Result, SignRequest, SigningRequest};

/// RequestSigner that implements the SCP open-api signing scheme.
///
/// The request must target `{scheme}://{host}{path}` without query string.
/// `host`, `content-type`, `x-amz-date`, `authorization` and (for requests
/// with a body) `x-amz-content-sha256` are written into the request.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: Option<&[u8]>,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Ok(());
        };

        let now = self.time.unwrap_or_else(now);
        let mut signed_req = SigningRequest::build(req)?;
        let host = signed_req.host().to_string();

        let headers = RequestAuthenticator::new(cred.clone()).authenticate(
            &signed_req.method,
            &signed_req.path,
            &host,
            body,
            now,
        )?;

        signed_req.headers.insert(HOST, HeaderValue::from_str(&host)?);
        for (name, value) in headers.iter() {
            signed_req.headers.insert(name.clone(), value.clone());
        }

        // Apply to the request.
        signed_req.apply(req)
    }
}
