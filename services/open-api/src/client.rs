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

use crate::provide_credential::StaticCredentialProvider;
use crate::{Config, CreateServerRequest, Credential, RequestSigner, Resource};
use bytes::Bytes;
use http::{Method, StatusCode};
use log::debug;
use scpsign_core::{Context, Error, ProvideCredential, Result, Signer};
use serde::Serialize;
use serde_json::Value;

/// OpenApiClient signs and sends requests to one SCP control plane.
///
/// Transport goes through the [`HttpSend`](scpsign_core::HttpSend) of the
/// given context, so callers decide on TLS and timeouts.
#[derive(Clone, Debug)]
pub struct OpenApiClient {
    endpoint: String,
    signer: Signer<Credential>,
}

impl OpenApiClient {
    /// Create a client for `endpoint` like `https://10.0.0.1`.
    pub fn new(
        ctx: Context,
        endpoint: impl Into<String>,
        loader: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        Self::with_signer(
            endpoint,
            Signer::new(ctx, loader, RequestSigner::new()),
        )
    }

    /// Create a client with a prepared signer.
    pub fn with_signer(endpoint: impl Into<String>, signer: Signer<Credential>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { endpoint, signer }
    }

    /// Create a client from a resolved config.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        let cred = config.credential()?;
        Ok(Self::new(
            ctx,
            config.endpoint()?,
            StaticCredentialProvider::new(&cred.access_key, &cred.secret_key),
        ))
    }

    /// Base endpoint of this client.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a signed `GET` request.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::GET, path, None).await
    }

    /// Send a signed `POST` request with a JSON body.
    ///
    /// The body is serialized once, the same bytes are hashed and sent.
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value> {
        let bs = serde_json::to_vec(body).map_err(|e| {
            Error::request_invalid("failed to serialize request body").with_source(e)
        })?;
        self.send(Method::POST, path, Some(Bytes::from(bs))).await
    }

    /// List all items of a resource.
    pub async fn list(&self, resource: Resource) -> Result<Value> {
        self.get(&resource.path()).await
    }

    /// Create servers from the payload.
    pub async fn create_server(&self, req: &CreateServerRequest) -> Result<Value> {
        self.post(&Resource::Servers.path(), req).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Bytes>) -> Result<Value> {
        let url = format!("{}{path}", self.endpoint);
        let (mut parts, _) = http::Request::builder()
            .method(method.clone())
            .uri(&url)
            .body(())
            .map_err(|e| {
                Error::request_invalid(format!("invalid request url {url}")).with_source(e)
            })?
            .into_parts();

        self.signer.sign(&mut parts, body.as_deref()).await?;

        let req = http::Request::from_parts(parts, body.unwrap_or_default());
        debug!("sending {method} {url}");
        let resp = self.signer.context().http_send(req).await?;

        let status = resp.status();
        debug!("received {status} for {method} {url}");
        parse_response(status, resp.body())
    }
}

/// Turn a response into JSON or the matching error.
fn parse_response(status: StatusCode, body: &[u8]) -> Result<Value> {
    if status.is_success() {
        if body.is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(body).map_err(|e| {
            Error::unexpected("failed to decode response body as json")
                .with_status(status)
                .with_source(e)
        });
    }

    let text = String::from_utf8_lossy(body);
    if status == StatusCode::FORBIDDEN && text.to_ascii_lowercase().contains("signature") {
        return Err(
            Error::signature_rejected(format!("signature rejected by server: {text}"))
                .with_status(status),
        );
    }

    Err(
        Error::request_rejected(format!("request failed with {status}: {text}"))
            .with_status(status),
    )
}
