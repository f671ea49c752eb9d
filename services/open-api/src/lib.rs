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

//! SCP open-api signing implementation for scpsign.
//!
//! SCP control planes authenticate requests with an `AWS4-HMAC-SHA256`
//! scheme pinned to region `cn-south-1` and service `open-api`. This crate
//! computes the exact header set the server recomputes, and ships credential
//! providers, settings loading and a small client on top of it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use scpsign_core::{Context, OsEnv, Signer};
//! use scpsign_file_read_tokio::TokioFileRead;
//! use scpsign_http_send_reqwest::ReqwestHttpSend;
//! use scpsign_open_api::{DefaultCredentialProvider, RequestSigner};
//!
//! #[tokio::main]
//! async fn main() -> scpsign_core::Result<()> {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//!
//!     let mut req = http::Request::get("https://10.0.0.1/janus/20180725/azs")
//!         .body(())
//!         .unwrap()
//!         .into_parts()
//!         .0;
//!
//!     signer.sign(&mut req, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! Pure header computation is available without any context:
//!
//! ```
//! use http::Method;
//! use scpsign_core::time::parse_iso8601;
//! use scpsign_open_api::{authenticate, Credential};
//!
//! let headers = authenticate(
//!     &Method::GET,
//!     "/janus/20180725/azs",
//!     "example.scp.local",
//!     &Credential::new("AKIDEXAMPLE", "secret"),
//!     None,
//!     parse_iso8601("20240101T000000Z").unwrap(),
//! )
//! .unwrap();
//! assert!(headers.contains_key("authorization"));
//! ```
//!
//! ## Credential Sources
//!
//! ```bash
//! export SCP_ACCESS_KEY=your-access-key
//! export SCP_SECRET_KEY=your-secret-key
//! ```
//!
//! or a `terraform.tfvars` settings file (path overridable with `SCP_CONFIG_FILE`):
//!
//! ```text
//! access_key = "your-access-key"
//! secret_key = "your-secret-key"
//! scp_ip     = "10.0.0.1"
//! ```

mod constants;

mod authenticate;
pub use authenticate::{authenticate, RequestAuthenticator};

mod canonical;
pub use canonical::{build_canonical_request, CanonicalRequest};

mod client;
pub use client::OpenApiClient;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod key;
pub use key::{derive_signing_key, SigningKey, SigningKeyCache};

mod provide_credential;
pub use provide_credential::*;

mod resource;
pub use resource::Resource;

mod server;
pub use server::{AdvanceParam, CreateServerRequest, Disk, Location, Network};

mod sign_request;
pub use sign_request::RequestSigner;

mod signature;
pub use signature::{authorization_header, sign, string_to_sign, SigningScope};
