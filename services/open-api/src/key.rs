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

use crate::constants::{KEY_PREFIX, SCOPE_TERMINATOR};
use log::debug;
use scpsign_core::hash::hmac_sha256;
use scpsign_core::utils::RedactBytes;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::RwLock;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// SigningKey is the secret derived for one `date/region/service/aws4_request` scope.
///
/// It is never persisted and is wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey([u8; 32]);

impl SigningKey {
    /// Raw key bytes, used as the HMAC key of the final signature.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SigningKey")
            .field(&RedactBytes::from(self.0.as_slice()))
            .finish()
    }
}

/// Derive the signing key through the four step HMAC-SHA256 chain.
///
/// ```text
/// kDate    = HMAC("AWS4" + secret, date_stamp)
/// kRegion  = HMAC(kDate, region)
/// kService = HMAC(kRegion, service)
/// kSigning = HMAC(kService, "aws4_request")
/// ```
pub fn derive_signing_key(
    secret_key: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> SigningKey {
    // Sign secret
    let secret = Zeroizing::new(format!("{KEY_PREFIX}{secret_key}"));
    // Sign date
    let sign_date = Zeroizing::new(hmac_sha256(secret.as_bytes(), date_stamp.as_bytes()));
    // Sign region
    let sign_region = Zeroizing::new(hmac_sha256(sign_date.as_slice(), region.as_bytes()));
    // Sign service
    let sign_service = Zeroizing::new(hmac_sha256(sign_region.as_slice(), service.as_bytes()));
    // Sign request
    SigningKey(hmac_sha256(
        sign_service.as_slice(),
        SCOPE_TERMINATOR.as_bytes(),
    ))
}

type ScopeKey = (String, String, String);

/// SigningKeyCache keeps derived keys per `(date_stamp, region, service)`.
///
/// A cache must only ever serve one secret key. Inserting a key for a newer
/// UTC day evicts every entry of older days.
#[derive(Debug, Default)]
pub struct SigningKeyCache {
    keys: RwLock<HashMap<ScopeKey, SigningKey>>,
}

impl SigningKeyCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached key for the scope or derive and remember it.
    pub fn get_or_derive(
        &self,
        secret_key: &str,
        date_stamp: &str,
        region: &str,
        service: &str,
    ) -> SigningKey {
        let scope = (date_stamp.to_string(), region.to_string(), service.to_string());

        if let Some(key) = self.keys.read().expect("lock poisoned").get(&scope) {
            return key.clone();
        }

        let key = derive_signing_key(secret_key, date_stamp, region, service);

        let mut keys = self.keys.write().expect("lock poisoned");
        // Date stamps are `YYYYMMDD`, so lexical order is calendar order.
        keys.retain(|(date, _, _), _| date.as_str() >= date_stamp);
        debug!("cached signing key for scope {date_stamp}/{region}/{service}");
        keys.insert(scope, key.clone());

        key
    }

    /// Number of cached scopes.
    pub fn len(&self) -> usize {
        self.keys.read().expect("lock poisoned").len()
    }

    /// Check if the cache holds no key.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
