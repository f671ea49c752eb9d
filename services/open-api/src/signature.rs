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

use crate::constants::{ALGORITHM, REGION, SCOPE_TERMINATOR, SERVICE};
use crate::key::SigningKey;
use scpsign_core::hash::hex_hmac_sha256;
use scpsign_core::time::{format_date, format_iso8601, DateTime};

/// SigningScope is captured once per request.
///
/// `date_stamp` and `amz_date` are two renderings of the same instant so
/// they can never disagree across a day boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningScope {
    /// `YYYYMMDD`
    pub date_stamp: String,
    /// `YYYYMMDDTHHMMSSZ`
    pub amz_date: String,
    pub region: &'static str,
    pub service: &'static str,
}

impl SigningScope {
    /// Capture the scope of the open-api service at `now`.
    pub fn new(now: DateTime) -> Self {
        Self {
            date_stamp: format_date(now),
            amz_date: format_iso8601(now),
            region: REGION,
            service: SERVICE,
        }
    }

    /// Scope: "20240101/cn-south-1/open-api/aws4_request"
    pub fn credential_scope(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.date_stamp, self.region, self.service, SCOPE_TERMINATOR
        )
    }
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20240101T000000Z
/// 20240101/cn-south-1/open-api/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(
    hashed_canonical_request: &str,
    amz_date: &str,
    credential_scope: &str,
) -> String {
    format!("{ALGORITHM}\n{amz_date}\n{credential_scope}\n{hashed_canonical_request}")
}

/// Calculate the hex encoded signature of a string to sign.
pub fn sign(string_to_sign: &str, signing_key: &SigningKey) -> String {
    hex_hmac_sha256(signing_key.as_bytes(), string_to_sign.as_bytes())
}

/// Render the `Authorization` header value.
pub fn authorization_header(
    access_key: &str,
    credential_scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{ALGORITHM} Credential={access_key}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::derive_signing_key;
    use pretty_assertions::assert_eq;
    use scpsign_core::time::parse_iso8601;

    #[test]
    fn test_scope_from_one_instant() {
        let now = parse_iso8601("20240101T235959Z").unwrap();
        let scope = SigningScope::new(now);

        assert_eq!(scope.date_stamp, "20240101");
        assert_eq!(scope.amz_date, "20240101T235959Z");
        assert_eq!(
            scope.credential_scope(),
            "20240101/cn-south-1/open-api/aws4_request"
        );
    }

    #[test]
    fn test_string_to_sign_and_signature() {
        let scope = SigningScope::new(parse_iso8601("20240101T000000Z").unwrap());
        let sts = string_to_sign(
            "a3de3ef4293483337fcc220ef7a132432f710788647f355058b234e4b6dd502d",
            &scope.amz_date,
            &scope.credential_scope(),
        );
        assert_eq!(
            sts,
            "AWS4-HMAC-SHA256\n20240101T000000Z\n20240101/cn-south-1/open-api/aws4_request\na3de3ef4293483337fcc220ef7a132432f710788647f355058b234e4b6dd502d"
        );

        let key = derive_signing_key("secret", &scope.date_stamp, scope.region, scope.service);
        assert_eq!(
            sign(&sts, &key),
            "3c3bb9493da6e86cf13c816a4f53927aa63b79b0fa28da3eb9c214a63c429dab"
        );
    }

    #[test]
    fn test_authorization_header() {
        assert_eq!(
            authorization_header(
                "AKIDEXAMPLE",
                "20240101/cn-south-1/open-api/aws4_request",
                "content-type;host;x-amz-date",
                "3c3bb9493da6e86cf13c816a4f53927aa63b79b0fa28da3eb9c214a63c429dab",
            ),
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20240101/cn-south-1/open-api/aws4_request, SignedHeaders=content-type;host;x-amz-date, Signature=3c3bb9493da6e86cf13c816a4f53927aa63b79b0fa28da3eb9c214a63c429dab"
        );
    }
}
