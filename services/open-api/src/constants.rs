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

// Signing scheme.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const REGION: &str = "cn-south-1";
pub const SERVICE: &str = "open-api";
pub const SCOPE_TERMINATOR: &str = "aws4_request";
pub const KEY_PREFIX: &str = "AWS4";

// Headers used in open-api requests.
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";

// Settings file keys.
pub const ACCESS_KEY: &str = "access_key";
pub const SECRET_KEY: &str = "secret_key";
pub const SCP_IP: &str = "scp_ip";
pub const SCHEME: &str = "scheme";
pub const DEFAULT_CONFIG_FILE: &str = "terraform.tfvars";
pub const DEFAULT_SCHEME: &str = "https";

// Env values used by open-api.
pub const SCP_ACCESS_KEY: &str = "SCP_ACCESS_KEY";
pub const SCP_SECRET_KEY: &str = "SCP_SECRET_KEY";
pub const SCP_IP_ENV: &str = "SCP_IP";
pub const SCP_CONFIG_FILE: &str = "SCP_CONFIG_FILE";
pub const SCP_SCHEME: &str = "SCP_SCHEME";

/// Path prefix shared by every open-api endpoint.
pub const API_PREFIX: &str = "/janus/20180725";
