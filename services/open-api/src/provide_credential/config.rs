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

use crate::constants::{DEFAULT_CONFIG_FILE, SCP_CONFIG_FILE};
use crate::{Config, Credential};
use async_trait::async_trait;
use log::debug;
use scpsign_core::{Context, ProvideCredential, Result};

/// ConfigFileCredentialProvider loads credentials from the settings file.
///
/// The file path is resolved in the following order:
/// - the path given by [`ConfigFileCredentialProvider::with_path`]
/// - env value: `SCP_CONFIG_FILE`
/// - `terraform.tfvars` in the current directory
///
/// A missing file yields no credential so that a chain can move on.
#[derive(Debug, Default, Clone)]
pub struct ConfigFileCredentialProvider {
    path: Option<String>,
}

impl ConfigFileCredentialProvider {
    /// Create a new ConfigFileCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from `path` instead.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for ConfigFileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let path = self
            .path
            .clone()
            .or_else(|| ctx.env_var(SCP_CONFIG_FILE))
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let expanded = ctx.expand_home_dir(&path).unwrap_or_else(|| path.clone());
        let content = match ctx.file_read_as_string(&expanded).await {
            Ok(content) => content,
            Err(_) => {
                debug!("settings file not found at {expanded}");
                return Ok(None);
            }
        };

        let cfg = Config::from_settings_str(&content)?;
        match (&cfg.access_key, &cfg.secret_key) {
            (Some(ak), Some(sk)) => {
                debug!("loading credential from settings file {expanded}");
                Ok(Some(Credential::new(ak.as_str(), sk.as_str())))
            }
            _ => {
                debug!("incomplete credential in settings file, skipping");
                Ok(None)
            }
        }
    }
}
