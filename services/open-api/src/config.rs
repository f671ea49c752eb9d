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

use crate::constants::*;
use crate::Credential;
use ini::{Ini, ParseOption};
use log::debug;
use scpsign_core::utils::Redact;
use scpsign_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};
use zeroize::{ZeroizeOnDrop, Zeroizing};

/// Config for SCP open-api.
///
/// Values are resolved with the following precedence: fields set in code,
/// then environment variables, then the settings file.
#[derive(Clone, Default, ZeroizeOnDrop)]
pub struct Config {
    /// `access_key` used to sign requests.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SCP_ACCESS_KEY`]
    /// - `access_key` in the settings file
    #[zeroize(skip)]
    pub access_key: Option<String>,
    /// `secret_key` used to sign requests.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SCP_SECRET_KEY`]
    /// - `secret_key` in the settings file
    pub secret_key: Option<String>,
    /// Address of the SCP control plane, like `10.0.0.1` or `scp.example.com:443`.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SCP_IP_ENV`]
    /// - `scp_ip` in the settings file
    #[zeroize(skip)]
    pub scp_ip: Option<String>,
    /// `http` or `https`, default to `https`.
    #[zeroize(skip)]
    pub scheme: Option<String>,
    /// Path of the settings file, default to `terraform.tfvars`.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SCP_CONFIG_FILE`]
    #[zeroize(skip)]
    pub config_file: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("scp_ip", &self.scp_ip)
            .field("scheme", &self.scheme)
            .field("config_file", &self.config_file)
            .finish()
    }
}

impl Config {
    /// Fill unset fields from environment variables.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        for (field, key) in [
            (&mut self.access_key, SCP_ACCESS_KEY),
            (&mut self.secret_key, SCP_SECRET_KEY),
            (&mut self.scp_ip, SCP_IP_ENV),
            (&mut self.scheme, SCP_SCHEME),
            (&mut self.config_file, SCP_CONFIG_FILE),
        ] {
            if field.is_none() {
                *field = ctx.env_var(key);
            }
        }

        self
    }

    /// Parse a settings file made of `key = "value"` lines.
    ///
    /// Lines starting with `#`, indented or not, are comments and
    /// surrounding quotes are stripped. Unknown keys are ignored.
    pub fn from_settings_str(content: &str) -> Result<Self> {
        let opt = ParseOption {
            enabled_quote: true,
            enabled_escape: false,
            ..Default::default()
        };
        // rust-ini only recognizes comments at the start of a line.
        let content = Zeroizing::new(
            content
                .lines()
                .map(str::trim_start)
                .filter(|line| !line.starts_with('#'))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        let ini = Ini::load_from_str_opt(&content, opt)
            .map_err(|e| Error::config_invalid("failed to parse settings file").with_source(e))?;
        let section = ini.general_section();
        let get = |key: &str| {
            section
                .get(key)
                .map(unquote)
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
        };

        let mut cfg = Config::default();
        cfg.access_key = get(ACCESS_KEY);
        cfg.secret_key = get(SECRET_KEY);
        cfg.scp_ip = get(SCP_IP);
        cfg.scheme = get(SCHEME);
        Ok(cfg)
    }

    /// Load and parse the settings file at `path`.
    pub async fn from_settings_file(ctx: &Context, path: &str) -> Result<Self> {
        let expanded = ctx.expand_home_dir(path).unwrap_or_else(|| path.to_string());
        let content = ctx.file_read_as_string(&expanded).await.map_err(|e| {
            Error::config_invalid(format!("failed to read settings file {expanded}"))
                .with_source(e)
        })?;

        let mut cfg = Self::from_settings_str(&content)?;
        cfg.config_file = Some(path.to_string());
        Ok(cfg)
    }

    /// Resolve the complete config from env and the settings file.
    ///
    /// The settings file is only required when env leaves some value unset.
    pub async fn load(self, ctx: &Context) -> Result<Self> {
        let mut cfg = self.from_env(ctx);
        if cfg.is_complete() {
            debug!("open-api config resolved without settings file");
            return Ok(cfg);
        }

        let path = cfg
            .config_file
            .clone()
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        let file = Self::from_settings_file(ctx, &path).await?;
        debug!("open-api config loaded from {path}");

        if let Some(v) = &file.access_key {
            cfg.access_key.get_or_insert_with(|| v.clone());
        }
        if let Some(v) = &file.secret_key {
            cfg.secret_key.get_or_insert_with(|| v.clone());
        }
        if let Some(v) = &file.scp_ip {
            cfg.scp_ip.get_or_insert_with(|| v.clone());
        }
        if let Some(v) = &file.scheme {
            cfg.scheme.get_or_insert_with(|| v.clone());
        }
        cfg.config_file.get_or_insert(path);

        cfg.validate()?;
        Ok(cfg)
    }

    fn is_complete(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some() && self.scp_ip.is_some()
    }

    /// Check that every required value is present and usable.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            (ACCESS_KEY, &self.access_key),
            (SECRET_KEY, &self.secret_key),
            (SCP_IP, &self.scp_ip),
        ] {
            if value.as_deref().map_or(true, str::is_empty) {
                return Err(Error::config_invalid(format!("{key} is missing")));
            }
        }

        match self.scheme.as_deref() {
            None | Some("http") | Some("https") => Ok(()),
            Some(v) => Err(Error::config_invalid(format!(
                "scheme must be http or https, got {v}"
            ))),
        }
    }

    /// Build the signing credential from this config.
    pub fn credential(&self) -> Result<Credential> {
        self.validate()?;
        Ok(Credential::new(
            self.access_key.clone().unwrap_or_default(),
            self.secret_key.clone().unwrap_or_default(),
        ))
    }

    /// Host that every request is sent to.
    pub fn host(&self) -> Result<&str> {
        match self.scp_ip.as_deref() {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(Error::config_invalid(format!("{SCP_IP} is missing"))),
        }
    }

    /// Base endpoint like `https://10.0.0.1`.
    pub fn endpoint(&self) -> Result<String> {
        let scheme = self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME);
        Ok(format!("{scheme}://{}", self.host()?))
    }
}

fn unquote(v: &str) -> &str {
    let v = v.trim();
    v.strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(v)
}
