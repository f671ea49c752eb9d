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

use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// The error type for scpsign operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials exist but are invalid/malformed
    CredentialInvalid,

    /// Request cannot be signed (unsupported method, query string, bad header value, etc.)
    RequestInvalid,

    /// Configuration error (missing fields, unreadable settings file)
    ConfigInvalid,

    /// The server refused the request because the signature did not match.
    ///
    /// This usually means the canonical request layout drifted from what the
    /// server recomputes.
    SignatureRejected,

    /// The server answered with a non-success status for any other reason.
    RequestRejected,

    /// Unexpected errors (network, I/O, undecodable responses, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the HTTP status returned by the server.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Check if this error was produced by the remote server.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::SignatureRejected | ErrorKind::RequestRejected
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a signature rejected error
    pub fn signature_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SignatureRejected, message)
    }

    /// Create a request rejected error
    pub fn request_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestRejected, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::SignatureRejected => write!(f, "signature rejected"),
            ErrorKind::RequestRejected => write!(f, "request rejected"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Map foreign errors into an [`ErrorKind`] while keeping them as source.
macro_rules! impl_from {
    ($($err:ty => $kind:ident),+ $(,)?) => {
        $(
            impl From<$err> for Error {
                fn from(err: $err) -> Self {
                    Self::new(ErrorKind::$kind, err.to_string()).with_source(err)
                }
            }
        )+
    };
}

impl_from! {
    fmt::Error => Unexpected,
    std::io::Error => Unexpected,
    http::Error => RequestInvalid,
    http::header::InvalidHeaderValue => RequestInvalid,
    http::uri::InvalidUri => RequestInvalid,
    http::uri::InvalidUriParts => RequestInvalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_kind() {
        let err = Error::config_invalid("missing scp_ip");
        assert_eq!(err.to_string(), "invalid configuration: missing scp_ip");
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.status().is_none());
    }

    #[test]
    fn test_error_with_status() {
        let err = Error::signature_rejected("signature does not match")
            .with_status(StatusCode::FORBIDDEN);
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
        assert!(err.is_rejected());
        assert!(!Error::unexpected("io").is_rejected());
    }

    #[test]
    fn test_from_io_error_keeps_source() {
        use std::error::Error as _;

        let err: Error =
            std::io::Error::new(std::io::ErrorKind::NotFound, "terraform.tfvars").into();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_invalid_header_value() {
        let err: Error = http::HeaderValue::from_str("bad\nvalue")
            .map(|_| ())
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
