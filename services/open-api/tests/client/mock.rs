use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, Request, Response, StatusCode, Uri};
use scpsign_core::time::parse_iso8601;
use scpsign_core::{HttpSend, Result};
use scpsign_open_api::{authenticate, Credential};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// A request as received by the mock control plane.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// MockControlPlane verifies signatures the way the SCP server does.
///
/// It recomputes the `Authorization` header from the received request and
/// its own copy of the secret, then answers with a JSON echo.
#[derive(Debug, Clone)]
pub struct MockControlPlane {
    secret_key: String,
    failure: Option<StatusCode>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockControlPlane {
    pub fn new(secret_key: &str) -> Self {
        Self {
            secret_key: secret_key.to_string(),
            failure: None,
            requests: Arc::default(),
        }
    }

    pub fn with_failure(mut self, status: StatusCode) -> Self {
        self.failure = Some(status);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn verify(&self, req: &Request<Bytes>) -> bool {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };

        let Ok(now) = parse_iso8601(&header("x-amz-date")) else {
            return false;
        };
        let access_key = header("authorization")
            .split_once("Credential=")
            .and_then(|(_, rest)| rest.split_once('/'))
            .map(|(ak, _)| ak.to_string())
            .unwrap_or_default();
        let body = (req.method() == Method::POST).then(|| req.body().as_ref());

        match authenticate(
            req.method(),
            req.uri().path(),
            &header("host"),
            &Credential::new(access_key, self.secret_key.as_str()),
            body,
            now,
        ) {
            Ok(expected) => expected["authorization"] == header("authorization"),
            Err(_) => false,
        }
    }
}

fn json_response(status: StatusCode, body: serde_json::Value) -> Response<Bytes> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Bytes::from(body.to_string()))
        .unwrap()
}

#[async_trait]
impl HttpSend for MockControlPlane {
    async fn http_send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: req.method().clone(),
            uri: req.uri().clone(),
            headers: req.headers().clone(),
            body: req.body().clone(),
        });

        if !self.verify(&req) {
            return Ok(json_response(
                StatusCode::FORBIDDEN,
                json!({"code": 403, "message": "SignatureDoesNotMatch"}),
            ));
        }

        if let Some(status) = self.failure {
            return Ok(json_response(status, json!({"message": "internal error"})));
        }

        Ok(json_response(
            StatusCode::OK,
            json!({
                "method": req.method().as_str(),
                "path": req.uri().path(),
            }),
        ))
    }
}
