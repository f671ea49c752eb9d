mod mock;

use mock::MockControlPlane;
use scpsign_core::{Context, ErrorKind};
use scpsign_open_api::{CreateServerRequest, OpenApiClient, Resource, StaticCredentialProvider};
use serde_json::json;
use sha2::{Digest, Sha256};

fn client(server: &MockControlPlane, secret: &str) -> OpenApiClient {
    let _ = env_logger::builder().is_test(true).try_init();

    OpenApiClient::new(
        Context::new().with_http_send(server.clone()),
        "https://10.0.0.1",
        StaticCredentialProvider::new("AKIDEXAMPLE", secret),
    )
}

#[tokio::test]
async fn test_list_every_resource() -> anyhow::Result<()> {
    let server = MockControlPlane::new("secret");
    let client = client(&server, "secret");

    for resource in Resource::ALL {
        let v = client.list(resource).await?;
        assert_eq!(v["path"], resource.path());
    }

    let seen = server.requests();
    assert_eq!(seen.len(), Resource::ALL.len());
    for req in seen {
        assert_eq!(req.method, http::Method::GET);
        assert!(req.body.is_empty());
        assert_eq!(req.headers["host"], "10.0.0.1");
        assert!(req.headers.get("x-amz-content-sha256").is_none());
    }
    Ok(())
}

#[tokio::test]
async fn test_create_server_hashes_sent_bytes() -> anyhow::Result<()> {
    let server = MockControlPlane::new("secret");
    let client = client(&server, "secret");

    let mut payload = CreateServerRequest::default();
    payload.name = "vm-a".to_string();
    client.create_server(&payload).await?;

    let seen = server.requests();
    assert_eq!(seen.len(), 1);
    let req = &seen[0];
    assert_eq!(req.uri.path(), "/janus/20180725/servers");
    assert_eq!(
        req.headers["x-amz-content-sha256"].to_str()?,
        hex::encode(Sha256::digest(&req.body))
    );

    let sent: CreateServerRequest = serde_json::from_slice(&req.body)?;
    assert_eq!(sent, payload);
    Ok(())
}

#[tokio::test]
async fn test_post_arbitrary_json() -> anyhow::Result<()> {
    let server = MockControlPlane::new("secret");
    let client = client(&server, "secret");

    let v = client
        .post("/janus/20180725/servers", &json!({"name": "vm-a"}))
        .await?;
    assert_eq!(v["method"], "POST");
    Ok(())
}

#[tokio::test]
async fn test_wrong_secret_is_signature_rejected() {
    let server = MockControlPlane::new("secret");
    let client = client(&server, "not-the-secret");

    let err = client.list(Resource::AvailabilityZones).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SignatureRejected);
    assert_eq!(err.status(), Some(http::StatusCode::FORBIDDEN));
}

#[tokio::test]
async fn test_server_errors_are_request_rejected() {
    let server =
        MockControlPlane::new("secret").with_failure(http::StatusCode::INTERNAL_SERVER_ERROR);
    let client = client(&server, "secret");

    let err = client.list(Resource::Images).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestRejected);
    assert_eq!(err.status(), Some(http::StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_missing_credential_fails_before_sending() {
    let server = MockControlPlane::new("secret");
    let client = client(&server, "");

    let err = client.list(Resource::Vpcs).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_transport_failure_is_unexpected() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Nothing listens on the discard port.
    let client = OpenApiClient::new(
        Context::new().with_http_send(scpsign_http_send_reqwest::ReqwestHttpSend::default()),
        "http://127.0.0.1:9",
        StaticCredentialProvider::new("AKIDEXAMPLE", "secret"),
    );

    let err = client.list(Resource::Subnets).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}
