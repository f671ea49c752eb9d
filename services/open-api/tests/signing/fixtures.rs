//! Frozen vectors. A change here means every deployed client breaks.

use super::{fixture_credential, fixture_time, HOST};
use http::header::AUTHORIZATION;
use http::Method;
use pretty_assertions::assert_eq;
use scpsign_core::hash::EMPTY_SHA256;
use scpsign_open_api::{authenticate, build_canonical_request, SigningScope};
use sha2::{Digest, Sha256};

#[test]
fn test_get_fixture() {
    let _ = env_logger::builder().is_test(true).try_init();

    let headers = authenticate(
        &Method::GET,
        "/janus/20180725/azs",
        HOST,
        &fixture_credential(),
        None,
        fixture_time(),
    )
    .expect("authenticate must succeed");

    assert_eq!(
        headers[AUTHORIZATION].to_str().unwrap(),
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20240101/cn-south-1/open-api/aws4_request, SignedHeaders=content-type;host;x-amz-date, Signature=3c3bb9493da6e86cf13c816a4f53927aa63b79b0fa28da3eb9c214a63c429dab"
    );
}

#[test]
fn test_post_fixture() {
    let body = br#"{"name":"vm-a"}"#;
    let headers = authenticate(
        &Method::POST,
        "/janus/20180725/servers",
        HOST,
        &fixture_credential(),
        Some(body.as_slice()),
        fixture_time(),
    )
    .expect("authenticate must succeed");

    assert_eq!(
        headers["x-amz-content-sha256"].to_str().unwrap(),
        hex::encode(Sha256::digest(body))
    );
    assert_eq!(
        headers[AUTHORIZATION].to_str().unwrap(),
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20240101/cn-south-1/open-api/aws4_request, SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date, Signature=d3ae90e23da5c18da2bfcc04eb39943b3a8fbb9c7ed88e0fcdb06c7e3028b75f"
    );
}

#[test]
fn test_empty_body_post_fixture() {
    let headers = authenticate(
        &Method::POST,
        "/janus/20180725/servers",
        HOST,
        &fixture_credential(),
        Some(b"".as_slice()),
        fixture_time(),
    )
    .expect("authenticate must succeed");

    assert_eq!(headers["x-amz-content-sha256"], EMPTY_SHA256);
    assert!(headers[AUTHORIZATION]
        .to_str()
        .unwrap()
        .ends_with("Signature=82c8b610425eec0a58551e3937960f680d82c74e05c17e608a5047894a9e387e"));
}

#[test]
fn test_canonical_request_layout() {
    let scope = SigningScope::new(fixture_time());
    let creq = build_canonical_request(
        &Method::GET,
        "/janus/20180725/azs",
        &scope.amz_date,
        "application/json",
        HOST,
        None,
    )
    .expect("canonical request must build");

    let lines: Vec<_> = creq.to_string().split('\n').map(str::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "GET",
            "/janus/20180725/azs",
            "",
            "content-type:application/json",
            "host:example.scp.local",
            "x-amz-date:20240101T000000Z",
            "",
            "content-type;host;x-amz-date",
            EMPTY_SHA256,
        ]
    );
}
