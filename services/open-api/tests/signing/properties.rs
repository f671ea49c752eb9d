use super::{fixture_credential, fixture_time, HOST};
use http::header::AUTHORIZATION;
use http::{HeaderMap, Method};
use scpsign_core::time::parse_iso8601;
use scpsign_core::ErrorKind;
use scpsign_open_api::{authenticate, Credential, RequestAuthenticator};
use serde_json::json;
use test_case::test_case;

fn signature(headers: &HeaderMap) -> String {
    let auth = headers[AUTHORIZATION].to_str().unwrap();
    auth.rsplit_once("Signature=").unwrap().1.to_string()
}

fn signed_headers(headers: &HeaderMap) -> String {
    let auth = headers[AUTHORIZATION].to_str().unwrap();
    let (_, rest) = auth.split_once("SignedHeaders=").unwrap();
    rest.split_once(',').unwrap().0.to_string()
}

fn post(path: &str, body: &[u8], ts: &str) -> HeaderMap {
    authenticate(
        &Method::POST,
        path,
        HOST,
        &fixture_credential(),
        Some(body),
        parse_iso8601(ts).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_authenticate_is_deterministic() {
    let body = serde_json::to_vec(&json!({"name": "vm-a", "cores": 2})).unwrap();
    let a = post("/janus/20180725/servers", &body, "20240101T000000Z");
    let b = post("/janus/20180725/servers", &body, "20240101T000000Z");
    assert_eq!(a, b);
}

#[test]
fn test_cached_and_uncached_are_identical() {
    let auth = RequestAuthenticator::new(fixture_credential()).with_key_cache();
    for _ in 0..3 {
        let cached = auth
            .authenticate(&Method::GET, "/janus/20180725/vpcs", HOST, None, fixture_time())
            .unwrap();
        let fresh = authenticate(
            &Method::GET,
            "/janus/20180725/vpcs",
            HOST,
            &fixture_credential(),
            None,
            fixture_time(),
        )
        .unwrap();
        assert_eq!(cached, fresh);
    }
}

#[test_case("/janus/20180725/servers", br#"{"name":"vm-b"}"#, "20240101T000000Z"; "body")]
#[test_case("/janus/20180725/servers/", br#"{"name":"vm-a"}"#, "20240101T000000Z"; "path")]
#[test_case("/janus/20180725/servers", br#"{"name":"vm-a"}"#, "20240101T000001Z"; "timestamp")]
#[test_case("/janus/20180725/servers", br#"{"name":"vm-a","x":1}"#, "20240101T000000Z"; "unrelated field")]
#[test_case("/janus/20180725/servers", br#"{"name": "vm-a"}"#, "20240101T000000Z"; "whitespace")]
fn test_signature_is_sensitive_to(path: &str, body: &[u8], ts: &str) {
    let base = post("/janus/20180725/servers", br#"{"name":"vm-a"}"#, "20240101T000000Z");
    let changed = post(path, body, ts);
    assert_ne!(signature(&base), signature(&changed));
}

#[test]
fn test_signature_depends_on_secret() {
    let other = authenticate(
        &Method::GET,
        "/janus/20180725/azs",
        HOST,
        &Credential::new("AKIDEXAMPLE", "another-secret"),
        None,
        fixture_time(),
    )
    .unwrap();
    let base = authenticate(
        &Method::GET,
        "/janus/20180725/azs",
        HOST,
        &fixture_credential(),
        None,
        fixture_time(),
    )
    .unwrap();
    assert_ne!(signature(&base), signature(&other));
}

#[test]
fn test_bodiless_and_body_variants() {
    let get = authenticate(
        &Method::GET,
        "/janus/20180725/servers",
        HOST,
        &fixture_credential(),
        None,
        fixture_time(),
    )
    .unwrap();
    assert_eq!(signed_headers(&get), "content-type;host;x-amz-date");
    assert!(!get.contains_key("x-amz-content-sha256"));

    let post = post("/janus/20180725/servers", b"{}", "20240101T000000Z");
    assert_eq!(
        signed_headers(&post),
        "content-type;host;x-amz-content-sha256;x-amz-date"
    );
    assert!(post.contains_key("x-amz-content-sha256"));
}

#[test]
fn test_signed_headers_are_sorted() {
    for headers in [
        post("/janus/20180725/servers", b"{}", "20240101T000000Z"),
        authenticate(
            &Method::GET,
            "/janus/20180725/azs",
            HOST,
            &fixture_credential(),
            None,
            fixture_time(),
        )
        .unwrap(),
    ] {
        let sh = signed_headers(&headers);
        let names: Vec<_> = sh.split(';').collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}

#[test]
fn test_date_and_stamp_share_one_instant() {
    // One second before midnight must not leak the next day into the scope.
    let headers = authenticate(
        &Method::GET,
        "/janus/20180725/azs",
        HOST,
        &fixture_credential(),
        None,
        parse_iso8601("20231231T235959Z").unwrap(),
    )
    .unwrap();

    assert_eq!(headers["x-amz-date"], "20231231T235959Z");
    assert!(headers[AUTHORIZATION]
        .to_str()
        .unwrap()
        .contains("/20231231/cn-south-1/open-api/aws4_request,"));
}

#[test_case(Method::PUT; "put")]
#[test_case(Method::DELETE; "delete")]
#[test_case(Method::PATCH; "patch")]
fn test_unsupported_methods(method: Method) {
    let err = authenticate(
        &method,
        "/janus/20180725/servers",
        HOST,
        &fixture_credential(),
        None,
        fixture_time(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
}

#[test]
fn test_secret_never_in_errors_or_debug() {
    let cred = Credential::new("AKIDEXAMPLE", "very-secret-value-0001");
    let err = authenticate(
        &Method::PUT,
        "/janus/20180725/servers",
        HOST,
        &cred,
        None,
        fixture_time(),
    )
    .unwrap_err();

    assert!(!format!("{err}").contains("very-secret-value-0001"));
    assert!(!format!("{err:?}").contains("very-secret-value-0001"));
    assert!(!format!("{cred:?}").contains("very-secret-value-0001"));

    let auth = RequestAuthenticator::new(cred);
    assert!(!format!("{auth:?}").contains("very-secret-value-0001"));
}
