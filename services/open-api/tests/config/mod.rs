use http::Method;
use scpsign_core::{Context, ErrorKind, StaticEnv};
use scpsign_file_read_tokio::TokioFileRead;
use scpsign_open_api::{authenticate, Config};
use std::collections::HashMap;

fn testdata(name: &str) -> String {
    format!("{}/testdata/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn ctx(envs: HashMap<String, String>) -> Context {
    Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv {
            home_dir: None,
            envs,
        })
}

#[tokio::test]
async fn test_load_settings_file() -> anyhow::Result<()> {
    let ctx = ctx(HashMap::from([(
        "SCP_CONFIG_FILE".to_string(),
        testdata("terraform.tfvars"),
    )]));

    let cfg = Config::default().load(&ctx).await?;
    assert_eq!(cfg.endpoint()?, "https://example.scp.local");

    // Settings feed straight into signing.
    let cred = cfg.credential()?;
    let headers = authenticate(
        &Method::GET,
        "/janus/20180725/azs",
        cfg.host()?,
        &cred,
        None,
        scpsign_core::time::parse_iso8601("20240101T000000Z")?,
    )?;
    assert!(headers["authorization"]
        .to_str()?
        .ends_with("Signature=3c3bb9493da6e86cf13c816a4f53927aa63b79b0fa28da3eb9c214a63c429dab"));
    Ok(())
}

#[tokio::test]
async fn test_missing_key_is_config_invalid() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("terraform.tfvars");
    tokio::fs::write(&path, "access_key = \"ak\"\nsecret_key = \"sk\"\n").await?;

    let ctx = ctx(HashMap::from([(
        "SCP_CONFIG_FILE".to_string(),
        path.to_string_lossy().to_string(),
    )]));

    let err = Config::default().load(&ctx).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(err.to_string().contains("scp_ip"));
    Ok(())
}

#[tokio::test]
async fn test_env_only_config() -> anyhow::Result<()> {
    let ctx = ctx(HashMap::from([
        ("SCP_ACCESS_KEY".to_string(), "ak".to_string()),
        ("SCP_SECRET_KEY".to_string(), "sk".to_string()),
        ("SCP_IP".to_string(), "10.0.0.1".to_string()),
        ("SCP_SCHEME".to_string(), "http".to_string()),
        (
            "SCP_CONFIG_FILE".to_string(),
            "/not/exist/terraform.tfvars".to_string(),
        ),
    ]));

    let cfg = Config::default().load(&ctx).await?;
    assert_eq!(cfg.endpoint()?, "http://10.0.0.1");
    Ok(())
}
