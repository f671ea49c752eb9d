//! Tests against a real SCP control plane.
//!
//! Set `SCPSIGN_OPEN_API_TEST=on` together with `SCP_ACCESS_KEY`,
//! `SCP_SECRET_KEY` and `SCP_IP` (or a `.env` file) to run them.

use log::warn;
use scpsign_core::{Context, OsEnv};
use scpsign_file_read_tokio::TokioFileRead;
use scpsign_http_send_reqwest::ReqwestHttpSend;
use scpsign_open_api::{Config, OpenApiClient, Resource};
use std::env;
use std::time::Duration;

async fn init_client() -> Option<OpenApiClient> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("SCPSIGN_OPEN_API_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .danger_accept_invalid_certs(true)
        .build()
        .expect("reqwest client must build");
    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::new(http))
        .with_env(OsEnv);

    let config = Config::default()
        .load(&ctx)
        .await
        .expect("config must be loaded");
    Some(OpenApiClient::from_config(ctx, &config).expect("client must be created"))
}

#[tokio::test]
async fn test_list_availability_zones() -> anyhow::Result<()> {
    let Some(client) = init_client().await else {
        warn!("SCPSIGN_OPEN_API_TEST is not set, skipped");
        return Ok(());
    };

    let v = client.list(Resource::AvailabilityZones).await?;
    assert!(!v.is_null());
    Ok(())
}

#[tokio::test]
async fn test_list_every_resource() -> anyhow::Result<()> {
    let Some(client) = init_client().await else {
        warn!("SCPSIGN_OPEN_API_TEST is not set, skipped");
        return Ok(());
    };

    for resource in Resource::ALL {
        client.list(resource).await?;
    }
    Ok(())
}
