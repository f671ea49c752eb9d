//! Create a server from the default payload template.
//!
//! The payload is written to `payload.json` before it is sent so that it can
//! be inspected or reused. Set `SCP_INSECURE=true` for control planes with
//! self-signed certificates.

use anyhow::Result;
use scpsign_core::{Context, OsEnv};
use scpsign_file_read_tokio::TokioFileRead;
use scpsign_http_send_reqwest::ReqwestHttpSend;
use scpsign_open_api::{Config, CreateServerRequest, OpenApiClient};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let insecure = env::var("SCP_INSECURE").is_ok_and(|v| v == "true");
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .danger_accept_invalid_certs(insecure)
        .build()?;

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::new(http))
        .with_env(OsEnv);

    let config = Config::default().load(&ctx).await?;
    let client = OpenApiClient::from_config(ctx, &config)?;

    let payload = CreateServerRequest::default();
    let path = env::args().nth(1).unwrap_or_else(|| "payload.json".to_string());
    tokio::fs::write(&path, serde_json::to_vec_pretty(&payload)?).await?;
    println!("{path} created successfully.");

    println!("\n--- Creating VM ---");
    match client.create_server(&payload).await {
        Ok(v) => {
            println!("VM created successfully:");
            println!("{}", serde_json::to_string_pretty(&v)?);
        }
        Err(e) => {
            eprintln!("VM creation failed: {e}");
            if let Some(status) = e.status() {
                eprintln!("Response status code: {status}");
            }
            return Err(e.into());
        }
    }

    Ok(())
}
