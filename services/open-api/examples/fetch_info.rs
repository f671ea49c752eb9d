//! Print every listable resource of an SCP control plane.
//!
//! Credentials and address come from `SCP_ACCESS_KEY`, `SCP_SECRET_KEY` and
//! `SCP_IP`, or from `terraform.tfvars` in the working directory.
//! Set `SCP_INSECURE=true` for control planes with self-signed certificates.

use anyhow::Result;
use scpsign_core::{Context, OsEnv};
use scpsign_file_read_tokio::TokioFileRead;
use scpsign_http_send_reqwest::ReqwestHttpSend;
use scpsign_open_api::{Config, OpenApiClient, Resource};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let insecure = env::var("SCP_INSECURE").is_ok_and(|v| v == "true");
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .danger_accept_invalid_certs(insecure)
        .build()?;

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::new(http))
        .with_env(OsEnv);

    let config = Config::default().load(&ctx).await?;
    let client = OpenApiClient::from_config(ctx, &config)?;

    println!("\nSCP Resource Information");
    println!("{}", "=".repeat(50));

    for resource in Resource::ALL {
        println!("\n{resource}:");
        match client.list(resource).await {
            Ok(v) => println!("{}", serde_json::to_string_pretty(&v)?),
            Err(e) => eprintln!("Failed to fetch {resource}: {e}"),
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("Operation completed.");
    Ok(())
}
