pub mod rest;

use std::path::Path;

use anyhow::{Result, anyhow};
use mcat_server::config::{Parser, ServerConfig};
use rand::Rng as _;
use reqwest::Url;
use tempfile::TempDir;
use tokio::sync::oneshot;
use tracing::{debug, error};

const SEED_FILE: &str = "../../test-data/seed.sql";

fn random_port() -> Result<u16> {
    let mut rng = rand::rng();

    let mut retries = 3;
    while retries > 0 {
        let port: u16 = rng.random_range(3030..4030);
        let addr: std::net::SocketAddr = format!("127.0.0.1:{}", port).parse()?;
        match std::net::TcpStream::connect_timeout(&addr, std::time::Duration::from_millis(100)) {
            Err(e) if e.kind() == std::io::ErrorKind::ConnectionRefused => return Ok(port),
            Err(_) => retries -= 1,
            Ok(_) => retries -= 1,
        }
    }

    Err(anyhow!("Could not find a free port"))
}

pub struct ConfigGuard {
    #[allow(dead_code)]
    data_dir: TempDir,
}

pub fn test_config(test_name: &str, base_dir: &Path) -> Result<(ServerConfig, ConfigGuard)> {
    let tmp_data_dir = TempDir::with_prefix_in(format!("{}_", test_name), base_dir)?;
    let data_dir = tmp_data_dir.path().to_string_lossy().to_string();
    let port = random_port()?.to_string();
    let args = &[
        "mcat-e2e-tests",
        "--data-dir",
        &data_dir,
        "--port",
        &port,
        "--seed-file",
        SEED_FILE,
    ];
    let config = ServerConfig::try_parse_from(args)?;
    Ok((
        config,
        ConfigGuard {
            data_dir: tmp_data_dir,
        },
    ))
}

pub async fn prepare_env(test_name: &str) -> Result<(ServerConfig, ConfigGuard)> {
    let base_dir = std::env::temp_dir();
    test_config(test_name, &base_dir)
}

pub fn base_url(config: &ServerConfig) -> Result<Url> {
    let url = Url::parse(&format!(
        "http://{}:{}/",
        config.listen_address, config.port
    ))?;
    Ok(url)
}

/// Stops spawned server when dropped
pub struct ServerGuard {
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

pub async fn spawn_server(args: ServerConfig) -> Result<ServerGuard> {
    let health_url = base_url(&args)?.join("health")?;
    let (sender, receiver) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let shutdown = async move {
            let _ = receiver.await;
        };
        if let Err(e) = mcat_server::run::run_graceful(args, shutdown).await {
            error!("Server failed: {e}");
        }
    });

    let client = reqwest::Client::new();
    for _ in 0..50 {
        match client.get(health_url.clone()).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Server is up");
                return Ok(ServerGuard {
                    shutdown: Some(sender),
                });
            }
            _ => tokio::time::sleep(std::time::Duration::from_millis(100)).await,
        }
    }

    Err(anyhow!("Server did not start"))
}

pub async fn launch_env(args: ServerConfig) -> Result<(reqwest::Client, Url, ServerGuard)> {
    let base_url = base_url(&args)?;
    let guard = spawn_server(args).await?;
    let client = reqwest::Client::builder().build()?;
    Ok((client, base_url, guard))
}
