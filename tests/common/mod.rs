#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tempfile::TempDir;

use talker_manager::config::AppConfig;
use talker_manager::{app, AppState};

pub const TOKEN: &str = "7mqaVRXJSp886CGr";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
    data_dir: TempDir,
}

pub fn seed() -> Value {
    json!([
        { "id": 1, "name": "Henrique Albuquerque", "age": 62, "talk": { "watchedAt": "23/10/2020", "rate": 5 } },
        { "id": 2, "name": "Heloísa Albuquerque", "age": 67, "talk": { "watchedAt": "23/10/2020", "rate": 5 } },
        { "id": 3, "name": "Ricardo Xavier Filho", "age": 33, "talk": { "watchedAt": "23/10/2020", "rate": 5 } },
        { "id": 4, "name": "Marcos Costa", "age": 24, "talk": { "watchedAt": "23/10/2020", "rate": 5 } }
    ])
}

impl TestServer {
    /// Serve the full app on a free port over a private copy of the seed data
    pub async fn spawn() -> Result<Self> {
        let data_dir = TempDir::new().context("failed to create temp dir")?;
        let talker_file = data_dir.path().join("talker.json");
        std::fs::write(&talker_file, serde_json::to_string_pretty(&seed())?)?;

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut config = AppConfig::development();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = port;
        config.storage.talker_file = talker_file;

        let listener = tokio::net::TcpListener::bind(config.bind_addr())
            .await
            .context("failed to bind test port")?;
        let router = app(AppState::new(config));
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let server = Self { port, base_url, client: reqwest::Client::new(), data_dir };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = self.client.get(self.url("/")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.path().join("talker.json")
    }
}
