#![allow(dead_code)]

use phishing_service::config::PhishingConfig;
use phishing_service::startup::Application;
use reqwest::Client;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    client: Client,
}

impl TestApp {
    /// Spawn the service with the AI analyst disabled.
    pub async fn spawn() -> Self {
        Self::spawn_with(|config| config.analyst.enabled = false).await
    }

    /// Spawn the service with its analyst pointed at `base_url`.
    pub async fn spawn_with_analyst(base_url: &str) -> Self {
        let base_url = base_url.to_string();
        Self::spawn_with(move |config| {
            config.analyst.enabled = true;
            config.analyst.base_url = base_url;
            config.analyst.timeout_seconds = 5;
        })
        .await
    }

    pub async fn spawn_with(configure: impl FnOnce(&mut PhishingConfig)) -> Self {
        let mut config = PhishingConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        configure(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
