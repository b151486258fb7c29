use document_service::config::DocumentConfig;
use document_service::ports::GetDocumentUseCase;
use document_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = Self::config();
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        Self::start(app).await
    }

    pub async fn spawn_with_use_case(use_case: Arc<dyn GetDocumentUseCase>) -> Self {
        let config = Self::config();
        let app = Application::build_with_use_case(config, use_case)
            .await
            .expect("Failed to build test application");

        Self::start(app).await
    }

    fn config() -> DocumentConfig {
        let mut config = DocumentConfig::default();
        config.common.port = 0; // Random port for testing
        config
    }

    async fn start(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }

    pub fn document_url(&self, id: &str) -> String {
        format!("{}/api/document/{}", self.address, id)
    }
}
