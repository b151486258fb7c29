use document_service::config::DocumentConfig;
use document_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DocumentConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    init_tracing(&config.common.log_level, config.common.log_format);

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
