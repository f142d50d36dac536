use financial_companion_core::{
    transport::{HttpChatTransport, HttpDataTransport},
    ArtifactCache, CompanionConfig, CompanyDataLoader, ConversationEngine, Ticker,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!("Financial companion core starting");

    let config = CompanionConfig::from_env()?;

    let engine = ConversationEngine::new(Arc::new(HttpChatTransport::new(&config)));
    let loader = CompanyDataLoader::new(
        Arc::new(HttpDataTransport::new(&config)),
        ArtifactCache::new(config.cache_dir.clone()),
    );

    engine.submit("What is AAPL's price?").await;
    loader.select(Ticker::Aapl).await;

    println!("\n=== CONVERSATION ===");
    for message in engine.history().await {
        println!("[{}] {}", message.sender, message.text);
    }

    println!("\n=== SELECTION ===");
    let state = loader.state().await;
    match (&state.details, &state.error) {
        (Some(details), _) => {
            println!("{}: {} ({})", Ticker::Aapl, details.price, details.industry);
            if let Some(path) = &state.artifact_path {
                println!("Logo cached at {}", path.display());
            }
        }
        (None, Some(error)) => eprintln!("Load failed: {}", error),
        (None, None) => eprintln!("Load produced no data"),
    }

    Ok(())
}
