use analysis_orchestrator::AnalysisOrchestrator;
use anyhow::{bail, Context, Result};
use config_manager::SystemConfig;
use tracing::info;

/// One-shot analysis: `smre <token symbol | name | address | wallet>`.
/// Prints the same JSON the API server returns.
#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        bail!("usage: smre <token symbol | name | address | wallet address>");
    }

    let config = SystemConfig::load().context("failed to load configuration")?;
    let orchestrator =
        AnalysisOrchestrator::from_config(&config).context("failed to initialize analysis")?;

    info!("🔍 Analyzing '{}'", query);
    let result = orchestrator.analyze(&query).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
