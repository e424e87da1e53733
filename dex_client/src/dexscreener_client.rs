use crate::types::{PairSearchResponse, TokenPair};
use crate::{get_json, DexScreenerConfig, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// DexScreener pair search client
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    client: Client,
    config: DexScreenerConfig,
}

impl DexScreenerClient {
    pub fn new(config: DexScreenerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    /// Search pairs by free text (symbol, name or address).
    ///
    /// Returns the pairs in upstream order; an absent `pairs` field is an
    /// empty result.
    pub async fn search_pairs(&self, query: &str) -> Result<Vec<TokenPair>> {
        let url = format!("{}/latest/dex/search", self.config.api_base_url);
        debug!("🔍 Searching DexScreener pairs for '{}' via {}", query, url);

        let response: PairSearchResponse =
            get_json(self.client.get(&url).query(&[("q", query)])).await?;
        let pairs = response.pairs.unwrap_or_default();

        info!("📊 DexScreener returned {} pairs for '{}'", pairs.len(), query);
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = config_manager::SystemConfig::default().dexscreener;
        assert!(DexScreenerClient::new(config).is_ok());
    }
}
