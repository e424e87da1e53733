use crate::types::EtherscanResponse;
use crate::{get_json, EtherscanConfig, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Etherscan account module: native balance and recent transactions
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    client: Client,
    config: EtherscanConfig,
}

impl EtherscanClient {
    pub fn new(config: EtherscanConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    fn account_url(&self) -> String {
        format!("{}/api", self.config.api_base_url)
    }

    /// Balance in wei, as the raw Etherscan envelope
    pub async fn balance(&self, address: &str) -> Result<EtherscanResponse> {
        debug!("💰 Etherscan balance for {}", address);

        get_json(self.client.get(self.account_url()).query(&[
            ("module", "account"),
            ("action", "balance"),
            ("address", address),
            ("tag", "latest"),
            ("apikey", self.config.api_key.as_str()),
        ]))
        .await
    }

    /// Most recent transactions, newest first, one page of `tx_page_size`
    pub async fn tx_list(&self, address: &str) -> Result<EtherscanResponse> {
        debug!("📜 Etherscan txlist for {}", address);

        let page_size = self.config.tx_page_size.to_string();
        get_json(self.client.get(self.account_url()).query(&[
            ("module", "account"),
            ("action", "txlist"),
            ("address", address),
            ("startblock", "0"),
            ("endblock", "99999999"),
            ("page", "1"),
            ("offset", page_size.as_str()),
            ("sort", "desc"),
            ("apikey", self.config.api_key.as_str()),
        ]))
        .await
    }
}
