use crate::types::{AddressSecurityResponse, TokenSecurityResponse};
use crate::{get_json, GoPlusConfig, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// GoPlus token and address security scanner
#[derive(Debug, Clone)]
pub struct GoPlusClient {
    client: Client,
    config: GoPlusConfig,
}

impl GoPlusClient {
    pub fn new(config: GoPlusConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    /// Token security record for `contract` on GoPlus chain `chain_id`
    pub async fn token_security(
        &self,
        chain_id: &str,
        contract: &str,
    ) -> Result<TokenSecurityResponse> {
        let url = format!(
            "{}/api/v1/token_security/{}",
            self.config.api_base_url, chain_id
        );
        debug!("🛡️ GoPlus token scan: chain={} contract={}", chain_id, contract);

        get_json(
            self.client
                .get(&url)
                .query(&[("contract_addresses", contract)]),
        )
        .await
    }

    /// Malicious-activity flags for a wallet address
    pub async fn address_security(&self, address: &str) -> Result<AddressSecurityResponse> {
        let url = format!(
            "{}/api/v1/address_security/{}",
            self.config.api_base_url, address
        );
        debug!("🛡️ GoPlus address scan: {}", address);

        get_json(self.client.get(&url)).await
    }
}
