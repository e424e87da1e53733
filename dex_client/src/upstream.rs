use crate::types::{AddressSecurityResponse, EtherscanResponse, TokenPair, TokenSecurityResponse};
use crate::{DexScreenerClient, EtherscanClient, GoPlusClient, Result};
use async_trait::async_trait;
use config_manager::SystemConfig;
use tracing::warn;

/// Every upstream lookup the analysis needs. Failures of any kind
/// (transport, status, decoding) surface as `None`.
#[async_trait]
pub trait UpstreamSource: Send + Sync {
    async fn search_pairs(&self, query: &str) -> Option<Vec<TokenPair>>;

    async fn token_security(&self, chain_id: &str, contract: &str) -> Option<TokenSecurityResponse>;

    async fn address_security(&self, address: &str) -> Option<AddressSecurityResponse>;

    async fn native_balance(&self, address: &str) -> Option<EtherscanResponse>;

    async fn transaction_list(&self, address: &str) -> Option<EtherscanResponse>;
}

/// HTTP-backed upstreams
#[derive(Debug, Clone)]
pub struct LiveUpstream {
    dexscreener: DexScreenerClient,
    goplus: GoPlusClient,
    etherscan: EtherscanClient,
}

impl LiveUpstream {
    pub fn new(dexscreener: DexScreenerClient, goplus: GoPlusClient, etherscan: EtherscanClient) -> Self {
        Self {
            dexscreener,
            goplus,
            etherscan,
        }
    }

    pub fn from_config(config: &SystemConfig) -> Result<Self> {
        Ok(Self::new(
            DexScreenerClient::new(config.dexscreener.clone())?,
            GoPlusClient::new(config.goplus.clone())?,
            EtherscanClient::new(config.etherscan.clone())?,
        ))
    }
}

fn absent_on_error<T>(source: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("⚠️ {} unavailable: {}", source, e);
            None
        }
    }
}

#[async_trait]
impl UpstreamSource for LiveUpstream {
    async fn search_pairs(&self, query: &str) -> Option<Vec<TokenPair>> {
        absent_on_error("DexScreener search", self.dexscreener.search_pairs(query).await)
    }

    async fn token_security(&self, chain_id: &str, contract: &str) -> Option<TokenSecurityResponse> {
        absent_on_error(
            "GoPlus token security",
            self.goplus.token_security(chain_id, contract).await,
        )
    }

    async fn address_security(&self, address: &str) -> Option<AddressSecurityResponse> {
        absent_on_error(
            "GoPlus address security",
            self.goplus.address_security(address).await,
        )
    }

    async fn native_balance(&self, address: &str) -> Option<EtherscanResponse> {
        absent_on_error("Etherscan balance", self.etherscan.balance(address).await)
    }

    async fn transaction_list(&self, address: &str) -> Option<EtherscanResponse> {
        absent_on_error("Etherscan txlist", self.etherscan.tx_list(address).await)
    }
}
