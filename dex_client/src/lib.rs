// Upstream Market & Security Clients
// DexScreener pair search, GoPlus security scans and Etherscan wallet history,
// plus the normalizer that turns their payloads into engine features.

pub mod dexscreener_client;
pub mod etherscan_client;
pub mod goplus_client;
pub mod lenient;
pub mod normalizer;
pub mod types;
pub mod upstream;

pub use config_manager::{DexScreenerConfig, EtherscanConfig, GoPlusConfig};

pub use dexscreener_client::DexScreenerClient;
pub use etherscan_client::EtherscanClient;
pub use goplus_client::GoPlusClient;
pub use normalizer::{first_pair, normalize_token, normalize_wallet, wallet_security_flags};
pub use types::{
    AddressSecurity, AddressSecurityResponse, EtherscanResponse, GoPlusResponse, Liquidity,
    PairSearchResponse, Timeframes, Token, TokenPair, TokenSecurity, TokenSecurityResponse,
};
pub use upstream::{LiveUpstream, UpstreamSource};

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, UpstreamError>;

/// Send a request and decode a JSON body, mapping non-2xx statuses to `ApiError`
pub(crate) async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(UpstreamError::ApiError { status, message });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
