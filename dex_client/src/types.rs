//! Upstream response shapes.
//!
//! Every field is optional and decoded leniently: upstream payloads are
//! partial and loosely typed, and the normalizer supplies defaults for
//! anything missing or malformed.

use crate::lenient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// ============================================================================
// DEXSCREENER
// ============================================================================

/// `GET /latest/dex/search?q=` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairSearchResponse {
    #[serde(rename = "schemaVersion", default, deserialize_with = "lenient::string")]
    pub schema_version: Option<String>,
    /// Malformed entries decode as empty pairs so `pairs[0]` stays first
    #[serde(default, deserialize_with = "lenient::list")]
    pub pairs: Option<Vec<TokenPair>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenPair {
    #[serde(rename = "chainId", default, deserialize_with = "lenient::string")]
    pub chain_id: Option<String>,
    #[serde(rename = "dexId", default, deserialize_with = "lenient::string")]
    pub dex_id: Option<String>,
    #[serde(rename = "pairAddress", default, deserialize_with = "lenient::string")]
    pub pair_address: Option<String>,
    #[serde(rename = "baseToken", default, deserialize_with = "lenient::object")]
    pub base_token: Option<Token>,
    #[serde(rename = "priceUsd", default, deserialize_with = "lenient::string")]
    pub price_usd: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub volume: Option<Timeframes>,
    #[serde(rename = "priceChange", default, deserialize_with = "lenient::object")]
    pub price_change: Option<Timeframes>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub liquidity: Option<Liquidity>,
}

impl TokenPair {
    pub fn chain(&self) -> &str {
        self.chain_id.as_deref().unwrap_or_default()
    }

    pub fn base_address(&self) -> &str {
        self.base_token
            .as_ref()
            .and_then(|t| t.address.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub symbol: Option<String>,
}

/// Per-window values (volume or percent change)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeframes {
    #[serde(default, deserialize_with = "lenient::number")]
    pub m5: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub h1: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub h6: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Liquidity {
    #[serde(default, deserialize_with = "lenient::number")]
    pub usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub base: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quote: Option<f64>,
}

// ============================================================================
// GOPLUS
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct GoPlusResponse<T> {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub code: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub result: Option<T>,
}

/// Token security results keyed by lowercased contract address
pub type TokenSecurityResponse = GoPlusResponse<HashMap<String, TokenSecurity>>;

/// Address security result; either keyed by address or a flat record
pub type AddressSecurityResponse = GoPlusResponse<Value>;

/// Subset of the token security record used for scoring. Flags are `"0"`/`"1"`
/// strings and taxes are fraction strings such as `"0.05"`; numeric values
/// are accepted and stringified.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenSecurity {
    #[serde(default, deserialize_with = "lenient::string")]
    pub is_honeypot: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub buy_tax: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub sell_tax: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressSecurity {
    #[serde(default, deserialize_with = "lenient::string")]
    pub honeypot_related_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phishing_activities: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub blackmail_activities: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub stealing_attack: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub fake_kyc: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub malicious_mining_activities: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub darkweb_transactions: Option<String>,
}

// ============================================================================
// ETHERSCAN
// ============================================================================

/// Etherscan envelope. `result` is a wei string for `balance`, a list for
/// `txlist`, and an error message string on failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EtherscanResponse {
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Value,
}

impl EtherscanResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("1")
    }
}
