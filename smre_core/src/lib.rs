pub mod formatting;
pub mod narrative;
pub mod radar;
pub mod security;
pub mod token_scorer;
pub mod wallet_profiler;

// Re-export the engine entry points
pub use formatting::{format_compact, format_usd, to_fixed};
pub use narrative::{render_blacklisted_narrative, render_token_narrative, render_wallet_narrative, NarrativeContext};
pub use radar::{token_radar, wallet_radar, RadarAxis, RadarProfile};
pub use security::{
    blacklist_details, evaluate_wallet_flags, token_status_text, FlagEvaluation, WalletSecurityFlags,
};
pub use token_scorer::{inflow_status, score_token, synthetic_rsi, InflowStatus, Sentiment, TokenScore};
pub use wallet_profiler::{
    generate_holdings, profile_wallet, resolve_activity, IdentityTag, WalletActivity, WalletProfile,
};

use serde::{Deserialize, Serialize};

/// Rating reported for every terminal result (not found, blacklisted, error)
pub const ZERO_RATING: &str = "0.0";

/// Message returned when the analysis pipeline fails unexpectedly
pub const SYSTEM_FAILURE_MESSAGE: &str = "Analysis failed. System overloaded.";

/// Wallet queries are exactly 42 characters and start with `0x`.
///
/// Only the length and prefix are checked, the remaining characters are not
/// validated as hex.
pub fn is_wallet_query(query: &str) -> bool {
    query.len() == 42 && query.starts_with("0x")
}

/// Canonical market/security features of a token, fully defaulted
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenFeatures {
    /// Base token symbol (display only)
    pub symbol: String,

    /// Base token name (display only)
    pub name: String,

    /// Price in USD
    pub price: f64,

    /// Percent change over the last 5 minutes
    pub change_m5: f64,

    /// Percent change over the last hour
    pub change_h1: f64,

    /// Percent change over the last 6 hours
    pub change_h6: f64,

    /// Percent change over the last 24 hours
    pub change_24h: f64,

    /// 24h traded volume in USD
    pub volume_24h: f64,

    /// Pool liquidity in USD
    pub liquidity_usd: f64,

    /// Security scanner reports the contract as a honeypot
    pub is_honeypot: bool,

    /// Buy tax as a percentage (0-100)
    pub buy_tax_pct: f64,

    /// Sell tax as a percentage (0-100)
    pub sell_tax_pct: f64,
}

/// Wallet features gathered from the block explorer and the address scanner
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WalletFeatures {
    pub address: String,

    /// Native balance in whole ETH; `None` until a live balance is known
    pub balance_eth: Option<f64>,

    /// Number of transactions in the recent history window
    pub tx_count: u64,

    pub malicious_flags: WalletSecurityFlags,
}

impl WalletFeatures {
    /// Live data is only trusted when the balance call succeeded
    pub fn is_real_data(&self) -> bool {
        self.balance_eth.is_some()
    }
}

/// Security section of an analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityReport {
    #[serde(rename = "isSafe")]
    pub is_safe: bool,

    #[serde(rename = "isHoneypot", skip_serializing_if = "Option::is_none")]
    pub is_honeypot: Option<bool>,

    pub status_text: String,

    pub details: Vec<String>,
}

/// Synthetic holding row shown on wallet results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub balance: String,
    pub value: String,
}

/// Token analysis payload. Market fields are absent on the "not found" result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<String>,

    #[serde(rename = "smreRating")]
    pub smre_rating: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflow: Option<String>,

    /// Markdown narrative
    pub analysis: String,

    pub security: SecurityReport,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar: Option<RadarProfile>,
}

impl TokenAnalysis {
    /// Terminal result for a query with no matching pair
    pub fn not_found(query: &str) -> Self {
        Self {
            symbol: None,
            name: None,
            price: None,
            change: None,
            liquidity: None,
            smre_rating: ZERO_RATING.to_string(),
            sentiment: None,
            inflow: None,
            analysis: format!("Token '{}' not found. Caution advised.", query),
            security: SecurityReport {
                is_safe: false,
                is_honeypot: None,
                status_text: "Token Not Found".to_string(),
                details: vec![],
            },
            radar: None,
        }
    }

    /// Scored result; `analysis` is the narrator text or the deterministic report
    pub fn scored(features: &TokenFeatures, score: &TokenScore, analysis: String) -> Self {
        let change = format!("{}%", to_fixed(features.change_24h, 2));
        let radar = token_radar(score.score, score.sentiment, &change, features.is_honeypot);

        Self {
            symbol: Some(features.symbol.clone()),
            name: Some(features.name.clone()),
            price: Some(format_usd(features.price)),
            change: Some(change),
            liquidity: Some(format_usd(features.liquidity_usd)),
            smre_rating: score.rating(),
            sentiment: Some(score.sentiment),
            inflow: Some(
                inflow_status(features.change_24h, features.volume_24h)
                    .label()
                    .to_string(),
            ),
            analysis,
            security: SecurityReport {
                is_safe: !features.is_honeypot,
                is_honeypot: Some(features.is_honeypot),
                status_text: token_status_text(features).to_string(),
                details: vec![],
            },
            radar: Some(radar),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletAnalysis {
    pub address: String,

    #[serde(rename = "smreRating")]
    pub smre_rating: String,

    pub identity: String,

    /// Markdown narrative
    pub analysis: String,

    pub inflow: String,

    pub security: SecurityReport,

    pub holdings: Vec<Holding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar: Option<RadarProfile>,
}

impl WalletAnalysis {
    /// Terminal result for a wallet carrying any malicious-activity flag
    pub fn blacklisted(address: &str, flags: &WalletSecurityFlags) -> Self {
        Self {
            address: address.to_string(),
            smre_rating: ZERO_RATING.to_string(),
            identity: IdentityTag::Blacklisted.label().to_string(),
            analysis: render_blacklisted_narrative(),
            inflow: "Suspicious".to_string(),
            security: SecurityReport {
                is_safe: false,
                is_honeypot: Some(true),
                status_text: "BLACKLISTED WALLET".to_string(),
                details: blacklist_details(flags),
            },
            holdings: vec![],
            radar: Some(wallet_radar(0.0, false)),
        }
    }

    pub fn profiled(address: &str, profile: &WalletProfile) -> Self {
        Self {
            address: address.to_string(),
            smre_rating: profile.rating_text(),
            identity: profile.identity.label().to_string(),
            analysis: render_wallet_narrative(profile),
            inflow: format!("{} Txns", profile.activity.tx_count),
            security: SecurityReport {
                is_safe: true,
                is_honeypot: Some(false),
                status_text: "Clean / No Flags".to_string(),
                details: vec![],
            },
            holdings: generate_holdings(address, profile.activity.balance_eth),
            radar: Some(wallet_radar(profile.rating, true)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorAnalysis {
    pub message: String,

    #[serde(rename = "smreRating")]
    pub smre_rating: String,
}

/// Flat per-request result, tagged on `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisResult {
    Token(TokenAnalysis),
    Wallet(WalletAnalysis),
    Error(ErrorAnalysis),
}

impl AnalysisResult {
    /// Generic catch-all result; always rendered with HTTP 200
    pub fn system_failure() -> Self {
        AnalysisResult::Error(ErrorAnalysis {
            message: SYSTEM_FAILURE_MESSAGE.to_string(),
            smre_rating: ZERO_RATING.to_string(),
        })
    }

    pub fn smre_rating(&self) -> &str {
        match self {
            AnalysisResult::Token(t) => &t.smre_rating,
            AnalysisResult::Wallet(w) => &w.smre_rating,
            AnalysisResult::Error(e) => &e.smre_rating,
        }
    }

    /// Security radar of a scored token or wallet
    pub fn radar_profile(&self) -> Option<&RadarProfile> {
        match self {
            AnalysisResult::Token(t) => t.radar.as_ref(),
            AnalysisResult::Wallet(w) => w.radar.as_ref(),
            AnalysisResult::Error(_) => None,
        }
    }
}
