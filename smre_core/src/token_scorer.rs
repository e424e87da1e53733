use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::TokenFeatures;

const BASE_SCORE: f64 = 3.0;
const MAX_SCORE: f64 = 5.0;
const DEEP_LIQUIDITY_USD: f64 = 100_000.0;
const HIGH_VOLUME_USD: f64 = 100_000.0;
const MAX_TAX_PCT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Bullish,
    Bearish,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Bullish => write!(f, "Bullish"),
            Sentiment::Bearish => write!(f, "Bearish"),
        }
    }
}

/// Capital flow label derived from 24h change and volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InflowStatus {
    HighInflow,
    HighOutflow,
    Neutral,
}

impl InflowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InflowStatus::HighInflow => "High Inflow (Accumulation)",
            InflowStatus::HighOutflow => "High Outflow (Panic Selling)",
            InflowStatus::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenScore {
    /// SMRE rating in [0, 5]
    pub score: f64,
    pub sentiment: Sentiment,
}

impl TokenScore {
    /// Rating rendered with one decimal, e.g. `"4.0"`
    pub fn rating(&self) -> String {
        crate::to_fixed(self.score, 1)
    }
}

/// Additive rule list over the original features.
///
/// Every rule reads the input features, never the running score, so rule
/// order only matters for the honeypot override and the final clamp.
pub fn score_token(features: &TokenFeatures) -> TokenScore {
    let change = features.change_24h;
    let mut score = BASE_SCORE;

    if features.liquidity_usd > DEEP_LIQUIDITY_USD {
        score += 1.0;
    }
    if change > 5.0 && change < 50.0 {
        score += 1.0;
    }
    if change < 0.0 {
        score -= 0.5;
    }

    let sentiment = if change < 0.0 {
        Sentiment::Bearish
    } else {
        Sentiment::Bullish
    };
    if sentiment == Sentiment::Bearish {
        score -= 1.5;
    }

    if features.sell_tax_pct > MAX_TAX_PCT || features.buy_tax_pct > MAX_TAX_PCT {
        score -= 2.0;
    }

    if features.is_honeypot {
        score = 0.0;
    }

    let score = score.clamp(0.0, MAX_SCORE);
    debug!("Scored {} at {:.1} ({})", features.symbol, score, sentiment);

    TokenScore { score, sentiment }
}

/// Three-level RSI proxy from the 24h change
pub fn synthetic_rsi(change_24h: f64) -> u8 {
    if change_24h > 5.0 {
        75
    } else if change_24h < -5.0 {
        25
    } else {
        48
    }
}

pub fn inflow_status(change_24h: f64, volume_24h: f64) -> InflowStatus {
    if change_24h > 0.0 && volume_24h > HIGH_VOLUME_USD {
        InflowStatus::HighInflow
    } else if change_24h < 0.0 && volume_24h > HIGH_VOLUME_USD {
        InflowStatus::HighOutflow
    } else {
        InflowStatus::Neutral
    }
}
