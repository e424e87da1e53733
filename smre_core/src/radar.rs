use serde::{Deserialize, Serialize};

use crate::Sentiment;

pub const RISK_COLOR_DANGER: &str = "#ef4444";
pub const RISK_COLOR_SAFE: &str = "#22c55e";

const FULL_MARK: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub subject: String,
    pub value: f64,
    #[serde(rename = "fullMark")]
    pub full_mark: f64,
}

/// Five-axis security profile plus the colour the chart is drawn in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarProfile {
    pub axes: Vec<RadarAxis>,
    #[serde(rename = "riskColor")]
    pub risk_color: String,
}

fn axis(subject: &str, value: f64) -> RadarAxis {
    RadarAxis {
        subject: subject.to_string(),
        value,
        full_mark: FULL_MARK,
    }
}

fn risk_color(danger: bool) -> String {
    if danger { RISK_COLOR_DANGER } else { RISK_COLOR_SAFE }.to_string()
}

/// `change_text` is the formatted 24h change, e.g. `"-4.20%"`
pub fn token_radar(rating: f64, sentiment: Sentiment, change_text: &str, is_honeypot: bool) -> RadarProfile {
    let score = rating * 20.0;
    let volume = if score > 50.0 { score + 10.0 } else { score - 10.0 };

    RadarProfile {
        axes: vec![
            axis("Liquidity", score),
            axis("Volume", volume),
            axis("Community", if sentiment == Sentiment::Bullish { 90.0 } else { 30.0 }),
            axis("Volatility", if change_text.contains('-') { 80.0 } else { 40.0 }),
            axis("Reliability", score),
        ],
        risk_color: risk_color(is_honeypot || rating < 2.0),
    }
}

pub fn wallet_radar(rating: f64, is_safe: bool) -> RadarProfile {
    let safe_score = if is_safe { 90.0 } else { 10.0 };

    RadarProfile {
        axes: vec![
            axis("Tx History", safe_score),
            axis("Assets", safe_score),
            axis("Reputation", safe_score),
            axis("Activity", 80.0),
            axis("Safety", safe_score),
        ],
        risk_color: risk_color(rating < 2.0),
    }
}
