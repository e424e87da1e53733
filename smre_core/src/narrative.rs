//! Deterministic markdown reports.
//!
//! These renderers are pure and total. Every token analysis falls back to
//! them when the generative narrator is unavailable or too slow.

use crate::{format_compact, format_usd, to_fixed, Sentiment, TokenFeatures, WalletProfile};

const HIGH_VOLUME_USD: f64 = 100_000.0;
const BASE_CONFIDENCE: i32 = 75;

/// Everything the token report derives from features and the RSI proxy
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeContext {
    pub trend: Sentiment,
    pub momentum: &'static str,
    pub short_term: Sentiment,
    pub mid_term: Sentiment,
    pub aligned: bool,
    pub whale_alert: &'static str,
    pub zone: &'static str,
    pub support1: f64,
    pub support2: f64,
    pub resistance1: f64,
    pub resistance2: f64,
    /// Percentage, unclamped
    pub confidence: i32,
    /// Reward/risk to one decimal, or `N/A` when risk is zero
    pub rr_ratio: String,
}

fn direction(change: f64) -> Sentiment {
    if change > 0.0 {
        Sentiment::Bullish
    } else {
        Sentiment::Bearish
    }
}

impl NarrativeContext {
    pub fn derive(features: &TokenFeatures, rsi: u8) -> Self {
        let price = features.price;
        let change = features.change_24h;
        let volume = features.volume_24h;
        let liquidity = features.liquidity_usd;
        let rsi = rsi as f64;

        let trend = direction(change);
        let bullish = trend == Sentiment::Bullish;

        let momentum = if change.abs() > 10.0 {
            "Strong"
        } else if change.abs() < 2.0 {
            "Weak/Consolidating"
        } else {
            "Moderate"
        };

        let short_term = direction(features.change_m5);
        let mid_term = direction(features.change_h1);
        let aligned = short_term == mid_term && mid_term == trend;

        let heavy_flow = volume > liquidity * 0.5;
        let whale_alert = match (heavy_flow, bullish) {
            (true, true) => "Significant Buying Pressure Detected",
            (true, false) => "Heavy Selling Pressure",
            _ => "Normal Activity",
        };

        let zone = if rsi > 70.0 {
            "Overbought (High Risk)"
        } else if rsi < 30.0 {
            "Oversold (Accumulation)"
        } else if bullish && volume > HIGH_VOLUME_USD {
            "Breakout Zone"
        } else if !bullish && volume > HIGH_VOLUME_USD {
            "Distribution Zone"
        } else {
            "Neutral Zone"
        };

        let support1 = price * if bullish { 0.95 } else { 0.90 };
        let resistance1 = price * if bullish { 1.05 } else { 1.10 };
        let resistance2 = price * 1.15;
        let support2 = price * 0.85;

        let mut confidence = BASE_CONFIDENCE;
        if volume > liquidity {
            confidence += 10;
        }
        if aligned {
            confidence += 10;
        }
        if change.abs() > 5.0 {
            confidence += 5;
        }
        if rsi > 80.0 || rsi < 20.0 {
            confidence -= 10;
        }

        let risk = (price - support1).abs();
        let reward = (resistance1 - price).abs();
        let rr_ratio = if risk == 0.0 {
            "N/A".to_string()
        } else {
            to_fixed(reward / risk, 1)
        };

        Self {
            trend,
            momentum,
            short_term,
            mid_term,
            aligned,
            whale_alert,
            zone,
            support1,
            support2,
            resistance1,
            resistance2,
            confidence,
            rr_ratio,
        }
    }
}

fn rsi_label(rsi: u8) -> &'static str {
    if rsi > 70 {
        "Overbought 🔴"
    } else if rsi < 30 {
        "Oversold 🟢"
    } else {
        "Neutral ⚪"
    }
}

/// Full technical report for a token
pub fn render_token_narrative(features: &TokenFeatures, rsi: u8) -> String {
    let ctx = NarrativeContext::derive(features, rsi);
    let sym = &features.symbol;
    let bullish = ctx.trend == Sentiment::Bullish;

    let sup1 = to_fixed(ctx.support1, 6);
    let sup2 = to_fixed(ctx.support2, 6);
    let res1 = to_fixed(ctx.resistance1, 6);
    let res2 = to_fixed(ctx.resistance2, 6);

    let signal = if bullish {
        format!("**BUY DIP** @ ${}", sup1)
    } else {
        format!("**SELL RALLY** @ ${}", res1)
    };

    let bull_case = if bullish {
        format!(
            "Price is showing strength across timeframes. If we hold buy zone, target is **${}**.",
            res1
        )
    } else {
        format!(
            "Weakness persists. Rejection at resistance likely sends price to retest **${}**.",
            sup1
        )
    };
    let bear_case = if bullish {
        "Breakdown below support invalidates bullish thesis."
    } else {
        "Reclaim of resistance flips bias to bullish."
    };

    let lines = [
        format!("**# {} – {} | {} {}**", sym, ctx.zone, ctx.momentum, ctx.trend),
        String::new(),
        format!(
            "{} is trading at **{}** (**{}%**).",
            sym,
            format_usd(features.price),
            to_fixed(features.change_24h, 2)
        ),
        format!("**Signal:** {}", signal),
        format!(
            "**Confidence:** {}% | **RR Ratio:** 1:{}",
            ctx.confidence, ctx.rr_ratio
        ),
        String::new(),
        "**Technical Snapshot:**".to_string(),
        format!(
            "* **Trend:** **{}** ({} Momentum). Timeframes: 5m {}, 1h {}.",
            ctx.trend, ctx.momentum, ctx.short_term, ctx.mid_term
        ),
        format!("* **RSI:** **{}** ({}).", rsi, rsi_label(rsi)),
        format!("* **Volume:** ${} (24h).", format_compact(features.volume_24h)),
        format!("* **Whale Watch:** {}.", ctx.whale_alert),
        String::new(),
        "**Key Levels:**".to_string(),
        format!("* 🟢 **Buy Zone:** ${} - ${}", sup1, sup2),
        "    * *Whale accumulation likely here.*".to_string(),
        format!("* 🔴 **Sell Zone:** ${} - ${}", res1, res2),
        "    * *Key profit-taking level.*".to_string(),
        String::new(),
        "**Scenarios:**".to_string(),
        format!("* 🔹 **Bull Case:** {}", bull_case),
        format!("* 🔹 **Bear Case:** {}", bear_case),
        String::new(),
        "**Bias:**".to_string(),
        format!("➡️ **[{}]**", ctx.trend.to_string().to_uppercase()),
    ];

    lines.join("\n")
}

/// Profiling summary for a wallet that passed the security check
pub fn render_wallet_narrative(profile: &WalletProfile) -> String {
    let activity = &profile.activity;
    let header = if activity.is_real_data {
        "**Wallet Profiling Complete**".to_string()
    } else {
        "**Wallet Profiling Complete** *(Simulated Data - API Limit)*".to_string()
    };

    let verdict = if activity.balance_eth > 10.0 {
        "High capital capability. Often moves markets."
    } else if activity.balance_eth < 0.1 {
        "Likely a burner or retail wallet."
    } else {
        "Standard trading behavior detected."
    };

    let lines = [
        header,
        String::new(),
        format!("**Balance:** {} ETH", to_fixed(activity.balance_eth, 4)),
        format!(
            "**Transactions:** {}{} (Recent History)",
            activity.tx_count,
            if activity.tx_count >= 100 { "+" } else { "" }
        ),
        String::new(),
        "**Verdict:**".to_string(),
        format!("Wallet identified as **{}**.", profile.identity.label()),
        verdict.to_string(),
    ];

    lines.join("\n")
}

pub fn render_blacklisted_narrative() -> String {
    "**CRITICAL WARNING:** This wallet is flagged for malicious activities (Phishing/Honeypot/Blackmail). \n\n**DO NOT INTERACT.**".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IdentityTag, WalletActivity};

    fn token(price: f64, change_24h: f64, volume_24h: f64, liquidity_usd: f64) -> TokenFeatures {
        TokenFeatures {
            symbol: "PEPE".to_string(),
            name: "Pepe".to_string(),
            price,
            change_24h,
            volume_24h,
            liquidity_usd,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_price_gives_na_ratio() {
        let ctx = NarrativeContext::derive(&token(0.0, 3.0, 0.0, 0.0), 48);
        assert_eq!(ctx.rr_ratio, "N/A");

        let report = render_token_narrative(&token(0.0, 3.0, 0.0, 0.0), 48);
        assert!(report.contains("**RR Ratio:** 1:N/A"));
    }

    #[test]
    fn test_rr_ratio_by_trend() {
        assert_eq!(NarrativeContext::derive(&token(1.0, 3.0, 0.0, 0.0), 48).rr_ratio, "1.0");
        assert_eq!(NarrativeContext::derive(&token(1.0, -3.0, 0.0, 0.0), 48).rr_ratio, "1.0");
    }

    #[test]
    fn test_key_levels() {
        let bull = NarrativeContext::derive(&token(100.0, 3.0, 0.0, 0.0), 48);
        assert!((bull.support1 - 95.0).abs() < 1e-9);
        assert!((bull.resistance1 - 105.0).abs() < 1e-9);
        assert!((bull.resistance2 - 115.0).abs() < 1e-9);
        assert!((bull.support2 - 85.0).abs() < 1e-9);

        let bear = NarrativeContext::derive(&token(100.0, -3.0, 0.0, 0.0), 48);
        assert!((bear.support1 - 90.0).abs() < 1e-9);
        assert!((bear.resistance1 - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_zone_priority() {
        let zone = |change: f64, volume: f64, rsi: u8| {
            NarrativeContext::derive(&token(1.0, change, volume, 1e9), rsi).zone
        };
        assert_eq!(zone(20.0, 1e6, 75), "Overbought (High Risk)");
        assert_eq!(zone(-20.0, 1e6, 25), "Oversold (Accumulation)");
        assert_eq!(zone(3.0, 200_000.0, 48), "Breakout Zone");
        assert_eq!(zone(-3.0, 200_000.0, 48), "Distribution Zone");
        assert_eq!(zone(0.0, 200_000.0, 48), "Distribution Zone");
        assert_eq!(zone(3.0, 50_000.0, 48), "Neutral Zone");
    }

    #[test]
    fn test_momentum_and_alignment() {
        let mut features = token(1.0, 12.0, 0.0, 0.0);
        features.change_m5 = 0.4;
        features.change_h1 = 1.2;
        let ctx = NarrativeContext::derive(&features, 75);
        assert_eq!(ctx.momentum, "Strong");
        assert!(ctx.aligned);

        features.change_m5 = -0.1;
        let ctx = NarrativeContext::derive(&features, 75);
        assert!(!ctx.aligned);

        assert_eq!(NarrativeContext::derive(&token(1.0, 1.9, 0.0, 0.0), 48).momentum, "Weak/Consolidating");
        assert_eq!(NarrativeContext::derive(&token(1.0, -6.0, 0.0, 0.0), 25).momentum, "Moderate");
    }

    #[test]
    fn test_confidence_adjustments() {
        // volume > liquidity (+10), all bearish and aligned (+10), |change| > 5 (+5)
        let ctx = NarrativeContext::derive(&token(1.0, -8.0, 500.0, 100.0), 25);
        assert_eq!(ctx.confidence, 100);

        // Extreme RSI band is outside the proxy's range but still honoured
        let ctx = NarrativeContext::derive(&token(1.0, 1.0, 0.0, 1.0), 90);
        assert_eq!(ctx.confidence, 65);
    }

    #[test]
    fn test_whale_watch() {
        let alert = |change: f64| NarrativeContext::derive(&token(1.0, change, 60.0, 100.0), 48).whale_alert;
        assert_eq!(alert(1.0), "Significant Buying Pressure Detected");
        assert_eq!(alert(-1.0), "Heavy Selling Pressure");

        let calm = NarrativeContext::derive(&token(1.0, 1.0, 40.0, 100.0), 48);
        assert_eq!(calm.whale_alert, "Normal Activity");
    }

    #[test]
    fn test_bullish_report_content() {
        let report = render_token_narrative(&token(2.0, 7.5, 250_000.0, 1_000_000.0), 75);

        assert!(report.starts_with("**# PEPE – Overbought (High Risk) | Moderate Bullish**"));
        assert!(report.contains("PEPE is trading at **$2.00** (**7.50%**)."));
        assert!(report.contains("**Signal:** **BUY DIP** @ $1.900000"));
        assert!(report.contains("* **RSI:** **75** (Overbought 🔴)."));
        assert!(report.contains("* **Volume:** $250.00K (24h)."));
        assert!(report.contains("target is **$2.100000**"));
        assert!(report.ends_with("➡️ **[BULLISH]**"));
    }

    #[test]
    fn test_bearish_report_content() {
        let report = render_token_narrative(&token(1.0, -12.0, 0.0, 0.0), 25);
        assert!(report.contains("**SELL RALLY** @ $1.100000"));
        assert!(report.contains("retest **$0.900000**"));
        assert!(report.contains("Reclaim of resistance flips bias to bullish."));
        assert!(report.ends_with("➡️ **[BEARISH]**"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let features = token(0.00001234, -3.3, 123_456.0, 654_321.0);
        assert_eq!(
            render_token_narrative(&features, 48),
            render_token_narrative(&features, 48)
        );
    }

    #[test]
    fn test_wallet_narrative() {
        let profile = WalletProfile {
            identity: IdentityTag::WhaleSmartMoney,
            rating: 4.8,
            activity: WalletActivity {
                balance_eth: 42.5,
                tx_count: 120,
                is_real_data: false,
            },
        };
        let text = render_wallet_narrative(&profile);

        assert!(text.starts_with("**Wallet Profiling Complete** *(Simulated Data - API Limit)*"));
        assert!(text.contains("**Balance:** 42.5000 ETH"));
        assert!(text.contains("**Transactions:** 120+ (Recent History)"));
        assert!(text.contains("Wallet identified as **WHALE / SMART MONEY**."));
        assert!(text.ends_with("High capital capability. Often moves markets."));
    }

    #[test]
    fn test_live_wallet_narrative_has_no_simulation_marker() {
        let profile = WalletProfile {
            identity: IdentityTag::CasualInvestor,
            rating: 3.5,
            activity: WalletActivity {
                balance_eth: 0.5,
                tx_count: 12,
                is_real_data: true,
            },
        };
        let text = render_wallet_narrative(&profile);
        assert!(!text.contains("Simulated"));
        assert!(text.contains("**Transactions:** 12 (Recent History)"));
        assert!(text.ends_with("Standard trading behavior detected."));
    }
}
