//! Upstream payloads → engine features.
//!
//! Every function here is total: missing, empty, unparsable or non-finite
//! values fall back to zero / unset rather than failing the analysis.

use crate::types::{
    AddressSecurity, AddressSecurityResponse, EtherscanResponse, TokenPair, TokenSecurity,
    TokenSecurityResponse,
};
use smre_core::{TokenFeatures, WalletFeatures, WalletSecurityFlags};
use tracing::debug;

const WEI_PER_ETH: f64 = 1e18;

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn parse_number(text: Option<&str>) -> f64 {
    finite_or_zero(text.and_then(|t| t.trim().parse::<f64>().ok()))
}

/// Fraction string (`"0.05"`) → percentage in [0, 100]. Empty counts as absent.
fn parse_tax_pct(text: Option<&str>) -> f64 {
    let text = text.filter(|t| !t.is_empty()).unwrap_or("0");
    (parse_number(Some(text)) * 100.0).clamp(0.0, 100.0)
}

fn is_flag_set(flag: Option<&str>) -> bool {
    flag == Some("1")
}

/// First pair of a search result; `None` means the token was not found
pub fn first_pair(search_result: Option<Vec<TokenPair>>) -> Option<TokenPair> {
    search_result.and_then(|pairs| pairs.into_iter().next())
}

pub fn normalize_token(pair: &TokenPair, token_security: Option<&TokenSecurityResponse>) -> TokenFeatures {
    let base = pair.base_token.clone().unwrap_or_default();
    let change = pair.price_change.clone().unwrap_or_default();
    let volume = pair.volume.clone().unwrap_or_default();

    let address_key = pair.base_address().to_lowercase();
    let security: TokenSecurity = token_security
        .and_then(|response| response.result.as_ref())
        .and_then(|records| records.get(&address_key))
        .cloned()
        .unwrap_or_default();

    let features = TokenFeatures {
        symbol: base.symbol.unwrap_or_default(),
        name: base.name.unwrap_or_default(),
        price: parse_number(pair.price_usd.as_deref()),
        change_m5: finite_or_zero(change.m5),
        change_h1: finite_or_zero(change.h1),
        change_h6: finite_or_zero(change.h6),
        change_24h: finite_or_zero(change.h24),
        volume_24h: finite_or_zero(volume.h24),
        liquidity_usd: finite_or_zero(pair.liquidity.as_ref().and_then(|l| l.usd)),
        is_honeypot: is_flag_set(security.is_honeypot.as_deref()),
        buy_tax_pct: parse_tax_pct(security.buy_tax.as_deref()),
        sell_tax_pct: parse_tax_pct(security.sell_tax.as_deref()),
    };

    debug!(
        "Normalized {} on {}: price={} 24h={}% honeypot={}",
        features.symbol,
        pair.chain(),
        features.price,
        features.change_24h,
        features.is_honeypot
    );

    features
}

/// Balance in ETH from a `status == "1"`, `message == "OK"` envelope.
/// Anything else, including an unparsable wei string, is unknown.
fn balance_from(response: Option<&EtherscanResponse>) -> Option<f64> {
    let response = response?;
    if !response.is_success() || response.message.as_deref() != Some("OK") {
        return None;
    }

    let wei = response.result.as_str()?.trim().parse::<u128>().ok()?;
    Some(wei as f64 / WEI_PER_ETH)
}

fn tx_count_from(response: Option<&EtherscanResponse>) -> u64 {
    match response {
        Some(r) if r.is_success() => r.result.as_array().map_or(0, |txs| txs.len() as u64),
        _ => 0,
    }
}

/// Address flags from a GoPlus envelope; keyed by lowercased address, or a
/// flat record when the scanner returns one directly.
pub fn wallet_security_flags(
    address: &str,
    security: Option<&AddressSecurityResponse>,
) -> WalletSecurityFlags {
    let Some(result) = security.and_then(|response| response.result.as_ref()) else {
        return WalletSecurityFlags::default();
    };

    let record = result.get(address.to_lowercase()).unwrap_or(result);
    let parsed: AddressSecurity = serde_json::from_value(record.clone()).unwrap_or_default();

    WalletSecurityFlags {
        honeypot_related_address: is_flag_set(parsed.honeypot_related_address.as_deref()),
        phishing_activities: is_flag_set(parsed.phishing_activities.as_deref()),
        blackmail_activities: is_flag_set(parsed.blackmail_activities.as_deref()),
        stealing_attack: is_flag_set(parsed.stealing_attack.as_deref()),
        fake_kyc: is_flag_set(parsed.fake_kyc.as_deref()),
        malicious_mining_activities: is_flag_set(parsed.malicious_mining_activities.as_deref()),
        darkweb_transactions: is_flag_set(parsed.darkweb_transactions.as_deref()),
    }
}

pub fn normalize_wallet(
    address: &str,
    balance: Option<&EtherscanResponse>,
    transactions: Option<&EtherscanResponse>,
    security: Option<&AddressSecurityResponse>,
) -> WalletFeatures {
    WalletFeatures {
        address: address.to_string(),
        balance_eth: balance_from(balance),
        tx_count: tx_count_from(transactions),
        malicious_flags: wallet_security_flags(address, security),
    }
}
