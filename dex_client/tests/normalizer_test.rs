use dex_client::types::{
    AddressSecurityResponse, EtherscanResponse, Liquidity, Timeframes, Token, TokenPair,
    TokenSecurity, TokenSecurityResponse,
};
use dex_client::{first_pair, normalize_token, normalize_wallet, wallet_security_flags};
use serde_json::json;
use std::collections::HashMap;

const WALLET: &str = "0xAbC0000000000000000000000000000000001234";

fn pepe_pair() -> TokenPair {
    TokenPair {
        chain_id: Some("ethereum".to_string()),
        base_token: Some(Token {
            address: Some("0x6982508145454Ce325dDbE47a25d4ec3d2311933".to_string()),
            name: Some("Pepe".to_string()),
            symbol: Some("PEPE".to_string()),
        }),
        price_usd: Some("0.00001234".to_string()),
        volume: Some(Timeframes {
            h24: Some(1_250_000.0),
            ..Default::default()
        }),
        price_change: Some(Timeframes {
            m5: Some(0.4),
            h1: Some(1.2),
            h6: Some(3.5),
            h24: Some(12.0),
        }),
        liquidity: Some(Liquidity {
            usd: Some(2_450_000.0),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn token_security(record: TokenSecurity) -> TokenSecurityResponse {
    let mut result = HashMap::new();
    result.insert(
        "0x6982508145454ce325ddbe47a25d4ec3d2311933".to_string(),
        record,
    );
    TokenSecurityResponse {
        code: Some(1),
        message: Some("OK".to_string()),
        result: Some(result),
    }
}

fn etherscan(status: &str, message: &str, result: serde_json::Value) -> EtherscanResponse {
    EtherscanResponse {
        status: Some(status.to_string()),
        message: Some(message.to_string()),
        result,
    }
}

#[test]
fn test_normalize_full_token() {
    let security = token_security(TokenSecurity {
        is_honeypot: Some("0".to_string()),
        buy_tax: Some("0.01".to_string()),
        sell_tax: Some("0.07".to_string()),
    });

    let features = normalize_token(&pepe_pair(), Some(&security));
    assert_eq!(features.symbol, "PEPE");
    assert_eq!(features.price, 0.00001234);
    assert_eq!(features.change_24h, 12.0);
    assert_eq!(features.volume_24h, 1_250_000.0);
    assert_eq!(features.liquidity_usd, 2_450_000.0);
    assert!(!features.is_honeypot);
    assert!((features.buy_tax_pct - 1.0).abs() < 1e-9);
    assert!((features.sell_tax_pct - 7.0).abs() < 1e-9);
}

#[test]
fn test_security_lookup_is_by_lowercased_address() {
    let security = token_security(TokenSecurity {
        is_honeypot: Some("1".to_string()),
        ..Default::default()
    });

    let features = normalize_token(&pepe_pair(), Some(&security));
    assert!(features.is_honeypot);
}

#[test]
fn test_sparse_pair_defaults_to_zero() {
    let pair = TokenPair {
        chain_id: Some("bsc".to_string()),
        price_usd: Some("not-a-number".to_string()),
        ..Default::default()
    };

    let features = normalize_token(&pair, None);
    assert_eq!(features.price, 0.0);
    assert_eq!(features.change_24h, 0.0);
    assert_eq!(features.liquidity_usd, 0.0);
    assert_eq!(features.sell_tax_pct, 0.0);
    assert!(!features.is_honeypot);
    assert_eq!(features.symbol, "");
}

#[test]
fn test_first_pair_not_found() {
    assert!(first_pair(Some(Vec::new())).is_none());
    assert_eq!(
        first_pair(Some(vec![pepe_pair()])).unwrap().base_address(),
        "0x6982508145454Ce325dDbE47a25d4ec3d2311933"
    );
}

#[test]
fn test_normalize_live_wallet() {
    let balance = etherscan("1", "OK", json!("2500000000000000000"));
    let txs = etherscan("1", "OK", json!([{ "hash": "0x1" }, { "hash": "0x2" }, { "hash": "0x3" }]));

    let features = normalize_wallet(WALLET, Some(&balance), Some(&txs), None);
    assert_eq!(features.balance_eth, Some(2.5));
    assert!(features.is_real_data());
    assert_eq!(features.tx_count, 3);
    assert_eq!(features.malicious_flags, Default::default());
}

#[test]
fn test_failed_explorer_calls_are_unknown() {
    let rate_limited = etherscan("0", "NOTOK", json!("Max rate limit reached"));
    let features = normalize_wallet(WALLET, Some(&rate_limited), Some(&rate_limited), None);
    assert_eq!(features.balance_eth, None);
    assert!(!features.is_real_data());
    assert_eq!(features.tx_count, 0);

    // status 1 with an unexpected message is not trusted for the balance
    let odd = etherscan("1", "OK-Missing/Invalid API Key", json!("1000"));
    assert_eq!(normalize_wallet(WALLET, Some(&odd), None, None).balance_eth, None);

    let garbage = etherscan("1", "OK", json!("12abc"));
    assert_eq!(normalize_wallet(WALLET, Some(&garbage), None, None).balance_eth, None);

    let features = normalize_wallet(WALLET, None, None, None);
    assert_eq!(features.balance_eth, None);
    assert_eq!(features.tx_count, 0);
}

#[test]
fn test_address_flags_keyed_by_lowercased_address() {
    let response = AddressSecurityResponse {
        code: Some(1),
        message: Some("OK".to_string()),
        result: Some(json!({
            (WALLET.to_lowercase()): { "stealing_attack": "1", "phishing_activities": "0" }
        })),
    };

    let flags = wallet_security_flags(WALLET, Some(&response));
    assert!(flags.stealing_attack);
    assert!(!flags.phishing_activities);
}

#[test]
fn test_address_flags_flat_record() {
    let response = AddressSecurityResponse {
        code: Some(1),
        message: Some("OK".to_string()),
        result: Some(json!({
            "darkweb_transactions": "1",
            "fake_kyc": "0",
            "data_source": "SlowMist"
        })),
    };

    let flags = wallet_security_flags(WALLET, Some(&response));
    assert!(flags.darkweb_transactions);
    assert!(!flags.fake_kyc);

    assert_eq!(wallet_security_flags(WALLET, None), Default::default());
}

#[test]
fn test_honeypot_survives_numeric_tax() {
    let security: TokenSecurityResponse = serde_json::from_value(json!({
        "code": 1,
        "result": {
            "0x6982508145454ce325ddbe47a25d4ec3d2311933": { "is_honeypot": "1", "buy_tax": 0 }
        }
    }))
    .unwrap();

    let features = normalize_token(&pepe_pair(), Some(&security));
    assert!(features.is_honeypot);
    assert_eq!(features.buy_tax_pct, 0.0);
    assert_eq!(features.sell_tax_pct, 0.0);
}

#[test]
fn test_address_flags_with_numeric_values() {
    let response = AddressSecurityResponse {
        code: Some(1),
        message: Some("OK".to_string()),
        result: Some(json!({
            "phishing_activities": "1",
            "stealing_attack": 0,
            "fake_kyc": 1
        })),
    };

    let flags = wallet_security_flags(WALLET, Some(&response));
    assert!(flags.phishing_activities);
    assert!(!flags.stealing_attack);
    assert!(flags.fake_kyc);
}
