use tracing::{debug, warn};

use crate::{format_usd, to_fixed, Holding, WalletFeatures};

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;
const OG_TX_COUNT: u64 = 1000;
const DORMANT_TX_COUNT: u64 = 5;

/// Reference ETH price used for the synthetic holdings table
pub const SYNTHETIC_ETH_PRICE_USD: f64 = 2800.0;

/// Closed set of wallet identities.
///
/// The balance rule picks one of the four base tags; the activity rule then
/// moves it along an upgrade or downgrade edge. Tags without an edge stay put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityTag {
    WhaleSmartMoney,
    WhaleOgWhale,
    WhaleHodler,
    ActiveTrader,
    OgTrader,
    Trader,
    CasualInvestor,
    SmallFishRetail,
    Blacklisted,
}

impl IdentityTag {
    pub fn label(&self) -> &'static str {
        match self {
            IdentityTag::WhaleSmartMoney => "WHALE / SMART MONEY",
            IdentityTag::WhaleOgWhale => "WHALE / OG WHALE",
            IdentityTag::WhaleHodler => "WHALE / HODLER",
            IdentityTag::ActiveTrader => "ACTIVE TRADER",
            IdentityTag::OgTrader => "OG TRADER",
            IdentityTag::Trader => "TRADER",
            IdentityTag::CasualInvestor => "CASUAL INVESTOR",
            IdentityTag::SmallFishRetail => "SMALL FISH / RETAIL",
            IdentityTag::Blacklisted => "SCAMMER / BLACKLISTED",
        }
    }

    /// Base identity and rating from the native balance
    pub fn from_balance(balance_eth: f64) -> (Self, f64) {
        if balance_eth >= 10.0 {
            (IdentityTag::WhaleSmartMoney, 4.8)
        } else if balance_eth >= 1.0 {
            (IdentityTag::ActiveTrader, 4.2)
        } else if balance_eth < 0.1 {
            (IdentityTag::SmallFishRetail, 2.5)
        } else {
            (IdentityTag::CasualInvestor, 3.5)
        }
    }

    /// Transition taken by very active wallets
    pub fn upgrade(self) -> Self {
        match self {
            IdentityTag::WhaleSmartMoney => IdentityTag::WhaleOgWhale,
            IdentityTag::ActiveTrader => IdentityTag::OgTrader,
            other => other,
        }
    }

    /// Transition taken by nearly dormant wallets
    pub fn downgrade(self) -> Self {
        match self {
            IdentityTag::WhaleSmartMoney => IdentityTag::WhaleHodler,
            IdentityTag::ActiveTrader => IdentityTag::Trader,
            other => other,
        }
    }
}

/// Balance and activity the profiler works from, live or synthesized
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalletActivity {
    pub balance_eth: f64,
    pub tx_count: u64,
    pub is_real_data: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalletProfile {
    pub identity: IdentityTag,
    /// Rating in [1, 5]
    pub rating: f64,
    pub activity: WalletActivity,
}

impl WalletProfile {
    pub fn rating_text(&self) -> String {
        to_fixed(self.rating, 1)
    }
}

/// Seed from the last four characters of the address, parsed as hex.
///
/// Only the leading hex digits of that suffix count; no digits gives 0.
/// A `0x` prefix, a sign or leading whitespace inside the suffix is not
/// skipped, so `"0x1f"` seeds 0 and `" 1ab"` seeds 0.
pub fn address_seed(address: &str) -> u16 {
    let char_count = address.chars().count();
    let suffix: String = address
        .chars()
        .skip(char_count.saturating_sub(4))
        .take_while(|c| c.is_ascii_hexdigit())
        .collect();

    u16::from_str_radix(&suffix, 16).unwrap_or(0)
}

/// Live balance/activity, or deterministic values derived from the address
/// when the explorer gave no usable balance.
pub fn resolve_activity(features: &WalletFeatures) -> WalletActivity {
    if let Some(balance_eth) = features.balance_eth {
        return WalletActivity {
            balance_eth,
            tx_count: features.tx_count,
            is_real_data: true,
        };
    }

    warn!(
        "No live balance for {}, using deterministic fallback",
        features.address
    );

    let seed = address_seed(&features.address) as u32;
    let balance_eth = match seed % 3 {
        0 => (seed % 100) as f64 + 12.0,
        1 => (seed % 10) as f64 / 100.0,
        _ => (seed % 50) as f64 / 10.0 + 0.5,
    };

    WalletActivity {
        balance_eth,
        tx_count: (seed % 200) as u64 + 12,
        is_real_data: false,
    }
}

pub fn profile_wallet(features: &WalletFeatures) -> WalletProfile {
    let activity = resolve_activity(features);
    let (mut identity, mut rating) = IdentityTag::from_balance(activity.balance_eth);

    if activity.tx_count > OG_TX_COUNT {
        identity = identity.upgrade();
        rating += 0.2;
    } else if activity.tx_count < DORMANT_TX_COUNT {
        identity = identity.downgrade();
        rating -= 0.5;
    }

    let rating = rating.clamp(MIN_RATING, MAX_RATING);
    debug!(
        "Profiled {} as {} ({:.1})",
        features.address,
        identity.label(),
        rating
    );

    WalletProfile {
        identity,
        rating,
        activity,
    }
}

/// Illustrative top holdings keyed off the last address character.
/// Not fetched from any portfolio source.
pub fn generate_holdings(address: &str, balance_eth: f64) -> Vec<Holding> {
    let mut holdings = vec![Holding {
        symbol: "ETH".to_string(),
        balance: to_fixed(balance_eth, 4),
        value: format_usd(balance_eth * SYNTHETIC_ETH_PRICE_USD),
    }];

    let code = address.chars().last().map(|c| c as u32).unwrap_or(0) as f64;
    let code_int = code as u32;

    if code_int % 2 == 0 {
        holdings.push(Holding {
            symbol: "USDC".to_string(),
            balance: to_fixed(code * 50.0, 2),
            value: format_usd(code * 50.0),
        });
    }
    if code_int % 3 == 0 {
        holdings.push(Holding {
            symbol: "LINK".to_string(),
            balance: to_fixed(code * 2.0, 2),
            value: format_usd(code * 2.0 * 15.0),
        });
    }
    if code_int % 5 == 0 {
        holdings.push(Holding {
            symbol: "PEPE".to_string(),
            balance: to_fixed(code * 10_000.0, 0),
            value: format_usd(code * 10_000.0 * 0.000005),
        });
    }

    holdings
}
