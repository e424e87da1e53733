//! Security flag evaluation for wallets and tokens.
//!
//! A flagged wallet or a honeypot token terminates analysis with a fixed
//! unsafe result before any scoring runs.

use crate::TokenFeatures;

/// Malicious-activity flags reported by the address scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalletSecurityFlags {
    pub honeypot_related_address: bool,
    pub phishing_activities: bool,
    pub blackmail_activities: bool,
    pub stealing_attack: bool,
    pub fake_kyc: bool,
    pub malicious_mining_activities: bool,
    pub darkweb_transactions: bool,
}

impl WalletSecurityFlags {
    fn named(&self) -> [(&'static str, bool); 7] {
        [
            ("honeypot_related_address", self.honeypot_related_address),
            ("phishing_activities", self.phishing_activities),
            ("blackmail_activities", self.blackmail_activities),
            ("stealing_attack", self.stealing_attack),
            ("fake_kyc", self.fake_kyc),
            ("malicious_mining_activities", self.malicious_mining_activities),
            ("darkweb_transactions", self.darkweb_transactions),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagEvaluation {
    pub flagged: bool,
    /// Names of every flag that is set
    pub flags: Vec<String>,
}

/// OR of all seven malicious-activity flags
pub fn evaluate_wallet_flags(flags: &WalletSecurityFlags) -> FlagEvaluation {
    let set: Vec<String> = flags
        .named()
        .iter()
        .filter(|(_, is_set)| *is_set)
        .map(|(name, _)| name.to_string())
        .collect();

    FlagEvaluation {
        flagged: !set.is_empty(),
        flags: set,
    }
}

/// Reasons listed on a blacklisted wallet.
///
/// Only phishing, honeypot and blackmail are reported even though any of
/// the seven flags blacklists the wallet.
pub fn blacklist_details(flags: &WalletSecurityFlags) -> Vec<String> {
    [
        ("Phishing", flags.phishing_activities),
        ("Honeypot", flags.honeypot_related_address),
        ("Blackmail", flags.blackmail_activities),
    ]
    .iter()
    .filter(|(_, is_set)| *is_set)
    .map(|(label, _)| label.to_string())
    .collect()
}

pub fn token_status_text(features: &TokenFeatures) -> &'static str {
    if features.is_honeypot {
        "CRITICAL RISK: HONEYPOT"
    } else if features.sell_tax_pct > 5.0 {
        "High Tax Risk"
    } else {
        "Safe / Clean"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(index: usize) -> WalletSecurityFlags {
        let mut flags = WalletSecurityFlags::default();
        match index {
            0 => flags.honeypot_related_address = true,
            1 => flags.phishing_activities = true,
            2 => flags.blackmail_activities = true,
            3 => flags.stealing_attack = true,
            4 => flags.fake_kyc = true,
            5 => flags.malicious_mining_activities = true,
            _ => flags.darkweb_transactions = true,
        }
        flags
    }

    #[test]
    fn test_clean_wallet_not_flagged() {
        let evaluation = evaluate_wallet_flags(&WalletSecurityFlags::default());
        assert!(!evaluation.flagged);
        assert!(evaluation.flags.is_empty());
    }

    #[test]
    fn test_any_single_flag_blacklists() {
        for i in 0..7 {
            let evaluation = evaluate_wallet_flags(&only(i));
            assert!(evaluation.flagged, "flag {} should blacklist", i);
            assert_eq!(evaluation.flags.len(), 1);
        }
    }

    #[test]
    fn test_details_only_report_three_flags() {
        assert_eq!(blacklist_details(&only(0)), vec!["Honeypot"]);
        assert_eq!(blacklist_details(&only(1)), vec!["Phishing"]);
        assert_eq!(blacklist_details(&only(2)), vec!["Blackmail"]);

        // Stealing, fake KYC, mining and darkweb blacklist silently
        for i in 3..7 {
            assert!(evaluate_wallet_flags(&only(i)).flagged);
            assert!(blacklist_details(&only(i)).is_empty());
        }
    }

    #[test]
    fn test_details_order_is_fixed() {
        let flags = WalletSecurityFlags {
            honeypot_related_address: true,
            phishing_activities: true,
            blackmail_activities: true,
            ..Default::default()
        };
        assert_eq!(blacklist_details(&flags), vec!["Phishing", "Honeypot", "Blackmail"]);
    }

    #[test]
    fn test_token_status_text() {
        let mut features = TokenFeatures::default();
        assert_eq!(token_status_text(&features), "Safe / Clean");

        features.buy_tax_pct = 20.0;
        assert_eq!(token_status_text(&features), "Safe / Clean");

        features.sell_tax_pct = 5.5;
        assert_eq!(token_status_text(&features), "High Tax Risk");

        features.is_honeypot = true;
        assert_eq!(token_status_text(&features), "CRITICAL RISK: HONEYPOT");
    }
}
