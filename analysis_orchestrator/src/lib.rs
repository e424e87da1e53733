use config_manager::{chain_id_for_goplus, SystemConfig};
use dex_client::{first_pair, normalize_token, normalize_wallet, LiveUpstream, UpstreamError, UpstreamSource};
use narrator_client::{token_prompt, GeminiClient, Narrator, NarratorError};
use smre_core::{
    evaluate_wallet_flags, is_wallet_query, profile_wallet, render_token_narrative, score_token,
    synthetic_rsi, AnalysisResult, TokenAnalysis, TokenFeatures, WalletAnalysis,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Upstream client error: {0}")]
    Upstream(#[from] UpstreamError),
    #[error("Narrator client error: {0}")]
    Narrator(#[from] NarratorError),
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;

/// Runs one query through the full pipeline: dispatch, upstream fetches,
/// normalization, security short-circuits, scoring or profiling, narrative.
pub struct AnalysisOrchestrator {
    upstream: Arc<dyn UpstreamSource>,
    narrator: Option<Arc<dyn Narrator>>,
    narrator_timeout: Duration,
}

impl AnalysisOrchestrator {
    pub fn new(
        upstream: Arc<dyn UpstreamSource>,
        narrator: Option<Arc<dyn Narrator>>,
        narrator_timeout: Duration,
    ) -> Self {
        Self {
            upstream,
            narrator,
            narrator_timeout,
        }
    }

    /// Live HTTP upstreams, plus the Gemini narrator when one is configured
    pub fn from_config(config: &SystemConfig) -> Result<Self> {
        let upstream = Arc::new(LiveUpstream::from_config(config)?);

        let narrator = match GeminiClient::from_config(&config.narrator)? {
            Some(client) => {
                info!("🤖 Narrator enabled ({})", client.model());
                Some(Arc::new(client) as Arc<dyn Narrator>)
            }
            None => {
                info!("📝 Narrator not configured, using deterministic reports");
                None
            }
        };

        Ok(Self::new(
            upstream,
            narrator,
            Duration::from_millis(config.narrator.timeout_ms),
        ))
    }

    pub async fn analyze(&self, query: &str) -> AnalysisResult {
        if is_wallet_query(query) {
            AnalysisResult::Wallet(self.analyze_wallet(query).await)
        } else {
            AnalysisResult::Token(self.analyze_token(query).await)
        }
    }

    pub async fn analyze_token(&self, query: &str) -> TokenAnalysis {
        info!("🔍 Token analysis for '{}'", query);

        let Some(pair) = first_pair(self.upstream.search_pairs(query).await) else {
            info!("❌ No pair found for '{}'", query);
            return TokenAnalysis::not_found(query);
        };

        let chain_id = chain_id_for_goplus(pair.chain());
        let security = self
            .upstream
            .token_security(chain_id, pair.base_address())
            .await;

        let features = normalize_token(&pair, security.as_ref());
        let score = score_token(&features);
        let rsi = synthetic_rsi(features.change_24h);
        let analysis = self.narrate(&features, rsi).await;

        info!(
            "✅ {} scored {} ({})",
            features.symbol,
            score.rating(),
            score.sentiment
        );
        TokenAnalysis::scored(&features, &score, analysis)
    }

    pub async fn analyze_wallet(&self, address: &str) -> WalletAnalysis {
        info!("👛 Wallet analysis for {}", address);

        let (balance, transactions, security) = tokio::join!(
            self.upstream.native_balance(address),
            self.upstream.transaction_list(address),
            self.upstream.address_security(address),
        );

        let features = normalize_wallet(
            address,
            balance.as_ref(),
            transactions.as_ref(),
            security.as_ref(),
        );

        let evaluation = evaluate_wallet_flags(&features.malicious_flags);
        if evaluation.flagged {
            warn!("🚨 {} is blacklisted: {:?}", address, evaluation.flags);
            return WalletAnalysis::blacklisted(address, &features.malicious_flags);
        }

        let profile = profile_wallet(&features);
        info!(
            "✅ {} profiled as {} ({})",
            address,
            profile.identity.label(),
            profile.rating_text()
        );
        WalletAnalysis::profiled(address, &profile)
    }

    /// Narrator text when it answers in time with something non-empty,
    /// otherwise the deterministic report.
    ///
    /// The narrator runs as a detached task; when the wait elapses the
    /// handle is dropped and the task is left to finish on its own.
    async fn narrate(&self, features: &TokenFeatures, rsi: u8) -> String {
        let Some(narrator) = self.narrator.clone() else {
            return render_token_narrative(features, rsi);
        };

        let prompt = token_prompt(features, rsi);
        let task = tokio::spawn(async move { narrator.generate_narrative(&prompt).await });

        match tokio::time::timeout(self.narrator_timeout, task).await {
            Ok(Ok(Ok(text))) if !text.trim().is_empty() => {
                debug!("🤖 Using narrator text for {}", features.symbol);
                text
            }
            Ok(Ok(Ok(_))) => {
                info!("Narrator returned empty text, using deterministic report");
                render_token_narrative(features, rsi)
            }
            Ok(Ok(Err(e))) => {
                info!("Narrator failed ({}), using deterministic report", e);
                render_token_narrative(features, rsi)
            }
            Ok(Err(e)) => {
                warn!("Narrator task aborted ({}), using deterministic report", e);
                render_token_narrative(features, rsi)
            }
            Err(_) => {
                info!(
                    "Narrator exceeded {}ms, using deterministic report",
                    self.narrator_timeout.as_millis()
                );
                render_token_narrative(features, rsi)
            }
        }
    }
}
