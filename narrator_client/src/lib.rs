pub mod client;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use error::NarratorError;
pub use types::{GeminiRequest, GeminiResponse};

use async_trait::async_trait;
use smre_core::TokenFeatures;

/// Generative text source for token reports
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn generate_narrative(&self, prompt: &str) -> Result<String, NarratorError>;
}

/// Prompt sent to the narrator for a token
pub fn token_prompt(features: &TokenFeatures, rsi: u8) -> String {
    format!(
        "Analyze {}. Price: {}, Change: {}%. Technicals: RSI {}. Format: Markdown. Be brief but expert.",
        features.symbol, features.price, features.change_24h, rsi
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_prompt() {
        let features = TokenFeatures {
            symbol: "PEPE".to_string(),
            price: 0.00001234,
            change_24h: 12.5,
            ..Default::default()
        };

        assert_eq!(
            token_prompt(&features, 75),
            "Analyze PEPE. Price: 0.00001234, Change: 12.5%. Technicals: RSI 75. Format: Markdown. Be brief but expert."
        );
    }
}
