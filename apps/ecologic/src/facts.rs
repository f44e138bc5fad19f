//! # Fact Provider
//!
//! One best-effort call to the Gemini text-generation endpoint for the
//! fact-of-the-day banner. No retry; every failure path (missing
//! credential, network error, malformed response) resolves to a
//! deterministically-selected fallback fact. The caller never sees an
//! error.

use ecologic_core::facts::fallback_fact;
use serde::Deserialize;
use serde_json::json;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

const PROMPT: &str = "Tell me a single, short, interesting, and positive environmental \
     fact of the day suitable for a learning app for students. Make it concise and easy \
     to understand.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

/// The fact-of-the-day provider.
#[derive(Debug, Clone)]
pub struct FactProvider {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl FactProvider {
    /// Build a provider; `None` means offline-only fallback facts.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            warn!("GEMINI_API_KEY not set; using fallback facts");
        }
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Fetch today's fact. Never fails.
    pub async fn fetch_fact(&self) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return self.fallback().to_string();
        };

        match self.request(key).await {
            Ok(fact) => fact,
            Err(err) => {
                debug!(error = %err, "fact request failed, using fallback");
                self.fallback().to_string()
            }
        }
    }

    async fn request(&self, key: &str) -> Result<String, reqwest::Error> {
        let body = json!({
            "contents": [{ "parts": [{ "text": PROMPT }] }]
        });

        let response: GenerateResponse = self
            .client
            .post(GENERATE_URL)
            .query(&[("key", key)])
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty());

        // A well-formed but empty response is a malformed-response
        // failure; fall back like any other.
        Ok(text.unwrap_or_else(|| self.fallback().to_string()))
    }

    /// The deterministic fallback: stable for a given day.
    fn fallback(&self) -> &'static str {
        fallback_fact(day_seed())
    }
}

/// Days since the Unix epoch, used to pick the offline fact of the day.
fn day_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / 86_400)
        .unwrap_or(0)
}

// =============================================================================
// TESTS
// =============================================================================
