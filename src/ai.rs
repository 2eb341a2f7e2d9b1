//! Remote meal generation against the Gemini `generateContent` endpoint.
//!
//! The prompt asks for a bare JSON object with `breakfast`/`lunch`/`dinner`
//! keys; models still wrap replies in markdown fences often enough that the
//! raw text is unfenced before parsing. Every failure mode here is non-fatal:
//! callers route errors into the local generator.

use crate::types::{MealSlot, Preferences};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("no API key configured: set GEMINI_API_KEY")]
    MissingKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gemini error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("empty completion")]
    EmptyReply,
    #[error("invalid plan JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parsed remote reply. Missing keys stay `None`; the planner fills them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PlanReply {
    #[serde(default)]
    pub breakfast: Option<String>,
    #[serde(default)]
    pub lunch: Option<String>,
    #[serde(default)]
    pub dinner: Option<String>,
}

impl PlanReply {
    pub fn slot(&self, slot: MealSlot) -> Option<&str> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_deref(),
            MealSlot::Lunch => self.lunch.as_deref(),
            MealSlot::Dinner => self.dinner.as_deref(),
        }
    }
}

/// Natural-language prompt with the diet, allergy and slot clauses embedded.
pub fn build_prompt(prefs: &Preferences, slot: Option<MealSlot>) -> String {
    let diet_clause = if prefs.diet.is_empty() {
        "any diet".to_string()
    } else {
        format!("{} diet", prefs.diet)
    };
    let allergy_clause = if prefs.allergies.is_empty() {
        "no allergy restrictions".to_string()
    } else {
        format!("avoiding {}", prefs.allergies.join(", "))
    };
    let slot_clause = match slot {
        Some(slot) => format!("a {slot} meal"),
        None => "breakfast, lunch and dinner meals".to_string(),
    };
    let never_include = if prefs.allergies.is_empty() {
        "any allergens".to_string()
    } else {
        prefs.allergies.join(", ")
    };
    format!(
        "Generate {slot_clause} for {diet_clause} {allergy_clause}.\n\
         Never include {never_include}.\n\
         Respond ONLY with this plain JSON format (no markdown, no code blocks, just the raw JSON):\n\
         {{\n  \"breakfast\": \"meal suggestion\",\n  \"lunch\": \"meal suggestion\",\n  \"dinner\": \"meal suggestion\"\n}}"
    )
}

/// Strips a leading ```json or ``` fence and a trailing ``` fence.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Unfences and parses the raw completion text.
pub fn parse_plan_reply(raw: &str) -> Result<PlanReply, GenerateError> {
    let cleaned = strip_code_fences(raw);
    Ok(serde_json::from_str(cleaned)?)
}

// Wire types for the generateContent call.

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    error: Option<GeminiApiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiApiError {
    message: String,
}

/// Thin Gemini client. Model comes from `GEMINI_MODEL`, key from
/// `GEMINI_API_KEY`.
pub struct MealPlanAI {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl MealPlanAI {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: api_key.into(),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }

    pub fn from_env() -> Result<Self, GenerateError> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| GenerateError::MissingKey)?;
        Ok(Self::new(api_key))
    }

    fn url(&self) -> String {
        format!(
            "{API_BASE_URL}/models/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }

    /// One prompt/response round trip; returns the raw completion text.
    async fn complete(&self, prompt: String) -> Result<String, GenerateError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self.client.post(self.url()).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiResponse>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .map(|error| error.message)
                .unwrap_or(body);
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&body)?;
        if let Some(error) = parsed.error {
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message: error.message,
            });
        }

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(GenerateError::EmptyReply);
        }
        Ok(text)
    }

    /// Requests a plan for the given preferences and optional single slot.
    pub async fn generate(
        &self,
        prefs: &Preferences,
        slot: Option<MealSlot>,
    ) -> Result<PlanReply, GenerateError> {
        let prompt = build_prompt(prefs, slot);
        debug!(model = %self.model, ?slot, "requesting meal plan");
        let text = self.complete(prompt).await?;
        parse_plan_reply(&text)
    }
}

/// Remote generation for one user action; errors are logged and returned so
/// the caller can fall back locally.
pub async fn request_plan(
    prefs: &Preferences,
    slot: Option<MealSlot>,
) -> Result<PlanReply, GenerateError> {
    let ai = MealPlanAI::from_env()?;
    let result = ai.generate(prefs, slot).await;
    if let Err(err) = &result {
        warn!(%err, "remote meal generation failed, falling back");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(diet: &str, allergies: &[&str]) -> Preferences {
        Preferences {
            diet: diet.to_string(),
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn prompt_mentions_diet_allergies_and_slot() {
        let prompt = build_prompt(&prefs("Vegan", &["Dairy", "Nuts"]), Some(MealSlot::Lunch));
        assert!(prompt.contains("a lunch meal"));
        assert!(prompt.contains("Vegan diet"));
        assert!(prompt.contains("avoiding Dairy, Nuts"));
        assert!(prompt.contains("Never include Dairy, Nuts"));
    }

    #[test]
    fn prompt_defaults_without_preferences() {
        let prompt = build_prompt(&Preferences::default(), None);
        assert!(prompt.contains("breakfast, lunch and dinner meals"));
        assert!(prompt.contains("any diet"));
        assert!(prompt.contains("no allergy restrictions"));
        assert!(prompt.contains("Never include any allergens"));
    }

    #[test]
    fn strips_json_fences() {
        let raw = "```json\n{\"breakfast\":\"X\",\"lunch\":\"Y\",\"dinner\":\"Z\"}\n```";
        let reply = parse_plan_reply(raw).unwrap();
        assert_eq!(reply.breakfast.as_deref(), Some("X"));
        assert_eq!(reply.lunch.as_deref(), Some("Y"));
        assert_eq!(reply.dinner.as_deref(), Some("Z"));
    }

    #[test]
    fn strips_bare_fences() {
        let raw = "```\n{\"lunch\":\"Soup\"}\n```";
        let reply = parse_plan_reply(raw).unwrap();
        assert_eq!(reply.lunch.as_deref(), Some("Soup"));
        assert_eq!(reply.breakfast, None);
    }

    #[test]
    fn unfenced_json_parses_directly() {
        let reply = parse_plan_reply("  {\"dinner\":\"Stew\"} ").unwrap();
        assert_eq!(reply.dinner.as_deref(), Some("Stew"));
    }

    #[test]
    fn garbage_reply_is_a_parse_error() {
        assert!(matches!(
            parse_plan_reply("Here are some meals for you!"),
            Err(GenerateError::Parse(_))
        ));
    }

    #[test]
    fn completion_text_extraction() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"breakfast\":\"A\"}"}]}}]}"#;
        let parsed: GeminiResponse = serde_json::from_str(body).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .as_ref()
            .map(|content| content.parts.iter().map(|p| p.text.clone()).collect())
            .unwrap_or_default();
        assert_eq!(text, "{\"breakfast\":\"A\"}");
    }
}
