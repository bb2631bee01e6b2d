//! Gemini client — the single point of entry for resume generation calls.
//!
//! The response JSON schema constrains the model's output to the resume
//! shape; the server deliberately does not re-validate what comes back, it
//! passes the generated document through as a raw JSON value.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-05-20:generateContent";
const MAX_RETRIES: u32 = 3;
/// Generation backoff starts higher than the client's fetch backoff; the
/// upstream model API rate-limits more aggressively than our own endpoint.
const INITIAL_DELAY_MS: u64 = 2000;

const GENERATION_SYSTEM: &str = "You are an AI specializing in writing highly engaging and \
    structured professional resumes for fictional characters with extremely creative or quirky \
    professions. The output MUST strictly adhere to the provided JSON schema.";
const GENERATION_PROMPT: &str = "Generate a complete, structured resume for a fictional \
    character. Give them a highly unusual or quirky job title and experience.";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("generated resume could not be parsed as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API returned no content")]
    EmptyContent,

    #[error("generation failed after {retries} attempts")]
    RetriesExhausted { retries: u32 },
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Client for the Gemini generateContent API with retry logic.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GEMINI_API_URL.to_string())
    }

    /// Lets tests point the client at a mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }

    /// Generates one fictional resume as raw JSON.
    ///
    /// Transport errors and non-2xx statuses are retried with exponential
    /// backoff. A malformed success response (no candidates, or text that is
    /// not JSON) is terminal immediately: retrying the same prompt against a
    /// healthy API rarely fixes a structural problem.
    pub async fn generate_resume(&self) -> Result<Value, LlmError> {
        let request_body = json!({
            "contents": [{ "parts": [{ "text": GENERATION_PROMPT }] }],
            "systemInstruction": { "parts": [{ "text": GENERATION_SYSTEM }] },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": resume_schema(),
            }
        });

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 2s, 4s
                let delay = Duration::from_millis(INITIAL_DELAY_MS * (1 << (attempt - 1)));
                warn!(
                    "Generation attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.base_url)
                .query(&[("key", self.api_key.as_str())])
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            let envelope: GenerateContentResponse = response.json().await?;
            let text = extract_text(&envelope).ok_or(LlmError::EmptyContent)?;

            // The model returns the resume as a JSON string; parse it here so
            // the route serves a JSON object, not a quoted blob.
            let resume: Value = serde_json::from_str(text)?;
            debug!("Generated resume parsed successfully");
            return Ok(resume);
        }

        Err(last_error.unwrap_or(LlmError::RetriesExhausted {
            retries: MAX_RETRIES,
        }))
    }
}

/// Pulls the generated text out of the first candidate's first part.
fn extract_text(envelope: &GenerateContentResponse) -> Option<&str> {
    envelope
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|c| c.parts.first())
        .and_then(|p| p.text.as_deref())
}

/// JSON schema the model's structured output must follow. Mirrors the
/// client-side resume shape.
fn resume_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "Full name of the fictional professional." },
            "title": { "type": "STRING", "description": "Their unique job title or profession." },
            "summary": { "type": "STRING", "description": "A brief, one-paragraph professional summary." },
            "contact": {
                "type": "OBJECT",
                "properties": {
                    "email": { "type": "STRING" },
                    "phone": { "type": "STRING" },
                    "location": { "type": "STRING" }
                }
            },
            "experience": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "company": { "type": "STRING", "description": "Fictional company name." },
                        "role": { "type": "STRING", "description": "Job role at the company." },
                        "duration": { "type": "STRING", "description": "Start and end dates." },
                        "description": { "type": "STRING", "description": "Key achievement in one sentence." }
                    },
                    "required": ["company", "role", "duration", "description"]
                },
                "description": "A list of 2 to 3 relevant work experiences."
            },
            "skills": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 5 key, sometimes absurd, skills."
            }
        },
        "required": ["name", "title", "summary", "contact", "experience", "skills"]
    })
}
