use crate::analysis::{final_score, AnalysisResult, ContentType};
use crate::config::{ModelProvider, RemoteConfig};
use crate::reputation::SourceCredibility;
use anyhow::{anyhow, Context};
use base64::Engine as _;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const OPENAI_API_URL: &str = "https://api.openai.com";

const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// The JSON object the model is instructed to answer with. A missing score
/// falls back to the neutral 5.
#[derive(Debug, Deserialize)]
struct RemoteVerdict {
    score: Option<f64>,
    #[serde(default)]
    indicators: Vec<String>,
    reasoning: Option<String>,
}

/// Delegates text/image scoring to a remote model. Strictly single-shot: one
/// request per analysis, no retries. Callers handle failure by falling back to
/// the local analyzers (see GuardianEngine).
pub struct RemoteScorer {
    config: RemoteConfig,
    client: reqwest::Client,
    base_url: String,
}

impl RemoteScorer {
    pub fn new(config: RemoteConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("content-guardian/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = match config.provider {
            ModelProvider::Claude => ANTHROPIC_API_URL.to_string(),
            ModelProvider::OpenAi => OPENAI_API_URL.to_string(),
        };

        Ok(Self {
            config,
            client,
            base_url,
        })
    }

    /// Point requests somewhere else, for tests.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    fn model(&self) -> &str {
        match &self.config.model {
            Some(model) => model.as_str(),
            None => match self.config.provider {
                ModelProvider::Claude => DEFAULT_CLAUDE_MODEL,
                ModelProvider::OpenAi => DEFAULT_OPENAI_MODEL,
            },
        }
    }

    pub async fn score_text(
        &self,
        text: &str,
        credibility: SourceCredibility,
    ) -> anyhow::Result<AnalysisResult> {
        let prompt = format!(
            "Analyze this text and determine if it's AI-generated. Provide a score from 1-10 \
             (1=definitely human, 10=definitely AI) and explain your reasoning.\n\n\
             Text: \"{text}\"\n\n\
             Respond with JSON only:\n\
             {{\n  \"score\": 1-10,\n  \"indicators\": [\"list of specific AI indicators \
             found\"],\n  \"reasoning\": \"brief explanation of your assessment\"\n}}"
        );

        let raw = match self.config.provider {
            ModelProvider::Claude => self.claude_text_request(&prompt).await?,
            ModelProvider::OpenAi => self.openai_request(json!([{
                "role": "user",
                "content": prompt,
            }]))
            .await?,
        };

        self.build_result(ContentType::Text, &raw, credibility, "AI-Powered Analysis (Pro Mode)")
    }

    /// Remote image scoring needs the actual bytes; the caller fetches them.
    pub async fn score_image(
        &self,
        image_bytes: &[u8],
        media_type: &str,
        credibility: SourceCredibility,
    ) -> anyhow::Result<AnalysisResult> {
        let prompt = "Analyze this image for AI-generation indicators. Look for: unusual \
                      hands/fingers, inconsistent lighting, unnatural textures, weird text, \
                      impossible geometry, overly smooth surfaces.\n\n\
                      Provide a score from 1-10 (1=definitely real photo, 10=definitely AI) and \
                      list specific indicators.\n\n\
                      Respond with JSON only:\n\
                      {\n  \"score\": 1-10,\n  \"indicators\": [\"list of specific AI indicators \
                      you see\"],\n  \"reasoning\": \"brief explanation\"\n}";
        let encoded = base64::engine::general_purpose::STANDARD.encode(image_bytes);

        let raw = match self.config.provider {
            ModelProvider::Claude => {
                let content = json!([
                    {
                        "type": "image",
                        "source": {
                            "type": "base64",
                            "media_type": media_type,
                            "data": encoded,
                        }
                    },
                    { "type": "text", "text": prompt }
                ]);
                self.claude_request(content).await?
            }
            ModelProvider::OpenAi => {
                let data_url = format!("data:{media_type};base64,{encoded}");
                self.openai_request(json!([{
                    "role": "user",
                    "content": [
                        { "type": "image_url", "image_url": { "url": data_url } },
                        { "type": "text", "text": prompt }
                    ]
                }]))
                .await?
            }
        };

        self.build_result(
            ContentType::Image,
            &raw,
            credibility,
            "AI-Powered Visual Analysis (Pro Mode)",
        )
    }

    async fn claude_text_request(&self, prompt: &str) -> anyhow::Result<String> {
        self.claude_request(json!(prompt)).await
    }

    async fn claude_request(&self, content: serde_json::Value) -> anyhow::Result<String> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = json!({
            "model": self.model(),
            "max_tokens": 1000,
            "messages": [{ "role": "user", "content": content }],
        });

        log::debug!("remote scoring request to {url}");
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("API error ({status}): {error_text}"));
        }

        #[derive(Deserialize)]
        struct MessagesResponse {
            content: Vec<ContentBlock>,
        }
        #[derive(Deserialize)]
        struct ContentBlock {
            text: String,
        }

        let parsed: MessagesResponse = response.json().await?;
        let text = parsed
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or_else(|| anyhow!("empty model response"))?;
        Ok(text)
    }

    async fn openai_request(&self, messages: serde_json::Value) -> anyhow::Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = json!({
            "model": self.model(),
            "max_tokens": 1000,
            "messages": messages,
        });

        log::debug!("remote scoring request to {url}");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("API error ({status}): {error_text}"));
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<Choice>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChatMessage,
        }
        #[derive(Deserialize)]
        struct ChatMessage {
            content: String,
        }

        let parsed: ChatResponse = response.json().await?;
        let text = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow!("empty model response"))?;
        Ok(text)
    }

    fn build_result(
        &self,
        content_type: ContentType,
        raw: &str,
        credibility: SourceCredibility,
        pro_header: &str,
    ) -> anyhow::Result<AnalysisResult> {
        let verdict = parse_verdict(raw)?;

        let mut result = AnalysisResult::new(content_type, credibility);
        result.is_pro = true;
        result.score = final_score(verdict.score.unwrap_or(5.0));
        result.indicators = verdict.indicators;
        result.details.push(pro_header.to_string());
        if let Some(reasoning) = verdict.reasoning {
            result.details.push(reasoning);
        }
        Ok(result)
    }
}

/// Models often wrap their JSON in code fences; strip them before parsing.
fn parse_verdict(raw: &str) -> anyhow::Result<RemoteVerdict> {
    let cleaned = raw
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    serde_json::from_str(cleaned).context("malformed model verdict")
}
