use crate::{
    config::GeminiConfig,
    error::{FoomaxError, Result},
    gemini::GenerationBackend,
    models::GenerationRequest,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};

#[derive(Clone)]
pub struct GeminiTextClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiTextClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();

        Ok(Self {
            client: Client::new(),
            api_key,
            model: config.model_or_default().to_string(),
            base_url: config.base_url_or_default().to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, model_id: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model_id)
    }

    pub(crate) fn build_payload(request: &GenerationRequest) -> Value {
        let mut generation_config = Map::new();
        if let Some(temperature) = request.temperature {
            generation_config.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(schema) = &request.output_schema {
            generation_config.insert("responseMimeType".to_string(), json!("application/json"));
            generation_config.insert("responseSchema".to_string(), schema.to_response_schema());
        }

        let mut payload = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": request.prompt }]
                }
            ],
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }]
            }
        });
        if !generation_config.is_empty() {
            payload["generationConfig"] = Value::Object(generation_config);
        }
        payload
    }

    /// Concatenates the text parts of the first candidate.
    pub(crate) fn extract_text(body: &str) -> Result<String> {
        let response: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
            FoomaxError::ResponseError(format!("Failed to parse Gemini response: {}", e))
        })?;

        let Some(candidate) = response.candidates.into_iter().next() else {
            if let Some(feedback) = response.prompt_feedback {
                log::warn!("Gemini returned no candidates, prompt feedback: {}", feedback);
            }
            return Ok(String::new());
        };

        if let Some(reason) = &candidate.finish_reason {
            log::debug!("Gemini finish reason: {}", reason);
        }

        Ok(candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl GenerationBackend for GeminiTextClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let model_id = request.model_id.as_deref().unwrap_or(&self.model);
        let payload = Self::build_payload(request);

        log::info!("Invoking model: {}", model_id);
        log::debug!("Generation request payload: {}", payload);

        let response = self
            .client
            .post(self.endpoint(model_id))
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Gemini transport error: {:?}", e);
                FoomaxError::RequestError(format!("Gemini request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("Gemini service error {}: {}", status, body);
            return Err(FoomaxError::RequestError(format!(
                "Gemini service error: {} - {}",
                status.as_u16(),
                body
            )));
        }

        Self::extract_text(&body)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
