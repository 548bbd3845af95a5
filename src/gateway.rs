use std::sync::Arc;

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    config::Config,
    error::{FoomaxError, Result},
    features,
    gemini::{GeminiTextClient, GenerationBackend},
    logger,
    models::{GenerationRequest, GenerationResult, LiveLog, MarketerStats, Recipe},
};

/// Single entry point for every generation call.
#[derive(Clone)]
pub struct ContentGateway {
    backend: Arc<dyn GenerationBackend>,
}

impl ContentGateway {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Builds a Gemini-backed gateway. Fails when the API key is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GeminiTextClient::new(&config.gemini)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        validate(request)?;

        let request_id = Uuid::new_v4().to_string();
        let _timer = logger::timer(format!("generation {}", &request_id[..8]));
        log::debug!(
            "[req:{}] {} request, schema mode: {}",
            &request_id[..8],
            self.backend.name(),
            request.is_schema_mode()
        );

        let raw = self.backend.generate(request).await?;
        let text = raw.trim();
        if text.is_empty() {
            log::warn!("[req:{}] Empty response from {}", &request_id[..8], self.backend.name());
            return Err(FoomaxError::EmptyResponse);
        }

        match &request.output_schema {
            Some(schema) => {
                let value: serde_json::Value = serde_json::from_str(text).map_err(|e| {
                    FoomaxError::ParseError(format!("response is not valid JSON: {}", e))
                })?;
                schema.validate(&value)?;
                Ok(GenerationResult::Structured(value))
            }
            None => Ok(GenerationResult::Text(text.to_string())),
        }
    }

    /// Schema-mode call deserialized into `T`.
    pub async fn generate_structured<T: DeserializeOwned>(
        &self,
        request: &GenerationRequest,
    ) -> Result<T> {
        if !request.is_schema_mode() {
            return Err(FoomaxError::InvalidInput(
                "structured generation requires an output schema".into(),
            ));
        }
        match self.generate(request).await? {
            GenerationResult::Structured(value) => serde_json::from_value(value)
                .map_err(|e| FoomaxError::ParseError(e.to_string())),
            GenerationResult::Text(_) => Err(FoomaxError::ParseError(
                "expected a structured response".into(),
            )),
        }
    }

    pub async fn generate_text(&self, request: &GenerationRequest) -> Result<String> {
        match self.generate(request).await? {
            GenerationResult::Text(text) => Ok(text),
            GenerationResult::Structured(value) => Ok(value.to_string()),
        }
    }

    pub async fn generate_recipe(&self, dish_name: &str) -> Result<Recipe> {
        require_text("dish name", dish_name)?;
        self.generate_structured(&features::recipe_request(dish_name)).await
    }

    pub async fn generate_dish_of_the_day(
        &self,
        trending_ingredients: &[String],
    ) -> Result<String> {
        require_items("trending ingredients", trending_ingredients)?;
        self.generate_text(&features::dish_of_the_day_request(trending_ingredients)).await
    }

    pub async fn generate_marketing_copy(&self, dish_name: &str, platform: &str) -> Result<String> {
        require_text("dish name", dish_name)?;
        require_text("platform", platform)?;
        self.generate_text(&features::marketing_copy_request(dish_name, platform)).await
    }

    pub async fn generate_member_recommendations(
        &self,
        order_history: &[String],
    ) -> Result<String> {
        require_items("order history", order_history)?;
        self.generate_text(&features::recommendations_request(order_history)).await
    }

    pub async fn generate_admin_insights(
        &self,
        popular_dishes: &[String],
        marketer_stats: &MarketerStats,
    ) -> Result<String> {
        require_items("popular dishes", popular_dishes)?;
        self.generate_text(&features::admin_insights_request(
            popular_dishes,
            marketer_stats,
        ))
        .await
    }

    pub async fn analyze_territory_performance(&self, region: &str, sales: &str) -> Result<String> {
        require_text("region", region)?;
        require_text("sales volume", sales)?;
        self.generate_text(&features::territory_request(region, sales)).await
    }

    pub async fn generate_optimal_route(&self, addresses: &[String]) -> Result<String> {
        require_items("delivery addresses", addresses)?;
        self.generate_text(&features::route_request(addresses)).await
    }

    pub async fn detect_anomalies(&self, logs: &[LiveLog]) -> Result<String> {
        if logs.is_empty() {
            return Err(FoomaxError::InvalidInput("no logs to analyze".into()));
        }
        self.generate_text(&features::anomaly_request(logs)).await
    }
}

fn require_text(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FoomaxError::InvalidInput(format!("{} must not be blank", what)));
    }
    Ok(())
}

fn require_items(what: &str, items: &[String]) -> Result<()> {
    if items.iter().all(|item| item.trim().is_empty()) {
        return Err(FoomaxError::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(())
}

fn validate(request: &GenerationRequest) -> Result<()> {
    if request.prompt.trim().is_empty() {
        return Err(FoomaxError::InvalidInput("prompt must not be blank".into()));
    }
    if let Some(t) = request.temperature {
        if !(0.0..=1.0).contains(&t) {
            return Err(FoomaxError::InvalidInput(format!(
                "temperature {} is outside 0.0-1.0",
                t
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{features::Feature, models::LiveLogLevel, testing::ScriptedBackend};
    use serde_json::json;

    fn scripted_gateway(backend: ScriptedBackend) -> (ContentGateway, Arc<ScriptedBackend>) {
        let backend = Arc::new(backend);
        (ContentGateway::new(backend.clone()), backend)
    }

    fn login_log() -> LiveLog {
        LiveLog {
            id: 1,
            timestamp: "10:42:01".to_string(),
            level: LiveLogLevel::Warning,
            message: "5 failed logins from 192.168.1.45".to_string(),
        }
    }

    fn recipe_json() -> String {
        json!({
            "recipeName": "Ayam Penyet",
            "description": "Smashed fried chicken served with fiery sambal.",
            "prepTime": "20 minutes",
            "cookTime": "45 minutes",
            "servings": "4 people",
            "ingredients": ["1 whole chicken", "5 shallots", "3 red chilies"],
            "instructions": ["Boil the chicken with spices.", "Fry and smash."]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_text_mode_trims_reply() {
        let (gateway, _) =
            scripted_gateway(ScriptedBackend::new().reply("\n  Nasi Kerabu Royale  \n\t"));
        let result = gateway
            .generate(&GenerationRequest::new("Suggest a dish", "Chef."))
            .await
            .unwrap();
        assert_eq!(result, GenerationResult::Text("Nasi Kerabu Royale".to_string()));
    }

    #[tokio::test]
    async fn test_every_text_variant_returns_trimmed_text() {
        let stats = MarketerStats {
            total_commission: "Rp 4,500,000".to_string(),
            total_sales_generated: "Rp 150,000,000".to_string(),
            conversion_rate: "8.5%".to_string(),
        };
        let dishes = vec!["Rendang".to_string()];
        let mut backend = ScriptedBackend::new();
        for i in 0..7 {
            backend = backend.reply(format!("  answer {}\n", i));
        }
        let (gateway, backend) = scripted_gateway(backend);

        let answers = vec![
            gateway.generate_dish_of_the_day(&dishes).await.unwrap(),
            gateway.generate_marketing_copy("Rendang", "TikTok").await.unwrap(),
            gateway.generate_member_recommendations(&dishes).await.unwrap(),
            gateway.generate_admin_insights(&dishes, &stats).await.unwrap(),
            gateway
                .analyze_territory_performance("Bandung", "Rp 10jt")
                .await
                .unwrap(),
            gateway
                .generate_optimal_route(&["A".to_string(), "B".to_string()])
                .await
                .unwrap(),
            gateway.detect_anomalies(&[login_log()]).await.unwrap(),
        ];
        let expected: Vec<String> = (0..7).map(|i| format!("answer {}", i)).collect();
        assert_eq!(answers, expected);

        let temperatures: Vec<Option<f64>> =
            backend.requests().iter().map(|r| r.temperature).collect();
        assert_eq!(
            temperatures,
            vec![None, Some(0.9), Some(0.7), Some(0.8), Some(0.5), Some(0.2), Some(0.3)]
        );
    }

    #[tokio::test]
    async fn test_recipe_scenario() {
        let (gateway, backend) = scripted_gateway(ScriptedBackend::new().reply(recipe_json()));
        let recipe = gateway.generate_recipe("Ayam Penyet").await.unwrap();

        assert!(!recipe.recipe_name.is_empty());
        assert!(!recipe.ingredients.is_empty());
        let sent = &backend.requests()[0];
        assert_eq!(sent.prompt, "Provide a recipe for \"Ayam Penyet\".");
        assert_eq!(sent.system_instruction, Feature::Recipe.system_instruction());
        assert!(sent.output_schema.is_some());
    }

    #[tokio::test]
    async fn test_schema_mode_missing_field_is_parse_error() {
        let partial = json!({
            "recipeName": "Ayam Penyet",
            "description": "Smashed fried chicken.",
            "prepTime": "20 minutes",
            "cookTime": "45 minutes",
            "servings": "4 people",
            "ingredients": ["1 whole chicken"]
        })
        .to_string();
        let (gateway, _) = scripted_gateway(ScriptedBackend::new().reply(partial));
        let err = gateway.generate_recipe("Ayam Penyet").await.unwrap_err();
        assert!(matches!(err, FoomaxError::ParseError(msg) if msg.contains("instructions")));
    }

    #[tokio::test]
    async fn test_schema_mode_invalid_json_is_parse_error() {
        let (gateway, _) =
            scripted_gateway(ScriptedBackend::new().reply("Here is your recipe: Ayam"));
        let err = gateway.generate_recipe("Ayam Penyet").await.unwrap_err();
        assert!(matches!(err, FoomaxError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_empty_reply_is_empty_response() {
        let (gateway, _) = scripted_gateway(ScriptedBackend::new().reply("").reply("   \n"));
        assert!(matches!(
            gateway.generate_recipe("Ayam Penyet").await,
            Err(FoomaxError::EmptyResponse)
        ));
        assert!(matches!(
            gateway.generate_optimal_route(&["A".to_string()]).await,
            Err(FoomaxError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn test_blank_prompt_rejected_before_network() {
        let (gateway, backend) = scripted_gateway(ScriptedBackend::new().reply("unused"));
        for prompt in ["", "   ", "\n\t"] {
            let err = gateway
                .generate(&GenerationRequest::new(prompt, "Chef."))
                .await
                .unwrap_err();
            assert!(matches!(err, FoomaxError::InvalidInput(_)));
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_user_input_rejected_before_network() {
        let stats = MarketerStats {
            total_commission: "Rp 4,500,000".to_string(),
            total_sales_generated: "Rp 150,000,000".to_string(),
            conversion_rate: "8.5%".to_string(),
        };
        let blank = vec!["  ".to_string()];
        let (gateway, backend) = scripted_gateway(ScriptedBackend::new().reply("unused"));

        let errors = vec![
            gateway.generate_recipe("   ").await.map(|_| ()).unwrap_err(),
            gateway.generate_marketing_copy("", "TikTok").await.unwrap_err(),
            gateway.generate_marketing_copy("Sate", " ").await.unwrap_err(),
            gateway.generate_dish_of_the_day(&[]).await.unwrap_err(),
            gateway.generate_member_recommendations(&blank).await.unwrap_err(),
            gateway.generate_admin_insights(&[], &stats).await.unwrap_err(),
            gateway.analyze_territory_performance("", "Rp 10jt").await.unwrap_err(),
            gateway.analyze_territory_performance("Bandung", "\t").await.unwrap_err(),
            gateway.generate_optimal_route(&[]).await.unwrap_err(),
            gateway.detect_anomalies(&[]).await.unwrap_err(),
        ];
        for err in errors {
            assert!(matches!(err, FoomaxError::InvalidInput(_)), "{:?}", err);
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_out_of_range_temperature_rejected() {
        let (gateway, backend) = scripted_gateway(ScriptedBackend::new().reply("unused"));
        let request = GenerationRequest::new("Write a caption", "Marketer.").with_temperature(1.5);
        assert!(matches!(
            gateway.generate(&request).await,
            Err(FoomaxError::InvalidInput(_))
        ));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_is_surfaced() {
        let (gateway, backend) = scripted_gateway(
            ScriptedBackend::new()
                .fail(FoomaxError::RequestError("503 Service Unavailable".into())),
        );
        let err = gateway
            .generate_marketing_copy("Sate", "WhatsApp/TikTok")
            .await
            .unwrap_err();
        assert!(matches!(err, FoomaxError::RequestError(_)));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_structured_requires_schema() {
        let (gateway, backend) = scripted_gateway(ScriptedBackend::new().reply("{}"));
        let result: Result<Recipe> = gateway
            .generate_structured(&GenerationRequest::new("Recipe please", "Chef."))
            .await;
        assert!(matches!(result, Err(FoomaxError::InvalidInput(_))));
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_from_config_without_key_fails() {
        assert!(matches!(
            ContentGateway::from_config(&Config::new()),
            Err(FoomaxError::ConfigError(_))
        ));
    }
}
