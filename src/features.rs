//! The AI-backed features of the marketplace and the requests they send.
//!
//! Every feature shares the gateway contract and differs only in prompt,
//! persona, schema and sampling temperature.

use serde::{Deserialize, Serialize};

use crate::models::{GenerationRequest, LiveLog, MarketerStats, Recipe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Recipe,
    DishOfTheDay,
    MarketingCopy,
    MemberRecommendations,
    AdminInsights,
    TerritoryAnalysis,
    RouteOptimization,
    AnomalyDetection,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::Recipe,
        Feature::DishOfTheDay,
        Feature::MarketingCopy,
        Feature::MemberRecommendations,
        Feature::AdminInsights,
        Feature::TerritoryAnalysis,
        Feature::RouteOptimization,
        Feature::AnomalyDetection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Recipe => "recipe",
            Feature::DishOfTheDay => "dish of the day",
            Feature::MarketingCopy => "marketing copy",
            Feature::MemberRecommendations => "recommendations",
            Feature::AdminInsights => "business insight",
            Feature::TerritoryAnalysis => "territory analysis",
            Feature::RouteOptimization => "route",
            Feature::AnomalyDetection => "log analysis",
        }
    }

    pub fn system_instruction(&self) -> &'static str {
        match self {
            Feature::Recipe => "You are an expert Halal and Syar'i chef. Your task is to provide delicious, authentic, and easy-to-follow Halal recipes. You must ensure all ingredients are Halal-compliant. Respond ONLY with a valid JSON object.",
            Feature::DishOfTheDay => "You are a creative restaurant consultant. Your task is to invent an appealing 'Dish of the Day'. Respond with the dish name followed by a single, short descriptive sentence.",
            Feature::MarketingCopy => "You are a digital marketing expert specializing in viral food copywriting. Your task is to generate a catchy, persuasive, and Halal-friendly caption to sell a specific dish. Include emojis and hashtags.",
            Feature::MemberRecommendations => "You are a food recommendation expert. Suggest 3 new dishes based on history. Numbered list only.",
            Feature::AdminInsights => "You are a business analyst for a food marketing agency. Analyze the data and provide one strategic recommendation to increase total sales volume.",
            Feature::TerritoryAnalysis => "You are a regional sales director. Analyze the territory performance and give brief advice on how to recruit more merchants.",
            Feature::RouteOptimization => "You are a logistics expert. Optimize the delivery route for efficiency. Return a numbered list.",
            Feature::AnomalyDetection => "You are a system administrator. Analyze logs for security threats or performance issues.",
        }
    }

    /// Lower values for logistics and analysis, higher for copywriting.
    pub fn temperature(&self) -> Option<f64> {
        match self {
            Feature::Recipe | Feature::DishOfTheDay => None,
            Feature::MarketingCopy => Some(0.9),
            Feature::MemberRecommendations => Some(0.7),
            Feature::AdminInsights => Some(0.8),
            Feature::TerritoryAnalysis => Some(0.5),
            Feature::RouteOptimization => Some(0.2),
            Feature::AnomalyDetection => Some(0.3),
        }
    }

    /// Short message shown in place of the result when the call fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Feature::Recipe => "Sorry, we couldn't fetch a recipe. The kitchen might be busy. Please try again later.",
            Feature::DishOfTheDay => "Could not generate a suggestion. Please try again later.",
            Feature::MarketingCopy => "Error generating copy. Try again.",
            Feature::MemberRecommendations => "Could not get recommendations. Please try again later.",
            Feature::AdminInsights => "Could not generate insight. Please try again later.",
            Feature::TerritoryAnalysis => "Analysis failed.",
            Feature::RouteOptimization => "Could not generate route. Please try again.",
            Feature::AnomalyDetection => "Could not analyze logs. Please try again.",
        }
    }

    fn request(&self, prompt: String) -> GenerationRequest {
        let request = GenerationRequest::new(prompt, self.system_instruction());
        let request = match self.temperature() {
            Some(t) => request.with_temperature(t),
            None => request,
        };
        match self {
            Feature::Recipe => request.with_schema(Recipe::schema()),
            _ => request,
        }
    }
}

pub fn recipe_request(dish_name: &str) -> GenerationRequest {
    Feature::Recipe.request(format!("Provide a recipe for \"{}\".", dish_name.trim()))
}

pub fn dish_of_the_day_request(trending_ingredients: &[String]) -> GenerationRequest {
    Feature::DishOfTheDay.request(format!(
        "Based on these trending ingredients: {}, create a unique Halal dish.",
        trending_ingredients.join(", ")
    ))
}

pub fn marketing_copy_request(dish_name: &str, platform: &str) -> GenerationRequest {
    Feature::MarketingCopy.request(format!(
        "Write a short, viral marketing caption to sell \"{}\" on {}. Focus on the taste and the fact that it is Halal.",
        dish_name.trim(),
        platform
    ))
}

pub fn recommendations_request(order_history: &[String]) -> GenerationRequest {
    Feature::MemberRecommendations.request(format!(
        "Based on my past orders of: {}, what should I try next?",
        order_history.join(", ")
    ))
}

pub fn admin_insights_request(
    popular_dishes: &[String],
    marketer_stats: &MarketerStats,
) -> GenerationRequest {
    Feature::AdminInsights.request(format!(
        "Most popular dishes: {}. Marketer Total Sales: {}. Marketer Conversion Rate: {}. What is one strategy to help marketers sell more?",
        popular_dishes.join(", "),
        marketer_stats.total_sales_generated,
        marketer_stats.conversion_rate
    ))
}

pub fn territory_request(region: &str, sales: &str) -> GenerationRequest {
    Feature::TerritoryAnalysis.request(format!(
        "Region: {}. Total Sales Volume: {}. Provide 3 bullet points on how to grow this territory.",
        region, sales
    ))
}

pub fn route_request(addresses: &[String]) -> GenerationRequest {
    Feature::RouteOptimization.request(format!(
        "Optimize a route for these stops: {}.",
        addresses.join(", ")
    ))
}

pub fn anomaly_request(logs: &[LiveLog]) -> GenerationRequest {
    let logs_text = logs.iter().map(LiveLog::line).collect::<Vec<_>>().join("\n");
    Feature::AnomalyDetection.request(format!(
        "Analyze these system logs:\n{}\n\nReport any anomalies or confirm system is normal.",
        logs_text
    ))
}
