//! Request state for each AI-backed dashboard card.

use std::future::Future;

use crate::{
    error::Result,
    features::Feature,
    gateway::ContentGateway,
    models::{numbered_steps, LiveLog, MarketerStats, Recipe, RunnerData},
};

#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

/// One card's request lifecycle. `run` borrows the panel mutably until the
/// call settles, so a panel never has two requests in flight.
#[derive(Debug, Clone)]
pub struct Panel<T> {
    feature: Feature,
    state: PanelState<T>,
}

impl<T> Panel<T> {
    pub fn new(feature: Feature) -> Self {
        Self {
            feature,
            state: PanelState::Idle,
        }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn state(&self) -> &PanelState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PanelState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match &self.state {
            PanelState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            PanelState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = PanelState::Failed(message.into());
    }

    pub fn resolve(&mut self, value: T) {
        self.state = PanelState::Ready(value);
    }

    pub fn reset(&mut self) {
        self.state = PanelState::Idle;
    }

    /// Awaits `call`; a failure is logged and replaced by the feature's message.
    pub async fn run<F>(&mut self, call: F) -> &PanelState<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.state = PanelState::Loading;
        self.state = match call.await {
            Ok(value) => PanelState::Ready(value),
            Err(e) if e.is_local() => {
                log::warn!("Skipped {}: {}", self.feature.label(), e);
                PanelState::Failed(self.feature.failure_message().to_string())
            }
            Err(e) => {
                log::error!("Error generating {}: {}", self.feature.label(), e);
                PanelState::Failed(self.feature.failure_message().to_string())
            }
        };
        &self.state
    }
}

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a dish or ingredient.";
pub const NO_ORDERS_MESSAGE: &str = "No orders yet to generate recommendations!";
pub const TOO_FEW_STOPS_MESSAGE: &str =
    "You need at least two active deliveries to optimize a route.";
pub const NO_LOGS_MESSAGE: &str = "No logs available to analyze.";
pub const COPY_PLATFORM: &str = "WhatsApp/TikTok";

pub struct RecipeFinder {
    pub panel: Panel<Recipe>,
}

impl Default for RecipeFinder {
    fn default() -> Self {
        Self {
            panel: Panel::new(Feature::Recipe),
        }
    }
}

impl RecipeFinder {
    pub async fn search(&mut self, gateway: &ContentGateway, query: &str) -> &PanelState<Recipe> {
        if query.trim().is_empty() {
            self.panel.fail(EMPTY_QUERY_MESSAGE);
            return self.panel.state();
        }
        self.panel.run(gateway.generate_recipe(query)).await
    }
}

pub struct DishOfTheDayCard {
    pub panel: Panel<String>,
}

impl Default for DishOfTheDayCard {
    fn default() -> Self {
        Self {
            panel: Panel::new(Feature::DishOfTheDay),
        }
    }
}

impl DishOfTheDayCard {
    pub async fn load(
        &mut self,
        gateway: &ContentGateway,
        trending_ingredients: &[String],
    ) -> &PanelState<String> {
        self.panel
            .run(gateway.generate_dish_of_the_day(trending_ingredients))
            .await
    }
}

pub struct CopywriterCard {
    pub panel: Panel<String>,
}

impl Default for CopywriterCard {
    fn default() -> Self {
        Self {
            panel: Panel::new(Feature::MarketingCopy),
        }
    }
}

impl CopywriterCard {
    /// A blank dish name leaves the card untouched.
    pub async fn generate(
        &mut self,
        gateway: &ContentGateway,
        dish_name: &str,
    ) -> &PanelState<String> {
        if dish_name.trim().is_empty() {
            return self.panel.state();
        }
        self.panel
            .run(gateway.generate_marketing_copy(dish_name, COPY_PLATFORM))
            .await
    }
}

pub struct RecommendationsCard {
    pub panel: Panel<String>,
}

impl Default for RecommendationsCard {
    fn default() -> Self {
        Self {
            panel: Panel::new(Feature::MemberRecommendations),
        }
    }
}

impl RecommendationsCard {
    pub async fn load(
        &mut self,
        gateway: &ContentGateway,
        history: &[String],
    ) -> &PanelState<String> {
        if history.is_empty() {
            self.panel.resolve(NO_ORDERS_MESSAGE.to_string());
            return self.panel.state();
        }
        self.panel
            .run(gateway.generate_member_recommendations(history))
            .await
    }
}

pub struct AdminInsightsCard {
    pub panel: Panel<String>,
}

impl Default for AdminInsightsCard {
    fn default() -> Self {
        Self {
            panel: Panel::new(Feature::AdminInsights),
        }
    }
}

impl AdminInsightsCard {
    pub async fn load(
        &mut self,
        gateway: &ContentGateway,
        popular_dishes: &[String],
        marketer_stats: &MarketerStats,
    ) -> &PanelState<String> {
        self.panel
            .run(gateway.generate_admin_insights(popular_dishes, marketer_stats))
            .await
    }
}

pub struct TerritoryAdvisorCard {
    pub panel: Panel<String>,
}

impl Default for TerritoryAdvisorCard {
    fn default() -> Self {
        Self {
            panel: Panel::new(Feature::TerritoryAnalysis),
        }
    }
}

impl TerritoryAdvisorCard {
    pub async fn analyze(
        &mut self,
        gateway: &ContentGateway,
        region: &str,
        sales: &str,
    ) -> &PanelState<String> {
        self.panel
            .run(gateway.analyze_territory_performance(region, sales))
            .await
    }
}

pub struct RouteOptimizerCard {
    pub panel: Panel<String>,
}

impl Default for RouteOptimizerCard {
    fn default() -> Self {
        Self {
            panel: Panel::new(Feature::RouteOptimization),
        }
    }
}

impl RouteOptimizerCard {
    /// The button stays disabled until two deliveries are still open.
    pub fn can_optimize(runner: &RunnerData) -> bool {
        runner.pending_addresses().len() >= 2
    }

    pub async fn optimize(
        &mut self,
        gateway: &ContentGateway,
        runner: &RunnerData,
    ) -> &PanelState<String> {
        let addresses = runner.pending_addresses();
        if addresses.len() < 2 {
            self.panel.fail(TOO_FEW_STOPS_MESSAGE);
            return self.panel.state();
        }
        self.panel
            .run(gateway.generate_optimal_route(&addresses))
            .await
    }

    pub fn steps(&self) -> Vec<String> {
        self.panel
            .value()
            .map(|route| numbered_steps(route))
            .unwrap_or_default()
    }
}

pub struct AnomalyDetectorCard {
    pub panel: Panel<String>,
}

impl Default for AnomalyDetectorCard {
    fn default() -> Self {
        Self {
            panel: Panel::new(Feature::AnomalyDetection),
        }
    }
}

impl AnomalyDetectorCard {
    pub async fn analyze(
        &mut self,
        gateway: &ContentGateway,
        logs: &[LiveLog],
    ) -> &PanelState<String> {
        if logs.is_empty() {
            self.panel.fail(NO_LOGS_MESSAGE);
            return self.panel.state();
        }
        self.panel.run(gateway.detect_anomalies(logs)).await
    }
}
