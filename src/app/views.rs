use crate::gateway::ContentGateway;

use super::{navigation::View, panels::*, state::AppState};

/// Every AI card in the application, one panel each.
#[derive(Default)]
pub struct Dashboards {
    pub finder: RecipeFinder,
    pub dish_of_the_day: DishOfTheDayCard,
    pub copywriter: CopywriterCard,
    pub recommendations: RecommendationsCard,
    pub insights: AdminInsightsCard,
    pub territory: TerritoryAdvisorCard,
    pub route: RouteOptimizerCard,
    pub anomalies: AnomalyDetectorCard,
}

impl Dashboards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triggers the AI actions shown on `view`, one request at a time.
    /// `input` is the finder query or the copywriter's dish name.
    pub async fn open(
        &mut self,
        view: View,
        state: &AppState,
        gateway: &ContentGateway,
        input: Option<&str>,
    ) {
        log::info!("Opening {} view", view.title());
        match view {
            View::Finder => {
                if let Some(query) = input {
                    self.finder.search(gateway, query).await;
                }
            }
            View::Member => {
                self.recommendations
                    .load(gateway, &state.order_history_dishes())
                    .await;
            }
            View::Merchant => {
                self.dish_of_the_day
                    .load(gateway, &state.merchant.trending_ingredients)
                    .await;
            }
            View::Marketer => {
                let dish = input.or_else(|| {
                    state
                        .marketer
                        .active_campaigns
                        .first()
                        .map(|c| c.dish_name.as_str())
                });
                if let Some(dish) = dish {
                    self.copywriter.generate(gateway, dish).await;
                }
            }
            View::Runner => {
                self.route.optimize(gateway, &state.runner).await;
            }
            View::Admin => {
                self.insights
                    .load(
                        gateway,
                        &state.merchant.popular_dishes,
                        &state.marketer.stats,
                    )
                    .await;
            }
            View::Territory => {
                let stats = &state.territory.stats;
                self.territory
                    .analyze(gateway, &stats.region_name, &stats.total_sales_volume)
                    .await;
            }
            View::Watcher => {
                self.anomalies
                    .analyze(gateway, &state.watcher.live_logs)
                    .await;
            }
        }
    }
}
