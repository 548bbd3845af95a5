use foomax::{
    app::{Dashboards, PanelState, Session, User, UserRole, View},
    logger, AppState, Config, ContentGateway,
};
use std::env;
use std::fmt::Display;

fn report<T: Display>(title: &str, state: &PanelState<T>) {
    match state {
        PanelState::Idle => log::info!("{}: nothing requested", title),
        PanelState::Loading => log::warn!("{}: still loading", title),
        PanelState::Ready(value) => println!("\n== {} ==\n{}\n", title, value),
        PanelState::Failed(message) => log::warn!("{}: {}", title, message),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    logger::init_with_config(config.logger_config())?;
    if dotenv_loaded {
        log::info!("✅ .env file loaded");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }
    logger::log_config_info(&config);

    let gateway = match ContentGateway::from_config(&config) {
        Ok(gateway) => gateway,
        Err(e) => {
            log::error!("❌ {}", e);
            return Err(e.into());
        }
    };

    let role = env::var("FOOMAX_ROLE")
        .ok()
        .and_then(|r| UserRole::parse(&r))
        .unwrap_or(UserRole::Member);
    let name = env::var("FOOMAX_USER").unwrap_or_else(|_| "Aisha".to_string());
    let input = env::args().nth(1);

    let state = AppState::demo(Some(&name));
    let mut session = Session::new();
    let view = session.login(User {
        email: format!("{}@foomax.id", name.to_lowercase()),
        name,
        role,
    });

    let mut dashboards = Dashboards::new();
    dashboards
        .open(view, &state, &gateway, input.as_deref())
        .await;

    match view {
        View::Finder => {
            match dashboards.finder.panel.state() {
                PanelState::Ready(recipe) => {
                    println!("\n== {} ==\n{}", recipe.recipe_name, recipe.description);
                    println!(
                        "Prep {} · Cook {} · Serves {}",
                        recipe.prep_time, recipe.cook_time, recipe.servings
                    );
                    println!("\nIngredients:");
                    recipe.ingredients.iter().for_each(|i| println!("  - {}", i));
                    println!("\nInstructions:");
                    for (step, text) in recipe.instructions.iter().enumerate() {
                        println!("  {}. {}", step + 1, text);
                    }
                    session.set_recipe(Some(recipe.clone()));
                }
                PanelState::Failed(message) => log::warn!("Recipe: {}", message),
                _ => log::info!(
                    "Pass a dish name to look up a recipe, e.g. `foomax \"Ayam Penyet\"`"
                ),
            }
        }
        View::Member => report("Recommendations", dashboards.recommendations.panel.state()),
        View::Merchant => report("Dish of the Day", dashboards.dish_of_the_day.panel.state()),
        View::Marketer => report("Viral Copy", dashboards.copywriter.panel.state()),
        View::Runner => {
            report("Optimized Route", dashboards.route.panel.state());
            for (i, stop) in dashboards.route.steps().iter().enumerate() {
                log::debug!("stop {}: {}", i + 1, stop);
            }
        }
        View::Admin => report("Business Insight", dashboards.insights.panel.state()),
        View::Territory => report("Territory Advice", dashboards.territory.panel.state()),
        View::Watcher => report("Log Analysis", dashboards.anomalies.panel.state()),
    }

    session.logout();
    Ok(())
}
