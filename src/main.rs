use clap::Parser;
use search_bar::utils::{logger, validation::Validate};
use search_bar::{
    CliConfig, FlowOutcome, RandomPicker, RecommendationFlow, ReqwestTransport, StdinPrompter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting search-bar");

    // 載入並驗證配置，任何 API 呼叫前就要失敗
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!(
        "Endpoints: weather={}, recipes={}, nutrition={}",
        config.weather.endpoint,
        config.recipes.endpoint,
        config.nutrition.endpoint
    );

    let flow = RecommendationFlow::new(
        ReqwestTransport::new(),
        &config,
        Box::new(RandomPicker::new()),
        StdinPrompter::new(),
    );

    match flow.run().await {
        Ok(FlowOutcome::Completed { saved_to }) => {
            if let Some(path) = saved_to {
                tracing::info!("Ingredients saved to: {}", path.display());
            }
        }
        Ok(FlowOutcome::NoRecipesFound) => {
            tracing::info!("Flow ended without matching recipes");
        }
        Err(e) => {
            tracing::error!("Recommendation flow failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
