pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "search-bar")]
#[command(about = "Weather-aware recipe suggestions, nutrition facts and shopping lists")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, env = "OPENWEATHER_ENDPOINT")]
    pub weather_endpoint: Option<String>,

    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub weather_api_key: Option<String>,

    #[arg(long, env = "EDAMAM_RECIPE_ENDPOINT")]
    pub recipe_endpoint: Option<String>,

    #[arg(long, env = "EDAMAM_APP_ID", hide_env_values = true)]
    pub recipe_app_id: Option<String>,

    #[arg(long, env = "EDAMAM_APP_KEY", hide_env_values = true)]
    pub recipe_app_key: Option<String>,

    #[arg(long, env = "EDAMAM_NUTRITION_ENDPOINT")]
    pub nutrition_endpoint: Option<String>,

    #[arg(long, env = "EDAMAM_NUTRITION_APP_ID", hide_env_values = true)]
    pub nutrition_app_id: Option<String>,

    #[arg(long, env = "EDAMAM_NUTRITION_APP_KEY", hide_env_values = true)]
    pub nutrition_app_key: Option<String>,

    #[arg(long, help = "Directory the ingredients file is written to")]
    pub output_dir: Option<String>,

    #[arg(long, help = "Name of the ingredients file")]
    pub output_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the optional TOML file and lets flags/env values override it.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };

        fn apply(target: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        apply(&mut config.weather.endpoint, &self.weather_endpoint);
        apply(&mut config.weather.api_key, &self.weather_api_key);
        apply(&mut config.recipes.endpoint, &self.recipe_endpoint);
        apply(&mut config.recipes.app_id, &self.recipe_app_id);
        apply(&mut config.recipes.app_key, &self.recipe_app_key);
        apply(&mut config.nutrition.endpoint, &self.nutrition_endpoint);
        apply(&mut config.nutrition.app_id, &self.nutrition_app_id);
        apply(&mut config.nutrition.app_key, &self.nutrition_app_key);
        apply(&mut config.output.directory, &self.output_dir);
        apply(&mut config.output.file_name, &self.output_file);

        Ok(config)
    }
}
