use crate::adapters::storage::DEFAULT_FILE_NAME;
use crate::utils::error::{Result, SearchBarError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_RECIPE_ENDPOINT: &str = "https://api.edamam.com/search";
pub const DEFAULT_NUTRITION_ENDPOINT: &str = "https://api.edamam.com/api/nutrition-details";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub weather: WeatherApiConfig,
    #[serde(default)]
    pub recipes: RecipeApiConfig,
    #[serde(default)]
    pub nutrition: NutritionApiConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeApiConfig {
    #[serde(default = "default_recipe_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionApiConfig {
    #[serde(default = "default_nutrition_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_weather_endpoint() -> String {
    DEFAULT_WEATHER_ENDPOINT.to_string()
}

fn default_recipe_endpoint() -> String {
    DEFAULT_RECIPE_ENDPOINT.to_string()
}

fn default_nutrition_endpoint() -> String {
    DEFAULT_NUTRITION_ENDPOINT.to_string()
}

fn default_output_directory() -> String {
    ".".to_string()
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_weather_endpoint(),
            api_key: String::new(),
        }
    }
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_recipe_endpoint(),
            app_id: String::new(),
            app_key: String::new(),
        }
    }
}

impl Default for NutritionApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_nutrition_endpoint(),
            app_id: String::new(),
            app_key: String::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            file_name: default_file_name(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SearchBarError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SearchBarError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EDAMAM_APP_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SearchBarError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("weather.endpoint", &self.weather.endpoint)?;
        validation::validate_credential("weather.api_key", &self.weather.api_key)?;

        validation::validate_url("recipes.endpoint", &self.recipes.endpoint)?;
        validation::validate_credential("recipes.app_id", &self.recipes.app_id)?;
        validation::validate_credential("recipes.app_key", &self.recipes.app_key)?;

        validation::validate_url("nutrition.endpoint", &self.nutrition.endpoint)?;
        validation::validate_credential("nutrition.app_id", &self.nutrition.app_id)?;
        validation::validate_credential("nutrition.app_key", &self.nutrition.app_key)?;

        validation::validate_file_name("output.file_name", &self.output.file_name)?;
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
