pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{RandomPicker, RecipeFilePersister, ReqwestTransport, StdinPrompter};
pub use config::AppConfig;
pub use crate::core::flow::{FlowOutcome, FlowState, RecommendationFlow};
pub use crate::core::{nutrition::NutritionClient, recipes::RecipeClient, weather::WeatherClient};
pub use domain::sanitizer::sanitize;
pub use utils::error::{Result, SearchBarError, TransportError};
