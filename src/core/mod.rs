pub mod flow;
pub mod nutrition;
pub mod recipes;
pub mod weather;

pub use crate::domain::model::{Category, NutritionReport, Recipe, RecipeSearchHit, WeatherReading};
pub use crate::domain::ports::{HttpTransport, Prompter, RecipePicker};
pub use crate::utils::error::Result;
