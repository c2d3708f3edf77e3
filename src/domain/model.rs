use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub description: String,
    pub temperature_celsius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub label: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "ingredientLines")]
    pub ingredient_lines: Vec<String>,
}

/// A recipe together with its position in a search result list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSearchHit {
    pub position: usize,
    pub recipe: Recipe,
}

impl RecipeSearchHit {
    /// 1-based number shown to the user.
    pub fn display_number(&self) -> usize {
        self.position + 1
    }
}

/// Nutrition facts exactly as returned by the nutrition API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutritionReport(pub serde_json::Value);

impl NutritionReport {
    pub fn empty() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            serde_json::Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Soup,
    Salad,
    Bake,
    Dessert,
}

impl Category {
    pub const COLD_BELOW_CELSIUS: f64 = 10.0;
    pub const HOT_ABOVE_CELSIUS: f64 = 25.0;

    pub fn for_temperature(temperature_celsius: f64) -> Self {
        if temperature_celsius < Self::COLD_BELOW_CELSIUS {
            Category::Soup
        } else if temperature_celsius > Self::HOT_ABOVE_CELSIUS {
            Category::Salad
        } else {
            Category::Bake
        }
    }

    /// 沒有天氣資料時固定退回甜點
    pub fn for_weather(reading: Option<&WeatherReading>) -> Self {
        match reading {
            Some(reading) => Self::for_temperature(reading.temperature_celsius),
            None => Category::Dessert,
        }
    }

    pub fn as_query(&self) -> &'static str {
        match self {
            Category::Soup => "soup",
            Category::Salad => "salad",
            Category::Bake => "bake",
            Category::Dessert => "dessert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}
