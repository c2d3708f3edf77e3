use crate::adapters::storage::RecipeFilePersister;
use crate::config::AppConfig;
use crate::core::nutrition::NutritionClient;
use crate::core::recipes::RecipeClient;
use crate::core::weather::WeatherClient;
use crate::domain::model::{Category, Recipe, RecipeSearchHit, WeatherReading};
use crate::domain::ports::{HttpTransport, Prompter, RecipePicker};
use crate::domain::sanitizer::sanitize;
use crate::utils::error::{Result, SearchBarError};
use std::path::PathBuf;

pub const WELCOME: &str = "Hello! Welcome to The Search Bar. Let's start.";
pub const ASK_CITY: &str = "Enter your city to check the weather: ";
pub const ASK_INTEREST: &str = "Are you interested in this recipe? (yes/no): ";
pub const ASK_INGREDIENTS: &str =
    "Enter ingredients you have (separate by comma, e.g., tomatoes, cheese): ";
pub const ASK_SELECTION: &str = "\nChoose the recipe number for more details: ";
pub const ASK_NUTRITION: &str =
    "Would you like to see the nutrition data for this recipe? (yes/no): ";
pub const ASK_SAVE: &str = "Would you like to save the ingredients to a file? (yes/no): ";

/// Steps of the recommendation conversation. Each state carries the data
/// its step needs; transitions only move forward.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    Welcome,
    WeatherLookup,
    /// `None` means the weather lookup failed and the dessert fallback applies.
    CategoryDecision(Option<WeatherReading>),
    SuggestionOffered(Recipe),
    ManualIngredientPath,
    SelectionPrompt(Vec<RecipeSearchHit>),
    RecipeDetail(Recipe),
    NutritionPrompt(Recipe),
    SavePrompt(Recipe),
    End(FlowOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    Completed { saved_to: Option<PathBuf> },
    NoRecipesFound,
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Parses a 1-based menu choice into an index into `count` entries.
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(choice) if choice >= 1 && choice <= count => Ok(choice - 1),
        _ => Err(SearchBarError::InvalidSelection {
            input: input.trim().to_string(),
            max: count,
        }),
    }
}

pub struct RecommendationFlow<T: HttpTransport, P: Prompter> {
    weather: WeatherClient<T>,
    recipes: RecipeClient<T>,
    nutrition: NutritionClient<T>,
    persister: RecipeFilePersister,
    file_name: String,
    prompter: P,
}

impl<T: HttpTransport + Clone, P: Prompter> RecommendationFlow<T, P> {
    pub fn new(
        transport: T,
        config: &AppConfig,
        picker: Box<dyn RecipePicker>,
        prompter: P,
    ) -> Self {
        Self {
            weather: WeatherClient::new(transport.clone(), config.weather.clone()),
            recipes: RecipeClient::new(transport.clone(), config.recipes.clone(), picker),
            nutrition: NutritionClient::new(transport, config.nutrition.clone()),
            persister: RecipeFilePersister::new(&config.output.directory),
            file_name: config.output.file_name.clone(),
            prompter,
        }
    }
}

impl<T: HttpTransport, P: Prompter> RecommendationFlow<T, P> {
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Drives the conversation from [`FlowState::Welcome`] to its end.
    pub async fn run(&self) -> Result<FlowOutcome> {
        let mut state = FlowState::Welcome;
        loop {
            state = match state {
                FlowState::End(outcome) => {
                    tracing::debug!("Flow finished: {:?}", outcome);
                    return Ok(outcome);
                }
                other => self.step(other).await?,
            };
        }
    }

    /// Performs one transition. `End` is returned unchanged.
    pub async fn step(&self, state: FlowState) -> Result<FlowState> {
        tracing::debug!("Entering {}", state_name(&state));
        let next = match state {
            FlowState::Welcome => {
                self.prompter.say(WELCOME);
                FlowState::WeatherLookup
            }
            FlowState::WeatherLookup => {
                let city = self.prompter.ask(ASK_CITY).await?;
                let city = city.trim();
                match self.weather.get_current_weather(city, &self.prompter).await {
                    Some(reading) => {
                        // {:?} 讓整數溫度保留 ".0"
                        self.prompter.say(&format!(
                            "Current weather in {}: {}, {:?}°C",
                            city, reading.description, reading.temperature_celsius
                        ));
                        FlowState::CategoryDecision(Some(reading))
                    }
                    None => {
                        self.prompter.say(
                            "Could not retrieve weather data. Proceeding with default recipe suggestions.",
                        );
                        FlowState::CategoryDecision(None)
                    }
                }
            }
            FlowState::CategoryDecision(reading) => {
                let category = Category::for_weather(reading.as_ref());
                tracing::info!("Suggesting a {} recipe", category);
                match self.recipes.search_by_category(category.as_query()).await {
                    Some(recipe) => FlowState::SuggestionOffered(recipe),
                    None => FlowState::ManualIngredientPath,
                }
            }
            FlowState::SuggestionOffered(recipe) => {
                self.prompter
                    .say(&format!("Suggested Recipe: {}", recipe.label));
                let answer = self.prompter.ask(ASK_INTEREST).await?;
                if is_yes(&answer) {
                    FlowState::RecipeDetail(recipe)
                } else {
                    FlowState::ManualIngredientPath
                }
            }
            FlowState::ManualIngredientPath => {
                let raw = self.prompter.ask(ASK_INGREDIENTS).await?;
                let query = sanitize(&raw);
                tracing::debug!("Sanitized ingredient query: {:?}", query);
                let hits = self
                    .recipes
                    .search_by_ingredients(&query, &self.prompter)
                    .await;
                if hits.is_empty() {
                    self.prompter
                        .say("No recipes found with the given ingredients.");
                    FlowState::End(FlowOutcome::NoRecipesFound)
                } else {
                    FlowState::SelectionPrompt(hits)
                }
            }
            FlowState::SelectionPrompt(mut hits) => {
                for hit in &hits {
                    self.prompter.say(&format!(
                        "{}: Recipe Name: {}",
                        hit.display_number(),
                        hit.recipe.label
                    ));
                }
                let answer = self.prompter.ask(ASK_SELECTION).await?;
                let index = parse_selection(&answer, hits.len())?;
                FlowState::RecipeDetail(hits.swap_remove(index).recipe)
            }
            FlowState::RecipeDetail(recipe) => {
                self.prompter.say(&format!("Recipe: {}", recipe.label));
                self.prompter.say(&format!("URL: {}", recipe.url));
                self.prompter.say("Ingredients:");
                for line in &recipe.ingredient_lines {
                    self.prompter.say(&format!("  - {}", line));
                }
                FlowState::NutritionPrompt(recipe)
            }
            FlowState::NutritionPrompt(recipe) => {
                let answer = self.prompter.ask(ASK_NUTRITION).await?;
                if is_yes(&answer) {
                    let report = self
                        .nutrition
                        .get_nutrition(&recipe.ingredient_lines, &self.prompter)
                        .await;
                    if report.is_empty() {
                        self.prompter.say("Nutrition data not available.");
                    } else {
                        self.prompter.say(&report.to_pretty_string());
                    }
                }
                FlowState::SavePrompt(recipe)
            }
            FlowState::SavePrompt(recipe) => {
                let answer = self.prompter.ask(ASK_SAVE).await?;
                let saved_to = if is_yes(&answer) {
                    let path = self.persister.save(&recipe, &self.file_name)?;
                    tracing::info!("Saved ingredients to {}", path.display());
                    self.prompter.say("Ingredients list saved to file.");
                    Some(path)
                } else {
                    None
                };
                FlowState::End(FlowOutcome::Completed { saved_to })
            }
            FlowState::End(outcome) => FlowState::End(outcome),
        };
        Ok(next)
    }
}

fn state_name(state: &FlowState) -> &'static str {
    match state {
        FlowState::Welcome => "Welcome",
        FlowState::WeatherLookup => "WeatherLookup",
        FlowState::CategoryDecision(_) => "CategoryDecision",
        FlowState::SuggestionOffered(_) => "SuggestionOffered",
        FlowState::ManualIngredientPath => "ManualIngredientPath",
        FlowState::SelectionPrompt(_) => "SelectionPrompt",
        FlowState::RecipeDetail(_) => "RecipeDetail",
        FlowState::NutritionPrompt(_) => "NutritionPrompt",
        FlowState::SavePrompt(_) => "SavePrompt",
        FlowState::End(_) => "End",
    }
}
