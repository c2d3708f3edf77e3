use crate::config::toml_config::RecipeApiConfig;
use crate::domain::model::{Recipe, RecipeSearchHit};
use crate::domain::ports::{Console, HttpTransport, RecipePicker};
use crate::utils::error::TransportError;
use serde::Deserialize;

/// Upper bound on candidates fetched for a category suggestion.
pub const CATEGORY_RESULT_LIMIT: &str = "20";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    recipe: Recipe,
}

pub struct RecipeClient<T: HttpTransport> {
    transport: T,
    config: RecipeApiConfig,
    picker: Box<dyn RecipePicker>,
}

impl<T: HttpTransport> RecipeClient<T> {
    pub fn new(transport: T, config: RecipeApiConfig, picker: Box<dyn RecipePicker>) -> Self {
        Self {
            transport,
            config,
            picker,
        }
    }

    /// One recipe chosen uniformly from the first 20 hits for `query`.
    pub async fn search_by_category(&self, query: &str) -> Option<Recipe> {
        let mut hits = match self.search(query, Some(CATEGORY_RESULT_LIMIT)).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::debug!("Category search for {} failed: {}", query, e);
                return None;
            }
        };

        if hits.is_empty() {
            tracing::debug!("No recipes found for category {}", query);
            return None;
        }

        let index = self.picker.pick(hits.len());
        tracing::debug!("Picked recipe {} of {} for {}", index + 1, hits.len(), query);
        Some(hits.swap_remove(index).recipe)
    }

    /// Every hit for the ingredient query, in the order the API returned them.
    /// A failed request yields no hits and a notice on `console`.
    pub async fn search_by_ingredients(
        &self,
        query: &str,
        console: &dyn Console,
    ) -> Vec<RecipeSearchHit> {
        match self.search(query, None).await {
            Ok(hits) => hits
                .into_iter()
                .enumerate()
                .map(|(position, hit)| RecipeSearchHit {
                    position,
                    recipe: hit.recipe,
                })
                .collect(),
            Err(e) => {
                tracing::debug!("Ingredient search for {:?} failed: {}", query, e);
                console.say("There was an error with the recipe request.");
                Vec::new()
            }
        }
    }

    async fn search(
        &self,
        query: &str,
        limit: Option<&str>,
    ) -> Result<Vec<SearchHit>, TransportError> {
        let mut params = vec![
            ("q", query),
            ("app_id", self.config.app_id.as_str()),
            ("app_key", self.config.app_key.as_str()),
        ];
        if let Some(limit) = limit {
            params.push(("to", limit));
        }

        let response = self
            .transport
            .get(&self.config.endpoint, &params)
            .await?
            .error_for_status()?;

        let payload: SearchResponse = response.json()?;
        Ok(payload.hits)
    }
}
