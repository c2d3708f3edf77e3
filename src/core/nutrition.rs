use crate::config::toml_config::NutritionApiConfig;
use crate::domain::model::NutritionReport;
use crate::domain::ports::{BasicAuth, Console, HttpTransport};
use crate::utils::error::TransportError;

pub struct NutritionClient<T: HttpTransport> {
    transport: T,
    endpoint: String,
    auth: BasicAuth,
}

impl<T: HttpTransport> NutritionClient<T> {
    pub fn new(transport: T, config: NutritionApiConfig) -> Self {
        Self {
            transport,
            endpoint: config.endpoint,
            auth: BasicAuth {
                username: config.app_id,
                password: config.app_key,
            },
        }
    }

    /// Nutrition analysis for the ingredient lines, passed through as returned.
    ///
    /// Any response whose body is JSON is returned unchanged, error statuses
    /// included. Only a missing response, or a failed response without a JSON
    /// body, yields [`NutritionReport::empty`] and a notice on `console`.
    pub async fn get_nutrition(
        &self,
        ingredient_lines: &[String],
        console: &dyn Console,
    ) -> NutritionReport {
        match self.fetch(ingredient_lines).await {
            Ok(report) => report,
            Err(e) => {
                tracing::debug!("Nutrition lookup failed: {}", e);
                console.say(&format!("Error fetching nutrition data: {}", e));
                NutritionReport::empty()
            }
        }
    }

    async fn fetch(&self, ingredient_lines: &[String]) -> Result<NutritionReport, TransportError> {
        let payload = serde_json::json!({ "ingr": ingredient_lines });
        let response = self
            .transport
            .post_json(&self.endpoint, &payload, Some(&self.auth))
            .await?;

        match response.json::<serde_json::Value>() {
            Ok(body) => {
                if !response.is_success() {
                    tracing::debug!(
                        "Nutrition API returned status {} with a JSON body",
                        response.status
                    );
                }
                Ok(NutritionReport(body))
            }
            Err(decode) if response.is_success() => Err(decode),
            Err(_) => Err(TransportError::Status {
                status: response.status,
                body: response.body,
            }),
        }
    }
}
