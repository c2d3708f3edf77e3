use crate::config::toml_config::WeatherApiConfig;
use crate::domain::model::WeatherReading;
use crate::domain::ports::{Console, HttpTransport};
use crate::utils::error::TransportError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    #[serde(default)]
    weather: Vec<WeatherCondition>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

pub struct WeatherClient<T: HttpTransport> {
    transport: T,
    config: WeatherApiConfig,
}

impl<T: HttpTransport> WeatherClient<T> {
    pub fn new(transport: T, config: WeatherApiConfig) -> Self {
        Self { transport, config }
    }

    /// Current conditions for `city` in metric units; `None` when the lookup
    /// fails, after telling the user why on `console`.
    pub async fn get_current_weather(
        &self,
        city: &str,
        console: &dyn Console,
    ) -> Option<WeatherReading> {
        match self.fetch(city).await {
            Ok(reading) => {
                tracing::debug!(
                    "Weather for {}: {}, {}°C",
                    city,
                    reading.description,
                    reading.temperature_celsius
                );
                Some(reading)
            }
            Err(e) => {
                tracing::debug!("Weather lookup for {} failed: {}", city, e);
                console.say(&format!("Error fetching weather data: {}", e));
                None
            }
        }
    }

    async fn fetch(&self, city: &str) -> Result<WeatherReading, TransportError> {
        let response = self
            .transport
            .get(
                &self.config.endpoint,
                &[
                    ("q", city),
                    ("appid", self.config.api_key.as_str()),
                    ("units", "metric"),
                ],
            )
            .await?
            .error_for_status()?;

        let payload: CurrentWeatherResponse = response.json()?;
        if !payload.main.temp.is_finite() {
            return Err(TransportError::Decode("temperature is not a finite number".to_string()));
        }

        Ok(WeatherReading {
            description: payload
                .weather
                .into_iter()
                .next()
                .map(|w| w.description)
                .unwrap_or_default(),
            temperature_celsius: payload.main.temp,
        })
    }
}
