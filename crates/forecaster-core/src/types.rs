use serde::{Deserialize, Deserializer, Serialize};

/// Status string reported by a running service.
pub const HEALTHY: &str = "healthy";

/// Message reported alongside [`HEALTHY`].
pub const HEALTH_MESSAGE: &str = "Sales Forecaster API is running";

/// Request body for a revenue prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Advertising expenditure. Zero and negative values are scaled like any other.
    /// Accepts a JSON number or a string holding one.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub ad_spend: f64,
}

/// A number as sent on the wire: either a JSON number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(f64),
    Text(String),
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Lenient>::deserialize(deserializer)?;
    match value {
        Some(Lenient::Number(n)) => Ok(n),
        Some(Lenient::Text(text)) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("invalid number: {text:?}"))
        }),
        None => Err(serde::de::Error::custom("invalid type: null, expected a number")),
    }
}

/// A generated revenue prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_revenue: f64,
    /// Uniform draw in `[0.75, 0.95]`. Not derived from the prediction.
    pub confidence_score: f64,
}

/// Fixed payload returned by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: HEALTHY.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}
