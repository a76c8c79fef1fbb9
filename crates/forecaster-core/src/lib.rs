pub mod error;
pub mod model;
pub mod types;

pub use error::Error;
pub use model::{NoisyLinearModel, RevenueModel, Sampler};
pub use types::{HealthStatus, PredictionRequest, PredictionResponse};
