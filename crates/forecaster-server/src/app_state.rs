use std::sync::Arc;

use forecaster_core::model::{NoisyLinearModel, RevenueModel};

/// Shared application state with injected dependencies.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn RevenueModel>,
}

impl AppState {
    /// State backed by the noisy linear model, seeded when `seed` is given.
    #[must_use]
    pub fn with_seed(seed: Option<u64>) -> Self {
        let model: Arc<dyn RevenueModel> = match seed {
            Some(seed) => Arc::new(NoisyLinearModel::seeded(seed)),
            None => Arc::new(NoisyLinearModel::thread_rng()),
        };
        Self { model }
    }
}
