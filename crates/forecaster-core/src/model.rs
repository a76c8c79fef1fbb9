//! Revenue model: a linear scaling of ad spend perturbed by uniform noise.
//!
//! The confidence score is an independent uniform draw and carries no
//! statistical meaning.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;
use crate::types::{PredictionRequest, PredictionResponse};

/// Source of uniform random draws.
pub trait Sampler: Send + Sync {
    /// Draw uniformly from the closed interval `[low, high]`. Requires `low <= high`.
    fn uniform(&self, low: f64, high: f64) -> f64;
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSampler;

impl Sampler for ThreadRngSampler {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        rand::rng().random_range(low..=high)
    }
}

/// Deterministic sampler seeded from a `u64`.
#[derive(Debug)]
pub struct SeededSampler {
    rng: Mutex<StdRng>,
}

impl SeededSampler {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Sampler for SeededSampler {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        // A poisoned lock still holds a usable generator.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        rng.random_range(low..=high)
    }
}

/// Produces a prediction for a request.
pub trait RevenueModel: Send + Sync {
    /// Compute a prediction. Not idempotent for random-backed models.
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, Error>;
}

/// Constants of the noisy linear model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    pub revenue_multiplier: f64,
    /// Half-width of the noise band as a fraction of base revenue.
    pub noise_fraction: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            revenue_multiplier: 2.5,
            noise_fraction: 0.1,
            confidence_low: 0.75,
            confidence_high: 0.95,
        }
    }
}

/// `ad_spend * 2.5` plus up to ±10% noise, with a decorative confidence score.
#[derive(Debug)]
pub struct NoisyLinearModel<S> {
    params: ModelParams,
    sampler: S,
}

impl NoisyLinearModel<ThreadRngSampler> {
    #[must_use]
    pub fn thread_rng() -> Self {
        Self::new(ThreadRngSampler)
    }
}

impl NoisyLinearModel<SeededSampler> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededSampler::new(seed))
    }
}

impl<S: Sampler> NoisyLinearModel<S> {
    pub fn new(sampler: S) -> Self {
        Self {
            params: ModelParams::default(),
            sampler,
        }
    }

    pub fn params(&self) -> ModelParams {
        self.params
    }

    /// Noiseless revenue for a given spend.
    pub fn base_revenue(&self, ad_spend: f64) -> f64 {
        ad_spend * self.params.revenue_multiplier
    }
}

impl<S: Sampler> RevenueModel for NoisyLinearModel<S> {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, Error> {
        if !request.ad_spend.is_finite() {
            return Err(Error::InvalidInput(format!(
                "ad_spend must be finite, got {}",
                request.ad_spend
            )));
        }

        let base = self.base_revenue(request.ad_spend);
        if !base.is_finite() {
            return Err(Error::InvalidInput(format!(
                "ad_spend {} is too large to forecast",
                request.ad_spend
            )));
        }

        let band = self.params.noise_fraction;
        let noise = self.sampler.uniform(-band, band);
        let predicted = base + base * noise;
        if !predicted.is_finite() {
            return Err(Error::InvalidInput(format!(
                "ad_spend {} is too large to forecast",
                request.ad_spend
            )));
        }

        let confidence = self
            .sampler
            .uniform(self.params.confidence_low, self.params.confidence_high);

        Ok(PredictionResponse {
            predicted_revenue: round_to(predicted, 2),
            confidence_score: round_to(confidence, 2),
        })
    }
}

/// Round to `places` decimal digits using the exact decimal expansion of `value`.
///
/// Ties in the expansion go to the even digit, so `2.675` (stored just below the
/// tie) becomes `2.67` and `0.125` becomes `0.12`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always returns one end of the requested interval.
    struct EdgeSampler {
        high: bool,
    }

    impl Sampler for EdgeSampler {
        fn uniform(&self, low: f64, high: f64) -> f64 {
            if self.high {
                high
            } else {
                low
            }
        }
    }

    fn request(ad_spend: f64) -> PredictionRequest {
        PredictionRequest { ad_spend }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn default_params() {
        let params = NoisyLinearModel::thread_rng().params();
        assert_eq!(params, ModelParams::default());
        assert_close(params.revenue_multiplier, 2.5);
        assert_close(params.noise_fraction, 0.1);
    }

    #[test]
    fn low_edge_gives_ninety_percent_of_base() {
        let model = NoisyLinearModel::new(EdgeSampler { high: false });
        let out = model.predict(&request(100.0)).unwrap();
        assert_close(out.predicted_revenue, 225.0);
        assert_close(out.confidence_score, 0.75);
    }

    #[test]
    fn high_edge_gives_hundred_ten_percent_of_base() {
        let model = NoisyLinearModel::new(EdgeSampler { high: true });
        let out = model.predict(&request(100.0)).unwrap();
        assert_close(out.predicted_revenue, 275.0);
        assert_close(out.confidence_score, 0.95);
    }

    #[test]
    fn random_predictions_stay_in_band() {
        let model = NoisyLinearModel::thread_rng();
        for spend in [0.0, 0.01, 1.0, 100.0, 1234.56, 1e9, -50.0] {
            let base = spend * 2.5;
            let (lo, hi) = if base >= 0.0 {
                (base * 0.9, base * 1.1)
            } else {
                (base * 1.1, base * 0.9)
            };
            for _ in 0..200 {
                let out = model.predict(&request(spend)).unwrap();
                assert!(
                    out.predicted_revenue >= lo - 0.005 && out.predicted_revenue <= hi + 0.005,
                    "spend {spend}: {} outside [{lo}, {hi}]",
                    out.predicted_revenue
                );
                assert!((0.75..=0.95).contains(&out.confidence_score));
            }
        }
    }

    #[test]
    fn zero_spend_predicts_zero() {
        let model = NoisyLinearModel::thread_rng();
        let out = model.predict(&request(0.0)).unwrap();
        assert_close(out.predicted_revenue, 0.0);
    }

    #[test]
    fn outputs_are_rounded_to_cents() {
        let model = NoisyLinearModel::seeded(7);
        for _ in 0..100 {
            let out = model.predict(&request(33.333)).unwrap();
            assert_close(out.predicted_revenue, round_to(out.predicted_revenue, 2));
            assert_close(out.confidence_score, round_to(out.confidence_score, 2));
        }
    }

    #[test]
    fn same_seed_reproduces_sequence() {
        let a = NoisyLinearModel::seeded(42);
        let b = NoisyLinearModel::seeded(42);
        for spend in [10.0, 250.0, 999.99] {
            assert_eq!(
                a.predict(&request(spend)).unwrap(),
                b.predict(&request(spend)).unwrap()
            );
        }
    }

    #[test]
    fn repeated_calls_vary() {
        let model = NoisyLinearModel::seeded(1);
        let outputs: Vec<_> = (0..20)
            .map(|_| model.predict(&request(1000.0)).unwrap())
            .collect();
        assert!(outputs.iter().any(|o| *o != outputs[0]));
    }

    #[test]
    fn overflowing_spend_is_rejected() {
        let model = NoisyLinearModel::thread_rng();
        let err = model.predict(&request(f64::MAX)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn non_finite_spend_is_rejected() {
        let model = NoisyLinearModel::thread_rng();
        assert!(model.predict(&request(f64::NAN)).is_err());
        assert!(model.predict(&request(f64::INFINITY)).is_err());
    }

    #[test]
    fn round_to_two_places() {
        assert_close(round_to(1.234, 2), 1.23);
        assert_close(round_to(1.236, 2), 1.24);
        assert_close(round_to(-1.236, 2), -1.24);
        assert_close(round_to(1e307, 2), 1e307);
    }

    #[test]
    fn round_to_uses_exact_decimal_expansion() {
        let cases = [
            (2.675, 2.67),
            (1.115, 1.11),
            (0.125, 0.12),
            (0.375, 0.38),
            (0.995, 0.99),
            (8.345, 8.35),
            (0.285, 0.28),
        ];
        for (input, expected) in cases {
            assert_eq!(round_to(input, 2), expected, "round_to({input}, 2)");
        }
    }
}
