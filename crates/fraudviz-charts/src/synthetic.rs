//! Seeded synthetic samples standing in for real transaction data.
//!
//! Every generator builds its own RNG from the seed, so the same seed always
//! yields the same arrays within a build.

use fraudviz_common::{FraudVizError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Beta, Distribution, Exp, Normal};
use tracing::debug;

/// Mean of the exponential non-fraud amount distribution, in dollars.
pub const NON_FRAUD_AMOUNT_SCALE: f64 = 100.0;
/// Mean of the normal fraud amount distribution before folding.
pub const FRAUD_AMOUNT_MEAN: f64 = 5000.0;
/// Standard deviation of the fraud amount distribution before folding.
pub const FRAUD_AMOUNT_STD_DEV: f64 = 2000.0;
/// Beta shape parameters skewed toward low risk.
pub const LEGITIMATE_RISK_SHAPE: (f64, f64) = (2.0, 10.0);
/// Beta shape parameters skewed toward high risk.
pub const FRAUDULENT_RISK_SHAPE: (f64, f64) = (10.0, 2.0);
/// Risk scores are reported on a 0-100 scale.
pub const RISK_SCORE_SCALE: f64 = 100.0;

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Transaction amounts per class.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountSamples {
    /// Exponentially distributed legitimate amounts.
    pub non_fraud: Vec<f64>,
    /// Folded normal fraud amounts.
    pub fraud: Vec<f64>,
}

/// Draws `n` non-fraud then `n` fraud amounts from one RNG seeded with `seed`.
pub fn amount_samples(seed: u64, n: usize) -> Result<AmountSamples> {
    let exp = Exp::new(1.0 / NON_FRAUD_AMOUNT_SCALE)
        .map_err(|e| FraudVizError::data_with_source("invalid exponential rate", e))?;
    let normal = Normal::new(FRAUD_AMOUNT_MEAN, FRAUD_AMOUNT_STD_DEV)
        .map_err(|e| FraudVizError::data_with_source("invalid normal parameters", e))?;

    let mut rng = seeded_rng(seed);
    let non_fraud: Vec<f64> = exp.sample_iter(&mut rng).take(n).collect();
    let fraud: Vec<f64> = normal
        .sample_iter(&mut rng)
        .take(n)
        .map(f64::abs)
        .collect();

    debug!(seed, n, "generated amount samples");
    Ok(AmountSamples { non_fraud, fraud })
}

/// Model risk scores per true label.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskScoreSamples {
    /// Scores for legitimate transactions.
    pub legitimate: Vec<f64>,
    /// Scores for fraudulent transactions.
    pub fraudulent: Vec<f64>,
}

/// Draws `n` legitimate then `n` fraudulent scores from one RNG seeded with
/// `seed`, scaled to 0-100.
pub fn risk_score_samples(seed: u64, n: usize) -> Result<RiskScoreSamples> {
    let low = beta(LEGITIMATE_RISK_SHAPE)?;
    let high = beta(FRAUDULENT_RISK_SHAPE)?;

    let mut rng = seeded_rng(seed);
    let legitimate: Vec<f64> = low
        .sample_iter(&mut rng)
        .take(n)
        .map(|x| x * RISK_SCORE_SCALE)
        .collect();
    let fraudulent: Vec<f64> = high
        .sample_iter(&mut rng)
        .take(n)
        .map(|x| x * RISK_SCORE_SCALE)
        .collect();

    debug!(seed, n, "generated risk score samples");
    Ok(RiskScoreSamples {
        legitimate,
        fraudulent,
    })
}

fn beta((a, b): (f64, f64)) -> Result<Beta<f64>> {
    Beta::new(a, b)
        .map_err(|e| FraudVizError::data_with_source(format!("invalid beta shape ({a}, {b})"), e))
}
