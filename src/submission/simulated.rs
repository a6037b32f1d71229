//! Simulated submission backend
//!
//! There is no real endpoint: the transport waits a fixed delay and then
//! flips a weighted coin. The identifier does not influence the outcome.

use super::traits::SubmissionTransport;
use crate::config::FormConfig;
use crate::state::Outcome;
use async_trait::async_trait;
use std::time::Duration;

/// Placeholder transport with a fixed delay and a random outcome
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    success_probability: f64,
    forced_outcome: Option<Outcome>,
}

impl SimulatedTransport {
    /// Delay before the simulated response (1 second)
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);
    pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.5;

    pub fn new(delay: Duration, success_probability: f64) -> Self {
        Self {
            delay,
            success_probability: success_probability.clamp(0.0, 1.0),
            forced_outcome: None,
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(
            Duration::from_millis(config.submit_delay_ms),
            config.success_probability,
        )
        .with_forced_outcome(config.forced_outcome.map(Outcome::from))
    }

    /// Always resolve to `outcome` instead of rolling
    pub fn with_forced_outcome(mut self, outcome: Option<Outcome>) -> Self {
        self.forced_outcome = outcome;
        self
    }

    fn roll(&self) -> Outcome {
        if let Some(outcome) = self.forced_outcome {
            return outcome;
        }
        if rand::random::<f64>() < self.success_probability {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY, Self::DEFAULT_SUCCESS_PROBABILITY)
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, identifier: &str) -> Outcome {
        tracing::debug!(
            "Simulating submission of a {}-character identifier",
            identifier.chars().count()
        );
        tokio::time::sleep(self.delay).await;
        self.roll()
    }
}
