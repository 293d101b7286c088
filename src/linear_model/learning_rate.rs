use super::history::LossHistory;
use super::options::TrainingOptions;
use tracing::debug;

const DECAY: f64 = 0.5;
const GROWTH: f64 = 1.05;

/// Rescales the learning rate once per epoch from the loss trend.
///
/// A worse epoch halves the rate, an equal or better one grows it by 5%.
/// The optional bounds clamp the result without changing those factors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AdaptiveLearningRate {
    min: Option<f64>,
    max: Option<f64>,
}

impl AdaptiveLearningRate {
    pub fn new() -> Self {
        Self { min: None, max: None }
    }

    pub fn with_bounds(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn from_options(options: &TrainingOptions) -> Self {
        let (min, max) = options.learning_rate_bounds();
        Self::with_bounds(min, max)
    }

    pub fn adjust(&self, learning_rate: f64, history: &LossHistory) -> f64 {
        let (Some(latest), Some(previous)) = (history.latest(), history.previous()) else {
            return learning_rate;
        };

        let next = if latest > previous {
            learning_rate * DECAY
        } else {
            learning_rate * GROWTH
        };

        self.clamp(next)
    }

    /// Keeps `learning_rate` inside the configured bounds.
    pub fn clamp(&self, learning_rate: f64) -> f64 {
        let mut clamped = learning_rate;
        if let Some(min) = self.min {
            clamped = clamped.max(min);
        }
        if let Some(max) = self.max {
            clamped = clamped.min(max);
        }
        if clamped != learning_rate {
            debug!(requested = learning_rate, clamped, "learning rate clamped");
        }
        clamped
    }
}
