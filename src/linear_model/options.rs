/// Hyperparameters shared by both trainers.
///
/// The builder methods panic on out-of-range values.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingOptions {
    learning_rate: f64,
    iterations: usize,
    batch_size: Option<usize>,
    decision_boundary: f64,
    min_learning_rate: Option<f64>,
    max_learning_rate: Option<f64>,
}

impl TrainingOptions {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.1,
            iterations: 1000,
            batch_size: None,
            decision_boundary: 0.5,
            min_learning_rate: None,
            max_learning_rate: None,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        if !(learning_rate > 0.0 && learning_rate.is_finite()) {
            panic!("learning_rate must be positive and finite, got {}", learning_rate);
        }
        self.learning_rate = learning_rate;
        self
    }

    /// Number of epochs run by `train()`.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Rows per gradient step. Without it every epoch is a single full batch.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        if batch_size == 0 {
            panic!("batch_size must be > 0");
        }
        self.batch_size = Some(batch_size);
        self
    }

    /// Probability threshold for single-column (binary) logistic models.
    pub fn decision_boundary(mut self, decision_boundary: f64) -> Self {
        if !(0.0..=1.0).contains(&decision_boundary) {
            panic!("decision_boundary must be between 0 and 1, got {}", decision_boundary);
        }
        self.decision_boundary = decision_boundary;
        self
    }

    pub fn min_learning_rate(mut self, min: f64) -> Self {
        if !(min > 0.0) {
            panic!("min_learning_rate must be positive, got {}", min);
        }
        if let Some(max) = self.max_learning_rate {
            if min > max {
                panic!("min_learning_rate {} exceeds max_learning_rate {}", min, max);
            }
        }
        self.min_learning_rate = Some(min);
        self
    }

    pub fn max_learning_rate(mut self, max: f64) -> Self {
        if !(max > 0.0) {
            panic!("max_learning_rate must be positive, got {}", max);
        }
        if let Some(min) = self.min_learning_rate {
            if min > max {
                panic!("min_learning_rate {} exceeds max_learning_rate {}", min, max);
            }
        }
        self.max_learning_rate = Some(max);
        self
    }

    pub fn get_learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn get_iterations(&self) -> usize {
        self.iterations
    }

    pub fn get_batch_size(&self) -> Option<usize> {
        self.batch_size
    }

    pub fn get_decision_boundary(&self) -> f64 {
        self.decision_boundary
    }

    pub fn learning_rate_bounds(&self) -> (Option<f64>, Option<f64>) {
        (self.min_learning_rate, self.max_learning_rate)
    }
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self::new()
    }
}
