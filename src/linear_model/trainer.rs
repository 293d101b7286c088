use super::history::LossHistory;
use super::learning_rate::AdaptiveLearningRate;
use super::objective::Objective;
use super::options::TrainingOptions;
use crate::error::{Error, Result};
use crate::preprocessing::FeaturePreprocessor;
use crate::{Matrix, Vector};
use ndarray::{ArrayView2, s};
use tracing::{debug, info};

/// Lifecycle of a trainer. `train()` may be called again from `Trained` and
/// keeps going from the current weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrainingState {
    Unfitted,
    Constructed,
    Training,
    Trained,
}

#[derive(Clone, Debug)]
struct Fitted {
    features: Matrix,
    labels: Matrix,
    weights: Matrix,
    batch_size: usize,
}

/// Mini-batch gradient descent for a linear model `link(XW)`.
///
/// The objective decides the link function and the loss. Features are
/// standardized with moments frozen at `fit`, and a bias column is prepended,
/// so the weights have `n_features + 1` rows and one column per label column.
#[derive(Clone, Debug)]
pub struct Trainer<O> {
    objective: O,
    options: TrainingOptions,
    controller: AdaptiveLearningRate,
    learning_rate: f64,
    preprocessor: FeaturePreprocessor,
    fitted: Option<Fitted>,
    history: LossHistory,
    epochs: usize,
    state: TrainingState,
}

impl<O: Objective> Trainer<O> {
    pub fn with_objective(objective: O, options: TrainingOptions) -> Self {
        let controller = AdaptiveLearningRate::from_options(&options);
        Self {
            objective,
            controller,
            learning_rate: controller.clamp(options.get_learning_rate()),
            options,
            preprocessor: FeaturePreprocessor::new(),
            fitted: None,
            history: LossHistory::new(),
            epochs: 0,
            state: TrainingState::Unfitted,
        }
    }

    /// Standardizes `features`, freezes their moments, stores `labels` and
    /// zero-initializes the weights. Training happens in `train()`.
    pub fn fit(&mut self, features: &Matrix, labels: &Matrix) -> Result<()> {
        if self.fitted.is_some() {
            return Err(Error::AlreadyFitted);
        }
        if features.nrows() != labels.nrows() {
            return Err(Error::rows("fit", features.nrows(), labels.nrows()));
        }
        if features.nrows() == 0 {
            return Err(Error::EmptyInput("features must have at least one sample".to_string()));
        }
        self.objective.validate_labels(labels)?;

        let n_samples = features.nrows();
        let batch_size = self.options.get_batch_size().unwrap_or(n_samples);
        if batch_size > n_samples {
            return Err(Error::InvalidBatchSize { batch_size, n_samples });
        }

        self.preprocessor.fit(features)?;
        let augmented = self.preprocessor.transform(features)?;
        let weights = Matrix::zeros((augmented.ncols(), labels.ncols()));

        debug!(
            n_samples,
            n_features = features.ncols(),
            n_outputs = labels.ncols(),
            batch_size,
            dropped_rows = n_samples % batch_size,
            "fitted training data"
        );

        self.fitted = Some(Fitted {
            features: augmented,
            labels: labels.clone(),
            weights,
            batch_size,
        });
        self.state = TrainingState::Constructed;
        Ok(())
    }

    /// One gradient update on an already standardized and augmented batch.
    pub fn step(
        &mut self,
        batch_features: ArrayView2<f64>,
        batch_labels: ArrayView2<f64>,
    ) -> Result<()> {
        let fitted = self.fitted.as_mut().ok_or(Error::NotFitted)?;

        if batch_features.nrows() != batch_labels.nrows() {
            return Err(Error::rows("step", batch_features.nrows(), batch_labels.nrows()));
        }
        if batch_features.nrows() == 0 {
            return Err(Error::EmptyInput("batch has no rows".to_string()));
        }
        if batch_features.ncols() != fitted.weights.nrows() {
            let expected = fitted.weights.nrows();
            return Err(Error::columns("step features", expected, batch_features.ncols()));
        }
        if batch_labels.ncols() != fitted.weights.ncols() {
            return Err(Error::columns("step labels", fitted.weights.ncols(), batch_labels.ncols()));
        }

        let gradient = gradient(&self.objective, batch_features, batch_labels, &fitted.weights);
        fitted.weights = &fitted.weights - &(gradient * self.learning_rate);
        Ok(())
    }

    /// Runs one epoch over every full batch, records the loss on the whole
    /// training set and adapts the learning rate. Returns the epoch loss.
    pub fn train_epoch(&mut self) -> Result<f64> {
        let fitted = self.fitted.as_mut().ok_or(Error::NotFitted)?;
        self.state = TrainingState::Training;

        let batch_size = fitted.batch_size;
        let n_batches = fitted.features.nrows() / batch_size;
        for batch in 0..n_batches {
            let rows = batch * batch_size..(batch + 1) * batch_size;
            let x = fitted.features.slice(s![rows.clone(), ..]);
            let y = fitted.labels.slice(s![rows, ..]);

            let gradient = gradient(&self.objective, x, y, &fitted.weights);
            fitted.weights = &fitted.weights - &(gradient * self.learning_rate);
        }

        let predictions = self.objective.link(fitted.features.dot(&fitted.weights));
        let loss = self.objective.loss(&predictions, &fitted.labels)?;

        self.history.push(loss);
        self.learning_rate = self.controller.adjust(self.learning_rate, &self.history);
        self.epochs += 1;

        debug!(epoch = self.epochs, loss, learning_rate = self.learning_rate, "epoch complete");
        Ok(loss)
    }

    /// Runs the configured number of epochs.
    pub fn train(&mut self) -> Result<()> {
        if self.fitted.is_none() {
            return Err(Error::NotFitted);
        }

        let iterations = self.options.get_iterations();
        info!(iterations, learning_rate = self.learning_rate, "training started");

        for _ in 0..iterations {
            self.train_epoch()?;
        }

        self.state = TrainingState::Trained;
        info!(
            epochs = self.epochs,
            loss = self.history.latest(),
            learning_rate = self.learning_rate,
            "training finished"
        );
        Ok(())
    }

    /// `link(XW)` for raw features, standardized with the training moments.
    pub fn forward(&self, features: &Matrix) -> Result<Matrix> {
        let fitted = self.fitted.as_ref().ok_or(Error::NotFitted)?;
        let augmented = self.preprocessor.transform(features)?;
        Ok(self.objective.link(augmented.dot(&fitted.weights)))
    }

    /// Loss of the current weights on raw features and labels.
    pub fn loss(&self, features: &Matrix, labels: &Matrix) -> Result<f64> {
        let predictions = self.forward(features)?;
        self.objective.loss(&predictions, labels)
    }

    /// Forgets the data, weights, moments and history, restoring the
    /// configured learning rate.
    pub fn reset(&mut self) {
        self.preprocessor.reset();
        self.fitted = None;
        self.history.clear();
        self.learning_rate = self.controller.clamp(self.options.get_learning_rate());
        self.epochs = 0;
        self.state = TrainingState::Unfitted;
    }

    /// Weights in standardized space, bias in row 0.
    pub fn weights(&self) -> Option<&Matrix> {
        self.fitted.as_ref().map(|f| &f.weights)
    }

    /// Per-feature weights expressed against the raw, unstandardized
    /// features. Zero-variance features get a zero coefficient.
    pub fn coefficients(&self) -> Option<Matrix> {
        let weights = self.weights()?;
        let moments = self.preprocessor.moments()?;

        let std = moments.std();
        let mut coefficients = weights.slice(s![1.., ..]).to_owned();
        for (mut row, &s) in coefficients.rows_mut().into_iter().zip(std.iter()) {
            if s > 0.0 {
                row /= s;
            } else {
                row.fill(0.0);
            }
        }
        Some(coefficients)
    }

    /// Bias expressed against the raw features, one entry per output column.
    pub fn intercept(&self) -> Option<Vector> {
        let weights = self.weights()?;
        let moments = self.preprocessor.moments()?;
        let coefficients = self.coefficients()?;

        Some(&weights.row(0) - &moments.mean.dot(&coefficients))
    }

    pub fn loss_history(&self) -> &LossHistory {
        &self.history
    }

    /// Current step size, as last adjusted by the learning-rate controller.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn state(&self) -> TrainingState {
        self.state
    }

    pub fn options(&self) -> &TrainingOptions {
        &self.options
    }

    pub fn preprocessor(&self) -> &FeaturePreprocessor {
        &self.preprocessor
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Standardized and augmented training features.
    pub fn training_features(&self) -> Option<&Matrix> {
        self.fitted.as_ref().map(|f| &f.features)
    }

    pub fn training_labels(&self) -> Option<&Matrix> {
        self.fitted.as_ref().map(|f| &f.labels)
    }

    pub fn n_outputs(&self) -> Option<usize> {
        self.weights().map(|w| w.ncols())
    }
}

/// `Xᵀ(link(XW) - Y) / rows`.
pub(crate) fn gradient<O: Objective>(
    objective: &O,
    features: ArrayView2<f64>,
    labels: ArrayView2<f64>,
    weights: &Matrix,
) -> Matrix {
    let guesses = objective.link(features.dot(weights));
    let error = guesses - &labels;
    features.t().dot(&error) / features.nrows() as f64
}
