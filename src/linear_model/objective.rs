use crate::error::{Error, Result};
use crate::metrics;
use crate::Matrix;
use ndarray::Axis;

/// Link function and loss plugged into the generic trainer.
///
/// Every objective here pairs its link with the loss whose gradient with
/// respect to the weights is `Xᵀ(link(XW) - Y) / rows`, so the trainer can
/// share a single update rule.
pub trait Objective {
    /// Maps raw scores `XW` to predictions.
    fn link(&self, scores: Matrix) -> Matrix;

    /// Loss of `predictions` against `labels` over the whole matrix.
    fn loss(&self, predictions: &Matrix, labels: &Matrix) -> Result<f64>;

    /// Rejects label matrices this objective cannot train on.
    fn validate_labels(&self, labels: &Matrix) -> Result<()>;
}

/// Identity link with mean squared error.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredError;

impl Objective for SquaredError {
    fn link(&self, scores: Matrix) -> Matrix {
        scores
    }

    fn loss(&self, predictions: &Matrix, labels: &Matrix) -> Result<f64> {
        metrics::mean_squared_error(labels, predictions)
    }

    fn validate_labels(&self, labels: &Matrix) -> Result<()> {
        if labels.ncols() != 1 {
            return Err(Error::columns("regression labels", 1, labels.ncols()));
        }
        if labels.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidLabels("regression targets must be finite".to_string()));
        }
        Ok(())
    }
}

/// Row-wise softmax with cross-entropy.
///
/// A single label column is the two-class case and uses the logistic
/// sigmoid, since a softmax over one column is constantly 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftmaxCrossEntropy;

impl Objective for SoftmaxCrossEntropy {
    fn link(&self, scores: Matrix) -> Matrix {
        if scores.ncols() == 1 {
            scores.mapv_into(sigmoid)
        } else {
            softmax(scores)
        }
    }

    fn loss(&self, predictions: &Matrix, labels: &Matrix) -> Result<f64> {
        metrics::cross_entropy(labels, predictions)
    }

    fn validate_labels(&self, labels: &Matrix) -> Result<()> {
        if labels.ncols() == 0 {
            return Err(Error::InvalidLabels("labels need at least one column".to_string()));
        }
        if labels.iter().any(|&v| v != 0.0 && v != 1.0) {
            return Err(Error::InvalidLabels(
                "labels must be 0 or 1 (one-hot encoded for several classes)".to_string(),
            ));
        }
        if labels.ncols() > 1 {
            if let Some(row) = labels.axis_iter(Axis(0)).position(|row| row.sum() != 1.0) {
                return Err(Error::InvalidLabels(format!(
                    "row {} is not one-hot encoded",
                    row
                )));
            }
        }
        Ok(())
    }
}

pub fn sigmoid(z: f64) -> f64 {
    if z > 500.0 {
        1.0
    } else if z < -500.0 {
        0.0
    } else {
        1.0 / (1.0 + (-z).exp())
    }
}

/// Row-wise softmax; each output row sums to 1.
pub fn softmax(mut scores: Matrix) -> Matrix {
    for mut row in scores.axis_iter_mut(Axis(0)) {
        let max = row.fold(f64::NEG_INFINITY, |acc, &z| acc.max(z));
        row.mapv_inplace(|z| (z - max).exp());
        let total = row.sum();
        row /= total;
    }
    scores
}
