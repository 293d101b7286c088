use super::objective::SoftmaxCrossEntropy;
use super::options::TrainingOptions;
use super::trainer::Trainer;
use crate::error::{Error, Result};
use crate::{Matrix, metrics};
use ndarray::Array1;

/// Multinomial logistic regression fitted by mini-batch gradient descent on
/// the cross-entropy.
///
/// Labels are one-hot rows, one column per class. A single 0/1 column is
/// the binary shortcut: the model then outputs the probability of class 1
/// and classifies with the configured decision boundary.
pub type LogisticRegression = Trainer<SoftmaxCrossEntropy>;

impl LogisticRegression {
    pub fn new(options: TrainingOptions) -> Self {
        Trainer::with_objective(SoftmaxCrossEntropy, options)
    }

    /// Number of label columns seen at `fit`.
    pub fn n_classes(&self) -> Option<usize> {
        self.n_outputs()
    }

    pub fn predict_proba(&self, x: &Matrix) -> Result<Matrix> {
        self.forward(x)
    }

    /// Predicted class index for every row.
    pub fn predict(&self, x: &Matrix) -> Result<Array1<usize>> {
        let probabilities = self.predict_proba(x)?;
        Ok(self.classify(&probabilities))
    }

    /// Fraction of rows whose predicted class matches the label. NaN for an
    /// empty test set.
    pub fn evaluate(&self, x: &Matrix, y: &Matrix) -> Result<f64> {
        let n_classes = self.n_classes().ok_or(Error::NotFitted)?;
        if y.ncols() != n_classes {
            return Err(Error::columns("evaluate labels", n_classes, y.ncols()));
        }
        if x.nrows() != y.nrows() {
            return Err(Error::rows("evaluate", x.nrows(), y.nrows()));
        }

        let predictions = self.predict(x)?;
        let actual = label_classes(y);
        metrics::accuracy(&actual, &predictions)
    }

    fn classify(&self, probabilities: &Matrix) -> Array1<usize> {
        if probabilities.ncols() == 1 {
            let boundary = self.options().get_decision_boundary();
            probabilities.column(0).mapv(|p| usize::from(p >= boundary))
        } else {
            metrics::argmax_rows(probabilities)
        }
    }
}

fn label_classes(labels: &Matrix) -> Array1<usize> {
    if labels.ncols() == 1 {
        labels.column(0).mapv(|y| usize::from(y >= 0.5))
    } else {
        metrics::argmax_rows(labels)
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(TrainingOptions::default())
    }
}
