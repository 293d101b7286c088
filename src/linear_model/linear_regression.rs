use super::objective::SquaredError;
use super::options::TrainingOptions;
use super::trainer::Trainer;
use crate::error::Result;
use crate::{Matrix, metrics};

/// Linear regression fitted by mini-batch gradient descent on the mean
/// squared error.
pub type LinearRegression = Trainer<SquaredError>;

impl LinearRegression {
    pub fn new(options: TrainingOptions) -> Self {
        Trainer::with_objective(SquaredError, options)
    }

    /// Predicted targets, one row per sample.
    pub fn predict(&self, x: &Matrix) -> Result<Matrix> {
        self.forward(x)
    }

    /// R² on held-out data. NaN if the test labels have no variance.
    pub fn evaluate(&self, x: &Matrix, y: &Matrix) -> Result<f64> {
        let y_pred = self.predict(x)?;
        metrics::r2_score(y, &y_pred)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new(TrainingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_linear_regression_simple() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![[2.0], [4.0], [6.0], [8.0]];

        let mut model = LinearRegression::new(TrainingOptions::new().iterations(200));
        model.fit(&x, &y).unwrap();
        model.train().unwrap();

        let predictions = model.predict(&x).unwrap();
        for (pred, actual) in predictions.iter().zip(y.iter()) {
            assert!((pred - actual).abs() < 1e-6);
        }
    }

    #[test]
    fn test_linear_regression_multivariate() {
        let x = array![[1.0, 2.0], [2.0, 1.0], [3.0, 4.0], [4.0, 3.0]];
        let y = array![[7.0], [6.0], [13.0], [12.0]];

        let mut model = LinearRegression::new(TrainingOptions::new().iterations(500));
        model.fit(&x, &y).unwrap();
        model.train().unwrap();

        let score = model.evaluate(&x, &y).unwrap();
        assert!(score > 0.99);

        let coefficients = model.coefficients().unwrap();
        assert_abs_diff_eq!(coefficients[(0, 0)], 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(coefficients[(1, 0)], 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(model.intercept().unwrap()[0], 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_evaluate_untrained_model() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![[1.0], [2.0], [3.0]];

        let mut model = LinearRegression::default();
        model.fit(&x, &y).unwrap();

        // Zero weights predict 0 everywhere, worse than the mean.
        assert!(model.evaluate(&x, &y).unwrap() < 0.0);
    }

    #[test]
    fn test_evaluate_constant_labels_is_nan() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![[1.0], [2.0], [3.0]];

        let mut model = LinearRegression::new(TrainingOptions::new().iterations(10));
        model.fit(&x, &y).unwrap();
        model.train().unwrap();

        let score = model.evaluate(&x, &array![[4.0], [4.0], [4.0]]).unwrap();
        assert!(score.is_nan());
    }

    #[test]
    fn test_predict_without_fit() {
        let x = array![[1.0], [2.0]];
        let model = LinearRegression::default();

        assert_eq!(model.predict(&x), Err(Error::NotFitted));
    }

    #[test]
    fn test_dimension_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![[1.0], [2.0], [3.0]];

        let mut model = LinearRegression::default();
        assert!(model.fit(&x, &y).is_err());
    }

    #[test]
    fn test_multi_column_labels_rejected() {
        let x = array![[1.0], [2.0]];
        let y = array![[1.0, 0.0], [2.0, 1.0]];

        let mut model = LinearRegression::default();
        assert!(matches!(model.fit(&x, &y), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_predict_feature_mismatch() {
        let x = array![[1.0, 2.0], [2.0, 1.0], [3.0, 3.0]];
        let y = array![[1.0], [2.0], [3.0]];

        let mut model = LinearRegression::default();
        model.fit(&x, &y).unwrap();
        assert!(matches!(
            model.predict(&array![[1.0], [2.0]]),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
