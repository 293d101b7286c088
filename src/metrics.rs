use crate::error::{Error, Result};
use crate::Matrix;
use ndarray::{Array1, Axis};

/// Probabilities are clipped into `[EPSILON, 1 - EPSILON]` before taking logs.
pub const EPSILON: f64 = 1e-15;

fn check_same_shape(context: &'static str, y_true: &Matrix, y_pred: &Matrix) -> Result<()> {
    if y_true.shape() != y_pred.shape() {
        return Err(Error::ShapeMismatch {
            context,
            expected: format!("{:?}", y_true.shape()),
            got: format!("{:?}", y_pred.shape()),
        });
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Matrix, y_pred: &Matrix) -> Result<f64> {
    check_same_shape("mean_squared_error", y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).mean().unwrap_or(f64::NAN))
}

/// Coefficient of determination over every entry of the label matrix.
///
/// Returns NaN when the labels have no variance or there are no samples.
pub fn r2_score(y_true: &Matrix, y_pred: &Matrix) -> Result<f64> {
    check_same_shape("r2_score", y_true, y_pred)?;

    let Some(y_mean) = y_true.mean() else {
        return Ok(f64::NAN);
    };
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(f64::NAN);
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// `-1/n * Σ [y ln p + (1 - y) ln(1 - p)]`, summed over rows and classes.
pub fn cross_entropy(y_true: &Matrix, y_prob: &Matrix) -> Result<f64> {
    check_same_shape("cross_entropy", y_true, y_prob)?;
    if y_true.nrows() == 0 {
        return Ok(f64::NAN);
    }

    let loss = y_true
        .iter()
        .zip(y_prob.iter())
        .map(|(&y, &p)| {
            let p = p.clamp(EPSILON, 1.0 - EPSILON);
            y * p.ln() + (1.0 - y) * (1.0 - p).ln()
        })
        .sum::<f64>();

    Ok(-loss / y_true.nrows() as f64)
}

/// `-1/n * Σ y ln p`, the loss whose gradient through a softmax is `p - y`.
pub fn categorical_cross_entropy(y_true: &Matrix, y_prob: &Matrix) -> Result<f64> {
    check_same_shape("categorical_cross_entropy", y_true, y_prob)?;
    if y_true.nrows() == 0 {
        return Ok(f64::NAN);
    }

    let loss = y_true
        .iter()
        .zip(y_prob.iter())
        .map(|(&y, &p)| y * p.clamp(EPSILON, 1.0 - EPSILON).ln())
        .sum::<f64>();

    Ok(-loss / y_true.nrows() as f64)
}

/// Column index of the largest value in each row. Ties go to the lowest index.
pub fn argmax_rows(values: &Matrix) -> Array1<usize> {
    values
        .axis_iter(Axis(0))
        .map(|row| {
            let mut best = 0;
            for (i, &v) in row.iter().enumerate() {
                if v > row[best] {
                    best = i;
                }
            }
            best
        })
        .collect()
}

/// Fraction of positions where the two class vectors agree. NaN when empty.
pub fn accuracy(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(Error::rows("accuracy", y_true.len(), y_pred.len()));
    }
    if y_true.is_empty() {
        return Ok(f64::NAN);
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(actual, predicted)| actual == predicted)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![[1.0], [2.0], [3.0]];
        let y_pred = array![[1.0], [2.0], [5.0]];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(mse, 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_r2_score_perfect() {
        let y = array![[1.0], [2.0], [3.0], [4.0]];
        assert_abs_diff_eq!(r2_score(&y, &y).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_r2_score_mean_predictor_is_zero() {
        let y_true = array![[1.0], [2.0], [3.0], [4.0]];
        let y_pred = Matrix::from_elem((4, 1), 2.5);
        assert_abs_diff_eq!(r2_score(&y_true, &y_pred).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_r2_score_zero_variance_is_nan() {
        let y_true = array![[3.0], [3.0], [3.0]];
        let y_pred = array![[3.0], [2.0], [3.0]];
        assert!(r2_score(&y_true, &y_pred).unwrap().is_nan());
        assert!(r2_score(&Matrix::zeros((0, 1)), &Matrix::zeros((0, 1))).unwrap().is_nan());
    }

    #[test]
    fn test_r2_score_shape_mismatch() {
        let y_true = array![[1.0], [2.0]];
        let y_pred = array![[1.0], [2.0], [3.0]];
        assert!(matches!(
            r2_score(&y_true, &y_pred),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_cross_entropy_handles_saturation() {
        let y_true = array![[1.0, 0.0], [0.0, 1.0]];
        let y_prob = array![[0.0, 1.0], [1.0, 0.0]];

        let loss = cross_entropy(&y_true, &y_prob).unwrap();
        assert!(loss.is_finite());
        assert!(loss > 30.0);
    }

    #[test]
    fn test_cross_entropy_value() {
        let y_true = array![[1.0], [0.0]];
        let y_prob = array![[0.8], [0.4]];

        let expected = -(0.8f64.ln() + 0.6f64.ln()) / 2.0;
        assert_abs_diff_eq!(cross_entropy(&y_true, &y_prob).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_categorical_cross_entropy_value() {
        let y_true = array![[0.0, 1.0, 0.0]];
        let y_prob = array![[0.2, 0.5, 0.3]];

        let expected = -(0.5f64.ln());
        assert_abs_diff_eq!(
            categorical_cross_entropy(&y_true, &y_prob).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_argmax_rows_tie_breaks_low() {
        let values = array![[0.1, 0.7, 0.2], [0.4, 0.4, 0.2], [0.0, 0.0, 0.0]];
        assert_eq!(argmax_rows(&values), array![1, 0, 0]);
    }

    #[test]
    fn test_accuracy() {
        let y_true = array![0, 1, 2, 1];
        let y_pred = array![0, 1, 1, 1];
        assert_abs_diff_eq!(accuracy(&y_true, &y_pred).unwrap(), 0.75);
    }

    #[test]
    fn test_accuracy_empty_is_nan() {
        let empty = Array1::<usize>::zeros(0);
        assert!(accuracy(&empty, &empty).unwrap().is_nan());
    }
}
