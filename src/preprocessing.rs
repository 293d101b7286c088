use crate::error::{Error, Result};
use crate::{Matrix, Vector};
use ndarray::{Axis, s};
use tracing::warn;

/// Column statistics of the training features.
#[derive(Clone, Debug, PartialEq)]
pub struct Moments {
    pub mean: Vector,
    /// Population variance (no degrees-of-freedom correction).
    pub variance: Vector,
}

impl Moments {
    pub fn from_features(data: &Matrix) -> Result<Self> {
        let mean = data
            .mean_axis(Axis(0))
            .ok_or_else(|| Error::EmptyInput("cannot compute moments of zero rows".to_string()))?;
        let variance = data.var_axis(Axis(0), 0.0);
        Ok(Self { mean, variance })
    }

    pub fn std(&self) -> Vector {
        self.variance.mapv(f64::sqrt)
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Indices of columns that had no spread in the training data.
    pub fn degenerate_columns(&self) -> Vec<usize> {
        self.variance
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0.0)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Standardizes features with statistics frozen from the training set and
/// prepends the bias column.
///
/// Columns with zero training variance are mapped to exactly zero.
#[derive(Clone, Debug, Default)]
pub struct FeaturePreprocessor {
    moments: Option<Moments>,
}

impl FeaturePreprocessor {
    pub fn new() -> Self {
        Self { moments: None }
    }

    /// Freezes the moments of `data`. Fails if they are already frozen.
    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        if self.moments.is_some() {
            return Err(Error::AlreadyFitted);
        }

        let moments = Moments::from_features(data)?;
        let degenerate = moments.degenerate_columns();
        if !degenerate.is_empty() {
            warn!(columns = ?degenerate, "zero-variance feature columns will standardize to 0");
        }

        self.moments = Some(moments);
        Ok(())
    }

    pub fn moments(&self) -> Option<&Moments> {
        self.moments.as_ref()
    }

    pub fn is_frozen(&self) -> bool {
        self.moments.is_some()
    }

    pub fn reset(&mut self) {
        self.moments = None;
    }

    /// `(data - mean) / std` using the frozen moments.
    pub fn standardize(&self, data: &Matrix) -> Result<Matrix> {
        let moments = self.moments.as_ref().ok_or(Error::NotFitted)?;

        if data.ncols() != moments.n_features() {
            return Err(Error::columns("standardize", moments.n_features(), data.ncols()));
        }

        let std = moments.std();
        let mut result = data - &moments.mean;
        for (mut col, &s) in result.axis_iter_mut(Axis(1)).zip(std.iter()) {
            if s > 0.0 {
                col /= s;
            } else {
                col.fill(0.0);
            }
        }

        Ok(result)
    }

    /// Standardizes with the frozen moments and prepends the bias column.
    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        Ok(augment(&self.standardize(data)?))
    }

    /// Freezes the moments on first use, then transforms. Later calls reuse
    /// the first dataset's statistics.
    pub fn standardize_and_augment(&mut self, data: &Matrix) -> Result<Matrix> {
        if self.moments.is_none() {
            self.fit(data)?;
        }
        self.transform(data)
    }
}

/// Returns `[1 | data]`.
pub fn augment(data: &Matrix) -> Matrix {
    let mut out = Matrix::ones((data.nrows(), data.ncols() + 1));
    out.slice_mut(s![.., 1..]).assign(data);
    out
}
