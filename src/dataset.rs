use crate::error::{Error, Result};
use crate::Matrix;
use ndarray::{Axis, s};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Training and test matrices handed to the trainers.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Matrix,
    pub test_features: Matrix,
    pub test_labels: Matrix,
}

impl Dataset {
    pub fn new(
        features: Matrix,
        labels: Matrix,
        test_features: Matrix,
        test_labels: Matrix,
    ) -> Result<Self> {
        if features.nrows() != labels.nrows() {
            return Err(Error::rows("training set", features.nrows(), labels.nrows()));
        }
        if test_features.nrows() != test_labels.nrows() {
            return Err(Error::rows("test set", test_features.nrows(), test_labels.nrows()));
        }
        if features.ncols() != test_features.ncols() {
            return Err(Error::columns("test features", features.ncols(), test_features.ncols()));
        }
        if labels.ncols() != test_labels.ncols() {
            return Err(Error::columns("test labels", labels.ncols(), test_labels.ncols()));
        }

        Ok(Self { features, labels, test_features, test_labels })
    }

    /// Holds out the last `test_size` rows as the test set, after an
    /// optional shuffle seeded with `seed`.
    pub fn split(
        features: &Matrix,
        labels: &Matrix,
        test_size: usize,
        seed: Option<u64>,
    ) -> Result<Self> {
        if features.nrows() != labels.nrows() {
            return Err(Error::rows("split", features.nrows(), labels.nrows()));
        }

        let n_samples = features.nrows();
        if test_size >= n_samples {
            return Err(Error::EmptyInput(format!(
                "test_size {} leaves no training rows out of {}",
                test_size, n_samples
            )));
        }

        let (features, labels) = match seed {
            Some(seed) => {
                let mut indices: Vec<usize> = (0..n_samples).collect();
                indices.shuffle(&mut StdRng::seed_from_u64(seed));
                (features.select(Axis(0), &indices), labels.select(Axis(0), &indices))
            }
            None => (features.clone(), labels.clone()),
        };

        let n_train = n_samples - test_size;
        Self::new(
            features.slice(s![..n_train, ..]).to_owned(),
            labels.slice(s![..n_train, ..]).to_owned(),
            features.slice(s![n_train.., ..]).to_owned(),
            labels.slice(s![n_train.., ..]).to_owned(),
        )
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_test_samples(&self) -> usize {
        self.test_features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

/// One-hot rows for class indices in `0..n_classes`.
pub fn one_hot(classes: &[usize], n_classes: usize) -> Result<Matrix> {
    let mut encoded = Matrix::zeros((classes.len(), n_classes));
    for (row, &class) in classes.iter().enumerate() {
        if class >= n_classes {
            return Err(Error::InvalidLabels(format!(
                "class {} out of range for {} classes",
                class, n_classes
            )));
        }
        encoded[(row, class)] = 1.0;
    }
    Ok(encoded)
}
