//! Linear models trained by mini-batch gradient descent.
//!
//! This module provides:
//! - `LinearRegression`: mean squared error, evaluated with R²
//! - `LogisticRegression`: softmax and cross-entropy, evaluated with accuracy
//!
//! Both are instantiations of the generic [`Trainer`] with a different
//! [`Objective`]. Features are standardized with statistics frozen at `fit`,
//! a bias column is prepended, and every epoch walks the training rows in
//! contiguous batches of `batch_size`. Rows left over after the last full
//! batch are skipped for that epoch. After each epoch the loss on the whole
//! training set is recorded and the learning rate is adapted.
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use descent::{LinearRegression, TrainingOptions};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![[3.0], [5.0], [7.0], [9.0]];
//!
//! let options = TrainingOptions::new().learning_rate(0.05).iterations(200);
//! let mut model = LinearRegression::new(options);
//! model.fit(&x, &y).unwrap();
//! model.train().unwrap();
//!
//! let r2 = model.evaluate(&x, &y).unwrap();
//! assert!(r2 > 0.95);
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use descent::{LogisticRegression, TrainingOptions};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![[1.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 1.0]];
//!
//! let options = TrainingOptions::new().learning_rate(0.5).iterations(100).batch_size(2);
//! let mut model = LogisticRegression::new(options);
//! model.fit(&x, &y).unwrap();
//! model.train().unwrap();
//!
//! let classes = model.predict(&x).unwrap();
//! let probabilities = model.predict_proba(&x).unwrap();
//! assert_eq!(classes.len(), 4);
//! assert_eq!(probabilities.ncols(), 2);
//! ```
//!
//! ## Early stopping
//! `train_epoch` runs a single epoch, so callers can stop on their own terms:
//! ```rust
//! use descent::{LinearRegression, TrainingOptions};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0]];
//! let y = array![[2.0], [4.0], [6.0]];
//!
//! let mut model = LinearRegression::new(TrainingOptions::new());
//! model.fit(&x, &y).unwrap();
//! for _ in 0..1000 {
//!     if model.train_epoch().unwrap() < 1e-8 {
//!         break;
//!     }
//! }
//! ```

mod history;
mod learning_rate;
mod linear_regression;
mod logistic_regression;
mod objective;
mod options;
mod trainer;

pub use history::LossHistory;
pub use learning_rate::AdaptiveLearningRate;
pub use linear_regression::LinearRegression;
pub use logistic_regression::LogisticRegression;
pub use objective::{Objective, SoftmaxCrossEntropy, SquaredError, sigmoid, softmax};
pub use options::TrainingOptions;
pub use trainer::{Trainer, TrainingState};
