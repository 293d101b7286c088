pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;

pub use dataset::{Dataset, one_hot};
pub use error::{Error, Result};
pub use linear_model::{
    AdaptiveLearningRate, LinearRegression, LogisticRegression, LossHistory, Trainer,
    TrainingOptions, TrainingState,
};
pub use preprocessing::{FeaturePreprocessor, Moments};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
