use approx::assert_abs_diff_eq;
use descent::{Dataset, LogisticRegression, Matrix, TrainingOptions, one_hot};
use ndarray::{Axis, array, concatenate};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Gaussian blobs around `centers`, `per_class` points each, with class
/// indices in center order.
fn blobs(centers: &[[f64; 2]], per_class: usize, spread: f64, seed: u64) -> (Matrix, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, spread).unwrap();

    let clusters: Vec<Matrix> = centers
        .iter()
        .map(|center| {
            Matrix::random_using((per_class, 2), normal, &mut rng) + &array![center[0], center[1]]
        })
        .collect();
    let views: Vec<_> = clusters.iter().map(|c| c.view()).collect();
    let features = concatenate(Axis(0), &views).unwrap();

    let classes = (0..centers.len())
        .flat_map(|class| std::iter::repeat(class).take(per_class))
        .collect();
    (features, classes)
}

#[test]
fn separates_two_clusters() {
    let (features, classes) = blobs(&[[-2.0, -2.0], [2.0, 2.0]], 150, 0.8, 42);
    let labels = one_hot(&classes, 2).unwrap();
    let dataset = Dataset::split(&features, &labels, 100, Some(42)).unwrap();

    let options = TrainingOptions::new()
        .learning_rate(0.5)
        .iterations(100)
        .batch_size(10);
    let mut model = LogisticRegression::new(options);
    model.fit(&dataset.features, &dataset.labels).unwrap();
    model.train().unwrap();

    let accuracy = model.evaluate(&dataset.test_features, &dataset.test_labels).unwrap();
    assert!(accuracy >= 0.9, "accuracy = {accuracy}");
}

#[test]
fn separates_two_clusters_with_a_single_label_column() {
    let (features, classes) = blobs(&[[-2.0, 1.0], [2.0, -1.0]], 100, 0.8, 7);
    let labels = Matrix::from_shape_fn((classes.len(), 1), |(i, _)| classes[i] as f64);
    let dataset = Dataset::split(&features, &labels, 50, Some(7)).unwrap();

    let options = TrainingOptions::new()
        .learning_rate(0.5)
        .iterations(100)
        .batch_size(10)
        .decision_boundary(0.5);
    let mut model = LogisticRegression::new(options);
    model.fit(&dataset.features, &dataset.labels).unwrap();
    model.train().unwrap();

    assert_eq!(model.n_classes(), Some(1));
    let accuracy = model.evaluate(&dataset.test_features, &dataset.test_labels).unwrap();
    assert!(accuracy >= 0.9, "accuracy = {accuracy}");
}

#[test]
fn classifies_three_clusters() {
    let (features, classes) = blobs(&[[0.0, 4.0], [-4.0, -2.0], [4.0, -2.0]], 100, 0.8, 5);
    let labels = one_hot(&classes, 3).unwrap();
    let dataset = Dataset::split(&features, &labels, 60, Some(5)).unwrap();

    let options = TrainingOptions::new()
        .learning_rate(0.5)
        .iterations(100)
        .batch_size(10);
    let mut model = LogisticRegression::new(options);
    model.fit(&dataset.features, &dataset.labels).unwrap();
    model.train().unwrap();

    let accuracy = model.evaluate(&dataset.test_features, &dataset.test_labels).unwrap();
    assert!(accuracy >= 0.9, "accuracy = {accuracy}");

    let probabilities = model.predict_proba(&dataset.test_features).unwrap();
    for row in probabilities.axis_iter(Axis(0)) {
        assert_abs_diff_eq!(row.sum(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn cross_entropy_history_is_finite_when_saturated() {
    // Far-apart clusters drive the softmax output to exactly 0 and 1.
    let features = array![[-100.0], [-99.0], [99.0], [100.0]];
    let labels = array![[1.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 1.0]];

    let options = TrainingOptions::new().learning_rate(5.0).iterations(200);
    let mut model = LogisticRegression::new(options);
    model.fit(&features, &labels).unwrap();
    model.train().unwrap();

    assert!(model.loss_history().iter().all(f64::is_finite));
    assert!(model.weights().unwrap().iter().all(|w| w.is_finite()));
    assert_abs_diff_eq!(model.evaluate(&features, &labels).unwrap(), 1.0);
}

#[test]
fn loss_is_cross_entropy_on_full_training_set() {
    let features = array![[0.0], [1.0], [2.0], [3.0], [4.0]];
    let labels = array![[1.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 1.0], [0.0, 1.0]];

    let options = TrainingOptions::new().batch_size(2).iterations(0);
    let mut model = LogisticRegression::new(options);
    model.fit(&features, &labels).unwrap();

    let epoch_loss = model.train_epoch().unwrap();
    let full_loss = model.loss(&features, &labels).unwrap();
    assert_abs_diff_eq!(epoch_loss, full_loss, epsilon = 1e-12);
}
