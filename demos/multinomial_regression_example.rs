use descent::{Dataset, LogisticRegression, Matrix, TrainingOptions, one_hot};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Buckets a fuel efficiency into low (< 15), medium (< 30) and high.
fn efficiency_class(mpg: f64) -> usize {
    if mpg < 15.0 {
        0
    } else if mpg < 30.0 {
        1
    } else {
        2
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("descent=info".parse()?),
        )
        .init();

    println!("=== Multinomial Logistic Regression Example ===\n");

    // Columns: horsepower, displacement, weight (tons)
    let mut rng = StdRng::seed_from_u64(17);
    let horsepower = Matrix::random_using((400, 1), Uniform::new(50.0, 230.0), &mut rng);
    let displacement = horsepower.mapv(|hp| hp * 1.8 + 10.0);
    let weight = horsepower.mapv(|hp| 1.0 + hp / 150.0);
    let features = ndarray::concatenate![ndarray::Axis(1), horsepower, displacement, weight];

    let classes: Vec<usize> = horsepower
        .iter()
        .map(|&hp| efficiency_class(50.0 - hp * 0.2))
        .collect();
    let labels = one_hot(&classes, 3)?;

    let dataset = Dataset::split(&features, &labels, 50, Some(17))?;

    let options = TrainingOptions::new()
        .learning_rate(0.5)
        .iterations(100)
        .batch_size(10);
    let mut model = LogisticRegression::new(options);
    model.fit(&dataset.features, &dataset.labels)?;
    model.train()?;

    let accuracy = model.evaluate(&dataset.test_features, &dataset.test_labels)?;
    println!("Classes: {}", model.n_classes().unwrap_or(0));
    println!("Test accuracy: {:.2}%", accuracy * 100.0);
    println!("Final cross-entropy: {:.4}", model.loss_history().latest().unwrap_or(f64::NAN));
    println!("Final learning rate: {:.4}", model.learning_rate());

    let samples = ndarray::array![[215.0, 440.0, 2.16], [95.0, 104.0, 1.19], [61.0, 83.0, 1.0]];
    let predicted = model.predict(&samples)?;
    println!("\nPredicted efficiency classes for new cars: {:?}", predicted.to_vec());

    Ok(())
}
