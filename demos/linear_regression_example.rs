use descent::{Dataset, LinearRegression, Matrix, TrainingOptions};
use ndarray::array;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{Normal, Uniform};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("descent=info".parse()?),
        )
        .init();

    // Step 1: Synthetic data standing in for horsepower, weight, displacement -> mpg
    let mut rng = StdRng::seed_from_u64(2024);
    let features = Matrix::random_using((300, 3), Uniform::new(0.0, 10.0), &mut rng);
    let noise = Matrix::random_using((300, 1), Normal::new(0.0, 0.5)?, &mut rng);
    let labels = features.dot(&array![[-1.2], [-0.8], [0.3]]) + 40.0 + noise;

    // Step 2: Shuffle and hold out a test set
    let dataset = Dataset::split(&features, &labels, 50, Some(1))?;
    println!("Dataset: {} training samples, {} test samples, {} features",
             dataset.n_samples(), dataset.n_test_samples(), dataset.n_features());

    // Step 3: Train with mini-batches
    let options = TrainingOptions::new()
        .learning_rate(0.1)
        .iterations(100)
        .batch_size(10);
    let mut model = LinearRegression::new(options);
    model.fit(&dataset.features, &dataset.labels)?;
    model.train()?;

    // Step 4: Evaluate
    let r2 = model.evaluate(&dataset.test_features, &dataset.test_labels)?;
    println!("Results:");
    println!("  Test R² score: {:.4}", r2);
    println!("  Final MSE: {:.4}", model.loss_history().latest().unwrap_or(f64::NAN));
    println!("  Final learning rate: {:.4}", model.learning_rate());

    // Step 5: Inspect model parameters
    if let (Some(coefficients), Some(intercept)) = (model.coefficients(), model.intercept()) {
        println!("  Coefficients: {:?}", coefficients.column(0).to_vec());
        println!("  Intercept: {:.4}", intercept[0]);
    }

    // Step 6: Loss curve, oldest epoch first
    let curve: Vec<String> = model
        .loss_history()
        .chronological()
        .step_by(10)
        .map(|loss| format!("{:.3}", loss))
        .collect();
    println!("  MSE every 10 epochs: {}", curve.join(" "));

    Ok(())
}
