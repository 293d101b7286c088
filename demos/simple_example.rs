use descent::{LinearRegression, TrainingOptions};
use ndarray::array;

fn main() -> Result<(), descent::Error> {
    // Simple example with synthetic data
    println!("=== Simple Linear Regression Example ===\n");

    // Create sample data: y = 2x + 3 + noise
    let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
    let y = array![[5.1], [6.9], [9.2], [11.1], [12.8]];

    println!("Training data:");
    println!("X: {:?}", x);
    println!("y: {:?}", y);

    // Train model
    let options = TrainingOptions::new().learning_rate(0.05).iterations(300);
    let mut model = LinearRegression::new(options);
    model.fit(&x, &y)?;
    model.train()?;

    // Make predictions
    let predictions = model.predict(&x)?;

    // Evaluate
    let score = model.evaluate(&x, &y)?;
    let mse = descent::metrics::mean_squared_error(&y, &predictions)?;

    println!("\nResults:");
    if let (Some(coefficients), Some(intercept)) = (model.coefficients(), model.intercept()) {
        println!("Coefficient: {:.4}", coefficients[(0, 0)]);
        println!("Intercept: {:.4}", intercept[0]);
    }
    println!("R² score: {:.4}", score);
    println!("MSE: {:.4}", mse);
    println!("Final learning rate: {:.4}", model.learning_rate());

    println!("\nPredictions vs Actual:");
    for (i, (pred, actual)) in predictions.iter().zip(y.iter()).enumerate() {
        println!("Sample {}: Predicted={:.2}, Actual={:.2}, Error={:.2}",
                 i+1, pred, actual, (pred - actual).abs());
    }

    // Test on new data
    let new_x = array![[6.0], [7.0]];
    let new_predictions = model.predict(&new_x)?;
    println!("\nPredictions on new data:");
    for (i, pred) in new_predictions.iter().enumerate() {
        println!("X={:.1}: Predicted y={:.2}", new_x[(i, 0)], pred);
    }

    Ok(())
}
