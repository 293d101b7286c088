use descent::{Dataset, LogisticRegression, TrainingOptions};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("descent=info".parse()?),
        )
        .init();

    println!("=== Logistic Regression Classification Example ===\n");

    // Feature: hours studied, Target: pass (1) or fail (0)
    let hours_studied = array![[1.0], [2.0], [3.0], [4.0], [5.0], [6.0], [7.0], [8.0]];
    let passed = array![[0.0], [0.0], [0.0], [1.0], [1.0], [1.0], [1.0], [1.0]];

    println!("Training data:");
    println!("Hours studied: {:?}", hours_studied.column(0));
    println!("Passed exam: {:?}", passed.column(0));

    // Shuffle and split
    let dataset = Dataset::split(&hours_studied, &passed, 2, Some(3))?;

    println!("\nDataset split:");
    println!("Training samples: {}", dataset.n_samples());
    println!("Test samples: {}", dataset.n_test_samples());

    // A single label column trains a binary model thresholded at the
    // decision boundary.
    let options = TrainingOptions::new()
        .learning_rate(0.5)
        .iterations(100)
        .batch_size(3)
        .decision_boundary(0.5);
    let mut model = LogisticRegression::new(options);
    model.fit(&dataset.features, &dataset.labels)?;
    model.train()?;

    println!("\nModel training completed!");

    let test_predictions = model.predict(&dataset.test_features)?;
    let test_probabilities = model.predict_proba(&dataset.test_features)?;
    let accuracy = model.evaluate(&dataset.test_features, &dataset.test_labels)?;

    println!("\nTest Results:");
    println!("Accuracy: {:.2}%", accuracy * 100.0);

    println!("\nPredictions vs Actual:");
    for (i, (&actual, (&predicted, &probability))) in dataset.test_labels.iter()
        .zip(test_predictions.iter().zip(test_probabilities.iter()))
        .enumerate()
    {
        println!("Sample {}: Actual={:.0}, Predicted={}, Probability={:.3}",
                 i+1, actual, predicted, probability);
    }

    // Demonstrate on new data
    println!("\nPredictions on new data:");
    let new_hours = array![[2.5], [5.5], [9.0]];
    let new_predictions = model.predict(&new_hours)?;
    let new_probabilities = model.predict_proba(&new_hours)?;

    for ((&hours, &prediction), &probability) in new_hours.column(0).iter()
        .zip(new_predictions.iter())
        .zip(new_probabilities.iter())
    {
        let outcome = if prediction == 1 { "Pass" } else { "Fail" };
        println!("Hours: {:.1} → Prediction: {} (probability: {:.3})",
                 hours, outcome, probability);
    }

    println!("\nCross-entropy by epoch (first 10):");
    let costs: Vec<String> = model
        .loss_history()
        .chronological()
        .take(10)
        .map(|cost| format!("{:.4}", cost))
        .collect();
    println!("{}", costs.join(" "));

    Ok(())
}
