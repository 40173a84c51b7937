//! Quickstart example: combine the six models' predictions for one house.
//!
//! Run with: cargo run --example quickstart

use lhp_ensemble::prelude::*;
use lhp_ensemble::report::{ensemble_headline, ensemble_summary};

fn main() {
    println!("=== lhp-ensemble Quickstart ===\n");

    // 1. Describe the house the way the models were trained
    let house = HouseFeatures::new()
        .with_property_sub_type("Apartment")
        .with_rooms(2.0, 1.0)
        .with_area(85.0, 100.0)
        .with_parish("Arroios");
    match FeatureEncoder::new(["Bedrooms", "AreaNet", "Parish_Arroios", "Parish_Alvalade"]) {
        Ok(encoder) => println!("Encoded features: {:?}\n", encoder.encode(&house)),
        Err(e) => println!("Error building encoder: {e}\n"),
    }

    // 2. Each model's prediction; the Linear one is far out of range
    let predictions: PredictionSet = [
        (ModelKind::Linear, 101_684_946.24),
        (ModelKind::DecisionTree, 432_850.17),
        (ModelKind::RandomForest, 457_389.37),
        (ModelKind::Svr, 342_477.41),
        (ModelKind::Ridge, 697_662.90),
        (ModelKind::Lasso, 359_542.55),
    ]
    .into_iter()
    .collect();

    // 3. Aggregate
    let result = aggregate(&predictions);
    print!("{}", ensemble_summary(&result));
    println!("\nDisplayed estimate: {}", ensemble_headline(&result));

    // 4. When every model is above the threshold there is no estimate
    println!("\n--- All predictions above the threshold ---\n");
    let result = aggregate([
        (ModelKind::Ridge, 1_200_000.0),
        (ModelKind::Lasso, 1_300_000.0),
    ]);
    println!("Displayed estimate: {}", ensemble_headline(&result));
}
