use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::json;

const GENDERS: [&str; 2] = ["Female", "Male"];
const EDUCATION_LEVELS: [&str; 4] = ["Bachelor's", "High School", "Master's", "PhD"];
const JOB_TITLES: [&str; 8] = [
    "Data Analyst",
    "Data Scientist",
    "Marketing Manager",
    "Product Manager",
    "Sales Associate",
    "Software Engineer",
    "Senior Software Engineer",
    "Other",
];

/// Monthly premium (₹) per category, same order as the lists above.
const GENDER_EFFECT: [f64; 2] = [-1500.0, 1500.0];
const EDUCATION_EFFECT: [f64; 4] = [0.0, -9000.0, 7000.0, 15000.0];
const JOB_EFFECT: [f64; 8] = [
    -4000.0, 9000.0, 6000.0, 11000.0, -8000.0, 8000.0, 18000.0, -2000.0,
];

/// Writes a demo `preprocessor.json` / `model.json` pair into the directory
/// given as the first argument (default: current directory).
fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let preprocessor = json!({
        "feature_names_in": ["Age", "Gender", "Education Level", "Job Title", "Years of Experience"],
        "transformers": [
            {
                "name": "num",
                "kind": "standard_scaler",
                "columns": ["Age", "Years of Experience"],
                "mean": [33.6, 10.1],
                "scale": [7.6, 6.5]
            },
            {
                "name": "cat",
                "kind": "one_hot",
                "columns": ["Gender", "Education Level", "Job Title"],
                "categories": [GENDERS, EDUCATION_LEVELS, JOB_TITLES],
                "handle_unknown": "ignore"
            }
        ]
    });

    // Scaled age and experience first, then the one-hot blocks in order.
    let mut coef = vec![2500.0, 14000.0];
    coef.extend(GENDER_EFFECT);
    coef.extend(EDUCATION_EFFECT);
    coef.extend(JOB_EFFECT);

    let model = json!({
        "kind": "linear_regression",
        "coef": coef,
        "intercept": 52000.0
    });

    for (name, value) in [("preprocessor.json", &preprocessor), ("model.json", &model)] {
        let path = out_dir.join(name);
        let text = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
