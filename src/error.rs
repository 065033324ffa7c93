use std::path::PathBuf;

use thiserror::Error;

use crate::inference::validate::MIN_WORKING_AGE;

/// Every failure the predictor can surface to the user.
///
/// `MissingArtifact` and `CategoryExtraction` are fatal at startup; the
/// other two are per-submission and leave the form usable.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error(
        "Error: Model or Preprocessor files not found. Please ensure '{}' and '{}' are in the same directory. ({reason})",
        file_label(.model),
        file_label(.preprocessor)
    )]
    MissingArtifact {
        model: PathBuf,
        preprocessor: PathBuf,
        reason: String,
    },

    #[error("Error extracting categories from preprocessor: {0}")]
    CategoryExtraction(String),

    #[error(
        "Invalid input: An individual with {age} years of age cannot have {years_of_experience:?} years of experience. This implies a professional start before age {min}. Please adjust the values.",
        min = MIN_WORKING_AGE
    )]
    Validation { age: u32, years_of_experience: f64 },

    #[error("An error occurred during prediction: {0}")]
    Inference(String),
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
