use super::artifacts::Preprocessor;
use crate::error::PredictorError;

/// Name of the categorical sub-transformer inside the preprocessor.
pub const CATEGORICAL_TRANSFORMER: &str = "cat";

/// Catch-all job title offered even when the training data had none.
pub const OTHER_JOB_TITLE: &str = "Other";

/// Valid dropdown choices, derived once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategorySet {
    pub genders: Vec<String>,
    pub education_levels: Vec<String>,
    pub job_titles: Vec<String>,
}

/// Recover the gender, education level and job title lists (indices 0, 1, 2
/// of the `"cat"` transformer) and make sure job titles include "Other".
///
/// The returned lists keep the preprocessor's order with duplicates removed.
pub fn extract_categories(preprocessor: &dyn Preprocessor) -> Result<CategorySet, PredictorError> {
    let lists = preprocessor
        .learned_categories(CATEGORICAL_TRANSFORMER)
        .ok_or_else(|| {
            PredictorError::CategoryExtraction(format!(
                "no categorical transformer named '{CATEGORICAL_TRANSFORMER}'"
            ))
        })?;

    let mut lists = lists.into_iter().map(dedup_ordered);
    let mut next = |field: &str| {
        lists.next().ok_or_else(|| {
            PredictorError::CategoryExtraction(format!("missing category list for {field}"))
        })
    };

    let genders = next("Gender")?;
    let education_levels = next("Education Level")?;
    let mut job_titles = next("Job Title")?;

    if !job_titles.iter().any(|t| t == OTHER_JOB_TITLE) {
        log::warn!("Preprocessor has no '{OTHER_JOB_TITLE}' job title; offering it anyway");
        job_titles.push(OTHER_JOB_TITLE.to_string());
    }

    Ok(CategorySet {
        genders,
        education_levels,
        job_titles,
    })
}

fn dedup_ordered(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
