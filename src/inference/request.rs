use super::table::{Cell, FeatureTable};

/// Column order the preprocessor was fit against. Categorical columns are
/// encoded positionally, so this order must not change.
pub const FEATURE_COLUMNS: [&str; 5] = [
    "Age",
    "Gender",
    "Education Level",
    "Job Title",
    "Years of Experience",
];

pub const AGE_MIN: u32 = 18;
pub const AGE_MAX: u32 = 60;
pub const AGE_DEFAULT: u32 = 30;

pub const EXPERIENCE_MIN: f64 = 0.0;
pub const EXPERIENCE_MAX: f64 = 42.0;
pub const EXPERIENCE_STEP: f64 = 0.5;
pub const EXPERIENCE_DEFAULT: f64 = 5.0;

/// One submission, built fresh from the current control values.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub age: u32,
    pub gender: String,
    pub education_level: String,
    pub job_title: String,
    pub years_of_experience: f64,
}

impl PredictionRequest {
    /// Single-row table in [`FEATURE_COLUMNS`] order.
    pub fn to_table(&self) -> FeatureTable {
        FeatureTable::new(
            &FEATURE_COLUMNS,
            vec![vec![
                Cell::Number(f64::from(self.age)),
                Cell::Text(self.gender.clone()),
                Cell::Text(self.education_level.clone()),
                Cell::Text(self.job_title.clone()),
                Cell::Number(self.years_of_experience),
            ]],
        )
    }
}
