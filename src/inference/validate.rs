use crate::error::PredictorError;

/// Youngest plausible age to have started working.
pub const MIN_WORKING_AGE: u32 = 18;

/// Reject an age/experience pair implying a career start before
/// [`MIN_WORKING_AGE`].
pub fn validate_experience(age: u32, years_of_experience: f64) -> Result<(), PredictorError> {
    if f64::from(age) - years_of_experience < f64::from(MIN_WORKING_AGE) {
        return Err(PredictorError::Validation {
            age,
            years_of_experience,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::request::{AGE_MAX, AGE_MIN, EXPERIENCE_MAX, EXPERIENCE_STEP};

    #[test]
    fn accepts_start_at_exactly_minimum_age() {
        assert!(validate_experience(30, 12.0).is_ok());
        assert!(validate_experience(18, 0.0).is_ok());
    }

    #[test]
    fn rejects_early_start_with_descriptive_message() {
        let err = validate_experience(18, 5.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("18"));
        assert!(msg.contains("5.0"));
        assert!(matches!(err, PredictorError::Validation { age: 18, .. }));
    }

    #[test]
    fn agrees_with_rule_across_whole_form_range() {
        for age in AGE_MIN..=AGE_MAX {
            let steps = (EXPERIENCE_MAX / EXPERIENCE_STEP) as u32;
            for step in 0..=steps {
                let years = f64::from(step) * EXPERIENCE_STEP;
                let expected_ok = f64::from(age) - years >= 18.0;
                assert_eq!(
                    validate_experience(age, years).is_ok(),
                    expected_ok,
                    "age {age}, experience {years}"
                );
            }
        }
    }
}
