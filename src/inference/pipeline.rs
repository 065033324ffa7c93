use super::artifacts::Artifacts;
use super::categories::{extract_categories, CategorySet};
use super::request::PredictionRequest;
use super::validate::validate_experience;
use crate::error::PredictorError;

// ---------------------------------------------------------------------------
// Session context
// ---------------------------------------------------------------------------

/// Everything derived at startup: the loaded artifacts and the dropdown
/// choices recovered from them. Shared read-only by every submission.
pub struct PredictorContext {
    artifacts: Artifacts,
    categories: CategorySet,
}

/// Result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Failed the age/experience rule; inference was not attempted.
    Rejected(String),
    /// Transform or predict raised.
    Failed(String),
    /// Predicted monthly salary.
    Succeeded(f64),
}

impl PredictorContext {
    /// Extract categories from the preprocessor and take ownership of both
    /// artifacts.
    pub fn new(artifacts: Artifacts) -> Result<Self, PredictorError> {
        let categories = extract_categories(artifacts.preprocessor.as_ref())?;
        log::info!(
            "Categories ready: {} genders, {} education levels, {} job titles",
            categories.genders.len(),
            categories.education_levels.len(),
            categories.job_titles.len()
        );
        Ok(Self {
            artifacts,
            categories,
        })
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Transform the request's single row and return the model's first
    /// prediction. Assumes the request already passed validation.
    pub fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictorError> {
        let table = request.to_table();

        let encoded = self
            .artifacts
            .preprocessor
            .transform(&table)
            .map_err(|e| PredictorError::Inference(format!("{e:#}")))?;
        if encoded.len() != table.len() {
            return Err(PredictorError::Inference(format!(
                "preprocessor returned {} rows for {} input rows",
                encoded.len(),
                table.len()
            )));
        }

        let predictions = self
            .artifacts
            .model
            .predict(&encoded)
            .map_err(|e| PredictorError::Inference(format!("{e:#}")))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictorError::Inference("model returned no predictions".into()))
    }

    /// Validate, then predict. Never fails the session: every error becomes
    /// an [`Outcome`] the form can show before the next attempt.
    pub fn submit(&self, request: &PredictionRequest) -> Outcome {
        if let Err(e) = validate_experience(request.age, request.years_of_experience) {
            log::warn!("Rejected submission: {e}");
            return Outcome::Rejected(e.to_string());
        }

        match self.predict(request) {
            Ok(salary) => {
                log::debug!("Predicted {salary} for {request:?}");
                Outcome::Succeeded(salary)
            }
            Err(e) => {
                log::error!("Prediction failed: {e}");
                Outcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell as StdCell, RefCell};
    use std::rc::Rc;

    use anyhow::{bail, Result};

    use super::*;
    use crate::inference::artifacts::{Preprocessor, Regressor};
    use crate::inference::loader::{
        ColumnTransformer, HandleUnknown, LinearModel, NamedTransformer, TransformerKind,
    };
    use crate::inference::request::FEATURE_COLUMNS;
    use crate::inference::table::{Cell, EncodedTable, FeatureTable};

    /// Records every table it sees and returns a fixed encoded row.
    pub(crate) struct StubPreprocessor {
        pub seen: Rc<RefCell<Vec<FeatureTable>>>,
    }

    impl Preprocessor for StubPreprocessor {
        fn transform(&self, table: &FeatureTable) -> Result<EncodedTable> {
            self.seen.borrow_mut().push(table.clone());
            Ok(EncodedTable::new(vec![vec![1.0, 0.0, 1.0]]))
        }

        fn learned_categories(&self, name: &str) -> Option<Vec<Vec<String>>> {
            (name == "cat").then(|| {
                vec![
                    vec!["Female".into(), "Male".into()],
                    vec!["Bachelor's".into(), "Master's".into()],
                    vec!["Engineer".into()],
                ]
            })
        }
    }

    /// Returns a fixed prediction, or fails when `fail` is set.
    pub(crate) struct StubModel {
        pub value: f64,
        pub fail: bool,
        pub calls: Rc<StdCell<usize>>,
    }

    impl Regressor for StubModel {
        fn predict(&self, encoded: &EncodedTable) -> Result<Vec<f64>> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                bail!("model exploded on {} rows", encoded.len());
            }
            Ok(vec![self.value])
        }
    }

    pub(crate) struct Harness {
        pub context: PredictorContext,
        pub seen: Rc<RefCell<Vec<FeatureTable>>>,
        pub calls: Rc<StdCell<usize>>,
    }

    pub(crate) fn harness(value: f64, fail: bool) -> Harness {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let calls = Rc::new(StdCell::new(0));
        let artifacts = Artifacts::new(
            Box::new(StubPreprocessor { seen: seen.clone() }),
            Box::new(StubModel {
                value,
                fail,
                calls: calls.clone(),
            }),
        );
        Harness {
            context: PredictorContext::new(artifacts).unwrap(),
            seen,
            calls,
        }
    }

    pub(crate) fn request(age: u32, years: f64) -> PredictionRequest {
        PredictionRequest {
            age,
            gender: "Male".into(),
            education_level: "Master's".into(),
            job_title: "Engineer".into(),
            years_of_experience: years,
        }
    }

    #[test]
    fn valid_request_reaches_adapter_as_single_ordered_row() {
        let h = harness(55000.0, false);
        assert_eq!(h.context.submit(&request(35, 10.0)), Outcome::Succeeded(55000.0));

        let seen = h.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].columns, FEATURE_COLUMNS.to_vec());
        assert_eq!(seen[0].rows.len(), 1);
        assert_eq!(seen[0].rows[0][0], Cell::Number(35.0));
        assert_eq!(seen[0].rows[0][3], Cell::Text("Engineer".into()));
        assert_eq!(seen[0].rows[0][4], Cell::Number(10.0));
    }

    #[test]
    fn every_category_combination_is_accepted() {
        let h = harness(1.0, false);
        let cats = h.context.categories().clone();
        for gender in &cats.genders {
            for education in &cats.education_levels {
                for job in &cats.job_titles {
                    let req = PredictionRequest {
                        age: 60,
                        gender: gender.clone(),
                        education_level: education.clone(),
                        job_title: job.clone(),
                        years_of_experience: 42.0,
                    };
                    assert_eq!(h.context.submit(&req), Outcome::Succeeded(1.0));
                }
            }
        }
        // Engineer plus the appended catch-all.
        assert_eq!(h.seen.borrow().len(), 2 * 2 * 2);
    }

    #[test]
    fn rejected_request_never_reaches_adapter() {
        let h = harness(55000.0, false);
        match h.context.submit(&request(18, 5.0)) {
            Outcome::Rejected(msg) => {
                assert!(msg.contains("18"));
                assert!(msg.contains("5.0"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(h.seen.borrow().is_empty());
        assert_eq!(h.calls.get(), 0);
    }

    #[test]
    fn model_failure_is_recoverable() {
        let h = harness(0.0, true);
        match h.context.submit(&request(30, 5.0)) {
            Outcome::Failed(msg) => {
                assert!(msg.starts_with("An error occurred during prediction"));
                assert!(msg.contains("model exploded"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn identical_requests_give_identical_predictions() {
        let h = harness(61234.5, false);
        let first = h.context.submit(&request(40, 15.5));
        let second = h.context.submit(&request(40, 15.5));
        assert_eq!(first, second);
        assert_eq!(h.calls.get(), 2);
    }

    struct EmptyPreprocessor;

    impl Preprocessor for EmptyPreprocessor {
        fn transform(&self, _table: &FeatureTable) -> Result<EncodedTable> {
            Ok(EncodedTable::default())
        }

        fn learned_categories(&self, _name: &str) -> Option<Vec<Vec<String>>> {
            Some(vec![vec!["Male".into()], vec!["PhD".into()], vec!["Engineer".into()]])
        }
    }

    #[test]
    fn row_count_mismatch_fails_before_the_model() {
        let calls = Rc::new(StdCell::new(0));
        let artifacts = Artifacts::new(
            Box::new(EmptyPreprocessor),
            Box::new(StubModel {
                value: 1.0,
                fail: false,
                calls: calls.clone(),
            }),
        );
        let context = PredictorContext::new(artifacts).unwrap();

        match context.submit(&request(30, 5.0)) {
            Outcome::Failed(msg) => assert!(msg.contains("returned 0 rows for 1 input rows")),
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn other_job_title_fails_against_strict_encoder() {
        let preprocessor = ColumnTransformer {
            feature_names_in: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            transformers: vec![
                NamedTransformer {
                    name: "num".into(),
                    columns: vec!["Age".into(), "Years of Experience".into()],
                    kind: TransformerKind::Passthrough,
                },
                NamedTransformer {
                    name: "cat".into(),
                    columns: vec!["Gender".into(), "Education Level".into(), "Job Title".into()],
                    kind: TransformerKind::OneHot {
                        categories: vec![
                            vec!["Male".into()],
                            vec!["Master's".into()],
                            vec!["Engineer".into()],
                        ],
                        handle_unknown: HandleUnknown::Error,
                    },
                },
            ],
        };
        let model = LinearModel::LinearRegression {
            coef: vec![1000.0, 2000.0, 1.0, 1.0, 1.0],
            intercept: 20000.0,
        };
        let context =
            PredictorContext::new(Artifacts::new(Box::new(preprocessor), Box::new(model))).unwrap();
        assert!(context
            .categories()
            .job_titles
            .contains(&"Other".to_string()));

        let mut other = request(30, 5.0);
        other.job_title = "Other".into();
        match context.submit(&other) {
            Outcome::Failed(msg) => assert!(msg.contains("unknown category 'Other'")),
            outcome => panic!("expected failure, got {outcome:?}"),
        }

        // A trained title still predicts: 30*1000 + 5*2000 + 3 + 20000.
        assert_eq!(context.submit(&request(30, 5.0)), Outcome::Succeeded(60003.0));
    }

    #[test]
    fn context_exposes_job_titles_with_other() {
        let h = harness(0.0, false);
        assert_eq!(h.context.categories().job_titles, vec!["Engineer", "Other"]);
    }
}
