use crate::inference::categories::CategorySet;
use crate::inference::pipeline::{Outcome, PredictorContext};
use crate::inference::request::{
    PredictionRequest, AGE_DEFAULT, AGE_MAX, AGE_MIN, EXPERIENCE_DEFAULT, EXPERIENCE_MAX,
    EXPERIENCE_MIN, EXPERIENCE_STEP,
};
use crate::ui::balloons::Balloons;

// ---------------------------------------------------------------------------
// Form controls
// ---------------------------------------------------------------------------

/// Current value of every input control. Persists across submissions until
/// the user changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub age: u32,
    pub years_of_experience: f64,
    pub gender: String,
    pub education_level: String,
    pub job_title: String,
}

impl FormState {
    /// Slider defaults and the first choice of every dropdown.
    pub fn new(categories: &CategorySet) -> Self {
        let first = |list: &[String]| list.first().cloned().unwrap_or_default();
        Self {
            age: AGE_DEFAULT,
            years_of_experience: EXPERIENCE_DEFAULT,
            gender: first(&categories.genders),
            education_level: first(&categories.education_levels),
            job_title: first(&categories.job_titles),
        }
    }

    /// Keep the sliders inside their ranges and on the experience step.
    pub fn clamp(&mut self) {
        self.age = self.age.clamp(AGE_MIN, AGE_MAX);
        let snapped = (self.years_of_experience / EXPERIENCE_STEP).round() * EXPERIENCE_STEP;
        self.years_of_experience = snapped.clamp(EXPERIENCE_MIN, EXPERIENCE_MAX);
    }

    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            age: self.age,
            gender: self.gender.clone(),
            education_level: self.education_level.clone(),
            job_title: self.job_title.clone(),
            years_of_experience: self.years_of_experience,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The interactive session state, independent of rendering.
pub struct AppState {
    pub form: FormState,

    /// What the last submission produced (None before the first one, and
    /// again once any control is edited).
    pub outcome: Option<Outcome>,

    /// Control values the current `outcome` was computed from.
    submitted: Option<FormState>,

    pub balloons: Balloons,
}

impl AppState {
    pub fn new(categories: &CategorySet) -> Self {
        Self {
            form: FormState::new(categories),
            outcome: None,
            submitted: None,
            balloons: Balloons::default(),
        }
    }

    /// Run one submission against `context`. Control values are left as
    /// they were whatever the outcome.
    pub fn submit(&mut self, context: &PredictorContext, now: f64) {
        self.form.clamp();
        let outcome = context.submit(&self.form.to_request());
        if matches!(outcome, Outcome::Succeeded(_)) {
            self.balloons.launch(now);
        }
        self.outcome = Some(outcome);
        self.submitted = Some(self.form.clone());
    }

    /// Drop the last outcome once the controls no longer match the values it
    /// was computed from.
    pub fn discard_stale_outcome(&mut self) {
        if self.submitted.as_ref() != Some(&self.form) {
            self.outcome = None;
            self.submitted = None;
        }
    }
}
