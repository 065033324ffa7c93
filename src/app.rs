use eframe::egui::{self, ScrollArea, Ui};

use crate::config::AppConfig;
use crate::error::PredictorError;
use crate::inference::loader::load_artifacts;
use crate::inference::pipeline::PredictorContext;
use crate::state::AppState;
use crate::ui::{form, presenter};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub enum SalaryPredictorApp {
    /// Artifacts loaded and categories extracted; the form is live.
    Ready {
        context: PredictorContext,
        state: AppState,
    },
    /// Startup failed; only the error is shown.
    Halted { error: PredictorError },
}

impl SalaryPredictorApp {
    /// Load both artifacts and derive the dropdown choices. Any failure here
    /// is fatal for the session.
    pub fn start(config: &AppConfig) -> Self {
        match Self::try_start(config) {
            Ok((context, state)) => SalaryPredictorApp::Ready { context, state },
            Err(error) => {
                log::error!("Startup halted: {error}");
                SalaryPredictorApp::Halted { error }
            }
        }
    }

    fn try_start(config: &AppConfig) -> Result<(PredictorContext, AppState), PredictorError> {
        let artifacts = load_artifacts(config)?;
        log::info!(
            "Loaded {} and {}",
            config.model_path().display(),
            config.preprocessor_path().display()
        );
        let context = PredictorContext::new(artifacts)?;
        let state = AppState::new(context.categories());
        Ok((context, state))
    }
}

impl eframe::App for SalaryPredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui: &mut Ui| match self {
            SalaryPredictorApp::Halted { error } => {
                presenter::show_fatal(ui, &error.to_string());
            }
            SalaryPredictorApp::Ready { context, state } => {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui: &mut Ui| {
                        ui.heading("Employee Salary Predictor");
                        ui.label("Enter employee details to get a salary prediction.");
                        ui.separator();

                        if form::employee_form(ui, &mut state.form, context.categories()) {
                            let now = ui.input(|i| i.time);
                            state.submit(context, now);
                        }
                        state.discard_stale_outcome();

                        ui.add_space(8.0);
                        presenter::show_outcome(ui, state.outcome.as_ref());
                    });
            }
        });

        if let SalaryPredictorApp::Ready { state, .. } = self {
            state.balloons.show(ctx);
        }
    }
}
