use eframe::egui::{self, Slider, Ui};
use egui_extras::{Size, StripBuilder};

use crate::inference::categories::CategorySet;
use crate::inference::request::{
    AGE_MAX, AGE_MIN, EXPERIENCE_MAX, EXPERIENCE_MIN, EXPERIENCE_STEP,
};
use crate::state::FormState;

/// Height reserved for the two control columns.
const FORM_HEIGHT: f32 = 170.0;

// ---------------------------------------------------------------------------
// Employee details form
// ---------------------------------------------------------------------------

/// Render the input controls and the submit button. Returns `true` when
/// "Predict Salary" was clicked this frame.
pub fn employee_form(ui: &mut Ui, form: &mut FormState, categories: &CategorySet) -> bool {
    ui.heading("Employee Details");
    ui.add_space(4.0);

    ui.allocate_ui(egui::vec2(ui.available_width(), FORM_HEIGHT), |ui: &mut Ui| {
        StripBuilder::new(ui)
            .size(Size::remainder())
            .size(Size::remainder())
            .horizontal(|mut strip| {
                strip.cell(|ui: &mut Ui| {
                    ui.label("Age");
                    ui.add(Slider::new(&mut form.age, AGE_MIN..=AGE_MAX));
                    category_select(ui, "gender", "Gender", &mut form.gender, &categories.genders);
                    category_select(
                        ui,
                        "education_level",
                        "Education Level",
                        &mut form.education_level,
                        &categories.education_levels,
                    );
                });
                strip.cell(|ui: &mut Ui| {
                    ui.label("Years of Experience");
                    ui.add(
                        Slider::new(
                            &mut form.years_of_experience,
                            EXPERIENCE_MIN..=EXPERIENCE_MAX,
                        )
                        .step_by(EXPERIENCE_STEP)
                        .fixed_decimals(1),
                    );
                    category_select(
                        ui,
                        "job_title",
                        "Job Title",
                        &mut form.job_title,
                        &categories.job_titles,
                    );
                });
            });
    });

    ui.add_space(8.0);
    ui.button("Predict Salary").clicked()
}

fn category_select(ui: &mut Ui, id: &str, label: &str, current: &mut String, options: &[String]) {
    ui.add_space(6.0);
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.as_str())
        .width(ui.available_width() * 0.9)
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                ui.selectable_value(current, option.clone(), option.as_str());
            }
        });
}
