use eframe::egui::{Color32, RichText, Ui};

use crate::inference::pipeline::Outcome;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Shown under every inference error.
pub const INFERENCE_HINT: &str =
    "Please ensure all inputs are valid and the preprocessor/model are correctly loaded.";

const AMBER: Color32 = Color32::from_rgb(0xd9, 0x8c, 0x00);
const GREEN: Color32 = Color32::from_rgb(0x2e, 0x8b, 0x57);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Success,
}

/// One line of feedback under the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

impl Message {
    fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// The messages one outcome renders as.
pub fn messages(outcome: &Outcome) -> Vec<Message> {
    match outcome {
        Outcome::Rejected(msg) => vec![Message::new(Level::Error, msg.as_str())],
        Outcome::Failed(msg) => vec![
            Message::new(Level::Error, msg.as_str()),
            Message::new(Level::Warning, INFERENCE_HINT),
        ],
        Outcome::Succeeded(salary) => vec![Message::new(
            Level::Success,
            format!("Predicted Monthly Salary: {}", format_currency(*salary)),
        )],
    }
}

/// `55000.0` → `₹55,000.00`. The sign follows the symbol.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{CURRENCY_SYMBOL}{value}");
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Rounds to "0.00" are printed unsigned.
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{CURRENCY_SYMBOL}{sign}{grouped}.{frac_part}")
}

/// Render the last outcome, if any.
pub fn show_outcome(ui: &mut Ui, outcome: Option<&Outcome>) {
    let Some(outcome) = outcome else {
        return;
    };

    for msg in messages(outcome) {
        let text = match msg.level {
            Level::Error => RichText::new(msg.text).color(Color32::RED),
            Level::Warning => RichText::new(msg.text).color(AMBER),
            Level::Success => RichText::new(msg.text).color(GREEN).heading().strong(),
        };
        ui.label(text);
    }
}

/// Full-page error shown when startup could not complete.
pub fn show_fatal(ui: &mut Ui, message: &str) {
    ui.heading("Employee Salary Predictor");
    ui.add_space(8.0);
    ui.label(RichText::new(message).color(Color32::RED));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_formatted_as_rupees() {
        let msgs = messages(&Outcome::Succeeded(55000.0));
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].level, Level::Success);
        assert!(msgs[0].text.contains("₹55,000.00"));
    }

    #[test]
    fn currency_grouping_and_rounding() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(999.999), "₹1,000.00");
        assert_eq!(format_currency(1234567.891), "₹1,234,567.89");
        assert_eq!(format_currency(-1234.5), "₹-1,234.50");
        assert_eq!(format_currency(123.0), "₹123.00");
    }

    #[test]
    fn failure_adds_remediation_warning() {
        let msgs = messages(&Outcome::Failed("An error occurred during prediction: boom".into()));
        assert_eq!(
            msgs.iter().map(|m| m.level).collect::<Vec<_>>(),
            vec![Level::Error, Level::Warning]
        );
        assert_eq!(msgs[1].text, INFERENCE_HINT);
    }

    #[test]
    fn rejection_is_a_single_error() {
        let msgs = messages(&Outcome::Rejected("Invalid input".into()));
        assert_eq!(msgs, vec![Message::new(Level::Error, "Invalid input")]);
    }
}
