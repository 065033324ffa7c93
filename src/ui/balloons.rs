use eframe::egui::{self, Color32, Id, LayerId, Order, Pos2, Stroke};
use palette::{Hsl, IntoColor, Srgb};

/// How long one celebration lasts, in seconds.
const DURATION: f64 = 3.0;
const COUNT: usize = 24;
const RADIUS: f32 = 18.0;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Balloon animation
// ---------------------------------------------------------------------------

/// Balloons floating up the window after a successful prediction.
#[derive(Debug, Clone)]
pub struct Balloons {
    started_at: Option<f64>,
    colors: Vec<Color32>,
}

impl Default for Balloons {
    fn default() -> Self {
        Self {
            started_at: None,
            colors: generate_palette(COUNT),
        }
    }
}

impl Balloons {
    /// Start (or restart) the animation at time `now` (seconds).
    pub fn launch(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    pub fn is_active(&self, now: f64) -> bool {
        self.started_at.is_some_and(|t| now - t < DURATION)
    }

    /// Paint the current frame above all panels.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let Some(start) = self.started_at else {
            return;
        };
        if !self.is_active(now) {
            self.started_at = None;
            return;
        }

        let rect = ctx.screen_rect();
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("balloons")));
        let progress = ((now - start) / DURATION) as f32;
        let travel = rect.height() + 4.0 * RADIUS;

        for (i, color) in self.colors.iter().enumerate() {
            // Golden-ratio spacing spreads balloons evenly across the width.
            let lane = (i as f32 * 0.618_034).fract();
            let speed = 0.8 + 0.4 * ((i * 7) % COUNT) as f32 / COUNT as f32;
            let x = rect.left() + RADIUS + lane * (rect.width() - 2.0 * RADIUS);
            let y = rect.bottom() + 2.0 * RADIUS - progress * speed * travel;
            let center = Pos2::new(x, y);

            painter.line_segment(
                [center + egui::vec2(0.0, RADIUS), center + egui::vec2(0.0, 3.0 * RADIUS)],
                Stroke::new(1.0, Color32::GRAY),
            );
            painter.circle_filled(center, RADIUS, *color);
        }

        ctx.request_repaint();
    }
}
