//! Drawing-surface abstraction.
//!
//! The painter and hit tester only need the handful of Canvas2D calls
//! below. The browser bridge implements them over
//! `CanvasRenderingContext2d`; tests use a recording fake.

/// Text measurement at a given CSS font.
pub trait TextMeasure {
    /// Advance width of `text` in pixels when drawn with `font`
    /// (`"<size>px <family>"`).
    fn measure_text_width(&self, font: &str, text: &str) -> f32;
}

/// Minimal immediate-mode 2D surface.
pub trait Surface: TextMeasure {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn set_font(&mut self, font: &str);
    fn set_fill_style(&mut self, color: &str);
    /// Draw `text` with its alphabetic baseline starting at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Width estimate without a real font backend: every character advances
/// by `advance × size`. Used for headless editing and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_text_width(&self, font: &str, text: &str) -> f32 {
        let size = font
            .split_once("px")
            .and_then(|(size, _)| size.trim().parse::<f32>().ok())
            .unwrap_or(10.0);
        text.chars().count() as f32 * size * self.advance
    }
}
