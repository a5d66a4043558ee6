use crate::surface::{MonospaceMeasure, Surface, TextMeasure};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear(f32, f32, f32, f32),
    Font(String),
    Fill(String),
    Text(String, f32, f32),
}

/// Records every call; measures with [`MonospaceMeasure`].
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    measure: MonospaceMeasure,
}

impl TextMeasure for RecordingSurface {
    fn measure_text_width(&self, font: &str, text: &str) -> f32 {
        self.measure.measure_text_width(font, text)
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(Call::Clear(x, y, width, height));
    }

    fn set_font(&mut self, font: &str) {
        self.calls.push(Call::Font(font.to_string()));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.calls.push(Call::Fill(color.to_string()));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.calls.push(Call::Text(text.to_string(), x, y));
    }
}
