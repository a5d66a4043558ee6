//! Core data model for TA scenes.
//!
//! A scene is a flat, ordered list of text items. Array order is z-order:
//! later items are painted on top and win overlapping hit tests. Items have
//! no identity beyond their index.

use crate::error::FormError;
use serde::{Deserialize, Serialize};

// ─── Style ───────────────────────────────────────────────────────────────

/// Font family, fill colour and pixel size of a text item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// CSS font family, e.g. `Arial` or `"Times New Roman"`.
    pub font: String,
    /// Any CSS colour string; the colour picker emits `#rrggbb`.
    pub color: String,
    /// Font size in pixels.
    pub size: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "Arial".into(),
            color: "#000000".into(),
            size: 20,
        }
    }
}

impl TextStyle {
    pub fn new(font: impl Into<String>, color: impl Into<String>, size: u32) -> Self {
        Self {
            font: font.into(),
            color: color.into(),
            size,
        }
    }

    /// Build a style from raw form-control values.
    ///
    /// `size` is read like a browser `parseInt`: leading whitespace and
    /// trailing garbage are ignored (`"20px"` is 20). Values without leading
    /// digits, or not strictly positive, are rejected.
    pub fn from_form(font: &str, color: &str, size: &str) -> Result<Self, FormError> {
        let font = font.trim();
        if font.is_empty() {
            return Err(FormError::EmptyFont);
        }
        let color = color.trim();
        if color.is_empty() {
            return Err(FormError::EmptyColor);
        }
        let size = parse_size(size)?;
        Ok(Self::new(font, color, size))
    }

    /// Canvas font shorthand: `"<size>px <family>"`.
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.size, self.font)
    }
}

/// Parse a font size the way `parseInt(value, 10)` reads it, rejecting
/// anything that would yield NaN or a non-positive size.
pub fn parse_size(raw: &str) -> Result<u32, FormError> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return Err(FormError::InvalidSize(raw.to_string()));
    }
    match digits[..end].parse::<u32>() {
        Ok(0) | Err(_) => Err(FormError::InvalidSize(raw.to_string())),
        Ok(size) => Ok(size),
    }
}

// ─── Items ───────────────────────────────────────────────────────────────

/// A single text label placed on the canvas.
///
/// `(x, y)` is the left end of the alphabetic baseline, which is where the
/// canvas `fillText` call anchors text by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    #[serde(flatten)]
    pub style: TextStyle,
    pub x: f32,
    pub y: f32,
}

impl TextItem {
    pub fn new(text: impl Into<String>, style: TextStyle, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            style,
            x,
            y,
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    /// Hit box for a measured text width.
    ///
    /// The vertical extent is approximated by the font size above the
    /// baseline; descenders are not covered.
    pub fn bounds(&self, width: f32) -> Bounds {
        let size = self.style.size as f32;
        Bounds {
            x: self.x,
            y: self.y - size,
            width,
            height: size,
        }
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────

/// Ordered collection of text items. Index 0 is painted first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    items: Vec<TextItem>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: TextItem) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&TextItem> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TextItem> {
        self.items.get_mut(index)
    }

    /// Swap in a whole new collection (history restore).
    pub fn replace(&mut self, other: Scene) {
        *self = other;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[TextItem] {
        &self.items
    }
}

impl FromIterator<TextItem> for Scene {
    fn from_iter<I: IntoIterator<Item = TextItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a TextItem;
    type IntoIter = std::slice::Iter<'a, TextItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// Axis-aligned box in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Edge-inclusive containment.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_size_like_parse_int() {
        assert_eq!(parse_size("20"), Ok(20));
        assert_eq!(parse_size("  32"), Ok(32));
        assert_eq!(parse_size("18px"), Ok(18));
        assert_eq!(parse_size("+12"), Ok(12));
    }

    #[test]
    fn parse_size_rejects_nan_and_non_positive() {
        for raw in ["", "abc", "px20", "-5", "0", "   "] {
            assert!(
                matches!(parse_size(raw), Err(FormError::InvalidSize(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_form_builds_style() {
        let style = TextStyle::from_form("Arial", "#ff0000", "24").unwrap();
        assert_eq!(style, TextStyle::new("Arial", "#ff0000", 24));
        assert_eq!(style.css_font(), "24px Arial");
    }

    #[test]
    fn from_form_rejects_blank_fields() {
        assert_eq!(
            TextStyle::from_form(" ", "#000", "10"),
            Err(FormError::EmptyFont)
        );
        assert_eq!(
            TextStyle::from_form("Arial", "", "10"),
            Err(FormError::EmptyColor)
        );
    }

    #[test]
    fn item_bounds_sit_above_baseline() {
        let item = TextItem::new("Hi", TextStyle::new("Arial", "#000", 20), 10.0, 50.0);
        let b = item.bounds(30.0);
        assert!(b.contains(10.0, 30.0));
        assert!(b.contains(40.0, 50.0));
        assert!(!b.contains(10.0, 51.0));
        assert!(!b.contains(41.0, 40.0));
    }

    #[test]
    fn clone_is_independent() {
        let mut scene = Scene::new();
        scene.push(TextItem::new("A", TextStyle::default(), 0.0, 0.0));
        let snapshot = scene.clone();
        scene.get_mut(0).unwrap().move_to(99.0, 99.0);
        assert_eq!(snapshot.get(0).unwrap().x, 0.0);
    }

    #[test]
    fn serializes_flat_items() {
        let scene: Scene = [TextItem::new("Hi", TextStyle::default(), 1.0, 2.0)]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "text": "Hi",
                "font": "Arial",
                "color": "#000000",
                "size": 20,
                "x": 1.0,
                "y": 2.0
            }])
        );
    }
}
