//! Hit testing: point → item lookup.
//!
//! Walks the scene back to front (last painted = topmost) and returns the
//! first item whose approximate text box contains the point.

use crate::surface::TextMeasure;
use ta_core::Scene;

/// Index of the topmost item at `(px, py)`, or `None` for background.
///
/// The box spans the measured text width horizontally and the font size
/// above the baseline vertically.
pub fn hit_test<M: TextMeasure + ?Sized>(measure: &M, scene: &Scene, px: f32, py: f32) -> Option<usize> {
    scene.iter().enumerate().rev().find_map(|(index, item)| {
        let width = measure.measure_text_width(&item.style.css_font(), &item.text);
        item.bounds(width).contains(px, py).then_some(index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MonospaceMeasure;
    use ta_core::{TextItem, TextStyle};

    fn item(text: &str, x: f32, y: f32) -> TextItem {
        TextItem::new(text, TextStyle::new("Arial", "#000000", 20), x, y)
    }

    #[test]
    fn hit_inside_and_miss_outside() {
        // "Hello" at 20px → 50px wide, box (10..60, 80..100)
        let scene: Scene = [item("Hello", 10.0, 100.0)].into_iter().collect();
        let m = MonospaceMeasure::default();

        assert_eq!(hit_test(&m, &scene, 30.0, 90.0), Some(0));
        assert_eq!(hit_test(&m, &scene, 10.0, 80.0), Some(0));
        assert_eq!(hit_test(&m, &scene, 60.0, 100.0), Some(0));
        assert_eq!(hit_test(&m, &scene, 61.0, 90.0), None);
        assert_eq!(hit_test(&m, &scene, 30.0, 105.0), None);
        assert_eq!(hit_test(&m, &scene, 30.0, 79.0), None);
    }

    #[test]
    fn topmost_wins_on_overlap() {
        let scene: Scene = [item("AAAA", 0.0, 50.0), item("BBBB", 10.0, 55.0)]
            .into_iter()
            .collect();
        let m = MonospaceMeasure::default();

        assert_eq!(hit_test(&m, &scene, 15.0, 45.0), Some(1));
        // Only A covers x = 5
        assert_eq!(hit_test(&m, &scene, 5.0, 45.0), Some(0));
    }

    #[test]
    fn empty_scene_hits_nothing() {
        assert_eq!(hit_test(&MonospaceMeasure::default(), &Scene::new(), 0.0, 0.0), None);
    }
}
