//! Scene → surface drawing calls.
//!
//! Always a full redraw: clear the canvas, then paint every item in scene
//! order so later items land on top.

use crate::surface::Surface;
use ta_core::Scene;

/// Paint the entire scene. Call after every change.
pub fn paint_scene<S: Surface + ?Sized>(surface: &mut S, scene: &Scene, width: f32, height: f32) {
    surface.clear_rect(0.0, 0.0, width, height);

    for item in scene {
        let font = item.style.css_font();
        log::trace!("PAINT {:?} {font} {} at ({}, {})", item.text, item.style.color, item.x, item.y);
        surface.set_font(&font);
        surface.set_fill_style(&item.style.color);
        surface.fill_text(&item.text, item.x, item.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingSurface};
    use pretty_assertions::assert_eq;
    use ta_core::{TextItem, TextStyle};

    #[test]
    fn empty_scene_only_clears() {
        let mut surface = RecordingSurface::default();
        paint_scene(&mut surface, &Scene::new(), 800.0, 600.0);
        assert_eq!(surface.calls, vec![Call::Clear(0.0, 0.0, 800.0, 600.0)]);
    }

    #[test]
    fn paints_items_in_scene_order() {
        let scene: Scene = [
            TextItem::new("Hi", TextStyle::new("Arial", "#000000", 20), 10.0, 40.0),
            TextItem::new("Yo", TextStyle::new("Georgia", "#ff0000", 32), 50.0, 90.0),
        ]
        .into_iter()
        .collect();

        let mut surface = RecordingSurface::default();
        paint_scene(&mut surface, &scene, 320.0, 240.0);

        assert_eq!(
            surface.calls,
            vec![
                Call::Clear(0.0, 0.0, 320.0, 240.0),
                Call::Font("20px Arial".into()),
                Call::Fill("#000000".into()),
                Call::Text("Hi".into(), 10.0, 40.0),
                Call::Font("32px Georgia".into()),
                Call::Fill("#ff0000".into()),
                Call::Text("Yo".into(), 50.0, 90.0),
            ]
        );
    }
}
