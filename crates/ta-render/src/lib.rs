pub mod hit;
pub mod paint;
pub mod surface;

pub use hit::hit_test;
pub use paint::paint_scene;
pub use surface::{MonospaceMeasure, Surface, TextMeasure};

#[cfg(test)]
pub(crate) mod testing;
