//! Input abstraction layer.
//!
//! Normalizes browser pointer events into a unified `InputEvent` enum in
//! canvas-local coordinates, consumed by the drag tool.

/// A normalized pointer event, already translated to canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    pub fn position(&self) -> (f32, f32) {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                (*x, *y)
            }
        }
    }
}

/// Translate viewport (`clientX`/`clientY`) coordinates into canvas-local
/// ones using the canvas bounding rectangle's top-left corner.
pub fn canvas_point(client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) -> (f32, f32) {
    (client_x - rect_left, client_y - rect_top)
}
