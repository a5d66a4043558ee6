//! Drag tool: pointer events → editor effects.
//!
//! The tool is an explicit two-state machine (`Idle` / `Dragging`) driven
//! by a pure reducer. The reducer never touches the scene; it describes
//! what should happen as a list of [`Effect`]s which the [`Editor`]
//! applies. Transitions can therefore be tested without any surface.
//!
//! [`Editor`]: crate::editor::Editor

use crate::input::InputEvent;
use smallvec::{SmallVec, smallvec};

/// Interaction state of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is held on item `index`; `offset` is press point − anchor.
    Dragging {
        index: usize,
        offset_x: f32,
        offset_y: f32,
    },
}

/// Result of hit-testing the press point: item index and its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub x: f32,
    pub y: f32,
}

/// A side effect requested by the reducer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Replace the selection (`None` clears it).
    Select(Option<usize>),
    /// Copy the item's style into the style controls.
    MirrorStyle(usize),
    /// Open a history batch for the gesture.
    BeginGesture,
    /// Set an item's anchor.
    MoveItem { index: usize, x: f32, y: f32 },
    /// Close the history batch.
    EndGesture,
    /// Repaint the canvas.
    Redraw,
}

pub type Effects = SmallVec<[Effect; 4]>;

/// Pure transition function.
///
/// `hit` is only consulted for `PointerDown`.
pub fn reduce(state: DragState, event: &InputEvent, hit: Option<Hit>) -> (DragState, Effects) {
    match (*event, state) {
        (InputEvent::PointerDown { x, y }, _) => {
            let mut effects = Effects::new();
            // A press while still dragging means the release was lost
            if matches!(state, DragState::Dragging { .. }) {
                effects.push(Effect::EndGesture);
            }
            match hit {
                Some(hit) => {
                    effects.extend([
                        Effect::Select(Some(hit.index)),
                        Effect::MirrorStyle(hit.index),
                        Effect::BeginGesture,
                    ]);
                    let next = DragState::Dragging {
                        index: hit.index,
                        offset_x: x - hit.x,
                        offset_y: y - hit.y,
                    };
                    (next, effects)
                }
                None => {
                    effects.push(Effect::Select(None));
                    (DragState::Idle, effects)
                }
            }
        }
        (
            InputEvent::PointerMove { x, y },
            DragState::Dragging {
                index,
                offset_x,
                offset_y,
            },
        ) => {
            let effects = smallvec![
                Effect::MoveItem {
                    index,
                    x: x - offset_x,
                    y: y - offset_y,
                },
                Effect::Redraw,
            ];
            (state, effects)
        }
        (InputEvent::PointerUp { .. }, DragState::Dragging { .. }) => {
            (DragState::Idle, smallvec![Effect::EndGesture])
        }
        (InputEvent::PointerMove { .. } | InputEvent::PointerUp { .. }, DragState::Idle) => {
            (DragState::Idle, Effects::new())
        }
    }
}

/// Stateful wrapper around [`reduce`].
#[derive(Debug, Default)]
pub struct DragTool {
    state: DragState,
}

impl DragTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed an event, returning the effects to apply.
    pub fn handle(&mut self, event: &InputEvent, hit: Option<Hit>) -> Effects {
        let (next, effects) = reduce(self.state, event, hit);
        self.state = next;
        effects
    }

    /// Drop back to `Idle` without emitting anything.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}
