//! The editor: one owned value holding the scene, its history, the drag
//! tool and the current selection.
//!
//! Every scene mutation goes through here so the history invariant holds:
//! the pre-mutation scene is on the undo stack and redo is cleared before
//! anything changes.

use crate::commands::CommandStack;
use crate::input::InputEvent;
use crate::shortcuts::ShortcutAction;
use crate::tools::{DragTool, Effect, Hit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ta_core::{ConfigError, EditorConfig, FormError, Scene, TextItem, TextStyle};
use ta_render::{TextMeasure, hit_test};

/// What a pointer event changed, for the host to act on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerOutcome {
    /// The canvas needs repainting.
    pub redraw: bool,
    /// A history entry was pushed; display lists need refreshing.
    pub history_changed: bool,
    /// Style to copy into the style controls (an item was selected).
    pub mirror_style: Option<TextStyle>,
}

pub struct Editor {
    scene: Scene,
    commands: CommandStack,
    tool: DragTool,
    selected: Option<usize>,
    config: EditorConfig,
    rng: StdRng,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            scene: Scene::new(),
            commands: CommandStack::new(config.max_history),
            tool: DragTool::new(),
            selected: None,
            config,
            rng,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn commands(&self) -> &CommandStack {
        &self.commands
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&TextItem> {
        self.selected.and_then(|i| self.scene.get(i))
    }

    pub fn is_dragging(&self) -> bool {
        self.tool.is_dragging()
    }

    /// Resize the canvas; affects placement of future items only. Invalid
    /// dimensions leave the current size in place.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        EditorConfig::check_canvas(width, height)?;
        self.config.canvas_width = width;
        self.config.canvas_height = height;
        Ok(())
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Run a canvas-space pointer event through the drag tool and apply
    /// the resulting effects.
    pub fn handle_pointer<M: TextMeasure + ?Sized>(
        &mut self,
        measure: &M,
        event: &InputEvent,
    ) -> PointerOutcome {
        let hit = match event {
            InputEvent::PointerDown { x, y } => hit_test(measure, &self.scene, *x, *y)
                .and_then(|index| self.scene.get(index).map(|item| (index, item)))
                .map(|(index, item)| Hit {
                    index,
                    x: item.x,
                    y: item.y,
                }),
            _ => None,
        };

        let mut outcome = PointerOutcome::default();
        for effect in self.tool.handle(event, hit) {
            match effect {
                Effect::Select(index) => self.selected = index,
                Effect::MirrorStyle(index) => {
                    outcome.mirror_style = self.scene.get(index).map(|item| item.style.clone());
                }
                Effect::BeginGesture => self.commands.begin_batch(&self.scene),
                Effect::MoveItem { index, x, y } => {
                    if let Some(item) = self.scene.get_mut(index) {
                        item.move_to(x, y);
                    }
                }
                Effect::EndGesture => {
                    if self.commands.end_batch(&self.scene) {
                        log::debug!("drag committed");
                        outcome.history_changed = true;
                    }
                }
                Effect::Redraw => outcome.redraw = true,
            }
        }
        outcome
    }

    pub fn pointer_down<M: TextMeasure + ?Sized>(&mut self, measure: &M, x: f32, y: f32) -> PointerOutcome {
        self.handle_pointer(measure, &InputEvent::from_pointer_down(x, y))
    }

    pub fn pointer_move<M: TextMeasure + ?Sized>(&mut self, measure: &M, x: f32, y: f32) -> PointerOutcome {
        self.handle_pointer(measure, &InputEvent::from_pointer_move(x, y))
    }

    pub fn pointer_up<M: TextMeasure + ?Sized>(&mut self, measure: &M, x: f32, y: f32) -> PointerOutcome {
        self.handle_pointer(measure, &InputEvent::from_pointer_up(x, y))
    }

    // ─── Form actions ────────────────────────────────────────────────────

    /// "Add text" from raw form values. Invalid values leave the scene and
    /// history untouched. Returns the new item's index.
    pub fn add_text(&mut self, text: &str, font: &str, color: &str, size: &str) -> Result<usize, FormError> {
        let style = TextStyle::from_form(font, color, size)?;
        Ok(self.add_item(text, style))
    }

    /// Append an item at a random position inside the placement range.
    pub fn add_item(&mut self, text: &str, style: TextStyle) -> usize {
        self.finish_gesture();
        let (max_x, max_y) = self.config.placement_range();
        let x = self.random_below(max_x);
        let y = self.random_below(max_y);

        self.commands.snapshot(&self.scene);
        let index = self.scene.push(TextItem::new(text, style, x, y));
        log::debug!("add #{index} {text:?} at ({x:.1}, {y:.1})");
        index
    }

    /// Apply raw form values to the selected item. `Ok(false)` when nothing
    /// is selected; the values are not even parsed then.
    pub fn restyle_selected(&mut self, font: &str, color: &str, size: &str) -> Result<bool, FormError> {
        if self.selected_item().is_none() {
            return Ok(false);
        }
        let style = TextStyle::from_form(font, color, size)?;
        Ok(self.set_selected_style(style))
    }

    /// Replace the selected item's style. No-op without a selection.
    pub fn set_selected_style(&mut self, style: TextStyle) -> bool {
        let Some(index) = self.selected.filter(|i| *i < self.scene.len()) else {
            return false;
        };
        self.finish_gesture();
        self.commands.snapshot(&self.scene);
        if let Some(item) = self.scene.get_mut(index) {
            log::debug!("restyle #{index} → {} {}", style.css_font(), style.color);
            item.set_style(style);
        }
        true
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Returns `true` if the scene changed. Clears the selection since
    /// indices may point at different items afterwards.
    pub fn undo(&mut self) -> bool {
        self.finish_gesture();
        let changed = self.commands.undo(&mut self.scene);
        if changed {
            self.selected = None;
        }
        changed
    }

    /// Returns `true` if the scene changed. Clears the selection.
    pub fn redo(&mut self) -> bool {
        self.finish_gesture();
        let changed = self.commands.redo(&mut self.scene);
        if changed {
            self.selected = None;
        }
        changed
    }

    /// Dispatch a keyboard shortcut. Returns `true` if the scene changed.
    pub fn apply_shortcut(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::Deselect => {
                self.deselect();
                false
            }
        }
    }

    // ─── Private helpers ─────────────────────────────────────────────────

    /// Commit an open drag before any other history operation.
    fn finish_gesture(&mut self) {
        if self.tool.is_dragging() {
            self.tool.reset();
            self.commands.end_batch(&self.scene);
        }
    }

    fn random_below(&mut self, max: f32) -> f32 {
        if max.is_finite() && max > 0.0 {
            self.rng.gen_range(0.0..max)
        } else {
            0.0
        }
    }
}
