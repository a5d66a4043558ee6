//! WASM bridge for TA — exposes the Rust editor to the browser page.
//!
//! Compiled via `wasm-pack build --target web`; `web/main.js` forwards DOM
//! events to [`TaCanvas`] and repaints when told to.

mod render2d;

use render2d::{CanvasSurface, render_list, to_canvas_space};
use serde_json::json;
use ta_core::{EditorConfig, FormError, TextStyle};
use ta_editor::shortcuts::ShortcutMap;
use ta_editor::{Editor, PointerOutcome};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element};

/// The main WASM-facing canvas controller.
///
/// Owns the editor (scene, history, drag state). All interaction from the
/// page goes through this struct.
#[wasm_bindgen]
pub struct TaCanvas {
    editor: Editor,
}

#[wasm_bindgen]
impl TaCanvas {
    /// Create a controller for a canvas of the given dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        init_browser_hooks();
        let mut config = EditorConfig::with_canvas(width as f32, height as f32);
        if let Err(err) = config.validate() {
            log::warn!("{err}; using the default canvas");
            config = EditorConfig::default();
        }
        Self {
            editor: Editor::new(config),
        }
    }

    /// Create a controller from a JSON `EditorConfig` (camelCase keys,
    /// every field optional).
    pub fn with_config(json: &str) -> Result<TaCanvas, JsError> {
        init_browser_hooks();
        let config = EditorConfig::from_json(json)?;
        log::info!(
            "canvas {}x{}, history cap {:?}",
            config.canvas_width,
            config.canvas_height,
            config.max_history
        );
        Ok(Self {
            editor: Editor::new(config),
        })
    }

    /// Repaint the whole scene.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let config = self.editor.config();
        let mut surface = CanvasSurface::new(ctx);
        ta_render::paint_scene(
            &mut surface,
            self.editor.scene(),
            config.canvas_width,
            config.canvas_height,
        );
    }

    /// Resize the canvas (placement range follows). Returns `false` and
    /// keeps the old size for non-finite or non-positive dimensions.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        self.editor
            .resize(width as f32, height as f32)
            .map_err(|err| log::warn!("resize rejected: {err}"))
            .is_ok()
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Handle `mousedown` with viewport coordinates. Returns a JSON string:
    /// `{"redraw":bool, "historyChanged":bool, "style":{...}|null}` where
    /// `style` is the selected item's style to mirror into the controls.
    pub fn handle_pointer_down(&mut self, ctx: &CanvasRenderingContext2d, client_x: f64, client_y: f64) -> String {
        let (x, y) = to_canvas_space(ctx, client_x, client_y);
        let outcome = self.editor.pointer_down(&CanvasSurface::new(ctx), x, y);
        outcome_json(&outcome)
    }

    /// Handle `mousemove`. Same JSON shape as `handle_pointer_down`.
    pub fn handle_pointer_move(&mut self, ctx: &CanvasRenderingContext2d, client_x: f64, client_y: f64) -> String {
        let (x, y) = to_canvas_space(ctx, client_x, client_y);
        let outcome = self.editor.pointer_move(&CanvasSurface::new(ctx), x, y);
        outcome_json(&outcome)
    }

    /// Handle `mouseup`. Same JSON shape as `handle_pointer_down`.
    pub fn handle_pointer_up(&mut self, ctx: &CanvasRenderingContext2d, client_x: f64, client_y: f64) -> String {
        let (x, y) = to_canvas_space(ctx, client_x, client_y);
        let outcome = self.editor.pointer_up(&CanvasSurface::new(ctx), x, y);
        outcome_json(&outcome)
    }

    // ─── Form controls ───────────────────────────────────────────────────

    /// "Add text" button. Returns `true` if an item was added; the caller
    /// then clears the text input and repaints.
    pub fn add_text(&mut self, text: &str, font: &str, color: &str, size: &str) -> bool {
        self.editor
            .add_text(text, font, color, size)
            .map_err(|err| report_form_error("add text", &err))
            .is_ok()
    }

    /// Style control changed. Returns `true` if the selected item changed.
    pub fn restyle_selected(&mut self, font: &str, color: &str, size: &str) -> bool {
        self.editor
            .restyle_selected(font, color, size)
            .unwrap_or_else(|err| {
                report_form_error("restyle", &err);
                false
            })
    }

    /// Index of the selected item, or -1.
    pub fn selected_index(&self) -> i32 {
        self.editor
            .selected()
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// JSON style of the selected item, or `null`.
    pub fn selected_style_json(&self) -> String {
        let style = self.editor.selected_item().map(|item| &item.style);
        serde_json::to_string(&style).unwrap_or_else(|_| "null".to_string())
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Undo the last edit. Returns `true` if the scene changed.
    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    /// Redo the last undone edit. Returns `true` if the scene changed.
    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.editor.commands().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editor.commands().can_redo()
    }

    /// Refresh the two history display lists.
    pub fn render_stacks(&self, undo_list: &Element, redo_list: &Element) {
        render_list(undo_list, &self.editor.commands().undo_labels());
        render_list(redo_list, &self.editor.commands().redo_labels());
    }

    /// Undo and redo labels as JSON: `{"undo":[...],"redo":[...]}`.
    pub fn stacks_json(&self) -> String {
        let commands = self.editor.commands();
        json!({
            "undo": commands.undo_labels(),
            "redo": commands.redo_labels(),
        })
        .to_string()
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>"}`
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, meta: bool) -> String {
        let Some(action) = ShortcutMap::resolve(key, ctrl, shift, meta) else {
            return json!({ "changed": false, "action": "none" }).to_string();
        };
        let changed = self.editor.apply_shortcut(action);
        json!({ "changed": changed, "action": action.name() }).to_string()
    }

    // ─── Debug ───────────────────────────────────────────────────────────

    /// The current scene as a JSON array of items.
    pub fn scene_json(&self) -> String {
        serde_json::to_string(self.editor.scene()).unwrap_or_else(|_| "[]".to_string())
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

fn outcome_json(outcome: &PointerOutcome) -> String {
    let style: Option<&TextStyle> = outcome.mirror_style.as_ref();
    json!({
        "redraw": outcome.redraw,
        "historyChanged": outcome.history_changed,
        "style": style,
    })
    .to_string()
}

fn report_form_error(action: &str, err: &FormError) {
    log::warn!("{action} rejected: {err}");
}

// ─── Logging & panic hook for WASM debugging ─────────────────────────────

fn init_browser_hooks() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("TA WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
            // Fails only if a logger is already installed
            let _ = console_log::init_with_level(log::Level::Debug);
        });
    }
}
