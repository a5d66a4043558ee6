//! Undo/Redo history.
//!
//! Linear snapshot model: before every mutation the whole scene is cloned
//! onto the undo stack and the redo stack is cleared. Undo and redo swap the
//! live scene with the top of the opposite stack.
//!
//! Drag gestures use **batching**: the scene is captured when the gesture
//! starts and pushed when it ends, so a whole drag is one undo step and
//! per-move updates never touch the history.

use ta_core::Scene;

/// Manages the undo/redo snapshot stacks.
pub struct CommandStack {
    undo_stack: Vec<Scene>,
    redo_stack: Vec<Scene>,
    /// Maximum undo depth; `None` = unbounded.
    max_depth: Option<usize>,
    /// Batch nesting depth (0 = not batching).
    batch_depth: usize,
    /// Scene captured at the start of a batch.
    batch_snapshot: Option<Scene>,
}

impl Default for CommandStack {
    fn default() -> Self {
        Self::new(None)
    }
}

impl CommandStack {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
            batch_depth: 0,
            batch_snapshot: None,
        }
    }

    /// Record the pre-mutation scene. Call immediately before mutating.
    pub fn snapshot(&mut self, scene: &Scene) {
        self.push_undo(scene.clone());
    }

    /// Start a gesture. Captures the current scene; the history entry is
    /// only pushed when the outermost batch closes.
    pub fn begin_batch(&mut self, scene: &Scene) {
        if self.batch_depth == 0 {
            self.batch_snapshot = Some(scene.clone());
        }
        self.batch_depth += 1;
    }

    /// End a gesture. When the outermost batch closes and the scene differs
    /// from the captured one, the capture becomes one undo entry. Returns
    /// `true` if an entry was pushed.
    pub fn end_batch(&mut self, scene: &Scene) -> bool {
        if self.batch_depth == 0 {
            return false;
        }
        self.batch_depth -= 1;
        if self.batch_depth > 0 {
            return false;
        }
        match self.batch_snapshot.take() {
            Some(before) if before != *scene => {
                self.push_undo(before);
                true
            }
            _ => false,
        }
    }

    pub fn in_batch(&self) -> bool {
        self.batch_depth > 0
    }

    /// Restore the previous scene. No-op on an empty stack.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::take(scene);
        scene.replace(previous);
        self.redo_stack.push(current);
        log::debug!(
            "undo: {} items restored ({} undo / {} redo)",
            scene.len(),
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Reapply the last undone scene. No-op on an empty stack.
    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::take(scene);
        scene.replace(next);
        self.undo_stack.push(current);
        log::debug!(
            "redo: {} items restored ({} undo / {} redo)",
            scene.len(),
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Display-list labels for the undo stack, bottom entry first.
    pub fn undo_labels(&self) -> Vec<String> {
        stack_labels(self.undo_stack.len())
    }

    /// Display-list labels for the redo stack, bottom entry first.
    pub fn redo_labels(&self) -> Vec<String> {
        stack_labels(self.redo_stack.len())
    }

    fn push_undo(&mut self, scene: Scene) {
        self.undo_stack.push(scene);
        if let Some(max) = self.max_depth
            && self.undo_stack.len() > max
        {
            self.undo_stack.remove(0);
        }
        // Clear redo stack on new action
        self.redo_stack.clear();
    }
}

/// Entry `i` of a stack of `len` is labelled `State {len - i}`: the bottom
/// entry carries the highest number and the top entry is `State 1`.
fn stack_labels(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("State {}", len - i)).collect()
}
