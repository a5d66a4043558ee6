pub mod commands;
pub mod editor;
pub mod input;
pub mod shortcuts;
pub mod tools;

pub use editor::{Editor, PointerOutcome};
