//! Letterink Core Library
//!
//! Platform-agnostic core data structures and logic for the Letterink
//! letter composer: the doodle editor with its undo/redo history, and the
//! letter board that owns placed items and their paint-order depths.

pub mod board;
pub mod doodle;
pub mod item;

pub use board::LetterBoard;
pub use doodle::{DoodleEditor, DoodleSheet, DrawElement, DrawMode, SerializableColor, Stroke};
pub use item::{ItemContent, ItemDraft, ItemId, ItemKind, PlacedItem};
