//! Placed letter items.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for placed items. Assigned at creation, never reused.
pub type ItemId = Uuid;

/// The closed set of item kinds that can be placed on a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Photo,
    Note,
    Voice,
    Video,
    Music,
    Doodle,
}

/// Item payload handed over by a collaborator (uploader, recorder, doodle
/// export). The core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemContent {
    /// A URL or data URI.
    Locator(String),
    /// Captured binary data (audio/video bytes).
    Blob(Vec<u8>),
}

impl ItemContent {
    /// The locator string, if this content is one.
    pub fn as_locator(&self) -> Option<&str> {
        match self {
            ItemContent::Locator(url) => Some(url),
            ItemContent::Blob(_) => None,
        }
    }
}

/// Creation request for a new item: everything a collaborator decides
/// before the layering engine assigns an id and depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDraft {
    pub kind: ItemKind,
    pub content: ItemContent,
    /// Initial canvas-space position.
    pub position: Point,
    /// Decorative angle, fixed for the item's lifetime.
    pub rotation: f64,
    /// Decorative color token for sticky notes.
    pub color: Option<String>,
}

impl ItemDraft {
    /// Create a draft with no decorative color.
    pub fn new(kind: ItemKind, content: ItemContent, position: Point, rotation: f64) -> Self {
        Self {
            kind,
            content,
            position,
            rotation,
            color: None,
        }
    }

    /// Set the decorative color token.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// An item placed on the letter canvas.
///
/// `content` and `rotation` are immutable after creation; only the
/// editable text fields (`note_text`, `caption`), the position, and the
/// depth key change afterwards, each through its own board operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedItem {
    pub(crate) id: ItemId,
    pub kind: ItemKind,
    pub content: ItemContent,
    /// Body text of a sticky note, rewritable in place.
    pub note_text: String,
    /// Photo caption, rewritable in place.
    pub caption: String,
    /// Decorative color token chosen at creation.
    pub color: Option<String>,
    /// Canvas-space position, mutated only by repositioning.
    pub position: Point,
    /// Decorative angle assigned at creation, never changed.
    pub rotation: f64,
    /// Paint-order key. Strictly unique across all items on a board.
    pub(crate) depth: i64,
}

impl PlacedItem {
    pub(crate) fn from_draft(draft: ItemDraft, depth: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: draft.kind,
            content: draft.content,
            note_text: String::new(),
            caption: String::new(),
            color: draft.color,
            position: draft.position,
            rotation: draft.rotation,
            depth,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Get the depth key. Higher paints later (on top).
    pub fn depth(&self) -> i64 {
        self.depth
    }
}
