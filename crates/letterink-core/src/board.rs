//! Letter board: the layering engine for placed items.

use crate::item::{ItemDraft, ItemId, PlacedItem};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Owns all placed items and their depth keys.
///
/// Depths form a strictly unique set at all times: insertion takes
/// max + 1, and reordering swaps depth values between neighbors instead of
/// incrementing, so the set stays a permutation of itself. Gaps left by
/// removals are permitted; `normalize` repairs them once at canvas
/// initialization and is never called mid-session, so ordering from
/// successive swaps stays stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LetterBoard {
    items: HashMap<ItemId, PlacedItem>,
}

impl LetterBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new item at the topmost depth. Always succeeds.
    pub fn insert(&mut self, draft: ItemDraft) -> ItemId {
        let depth = self.items.values().map(|i| i.depth).max().unwrap_or(0) + 1;
        let item = PlacedItem::from_draft(draft, depth);
        let id = item.id();
        log::debug!("insert {:?} item {id} at depth {depth}", item.kind);
        self.items.insert(id, item);
        id
    }

    /// Get an item by id.
    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.get(&id)
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the board has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items sorted by ascending depth (paint order, back to front).
    pub fn items_ordered(&self) -> Vec<&PlacedItem> {
        let mut items: Vec<&PlacedItem> = self.items.values().collect();
        items.sort_by_key(|item| item.depth);
        items
    }

    /// Swap the item's depth with its next-higher neighbor.
    /// No-op for an unknown id or the topmost item.
    pub fn move_forward(&mut self, id: ItemId) {
        self.swap_with_neighbor(id, 1);
    }

    /// Swap the item's depth with its next-lower neighbor.
    /// No-op for an unknown id or the bottommost item.
    pub fn move_backward(&mut self, id: ItemId) {
        self.swap_with_neighbor(id, -1);
    }

    fn swap_with_neighbor(&mut self, id: ItemId, direction: i64) {
        let order: Vec<ItemId> = self.items_ordered().iter().map(|i| i.id()).collect();
        let Some(pos) = order.iter().position(|&item_id| item_id == id) else {
            return;
        };
        let neighbor_pos = pos as i64 + direction;
        if neighbor_pos < 0 || neighbor_pos as usize >= order.len() {
            return;
        }
        let neighbor_id = order[neighbor_pos as usize];

        // Swap depth values, not positions in some list: the depth set
        // stays a permutation of itself and remains strictly unique.
        let depth = self.items[&id].depth;
        let neighbor_depth = self.items[&neighbor_id].depth;
        if let Some(item) = self.items.get_mut(&id) {
            item.depth = neighbor_depth;
        }
        if let Some(neighbor) = self.items.get_mut(&neighbor_id) {
            neighbor.depth = depth;
        }
    }

    /// Reassign depths to the dense sequence 1..=N in current paint order.
    /// Called once at canvas initialization to repair gaps.
    pub fn normalize(&mut self) {
        let order: Vec<ItemId> = self.items_ordered().iter().map(|i| i.id()).collect();
        for (index, id) in order.into_iter().enumerate() {
            if let Some(item) = self.items.get_mut(&id) {
                item.depth = index as i64 + 1;
            }
        }
    }

    /// Overwrite an item's position. No ordering side effect; no-op for an
    /// unknown id.
    pub fn reposition(&mut self, id: ItemId, position: Point) {
        if let Some(item) = self.items.get_mut(&id) {
            item.position = position;
        }
    }

    /// Rewrite a sticky note's body text in place. No-op for an unknown id.
    pub fn set_note_text(&mut self, id: ItemId, text: impl Into<String>) {
        if let Some(item) = self.items.get_mut(&id) {
            item.note_text = text.into();
        }
    }

    /// Rewrite a photo caption in place. No-op for an unknown id.
    pub fn set_caption(&mut self, id: ItemId, text: impl Into<String>) {
        if let Some(item) = self.items.get_mut(&id) {
            item.caption = text.into();
        }
    }

    /// Delete an item. Remaining depths keep their gaps.
    pub fn remove(&mut self, id: ItemId) -> Option<PlacedItem> {
        let removed = self.items.remove(&id);
        if let Some(item) = &removed {
            log::debug!("remove {:?} item {id}", item.kind);
        }
        removed
    }
}
