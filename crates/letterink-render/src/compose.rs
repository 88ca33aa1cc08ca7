//! Compose glue: hand a finished doodle to the layering engine.

use crate::renderer::DoodleRenderer;
use kurbo::Point;
use letterink_core::{DoodleEditor, ItemContent, ItemDraft, ItemId, ItemKind, LetterBoard};

/// Finish a doodle session and place the exported drawing on the board as
/// a new topmost item.
///
/// Returns the new item's id, or `None` when the editor has no drawable
/// surface or rendering fails. Both degrade silently: the letter simply
/// gains no item, per the best-effort export policy.
pub fn add_doodle(
    editor: DoodleEditor,
    renderer: &impl DoodleRenderer,
    board: &mut LetterBoard,
    position: Point,
    rotation: f64,
) -> Option<ItemId> {
    let sheet = editor.finish()?;
    let locator = match renderer.render(&sheet) {
        Ok(locator) => locator,
        Err(err) => {
            log::debug!("doodle export skipped: {err}");
            return None;
        }
    };
    Some(board.insert(ItemDraft::new(
        ItemKind::Doodle,
        ItemContent::Locator(locator),
        position,
        rotation,
    )))
}
