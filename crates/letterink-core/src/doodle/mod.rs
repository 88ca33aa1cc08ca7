//! Doodle editor: a small stateful vector-graphics editor.
//!
//! The editor owns the committed element list and its undo/redo history.
//! Pointer events arrive in drawing-surface-local coordinates (the caller
//! transforms from screen space) and only ever mutate the transient preview;
//! a pointer-up commits the preview as a new element plus a history
//! snapshot.

pub mod element;
pub mod history;
pub mod path;

pub use element::{DrawElement, PALETTE, SURFACE_BACKGROUND, SerializableColor, Stroke};
pub use history::History;
pub use path::SmoothPathBuilder;

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Default drawing surface size (matches the editor dialog's view box).
pub const DEFAULT_SURFACE: Size = Size::new(400.0, 300.0);

/// Stroke width range offered by the width slider.
pub const MIN_STROKE_WIDTH: f64 = 1.0;
pub const MAX_STROKE_WIDTH: f64 = 20.0;

/// User-selectable drawing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawMode {
    #[default]
    Draw,
    Erase,
    Circle,
    Rectangle,
    Line,
    Text,
}

/// Primitive shape being dragged out, fixed at pointer-down so a mode
/// switch mid-drag cannot change what gets committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeKind {
    Circle,
    Rectangle,
    Line,
}

/// In-progress interaction state. Transient: never part of the committed
/// element sequence.
#[derive(Debug, Clone, Default)]
enum Interaction {
    /// Waiting for a pointer-down.
    #[default]
    Idle,
    /// Freehand stroke in progress (Draw/Erase modes).
    Stroking { builder: SmoothPathBuilder },
    /// Primitive shape drag in progress (Circle/Rectangle/Line modes).
    /// `current` stays `None` until the pointer actually moves; a bare
    /// click commits nothing.
    Shaping {
        kind: ShapeKind,
        anchor: Point,
        current: Option<Point>,
    },
    /// Text mode clicked: an inline text prompt is open at `origin`.
    TextPending { origin: Point },
}

/// A finished drawing handed off for export: the committed elements plus
/// the surface they were drawn on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoodleSheet {
    /// Committed elements in sequence order.
    pub elements: Vec<DrawElement>,
    /// Drawing surface size.
    pub size: Size,
}

/// The doodle editor state machine.
#[derive(Debug, Clone)]
pub struct DoodleEditor {
    /// Drawing surface size, `None` when no drawable target exists.
    surface: Option<Size>,
    mode: DrawMode,
    stroke: Stroke,
    /// Committed elements: the sole source of truth for what is visible.
    elements: Vec<DrawElement>,
    history: History,
    interaction: Interaction,
}

impl Default for DoodleEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl DoodleEditor {
    /// Create an editor with the default drawing surface.
    pub fn new() -> Self {
        Self::with_surface(DEFAULT_SURFACE)
    }

    /// Create an editor with a specific drawing surface size.
    pub fn with_surface(size: Size) -> Self {
        Self {
            surface: Some(size),
            mode: DrawMode::default(),
            stroke: Stroke::default(),
            elements: Vec::new(),
            history: History::new(),
            interaction: Interaction::Idle,
        }
    }

    /// Create an editor with no drawable target.
    ///
    /// All drawing operations still work, but `finish` yields nothing:
    /// a missing surface degrades to a silent no-op rather than an error.
    pub fn detached() -> Self {
        Self {
            surface: None,
            ..Self::new()
        }
    }

    /// Get the current drawing mode.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Switch drawing mode. Does not affect an in-progress interaction.
    pub fn set_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    /// Get the pen settings applied to the next committed element.
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Set the pen color. Committed elements keep the color they were
    /// committed with.
    pub fn set_stroke_color(&mut self, color: SerializableColor) {
        self.stroke.color = color;
    }

    /// Set the pen width, clamped to the slider range.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke.width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }

    /// The committed element list in sequence order.
    pub fn elements(&self) -> &[DrawElement] {
        &self.elements
    }

    /// Check if an interaction (stroke or shape drag) is in progress.
    pub fn is_active(&self) -> bool {
        matches!(
            self.interaction,
            Interaction::Stroking { .. } | Interaction::Shaping { .. }
        )
    }

    /// Where the pending text prompt was opened, if one is open.
    pub fn pending_text_origin(&self) -> Option<Point> {
        match self.interaction {
            Interaction::TextPending { origin } => Some(origin),
            _ => None,
        }
    }

    /// Effective stroke for new elements: erase paints in the surface
    /// background color instead of removing geometry.
    fn effective_stroke(&self) -> Stroke {
        let mut stroke = self.stroke;
        if self.mode == DrawMode::Erase {
            stroke.color = SURFACE_BACKGROUND;
        }
        stroke
    }

    /// Begin an interaction at a surface-local point.
    ///
    /// In `Text` mode this opens the inline text prompt instead of starting
    /// a drag; resolve it with `submit_text` or `cancel_text`.
    pub fn pointer_down(&mut self, point: Point) {
        self.interaction = match self.mode {
            DrawMode::Text => Interaction::TextPending { origin: point },
            DrawMode::Draw | DrawMode::Erase => Interaction::Stroking {
                builder: SmoothPathBuilder::new(point),
            },
            DrawMode::Circle => Interaction::Shaping {
                kind: ShapeKind::Circle,
                anchor: point,
                current: None,
            },
            DrawMode::Rectangle => Interaction::Shaping {
                kind: ShapeKind::Rectangle,
                anchor: point,
                current: None,
            },
            DrawMode::Line => Interaction::Shaping {
                kind: ShapeKind::Line,
                anchor: point,
                current: None,
            },
        };
    }

    /// Update the in-progress preview. No-op outside an interaction.
    pub fn pointer_move(&mut self, point: Point) {
        match &mut self.interaction {
            Interaction::Stroking { builder } => builder.add_point(point),
            Interaction::Shaping { current, .. } => *current = Some(point),
            Interaction::Idle | Interaction::TextPending { .. } => {}
        }
    }

    /// End the interaction, committing the preview as a new element.
    ///
    /// A release outside the surface is delivered the same way; the
    /// in-progress shape is still committed. A pending text prompt is left
    /// open.
    pub fn pointer_up(&mut self) {
        let interaction = std::mem::take(&mut self.interaction);
        let element = match interaction {
            Interaction::Idle => None,
            Interaction::TextPending { origin } => {
                // Text is resolved by submit/cancel, not by pointer-up.
                self.interaction = Interaction::TextPending { origin };
                None
            }
            Interaction::Stroking { builder } => Some(DrawElement::Path {
                path: builder.finish(),
                stroke: self.effective_stroke(),
            }),
            Interaction::Shaping {
                kind,
                anchor,
                current,
            } => current.map(|point| self.make_shape(kind, anchor, point)),
        };

        if let Some(element) = element {
            self.commit(element);
        }
    }

    /// Commit the pending text prompt as a text element.
    ///
    /// Whitespace-only submissions are ignored and the prompt stays open.
    pub fn submit_text(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        if let Interaction::TextPending { origin } = self.interaction {
            self.interaction = Interaction::Idle;
            self.commit(DrawElement::Text {
                origin,
                content: text.to_string(),
                stroke: self.stroke,
            });
        }
    }

    /// Close the pending text prompt without committing anything.
    /// The only interaction that can be aborted without a history entry.
    pub fn cancel_text(&mut self) {
        if matches!(self.interaction, Interaction::TextPending { .. }) {
            self.interaction = Interaction::Idle;
        }
    }

    /// The transient preview element for the in-progress interaction.
    pub fn preview(&self) -> Option<DrawElement> {
        match &self.interaction {
            Interaction::Idle | Interaction::TextPending { .. } => None,
            Interaction::Stroking { builder } => Some(DrawElement::Path {
                path: builder.path().clone(),
                stroke: self.effective_stroke(),
            }),
            Interaction::Shaping {
                kind,
                anchor,
                current,
            } => current.map(|point| self.make_shape(*kind, *anchor, point)),
        }
    }

    /// Restore the previous history snapshot.
    pub fn undo(&mut self) {
        if let Some(elements) = self.history.undo() {
            self.elements = elements;
        }
    }

    /// Restore the next history snapshot.
    pub fn redo(&mut self) {
        if let Some(elements) = self.history.redo() {
            self.elements = elements;
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Clear the canvas. Participates in undo/redo like any other edit.
    /// Drops any in-progress stroke or shape preview; an open text prompt
    /// stays open.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.history.commit(Vec::new());
        if !matches!(self.interaction, Interaction::TextPending { .. }) {
            self.interaction = Interaction::Idle;
        }
    }

    /// Finish the drawing session, yielding the committed elements for
    /// export. Returns `None` when there is no drawable surface; the
    /// editor state is discarded either way.
    pub fn finish(self) -> Option<DoodleSheet> {
        let surface = self.surface?;
        log::debug!(
            "doodle finished: {} elements on {}x{}",
            self.elements.len(),
            surface.width,
            surface.height
        );
        Some(DoodleSheet {
            elements: self.elements,
            size: surface,
        })
    }

    fn make_shape(&self, kind: ShapeKind, anchor: Point, point: Point) -> DrawElement {
        // Shapes always paint in the pen color; erase applies to freehand
        // strokes only.
        let stroke = self.stroke;
        match kind {
            ShapeKind::Circle => DrawElement::Circle {
                center: anchor,
                radius: anchor.distance(point),
                stroke,
            },
            ShapeKind::Rectangle => DrawElement::Rectangle {
                origin: Point::new(anchor.x.min(point.x), anchor.y.min(point.y)),
                width: (point.x - anchor.x).abs(),
                height: (point.y - anchor.y).abs(),
                stroke,
            },
            ShapeKind::Line => DrawElement::Line {
                start: anchor,
                end: point,
                stroke,
            },
        }
    }

    fn commit(&mut self, element: DrawElement) {
        self.elements.push(element);
        self.history.commit(self.elements.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke_through(editor: &mut DoodleEditor, points: &[(f64, f64)]) {
        editor.pointer_down(Point::new(points[0].0, points[0].1));
        for &(x, y) in &points[1..] {
            editor.pointer_move(Point::new(x, y));
        }
        editor.pointer_up();
    }

    #[test]
    fn test_draw_commits_path() {
        let mut editor = DoodleEditor::new();
        stroke_through(&mut editor, &[(0.0, 0.0), (10.0, 0.0), (20.0, 5.0), (30.0, 10.0)]);

        assert_eq!(editor.elements().len(), 1);
        assert!(matches!(editor.elements()[0], DrawElement::Path { .. }));
        assert!(editor.can_undo());
    }

    #[test]
    fn test_preview_not_committed() {
        let mut editor = DoodleEditor::new();
        editor.set_mode(DrawMode::Rectangle);
        editor.pointer_down(Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(50.0, 40.0));

        assert!(editor.preview().is_some());
        assert!(editor.elements().is_empty());

        editor.pointer_up();
        assert!(editor.preview().is_none());
        assert_eq!(editor.elements().len(), 1);
    }

    #[test]
    fn test_shape_click_without_move_commits_nothing() {
        let mut editor = DoodleEditor::new();
        editor.set_mode(DrawMode::Circle);
        editor.pointer_down(Point::new(30.0, 30.0));
        editor.pointer_up();

        assert!(editor.elements().is_empty());
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_erase_paints_background_color() {
        let mut editor = DoodleEditor::new();
        editor.set_mode(DrawMode::Erase);
        stroke_through(&mut editor, &[(0.0, 0.0), (5.0, 5.0)]);

        assert_eq!(editor.elements()[0].stroke().color, SURFACE_BACKGROUND);
        // The pen color itself is untouched.
        assert_eq!(editor.stroke().color, SerializableColor::black());
    }

    #[test]
    fn test_committed_stroke_unaffected_by_later_settings() {
        let mut editor = DoodleEditor::new();
        stroke_through(&mut editor, &[(0.0, 0.0), (5.0, 5.0)]);

        editor.set_stroke_color(PALETTE[2]);
        editor.set_stroke_width(12.0);

        let stroke = editor.elements()[0].stroke();
        assert_eq!(stroke.color, SerializableColor::black());
        assert!((stroke.width - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stroke_width_clamped() {
        let mut editor = DoodleEditor::new();
        editor.set_stroke_width(0.0);
        assert!((editor.stroke().width - MIN_STROKE_WIDTH).abs() < f64::EPSILON);
        editor.set_stroke_width(100.0);
        assert!((editor.stroke().width - MAX_STROKE_WIDTH).abs() < f64::EPSILON);
    }

    #[test]
    fn test_undo_all_then_redo_all() {
        let mut editor = DoodleEditor::new();
        for i in 0..3 {
            stroke_through(&mut editor, &[(i as f64, 0.0), (i as f64, 10.0)]);
        }
        assert_eq!(editor.elements().len(), 3);

        for _ in 0..3 {
            editor.undo();
        }
        assert!(editor.elements().is_empty());

        for _ in 0..3 {
            editor.redo();
        }
        assert_eq!(editor.elements().len(), 3);
    }

    #[test]
    fn test_commit_after_undo_discards_redo() {
        let mut editor = DoodleEditor::new();
        stroke_through(&mut editor, &[(0.0, 0.0), (1.0, 1.0)]);
        stroke_through(&mut editor, &[(2.0, 0.0), (3.0, 1.0)]);

        editor.undo();
        editor.set_mode(DrawMode::Line);
        stroke_through(&mut editor, &[(5.0, 5.0), (9.0, 9.0)]);

        assert_eq!(editor.history.len(), 2);
        assert!(!editor.can_redo());
        editor.redo();
        assert_eq!(editor.elements().len(), 2);
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut editor = DoodleEditor::new();
        for i in 0..3 {
            stroke_through(&mut editor, &[(i as f64, 0.0), (i as f64, 10.0)]);
        }

        editor.clear();
        assert!(editor.elements().is_empty());

        editor.undo();
        assert_eq!(editor.elements().len(), 3);
    }

    #[test]
    fn test_clear_leaves_text_prompt_open() {
        let mut editor = DoodleEditor::new();
        stroke_through(&mut editor, &[(0.0, 0.0), (5.0, 5.0)]);

        editor.set_mode(DrawMode::Text);
        editor.pointer_down(Point::new(25.0, 25.0));
        editor.clear();

        // The canvas empties but the prompt survives and still commits.
        assert!(editor.elements().is_empty());
        assert_eq!(editor.pending_text_origin(), Some(Point::new(25.0, 25.0)));
        editor.submit_text("still here");
        assert_eq!(editor.elements().len(), 1);
    }

    #[test]
    fn test_clear_drops_shape_preview() {
        let mut editor = DoodleEditor::new();
        editor.set_mode(DrawMode::Rectangle);
        editor.pointer_down(Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(50.0, 40.0));
        editor.clear();

        assert!(editor.preview().is_none());
        editor.pointer_up();
        assert!(editor.elements().is_empty());
    }

    #[test]
    fn test_shape_kind_fixed_at_pointer_down() {
        let mut editor = DoodleEditor::new();
        editor.set_mode(DrawMode::Circle);
        editor.pointer_down(Point::new(30.0, 30.0));
        editor.pointer_move(Point::new(60.0, 30.0));

        // Switching modes mid-drag changes neither the preview nor the
        // committed element.
        editor.set_mode(DrawMode::Line);
        assert!(matches!(
            editor.preview(),
            Some(DrawElement::Circle { .. })
        ));
        editor.pointer_up();
        assert!(matches!(editor.elements()[0], DrawElement::Circle { .. }));
    }

    #[test]
    fn test_line_drag_commits_line() {
        let mut editor = DoodleEditor::new();
        editor.set_mode(DrawMode::Line);
        stroke_through(&mut editor, &[(2.0, 3.0), (40.0, 50.0)]);

        match &editor.elements()[0] {
            DrawElement::Line { start, end, .. } => {
                assert_eq!(*start, Point::new(2.0, 3.0));
                assert_eq!(*end, Point::new(40.0, 50.0));
            }
            other => panic!("expected line element, got {other:?}"),
        }
    }

    #[test]
    fn test_text_prompt_flow() {
        let mut editor = DoodleEditor::new();
        editor.set_mode(DrawMode::Text);
        editor.pointer_down(Point::new(40.0, 60.0));
        assert_eq!(editor.pending_text_origin(), Some(Point::new(40.0, 60.0)));

        // Pointer-up does not resolve the prompt.
        editor.pointer_up();
        assert!(editor.pending_text_origin().is_some());

        editor.submit_text("hello");
        assert!(editor.pending_text_origin().is_none());
        assert_eq!(editor.elements().len(), 1);
        match &editor.elements()[0] {
            DrawElement::Text { origin, content, .. } => {
                assert_eq!(*origin, Point::new(40.0, 60.0));
                assert_eq!(content, "hello");
            }
            other => panic!("expected text element, got {other:?}"),
        }
    }

    #[test]
    fn test_text_cancel_leaves_no_history() {
        let mut editor = DoodleEditor::new();
        editor.set_mode(DrawMode::Text);
        editor.pointer_down(Point::new(10.0, 10.0));
        editor.cancel_text();

        assert!(editor.pending_text_origin().is_none());
        assert!(editor.elements().is_empty());
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_whitespace_text_ignored() {
        let mut editor = DoodleEditor::new();
        editor.set_mode(DrawMode::Text);
        editor.pointer_down(Point::new(10.0, 10.0));
        editor.submit_text("   ");

        // Prompt stays open, nothing committed.
        assert!(editor.pending_text_origin().is_some());
        assert!(editor.elements().is_empty());
    }

    #[test]
    fn test_finish_yields_sheet() {
        let mut editor = DoodleEditor::new();
        stroke_through(&mut editor, &[(0.0, 0.0), (5.0, 5.0)]);

        let sheet = editor.finish().unwrap();
        assert_eq!(sheet.elements.len(), 1);
        assert!((sheet.size.width - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_finish_without_surface_is_none() {
        let mut editor = DoodleEditor::detached();
        stroke_through(&mut editor, &[(0.0, 0.0), (5.0, 5.0)]);
        assert!(editor.finish().is_none());
    }
}
