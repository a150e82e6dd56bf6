//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::widget::{Canvas, Transform2D};
use crate::{Color, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Each recorded primitive is wrapped in the transform and clip that were
/// active when it was drawn, so tests can check what ended up where.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to a renderer)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Transform2D::IDENTITY)
    }

    /// Get the current clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    /// Commands whose primitive is a filled polygon.
    pub fn polygons(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c.leaf(), DrawCommand::Polygon { .. }))
    }

    /// Commands whose primitive is a stroked path.
    pub fn paths(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c.leaf(), DrawCommand::Path { .. }))
    }

    fn record(&mut self, command: DrawCommand) {
        let mut command = command;
        if let Some(transform) = self.transform_stack.last() {
            command = command.with_transform(*transform);
        }
        if let Some(clip) = self.current_clip() {
            command = command.with_clip(clip);
        }
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.record(DrawCommand::polygon(points.to_vec(), color));
    }

    fn draw_path(&mut self, points: &[Point], color: Color, width: f32) {
        self.record(DrawCommand::polyline(
            points.to_vec(),
            StrokeStyle { color, width },
        ));
    }

    fn push_clip(&mut self, rect: Rect) {
        // Nested clips intersect; an empty intersection clips everything.
        let clip = match self.current_clip() {
            Some(outer) => outer
                .intersection(&rect)
                .unwrap_or_else(|| rect.with_width(0.0)),
            None => rect,
        };
        self.clip_stack.push(clip);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let combined = transform.then(&self.current_transform());
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}
