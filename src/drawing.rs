//! Draw commands and the surfaces they are streamed into.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A single line segment produced by one `F`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub start: Vec2,
    pub end: Vec2,
}

impl DrawCommand {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Direction of travel in radians.
    pub fn heading(&self) -> f32 {
        let d = self.end - self.start;
        d.y.atan2(d.x)
    }
}

/// A drawing surface the interpreter streams commands into.
pub trait RenderSink {
    /// Draws one segment.
    fn line(&mut self, command: &DrawCommand);

    /// Wipes everything drawn so far.
    fn clear(&mut self);
}

/// Headless sink: just records the commands.
impl RenderSink for Vec<DrawCommand> {
    fn line(&mut self, command: &DrawCommand) {
        self.push(*command);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

/// Builds a standalone SVG document out of the streamed segments.
///
/// Coordinates are written as-is (y grows downward, like the turtle's default
/// viewport).
#[derive(Clone, Debug)]
pub struct SvgSink {
    width: f32,
    height: f32,
    stroke: String,
    stroke_width: f32,
    path: String,
    segments: usize,
}

impl SvgSink {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            stroke: "black".to_string(),
            stroke_width: 1.0,
            path: String::new(),
            segments: 0,
        }
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f32) -> Self {
        self.stroke = color.into();
        self.stroke_width = width;
        self
    }

    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// Renders the accumulated path into an `<svg>` document.
    pub fn finish(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><path d="{d}" fill="none" stroke="{s}" stroke-width="{sw}"/></svg>"#,
            w = self.width,
            h = self.height,
            d = self.path.trim_end(),
            s = escape_attr(&self.stroke),
            sw = self.stroke_width,
        )
    }
}

/// Escapes a value for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl RenderSink for SvgSink {
    fn line(&mut self, command: &DrawCommand) {
        // Writing into a String cannot fail.
        let _ = write!(
            self.path,
            "M{:.3} {:.3} L{:.3} {:.3} ",
            command.start.x, command.start.y, command.end.x, command.end.y
        );
        self.segments += 1;
    }

    fn clear(&mut self) {
        self.path.clear();
        self.segments = 0;
    }
}
