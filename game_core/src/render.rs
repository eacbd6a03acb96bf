use serde::Deserialize;

/// Named drawing colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Gray,
    Yellow,
    Green,
    Blue,
    Red,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

// Abstract drawing surface supplied by the host.
// Calls are synchronous and always succeed.
pub trait GameLib {
    /// Select the color used by subsequent fill/text calls
    fn set_color(&mut self, color: Color);
    /// Fill an axis-aligned rectangle given its center and size
    fn fill_rect(&mut self, cx: f64, cy: f64, width: f64, height: f64);
    /// Draw a line of text at height `y`, aligned to one side of the field
    fn draw_text(&mut self, text: &str, y: f64, align: Align);
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetColor(Color),
    FillRect {
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
    },
    Text {
        text: String,
        y: f64,
        align: Align,
    },
}

/// `GameLib` that records every call instead of drawing
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded calls onto another surface
    pub fn replay(&self, lib: &mut impl GameLib) {
        for command in &self.commands {
            match command {
                DrawCommand::SetColor(color) => lib.set_color(*color),
                DrawCommand::FillRect {
                    cx,
                    cy,
                    width,
                    height,
                } => lib.fill_rect(*cx, *cy, *width, *height),
                DrawCommand::Text { text, y, align } => lib.draw_text(text, *y, *align),
            }
        }
    }

    /// Text lines drawn so far, with the color active when each was drawn
    pub fn texts(&self) -> Vec<(Option<Color>, &str, Align)> {
        let mut color = None;
        let mut out = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::SetColor(c) => color = Some(*c),
                DrawCommand::Text { text, align, .. } => out.push((color, text.as_str(), *align)),
                DrawCommand::FillRect { .. } => {}
            }
        }
        out
    }
}

impl GameLib for CommandBuffer {
    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rect(&mut self, cx: f64, cy: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            cx,
            cy,
            width,
            height,
        });
    }

    fn draw_text(&mut self, text: &str, y: f64, align: Align) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            y,
            align,
        });
    }
}
