//! Recording surface
//!
//! Captures draw calls instead of executing them. Used by the headless
//! native run and by tests.

use glam::Vec2;

use super::surface::Surface;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: Vec2,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: String,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
}

/// Draw calls since the last clear, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, size: Vec2) {
        // Earlier frames are invisible once cleared
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { size });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: color.to_string(),
            width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }
}
