//! Drawing surface abstraction

use glam::Vec2;

/// The three primitives a frame is made of. Colors are CSS color strings.
pub trait Surface {
    /// Clear the region from the origin to `size`
    fn clear(&mut self, size: Vec2);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
}
