//! Page coordinates

use serde::{Deserialize, Serialize};

/// A point in document units (PDF points, origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// This point moved down by `dy`
    pub fn below(self, dy: f32) -> Self {
        Self::new(self.x, self.y - dy)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
