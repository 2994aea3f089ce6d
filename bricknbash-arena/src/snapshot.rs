//! Read-only view of a world for drawing.
use crate::{geometry::Rect, world::World};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-only copy of the rectangles of a world, for drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub width: i32,
    pub height: i32,
    pub obstacles: Vec<Rect>,
    pub goal: Rect,
    pub ball: Rect,
}

impl From<&World> for ArenaSnapshot {
    fn from(world: &World) -> Self {
        Self {
            width: world.width(),
            height: world.height(),
            obstacles: world.obstacles().to_vec(),
            goal: *world.goal(),
            ball: *world.ball(),
        }
    }
}

impl fmt::Display for ArenaSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ball ({}, {}) goal ({}, {}) obstacles [",
            self.ball.x, self.ball.y, self.goal.x, self.goal.y
        )?;
        for (i, o) in self.obstacles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {}, {}x{})", o.x, o.y, o.width, o.height)?;
        }
        write!(f, "]")
    }
}
