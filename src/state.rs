//! Position tracking
//!
//! Last emitted value of each axis, kept as source text so coordinates are
//! re-emitted exactly as the slicer wrote them.

use std::fmt;

/// A tracked coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Attribute letter used for this axis in both dialects
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

/// Position and tool state carried across a translation run
#[derive(Debug, Clone, PartialEq)]
pub struct PositionState {
    x: String,
    y: String,
    z: String,
    /// Selected tool head
    pub tool: i32,
    /// 1 while the laser is on
    pub run: i32,
}

impl Default for PositionState {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionState {
    pub fn new() -> Self {
        Self {
            x: "0".to_string(),
            y: "0".to_string(),
            z: "0".to_string(),
            tool: 0,
            run: 0,
        }
    }

    /// Reset all three axes to the origin
    pub fn home(&mut self) {
        for axis in Axis::ALL {
            self.set(axis, "0");
        }
    }

    pub fn get(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: &str) {
        let slot = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        };
        slot.clear();
        slot.push_str(value);
    }

    /// Value to emit for `axis`: the supplied one (which becomes the new
    /// carried value) or the last one emitted.
    pub fn resolve<'a>(&'a mut self, axis: Axis, supplied: Option<&str>) -> &'a str {
        if let Some(value) = supplied {
            self.set(axis, value);
        }
        self.get(axis)
    }
}

impl fmt::Display for PositionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Current position X:{}, Y:{}, Z:{}, ",
            self.x, self.y, self.z
        )?;
        write!(f, "Toolstate tool:{}, running:{}", self.tool, self.run)
    }
}
