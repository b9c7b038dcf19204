use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Screen rotation in degrees, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// A quarter turn swaps width and height, which no animation can cover.
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Derived display flags of the active window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFlags {
    pub fullscreen: bool,
    pub fullscreen_layout: bool,
}

/// Open/close transition handed to a window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Transition {
    /// No animation at all.
    Immediate,
    /// Opening side of an app-to-app switch.
    Invoked,
    /// Closing side of an app-to-app switch.
    Invoking,
    Named(String),
}

impl Transition {
    pub fn as_str(&self) -> &str {
        match self {
            Transition::Immediate => "immediate",
            Transition::Invoked => "invoked",
            Transition::Invoking => "invoking",
            Transition::Named(name) => name,
        }
    }
}

impl From<&str> for Transition {
    fn from(name: &str) -> Self {
        match name {
            "immediate" => Transition::Immediate,
            "invoked" => Transition::Invoked,
            "invoking" => Transition::Invoking,
            other => Transition::Named(other.to_string()),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
