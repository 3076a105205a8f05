//! Gradient direction tokens

use serde::Serialize;

/// Compass-style gradient orientation, spaced 45 degrees apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    /// Towards the right (0°)
    ToR,
    /// Towards the top right (45°)
    ToTr,
    /// Towards the top (90°)
    ToT,
    /// Towards the top left (135°)
    ToTl,
    /// Towards the left (180°)
    ToL,
    /// Towards the bottom left (225°)
    ToBl,
    /// Towards the bottom (270°)
    ToB,
    /// Towards the bottom right (315°)
    ToBr,
}

impl GradientDirection {
    /// All directions, counter-clockwise from the right
    pub const ALL: [GradientDirection; 8] = [
        GradientDirection::ToR,
        GradientDirection::ToTr,
        GradientDirection::ToT,
        GradientDirection::ToTl,
        GradientDirection::ToL,
        GradientDirection::ToBl,
        GradientDirection::ToB,
        GradientDirection::ToBr,
    ];

    /// Token name as used in style names
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientDirection::ToR => "to-r",
            GradientDirection::ToTr => "to-tr",
            GradientDirection::ToT => "to-t",
            GradientDirection::ToTl => "to-tl",
            GradientDirection::ToL => "to-l",
            GradientDirection::ToBl => "to-bl",
            GradientDirection::ToB => "to-b",
            GradientDirection::ToBr => "to-br",
        }
    }

    /// Rotation angle in degrees
    pub fn angle_degrees(&self) -> f64 {
        (*self as u8) as f64 * 45.0
    }
}

impl std::fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
