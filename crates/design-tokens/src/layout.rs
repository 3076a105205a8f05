//! Container breakpoints

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TokenError;

/// Container width preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContainerSize {
    /// Full viewport width
    #[default]
    #[serde(rename = "none")]
    None,
    /// 640px
    #[serde(rename = "sm")]
    Sm,
    /// 768px
    #[serde(rename = "md")]
    Md,
    /// 1024px
    #[serde(rename = "lg")]
    Lg,
    /// 1280px
    #[serde(rename = "xl")]
    Xl,
    /// 1536px
    #[serde(rename = "2xl")]
    Xxl,
}

impl ContainerSize {
    /// All container sizes, viewport-wide first
    pub const ALL: [ContainerSize; 6] = [
        ContainerSize::None,
        ContainerSize::Sm,
        ContainerSize::Md,
        ContainerSize::Lg,
        ContainerSize::Xl,
        ContainerSize::Xxl,
    ];

    /// Breakpoint key
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerSize::None => "none",
            ContainerSize::Sm => "sm",
            ContainerSize::Md => "md",
            ContainerSize::Lg => "lg",
            ContainerSize::Xl => "xl",
            ContainerSize::Xxl => "2xl",
        }
    }

    /// Fixed width in pixels, or `None` when the container spans the viewport
    pub fn fixed_width(&self) -> Option<f64> {
        match self {
            ContainerSize::None => None,
            ContainerSize::Sm => Some(640.0),
            ContainerSize::Md => Some(768.0),
            ContainerSize::Lg => Some(1024.0),
            ContainerSize::Xl => Some(1280.0),
            ContainerSize::Xxl => Some(1536.0),
        }
    }
}

impl FromStr for ContainerSize {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| TokenError::UnknownContainerSize(s.to_string()))
    }
}
