//! Error taxonomy for drawing primitives and panel creation.
//!
//! Both kinds describe a violated precondition of one call. The toolkit
//! catches them where the call is made and prints them to the log line; the
//! `try_*` entry points hand them to the caller instead.

use thiserror::Error;

/// A drawing primitive was asked to write outside the grid, or was too small
/// to be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("{primitive}: origin point ({x}, {y}) is beyond buffer bounds")]
    Origin {
        primitive: &'static str,
        x: u16,
        y: u16,
    },
    #[error("{primitive}: {axis} extent {end} exceeds the grid limit {limit}")]
    Extent {
        primitive: &'static str,
        axis: Axis,
        end: u32,
        limit: u16,
    },
    #[error("{primitive}: length {len} is below the minimum of {min}")]
    TooSmall {
        primitive: &'static str,
        len: u16,
        min: u16,
    },
}

impl GeometryError {
    pub fn primitive(&self) -> &'static str {
        match self {
            GeometryError::Origin { primitive, .. }
            | GeometryError::Extent { primitive, .. }
            | GeometryError::TooSmall { primitive, .. } => primitive,
        }
    }
}

/// A panel region does not fit the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("panel origin ({left}, {top}) is beyond buffer bounds")]
    Origin { left: u16, top: u16 },
    #[error("panel is too wide: right edge {end} exceeds {limit}")]
    TooWide { end: u32, limit: u16 },
    #[error("panel is too tall: bottom edge {end} exceeds {limit}")]
    TooTall { end: u32, limit: u16 },
    #[error("panel {width}x{height} is smaller than the minimum 2x1")]
    TooSmall { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_primitive() {
        let e = GeometryError::Extent {
            primitive: "box",
            axis: Axis::Horizontal,
            end: 131,
            limit: 128,
        };
        assert_eq!(e.primitive(), "box");
        assert_eq!(
            e.to_string(),
            "box: horizontal extent 131 exceeds the grid limit 128"
        );
    }

    #[test]
    fn panel_extent_message_says_which_way() {
        let wide = PanelError::TooWide { end: 130, limit: 128 };
        assert!(wide.to_string().starts_with("panel is too wide"));
        let tall = PanelError::TooTall { end: 50, limit: 48 };
        assert!(tall.to_string().starts_with("panel is too tall"));
    }
}
