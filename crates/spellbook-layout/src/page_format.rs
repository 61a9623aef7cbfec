//! Physical page descriptions
//!
//! Two canonical formats exist (the compact A5 binder and US Letter),
//! but the layout engine works with any descriptor whose content area
//! is positive.

use crate::types::{LayoutError, Result};

/// Page margins in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMargins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl PageMargins {
    /// Uniform margins on all sides.
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top: margin_mm,
            bottom: margin_mm,
            left: margin_mm,
            right: margin_mm,
        }
    }
}

/// A physical page format. All dimensions in millimeters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageFormat {
    /// Short identifier used in output filenames ("a5", "letter").
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub width: f32,
    pub height: f32,
    pub margins: PageMargins,
}

impl PageFormat {
    /// Compact A5 binder format (148×210mm, 12mm margins).
    pub fn a5() -> Self {
        Self {
            id: "a5".to_string(),
            name: "A5 Binder".to_string(),
            display_name: "A5 Binder (148×210mm)".to_string(),
            width: 148.0,
            height: 210.0,
            margins: PageMargins::uniform(12.0),
        }
    }

    /// US Letter format (8.5×11in, 15mm margins).
    pub fn letter() -> Self {
        Self {
            id: "letter".to_string(),
            name: "US Letter".to_string(),
            display_name: "US Letter (8.5×11in)".to_string(),
            width: 215.9,
            height: 279.4,
            margins: PageMargins::uniform(15.0),
        }
    }

    /// Horizontal extent available to content.
    pub fn content_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }

    /// Vertical extent available to content.
    pub fn content_height(&self) -> f32 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// Y coordinate of the bottom content boundary (top-down axis).
    pub fn bottom_boundary(&self) -> f32 {
        self.height - self.margins.bottom
    }

    /// Layout over a format with a non-positive content area is
    /// undefined; reject it before any work starts.
    pub fn validate(&self) -> Result<()> {
        if self.content_width() <= 0.0 || self.content_height() <= 0.0 {
            return Err(LayoutError::Format(format!(
                "{}: margins leave no content area ({}×{}mm page)",
                self.id, self.width, self.height
            )));
        }
        Ok(())
    }
}
