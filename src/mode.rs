//! Editor mode metadata: cursor shape tables from `mode_info_set` and
//! the active mode from `mode_change`.

use crate::highlight::HlId;

/// How the cursor is drawn in a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Block,
    /// Underline bar; `cell_percentage` gives its height.
    Horizontal,
    /// Beam; `cell_percentage` gives its width.
    Vertical,
}

impl CursorShape {
    /// Parses the wire protocol's shape string. Unknown values fall
    /// back to a block cursor.
    pub fn parse(s: &str) -> Self {
        match s {
            "horizontal" => Self::Horizontal,
            "vertical" => Self::Vertical,
            _ => Self::Block,
        }
    }
}

/// Cursor rendering info for one editor mode, as delivered by
/// `mode_info_set`. Fields the backend omits keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModeInfo {
    pub name: String,
    pub short_name: String,
    pub shape: CursorShape,
    /// Percentage of the cell the cursor occupies, for the non-block
    /// shapes.
    pub cell_percentage: u8,
    pub blinkwait: u32,
    pub blinkon: u32,
    pub blinkoff: u32,
    /// Highlight used to draw the cursor; 0 means the default colors
    /// reversed.
    pub attr_id: HlId,
}
