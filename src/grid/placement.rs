//! Grid placement metadata: where a grid sits on the screen.
//!
//! Pure state transitions driven by the `win_*` events. Exactly one
//! placement mode is active at a time; hiding is orthogonal metadata and
//! closing is modeled by removal from the registry.

use crate::error::GridError;
use crate::grid::{Grid, GridId};

/// Handle of the editor window a grid is bound to. Opaque to this crate.
pub type WinId = u64;

/// Corner of a floating grid that is pinned to the anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Anchor {
    /// Parses the wire protocol's anchor string. Unknown values fall back
    /// to `NorthWest`.
    pub fn parse(s: &str) -> Self {
        match s {
            "NE" => Self::NorthEast,
            "SW" => Self::SouthWest,
            "SE" => Self::SouthEast,
            _ => Self::NorthWest,
        }
    }
}

/// Advisory scroll state for auxiliary UI (scrollbars); never
/// authoritative for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub topline: u64,
    pub botline: u64,
    pub curline: u64,
    pub curcol: u64,
}

// No Eq: the floating variant carries fractional cell offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Placement {
    /// Created but not yet attached to the screen.
    #[default]
    Unplaced,
    /// Positioned at a fixed cell offset within the outer screen grid.
    Docked { win: WinId, row: usize, col: usize },
    /// Anchored to a cell of another grid, overlapping it.
    Floating {
        win: WinId,
        anchor: Anchor,
        anchor_grid: GridId,
        row: f64,
        col: f64,
        focusable: bool,
    },
    /// Rendered in its own toolkit window, outside the screen grid.
    External { win: WinId },
}

impl Grid {
    /// Docks the grid at `(row, col)` of the screen and resizes it.
    pub fn set_pos(
        &mut self,
        win: WinId,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    ) -> Result<(), GridError> {
        self.placement = Placement::Docked { win, row, col };
        self.hidden = false;
        self.resize(width, height)
    }

    /// Converts the grid to a float anchored to `anchor_grid`.
    pub fn set_float_pos(
        &mut self,
        win: WinId,
        anchor: Anchor,
        anchor_grid: GridId,
        row: f64,
        col: f64,
        focusable: bool,
    ) {
        self.placement = Placement::Floating {
            win,
            anchor,
            anchor_grid,
            row,
            col,
            focusable,
        };
        self.hidden = false;
    }

    /// Detaches the grid into an external toolkit window.
    pub fn set_external_pos(&mut self, win: WinId) {
        self.placement = Placement::External { win };
        self.hidden = false;
    }

    /// Keeps the grid alive but off the screen.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}
