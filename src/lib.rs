//! Screen-state core for a GUI Neovim frontend: cell grids, highlight
//! tables and the redraw event interpreter. Rendering, RPC transport
//! and window management live in the embedding application.

pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod highlight;
pub mod line;
pub mod mode;
pub mod registry;
pub mod state;

pub use cell::{Cell, CellRun};
pub use color::Rgb;
pub use error::GridError;
pub use event::RedrawEvent;
pub use grid::{Grid, GridId, RowId, StyledRun};
pub use highlight::{HighlightTable, HlAttr, HlId};
pub use line::{LegacyScreen, Line, Token};
pub use registry::{GridRegistry, PRIMARY_GRID};
pub use state::{Cursor, Notification, UiState};
