//! The cell grid: a flat row-major buffer of styled cells with per-row
//! version ids for change detection.
//!
//! Each grid belongs to one editor window (or the global screen for grid
//! 1) and is mutated only by the redraw interpreter. The renderer reads
//! rows back between batches and compares [`Grid::row_id`] values against
//! the ids it last painted; an unchanged id means the row can be skipped.

pub mod placement;
mod scroll;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::cell::{Cell, CellRun};
use crate::error::GridError;
use crate::highlight::HlId;

use placement::{Placement, Viewport};

/// Identifier of a grid. Grid `1` is the primary screen grid.
pub type GridId = u64;

/// Opaque per-row version identifier. Ids are minted from one process-wide
/// counter so two rows never compare equal after unrelated changes.
pub type RowId = u64;

/// Upper bound on `width * height`. Dimensions are unsigned so a negative
/// size is unrepresentable; this is the remaining invalid-shape case.
const MAX_CELLS: usize = u32::MAX as usize;

static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(1);

fn next_row_id() -> RowId {
    NEXT_ROW_ID.fetch_add(1, Ordering::Relaxed)
}

/// A maximal run of horizontally adjacent cells sharing one highlight id,
/// reconstructed for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Column of the first cell in the run.
    pub col: usize,
    pub text: String,
    pub hl: Option<HlId>,
}

#[derive(Debug, Clone)]
pub struct Grid {
    pub id: GridId,
    width: usize,
    height: usize,
    /// Row-major: `index = col + row * width`.
    buffer: Vec<Cell>,
    row_ids: Vec<RowId>,
    pub placement: Placement,
    pub viewport: Viewport,
    pub hidden: bool,
}

impl Grid {
    /// Creates an empty zero-sized grid. Lazily created grids stay this
    /// way until the first `grid_resize` arrives.
    pub fn new(id: GridId) -> Self {
        Self {
            id,
            width: 0,
            height: 0,
            buffer: Vec::new(),
            row_ids: Vec::new(),
            placement: Placement::Unplaced,
            viewport: Viewport::default(),
            hidden: false,
        }
    }

    /// Creates a grid with an initial size.
    pub fn with_size(id: GridId, width: usize, height: usize) -> Result<Self, GridError> {
        let mut grid = Self::new(id);
        grid.resize(width, height)?;
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The version id of a row, or `None` past the end of the grid.
    pub fn row_id(&self, row: usize) -> Option<RowId> {
        self.row_ids.get(row).copied()
    }

    /// All row version ids, one per row.
    pub fn row_ids(&self) -> &[RowId] {
        &self.row_ids
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        col + row * self.width
    }

    /// Reallocates the buffer to the new shape. Old content is copied into
    /// the overlapping top-left rectangle; everything else becomes the
    /// default blank cell. All row ids are re-minted since the shape
    /// changed. Zero dimensions are allowed.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        let cells = width
            .checked_mul(height)
            .filter(|&n| n <= MAX_CELLS)
            .ok_or(GridError::InvalidDimension { width, height })?;

        let previous = std::mem::replace(&mut self.buffer, vec![Cell::default(); cells]);
        let previous_width = self.width;
        self.width = width;
        self.height = height;
        self.row_ids = (0..height).map(|_| next_row_id()).collect();

        if previous_width > 0 {
            for (i, cell) in previous.into_iter().enumerate() {
                let row = i / previous_width;
                let col = i % previous_width;
                if row >= height {
                    break;
                }
                if col >= width {
                    continue;
                }
                self.buffer[col + row * width] = cell;
            }
        }
        Ok(())
    }

    /// Writes a sequence of cell runs starting at `(row, col)`, left to
    /// right within the row. A run without a highlight id inherits the
    /// previous run's id (carry-forward); a run without a repeat count
    /// writes one cell. Never wraps to the next row.
    pub fn set_cells(&mut self, row: usize, col: usize, runs: &[CellRun]) -> Result<(), GridError> {
        if row >= self.height || col >= self.width {
            return Err(self.out_of_bounds(row, col));
        }

        let total: usize = runs.iter().map(|r| r.repeat.unwrap_or(1)).sum();
        if col + total > self.width {
            return Err(GridError::MalformedCells {
                start: self.index_of(row, col),
                len: total,
                buffer: self.buffer.len(),
            });
        }

        let mut index = self.index_of(row, col);
        let mut last_hl = None;
        for run in runs {
            let hl = run.hl.or(last_hl);
            let cell = Cell::from_text(&run.text, hl);
            for _ in 0..run.repeat.unwrap_or(1) {
                self.buffer[index] = cell.clone();
                index += 1;
            }
            last_hl = hl;
        }
        self.row_ids[row] = next_row_id();
        Ok(())
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        if row >= self.height || col >= self.width {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(&self.buffer[self.index_of(row, col)])
    }

    pub fn get_char(&self, row: usize, col: usize) -> Result<char, GridError> {
        self.get_cell(row, col).map(|c| c.ch)
    }

    /// The full `width`-length slice of cells for one row.
    pub fn get_line(&self, row: usize) -> Result<&[Cell], GridError> {
        if row >= self.height {
            return Err(self.out_of_bounds(row, 0));
        }
        let start = row * self.width;
        Ok(&self.buffer[start..start + self.width])
    }

    /// The row's display text: every cell's glyph in column order.
    pub fn line_text(&self, row: usize) -> Result<String, GridError> {
        let line = self.get_line(row)?;
        let mut text = String::with_capacity(self.width);
        for cell in line {
            text.push(cell.ch);
            text.extend(cell.zerowidth());
        }
        Ok(text)
    }

    /// Reconstructs the row as maximal equally-styled runs, the shape the
    /// renderer paints in one text-layout call per run.
    pub fn line_runs(&self, row: usize) -> Result<Vec<StyledRun>, GridError> {
        let line = self.get_line(row)?;
        let mut runs: Vec<StyledRun> = Vec::new();
        for (col, cell) in line.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.hl == cell.hl => {
                    run.text.push(cell.ch);
                    run.text.extend(cell.zerowidth());
                }
                _ => runs.push(StyledRun {
                    col,
                    text: cell.text(),
                    hl: cell.hl,
                }),
            }
        }
        Ok(runs)
    }

    /// Resets every cell to the default blank cell and re-mints all row
    /// ids (a redraw-all).
    pub fn clear(&mut self) {
        self.buffer.fill(Cell::default());
        for id in &mut self.row_ids {
            *id = next_row_id();
        }
    }

    /// Copies one row's `[left, right)` span out of the buffer. Used by
    /// the scroll implementation; bounds are the caller's responsibility.
    pub(crate) fn line_span(&self, row: usize, left: usize, right: usize) -> Vec<Cell> {
        let start = self.index_of(row, left);
        self.buffer[start..start + (right - left)].to_vec()
    }

    /// Writes cells into one row's span and re-mints its id. Used by the
    /// scroll implementation; bounds are the caller's responsibility.
    pub(crate) fn write_span(&mut self, row: usize, left: usize, cells: &[Cell]) {
        let start = self.index_of(row, left);
        self.buffer[start..start + cells.len()].clone_from_slice(cells);
        self.row_ids[row] = next_row_id();
    }

    /// Re-mints one row's id without touching its content. Used for rows
    /// whose scroll source fell outside the grid: the row is dirty but no
    /// replacement content exists yet.
    pub(crate) fn touch_row(&mut self, row: usize) {
        self.row_ids[row] = next_row_id();
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> GridError {
        GridError::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for Grid {
    /// Debug rendering: one bracketed line of glyphs per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            write!(f, "{row:<2}:[")?;
            let start = row * self.width;
            for cell in &self.buffer[start..start + self.width] {
                write!(f, "{}", cell.ch)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
