//! Block scroll: shifting a sub-rectangle of the grid vertically.

use crate::error::GridError;

use super::Grid;

impl Grid {
    /// Shifts the `[top, bot) x [left, right)` sub-rectangle vertically by
    /// `rows`. Positive `rows` moves content toward row 0; negative moves
    /// it toward the bottom. Every destination row touched gets a freshly
    /// minted version id, including rows whose source fell outside the
    /// live grid — those keep their old content (the backend follows up
    /// with `grid_line` writes for the scrolled-in area) but are flagged
    /// dirty so the renderer repaints them.
    ///
    /// Horizontal scroll (`cols != 0`) is accepted by the wire protocol
    /// but not applied anywhere; it fails with
    /// [`GridError::UnsupportedScroll`].
    pub fn scroll(
        &mut self,
        top: usize,
        bot: usize,
        left: usize,
        right: usize,
        rows: i64,
        cols: i64,
    ) -> Result<(), GridError> {
        if cols != 0 {
            return Err(GridError::UnsupportedScroll { cols });
        }

        let right = right.min(self.width());
        if top >= bot || left >= right || rows == 0 {
            return Ok(());
        }

        if rows > 0 {
            let shift = rows as usize;
            // Content moves up: walk sources top-down so a source row is
            // read before it is overwritten as someone else's destination.
            for source in top..bot {
                let Some(dest) = source.checked_sub(shift) else {
                    continue;
                };
                if dest >= self.height() {
                    continue;
                }
                if source >= self.height() {
                    // Scrolled in from past the bottom edge: no content to
                    // move, but the row must be repainted.
                    self.touch_row(dest);
                    continue;
                }
                let span = self.line_span(source, left, right);
                self.write_span(dest, left, &span);
            }
        } else {
            let shift = rows.unsigned_abs() as usize;
            // Content moves down: walk sources bottom-up for the same
            // reason, mirrored. A source above row 0 cannot occur here,
            // so there is no dirty-only case in this direction.
            for source in (top..bot.min(self.height())).rev() {
                let dest = source + shift;
                if dest >= self.height() {
                    continue;
                }
                let span = self.line_span(source, left, right);
                self.write_span(dest, left, &span);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cell::CellRun;
    use crate::error::GridError;
    use crate::grid::Grid;

    /// Fills each row of a fresh grid with its row index as a digit.
    fn marked_grid(width: usize, height: usize) -> Grid {
        let mut grid = Grid::with_size(1, width, height).expect("resize");
        for row in 0..height {
            let marker = char::from_digit(row as u32, 10).expect("digit");
            grid.set_cells(row, 0, &[CellRun::new(marker.to_string()).with_repeat(width)])
                .expect("set_cells");
        }
        grid
    }

    #[test]
    fn scroll_up_shifts_rows_toward_zero() {
        let mut grid = marked_grid(4, 5);
        grid.scroll(0, 5, 0, 4, 1, 0).expect("scroll");
        // Row r now shows pre-scroll row r + 1.
        for row in 0..4 {
            let expected = char::from_digit(row as u32 + 1, 10).expect("digit");
            assert_eq!(
                grid.line_text(row).expect("text"),
                expected.to_string().repeat(4)
            );
        }
        // The bottom row keeps stale content until grid_line refills it.
        assert_eq!(grid.line_text(4).expect("text"), "4444");
    }

    #[test]
    fn scroll_down_shifts_rows_toward_bottom() {
        let mut grid = marked_grid(4, 5);
        grid.scroll(0, 5, 0, 4, -2, 0).expect("scroll");
        for row in 2..5 {
            let expected = char::from_digit(row as u32 - 2, 10).expect("digit");
            assert_eq!(
                grid.line_text(row).expect("text"),
                expected.to_string().repeat(4)
            );
        }
    }

    #[test]
    fn scroll_respects_column_span() {
        let mut grid = marked_grid(6, 3);
        grid.scroll(0, 3, 2, 4, 1, 0).expect("scroll");
        // Only columns [2, 4) moved; the flanks stayed.
        assert_eq!(grid.line_text(0).expect("text"), "001100");
        assert_eq!(grid.line_text(1).expect("text"), "112211");
    }

    #[test]
    fn scroll_region_only() {
        let mut grid = marked_grid(3, 6);
        grid.scroll(2, 5, 0, 3, 1, 0).expect("scroll");
        assert_eq!(grid.line_text(0).expect("text"), "000");
        assert_eq!(grid.line_text(2).expect("text"), "333");
        assert_eq!(grid.line_text(3).expect("text"), "444");
        assert_eq!(grid.line_text(5).expect("text"), "555");
    }

    #[test]
    fn scroll_mints_fresh_ids_on_destinations() {
        let mut grid = marked_grid(4, 4);
        let before: Vec<_> = grid.row_ids().to_vec();
        grid.scroll(0, 4, 0, 4, 1, 0).expect("scroll");
        // Destinations 0..3 changed; row 3 had no in-range destination
        // role but was a source only, so its id is untouched.
        for row in 0..3 {
            assert_ne!(grid.row_id(row).expect("id"), before[row]);
        }
        assert_eq!(grid.row_id(3).expect("id"), before[3]);
    }

    #[test]
    fn scroll_out_of_range_source_marks_row_dirty() {
        let mut grid = marked_grid(2, 3);
        let before = grid.row_id(1).expect("id");
        // bot beyond the grid: sources >= height only dirty their dest.
        grid.scroll(0, 5, 0, 2, 2, 0).expect("scroll");
        assert_ne!(grid.row_id(1).expect("id"), before);
        // Content of the dirty-only row is untouched.
        assert_eq!(grid.line_text(1).expect("text"), "11");
    }

    #[test]
    fn horizontal_scroll_is_unsupported() {
        let mut grid = marked_grid(4, 4);
        assert!(matches!(
            grid.scroll(0, 4, 0, 4, 0, 1),
            Err(GridError::UnsupportedScroll { cols: 1 })
        ));
    }

    #[test]
    fn empty_region_is_a_no_op() {
        let mut grid = marked_grid(4, 4);
        let before: Vec<_> = grid.row_ids().to_vec();
        grid.scroll(2, 2, 0, 4, 1, 0).expect("scroll");
        grid.scroll(0, 4, 3, 3, 1, 0).expect("scroll");
        assert_eq!(grid.row_ids(), &before[..]);
    }
}
