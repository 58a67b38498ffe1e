//! UI state: everything the redraw event stream mutates.
//!
//! [`UiState`] owns the grid registry, the highlight table, the cursor
//! and the mode/presentation flags, and interprets decoded
//! [`RedrawEvent`]s against them. Events are applied strictly in
//! emission order; a malformed event is logged and skipped so the rest
//! of the batch, including the terminating flush, still lands. Model
//! changes are surfaced as a queue of [`Notification`]s the embedder
//! drains after each batch.

use std::collections::VecDeque;
use std::ops::Range;

use crate::error::GridError;
use crate::event::RedrawEvent;
use crate::grid::{Grid, GridId};
use crate::highlight::HighlightTable;
use crate::mode::ModeInfo;
use crate::registry::{GridRegistry, PRIMARY_GRID};

/// The single editor cursor. Only one grid holds it at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub grid: GridId,
    pub row: usize,
    pub col: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            grid: PRIMARY_GRID,
            row: 0,
            col: 0,
        }
    }
}

/// Model changes surfaced to the embedder. Row content changes carry
/// the affected row range; the renderer can also diff row version ids
/// at flush instead of tracking these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    GridCreated(GridId),
    GridResized(GridId),
    RowsChanged { grid: GridId, rows: Range<usize> },
    GridClosed(GridId),
    GridHidden(GridId),
    PlacementChanged(GridId),
    ViewportChanged(GridId),
    CursorMoved,
    ModeChanged,
    DefaultColorsChanged,
    BusyChanged,
    MouseChanged,
    TitleChanged,
    IconChanged,
    FocusChanged,
    Bell { visual: bool },
    Flush,
}

#[derive(Debug)]
pub struct UiState {
    pub registry: GridRegistry,
    pub highlights: HighlightTable,
    pub cursor: Cursor,
    pub mode_infos: Vec<ModeInfo>,
    pub mode_idx: usize,
    pub mode_name: String,
    pub cursor_style_enabled: bool,
    pub busy: bool,
    pub mouse_enabled: bool,
    pub title: String,
    pub icon: String,
    pub focused: bool,
    notifications: VecDeque<Notification>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            registry: GridRegistry::new(),
            highlights: HighlightTable::new(),
            cursor: Cursor::default(),
            mode_infos: Vec::new(),
            mode_idx: 0,
            mode_name: String::new(),
            cursor_style_enabled: false,
            busy: false,
            mouse_enabled: true,
            title: String::new(),
            icon: String::new(),
            focused: true,
            notifications: VecDeque::new(),
        }
    }

    /// Applies a decoded redraw batch in order. Events that fail are
    /// logged and skipped; the batch never aborts.
    pub fn apply_batch<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = RedrawEvent>,
    {
        for event in events {
            let name = event.name().to_owned();
            if let Err(err) = self.apply(event) {
                log::warn!("skipping {name} event: {err}");
            }
        }
    }

    /// Applies one event. Errors indicate a protocol mismatch with the
    /// backend for that event only; the model stays consistent.
    pub fn apply(&mut self, event: RedrawEvent) -> Result<(), GridError> {
        match event {
            RedrawEvent::GridResize {
                grid,
                width,
                height,
            } => {
                self.grid_mut(grid).resize(width, height)?;
                self.notify(Notification::GridResized(grid));
            }
            RedrawEvent::GridLine {
                grid,
                row,
                col_start,
                cells,
            } => {
                self.grid_mut(grid).set_cells(row, col_start, &cells)?;
                self.notify(Notification::RowsChanged {
                    grid,
                    rows: row..row + 1,
                });
            }
            RedrawEvent::GridClear { grid } => {
                let g = self.grid_mut(grid);
                g.clear();
                let height = g.height();
                self.notify(Notification::RowsChanged {
                    grid,
                    rows: 0..height,
                });
            }
            RedrawEvent::GridDestroy { grid } | RedrawEvent::WinClose { grid } => {
                if self.registry.close(grid).is_some() {
                    self.notify(Notification::GridClosed(grid));
                }
            }
            RedrawEvent::GridCursorGoto { grid, row, col } => {
                self.cursor = Cursor { grid, row, col };
                self.notify(Notification::CursorMoved);
            }
            RedrawEvent::GridScroll {
                grid,
                top,
                bot,
                left,
                right,
                rows,
                cols,
            } => {
                let g = self.grid_mut(grid);
                g.scroll(top, bot, left, right, rows, cols)?;
                let height = g.height();
                let shift = rows.unsigned_abs() as usize;
                // Destination rows, clamped to the live grid.
                let (start, end) = if rows > 0 {
                    (
                        top.saturating_sub(shift),
                        bot.saturating_sub(shift).min(height),
                    )
                } else {
                    ((top + shift).min(height), (bot + shift).min(height))
                };
                if start < end {
                    self.notify(Notification::RowsChanged {
                        grid,
                        rows: start..end,
                    });
                }
            }
            RedrawEvent::WinPos {
                grid,
                win,
                row,
                col,
                width,
                height,
            } => {
                self.grid_mut(grid).set_pos(win, row, col, width, height)?;
                self.notify(Notification::GridResized(grid));
            }
            RedrawEvent::WinFloatPos {
                grid,
                win,
                anchor,
                anchor_grid,
                row,
                col,
                focusable,
            } => {
                self.grid_mut(grid)
                    .set_float_pos(win, anchor, anchor_grid, row, col, focusable);
                self.notify(Notification::PlacementChanged(grid));
            }
            RedrawEvent::WinExternalPos { grid, win } => {
                self.grid_mut(grid).set_external_pos(win);
                self.notify(Notification::PlacementChanged(grid));
            }
            RedrawEvent::WinHide { grid } => {
                self.grid_mut(grid).hide();
                self.notify(Notification::GridHidden(grid));
            }
            RedrawEvent::WinViewport { grid, viewport } => {
                self.grid_mut(grid).set_viewport(viewport);
                self.notify(Notification::ViewportChanged(grid));
            }
            RedrawEvent::HlAttrDefine { id, attr } => {
                self.highlights.define(id, attr);
            }
            RedrawEvent::HlGroupSet { name, id } => {
                self.highlights.set_group(name, id);
            }
            RedrawEvent::DefaultColorsSet { fg, bg, special } => {
                self.highlights.set_defaults(fg, bg, special);
                self.notify(Notification::DefaultColorsChanged);
            }
            RedrawEvent::ModeInfoSet {
                cursor_style_enabled,
                infos,
            } => {
                self.cursor_style_enabled = cursor_style_enabled;
                self.mode_infos = infos;
                self.notify(Notification::ModeChanged);
            }
            RedrawEvent::ModeChange { name, index } => {
                self.mode_name = name;
                self.mode_idx = index;
                self.notify(Notification::ModeChanged);
            }
            RedrawEvent::BusyStart => {
                self.busy = true;
                self.notify(Notification::BusyChanged);
            }
            RedrawEvent::BusyStop => {
                self.busy = false;
                self.notify(Notification::BusyChanged);
            }
            RedrawEvent::MouseOn => {
                if !self.mouse_enabled {
                    self.mouse_enabled = true;
                    self.notify(Notification::MouseChanged);
                }
            }
            RedrawEvent::MouseOff => {
                if self.mouse_enabled {
                    self.mouse_enabled = false;
                    self.notify(Notification::MouseChanged);
                }
            }
            RedrawEvent::Bell => {
                self.notify(Notification::Bell { visual: false });
            }
            RedrawEvent::VisualBell => {
                self.notify(Notification::Bell { visual: true });
            }
            RedrawEvent::SetTitle { title } => {
                self.title = title;
                self.notify(Notification::TitleChanged);
            }
            RedrawEvent::SetIcon { icon } => {
                self.icon = icon;
                self.notify(Notification::IconChanged);
            }
            RedrawEvent::FocusGained => {
                self.focused = true;
                self.notify(Notification::FocusChanged);
            }
            RedrawEvent::FocusLost => {
                self.focused = false;
                self.notify(Notification::FocusChanged);
            }
            RedrawEvent::Flush => {
                self.notify(Notification::Flush);
            }
            RedrawEvent::Unknown { name } => {
                log::debug!("ignoring unhandled redraw event {name}");
            }
        }
        Ok(())
    }

    /// Cursor info for the active mode, once `mode_info_set` arrived.
    pub fn mode_info(&self) -> Option<&ModeInfo> {
        self.mode_infos.get(self.mode_idx)
    }

    /// Hands out the queued notifications, emptying the queue.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    /// Fetches a grid, creating it on first mention as the protocol
    /// requires, and queues the creation.
    fn grid_mut(&mut self, id: GridId) -> &mut Grid {
        let (grid, created) = self.registry.get_or_create(id);
        if created {
            self.notifications.push_back(Notification::GridCreated(id));
        }
        grid
    }
}
