//! Redraw events: the typed form of the editor backend's `redraw`
//! notifications.
//!
//! The RPC layer decodes each `[name, args...]` tuple into one of
//! these variants before it reaches the interpreter, so event dispatch
//! is a closed match instead of string comparison. Names the decoder
//! does not recognize become [`RedrawEvent::Unknown`]; the interpreter
//! ignores them without failing, which keeps the frontend compatible
//! with newer backends.

use crate::cell::CellRun;
use crate::color::Rgb;
use crate::grid::placement::{Anchor, Viewport, WinId};
use crate::grid::GridId;
use crate::highlight::{HlAttr, HlId};
use crate::mode::ModeInfo;

#[derive(Debug, Clone, PartialEq)]
pub enum RedrawEvent {
    GridResize {
        grid: GridId,
        width: usize,
        height: usize,
    },
    GridLine {
        grid: GridId,
        row: usize,
        col_start: usize,
        cells: Vec<CellRun>,
    },
    GridClear {
        grid: GridId,
    },
    GridDestroy {
        grid: GridId,
    },
    GridCursorGoto {
        grid: GridId,
        row: usize,
        col: usize,
    },
    GridScroll {
        grid: GridId,
        top: usize,
        bot: usize,
        left: usize,
        right: usize,
        rows: i64,
        cols: i64,
    },
    WinPos {
        grid: GridId,
        win: WinId,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    WinFloatPos {
        grid: GridId,
        win: WinId,
        anchor: Anchor,
        anchor_grid: GridId,
        row: f64,
        col: f64,
        focusable: bool,
    },
    WinExternalPos {
        grid: GridId,
        win: WinId,
    },
    WinHide {
        grid: GridId,
    },
    WinClose {
        grid: GridId,
    },
    WinViewport {
        grid: GridId,
        viewport: Viewport,
    },
    HlAttrDefine {
        id: HlId,
        attr: HlAttr,
    },
    HlGroupSet {
        name: String,
        id: HlId,
    },
    DefaultColorsSet {
        fg: Option<Rgb>,
        bg: Option<Rgb>,
        special: Option<Rgb>,
    },
    ModeInfoSet {
        cursor_style_enabled: bool,
        infos: Vec<ModeInfo>,
    },
    ModeChange {
        name: String,
        index: usize,
    },
    BusyStart,
    BusyStop,
    MouseOn,
    MouseOff,
    Bell,
    VisualBell,
    SetTitle {
        title: String,
    },
    SetIcon {
        icon: String,
    },
    FocusGained,
    FocusLost,
    /// End of a batch: the model is consistent and may be painted.
    Flush,
    /// An event name this frontend does not handle.
    Unknown {
        name: String,
    },
}

impl RedrawEvent {
    /// The wire name of the event, for diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Self::GridResize { .. } => "grid_resize",
            Self::GridLine { .. } => "grid_line",
            Self::GridClear { .. } => "grid_clear",
            Self::GridDestroy { .. } => "grid_destroy",
            Self::GridCursorGoto { .. } => "grid_cursor_goto",
            Self::GridScroll { .. } => "grid_scroll",
            Self::WinPos { .. } => "win_pos",
            Self::WinFloatPos { .. } => "win_float_pos",
            Self::WinExternalPos { .. } => "win_external_pos",
            Self::WinHide { .. } => "win_hide",
            Self::WinClose { .. } => "win_close",
            Self::WinViewport { .. } => "win_viewport",
            Self::HlAttrDefine { .. } => "hl_attr_define",
            Self::HlGroupSet { .. } => "hl_group_set",
            Self::DefaultColorsSet { .. } => "default_colors_set",
            Self::ModeInfoSet { .. } => "mode_info_set",
            Self::ModeChange { .. } => "mode_change",
            Self::BusyStart => "busy_start",
            Self::BusyStop => "busy_stop",
            Self::MouseOn => "mouse_on",
            Self::MouseOff => "mouse_off",
            Self::Bell => "bell",
            Self::VisualBell => "visual_bell",
            Self::SetTitle { .. } => "set_title",
            Self::SetIcon { .. } => "set_icon",
            Self::FocusGained => "focus_gained",
            Self::FocusLost => "focus_lost",
            Self::Flush => "flush",
            Self::Unknown { name } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_the_wire_protocol() {
        assert_eq!(
            RedrawEvent::GridResize {
                grid: 1,
                width: 80,
                height: 24
            }
            .name(),
            "grid_resize"
        );
        assert_eq!(RedrawEvent::Flush.name(), "flush");
        assert_eq!(
            RedrawEvent::Unknown {
                name: "msg_show".into()
            }
            .name(),
            "msg_show"
        );
    }
}
