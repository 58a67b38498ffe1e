//! Grid cell representation: one display glyph plus a highlight reference.

use std::sync::Arc;

use unicode_width::UnicodeWidthChar;

use crate::highlight::HlId;

/// Extended cell data stored out-of-line (zero-width combining marks).
///
/// Almost every cell is a plain spacing glyph, so combining marks live
/// behind an `Arc` to keep `Cell` itself small and cheap to copy around
/// the flat buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellExtra {
    pub zerowidth: Vec<char>,
}

/// A single grid cell. The highlight id is a weak reference into the
/// [`HighlightTable`](crate::highlight::HighlightTable); the cell never
/// owns style data. `None` means the default highlight.
#[derive(Debug, Clone)]
pub struct Cell {
    pub ch: char,
    pub hl: Option<HlId>,
    pub extra: Option<Arc<CellExtra>>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            hl: None,
            extra: None,
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.ch == other.ch && self.hl == other.hl && self.zerowidth() == other.zerowidth()
    }
}

impl Cell {
    pub fn new(ch: char, hl: Option<HlId>) -> Self {
        Self {
            ch,
            hl,
            extra: None,
        }
    }

    /// Builds a cell from the UI protocol's glyph text: the first scalar
    /// is the spacing character, any remaining scalars are zero-width
    /// combining marks. Empty text yields a blank cell (the protocol uses
    /// `""` for the shadow half of a double-width glyph).
    pub fn from_text(text: &str, hl: Option<HlId>) -> Self {
        let mut chars = text.chars();
        let mut cell = Self::new(chars.next().unwrap_or(' '), hl);
        for zw in chars {
            cell.push_zerowidth(zw);
        }
        cell
    }

    /// Returns the zero-width combining characters attached to this cell.
    pub fn zerowidth(&self) -> &[char] {
        match &self.extra {
            Some(extra) => &extra.zerowidth,
            None => &[],
        }
    }

    /// Attaches a zero-width combining character.
    pub fn push_zerowidth(&mut self, c: char) {
        let extra = self
            .extra
            .get_or_insert_with(|| Arc::new(CellExtra::default()));
        Arc::make_mut(extra).zerowidth.push(c);
    }

    /// The full glyph text: spacing char followed by combining marks.
    pub fn text(&self) -> String {
        let mut s = String::new();
        s.push(self.ch);
        s.extend(self.zerowidth());
        s
    }

    /// Display columns occupied by the spacing character (0, 1 or 2).
    pub fn width(&self) -> usize {
        UnicodeWidthChar::width(self.ch).unwrap_or(1)
    }
}

/// One entry of a `grid_line` cell write: a glyph, an optional highlight
/// id, and an optional repeat count.
///
/// A missing highlight id carries the previous entry's id forward within
/// the same write (run-length encoding of style); a missing repeat count
/// means one cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellRun {
    pub text: String,
    pub hl: Option<HlId>,
    pub repeat: Option<usize>,
}

impl CellRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hl: None,
            repeat: None,
        }
    }

    pub fn with_hl(mut self, hl: HlId) -> Self {
        self.hl = Some(hl);
        self
    }

    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = Some(repeat);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn cell_size() {
        // char(4) + Option<HlId>(16) + Option<Arc>(8) with padding.
        assert!(
            size_of::<Cell>() <= 32,
            "Cell is {} bytes",
            size_of::<Cell>()
        );
    }

    #[test]
    fn cell_default_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.hl, None);
        assert!(cell.extra.is_none());
    }

    #[test]
    fn from_text_splits_combining_marks() {
        let cell = Cell::from_text("e\u{0301}", Some(3));
        assert_eq!(cell.ch, 'e');
        assert_eq!(cell.zerowidth(), &['\u{0301}']);
        assert_eq!(cell.text(), "e\u{0301}");
    }

    #[test]
    fn from_text_empty_is_blank() {
        let cell = Cell::from_text("", None);
        assert_eq!(cell.ch, ' ');
        assert!(cell.zerowidth().is_empty());
    }

    #[test]
    fn wide_glyph_width() {
        assert_eq!(Cell::new('漢', None).width(), 2);
        assert_eq!(Cell::new('a', None).width(), 1);
    }

    #[test]
    fn equality_ignores_arc_identity() {
        let mut a = Cell::new('x', Some(1));
        let mut b = Cell::new('x', Some(1));
        a.push_zerowidth('\u{0300}');
        b.push_zerowidth('\u{0300}');
        assert_eq!(a, b);
    }
}
