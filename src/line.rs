//! Token-run line buffer: the row model used before the cell grid.
//!
//! A [`Line`] stores a row as a list of styled text runs instead of
//! per-cell slots. Writes split runs at the insertion boundaries and
//! splice the new run in; unwritten space is padded with styleless
//! blank runs so the runs always cover the full line width. The cell
//! grid has taken over as the primary screen model, but the command
//! line and message area still render through [`LegacyScreen`].

use crate::error::GridError;
use crate::highlight::HlAttr;

/// One styled run of text within a line. `attr: None` is unstyled
/// (default colors); attribute equality is structural.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Token {
    pub text: String,
    pub attr: Option<HlAttr>,
}

impl Token {
    pub fn new(text: impl Into<String>, attr: Option<HlAttr>) -> Self {
        Self {
            text: text.into(),
            attr,
        }
    }

    /// A styleless blank run of `len` spaces.
    pub fn pad(len: usize) -> Self {
        Self::new(" ".repeat(len), None)
    }

    /// Run length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Splits the run at character offset `at`, both halves keeping the
    /// attribute.
    fn split_at_char(&self, at: usize) -> (Self, Self) {
        let byte = self
            .text
            .char_indices()
            .nth(at)
            .map_or(self.text.len(), |(i, _)| i);
        (
            Self::new(&self.text[..byte], self.attr),
            Self::new(&self.text[byte..], self.attr),
        )
    }
}

/// A fixed-width row of styled runs.
///
/// Invariant: the run lengths always sum to `length`. Every mutation
/// re-establishes it, padding the tail with a styleless run when the
/// written content falls short.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    length: usize,
    tokens: Vec<Token>,
}

impl Line {
    /// A blank line of `length` columns. Zero-width lines cannot exist.
    pub fn new(length: usize) -> Result<Self, GridError> {
        Self::with_tokens(length, Vec::new())
    }

    /// A line pre-seeded with runs; the tail is padded out to `length`.
    pub fn with_tokens(length: usize, tokens: Vec<Token>) -> Result<Self, GridError> {
        if length == 0 {
            return Err(GridError::InvalidDimension {
                width: 0,
                height: 1,
            });
        }
        let mut line = Self { length, tokens };
        line.fill();
        Ok(line)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The full line text, blank-padded to the line width.
    pub fn get_text(&self) -> String {
        let mut text: String = self.tokens.iter().map(|t| t.text.as_str()).collect();
        let chars = text.chars().count();
        if chars < self.length {
            text.extend(std::iter::repeat_n(' ', self.length - chars));
        }
        text
    }

    /// Changes the line width. Shrinking truncates runs at the new
    /// boundary, splitting the run that straddles it; growing pads the
    /// tail with a styleless run.
    pub fn set_length(&mut self, length: usize) -> Result<(), GridError> {
        if length == 0 {
            return Err(GridError::InvalidDimension {
                width: 0,
                height: 1,
            });
        }

        if length < self.length {
            let mut char_count = 0;
            for index in 0..self.tokens.len() {
                let token_len = self.tokens[index].len();
                if length < char_count + token_len {
                    if length > char_count {
                        let (before, _) = self.tokens[index].split_at_char(length - char_count);
                        self.tokens[index] = before;
                        self.tokens.truncate(index + 1);
                    } else {
                        self.tokens.truncate(index);
                    }
                    break;
                }
                char_count += token_len;
            }
            self.length = length;
        } else if length > self.length {
            self.length = length;
            self.fill();
        }
        Ok(())
    }

    /// Blanks the line from `position` to the end. Positions at or past
    /// the line end are a no-op.
    pub fn clear(&mut self, position: usize) {
        if position == 0 {
            self.tokens.clear();
        } else if position < self.length {
            if let Some((start_index, end_index)) =
                self.prepare_insertion(position, self.length - position)
            {
                self.tokens.drain(start_index..=end_index);
            }
        }
        self.fill();
    }

    /// Copies out the runs covering `[start, end)`, splitting boundary
    /// runs so no returned run starts before `start`.
    pub fn slice(&self, start: usize, end: usize) -> Vec<Token> {
        let mut positions = Vec::with_capacity(self.tokens.len());
        let mut start_index = None;
        let mut end_index = None;
        let mut char_count = 0;

        for (index, token) in self.tokens.iter().enumerate() {
            positions.push(char_count);
            let token_end = char_count + token.len();

            let past_start = token_end > start;
            if past_start && start_index.is_none() {
                start_index = Some(index);
            }
            if past_start && end >= char_count && end <= token_end {
                end_index = Some(index);
                break;
            }

            char_count += token.len();
        }

        let (Some(start_index), Some(end_index)) = (start_index, end_index) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let start_token = &self.tokens[start_index];

        if start > positions[start_index] {
            let (_, after) = start_token.split_at_char(start - positions[start_index]);
            result.push(after);
        } else {
            result.push(start_token.clone());
        }

        if end_index > start_index + 1 {
            result.extend(self.tokens[start_index + 1..end_index].iter().cloned());
        }

        let end_token = &self.tokens[end_index];
        let end_token_end = positions[end_index] + end_token.len();

        if end < end_token_end {
            if start_index == end_index {
                let (before, _) = result[0].split_at_char(end - start);
                result[0] = before;
            } else {
                let keep = end_token.len() - (end_token_end - end);
                let (before, _) = end_token.split_at_char(keep);
                result.push(before);
            }
        } else if start_index != end_index {
            result.push(end_token.clone());
        }

        result
    }

    /// The single character at `position` with its run's attribute.
    pub fn token_for_char_at(&self, position: usize) -> Result<Token, GridError> {
        if position >= self.length {
            return Err(GridError::OutOfBounds {
                row: 0,
                col: position,
                width: self.length,
                height: 1,
            });
        }

        let mut char_count = 0;
        for token in &self.tokens {
            let token_len = token.len();
            if char_count + token_len > position {
                let inner = position - char_count;
                let ch = token.text.chars().nth(inner).unwrap_or(' ');
                return Ok(Token::new(ch.to_string(), token.attr));
            }
            char_count += token_len;
        }

        // Unreachable while the length invariant holds.
        Ok(Token::new(" ", None))
    }

    /// Writes one run at `position`, replacing whatever it covers.
    pub fn insert(&mut self, position: usize, token: Token) -> Result<(), GridError> {
        self.insert_tokens(position, vec![token])
    }

    /// Writes a run sequence at `position`, replacing whatever the
    /// combined length covers. Runs straddling either boundary are
    /// split so the rest of the line is untouched.
    pub fn insert_tokens(&mut self, position: usize, tokens: Vec<Token>) -> Result<(), GridError> {
        let length: usize = tokens.iter().map(Token::len).sum();
        if position + length > self.length {
            return Err(GridError::MalformedCells {
                start: position,
                len: length,
                buffer: self.length,
            });
        }
        if length == 0 {
            return Ok(());
        }

        let Some((start_index, end_index)) = self.prepare_insertion(position, length) else {
            return Err(GridError::MalformedCells {
                start: position,
                len: length,
                buffer: self.length,
            });
        };
        self.tokens.splice(start_index..=end_index, tokens);
        Ok(())
    }

    /// Merges adjacent runs with equal attributes.
    pub fn normalize(&mut self) {
        let mut i = 0;
        while i + 1 < self.tokens.len() {
            if self.tokens[i].attr == self.tokens[i + 1].attr {
                let next = self.tokens.remove(i + 1);
                self.tokens[i].text.push_str(&next.text);
            } else {
                i += 1;
            }
        }
    }

    /// Pads the tail with a styleless run up to the line width.
    fn fill(&mut self) {
        let text_len: usize = self.tokens.iter().map(Token::len).sum();
        if text_len < self.length {
            self.tokens.push(Token::pad(self.length - text_len));
        }
    }

    /// Splits runs at `position` and `position + length` so the covered
    /// range maps onto whole runs; returns their index range. `None`
    /// only if the runs do not cover the range, which the callers'
    /// bounds checks rule out.
    fn prepare_insertion(&mut self, position: usize, length: usize) -> Option<(usize, usize)> {
        let position_end = position + length;
        let mut positions = Vec::with_capacity(self.tokens.len());
        let mut start_index = None;
        let mut end_index = None;
        let mut char_count = 0;

        for (index, token) in self.tokens.iter().enumerate() {
            positions.push(char_count);
            let token_end = char_count + token.len();

            let past_start = token_end > position;
            if past_start && start_index.is_none() {
                start_index = Some(index);
            }
            if past_start && position_end >= char_count && position_end <= token_end {
                end_index = Some(index);
                break;
            }

            char_count += token.len();
        }

        let mut start_index = start_index?;
        let mut end_index = end_index?;

        if position > positions[start_index] {
            let break_point = position - positions[start_index];
            let (before, after) = self.tokens[start_index].split_at_char(break_point);
            positions.insert(start_index + 1, positions[start_index] + break_point);
            self.tokens[start_index] = before;
            self.tokens.insert(start_index + 1, after);
            start_index += 1;
            end_index += 1;
        }

        let end_token_end = positions[end_index] + self.tokens[end_index].len();
        if position_end < end_token_end {
            let break_point = self.tokens[end_index].len() - (end_token_end - position_end);
            let (before, after) = self.tokens[end_index].split_at_char(break_point);
            self.tokens[end_index] = before;
            self.tokens.insert(end_index + 1, after);
        }

        Some((start_index, end_index))
    }
}

/// Inclusive scroll region bounds, as the legacy screen protocol
/// delivers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRegion {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

/// A column-fixed stack of [`Line`]s: the pre-multigrid screen model,
/// kept for the line-oriented UI surfaces.
#[derive(Debug, Clone)]
pub struct LegacyScreen {
    lines: Vec<Line>,
    cols: usize,
}

impl LegacyScreen {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension {
                width: cols,
                height: rows,
            });
        }
        let mut lines = Vec::with_capacity(rows);
        for _ in 0..rows {
            lines.push(Line::new(cols)?);
        }
        Ok(Self { lines, cols })
    }

    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Resizes the screen. Extra rows are dropped from the bottom, new
    /// rows arrive blank, and every surviving line is re-cut to the new
    /// column count.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension {
                width: cols,
                height: rows,
            });
        }

        if rows < self.lines.len() {
            self.lines.truncate(rows);
        } else {
            while self.lines.len() < rows {
                self.lines.push(Line::new(self.cols)?);
            }
        }

        if cols != self.cols {
            for line in &mut self.lines {
                line.set_length(cols)?;
            }
            self.cols = cols;
        }
        Ok(())
    }

    /// Writes one run at the given position.
    pub fn put(&mut self, row: usize, col: usize, token: Token) -> Result<(), GridError> {
        if row >= self.lines.len() || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.cols,
                height: self.lines.len(),
            });
        }
        self.lines[row].insert(col, token)
    }

    /// Shifts the region's lines vertically by `count` rows. Positive
    /// `count` moves content up; rows scrolled in from outside the
    /// screen arrive blank. Only the `[left, right]` span of each line
    /// moves.
    pub fn scroll(&mut self, region: ScrollRegion, count: i64) -> Result<(), GridError> {
        let top = region.top;
        let bottom = (region.bottom + 1).min(self.lines.len());
        let left = region.left;
        let right = (region.right + 1).min(self.cols);
        if count == 0 || top >= bottom || left >= right {
            return Ok(());
        }

        let shift = count.unsigned_abs() as usize;
        if count > 0 {
            for dest in top..bottom.saturating_sub(shift) {
                let tokens = match self.lines.get(dest + shift) {
                    Some(line) => line.slice(left, right),
                    None => vec![Token::pad(right - left)],
                };
                self.lines[dest].insert_tokens(left, tokens)?;
            }
        } else {
            for dest in ((top + shift).min(bottom)..bottom).rev() {
                let tokens = match self.lines.get(dest - shift) {
                    Some(line) => line.slice(left, right),
                    None => vec![Token::pad(right - left)],
                };
                self.lines[dest].insert_tokens(left, tokens)?;
            }
        }
        Ok(())
    }

    /// Blanks one line from `col` to its end.
    pub fn clear_line(&mut self, row: usize, col: usize) {
        if let Some(line) = self.lines.get_mut(row) {
            line.clear(col);
        }
    }

    /// Blanks the whole screen.
    pub fn clear_all(&mut self) {
        for line in &mut self.lines {
            line.clear(0);
        }
    }

    /// The single-character run at a position.
    pub fn token_at(&self, row: usize, col: usize) -> Option<Token> {
        self.lines.get(row)?.slice(col, col + 1).into_iter().next()
    }

    /// Boxed plain-text rendering for debugging, with an optional
    /// cursor block.
    pub fn render_text(&self, cursor: Option<(usize, usize)>) -> String {
        let mut out = String::new();
        out.push_str("   ╭");
        out.extend(std::iter::repeat_n('─', self.cols));
        out.push_str("╮\n");
        for (row, line) in self.lines.iter().enumerate() {
            let mut text = line.get_text();
            if let Some((cursor_row, cursor_col)) = cursor {
                if cursor_row == row && cursor_col < self.cols {
                    let mut chars: Vec<char> = text.chars().collect();
                    chars[cursor_col] = '█';
                    text = chars.into_iter().collect();
                }
            }
            out.push_str(&format!("{row:<2} │{text}│\n"));
        }
        out.push_str("   ╰");
        out.extend(std::iter::repeat_n('─', self.cols));
        out.push_str("╯\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn t(text: &str) -> Token {
        Token::new(text, None)
    }

    fn styled(text: &str) -> Token {
        Token::new(
            text,
            Some(HlAttr {
                foreground: Some(Rgb::from_packed(0xffffff)),
                ..HlAttr::default()
            }),
        )
    }

    fn line(length: usize, tokens: Vec<Token>) -> Line {
        Line::with_tokens(length, tokens).expect("line")
    }

    #[test]
    fn get_text_pads_to_length() {
        let line = line(60, vec![t("aaaa"), t("bbbb"), t("cccc"), t("dddd")]);
        assert_eq!(
            line.get_text(),
            format!("aaaabbbbccccdddd{}", " ".repeat(44))
        );
    }

    #[test]
    fn length_invariant_survives_mutation() {
        let mut l = line(20, vec![t("aaaa")]);
        l.insert(10, t("bbbbb")).expect("insert");
        l.clear(15);
        l.set_length(12).expect("set_length");
        let total: usize = l.tokens().iter().map(Token::len).sum();
        assert_eq!(total, l.length());
    }

    #[test]
    fn slice_inside_token() {
        let l = line(30, vec![t("012345678901234567890123456789")]);
        assert_eq!(l.slice(5, 15), vec![t("5678901234")]);
    }

    #[test]
    fn slice_covers_exactly_the_requested_span() {
        let l = line(30, vec![t(&"a".repeat(30))]);
        for (start, end) in [(0, 5), (5, 15), (12, 13), (20, 30)] {
            let total: usize = l.slice(start, end).iter().map(Token::len).sum();
            assert_eq!(total, end - start, "slice({start}, {end})");
        }
    }

    #[test]
    fn slice_across_tokens() {
        let l = line(80, vec![t("first_token"), t("second_token")]);
        assert_eq!(l.slice(6, 17), vec![t("token"), t("second")]);
    }

    #[test]
    fn slice_at_token_end() {
        let l = line(20, vec![t(&"a".repeat(20))]);
        assert_eq!(l.slice(10, 20), vec![t(&"a".repeat(10))]);
    }

    #[test]
    fn slice_at_token_start() {
        let l = line(20, vec![t(&"a".repeat(10)), t(&"b".repeat(10))]);
        assert_eq!(l.slice(10, 15), vec![t("bbbbb")]);
    }

    #[test]
    fn token_for_char_at_inside_tokens() {
        let l = line(20, vec![t("aaaa"), t("1234"), t("cccc")]);
        assert_eq!(l.token_for_char_at(5).expect("token"), t("2"));
    }

    #[test]
    fn token_for_char_at_in_padding() {
        let l = line(20, vec![t("aaaa"), t("1234"), t("cccc")]);
        assert_eq!(l.token_for_char_at(15).expect("token"), t(" "));
    }

    #[test]
    fn token_for_char_at_out_of_bounds() {
        let l = line(20, vec![t("aaaa")]);
        assert!(matches!(
            l.token_for_char_at(20),
            Err(GridError::OutOfBounds { col: 20, .. })
        ));
    }

    #[test]
    fn insert_filling_the_line_exactly() {
        let mut l = line(8, vec![t("aaaa")]);
        l.insert(4, t("bbbb")).expect("insert");
        assert_eq!(l.tokens(), &[t("aaaa"), t("bbbb")]);
        assert_eq!(l.get_text(), "aaaabbbb");
    }

    #[test]
    fn insert_pads_before_and_after() {
        let mut l = line(20, vec![t("aaaa")]);
        l.insert(8, t("bbbb")).expect("insert");
        assert_eq!(
            l.tokens(),
            &[t("aaaa"), Token::pad(4), t("bbbb"), Token::pad(8)]
        );
    }

    #[test]
    fn insert_at_tokens_end() {
        let mut l = line(20, vec![t("aaaa")]);
        l.insert(4, t("bbbb")).expect("insert");
        assert_eq!(l.tokens(), &[t("aaaa"), t("bbbb"), Token::pad(12)]);
    }

    #[test]
    fn insert_after_tokens_end() {
        let mut l = line(20, vec![t("aaaaa")]);
        l.insert(10, t("bbbbb")).expect("insert");
        assert_eq!(
            l.tokens(),
            &[t("aaaaa"), Token::pad(5), t("bbbbb"), Token::pad(5)]
        );
    }

    #[test]
    fn insert_inside_start_token_boundary() {
        let mut l = line(20, vec![t("aaaa"), t("bbbb"), t("cccc")]);
        l.insert(2, t("112222")).expect("insert");
        assert_eq!(
            l.tokens(),
            &[t("aa"), t("112222"), t("cccc"), Token::pad(8)]
        );
    }

    #[test]
    fn insert_inside_end_token_boundary() {
        let mut l = line(20, vec![t("aaaa"), t("bbbb"), t("cccc")]);
        l.insert(4, t("111122")).expect("insert");
        assert_eq!(
            l.tokens(),
            &[t("aaaa"), t("111122"), t("cc"), Token::pad(8)]
        );
    }

    #[test]
    fn insert_across_token_boundaries() {
        let mut l = line(20, vec![t("aaaa"), t("bbbb"), t("cccc"), t("dddd")]);
        l.insert(6, t("11222233")).expect("insert");
        assert_eq!(
            l.tokens(),
            &[t("aaaa"), t("bb"), t("11222233"), t("dd"), Token::pad(4)]
        );
    }

    #[test]
    fn insert_inside_single_token() {
        let mut l = line(20, vec![t("aaaa"), t("bbbb"), t("cccc")]);
        l.insert(5, t("11")).expect("insert");
        assert_eq!(
            l.tokens(),
            &[t("aaaa"), t("b"), t("11"), t("b"), t("cccc"), Token::pad(8)]
        );
    }

    #[test]
    fn insert_at_start_over_token_list_end() {
        let mut l = line(20, vec![t("aaaa")]);
        l.insert(0, t("111111")).expect("insert");
        assert_eq!(l.tokens(), &[t("111111"), Token::pad(14)]);
    }

    #[test]
    fn insert_at_styled_token_start() {
        let mut l = line(
            50,
            vec![
                styled(":"),
                styled("l"),
                styled("s"),
                styled(&" ".repeat(37)),
            ],
        );
        let token = styled("1 %a   \"[No Name]\"                    line 1");
        l.insert(0, token.clone()).expect("insert");
        assert_eq!(l.tokens(), &[token, Token::pad(6)]);
    }

    #[test]
    fn insert_past_line_end_is_rejected() {
        let mut l = line(10, vec![t("aaaa")]);
        assert!(matches!(
            l.insert(8, t("xxx")),
            Err(GridError::MalformedCells {
                start: 8,
                len: 3,
                buffer: 10
            })
        ));
        // The line is untouched by the failed write.
        assert_eq!(l.get_text(), format!("aaaa{}", " ".repeat(6)));
    }

    #[test]
    fn set_length_grows_with_padding() {
        let mut l = line(8, vec![t("aaaa"), t("bbbb")]);
        l.set_length(10).expect("set_length");
        assert_eq!(l.tokens(), &[t("aaaa"), t("bbbb"), Token::pad(2)]);
        assert_eq!(l.get_text(), "aaaabbbb  ");
    }

    #[test]
    fn set_length_shrinks_splitting_runs() {
        let mut l = line(8, vec![t("aaaa"), t("bbbb")]);
        l.set_length(6).expect("set_length");
        assert_eq!(l.tokens(), &[t("aaaa"), t("bb")]);
    }

    #[test]
    fn set_length_at_run_boundary() {
        let mut l = line(8, vec![t("aaaa"), t("bbbb")]);
        l.set_length(4).expect("set_length");
        assert_eq!(l.tokens(), &[t("aaaa")]);
    }

    #[test]
    fn set_length_equal_is_a_no_op() {
        let mut l = line(8, vec![t("aaaa"), t("bbbb")]);
        l.set_length(8).expect("set_length");
        assert_eq!(l.tokens(), &[t("aaaa"), t("bbbb")]);
    }

    #[test]
    fn clear_from_position() {
        let mut l = line(12, vec![t("aaaa"), t("bbbb"), t("cccc")]);
        l.clear(6);
        assert_eq!(l.get_text(), "aaaabb      ");
    }

    #[test]
    fn clear_all_resets_to_padding() {
        let mut l = line(12, vec![t("aaaa"), t("bbbb")]);
        l.clear(0);
        assert_eq!(l.tokens(), &[Token::pad(12)]);
    }

    #[test]
    fn normalize_merges_equal_attrs() {
        let mut l = line(20, vec![styled("ab"), styled("cd"), t("ef")]);
        l.normalize();
        // The trailing pad shares the unstyled attr with "ef" and merges
        // along with it.
        assert_eq!(
            l.tokens(),
            &[styled("abcd"), t(&format!("ef{}", " ".repeat(14)))]
        );
    }

    #[test]
    fn zero_length_line_is_invalid() {
        assert!(matches!(
            Line::new(0),
            Err(GridError::InvalidDimension { width: 0, height: 1 })
        ));
    }

    #[test]
    fn screen_put_and_read_back() {
        let mut screen = LegacyScreen::new(4, 10).expect("screen");
        screen.put(1, 2, styled("hey")).expect("put");
        assert_eq!(
            screen.line(1).expect("line").get_text(),
            "  hey     "
        );
        assert_eq!(screen.token_at(1, 3).expect("token"), styled("e"));
    }

    #[test]
    fn screen_put_out_of_bounds() {
        let mut screen = LegacyScreen::new(4, 10).expect("screen");
        assert!(matches!(
            screen.put(4, 0, t("x")),
            Err(GridError::OutOfBounds { row: 4, .. })
        ));
    }

    #[test]
    fn screen_scroll_up() {
        let mut screen = LegacyScreen::new(3, 5).expect("screen");
        screen.put(0, 0, t("aaaaa")).expect("put");
        screen.put(1, 0, t("bbbbb")).expect("put");
        screen.put(2, 0, t("ccccc")).expect("put");
        screen
            .scroll(
                ScrollRegion {
                    top: 0,
                    bottom: 2,
                    left: 0,
                    right: 4,
                },
                1,
            )
            .expect("scroll");
        assert_eq!(screen.line(0).expect("line").get_text(), "bbbbb");
        assert_eq!(screen.line(1).expect("line").get_text(), "ccccc");
        // The scrolled-out row keeps its content; the protocol clears
        // it with an explicit clear_line.
        assert_eq!(screen.line(2).expect("line").get_text(), "ccccc");
    }

    #[test]
    fn screen_scroll_down() {
        let mut screen = LegacyScreen::new(3, 5).expect("screen");
        screen.put(0, 0, t("aaaaa")).expect("put");
        screen.put(1, 0, t("bbbbb")).expect("put");
        screen
            .scroll(
                ScrollRegion {
                    top: 0,
                    bottom: 2,
                    left: 0,
                    right: 4,
                },
                -1,
            )
            .expect("scroll");
        assert_eq!(screen.line(1).expect("line").get_text(), "aaaaa");
        assert_eq!(screen.line(2).expect("line").get_text(), "bbbbb");
    }

    #[test]
    fn screen_scroll_respects_columns() {
        let mut screen = LegacyScreen::new(2, 6).expect("screen");
        screen.put(0, 0, t("aaaaaa")).expect("put");
        screen.put(1, 0, t("bbbbbb")).expect("put");
        screen
            .scroll(
                ScrollRegion {
                    top: 0,
                    bottom: 1,
                    left: 2,
                    right: 3,
                },
                1,
            )
            .expect("scroll");
        assert_eq!(screen.line(0).expect("line").get_text(), "aabbaa");
    }

    #[test]
    fn screen_scroll_does_not_bleed_past_region() {
        let mut screen = LegacyScreen::new(2, 10).expect("screen");
        screen.put(0, 0, t(&"a".repeat(10))).expect("put");
        screen.put(1, 0, t(&"b".repeat(10))).expect("put");
        screen
            .scroll(
                ScrollRegion {
                    top: 0,
                    bottom: 1,
                    left: 2,
                    right: 3,
                },
                1,
            )
            .expect("scroll");
        // Only columns [2, 3] move; nothing to their right is touched.
        assert_eq!(screen.line(0).expect("line").get_text(), "aabbaaaaaa");
        assert_eq!(screen.line(1).expect("line").get_text(), "bbbbbbbbbb");
    }

    #[test]
    fn screen_resize_recuts_lines() {
        let mut screen = LegacyScreen::new(3, 8).expect("screen");
        screen.put(0, 0, t("aaaabbbb")).expect("put");
        screen.resize(2, 6).expect("resize");
        assert_eq!(screen.rows(), 2);
        assert_eq!(screen.cols(), 6);
        assert_eq!(screen.line(0).expect("line").get_text(), "aaaabb");
    }

    #[test]
    fn screen_render_text_draws_cursor() {
        let mut screen = LegacyScreen::new(2, 4).expect("screen");
        screen.put(0, 0, t("abcd")).expect("put");
        let text = screen.render_text(Some((0, 1)));
        assert!(text.contains("0  │a█cd│"));
        assert!(text.contains("1  │    │"));
    }
}
