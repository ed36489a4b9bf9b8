use std::fmt;

/// A location inside the source text.
///
/// Lines and columns are 1-based, `offset` counts characters (not bytes) from
/// the start of the text and is 0-based. The first character of any source is
/// therefore at `1:1`, offset `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line:   usize,
    /// 1-based column number.
    pub column: usize,
    /// 0-based character offset.
    pub offset: usize,
}

impl Position {
    /// The position of the first character of a source.
    pub const START: Self = Self { line:   1,
                                   column: 1,
                                   offset: 0, };

    /// Creates a position from its parts.
    #[must_use]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    /// Returns the position that follows `self` once `ch` has been consumed.
    ///
    /// A newline moves to column 1 of the next line; every other character
    /// moves one column to the right. The offset always grows by one.
    ///
    /// # Example
    /// ```
    /// use nulla::source::Position;
    ///
    /// let p = Position::START.advance('a');
    /// assert_eq!(p, Position::new(1, 2, 1));
    ///
    /// let p = p.advance('\n');
    /// assert_eq!(p, Position::new(2, 1, 2));
    /// ```
    #[must_use]
    pub const fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Self { line:   self.line + 1,
                   column: 1,
                   offset: self.offset + 1, }
        } else {
            Self { line:   self.line,
                   column: self.column + 1,
                   offset: self.offset + 1, }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Walks a source text one character at a time and keeps track of the
/// [`Position`] of the next unread character.
///
/// The cursor only ever moves forward.
#[derive(Debug, Clone)]
pub struct SourceCursor<'src> {
    text:     &'src str,
    byte:     usize,
    position: Position,
}

impl<'src> SourceCursor<'src> {
    #[must_use]
    pub const fn new(text: &'src str) -> Self {
        Self { text,
               byte: 0,
               position: Position::START }
    }

    /// The character under the cursor, if any.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.text[self.byte..].chars().next()
    }

    /// Consumes the character under the cursor and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.byte += ch.len_utf8();
        self.position = self.position.advance(ch);
        Some(ch)
    }

    /// Position of the next unread character, or the position just past the
    /// last character once the text is exhausted.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Moves forward until the cursor sits at byte offset `target` and returns
    /// the position there.
    ///
    /// Targets behind the cursor leave it where it is. Targets past the end of
    /// the text stop at the end.
    ///
    /// # Example
    /// ```
    /// use nulla::source::{Position, SourceCursor};
    ///
    /// let mut cursor = SourceCursor::new("ab\ncd");
    /// assert_eq!(cursor.advance_to(4), Position::new(2, 2, 4));
    /// assert_eq!(cursor.peek(), Some('d'));
    ///
    /// // Moving backwards is a no-op.
    /// assert_eq!(cursor.advance_to(1), cursor.position());
    /// assert_eq!(cursor.advance_to(99), Position::new(2, 3, 5));
    /// ```
    pub fn advance_to(&mut self, target: usize) -> Position {
        while self.byte < target {
            if self.advance().is_none() {
                break;
            }
        }
        self.position
    }
}
