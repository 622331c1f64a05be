/// Sequential reader over the characters of a source string.
///
/// Reads outside the source yield `None`, which stands in for end of input.
/// The position may run past the end; it never wraps or moves backwards.
#[derive(Debug, Clone)]
pub struct CharacterCursor {
    chars: Vec<char>,
    pos: usize,
}

impl CharacterCursor {
    pub fn new(source: &str) -> Self {
        CharacterCursor {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    /// Returns the character `offset` places ahead of the cursor without
    /// moving it.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.pos
            .checked_add(offset)
            .and_then(|index| self.chars.get(index))
            .copied()
    }

    /// Shorthand for `peek(0)`.
    pub fn at(&self) -> Option<char> {
        self.peek(0)
    }

    /// Returns the current character and moves past it. Past the end this
    /// keeps advancing and keeps returning `None`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let c = self.at();
        self.advance();
        c
    }

    pub fn advance(&mut self) {
        self.pos = self.pos.saturating_add(1);
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.chars.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
