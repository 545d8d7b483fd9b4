/// Forward-only, one-character-lookahead cursor over an expression.
pub trait Scanner {
    /// The character under the cursor, `None` once past the end of input.
    fn get_current(&self) -> Option<char>;
    fn advance(&mut self);
    /// Byte offset of the current character.
    fn position(&self) -> usize;
    /// Text between `start` and the current position.
    fn slice(&self, start: usize) -> &str;

    fn is_valid(&self) -> bool {
        self.get_current().is_some()
    }

    fn skip_spaces(&mut self) {
        while self.get_current() == Some(' ') {
            self.advance();
        }
    }

    /// Consumes `expected` if it is the current character. Stray spaces are
    /// skipped first.
    fn eat(&mut self, expected: char) -> bool {
        self.skip_spaces();
        if self.get_current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the maximal run of characters matching `predicate` and
    /// returns it.
    fn take_while<P: Fn(char) -> bool>(&mut self, predicate: P) -> &str {
        let start = self.position();
        while self.get_current().filter(|&c| predicate(c)).is_some() {
            self.advance();
        }
        self.slice(start)
    }
}

pub fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

pub struct StringScanner {
    string: String,
    current: Option<char>,
    index: usize,
}

impl StringScanner {
    /// Strips all whitespace up front and positions the cursor on the first
    /// remaining character.
    pub fn new(string: &str) -> Self {
        let string: String = string.chars().filter(|c| !c.is_whitespace()).collect();
        let current = string.chars().next();
        Self {
            string,
            current,
            index: 0,
        }
    }
}

impl Scanner for StringScanner {
    fn get_current(&self) -> Option<char> {
        self.current
    }

    fn advance(&mut self) {
        if let Some(current) = self.current {
            self.index += current.len_utf8();
        }
        self.current = self.string[self.index..].chars().next();
    }

    fn position(&self) -> usize {
        self.index
    }

    fn slice(&self, start: usize) -> &str {
        &self.string[start..self.index]
    }
}
