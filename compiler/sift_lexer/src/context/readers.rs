//! Reusable building blocks for terminal actions.

use crate::LexerContext;

impl<T> LexerContext<'_, '_, T> {
    /// Consume characters while `pred` holds and return them.
    pub fn read_while(&mut self, mut pred: impl FnMut(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
            text.push(c);
        }
        text
    }

    /// Consume characters while `pred` holds. Returns the number consumed.
    pub fn skip_while(&mut self, pred: impl FnMut(char) -> bool) -> usize {
        self.eat_while(pred)
    }

    /// Read the rest of an identifier whose first character, `first`, has
    /// already been consumed. Identifier characters are alphanumerics and
    /// `_`.
    pub fn read_identifier(&mut self, first: char) -> String {
        let mut text = String::from(first);
        text.push_str(&self.read_while(|c| c.is_alphanumeric() || c == '_'));
        text
    }

    /// Read the rest of a decimal number whose first digit, `first`, has
    /// already been consumed.
    ///
    /// Accepts one fractional part. The `.` is only taken when a digit
    /// follows it, so `1.max` reads as `1`.
    pub fn read_number(&mut self, first: char) -> String {
        let mut text = String::from(first);
        text.push_str(&self.read_while(|c| c.is_ascii_digit()));
        if self.peek() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            text.push('.');
            text.push_str(&self.read_while(|c| c.is_ascii_digit()));
        }
        text
    }

    /// Read a string literal body after its opening `delimiter` has been
    /// consumed, through the closing delimiter. Returns the unescaped
    /// contents.
    ///
    /// Recognized escapes are `\n`, `\t`, `\r`, `\0`, `\\`, `\'` and `\"`;
    /// any other escaped character stands for itself. Returns `None`,
    /// leaving the newline unconsumed, if the line or input ends before
    /// the closing delimiter.
    pub fn read_string(&mut self, delimiter: char) -> Option<String> {
        let mut value = String::new();
        loop {
            match self.peek()? {
                '\n' => return None,
                c if c == delimiter => {
                    self.advance();
                    return Some(value);
                }
                '\\' => {
                    self.advance();
                    let escaped = match self.peek()? {
                        '\n' => return None,
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '0' => '\0',
                        other => other,
                    };
                    self.advance();
                    value.push(escaped);
                }
                c => {
                    self.advance();
                    value.push(c);
                }
            }
        }
    }

    /// Consume the rest of the current line, leaving the newline. Returns
    /// the number of characters consumed.
    pub fn skip_line(&mut self) -> usize {
        self.eat_while(|c| c != '\n')
    }
}
