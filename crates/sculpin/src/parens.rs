//! Bracket balance checking for `()`, `[]` and `{}`.

use crate::data::deque::Deque;
use crate::error::{Error, Result};

/// Checks `s` with a fresh [`BalancedParenthesesChecker`].
pub fn check_balanced(s: &str) -> Result<bool> {
    BalancedParenthesesChecker::new().check(s)
}

/// Reuses its bracket stack across calls.
#[derive(Debug, Clone, Default)]
pub struct BalancedParenthesesChecker {
    open: Deque<char>,
}

impl BalancedParenthesesChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every bracket in `s` is closed by its matching bracket, properly nested.
    ///
    /// Spaces, tabs and newlines are ignored. Any other non-bracket character is an error
    /// carrying the character and its byte offset. The whole input is validated even after
    /// a mismatch has been seen.
    pub fn check(&mut self, s: &str) -> Result<bool> {
        self.open.clear();
        let mut balanced = true;
        for (position, ch) in s.char_indices() {
            match ch {
                '(' | '[' | '{' => self.open.push(ch),
                ')' | ']' | '}' => {
                    if self.open.pop() != Some(opening(ch)) {
                        balanced = false;
                    }
                }
                ' ' | '\t' | '\n' => {}
                _ => return Err(Error::InvalidCharacter { ch, position }),
            }
        }
        let balanced = balanced && self.open.is_empty();
        self.open.clear();
        Ok(balanced)
    }
}

fn opening(close: char) -> char {
    match close {
        ')' => '(',
        ']' => '[',
        _ => '{',
    }
}
