// bool2cnf
// Copyright (C) 2021  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt::Display;

/// An error raised by the tokenizer when it meets a character it cannot handle.
#[derive(Debug, PartialEq, Eq)]
pub struct LexError {
    /// The byte offset of the offending character in the input.
    pub offset: usize,
    /// The offending character.
    pub character: char,
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"unrecognized character '{}' at offset {}"#,
            self.character, self.offset
        )
    }
}

impl std::error::Error for LexError {}

/// The kind of syntax error met by the parser.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input contains no token at all.
    EmptyInput,
    /// An opening parenthesis has no matching closing one.
    UnmatchedParenthesis,
    /// A token that cannot start or continue an expression was met.
    UnexpectedToken(String),
    /// A complete expression was parsed but tokens remain.
    TrailingInput(String),
}

/// An error raised by the parser on a syntactically invalid formula.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseError {
    /// The byte offset at which the error was detected.
    pub offset: usize,
    /// The kind of error.
    pub kind: ParseErrorKind,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ParseErrorKind::EmptyInput => write!(f, "empty formula"),
            ParseErrorKind::UnmatchedParenthesis => {
                write!(f, "unmatched parenthesis at offset {}", self.offset)
            }
            ParseErrorKind::UnexpectedToken(t) => {
                write!(f, r#"unexpected {} at offset {}"#, t, self.offset)
            }
            ParseErrorKind::TrailingInput(t) => write!(
                f,
                r#"trailing {} after a complete formula (offset {})"#,
                t, self.offset
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// An error raised when a user-supplied term name aliases the synthetic
/// auxiliary-variable namespace (`phi0`, `phi1`, ...).
#[derive(Debug, PartialEq, Eq)]
pub struct NamingCollisionError {
    /// The colliding term name.
    pub name: String,
}

impl Display for NamingCollisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"term name "{}" collides with the auxiliary variable namespace"#,
            self.name
        )
    }
}

impl std::error::Error for NamingCollisionError {}

/// An error raised while loading a formula from a file whose content does not
/// follow the expected format.
#[derive(Debug, PartialEq, Eq)]
pub struct FormatError {
    /// The 1-based line at which the error was detected (0 when the error is
    /// not tied to a line, e.g. an unsupported file extension).
    pub line: usize,
    /// A description of the problem.
    pub message: String,
}

impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "line {}: {}", self.line, self.message)
        }
    }
}

impl std::error::Error for FormatError {}
