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

use crate::LexError;
use std::fmt::Display;

/// The kinds of tokens recognized in a formula.
///
/// The operators accept both their symbolic and word spellings
/// (`&&`/`and`, `||`/`or`, `!`/`not`); word spellings are matched without
/// case sensitivity. A single [`TokenKind::End`] token closes every stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A term name
    Var(String),
    /// The conjunction operator
    And,
    /// The disjunction operator
    Or,
    /// The negation operator
    Not,
    /// An opening parenthesis
    LParen,
    /// A closing parenthesis
    RParen,
    /// The end of the input
    End,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Var(name) => write!(f, r#"term "{}""#, name),
            TokenKind::And => write!(f, r#"operator "&&""#),
            TokenKind::Or => write!(f, r#"operator "||""#),
            TokenKind::Not => write!(f, r#"operator "!""#),
            TokenKind::LParen => write!(f, r#""(""#),
            TokenKind::RParen => write!(f, r#"")""#),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

/// A token produced by [`tokenize`], carrying the byte offset at which it
/// starts so errors can point at the offending input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Splits a formula into its tokens.
///
/// Whitespace is skipped. Identifiers follow the usual
/// `[A-Za-z_][A-Za-z0-9_]*` shape; the words `and`, `or` and `not` (in any
/// case) are operators, not identifiers. Any other character yields a
/// [`LexError`].
///
/// # Examples
///
/// ```
/// use bool2cnf::{tokenize, TokenKind};
///
/// let tokens = tokenize("a && !b").unwrap();
/// assert_eq!(TokenKind::Var("a".to_string()), tokens[0].kind);
/// assert_eq!(TokenKind::And, tokens[1].kind);
/// assert_eq!(TokenKind::Not, tokens[2].kind);
/// assert_eq!(TokenKind::End, tokens[4].kind);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '!' => TokenKind::Not,
            '&' => match chars.peek() {
                Some(&(_, '&')) => {
                    chars.next();
                    TokenKind::And
                }
                _ => {
                    return Err(LexError {
                        offset,
                        character: '&',
                    })
                }
            },
            '|' => match chars.peek() {
                Some(&(_, '|')) => {
                    chars.next();
                    TokenKind::Or
                }
                _ => {
                    return Err(LexError {
                        offset,
                        character: '|',
                    })
                }
            },
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut end = offset + c.len_utf8();
                while let Some(&(j, cc)) = chars.peek() {
                    if cc.is_ascii_alphanumeric() || cc == '_' {
                        end = j + cc.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let word = &input[offset..end];
                if word.eq_ignore_ascii_case("and") {
                    TokenKind::And
                } else if word.eq_ignore_ascii_case("or") {
                    TokenKind::Or
                } else if word.eq_ignore_ascii_case("not") {
                    TokenKind::Not
                } else {
                    TokenKind::Var(word.to_string())
                }
            }
            c => return Err(LexError { offset, character: c }),
        };
        tokens.push(Token { kind, offset });
    }
    tokens.push(Token {
        kind: TokenKind::End,
        offset: input.len(),
    });
    Ok(tokens)
}
