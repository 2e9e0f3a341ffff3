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

use crate::{AstNode, BinaryOp, ParseError, ParseErrorKind, Token, TokenKind};

/// Parses a token stream into a formula tree.
///
/// The grammar, from lowest to highest precedence:
///
/// ```text
/// Or      := And (OR And)*
/// And     := Not (AND Not)*
/// Not     := NOT Not | Primary
/// Primary := VAR | LPAREN Or RPAREN
/// ```
///
/// AND and OR are left-associative. Negation never becomes a node of its
/// own: it flips the `negated` flag of the expression it applies to, so
/// `!!a` parses to the very same tree as `a` and `!(a && b)` to a single
/// complemented conjunction node.
///
/// # Examples
///
/// ```
/// use bool2cnf::{parse_tokens, tokenize, AstNode, BinaryOp};
///
/// let ast = parse_tokens(&tokenize("a && b").unwrap()).unwrap();
/// assert_eq!(
///     AstNode::binary(BinaryOp::And, AstNode::literal("a"), AstNode::literal("b")),
///     ast
/// );
/// ```
pub fn parse_tokens(tokens: &[Token]) -> Result<AstNode, ParseError> {
    let mut parser = Parser { tokens, pos: 0 };
    if let TokenKind::End = parser.peek().kind {
        return Err(ParseError {
            offset: 0,
            kind: ParseErrorKind::EmptyInput,
        });
    }
    let node = parser.parse_or()?;
    let trailing = parser.peek();
    match trailing.kind {
        TokenKind::End => Ok(node),
        _ => Err(ParseError {
            offset: trailing.offset,
            kind: ParseErrorKind::TrailingInput(format!("{}", trailing.kind)),
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> &'a Token {
        // the End token is never consumed, so indexing cannot run past it
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> &'a Token {
        let t = &self.tokens[self.pos];
        self.pos += 1;
        t
    }

    fn parse_or(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.parse_and()?;
        while let TokenKind::Or = self.peek().kind {
            self.advance();
            let rhs = self.parse_and()?;
            node = AstNode::binary(BinaryOp::Or, node, rhs);
        }
        Ok(node)
    }

    fn parse_and(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.parse_not()?;
        while let TokenKind::And = self.peek().kind {
            self.advance();
            let rhs = self.parse_not()?;
            node = AstNode::binary(BinaryOp::And, node, rhs);
        }
        Ok(node)
    }

    fn parse_not(&mut self) -> Result<AstNode, ParseError> {
        if let TokenKind::Not = self.peek().kind {
            self.advance();
            let mut node = self.parse_not()?;
            node.toggle_negation();
            Ok(node)
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<AstNode, ParseError> {
        let token = self.advance();
        match &token.kind {
            TokenKind::Var(name) => Ok(AstNode::literal(name.clone())),
            TokenKind::LParen => {
                let node = self.parse_or()?;
                let closing = self.peek();
                if let TokenKind::RParen = closing.kind {
                    self.advance();
                    Ok(node)
                } else {
                    Err(ParseError {
                        offset: token.offset,
                        kind: ParseErrorKind::UnmatchedParenthesis,
                    })
                }
            }
            kind => Err(ParseError {
                offset: token.offset,
                kind: ParseErrorKind::UnexpectedToken(format!("{}", kind)),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn parse(input: &str) -> Result<AstNode, ParseError> {
        parse_tokens(&tokenize(input).unwrap())
    }

    #[test]
    fn test_double_negation_cancels() {
        assert_eq!(parse("a").unwrap(), parse("!!a").unwrap());
        assert_eq!(parse("!a").unwrap(), parse("!!!a").unwrap());
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(
            AstNode::binary(
                BinaryOp::Or,
                AstNode::literal("a"),
                AstNode::binary(BinaryOp::And, AstNode::literal("b"), AstNode::literal("c")),
            ),
            parse("a || b && c").unwrap()
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            AstNode::binary(
                BinaryOp::And,
                AstNode::binary(BinaryOp::Or, AstNode::literal("a"), AstNode::literal("b")),
                AstNode::literal("c"),
            ),
            parse("(a || b) && c").unwrap()
        );
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(
            AstNode::binary(
                BinaryOp::And,
                AstNode::binary(BinaryOp::And, AstNode::literal("a"), AstNode::literal("b")),
                AstNode::literal("c"),
            ),
            parse("a && b && c").unwrap()
        );
    }

    #[test]
    fn test_negated_binary_is_a_single_node() {
        assert_eq!(
            AstNode::Binary {
                op: BinaryOp::And,
                negated: true,
                left: Box::new(AstNode::literal("a")),
                right: Box::new(AstNode::literal("b")),
            },
            parse("!(a && b)").unwrap()
        );
    }

    #[test]
    fn test_negation_on_literal_sets_flag() {
        assert_eq!(
            AstNode::Literal {
                name: "a".to_string(),
                negated: true,
            },
            parse("!a").unwrap()
        );
    }

    #[test]
    fn test_word_and_symbol_spellings_parse_alike() {
        assert_eq!(parse("a && !b || c").unwrap(), parse("a and not b or c").unwrap());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            ParseError {
                offset: 0,
                kind: ParseErrorKind::EmptyInput,
            },
            parse("").unwrap_err()
        );
        assert_eq!(
            ParseErrorKind::EmptyInput,
            parse("   ").unwrap_err().kind
        );
    }

    #[test]
    fn test_unmatched_parenthesis() {
        assert_eq!(
            ParseError {
                offset: 0,
                kind: ParseErrorKind::UnmatchedParenthesis,
            },
            parse("(a && b").unwrap_err()
        );
    }

    #[test]
    fn test_trailing_input() {
        assert_eq!(
            ParseError {
                offset: 2,
                kind: ParseErrorKind::TrailingInput(r#"")""#.to_string()),
            },
            parse("a ) b").unwrap_err()
        );
        assert!(matches!(
            parse("a b").unwrap_err().kind,
            ParseErrorKind::TrailingInput(_)
        ));
    }

    #[test]
    fn test_unexpected_token() {
        assert_eq!(
            ParseError {
                offset: 5,
                kind: ParseErrorKind::UnexpectedToken("end of input".to_string()),
            },
            parse("a && ").unwrap_err()
        );
        assert!(matches!(
            parse("&& a").unwrap_err().kind,
            ParseErrorKind::UnexpectedToken(_)
        ));
        assert!(matches!(
            parse("a && || b").unwrap_err().kind,
            ParseErrorKind::UnexpectedToken(_)
        ));
    }

    #[test]
    fn test_long_operator_chain_is_iterative() {
        // left-associative chains must not recurse per operator
        let mut input = String::from("x0");
        for i in 1..5_000 {
            input.push_str(&format!(" && x{}", i));
        }
        let ast = parse(&input).unwrap();
        assert!(matches!(ast, AstNode::Binary { op: BinaryOp::And, .. }));
    }
}
