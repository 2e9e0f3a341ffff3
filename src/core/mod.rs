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

mod ast;
pub use ast::AstNode;
pub use ast::BinaryOp;

mod errors;
pub use errors::FormatError;
pub use errors::LexError;
pub use errors::NamingCollisionError;
pub use errors::ParseError;
pub use errors::ParseErrorKind;

mod parser;
pub use parser::parse_tokens;

mod token;
pub use token::tokenize;
pub use token::Token;
pub use token::TokenKind;
