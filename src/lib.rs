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

mod converter;
mod core;
mod encoding;
mod io;
mod sat;

pub use crate::core::AstNode;
pub use crate::core::BinaryOp;
pub use crate::core::FormatError;
pub use crate::core::LexError;
pub use crate::core::NamingCollisionError;
pub use crate::core::ParseError;
pub use crate::core::ParseErrorKind;
pub use crate::core::Token;
pub use crate::core::TokenKind;
pub use crate::core::{parse_tokens, tokenize};

pub use encoding::aux_name;
pub use encoding::transduce;
pub use encoding::Clause;
pub use encoding::CnfFormula;
pub use encoding::Equation;
pub use encoding::EquationOp;
pub use encoding::EquationSystem;
pub use encoding::Lit;
pub use encoding::Operand;
pub use encoding::TermRegistry;

pub use io::formula_from_file;
pub use io::to_dimacs_string;
pub use io::to_infix_string;
pub use io::write_dimacs;

pub use sat::default_backend;
pub use sat::solve_cnf;
pub use sat::Assignment;
pub use sat::CadicalBackend;
pub use sat::SatBackend;
pub use sat::SolveOptions;
pub use sat::SolveOutcome;

pub use converter::TseitinFormula;
