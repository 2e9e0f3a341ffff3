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

use crate::CnfFormula;
use anyhow::{Context, Result};
use std::io::Write;

/// Writes a CNF formula in DIMACS format.
///
/// Each comment of `comments` yields a `c` line before the problem line; the
/// problem line counts all the terms, original and auxiliary.
pub fn write_dimacs(cnf: &CnfFormula, comments: &[&str], writer: &mut dyn Write) -> Result<()> {
    let context = "while writing a DIMACS formula";
    for comment in comments {
        writeln!(writer, "c {}", comment).context(context)?;
    }
    writeln!(writer, "p cnf {} {}", cnf.n_terms(), cnf.n_clauses()).context(context)?;
    let registry = cnf.registry();
    for clause in cnf.clauses() {
        for int in registry.clause_to_ints(clause) {
            write!(writer, "{} ", int).context(context)?;
        }
        writeln!(writer, "0").context(context)?;
    }
    Ok(())
}

/// Renders a CNF formula as a DIMACS string.
///
/// # Examples
///
/// ```
/// use bool2cnf::{parse_tokens, to_dimacs_string, tokenize, transduce, CnfFormula};
///
/// let ast = parse_tokens(&tokenize("a && b").unwrap()).unwrap();
/// let cnf = CnfFormula::from_equations(&transduce(&ast)).unwrap();
/// assert_eq!(
///     "p cnf 3 4\n-1 -2 3 0\n1 -3 0\n2 -3 0\n3 0\n",
///     to_dimacs_string(&cnf, &[])
/// );
/// ```
pub fn to_dimacs_string(cnf: &CnfFormula, comments: &[&str]) -> String {
    let mut buffer = Vec::new();
    write_dimacs(cnf, comments, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Renders a CNF formula as a human-readable infix conjunction of clauses.
///
/// When `split` is set, a line break follows each `and` connective.
pub fn to_infix_string(cnf: &CnfFormula, split: bool) -> String {
    let separator = if split { " and\n" } else { " and " };
    cnf.clauses()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(separator)
}
