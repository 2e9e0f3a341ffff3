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

/// Returns the synthetic name of the auxiliary variable defined by the
/// equation at the given index.
///
/// # Examples
///
/// ```
/// use bool2cnf::aux_name;
///
/// assert_eq!("phi0", aux_name(0));
/// assert_eq!("phi12", aux_name(12));
/// ```
pub fn aux_name(index: usize) -> String {
    format!("phi{}", index)
}

/// The connective defining an auxiliary variable.
///
/// NAND and NOR come from complemented binary nodes; NOT equations are
/// synthesized for negated literal operands so that every reference found in
/// a clause is an unnegated term or auxiliary name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquationOp {
    And,
    Nand,
    Or,
    Nor,
    Not,
}

/// A reference to an equation operand: either a plain term name or the index
/// of a previously produced equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// An original term, by name
    Term(String),
    /// The auxiliary variable of the equation at this index
    Aux(usize),
}

impl Operand {
    /// Returns the variable name this operand refers to.
    pub fn to_name(&self) -> String {
        match self {
            Operand::Term(name) => name.clone(),
            Operand::Aux(index) => aux_name(*index),
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_name())
    }
}

/// One equation of the Tseitin system: the auxiliary variable at the
/// equation's index is constrained to be equivalent to `lhs op rhs` (or to
/// `not lhs` for [`EquationOp::Not`], which has no right operand).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    pub op: EquationOp,
    pub lhs: Operand,
    pub rhs: Option<Operand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aux_name() {
        assert_eq!("phi0", aux_name(0));
        assert_eq!("phi41", aux_name(41));
    }

    #[test]
    fn test_operand_names() {
        assert_eq!("a", Operand::Term("a".to_string()).to_name());
        assert_eq!("phi3", Operand::Aux(3).to_name());
        assert_eq!("phi3", format!("{}", Operand::Aux(3)));
    }
}
