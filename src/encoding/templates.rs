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

use crate::{Clause, Equation, EquationOp, Lit};

/// Expands an equation named `name` into the clauses encoding the
/// biconditional between the auxiliary variable and its operands.
pub(crate) fn clauses_for(name: &str, eq: &Equation) -> Vec<Clause> {
    let v = name;
    let l = eq.lhs.to_name();
    match eq.op {
        EquationOp::And => {
            let r = eq.rhs.as_ref().map(|o| o.to_name()).unwrap();
            vec![
                Clause::new(vec![Lit::neg(&l), Lit::neg(&r), Lit::pos(v)]),
                Clause::new(vec![Lit::pos(&l), Lit::neg(v)]),
                Clause::new(vec![Lit::pos(&r), Lit::neg(v)]),
            ]
        }
        EquationOp::Nand => {
            let r = eq.rhs.as_ref().map(|o| o.to_name()).unwrap();
            vec![
                Clause::new(vec![Lit::neg(&l), Lit::neg(&r), Lit::neg(v)]),
                Clause::new(vec![Lit::pos(&l), Lit::pos(v)]),
                Clause::new(vec![Lit::pos(&r), Lit::pos(v)]),
            ]
        }
        EquationOp::Or => {
            let r = eq.rhs.as_ref().map(|o| o.to_name()).unwrap();
            vec![
                Clause::new(vec![Lit::pos(&l), Lit::pos(&r), Lit::neg(v)]),
                Clause::new(vec![Lit::neg(&l), Lit::pos(v)]),
                Clause::new(vec![Lit::neg(&r), Lit::pos(v)]),
            ]
        }
        EquationOp::Nor => {
            let r = eq.rhs.as_ref().map(|o| o.to_name()).unwrap();
            vec![
                Clause::new(vec![Lit::pos(&l), Lit::pos(&r), Lit::pos(v)]),
                Clause::new(vec![Lit::neg(&l), Lit::neg(v)]),
                Clause::new(vec![Lit::neg(&r), Lit::neg(v)]),
            ]
        }
        EquationOp::Not => vec![
            Clause::new(vec![Lit::pos(&l), Lit::pos(v)]),
            Clause::new(vec![Lit::neg(&l), Lit::neg(v)]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operand;

    fn binary_eq(op: EquationOp) -> Equation {
        Equation {
            op,
            lhs: Operand::Term("a".to_string()),
            rhs: Some(Operand::Term("b".to_string())),
        }
    }

    fn rendered(name: &str, eq: &Equation) -> Vec<String> {
        clauses_for(name, eq)
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_and_clauses() {
        assert_eq!(
            vec!["(!a or !b or v)", "(a or !v)", "(b or !v)"],
            rendered("v", &binary_eq(EquationOp::And))
        );
    }

    #[test]
    fn test_nand_clauses() {
        assert_eq!(
            vec!["(!a or !b or !v)", "(a or v)", "(b or v)"],
            rendered("v", &binary_eq(EquationOp::Nand))
        );
    }

    #[test]
    fn test_or_clauses() {
        assert_eq!(
            vec!["(a or b or !v)", "(!a or v)", "(!b or v)"],
            rendered("v", &binary_eq(EquationOp::Or))
        );
    }

    #[test]
    fn test_nor_clauses() {
        assert_eq!(
            vec!["(a or b or v)", "(!a or !v)", "(!b or !v)"],
            rendered("v", &binary_eq(EquationOp::Nor))
        );
    }

    #[test]
    fn test_not_clauses() {
        let eq = Equation {
            op: EquationOp::Not,
            lhs: Operand::Term("a".to_string()),
            rhs: None,
        };
        assert_eq!(vec!["(a or v)", "(!a or !v)"], rendered("v", &eq));
    }
}
