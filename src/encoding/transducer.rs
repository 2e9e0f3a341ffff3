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

use crate::{AstNode, BinaryOp, Equation, EquationOp, Operand};
use rustc_hash::FxHashSet;

/// The ordered equation system produced by [`transduce`].
#[derive(Debug)]
pub struct EquationSystem {
    /// One equation per internal node (plus one NOT equation per negated
    /// literal operand), children before parents.
    pub equations: Vec<Equation>,
    /// The reference whose truth asserts the whole formula.
    pub top: Operand,
    /// The names of the terms appearing in the input formula.
    pub original_terms: FxHashSet<String>,
}

/// Work items of the traversal: a node is first descended into, then emitted
/// once both its subtrees have produced their equations.
enum Frame<'a> {
    Descend(&'a AstNode),
    Emit(&'a AstNode),
}

/// Runs the Tseitin transformation on a formula tree, producing one named
/// equation per internal node in post order.
///
/// The traversal uses an explicit work stack instead of language recursion:
/// free-form or machine-generated formulas can be deep skewed chains, and the
/// auxiliary memory here is bounded by the tree size whatever its shape.
/// Bare literal subtrees are never descended into; a negated literal operand
/// synthesizes a standalone NOT equation right before the equation that uses
/// it, so downstream clauses only ever reference unnegated names.
///
/// A formula consisting of a single literal produces no binary equation at
/// all: its top reference is the term itself, or its NOT equation when the
/// literal is negated.
///
/// # Examples
///
/// ```
/// use bool2cnf::{parse_tokens, tokenize, transduce, EquationOp, Operand};
///
/// let ast = parse_tokens(&tokenize("a && b").unwrap()).unwrap();
/// let system = transduce(&ast);
/// assert_eq!(1, system.equations.len());
/// assert_eq!(EquationOp::And, system.equations[0].op);
/// assert_eq!(Operand::Aux(0), system.top);
/// ```
pub fn transduce(root: &AstNode) -> EquationSystem {
    let mut equations = Vec::new();
    let mut original_terms = FxHashSet::default();
    if let AstNode::Literal { .. } = root {
        let top = resolve_literal(root, &mut equations, &mut original_terms);
        return EquationSystem {
            equations,
            top,
            original_terms,
        };
    }
    // indexes of the equations of completed binary subtrees; when a node is
    // emitted, the top entries are exactly its binary children
    let mut completed: Vec<usize> = Vec::new();
    let mut work = vec![Frame::Descend(root)];
    while let Some(frame) = work.pop() {
        match frame {
            Frame::Descend(node) => {
                if let AstNode::Binary { left, right, .. } = node {
                    work.push(Frame::Emit(node));
                    if is_binary(right) {
                        work.push(Frame::Descend(right));
                    }
                    if is_binary(left) {
                        work.push(Frame::Descend(left));
                    }
                }
            }
            Frame::Emit(node) => {
                if let AstNode::Binary {
                    op,
                    negated,
                    left,
                    right,
                } = node
                {
                    let rhs_index = if is_binary(right) {
                        completed.pop()
                    } else {
                        None
                    };
                    let lhs_index = if is_binary(left) {
                        completed.pop()
                    } else {
                        None
                    };
                    let lhs = match lhs_index {
                        Some(i) => Operand::Aux(i),
                        None => resolve_literal(left, &mut equations, &mut original_terms),
                    };
                    let rhs = match rhs_index {
                        Some(i) => Operand::Aux(i),
                        None => resolve_literal(right, &mut equations, &mut original_terms),
                    };
                    equations.push(Equation {
                        op: equation_op(*op, *negated),
                        lhs,
                        rhs: Some(rhs),
                    });
                    completed.push(equations.len() - 1);
                }
            }
        }
    }
    let top_index = completed.pop().unwrap();
    EquationSystem {
        equations,
        top: Operand::Aux(top_index),
        original_terms,
    }
}

fn is_binary(node: &AstNode) -> bool {
    matches!(node, AstNode::Binary { .. })
}

fn equation_op(op: BinaryOp, negated: bool) -> EquationOp {
    match (op, negated) {
        (BinaryOp::And, false) => EquationOp::And,
        (BinaryOp::And, true) => EquationOp::Nand,
        (BinaryOp::Or, false) => EquationOp::Or,
        (BinaryOp::Or, true) => EquationOp::Nor,
    }
}

fn resolve_literal(
    node: &AstNode,
    equations: &mut Vec<Equation>,
    original_terms: &mut FxHashSet<String>,
) -> Operand {
    match node {
        AstNode::Literal { name, negated } => {
            original_terms.insert(name.clone());
            if *negated {
                equations.push(Equation {
                    op: EquationOp::Not,
                    lhs: Operand::Term(name.clone()),
                    rhs: None,
                });
                Operand::Aux(equations.len() - 1)
            } else {
                Operand::Term(name.clone())
            }
        }
        AstNode::Binary { .. } => unreachable!(),
    }
}
