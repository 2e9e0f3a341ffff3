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

use rustc_hash::FxHashMap;

/// The two binary connectives of the formula language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// Conjunction
    And,
    /// Disjunction
    Or,
}

/// A node of the parsed formula tree.
///
/// Negation is carried as a flag instead of a dedicated node kind: negating a
/// [`Literal`] flips its flag, negating a [`Binary`] complements its whole
/// subtree (yielding NAND/NOR downstream). Each `Binary` exclusively owns its
/// two children; the tree contains no shared or cyclic references.
///
/// [`Literal`]: AstNode::Literal
/// [`Binary`]: AstNode::Binary
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstNode {
    /// A term leaf
    Literal { name: String, negated: bool },
    /// A conjunction or disjunction over two subtrees
    Binary {
        op: BinaryOp,
        negated: bool,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
}

impl AstNode {
    /// Builds a non-negated term leaf.
    pub fn literal<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        AstNode::Literal {
            name: name.into(),
            negated: false,
        }
    }

    /// Builds a non-negated binary node over the two given subtrees.
    pub fn binary(op: BinaryOp, left: AstNode, right: AstNode) -> Self {
        AstNode::Binary {
            op,
            negated: false,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Complements this node in place.
    ///
    /// Two applications cancel each other out, whatever the node kind.
    pub(crate) fn toggle_negation(&mut self) {
        match self {
            AstNode::Literal { negated, .. } => *negated = !*negated,
            AstNode::Binary { negated, .. } => *negated = !*negated,
        }
    }

    /// Evaluates the formula rooted at this node under an assignment of the
    /// term names, or returns `None` if a term the formula depends on is
    /// unassigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bool2cnf::{tokenize, parse_tokens};
    /// use rustc_hash::FxHashMap;
    ///
    /// let ast = parse_tokens(&tokenize("a && !b").unwrap()).unwrap();
    /// let mut assignment = FxHashMap::default();
    /// assignment.insert("a".to_string(), true);
    /// assignment.insert("b".to_string(), false);
    /// assert_eq!(Some(true), ast.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &FxHashMap<String, bool>) -> Option<bool> {
        match self {
            AstNode::Literal { name, negated } => {
                assignment.get(name).map(|v| *v != *negated)
            }
            AstNode::Binary {
                op,
                negated,
                left,
                right,
            } => {
                let l = left.evaluate(assignment)?;
                let r = right.evaluate(assignment)?;
                let v = match op {
                    BinaryOp::And => l && r,
                    BinaryOp::Or => l || r,
                };
                Some(v != *negated)
            }
        }
    }

    fn take_children_into(&mut self, stack: &mut Vec<Box<AstNode>>) {
        fn placeholder() -> Box<AstNode> {
            Box::new(AstNode::Literal {
                name: String::new(),
                negated: false,
            })
        }
        if let AstNode::Binary { left, right, .. } = self {
            stack.push(std::mem::replace(left, placeholder()));
            stack.push(std::mem::replace(right, placeholder()));
        }
    }

    /// Returns the distinct term names appearing in the formula rooted at
    /// this node, in order of first appearance (left to right).
    pub fn term_names(&self) -> Vec<String> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                AstNode::Literal { name, .. } => {
                    if !result.contains(name) {
                        result.push(name.clone());
                    }
                }
                AstNode::Binary { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        result
    }
}

impl Drop for AstNode {
    // unlinks the children iteratively: the derived drop glue recurses and
    // would overflow the call stack on deep skewed trees
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children_into(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.take_children_into(&mut stack);
        }
    }
}
