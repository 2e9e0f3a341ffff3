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

use super::templates;
use crate::{aux_name, EquationSystem, NamingCollisionError, TermRegistry};
use std::fmt::{self, Display, Formatter};

/// A named literal, that is, a term or its negation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lit {
    name: String,
    positive: bool,
}

impl Lit {
    /// Builds a positive literal on the given term.
    pub fn pos<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        Lit {
            name: name.into(),
            positive: true,
        }
    }

    /// Builds a negative literal on the given term.
    pub fn neg<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        Lit {
            name: name.into(),
            positive: false,
        }
    }

    /// Returns the name of the underlying term.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` iff the literal is the unnegated term.
    pub fn is_positive(&self) -> bool {
        self.positive
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.name)
        } else {
            write!(f, "!{}", self.name)
        }
    }
}

/// A disjunction of literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause(Vec<Lit>);

impl Clause {
    pub fn new(lits: Vec<Lit>) -> Self {
        Clause(lits)
    }

    pub fn lits(&self) -> &[Lit] {
        &self.0
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, lit) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " or ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, ")")
    }
}

/// A formula in conjunctive normal form, with the registry mapping its term
/// names to the indexes used for DIMACS output and solver calls.
#[derive(Debug)]
pub struct CnfFormula {
    clauses: Vec<Clause>,
    registry: TermRegistry,
    n_original_terms: usize,
    n_aux_terms: usize,
}

impl CnfFormula {
    /// Expands an equation system into its clauses.
    ///
    /// Each equation yields the clauses of its biconditional template, the
    /// auxiliary variable of the i-th equation being named `phi{i}`.
    /// A trailing unit clause asserts the system's top reference, making the
    /// result equisatisfiable with the encoded formula.
    ///
    /// An error is returned if a term of the input formula is itself named
    /// like an auxiliary variable, as the encoding could not tell the two
    /// apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use bool2cnf::{parse_tokens, tokenize, transduce, CnfFormula};
    ///
    /// let ast = parse_tokens(&tokenize("a && b").unwrap()).unwrap();
    /// let cnf = CnfFormula::from_equations(&transduce(&ast)).unwrap();
    /// assert_eq!(3, cnf.n_terms());
    /// assert_eq!(4, cnf.n_clauses());
    /// ```
    pub fn from_equations(system: &EquationSystem) -> Result<Self, NamingCollisionError> {
        let mut clauses = Vec::with_capacity(3 * system.equations.len() + 1);
        for (i, eq) in system.equations.iter().enumerate() {
            clauses.append(&mut templates::clauses_for(&aux_name(i), eq));
        }
        clauses.push(Clause::new(vec![Lit::pos(system.top.to_name())]));
        let registry = TermRegistry::from_clauses(&clauses, &system.original_terms)?;
        let n_original_terms = system.original_terms.len();
        Ok(CnfFormula {
            clauses,
            registry,
            n_original_terms,
            n_aux_terms: system.equations.len(),
        })
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn registry(&self) -> &TermRegistry {
        &self.registry
    }

    /// Returns the total number of terms, original and auxiliary.
    pub fn n_terms(&self) -> usize {
        self.n_original_terms + self.n_aux_terms
    }

    pub fn n_original_terms(&self) -> usize {
        self.n_original_terms
    }

    pub fn n_aux_terms(&self) -> usize {
        self.n_aux_terms
    }

    pub fn n_clauses(&self) -> usize {
        self.clauses.len()
    }
}
