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

use crate::{Clause, NamingCollisionError};
use lazy_static::lazy_static;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

lazy_static! {
    static ref AUX_NAME_RE: Regex = Regex::new(r"^phi\d+$").unwrap();
}

/// The bijection between the term names of a CNF formula and the contiguous
/// 1-based indexes used for DIMACS output and solver calls.
///
/// Indexes follow the first occurrence of each name in the clause sequence,
/// so repeated exports of the same formula always number terms identically.
#[derive(Debug)]
pub struct TermRegistry {
    ids: FxHashMap<String, usize>,
    names: Vec<String>,
    original: Vec<bool>,
}

impl TermRegistry {
    /// Registers the terms of a clause sequence in order of first occurrence.
    ///
    /// Terms of the input formula whose name matches an auxiliary variable
    /// name are rejected.
    pub(crate) fn from_clauses(
        clauses: &[Clause],
        original_terms: &FxHashSet<String>,
    ) -> Result<Self, NamingCollisionError> {
        let mut registry = TermRegistry {
            ids: FxHashMap::default(),
            names: Vec::new(),
            original: Vec::new(),
        };
        for clause in clauses {
            for lit in clause.lits() {
                let name = lit.name();
                if registry.ids.contains_key(name) {
                    continue;
                }
                let is_original = original_terms.contains(name);
                if is_original && AUX_NAME_RE.is_match(name) {
                    return Err(NamingCollisionError {
                        name: name.to_string(),
                    });
                }
                registry.names.push(name.to_string());
                registry.original.push(is_original);
                registry.ids.insert(name.to_string(), registry.names.len());
            }
        }
        Ok(registry)
    }

    /// Returns the 1-based index of a term name.
    ///
    /// # Panics
    ///
    /// Panics if the name is not registered.
    pub fn id_of(&self, name: &str) -> usize {
        self.ids[name]
    }

    /// Returns the name registered at a 1-based index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn name_of(&self, id: usize) -> &str {
        &self.names[id - 1]
    }

    /// Returns `true` iff the term at a 1-based index comes from the input
    /// formula rather than from the encoding.
    pub fn is_original(&self, id: usize) -> bool {
        self.original[id - 1]
    }

    /// Returns the number of registered terms.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Maps a clause to the signed indexes of its literals.
    pub fn clause_to_ints(&self, clause: &Clause) -> Vec<i32> {
        clause
            .lits()
            .iter()
            .map(|lit| {
                let id = self.ids[lit.name()] as i32;
                if lit.is_positive() {
                    id
                } else {
                    -id
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_tokens, tokenize, transduce, CnfFormula};

    fn cnf_of(input: &str) -> CnfFormula {
        let ast = parse_tokens(&tokenize(input).unwrap()).unwrap();
        CnfFormula::from_equations(&transduce(&ast)).unwrap()
    }

    #[test]
    fn test_ids_follow_first_occurrence() {
        let cnf = cnf_of("a && b");
        let registry = cnf.registry();
        assert_eq!(1, registry.id_of("a"));
        assert_eq!(2, registry.id_of("b"));
        assert_eq!(3, registry.id_of("phi0"));
        assert_eq!(3, registry.len());
    }

    #[test]
    fn test_names_round_trip() {
        let cnf = cnf_of("x || !y");
        let registry = cnf.registry();
        for id in 1..=registry.len() {
            assert_eq!(id, registry.id_of(registry.name_of(id)));
        }
    }

    #[test]
    fn test_original_flags() {
        let cnf = cnf_of("a && !b");
        let registry = cnf.registry();
        assert!(registry.is_original(registry.id_of("a")));
        assert!(registry.is_original(registry.id_of("b")));
        assert!(!registry.is_original(registry.id_of("phi0")));
        assert!(!registry.is_original(registry.id_of("phi1")));
    }

    #[test]
    fn test_clause_to_ints_keeps_polarities() {
        let cnf = cnf_of("a && b");
        let registry = cnf.registry();
        let ints: Vec<Vec<i32>> = cnf
            .clauses()
            .iter()
            .map(|c| registry.clause_to_ints(c))
            .collect();
        assert_eq!(
            vec![vec![-1, -2, 3], vec![1, -3], vec![2, -3], vec![3]],
            ints
        );
    }

    #[test]
    fn test_numbering_is_stable_across_rebuilds() {
        let first = cnf_of("(a || b) && !c");
        let second = cnf_of("(a || b) && !c");
        for id in 1..=first.registry().len() {
            assert_eq!(first.registry().name_of(id), second.registry().name_of(id));
        }
    }
}
