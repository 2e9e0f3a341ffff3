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

use crate::{
    formula_from_file, parse_tokens, solve_cnf, to_dimacs_string, to_infix_string, tokenize,
    transduce, write_dimacs, Assignment, AstNode, CnfFormula, SatBackend, SolveOptions,
    SolveOutcome,
};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::Path;

/// A formula together with its Tseitin encoding.
///
/// This is the entry point of the crate: build one from an infix formula or
/// a file, then export the encoding or check it for satisfiability.
///
/// # Examples
///
/// ```
/// use bool2cnf::TseitinFormula;
///
/// let formula = TseitinFormula::parse("a && !(b || c)").unwrap();
/// assert_eq!(3, formula.cnf().n_original_terms());
/// println!("{}", formula.to_dimacs_string(&[]));
/// ```
#[derive(Debug)]
pub struct TseitinFormula {
    source: String,
    ast: AstNode,
    cnf: CnfFormula,
}

impl TseitinFormula {
    /// Parses an infix formula and encodes it.
    ///
    /// An error is raised on a lexical or syntax error in the formula, and
    /// when one of its terms aliases the auxiliary variable namespace.
    pub fn parse(source: &str) -> Result<Self> {
        let context = || format!(r#"while encoding the formula "{}""#, source);
        let tokens = tokenize(source).with_context(context)?;
        let ast = parse_tokens(&tokens).with_context(context)?;
        debug!("formula parsed; {} term(s)", ast.term_names().len());
        let system = transduce(&ast);
        let cnf = CnfFormula::from_equations(&system).with_context(context)?;
        info!(
            "formula encoded into {} clause(s) over {} term(s) ({} auxiliary)",
            cnf.n_clauses(),
            cnf.n_terms(),
            cnf.n_aux_terms()
        );
        Ok(TseitinFormula {
            source: source.to_string(),
            ast,
            cnf,
        })
    }

    /// Loads a formula from a `txt`, `cnf` or `dnf` file and encodes it.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::parse(&formula_from_file(path)?)
    }

    /// Returns the encoded formula.
    pub fn cnf(&self) -> &CnfFormula {
        &self.cnf
    }

    /// Returns the infix formula this encoding was built from.
    pub fn original_formula(&self) -> &str {
        &self.source
    }

    /// Writes the encoding in DIMACS format.
    pub fn to_dimacs(&self, comments: &[&str], writer: &mut dyn Write) -> Result<()> {
        write_dimacs(&self.cnf, comments, writer)
    }

    /// Renders the encoding as a DIMACS string.
    pub fn to_dimacs_string(&self, comments: &[&str]) -> String {
        to_dimacs_string(&self.cnf, comments)
    }

    /// Renders the encoding as an infix conjunction of clauses.
    pub fn to_infix(&self, split: bool) -> String {
        to_infix_string(&self.cnf, split)
    }

    /// Checks the encoding against a SAT backend.
    ///
    /// The models found are equisatisfiability witnesses: restricted to the
    /// original terms (see [`original_assignments`](Self::original_assignments)),
    /// each one satisfies the source formula.
    pub fn solve(&self, backend: &mut dyn SatBackend, options: &SolveOptions) -> SolveOutcome {
        solve_cnf(&self.cnf, backend, options)
    }

    /// Evaluates the source formula under an assignment of its terms.
    ///
    /// Returns `None` when the assignment leaves a term unvalued.
    pub fn evaluate(&self, assignment: &Assignment) -> Option<bool> {
        self.ast.evaluate(assignment)
    }

    /// Restricts the models of an outcome to the original terms, dropping
    /// the auxiliary variables introduced by the encoding.
    pub fn original_assignments(&self, outcome: &SolveOutcome) -> Vec<Assignment> {
        let registry = self.cnf.registry();
        outcome
            .assignments
            .iter()
            .map(|model| {
                model
                    .iter()
                    .filter(|(name, _)| registry.is_original(registry.id_of(name)))
                    .map(|(name, value)| (name.clone(), *value))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{default_backend, CadicalBackend};

    #[test]
    fn test_parse_and_export() {
        let formula = TseitinFormula::parse("a && b").unwrap();
        assert_eq!("a && b", formula.original_formula());
        assert_eq!(
            "p cnf 3 4\n-1 -2 3 0\n1 -3 0\n2 -3 0\n3 0\n",
            formula.to_dimacs_string(&[])
        );
        assert_eq!(
            "(!a or !b or phi0) and (a or !phi0) and (b or !phi0) and (phi0)",
            formula.to_infix(false)
        );
    }

    #[test]
    fn test_parse_errors_carry_the_formula() {
        let error = TseitinFormula::parse("a &&").unwrap_err();
        assert!(error.to_string().contains(r#"while encoding the formula "a &&""#));
        let error = TseitinFormula::parse("phi0 && a").unwrap_err();
        assert!(error
            .root_cause()
            .to_string()
            .contains("collides with the auxiliary variable namespace"));
    }

    #[test]
    fn test_solve_sat_formula() {
        let formula = TseitinFormula::parse("(a || b) && !c").unwrap();
        let mut backend = default_backend();
        let outcome = formula.solve(backend.as_mut(), &SolveOptions::default());
        assert!(outcome.is_sat());
        let restricted = formula.original_assignments(&outcome);
        assert_eq!(1, restricted.len());
        assert_eq!(3, restricted[0].len());
        assert_eq!(Some(true), formula.evaluate(&restricted[0]));
    }

    #[test]
    fn test_solve_unsat_formula() {
        let formula = TseitinFormula::parse("a && !a").unwrap();
        let mut backend = CadicalBackend::new();
        let outcome = formula.solve(&mut backend, &SolveOptions::default());
        assert!(!outcome.is_sat());
        assert!(!outcome.interrupted);
    }

    #[test]
    fn test_enumerated_models_match_the_truth_table() {
        // the models of the encoding, restricted to the original terms, must
        // be exactly the satisfying rows of the source formula
        let inputs = [
            "a",
            "!a",
            "a && b",
            "a || b",
            "!(a && b)",
            "!(a || b) && c",
            "(a || b) && (!a || !b)",
            "a && (b || !c) && !(a && c)",
        ];
        for input in &inputs {
            let formula = TseitinFormula::parse(input).unwrap();
            let mut backend = CadicalBackend::new();
            let options = SolveOptions {
                all_models: true,
                ..SolveOptions::default()
            };
            let outcome = formula.solve(&mut backend, &options);
            let mut found: Vec<Assignment> = formula
                .original_assignments(&outcome)
                .into_iter()
                .collect();
            found.sort_by_key(assignment_key);
            found.dedup_by_key(|a| assignment_key(a));
            let expected = satisfying_rows(&formula);
            assert_eq!(
                expected.len(),
                found.len(),
                "model count mismatch for {}",
                input
            );
            for model in &found {
                assert_eq!(
                    Some(true),
                    formula.evaluate(model),
                    "spurious model for {}",
                    input
                );
            }
        }
    }

    fn assignment_key(assignment: &Assignment) -> String {
        let mut entries: Vec<String> = assignment
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        entries.sort();
        entries.join(",")
    }

    fn satisfying_rows(formula: &TseitinFormula) -> Vec<Assignment> {
        let mut names = term_names_of(formula);
        names.sort();
        let mut rows = Vec::new();
        for bits in 0..(1u32 << names.len()) {
            let assignment: Assignment = names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), bits & (1 << i) != 0))
                .collect();
            if formula.evaluate(&assignment) == Some(true) {
                rows.push(assignment);
            }
        }
        rows
    }

    fn term_names_of(formula: &TseitinFormula) -> Vec<String> {
        let registry = formula.cnf().registry();
        (1..=registry.len())
            .filter(|&id| registry.is_original(id))
            .map(|id| registry.name_of(id).to_string())
            .collect()
    }

    #[test]
    fn test_from_file() {
        use std::io::Write as _;
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"a &&\n!b\n").unwrap();
        let formula = TseitinFormula::from_file(file.path()).unwrap();
        assert_eq!("a && !b", formula.original_formula());
        assert_eq!(2, formula.cnf().n_original_terms());
    }

    #[test]
    fn test_logging() {
        let mut logger = logtest::Logger::start();
        TseitinFormula::parse("a && b").unwrap();
        let mut records = Vec::new();
        while let Some(record) = logger.pop() {
            records.push(record.args().to_string());
        }
        assert!(records
            .iter()
            .any(|r| r.contains("encoded into 4 clause(s) over 3 term(s) (1 auxiliary)")));
    }
}
