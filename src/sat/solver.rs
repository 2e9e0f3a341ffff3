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
use log::{debug, info};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// A truth assignment, mapping term names to their values.
pub type Assignment = FxHashMap<String, bool>;

/// The interface a SAT solver must provide to check the formulas produced by
/// this crate.
pub trait SatBackend {
    /// Adds a clause given as DIMACS-style signed variable indexes.
    fn add_clause(&mut self, lits: &[i32]);

    /// Runs the solver.
    ///
    /// Returns `Some(true)` on SAT, `Some(false)` on UNSAT, and `None` when
    /// the search was interrupted before an answer was found.
    fn solve(&mut self) -> Option<bool>;

    /// Returns the value of a variable in the last model.
    fn value(&self, var: i32) -> bool;

    /// Registers the flag the solver must poll; when it is raised, the
    /// solver gives up its current search as soon as possible.
    fn set_stop_flag(&mut self, flag: Arc<AtomicBool>);
}

/// The options driving [`solve_cnf`].
#[derive(Clone, Debug)]
pub struct SolveOptions {
    /// Enumerate every model instead of stopping at the first one.
    pub all_models: bool,
    /// Give up the search after this delay.
    pub timeout: Option<Duration>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            all_models: false,
            timeout: None,
        }
    }
}

/// The result of a solver run.
#[derive(Debug)]
pub struct SolveOutcome {
    /// The time spent in the run.
    pub elapsed: Duration,
    /// The models found, named through the formula's registry.
    pub assignments: Vec<Assignment>,
    /// Set when the run was stopped by the timeout; the assignments found
    /// before the interruption are still reported.
    pub interrupted: bool,
}

impl SolveOutcome {
    /// Returns `true` iff at least one model was found.
    pub fn is_sat(&self) -> bool {
        !self.assignments.is_empty()
    }
}

/// Checks a CNF formula against a SAT backend.
///
/// The formula's clauses are uploaded through its registry, then models are
/// requested; when enumerating, each model found is excluded by a blocking
/// clause before the next call. A timeout raises the backend's stop flag
/// from a timer thread; hitting it is not an error, the outcome just carries
/// the `interrupted` marker along with whatever was found by then.
pub fn solve_cnf(
    cnf: &CnfFormula,
    backend: &mut dyn SatBackend,
    options: &SolveOptions,
) -> SolveOutcome {
    let start = Instant::now();
    let stop = Arc::new(AtomicBool::new(false));
    backend.set_stop_flag(Arc::clone(&stop));
    if let Some(timeout) = options.timeout {
        let timer_stop = Arc::clone(&stop);
        thread::spawn(move || {
            thread::sleep(timeout);
            timer_stop.store(true, Ordering::Relaxed);
        });
    }
    let registry = cnf.registry();
    for clause in cnf.clauses() {
        backend.add_clause(&registry.clause_to_ints(clause));
    }
    let n_vars = registry.len() as i32;
    let mut assignments = Vec::new();
    let mut interrupted = false;
    loop {
        match backend.solve() {
            Some(true) => {
                let mut assignment = Assignment::default();
                let mut blocking = Vec::with_capacity(n_vars as usize);
                for var in 1..=n_vars {
                    let value = backend.value(var);
                    assignment.insert(registry.name_of(var as usize).to_string(), value);
                    blocking.push(if value { -var } else { var });
                }
                assignments.push(assignment);
                debug!("model {} found", assignments.len());
                if !options.all_models {
                    break;
                }
                backend.add_clause(&blocking);
            }
            Some(false) => break,
            None => {
                interrupted = true;
                break;
            }
        }
    }
    let elapsed = start.elapsed();
    info!(
        "solver run ended after {}ms with {} model(s){}",
        elapsed.as_millis(),
        assignments.len(),
        if interrupted { " (interrupted)" } else { "" }
    );
    SolveOutcome {
        elapsed,
        assignments,
        interrupted,
    }
}
