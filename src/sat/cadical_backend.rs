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

use super::SatBackend;
use cadical::{Callbacks, Solver};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

struct StopCallbacks {
    stop: Arc<AtomicBool>,
}

impl Callbacks for StopCallbacks {
    fn terminate(&mut self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// The CaDiCaL SAT solver.
///
/// CaDiCaL is an efficient SAT solver written in C++.
/// It won first place in the SAT track of the SAT Race 2019 and second overall place.
pub struct CadicalBackend {
    solver: Solver<StopCallbacks>,
}

impl CadicalBackend {
    /// Builds a new instance of the CaDiCaL SAT solver.
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
        }
    }
}

impl Default for CadicalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SatBackend for CadicalBackend {
    fn add_clause(&mut self, lits: &[i32]) {
        self.solver.add_clause(lits.iter().copied())
    }

    fn solve(&mut self) -> Option<bool> {
        self.solver.solve()
    }

    fn value(&self, var: i32) -> bool {
        matches!(self.solver.value(var), Some(true))
    }

    fn set_stop_flag(&mut self, flag: Arc<AtomicBool>) {
        self.solver.set_callbacks(Some(StopCallbacks { stop: flag }))
    }
}

/// Returns the default SAT backend.
pub fn default_backend() -> Box<dyn SatBackend> {
    Box::new(CadicalBackend::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadical_sat() {
        let mut backend = CadicalBackend::new();
        backend.add_clause(&[1, 2]);
        backend.add_clause(&[-1, 3]);
        assert_eq!(Some(true), backend.solve());
        assert!(backend.value(2) || backend.value(3) || !backend.value(1));
    }

    #[test]
    fn test_cadical_unsat() {
        let mut backend = CadicalBackend::new();
        backend.add_clause(&[1, 2]);
        backend.add_clause(&[-1, 2]);
        backend.add_clause(&[1, -2]);
        backend.add_clause(&[-1, -2]);
        assert_eq!(Some(false), backend.solve());
    }

    #[test]
    fn test_multiple_calls_with_blocking_clauses() {
        let mut backend = CadicalBackend::new();
        backend.add_clause(&[1, 2]);
        let mut n_models = 0;
        while backend.solve() == Some(true) {
            n_models += 1;
            let blocking: Vec<i32> = (1..=2)
                .map(|v| if backend.value(v) { -v } else { v })
                .collect();
            backend.add_clause(&blocking);
        }
        assert_eq!(3, n_models);
    }

    #[test]
    fn test_unraised_stop_flag_lets_the_search_finish() {
        let mut backend = CadicalBackend::new();
        backend.add_clause(&[1, 2]);
        let stop = Arc::new(AtomicBool::new(false));
        backend.set_stop_flag(Arc::clone(&stop));
        assert_eq!(Some(true), backend.solve());
    }
}
