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

mod cnf;
pub use cnf::Clause;
pub use cnf::CnfFormula;
pub use cnf::Lit;

mod equation;
pub use equation::aux_name;
pub use equation::Equation;
pub use equation::EquationOp;
pub use equation::Operand;

mod registry;
pub use registry::TermRegistry;

mod templates;

mod transducer;
pub use transducer::transduce;
pub use transducer::EquationSystem;
