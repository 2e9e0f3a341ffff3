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

use crate::FormatError;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static! {
    static ref HEADER_RE: Regex = Regex::new(r"^p\s+(cnf|dnf)\s+\d+\s+\d+$").unwrap();
    static ref CLAUSE_RE: Regex = Regex::new(r"^(-?[1-9]\d*\s+)*0$").unwrap();
}

/// Reads a formula from a file, dispatching on its extension.
///
/// A `txt` file holds an infix formula, possibly spread over several lines.
/// A `cnf` or `dnf` file holds a DIMACS-style normal form: `c` comment lines,
/// one `p cnf`/`p dnf` problem line matching the extension, then 0-terminated
/// clause lines of signed variable indexes. Index `k` is mapped to the term
/// `userdef{k}`, negative indexes to its negation; the clauses of a `cnf`
/// file are conjoined, those of a `dnf` file disjoined.
///
/// The returned string is an infix formula ready for parsing.
pub fn formula_from_file(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let content = fs::read_to_string(path)
        .with_context(|| format!(r#"while reading the formula file "{}""#, path.display()))?;
    let formula = match extension.as_str() {
        "txt" => Ok(content.split_whitespace().collect::<Vec<&str>>().join(" ")),
        "cnf" => normal_form_to_infix(&content, "cnf"),
        "dnf" => normal_form_to_infix(&content, "dnf"),
        _ => Err(FormatError {
            line: 0,
            message: format!(r#"unsupported file extension "{}""#, extension),
        }),
    }
    .with_context(|| format!(r#"while decoding the formula file "{}""#, path.display()))?;
    info!(r#"loaded a formula from "{}""#, path.display());
    Ok(formula)
}

fn normal_form_to_infix(content: &str, expected_kind: &str) -> std::result::Result<String, FormatError> {
    // a cnf file conjoins disjunctive clauses; a dnf file is the dual
    let (inner_connective, outer_connective) = if expected_kind == "cnf" {
        (" or ", " and ")
    } else {
        (" and ", " or ")
    };
    let mut header_seen = false;
    let mut clauses: Vec<String> = Vec::new();
    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            if header_seen {
                return Err(FormatError {
                    line: line_number,
                    message: "duplicate problem line".to_string(),
                });
            }
            let captures = HEADER_RE.captures(line).ok_or_else(|| FormatError {
                line: line_number,
                message: "malformed problem line".to_string(),
            })?;
            if &captures[1] != expected_kind {
                return Err(FormatError {
                    line: line_number,
                    message: format!(
                        r#"problem line declares "{}" but the file extension is "{}""#,
                        &captures[1], expected_kind
                    ),
                });
            }
            header_seen = true;
            continue;
        }
        if !header_seen {
            return Err(FormatError {
                line: line_number,
                message: "clause line before the problem line".to_string(),
            });
        }
        if !CLAUSE_RE.is_match(line) {
            return Err(FormatError {
                line: line_number,
                message: "malformed clause line".to_string(),
            });
        }
        let lits: Vec<String> = line
            .split_whitespace()
            .take_while(|&t| t != "0")
            .map(|t| {
                if let Some(stripped) = t.strip_prefix('-') {
                    format!("not userdef{}", stripped)
                } else {
                    format!("userdef{}", t)
                }
            })
            .collect();
        if lits.is_empty() {
            return Err(FormatError {
                line: line_number,
                message: "empty clause".to_string(),
            });
        }
        clauses.push(format!("({})", lits.join(inner_connective)));
    }
    if !header_seen {
        return Err(FormatError {
            line: 0,
            message: "missing problem line".to_string(),
        });
    }
    if clauses.is_empty() {
        return Err(FormatError {
            line: 0,
            message: "no clause line".to_string(),
        });
    }
    Ok(clauses.join(outer_connective))
}
