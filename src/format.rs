//! Formula printers (spec 4.6/6): trivial, pure-string rendering of terms
//! over either the enumerator's raw rows or the minimizer's prime-implicant
//! output. No logic lives here beyond joining literals.

use crate::enumerate::Row;
use crate::table::Table;
use crate::tri::{Implicant, Tri};

fn render_term(literals: &[String]) -> String {
    if literals.is_empty() {
        "true".to_string()
    } else {
        literals.join("&")
    }
}

fn render_formula(terms: Vec<String>) -> String {
    if terms.is_empty() {
        "false".to_string()
    } else {
        terms.join(" | ")
    }
}

/// Disjunctive normal form over the enumerator's raw rows: one term per
/// row whose output is `true`, literals ordered by first-observation index.
pub fn dnf(rows: &[Row], names: &[String]) -> String {
    let terms: Vec<String> = rows
        .iter()
        .filter(|row| row.output)
        .map(|row| {
            let literals: Vec<String> = names
                .iter()
                .filter_map(|name| {
                    row.observed.get(name).map(|&value| {
                        if value {
                            name.clone()
                        } else {
                            format!("!{name}")
                        }
                    })
                })
                .collect();
            render_term(&literals)
        })
        .collect();
    render_formula(terms)
}

/// Conjunctive normal form over the enumerator's raw rows: one clause per
/// row whose output is `false`, literals inverted from the row's bindings.
pub fn cnf(rows: &[Row], names: &[String]) -> String {
    let clauses: Vec<String> = rows
        .iter()
        .filter(|row| !row.output)
        .map(|row| {
            let literals: Vec<String> = names
                .iter()
                .filter_map(|name| {
                    row.observed.get(name).map(|&value| {
                        if value {
                            format!("!{name}")
                        } else {
                            name.clone()
                        }
                    })
                })
                .collect();
            if literals.is_empty() {
                "false".to_string()
            } else if literals.len() == 1 {
                literals[0].clone()
            } else {
                format!("({})", literals.join(" | "))
            }
        })
        .collect();
    if clauses.is_empty() {
        "true".to_string()
    } else {
        clauses.join(" & ")
    }
}

/// The minimized sum-of-products formula from the Quine-McCluskey terms,
/// with literals named via `names[i]` for position `i`.
pub fn minimal(terms: &[Implicant], names: &[String]) -> String {
    let rendered: Vec<String> = terms
        .iter()
        .map(|term| {
            let literals: Vec<String> = term
                .bits()
                .iter()
                .zip(names.iter())
                .filter_map(|(bit, name)| match bit {
                    Tri::One => Some(name.clone()),
                    Tri::Zero => Some(format!("!{name}")),
                    Tri::Dash => None,
                })
                .collect();
            render_term(&literals)
        })
        .collect();
    render_formula(rendered)
}

/// DNF over an already-canonicalized table rather than enumerator rows: one
/// term per ON cube, unminimized. Used by the CLI, which has a static table
/// and no enumeration to draw rows from.
pub fn dnf_from_table(table: &Table, names: &[String]) -> String {
    let terms: Vec<Implicant> = table
        .iter()
        .filter(|(_, out)| **out == Tri::One)
        .map(|(key, _)| key.clone())
        .collect();
    minimal(&terms, names)
}

/// CNF counterpart of [`dnf_from_table`]: one clause per OFF cube, literals
/// inverted, multi-literal clauses parenthesized.
pub fn cnf_from_table(table: &Table, names: &[String]) -> String {
    let clauses: Vec<String> = table
        .iter()
        .filter(|(_, out)| **out == Tri::Zero)
        .map(|(key, _)| {
            let literals: Vec<String> = key
                .bits()
                .iter()
                .zip(names.iter())
                .filter_map(|(bit, name)| match bit {
                    Tri::One => Some(format!("!{name}")),
                    Tri::Zero => Some(name.clone()),
                    Tri::Dash => None,
                })
                .collect();
            if literals.is_empty() {
                "false".to_string()
            } else if literals.len() == 1 {
                literals[0].clone()
            } else {
                format!("({})", literals.join(" | "))
            }
        })
        .collect();
    if clauses.is_empty() {
        "true".to_string()
    } else {
        clauses.join(" & ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::enumerate;
    use std::collections::BTreeMap;

    fn row(pairs: &[(&str, bool)], output: bool) -> Row {
        let mut observed = BTreeMap::new();
        for (k, v) in pairs {
            observed.insert(k.to_string(), *v);
        }
        Row {
            observed,
            output,
            order: pairs.iter().map(|(k, _)| k.to_string()).collect(),
        }
    }

    #[test]
    fn identity_formulas() {
        let result = enumerate(|r| r.read(0));
        let dnf_str = dnf(&result.rows, &result.registry);
        let cnf_str = cnf(&result.rows, &result.registry);
        assert_eq!(dnf_str, "v[0]");
        assert_eq!(cnf_str, "v[0]");
    }

    #[test]
    fn tautology_formulas() {
        let result = enumerate(|r| r.read(0) || !r.read(0));
        assert_eq!(cnf(&result.rows, &result.registry), "true");
        let d = dnf(&result.rows, &result.registry);
        assert_eq!(d, "!v[0] | v[0]");
    }

    #[test]
    fn contradiction_formulas() {
        let result = enumerate(|r| r.read(0) && !r.read(0));
        assert_eq!(dnf(&result.rows, &result.registry), "false");
        assert_eq!(cnf(&result.rows, &result.registry), "v[0] & !v[0]");
    }

    #[test]
    fn minimal_formula_tautology_and_empty() {
        let names = vec!["v[0]".to_string()];
        assert_eq!(minimal(&[Implicant::new(vec![Tri::Dash])], &names), "true");
        assert_eq!(minimal(&[], &names), "false");
    }

    #[test]
    fn render_term_direct() {
        assert_eq!(render_term(&["v[0]".to_string(), "!v[1]".to_string()]), "v[0]&!v[1]");
        let _ = row(&[("v[0]", true)], true);
    }

    #[test]
    fn table_printers_match_identity() {
        let table = crate::table::canonicalize(vec![
            (Implicant::new(vec![Tri::Zero]), Tri::Zero),
            (Implicant::new(vec![Tri::One]), Tri::One),
        ])
        .unwrap();
        let names = vec!["v[0]".to_string()];
        assert_eq!(dnf_from_table(&table, &names), "v[0]");
        assert_eq!(cnf_from_table(&table, &names), "v[0]");
    }
}
