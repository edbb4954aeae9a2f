//! Table canonicalization (spec 4.2): interning, consistency checking,
//! subsumption removal, and don't-care completion over the full `2^N`
//! input space.

use std::collections::BTreeMap;

use tracing::instrument;

use crate::error::Error;
use crate::tri::{Implicant, Tri};

/// The canonicalized truth table: a cube -> output-tri mapping with no two
/// keys both defined and conflicting, uniform arity, and full coverage of
/// the `2^N` input space.
pub type Table = BTreeMap<Implicant, Tri>;

fn intersects(a: &Implicant, b: &Implicant) -> bool {
    a.bits()
        .iter()
        .zip(b.bits().iter())
        .all(|(x, y)| x.is_dash() || y.is_dash() || x == y)
}

/// Canonicalize a raw, already-typed table. This is the entry point used
/// internally once inputs have been parsed out of whatever external
/// representation a caller handed us (see [`canonicalize_strs`] for the
/// string-synonym front door).
#[instrument(skip(raw))]
pub fn canonicalize(raw: impl IntoIterator<Item = (Implicant, Tri)>) -> Result<Table, Error> {
    let mut entries: Vec<(Implicant, Tri)> = raw.into_iter().collect();
    let Some(n) = entries.first().map(|(imp, _)| imp.len()) else {
        return Ok(Table::new());
    };
    for (imp, _) in &entries {
        if imp.len() != n {
            return Err(Error::InputLengthMismatch {
                expected: n,
                found: imp.len(),
            });
        }
    }

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (ai, oi) = &entries[i];
            let (aj, oj) = &entries[j];
            if intersects(ai, aj) && *oi != Tri::Dash && *oj != Tri::Dash && oi != oj {
                return Err(Error::InconsistentTable {
                    a: ai.to_string(),
                    b: aj.to_string(),
                });
            }
        }
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));

    // Rows that specify the exact same cube twice (e.g. a CLI-supplied JSON
    // array with a literal duplicate) must collapse to one row rather than
    // feed the subsumption pass below: `implies` is reflexive, so a cube
    // "subsumes" an identical copy of itself in both directions, and the
    // loop below would strike both copies and lose the row entirely. Any
    // conflicting duplicate (both defined, different outputs) was already
    // rejected by the consistency check above, so merging here only ever
    // needs to prefer a defined output over a `-` one.
    let entries: Vec<(Implicant, Tri)> = {
        let mut deduped: Vec<(Implicant, Tri)> = Vec::with_capacity(entries.len());
        for (imp, out) in entries {
            match deduped.last_mut() {
                Some((last_imp, last_out)) if *last_imp == imp => {
                    if *last_out == Tri::Dash {
                        *last_out = out;
                    }
                }
                _ => deduped.push((imp, out)),
            }
        }
        deduped
    };

    let mut keep = vec![true; entries.len()];
    for i in 0..entries.len() {
        for j in 0..entries.len() {
            if i == j || !keep[i] {
                continue;
            }
            let (ai, oi) = &entries[i];
            let (aj, oj) = &entries[j];
            if oi == oj && ai.implies(aj) {
                keep[i] = false;
                break;
            }
        }
    }

    let mut table = Table::new();
    for (idx, (imp, out)) in entries.into_iter().enumerate() {
        if keep[idx] {
            table.insert(imp, out);
        }
    }

    fill_dont_cares(&mut table, n);
    Ok(table)
}

fn fill_dont_cares(table: &mut Table, n: usize) {
    if n == 0 {
        if table.is_empty() {
            table.insert(Implicant::new(Vec::new()), Tri::Dash);
        }
        return;
    }
    let existing: Vec<Implicant> = table.keys().cloned().collect();
    let total = 1u64 << n;
    for bits in 0..total {
        let minterm = Implicant::new(
            (0..n)
                .map(|i| if (bits >> i) & 1 == 1 { Tri::One } else { Tri::Zero })
                .collect(),
        );
        let covered = existing.iter().any(|k| minterm.implies(k));
        if !covered {
            table.insert(minterm, Tri::Dash);
        }
    }
}

/// String-synonym front door: accepts `"0"`/`"1"`/`"false"`/`"true"`/`"-"`
/// (spec 6) for both inputs and outputs.
pub fn canonicalize_strs<'a, I, R>(raw: I) -> Result<Table, Error>
where
    I: IntoIterator<Item = (R, &'a str)>,
    R: IntoIterator<Item = &'a str>,
{
    let mut entries = Vec::new();
    for (inputs, output) in raw {
        let bits = inputs
            .into_iter()
            .map(Tri::parse)
            .collect::<Result<Vec<_>, _>>()?;
        let out = Tri::parse(output)?;
        entries.push((Implicant::new(bits), out));
    }
    canonicalize(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bits: &[Tri], out: Tri) -> (Implicant, Tri) {
        (Implicant::new(bits.to_vec()), out)
    }

    #[test]
    fn differing_lengths_error() {
        let res = canonicalize(vec![row(&[Tri::Zero], Tri::Zero), row(&[], Tri::One)]);
        assert!(matches!(res, Err(Error::InputLengthMismatch { .. })));
    }

    #[test]
    fn single_dash_row_is_legal() {
        let res = canonicalize(vec![row(&[Tri::Dash], Tri::Zero)]).unwrap();
        assert_eq!(res.get(&Implicant::new(vec![Tri::Dash])), Some(&Tri::Zero));
        assert_eq!(res.len(), 1);
    }

    #[test]
    fn overlapping_different_outputs_is_inconsistent() {
        let res = canonicalize(vec![row(&[Tri::Zero], Tri::Zero), row(&[Tri::Dash], Tri::One)]);
        assert!(matches!(res, Err(Error::InconsistentTable { .. })));
    }

    #[test]
    fn subsumed_entry_is_removed() {
        let res = canonicalize(vec![row(&[Tri::Zero], Tri::Zero), row(&[Tri::Dash], Tri::Zero)])
            .unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res.get(&Implicant::new(vec![Tri::Dash])), Some(&Tri::Zero));
    }

    #[test]
    fn identical_duplicate_row_is_kept_not_erased() {
        // Two rows with the exact same cube and output (e.g. a JSON array
        // with a literal duplicate) must collapse to one kept row, not
        // cancel each other out via reflexive subsumption and reappear as
        // a don't-care.
        let res = canonicalize(vec![row(&[Tri::Zero], Tri::One), row(&[Tri::Zero], Tri::One)])
            .unwrap();
        assert_eq!(res.get(&Implicant::new(vec![Tri::Zero])), Some(&Tri::One));
        assert_eq!(res.get(&Implicant::new(vec![Tri::One])), Some(&Tri::Dash));
        assert_eq!(res.len(), 2);
    }

    #[test]
    fn duplicate_cube_with_dash_and_defined_output_prefers_defined() {
        let res = canonicalize(vec![row(&[Tri::Zero], Tri::Dash), row(&[Tri::Zero], Tri::One)])
            .unwrap();
        assert_eq!(res.get(&Implicant::new(vec![Tri::Zero])), Some(&Tri::One));
    }

    #[test]
    fn dont_care_fill_over_one_variable() {
        let res = canonicalize(vec![row(&[Tri::Zero], Tri::Zero)]).unwrap();
        assert_eq!(res.get(&Implicant::new(vec![Tri::Zero])), Some(&Tri::Zero));
        assert_eq!(res.get(&Implicant::new(vec![Tri::One])), Some(&Tri::Dash));
    }

    #[test]
    fn idempotent() {
        let first = canonicalize(vec![row(&[Tri::Zero, Tri::One], Tri::One)]).unwrap();
        let as_entries: Vec<_> = first.iter().map(|(k, v)| (k.clone(), *v)).collect();
        let second = canonicalize(as_entries).unwrap();
        assert_eq!(first, second);
    }
}
