//! `boolmin` derives a minimized boolean formula from an opaque predicate of
//! indexed boolean inputs.
//!
//! The pipeline (spec 2): an opaque predicate is driven by the [adaptive
//! enumerator](enumerate) until every reachable assignment has been
//! observed; the resulting rows are folded into a raw [`Table`]; the
//! [table canonicalizer](table) interns, checks, and don't-care-fills it;
//! the [prime implicant generator](primes) and [chart](chart) extract
//! essential primes; the [cover search](cover) finds a minimum-size
//! residual cover; and the [formula printers](format) render the result.
//!
//! Only the canonicalizer can fail (spec 7); everything downstream of an
//! already-canonicalized table is infallible.

pub mod chart;
pub mod cover;
pub mod enumerate;
pub mod error;
pub mod format;
pub mod primes;
pub mod table;
pub mod tri;

use tracing::instrument;

pub use enumerate::{enumerate, enumerate_with_limit, Enumeration, Reader, Row};
pub use error::Error;
pub use table::{canonicalize, canonicalize_strs, Table};
pub use tri::{Implicant, Tri};

pub use format::{cnf_from_table, dnf_from_table};

/// Build the raw (uncanonicalized) table implied by a completed
/// enumeration: for each row, the bits aligned to the registry's index
/// order, with unobserved variables filled as `Tri::Dash` (spec 4.1 "Edge
/// cases": partial rows are treated as don't-care downstream).
pub fn table_from_enumeration(result: &Enumeration) -> Vec<(Implicant, Tri)> {
    result
        .rows
        .iter()
        .map(|row| {
            let bits: Vec<Tri> = result
                .registry
                .iter()
                .map(|name| match row.observed.get(name) {
                    Some(true) => Tri::One,
                    Some(false) => Tri::Zero,
                    None => Tri::Dash,
                })
                .collect();
            let output = if row.output { Tri::One } else { Tri::Zero };
            (Implicant::new(bits), output)
        })
        .collect()
}

/// Run Quine-McCluskey on an already-canonicalized table: generate primes,
/// extract essentials, search the residual chart for a minimum cover, and
/// return the sorted union (spec 4.3-4.5). Infallible — canonicalization is
/// the only fallible step in this pipeline (spec 7).
#[instrument(skip(table))]
pub fn minimize(table: &Table) -> Vec<Implicant> {
    let primes = primes::generate_primes(table);
    let (essentials, chart) = chart::Chart::build(table, &primes);
    let rest = cover::min_cover(&chart);

    let mut result = essentials;
    result.extend(rest);
    result.sort();
    result.dedup();
    result
}

/// Convenience composition: canonicalize raw rows, then minimize (spec 6).
pub fn minimize_from_rows(
    raw: impl IntoIterator<Item = (Implicant, Tri)>,
) -> Result<Vec<Implicant>, Error> {
    let table = canonicalize(raw)?;
    Ok(minimize(&table))
}

/// Everything [`derive_from_predicate`] learned about one predicate: the
/// enumeration itself, the canonicalized table, and the minimum cover, with
/// formula-string accessors. The "thin entry point" the spec (section 1)
/// explicitly keeps out of the core's design weight; it does no algorithmic
/// work of its own beyond composing the pieces above.
pub struct Derived {
    pub enumeration: Enumeration,
    pub table: Table,
    pub terms: Vec<Implicant>,
}

impl Derived {
    pub fn dnf(&self) -> String {
        format::dnf(&self.enumeration.rows, &self.enumeration.registry)
    }

    pub fn cnf(&self) -> String {
        format::cnf(&self.enumeration.rows, &self.enumeration.registry)
    }

    pub fn minimal(&self) -> String {
        format::minimal(&self.terms, &self.enumeration.registry)
    }
}

/// Drive `predicate` to exhaustion, canonicalize the observed table, and
/// minimize it. This is the single call most callers want.
pub fn derive_from_predicate<P>(predicate: P) -> Result<Derived, Error>
where
    P: FnMut(&mut dyn Reader) -> bool,
{
    let enumeration = enumerate(predicate);
    let raw = table_from_enumeration(&enumeration);
    let table = canonicalize(raw)?;
    let terms = minimize(&table);
    Ok(Derived {
        enumeration,
        table,
        terms,
    })
}
