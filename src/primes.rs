//! Prime implicant generation (spec 4.3): repeatedly combine implicants that
//! differ in one bit (symmetric combine) or that absorb a neighboring
//! don't-care cube (asymmetric combine), until no new cube is produced.
//! Anything never marked "combined" is prime.

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;
use tracing::{debug, instrument};

use crate::table::Table;
use crate::tri::{Implicant, Tri};

/// Every prime implicant of ON ∪ DC.
#[instrument(skip(table))]
pub fn generate_primes(table: &Table) -> Vec<Implicant> {
    let mut all: BTreeSet<Implicant> = table
        .iter()
        .filter(|(_, out)| **out != Tri::Zero)
        .map(|(imp, _)| imp.clone())
        .collect();

    let mut combined: FxHashSet<Implicant> = FxHashSet::default();

    loop {
        let items: Vec<Implicant> = all.iter().cloned().collect();
        let mut produced: BTreeSet<Implicant> = BTreeSet::new();

        for (i, a) in items.iter().enumerate() {
            for (j, b) in items.iter().enumerate() {
                if i == j {
                    continue;
                }
                if let Some(c) = a.combine_symmetric(b) {
                    combined.insert(a.clone());
                    combined.insert(b.clone());
                    produced.insert(c);
                } else if let Some(c) = a.combine_with_dash(b) {
                    combined.insert(a.clone());
                    combined.insert(b.clone());
                    produced.insert(c);
                }
            }
        }

        let new_cubes: Vec<Implicant> = produced.difference(&all).cloned().collect();
        if new_cubes.is_empty() {
            break;
        }
        debug!(count = new_cubes.len(), "generated new combined cubes");
        all.extend(new_cubes);
    }

    let primes: Vec<Implicant> = all.into_iter().filter(|c| !combined.contains(c)).collect();
    debug!(count = primes.len(), "prime implicants found");
    primes
}
