//! Chart construction and essential-implicant extraction (spec 4.4).

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument};

use crate::table::Table;
use crate::tri::{Implicant, Tri};

/// The residual prime-implicant chart: for every ON-minterm not already
/// struck by an essential, the (non-essential) primes that cover it.
#[derive(Debug, Default)]
pub struct Chart {
    rows: BTreeMap<Implicant, Vec<Implicant>>,
}

impl Chart {
    /// Build the full chart from the canonicalized table and its primes,
    /// extract the essential primes, and strike the rows they cover.
    /// Returns `(essentials, residual_chart)`.
    #[instrument(skip(table, primes))]
    pub fn build(table: &Table, primes: &[Implicant]) -> (Vec<Implicant>, Chart) {
        let mut coverers: BTreeMap<Implicant, Vec<Implicant>> = BTreeMap::new();
        for (key, out) in table {
            if *out != Tri::One {
                continue;
            }
            let covering: Vec<Implicant> = primes
                .iter()
                .filter(|p| key.implies(p))
                .cloned()
                .collect();
            coverers.insert(key.clone(), covering);
        }

        let mut essentials: BTreeSet<Implicant> = BTreeSet::new();
        for covering in coverers.values() {
            if covering.len() == 1 {
                essentials.insert(covering[0].clone());
            }
        }

        let mut rows = BTreeMap::new();
        for (key, covering) in coverers {
            if covering.iter().any(|p| essentials.contains(p)) {
                continue;
            }
            let remaining: Vec<Implicant> = covering
                .into_iter()
                .filter(|p| !essentials.contains(p))
                .collect();
            rows.insert(key, remaining);
        }

        let mut essentials: Vec<Implicant> = essentials.into_iter().collect();
        essentials.sort();
        debug!(
            essentials = essentials.len(),
            residual_rows = rows.len(),
            "chart built"
        );
        (essentials, Chart { rows })
    }

    pub fn rows(&self) -> &BTreeMap<Implicant, Vec<Implicant>> {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The distinct primes that still appear somewhere in the residual
    /// chart, sorted.
    pub fn primes_in_play(&self) -> Vec<Implicant> {
        let mut set: BTreeSet<Implicant> = BTreeSet::new();
        for covering in self.rows.values() {
            set.extend(covering.iter().cloned());
        }
        set.into_iter().collect()
    }
}
