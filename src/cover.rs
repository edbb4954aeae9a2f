//! Minimum-cover search (spec 4.5): exhaustive breadth-first growth over
//! subsets of the residual primes, short-circuiting at the first layer that
//! contains any cover and breaking ties with the lexicographically smallest
//! sorted tuple.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::chart::Chart;
use crate::tri::Implicant;

/// A smallest subset of the chart's residual primes that covers every
/// residual row. Returns the empty vector if the chart has no rows.
#[instrument(skip(chart))]
pub fn min_cover(chart: &Chart) -> Vec<Implicant> {
    if chart.is_empty() {
        return Vec::new();
    }

    let primes = chart.primes_in_play();
    let rows: Vec<&Vec<Implicant>> = chart.rows().values().collect();

    let covers = |set: &BTreeSet<Implicant>| {
        rows.iter()
            .all(|row| row.iter().any(|p| set.contains(p)))
    };

    let mut frontier: Vec<BTreeSet<Implicant>> = primes
        .iter()
        .map(|p| BTreeSet::from([p.clone()]))
        .collect();

    let mut layer = 1;
    loop {
        let mut candidates: Vec<Vec<Implicant>> = frontier
            .iter()
            .filter(|set| covers(set))
            .map(|set| set.iter().cloned().collect())
            .collect();

        if !candidates.is_empty() {
            candidates.sort();
            debug!(layer, candidates = candidates.len(), "cover found");
            return candidates.into_iter().next().unwrap();
        }

        let mut next: BTreeSet<Vec<Implicant>> = BTreeSet::new();
        for set in &frontier {
            for p in &primes {
                if set.contains(p) {
                    continue;
                }
                let mut grown = set.clone();
                grown.insert(p.clone());
                next.insert(grown.into_iter().collect());
            }
        }

        if next.is_empty() {
            // Every prime is already in every frontier set; nothing left to
            // grow. Only reachable if the chart itself has no rows, which is
            // handled above, so this is unreachable in practice.
            return Vec::new();
        }

        frontier = next.into_iter().map(|v| v.into_iter().collect()).collect();
        layer += 1;
    }
}
