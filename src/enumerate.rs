//! Adaptive truth-table enumerator (spec 4.1): drives an opaque predicate
//! until every input combination it can reach has been observed exactly
//! once, discovering the variable set by observation rather than by static
//! analysis.

use std::collections::{BTreeMap, VecDeque};

use rustc_hash::FxHashSet;
use tracing::{debug, instrument};

use crate::error::Error;

/// A variable -> boolean assignment. Keyed by name (`"v[3]"`, …) rather than
/// dense index so the enumerator can discover variables in any order.
pub type Assignment = BTreeMap<String, bool>;

/// Handed to the predicate. `read(i)` exposes the boolean bound to `v[i]` on
/// the current exploration path, discovering `i` as a new variable the
/// first time it is read.
pub trait Reader {
    fn read(&mut self, index: usize) -> bool;
}

/// One predicate invocation's worth of observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Variables this particular invocation actually read, and their bound
    /// values. A predicate that short-circuits may leave some variables
    /// unobserved on some paths; those are absent here, not defaulted.
    pub observed: Assignment,
    pub output: bool,
    /// First-observation order on this path.
    pub order: Vec<String>,
}

/// The result of a full enumeration: every reachable row, plus the global
/// variable registry in first-observation order across the whole run (used
/// by the formula printers to order literals, spec 4.6/6).
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    pub rows: Vec<Row>,
    pub registry: Vec<String>,
}

/// Canonical fingerprint of an assignment: sorted `name=value` pairs joined
/// by `,`. Stable regardless of observation order, which is what makes
/// worklist deduplication correct (spec 4.1).
fn fingerprint(plan: &Assignment) -> String {
    plan.iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn var_name(index: usize) -> String {
    format!("v[{index}]")
}

struct Enumerator {
    plan: Assignment,
    order: Vec<String>,
    worklist: VecDeque<Assignment>,
    seen: FxHashSet<String>,
    registry: Vec<String>,
    registry_index: std::collections::HashMap<String, usize>,
}

impl Enumerator {
    fn new() -> Self {
        Enumerator {
            plan: Assignment::new(),
            order: Vec::new(),
            worklist: VecDeque::new(),
            seen: FxHashSet::default(),
            registry: Vec::new(),
            registry_index: std::collections::HashMap::new(),
        }
    }

    fn register(&mut self, name: &str) {
        if !self.registry_index.contains_key(name) {
            self.registry_index.insert(name.to_string(), self.registry.len());
            self.registry.push(name.to_string());
        }
    }
}

impl Reader for Enumerator {
    fn read(&mut self, index: usize) -> bool {
        let name = var_name(index);
        if let Some(v) = self.plan.get(&name) {
            return *v;
        }

        self.register(&name);
        self.plan.insert(name.clone(), false);
        self.order.push(name.clone());

        let false_fp = fingerprint(&self.plan);
        let mut true_plan = self.plan.clone();
        true_plan.insert(name, true);
        let true_fp = fingerprint(&true_plan);

        // Depth-first: push the unexplored alternative to the front so this
        // path's own frontier is explored before siblings discovered
        // earlier. Correct under any scheduling order; DFS just keeps the
        // worklist small.
        if !self.seen.contains(&true_fp) {
            self.worklist.push_front(true_plan);
            self.seen.insert(true_fp);
            self.seen.insert(false_fp);
        }

        false
    }
}

/// Run `predicate` repeatedly until every reachable assignment has been
/// observed exactly once.
#[instrument(skip(predicate))]
pub fn enumerate<P>(mut predicate: P) -> Enumeration
where
    P: FnMut(&mut dyn Reader) -> bool,
{
    // Infallible by construction: no budget, so this can never return the
    // error enumerate_with_limit can.
    enumerate_with_limit(&mut predicate, usize::MAX).expect("unbounded enumeration cannot fail")
}

/// As [`enumerate`], but fails with [`Error::BudgetExceeded`] rather than
/// continuing past `max_invocations` predicate calls. An ambient safety
/// valve for embedding this against predicates whose input space might be
/// unexpectedly large; not part of the core enumeration contract.
#[instrument(skip(predicate))]
pub fn enumerate_with_limit<P>(
    mut predicate: P,
    max_invocations: usize,
) -> Result<Enumeration, Error>
where
    P: FnMut(&mut dyn Reader) -> bool,
{
    let mut en = Enumerator::new();
    let mut rows = Vec::new();
    let mut invocations = 0usize;

    loop {
        if invocations >= max_invocations {
            return Err(Error::BudgetExceeded {
                limit: max_invocations,
            });
        }
        en.order.clear();
        let output = predicate(&mut en);
        invocations += 1;
        debug!(invocation = invocations, output, "predicate invoked");
        rows.push(Row {
            observed: en.plan.clone(),
            output,
            order: en.order.clone(),
        });

        match en.worklist.pop_front() {
            Some(next_plan) => en.plan = next_plan,
            None => break,
        }
    }

    debug!(
        rows = rows.len(),
        variables = en.registry.len(),
        "enumeration complete"
    );
    Ok(Enumeration {
        rows,
        registry: en.registry,
    })
}
