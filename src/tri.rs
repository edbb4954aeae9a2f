//! The tri-value domain `{0, 1, -}` and the `Implicant` cube built from it.

use std::fmt;

use crate::error::Error;

/// A single bit position in an implicant: bound false, bound true, or absent
/// (don't-care / dash).
///
/// Declaration order doubles as the sort order the spec's deterministic
/// tiebreak requires: `Dash < Zero < One`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tri {
    Dash,
    Zero,
    One,
}

impl Tri {
    /// Accepts the external synonyms `0`/`1`/`false`/`true`/`-`/`"-"`.
    pub fn parse(s: &str) -> Result<Tri, Error> {
        match s {
            "0" | "false" => Ok(Tri::Zero),
            "1" | "true" => Ok(Tri::One),
            "-" | "dc" | "don't-care" | "dontcare" => Ok(Tri::Dash),
            other => Err(Error::UnexpectedValue {
                value: other.to_string(),
            }),
        }
    }

    pub fn is_dash(self) -> bool {
        matches!(self, Tri::Dash)
    }
}

impl fmt::Display for Tri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tri::Zero => write!(f, "0"),
            Tri::One => write!(f, "1"),
            Tri::Dash => write!(f, "-"),
        }
    }
}

/// A fixed-length tuple of [`Tri`] values: a product term (cube) over `N`
/// variables. `1` means "variable true", `0` means "variable false", `-`
/// means "variable absent from this term".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Implicant(Vec<Tri>);

impl Implicant {
    pub fn new(bits: Vec<Tri>) -> Self {
        Implicant(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[Tri] {
        &self.0
    }

    pub fn get(&self, i: usize) -> Tri {
        self.0[i]
    }

    /// Number of `1` positions.
    pub fn ones(&self) -> usize {
        self.0.iter().filter(|t| **t == Tri::One).count()
    }

    /// Number of `-` positions.
    pub fn dashes(&self) -> usize {
        self.0.iter().filter(|t| t.is_dash()).count()
    }

    /// Whether `self` is a tautology (all positions dashed).
    pub fn is_tautology(&self) -> bool {
        self.0.iter().all(|t| t.is_dash())
    }

    /// `self` implies `other` iff every defined position of `other` agrees
    /// with the corresponding position of `self` (spec 4.2 "subsumption";
    /// also used to test chart coverage in 4.4).
    pub fn implies(&self, other: &Implicant) -> bool {
        debug_assert_eq!(self.len(), other.len());
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| b.is_dash() || a == b)
    }

    /// Symmetric QM combine: differs from `other` in exactly one position,
    /// and that position is a `{0,1}` pair. Returns the combined cube with
    /// that position dashed.
    pub fn combine_symmetric(&self, other: &Implicant) -> Option<Implicant> {
        debug_assert_eq!(self.len(), other.len());
        let mut pivot = None;
        for (i, (a, b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            if a == b {
                continue;
            }
            if a.is_dash() || b.is_dash() {
                return None;
            }
            if pivot.is_some() {
                return None;
            }
            pivot = Some(i);
        }
        let pivot = pivot?;
        let mut out = self.0.clone();
        out[pivot] = Tri::Dash;
        Some(Implicant(out))
    }

    /// Asymmetric combine against a don't-care-bearing implicant: every
    /// position is either equal, a `{0,1}` pivot pair (at most one), or
    /// `other` has a dash where `self` does not. Copies `self` with the
    /// pivot dashed.
    pub fn combine_with_dash(&self, other: &Implicant) -> Option<Implicant> {
        debug_assert_eq!(self.len(), other.len());
        let mut pivot = None;
        for (i, (a, b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            if a == b {
                continue;
            }
            if b.is_dash() && !a.is_dash() {
                continue;
            }
            if a.is_dash() {
                return None;
            }
            if pivot.is_some() {
                return None;
            }
            pivot = Some(i);
        }
        let pivot = pivot?;
        let mut out = self.0.clone();
        out[pivot] = Tri::Dash;
        Some(Implicant(out))
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.0 {
            write!(f, "{t}")?;
        }
        Ok(())
    }
}
