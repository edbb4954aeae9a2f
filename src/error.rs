//! The single error family this crate raises. Only the canonicalizer (and,
//! as an ambient addition, the enumerator's budget guard) produce errors; the
//! minimizer proper is infallible once handed an already-canonicalized table.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("row has {found} inputs, expected {expected}")]
    InputLengthMismatch { expected: usize, found: usize },

    #[error("unexpected value {value:?}; expected one of 0, 1, false, true, \"-\"")]
    UnexpectedValue { value: String },

    #[error("inconsistent table: {a} and {b} overlap with different outputs")]
    InconsistentTable { a: String, b: String },

    #[error("predicate observed more variables than the configured evaluation budget ({limit})")]
    BudgetExceeded { limit: usize },
}

impl Error {
    /// The three canonicalizer failure modes of spec 7 form a single
    /// "argument error" family; `BudgetExceeded` is an ambient addition and
    /// is not part of that family.
    pub fn is_argument_error(&self) -> bool {
        !matches!(self, Error::BudgetExceeded { .. })
    }
}
