//! Outcome of a legality check.
//!
//! Card hooks (`validate_play`) and game modes (`validate_deck`) answer with a
//! `Verdict` rather than an error: the caller decides which error kind a
//! denial becomes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The checked action is legal.
    Allowed,
    /// The checked action is illegal, with a human-readable reason.
    Denied(String),
}

impl Verdict {
    /// Create a denial.
    pub fn denied(reason: impl Into<String>) -> Self {
        Verdict::Denied(reason.into())
    }

    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed)
    }

    /// The denial reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Allowed => None,
            Verdict::Denied(reason) => Some(reason),
        }
    }
}
