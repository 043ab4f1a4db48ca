//! EVSE operational status and its transition rules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Operational status of an EVSE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvseStatus {
    /// Ready to be used
    Available,
    /// Reserved or temporarily unavailable
    Blocked,
    /// Out of service due to malfunction or maintenance
    Inoperative,
    /// Permanently decommissioned (terminal state)
    Removed,
}

impl EvseStatus {
    /// Decides whether a transition from `current` to `next` is legal.
    ///
    /// `current = None` means the EVSE has no prior state yet (construction).
    /// The rules are evaluated in priority order:
    ///
    /// 1. any state (including none) may move to `Removed`; `Removed` itself
    ///    has no outgoing transitions except the rule-1 self-loop
    /// 2. a fresh EVSE may only become `Available`
    /// 3. `Available` may move to `Blocked` or `Inoperative`
    /// 4. `Blocked` and `Inoperative` may only return to `Available`;
    ///    switching between the two directly is not allowed
    ///
    /// Pure and total over the whole pair space; self-transitions are illegal
    /// everywhere rule 1 does not apply.
    pub fn is_valid_transition(current: Option<EvseStatus>, next: EvseStatus) -> bool {
        if next == EvseStatus::Removed {
            return true;
        }

        match current {
            None => next == EvseStatus::Available,
            Some(EvseStatus::Available) => {
                matches!(next, EvseStatus::Blocked | EvseStatus::Inoperative)
            }
            Some(EvseStatus::Blocked) | Some(EvseStatus::Inoperative) => {
                next == EvseStatus::Available
            }
            Some(EvseStatus::Removed) => false,
        }
    }
}

impl fmt::Display for EvseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "AVAILABLE"),
            Self::Blocked => write!(f, "BLOCKED"),
            Self::Inoperative => write!(f, "INOPERATIVE"),
            Self::Removed => write!(f, "REMOVED"),
        }
    }
}

impl FromStr for EvseStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(Self::Available),
            "BLOCKED" => Ok(Self::Blocked),
            "INOPERATIVE" => Ok(Self::Inoperative),
            "REMOVED" => Ok(Self::Removed),
            other => Err(DomainError::Validation(format!(
                "Unknown EVSE status: {}",
                other
            ))),
        }
    }
}
