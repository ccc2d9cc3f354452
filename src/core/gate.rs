//! Terms-and-conditions gate in front of the submit control

use serde::{Deserialize, Serialize};

/// Whether the submit control is reachable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmitGate {
    #[default]
    TermsNotAccepted,
    TermsAccepted,
}

impl SubmitGate {
    /// Flip the state, as a checkbox click does
    pub fn toggle(self) -> Self {
        match self {
            SubmitGate::TermsNotAccepted => SubmitGate::TermsAccepted,
            SubmitGate::TermsAccepted => SubmitGate::TermsNotAccepted,
        }
    }

    pub fn is_open(self) -> bool {
        self == SubmitGate::TermsAccepted
    }
}

impl From<bool> for SubmitGate {
    fn from(accepted: bool) -> Self {
        if accepted {
            SubmitGate::TermsAccepted
        } else {
            SubmitGate::TermsNotAccepted
        }
    }
}
