//! Compact milestone view of a processed history.
//!
//! Every milestone takes the *last* matching action: revotes and corrections
//! make the latest entry authoritative.

use crate::action::ClassifiedAction;
use crate::item::ActionDate;
use crate::types::{ActionKind, Chamber};
use crate::vote::{VoteResult, VoteType};
use serde::{Deserialize, Serialize};

/// A vote milestone: how it went and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteMilestone {
    pub result: VoteResult,
    pub date: ActionDate,
}

impl VoteMilestone {
    pub fn passed(&self) -> bool {
        self.result == VoteResult::Pass
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Anything beyond introduction and referral happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<ActionDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_passage: Option<VoteMilestone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senate_passage: Option<VoteMilestone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senate_cloture: Option<VoteMilestone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vetoed: Option<ActionDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_override: Option<VoteMilestone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senate_override: Option<VoteMilestone>,
    /// Presented to the President and not yet signed, vetoed or enacted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awaiting_signature: Option<ActionDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enacted: Option<ActionDate>,
}

impl HistorySummary {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn passed_house(&self) -> bool {
        self.house_passage.map(|m| m.passed()).unwrap_or(false)
    }

    pub fn passed_senate(&self) -> bool {
        self.senate_passage.map(|m| m.passed()).unwrap_or(false)
    }

    pub fn is_vetoed(&self) -> bool {
        self.vetoed.is_some()
    }

    pub fn is_awaiting_signature(&self) -> bool {
        self.awaiting_signature.is_some()
    }

    pub fn is_enacted(&self) -> bool {
        self.enacted.is_some()
    }
}

pub fn summarize(actions: &[ClassifiedAction]) -> HistorySummary {
    let mut summary = HistorySummary::default();

    for action in actions {
        let date = action.date;
        if !matches!(action.kind, ActionKind::Referral | ActionKind::PlainAction) {
            summary.active = Some(date);
        }

        match action.kind {
            ActionKind::Vote => {
                let Some(vote) = &action.vote else { continue };
                let milestone = Some(VoteMilestone {
                    result: vote.result,
                    date,
                });
                match (vote.vote_type, vote.chamber) {
                    (VoteType::Cloture, Chamber::Senate) => summary.senate_cloture = milestone,
                    (VoteType::Cloture, Chamber::House) => {}
                    (VoteType::Override, Chamber::House) => summary.house_override = milestone,
                    (VoteType::Override, Chamber::Senate) => summary.senate_override = milestone,
                    (_, Chamber::House) => summary.house_passage = milestone,
                    (_, Chamber::Senate) => summary.senate_passage = milestone,
                }
            }
            ActionKind::ToPresident => summary.awaiting_signature = Some(date),
            ActionKind::Vetoed => {
                summary.vetoed = Some(date);
                summary.awaiting_signature = None;
            }
            ActionKind::Signed | ActionKind::Enacted => {
                summary.enacted = Some(date);
                summary.awaiting_signature = None;
            }
            _ => {}
        }
    }

    summary
}
