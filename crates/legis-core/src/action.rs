use crate::item::ActionDate;
use crate::references::Citation;
use crate::status::LifeCycleStatus;
use crate::types::{ActionKind, CommitteeStep, LawKind};
use crate::vote::VoteOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// LawReference
// ---------------------------------------------------------------------------

/// `Public Law 111-148` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawReference {
    pub kind: LawKind,
    pub congress: u32,
    pub number: u32,
}

impl fmt::Display for LawReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            LawKind::Public => "Public",
            LawKind::Private => "Private",
        };
        write!(f, "{kind} Law {}-{}", self.congress, self.number)
    }
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// What a matching rule pulled out of the text beyond the kind itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Detail {
    /// Matched, nothing further to record.
    Plain,
    Vote(VoteOutcome),
    Committee(CommitteeStep),
    Calendar(String),
    Law(LawReference),
    Veto { pocket: bool },
    /// Sent to the Archivist without a signature: law by the ten-day rule.
    UnsignedToArchivist,
}

// ---------------------------------------------------------------------------
// ParentLink
// ---------------------------------------------------------------------------

/// Link from a nested action to the action it hangs under, as an index into
/// the processed action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentLink {
    Resolved(usize),
    /// Nested, but no lower-level action preceded it.
    Unresolved,
}

impl ParentLink {
    pub fn index(self) -> Option<usize> {
        match self {
            ParentLink::Resolved(i) => Some(i),
            ParentLink::Unresolved => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ClassifiedAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedAction {
    pub kind: ActionKind,
    /// Id of the rule that matched, `None` for the plain-action fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub date: ActionDate,
    pub level: u8,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committees: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_refs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<VoteOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Detail>,
    /// Set only on the actions that moved the item to a new status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LifeCycleStatus>,
}

impl ClassifiedAction {
    pub fn law(&self) -> Option<&LawReference> {
        match &self.detail {
            Some(Detail::Law(law)) => Some(law),
            _ => None,
        }
    }

    pub fn calendar(&self) -> Option<&str> {
        match &self.detail {
            Some(Detail::Calendar(name)) => Some(name),
            _ => None,
        }
    }

    pub fn committee_step(&self) -> Option<CommitteeStep> {
        match &self.detail {
            Some(Detail::Committee(step)) => Some(*step),
            _ => None,
        }
    }

    pub fn is_pocket_veto(&self) -> bool {
        matches!(self.detail, Some(Detail::Veto { pocket: true }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn law_reference_display() {
        let law = LawReference {
            kind: LawKind::Public,
            congress: 111,
            number: 148,
        };
        assert_eq!(law.to_string(), "Public Law 111-148");
    }

    #[test]
    fn parent_link_serializes_tagged() {
        let json = serde_json::to_string(&ParentLink::Resolved(3)).unwrap();
        assert_eq!(json, r#"{"resolved":3}"#);
        let json = serde_json::to_string(&ParentLink::Unresolved).unwrap();
        assert_eq!(json, r#""unresolved""#);
        assert_eq!(ParentLink::Resolved(2).index(), Some(2));
    }
}
