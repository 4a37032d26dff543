use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Chamber
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    pub fn other(self) -> Chamber {
        match self {
            Chamber::House => Chamber::Senate,
            Chamber::Senate => Chamber::House,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Chamber::House => "House",
            Chamber::Senate => "Senate",
        }
    }

    /// Upper-case form used inside status codes (`PASS_OVER:HOUSE`).
    pub fn code(self) -> &'static str {
        match self {
            Chamber::House => "HOUSE",
            Chamber::Senate => "SENATE",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Chamber {
    type Err = crate::error::LegisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "house" | "h" => Ok(Chamber::House),
            "senate" | "s" => Ok(Chamber::Senate),
            _ => Err(crate::error::LegisError::InvalidChamber(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ItemType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Hr,
    S,
    Hres,
    Sres,
    Hjres,
    Sjres,
    Hconres,
    Sconres,
    Hamdt,
    Samdt,
}

impl ItemType {
    pub fn all() -> &'static [ItemType] {
        &[
            ItemType::Hr,
            ItemType::S,
            ItemType::Hres,
            ItemType::Sres,
            ItemType::Hjres,
            ItemType::Sjres,
            ItemType::Hconres,
            ItemType::Sconres,
            ItemType::Hamdt,
            ItemType::Samdt,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Hr => "hr",
            ItemType::S => "s",
            ItemType::Hres => "hres",
            ItemType::Sres => "sres",
            ItemType::Hjres => "hjres",
            ItemType::Sjres => "sjres",
            ItemType::Hconres => "hconres",
            ItemType::Sconres => "sconres",
            ItemType::Hamdt => "hamdt",
            ItemType::Samdt => "samdt",
        }
    }

    /// The chamber an item of this type is introduced in.
    pub fn origin_chamber(self) -> Chamber {
        match self {
            ItemType::Hr
            | ItemType::Hres
            | ItemType::Hjres
            | ItemType::Hconres
            | ItemType::Hamdt => Chamber::House,
            ItemType::S
            | ItemType::Sres
            | ItemType::Sjres
            | ItemType::Sconres
            | ItemType::Samdt => Chamber::Senate,
        }
    }

    pub fn is_simple_resolution(self) -> bool {
        matches!(self, ItemType::Hres | ItemType::Sres)
    }

    pub fn is_concurrent_resolution(self) -> bool {
        matches!(self, ItemType::Hconres | ItemType::Sconres)
    }

    pub fn is_joint_resolution(self) -> bool {
        matches!(self, ItemType::Hjres | ItemType::Sjres)
    }

    pub fn is_amendment(self) -> bool {
        matches!(self, ItemType::Hamdt | ItemType::Samdt)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = crate::error::LegisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        ItemType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| crate::error::LegisError::InvalidItemType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ActionKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Vote,
    Referral,
    CommitteeAction,
    Hearing,
    Discharged,
    Calendar,
    ToPresident,
    Signed,
    Vetoed,
    Enacted,
    PlainAction,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Vote => "vote",
            ActionKind::Referral => "referral",
            ActionKind::CommitteeAction => "committee_action",
            ActionKind::Hearing => "hearing",
            ActionKind::Discharged => "discharged",
            ActionKind::Calendar => "calendar",
            ActionKind::ToPresident => "to_president",
            ActionKind::Signed => "signed",
            ActionKind::Vetoed => "vetoed",
            ActionKind::Enacted => "enacted",
            ActionKind::PlainAction => "action",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CommitteeStep
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitteeStep {
    Reported,
    OrderedReported,
    Markup,
    Forwarded,
}

// ---------------------------------------------------------------------------
// LawKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawKind {
    Public,
    Private,
}
