use crate::types::{Chamber, ItemType};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Fixed opening of a joint resolution that proposes a constitutional amendment.
pub const CONSTITUTIONAL_AMENDMENT_PREFIX: &str =
    "Proposing an amendment to the Constitution of the United States";

// ---------------------------------------------------------------------------
// ActionDate
// ---------------------------------------------------------------------------

/// When an action happened. Older records only carry a date; recent House
/// floor actions carry a time of day as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionDate {
    DateTime(DateTime<FixedOffset>),
    Date(NaiveDate),
}

impl ActionDate {
    pub fn date(&self) -> NaiveDate {
        match self {
            ActionDate::DateTime(dt) => dt.date_naive(),
            ActionDate::Date(d) => *d,
        }
    }

    /// Ordering key: a date-only value sorts no later than any timestamped
    /// value on the same date.
    fn sort_key(&self) -> (NaiveDate, Option<DateTime<Utc>>) {
        match self {
            ActionDate::DateTime(dt) => (dt.date_naive(), Some(dt.with_timezone(&Utc))),
            ActionDate::Date(d) => (*d, None),
        }
    }

    pub fn ordering(&self, other: &ActionDate) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl From<NaiveDate> for ActionDate {
    fn from(d: NaiveDate) -> Self {
        ActionDate::Date(d)
    }
}

impl From<DateTime<FixedOffset>> for ActionDate {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        ActionDate::DateTime(dt)
    }
}

impl fmt::Display for ActionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionDate::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            ActionDate::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

// ---------------------------------------------------------------------------
// ActionText
// ---------------------------------------------------------------------------

/// One scraped line of an item's action log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionText {
    pub text: String,
    pub date: ActionDate,
    /// 0 = top-level, 1 = committee, 2 = subcommittee.
    #[serde(default)]
    pub level: u8,
}

impl ActionText {
    pub fn new(text: impl Into<String>, date: impl Into<ActionDate>, level: u8) -> Self {
        Self {
            text: text.into(),
            date: date.into(),
            level,
        }
    }
}

// ---------------------------------------------------------------------------
// LegislativeItem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegislativeItem {
    pub item_type: ItemType,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub congress: u32,
    #[serde(default)]
    pub official_title: String,
}

impl LegislativeItem {
    pub fn new(item_type: ItemType, number: u32, congress: u32) -> Self {
        Self {
            item_type,
            number,
            congress,
            official_title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.official_title = title.into();
        self
    }

    /// Identifier in `{type}{number}-{congress}` form, e.g. `hr3590-111`.
    pub fn id(&self) -> String {
        format!("{}{}-{}", self.item_type, self.number, self.congress)
    }

    pub fn origin_chamber(&self) -> Chamber {
        self.item_type.origin_chamber()
    }

    pub fn is_constitutional_amendment(&self) -> bool {
        self.item_type.is_joint_resolution()
            && self
                .official_title
                .trim_start()
                .starts_with(CONSTITUTIONAL_AMENDMENT_PREFIX)
    }
}
