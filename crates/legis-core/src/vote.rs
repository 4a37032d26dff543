//! Reads chamber, vote type, method, result and roll number out of
//! vote-shaped action text.
//!
//! House and Senate clerks phrase recorded votes in completely different
//! ways, so each chamber gets its own pattern and its own reading of the
//! matched motion. Nothing about the chamber is inferred from a shared
//! pattern.

use crate::types::Chamber;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Vote enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteType {
    /// Passage in the chamber the item was introduced in.
    InitialPassage,
    /// Passage in the other chamber.
    SecondPassage,
    /// Agreeing (or not) to the other chamber's amendments.
    PingPong,
    Conference,
    Override,
    Cloture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteMethod {
    Roll,
    Voice,
    UnanimousConsent,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteResult {
    Pass,
    Fail,
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VoteType::InitialPassage => "initial_passage",
            VoteType::SecondPassage => "second_passage",
            VoteType::PingPong => "ping_pong",
            VoteType::Conference => "conference",
            VoteType::Override => "override",
            VoteType::Cloture => "cloture",
        };
        f.write_str(s)
    }
}

impl fmt::Display for VoteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VoteMethod::Roll => "roll",
            VoteMethod::Voice => "voice",
            VoteMethod::UnanimousConsent => "unanimous_consent",
            VoteMethod::Other => "other",
        };
        f.write_str(s)
    }
}

impl fmt::Display for VoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VoteResult::Pass => "pass",
            VoteResult::Fail => "fail",
        })
    }
}

// ---------------------------------------------------------------------------
// VoteOutcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub chamber: Chamber,
    pub vote_type: VoteType,
    pub method: VoteMethod,
    pub result: VoteResult,
    /// Roll call / record vote number, verbatim. Join key into roll-call data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll: Option<String>,
    /// Passed with an amendment, so the other chamber still has to concur.
    #[serde(default)]
    pub amended: bool,
    /// Taken on a motion to suspend the rules (House, two-thirds required).
    #[serde(default)]
    pub suspension: bool,
}

impl VoteOutcome {
    pub fn passed(&self) -> bool {
        self.result == VoteResult::Pass
    }
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

regex!(
    house_vote_re,
    r"(?i)^\s*(?:(?:Resolving differences\s*-+\s*House actions|Passed/agreed to in House|Failed of passage/not agreed to in House):\s*)?(?P<motion>On passage|On motion to suspend the rules and (?:pass|agree to) the (?:bill|joint resolution|concurrent resolution|resolution|conference report|Senate amendments?)(?:,? as amended)?|On agreeing to the (?:resolution|conference report|Senate amendments?)(?:,? as amended)?|On motion that the House (?:suspend the rules and )?(?:agree|concur) (?:with an amendment )?(?:to|in) the Senate amendments?(?: with an? amendments?)?|On motion to table the (?:measure|resolution|bill)|Two-thirds of the Members present having voted in the affirmative,? the (?:bill|joint resolution) is passed|House agreed to Senate amendments?[^.]*|Conference report (?:not )?agreed to in House|Passed House)(?P<override>,? the objections of the President to the contrary notwithstanding)?(?P<amended>,? as amended|\s*\(Amended\))?[\s.,:]*(?P<result>Not agreed to|Agreed to|Failed of passage|Failed|Passed)?"
);

regex!(
    senate_vote_re,
    r"(?i)(?:^|[.;:]\s+)\s*(?P<motion>Passed Senate over veto|Passed Senate|Measure passed Senate|Failed of passage in Senate|Disagreed to in Senate|(?:Joint |Concurrent )?Resolution (?:not )?agreed to in Senate|Conference report (?:not )?agreed to in Senate|(?:Introduced|Submitted) in the Senate,[^.]*?\band (?:passed|agreed to)|Received in the Senate,[^.]*?\band passed|Senate (?:agreed to|disagreed to|concurred in|concurs in) (?:the )?(?:conference report|House amendments?|amendments? of the House)[^.]*|Senate receded from its amendment and concurred[^.]*|Cloture[^.]*?(?:not )?invoked in Senate|Motion to table the (?:measure|resolution|bill) (?:was )?(?:rejected|not agreed to|agreed to|failed)(?: in Senate)?|Senate (?:sustained|overrode)[^.]*veto)(?P<extra>.*?)(?:(?P<how>without objection|by Unanimous Consent|by Voice Vote|(?:by )?Yea-Nay(?: Vote)?\.\s*\d+\s*-\s*\d+\.\s*Record Vote (?:No|Number):\s*\d+)|\.?\s*$)"
);

regex!(house_roll_re, r"(?i)\((?:Roll no\.|Record Vote No:)\s*(\d+)\)");
regex!(senate_roll_re, r"(?i)Record Vote (?:No|Number):\s*(\d+)");
regex!(voice_re, r"(?i)voice vote");
regex!(consent_re, r"(?i)unanimous consent|without objection");
regex!(
    house_pingpong_re,
    r"(?i)(?:agree|concur)s? (?:with an amendment )?(?:to|in) the Senate amendment|House agreed to Senate amendment"
);
regex!(amendment_phrase_re, r"(?i)as amended|with (?:an? )?amendments?|\(Amended\)");

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map(|m| m.as_str()).unwrap_or("")
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}

fn method_and_roll(text: &str, roll_re: &Regex) -> (VoteMethod, Option<String>) {
    // A roll number wins over looser "voice vote" phrasing in the same line.
    if let Some(caps) = roll_re.captures(text) {
        return (VoteMethod::Roll, Some(caps[1].to_string()));
    }
    if voice_re().is_match(text) {
        (VoteMethod::Voice, None)
    } else if consent_re().is_match(text) {
        (VoteMethod::UnanimousConsent, None)
    } else {
        (VoteMethod::Other, None)
    }
}

fn passage_type(chamber: Chamber, origin: Chamber) -> VoteType {
    if chamber == origin {
        VoteType::InitialPassage
    } else {
        VoteType::SecondPassage
    }
}

// ---------------------------------------------------------------------------
// Interpreters
// ---------------------------------------------------------------------------

/// Read a vote out of `text`, if it is one. `origin` is the chamber the item
/// was introduced in, which decides initial versus second-chamber passage.
pub fn interpret_vote(text: &str, origin: Chamber) -> Option<VoteOutcome> {
    interpret_house_vote(text, origin).or_else(|| interpret_senate_vote(text, origin))
}

pub fn interpret_house_vote(text: &str, origin: Chamber) -> Option<VoteOutcome> {
    let caps = house_vote_re().captures(text)?;
    let motion = group(&caps, "motion");
    let result = group(&caps, "result");

    let self_describing = contains(motion, "passed house")
        || contains(motion, "house agreed to")
        || contains(motion, "agreed to in house")
        || contains(motion, "two-thirds");
    if result.is_empty() && !self_describing {
        return None;
    }

    let mut passed = if self_describing && result.is_empty() {
        !contains(motion, "not agreed")
    } else {
        let r = result.to_ascii_lowercase();
        !(r.starts_with("not") || r.starts_with("failed"))
    };
    // A failed motion to table keeps the measure alive.
    if contains(motion, "to table") {
        passed = !passed;
    }

    let is_override = caps.name("override").is_some()
        || contains(motion, "objections of the president")
        || contains(motion, "two-thirds");
    let vote_type = if is_override {
        VoteType::Override
    } else if house_pingpong_re().is_match(text) {
        VoteType::PingPong
    } else if contains(text, "conference report") {
        VoteType::Conference
    } else {
        passage_type(Chamber::House, origin)
    };

    let amended = caps.name("amended").is_some() || amendment_phrase_re().is_match(motion);
    let (method, roll) = method_and_roll(text, house_roll_re());

    Some(VoteOutcome {
        chamber: Chamber::House,
        vote_type,
        method,
        result: if passed { VoteResult::Pass } else { VoteResult::Fail },
        roll,
        amended,
        suspension: contains(motion, "suspend the rules"),
    })
}

pub fn interpret_senate_vote(text: &str, origin: Chamber) -> Option<VoteOutcome> {
    let caps = senate_vote_re().captures(text)?;
    let motion = group(&caps, "motion").to_ascii_lowercase();
    let extra = group(&caps, "extra");

    // "disagreed" contains "agreed", so failures are checked first.
    let passed = if motion.contains("to table") {
        ["rejected", "not agreed", "failed"]
            .iter()
            .any(|w| motion.contains(w))
    } else if ["disagreed", "not agreed", "not invoked", "failed", "sustained"]
        .iter()
        .any(|w| motion.contains(w))
    {
        false
    } else {
        ["passed", "agreed", "concurred", "concurs", "overrode", "invoked", "receded"]
            .iter()
            .any(|w| motion.contains(w))
    };

    let vote_type = if ["overrode", "override", "sustained", "over veto"]
        .iter()
        .any(|w| motion.contains(w))
    {
        VoteType::Override
    } else if motion.contains("conference report") {
        VoteType::Conference
    } else if ["house amendment", "of the house", "receded"]
        .iter()
        .any(|w| motion.contains(w))
    {
        VoteType::PingPong
    } else if motion.contains("cloture") {
        VoteType::Cloture
    } else {
        passage_type(Chamber::Senate, origin)
    };

    let amended = amendment_phrase_re().is_match(extra)
        || (vote_type == VoteType::PingPong && motion.contains("with an amendment"));
    let (method, roll) = method_and_roll(text, senate_roll_re());

    Some(VoteOutcome {
        chamber: Chamber::Senate,
        vote_type,
        method,
        result: if passed { VoteResult::Pass } else { VoteResult::Fail },
        roll,
        amended,
        suspension: false,
    })
}
