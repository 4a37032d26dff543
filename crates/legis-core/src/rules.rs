use crate::action::{Detail, LawReference};
use crate::classifier::{MatchContext, Rule};
use crate::types::{ActionKind, CommitteeStep, LawKind};
use crate::vote::{interpret_house_vote, interpret_senate_vote};

// ---------------------------------------------------------------------------
// Helper macro for concise rule definitions
// ---------------------------------------------------------------------------

macro_rules! rule {
    (id: $id:expr, kind: $kind:expr, detect: $detect:expr) => {
        Rule {
            id: $id,
            kind: $kind,
            detect: $detect,
        }
    };
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

regex!(pocket_veto_re, r"(?i)\bpocket veto");
regex!(
    veto_re,
    r"(?i)\bVetoed by (?:the )?President\b|^\s*Veto message received"
);
regex!(signed_re, r"(?i)\bSigned by (?:the )?President\b");
regex!(
    to_president_re,
    r"(?i)\b(?:Presented|Sent|Cleared for) (?:to )?(?:the )?(?:White House|President)\b"
);
regex!(
    law_re,
    r"(?i)^\s*Became (?P<kind>Public|Private) Law(?: No)?:?\s*(?P<congress>\d+)-(?P<number>\d+)"
);
regex!(
    archivist_re,
    r"(?i)\bSent to (?:the )?Archivist of the United States unsigned"
);
regex!(discharged_re, r"(?i)\bdischarged\b");
regex!(hearing_re, r"(?i)\bhearings?\s+(?:were\s+)?held\b");
regex!(markup_re, r"(?i)\bmark-?up\b");
regex!(ordered_reported_re, r"(?i)\bOrdered to be reported\b");
regex!(
    forwarded_re,
    r"(?i)\bForwarded by (?:the )?Subcommittee\b"
);
regex!(
    reported_re,
    r"(?i)(?:^|[.;:]\s*)Reported\b|\breported by\b|\b(?:H|S)\.\s?Rept\.\s?\d"
);
regex!(
    calendar_re,
    r"(?i)\bPlaced on (?:the )?(?P<name>(?:[\w.]+\s+){0,3}?Calendar)\b"
);
regex!(
    referral_re,
    r"(?i)\breferred\s+(?:jointly\s+|sequentially\s+|in addition\s+)?to\b"
);

// ---------------------------------------------------------------------------
// Detectors
// ---------------------------------------------------------------------------

fn house_vote(ctx: &MatchContext) -> Option<Detail> {
    interpret_house_vote(ctx.text(), ctx.origin()).map(Detail::Vote)
}

fn senate_vote(ctx: &MatchContext) -> Option<Detail> {
    interpret_senate_vote(ctx.text(), ctx.origin()).map(Detail::Vote)
}

fn pocket_veto(ctx: &MatchContext) -> Option<Detail> {
    pocket_veto_re()
        .is_match(ctx.text())
        .then_some(Detail::Veto { pocket: true })
}

fn veto(ctx: &MatchContext) -> Option<Detail> {
    veto_re()
        .is_match(ctx.text())
        .then_some(Detail::Veto { pocket: false })
}

fn matches(re: &regex::Regex, ctx: &MatchContext) -> Option<Detail> {
    re.is_match(ctx.text()).then_some(Detail::Plain)
}

fn signed(ctx: &MatchContext) -> Option<Detail> {
    matches(signed_re(), ctx)
}

fn to_president(ctx: &MatchContext) -> Option<Detail> {
    matches(to_president_re(), ctx)
}

fn became_law(ctx: &MatchContext) -> Option<Detail> {
    let caps = law_re().captures(ctx.text())?;
    let kind = if caps["kind"].eq_ignore_ascii_case("private") {
        LawKind::Private
    } else {
        LawKind::Public
    };
    Some(Detail::Law(LawReference {
        kind,
        congress: caps["congress"].parse().ok()?,
        number: caps["number"].parse().ok()?,
    }))
}

fn unsigned_to_archivist(ctx: &MatchContext) -> Option<Detail> {
    archivist_re()
        .is_match(ctx.text())
        .then_some(Detail::UnsignedToArchivist)
}

fn discharged(ctx: &MatchContext) -> Option<Detail> {
    matches(discharged_re(), ctx)
}

fn hearing(ctx: &MatchContext) -> Option<Detail> {
    matches(hearing_re(), ctx)
}

fn committee_step(ctx: &MatchContext) -> Option<Detail> {
    let text = ctx.text();
    let step = if ordered_reported_re().is_match(text) {
        CommitteeStep::OrderedReported
    } else if forwarded_re().is_match(text) {
        CommitteeStep::Forwarded
    } else if markup_re().is_match(text) {
        CommitteeStep::Markup
    } else {
        return None;
    };
    Some(Detail::Committee(step))
}

fn reported(ctx: &MatchContext) -> Option<Detail> {
    reported_re()
        .is_match(ctx.text())
        .then_some(Detail::Committee(CommitteeStep::Reported))
}

fn calendar(ctx: &MatchContext) -> Option<Detail> {
    let caps = calendar_re().captures(ctx.text())?;
    Some(Detail::Calendar(caps["name"].to_string()))
}

fn referral(ctx: &MatchContext) -> Option<Detail> {
    matches(referral_re(), ctx)
}

// ---------------------------------------------------------------------------
// Default rule table (priority order)
// ---------------------------------------------------------------------------

pub fn default_rules() -> Vec<Rule> {
    vec![
        // 1. Recorded and voice votes, one pattern family per chamber
        rule!(id: "house_vote", kind: ActionKind::Vote, detect: house_vote),
        rule!(id: "senate_vote", kind: ActionKind::Vote, detect: senate_vote),
        // 2. Presidential actions
        rule!(id: "pocket_veto", kind: ActionKind::Vetoed, detect: pocket_veto),
        rule!(id: "veto", kind: ActionKind::Vetoed, detect: veto),
        rule!(id: "signed", kind: ActionKind::Signed, detect: signed),
        rule!(id: "became_law", kind: ActionKind::Enacted, detect: became_law),
        rule!(id: "unsigned_to_archivist", kind: ActionKind::Enacted, detect: unsigned_to_archivist),
        rule!(id: "to_president", kind: ActionKind::ToPresident, detect: to_president),
        // 3. Committee stage
        rule!(id: "discharged", kind: ActionKind::Discharged, detect: discharged),
        rule!(id: "hearing", kind: ActionKind::Hearing, detect: hearing),
        rule!(id: "committee_step", kind: ActionKind::CommitteeAction, detect: committee_step),
        rule!(id: "reported", kind: ActionKind::CommitteeAction, detect: reported),
        rule!(id: "calendar", kind: ActionKind::Calendar, detect: calendar),
        rule!(id: "referral", kind: ActionKind::Referral, detect: referral),
    ]
}
