//! The life-cycle state machine.
//!
//! `next_status` covers votes; `apply` covers every classified action and is
//! what the processor calls. Both return `None` for "no change".

use crate::action::{ClassifiedAction, Detail};
use crate::error::{LegisError, Result};
use crate::item::LegislativeItem;
use crate::status::{KillReason, LifeCycleStatus};
use crate::types::{ActionKind, CommitteeStep};
use crate::vote::{VoteOutcome, VoteType};
use tracing::debug;

use LifeCycleStatus::*;

/// Items known to have become law under the ten-day rule without an
/// "unsigned" line in their history.
pub const TEN_DAY_RULE_BILLS: &[&str] = &[
    "s2641-93",
    "hr1589-94",
    "s2527-100",
    "hr1677-101",
    "hr2978-101",
    "hr2126-104",
    "s1322-104",
];

/// The outcome of an unamended final passage, by item type.
fn final_passage(item: &LegislativeItem) -> LifeCycleStatus {
    if item.is_constitutional_amendment() {
        PassedConstitutionalAmendment
    } else if item.item_type.is_concurrent_resolution() {
        PassedConcurrentResolution
    } else if item.item_type.is_simple_resolution() {
        PassedSimpleResolution
    } else {
        PassedBill
    }
}

/// Status after `vote`, or `None` when the vote does not move the item.
pub fn next_status(
    vote: &VoteOutcome,
    item: &LegislativeItem,
    current: LifeCycleStatus,
) -> Option<LifeCycleStatus> {
    // Floor votes on amendments do not move the amendment through the life cycle.
    if item.item_type.is_amendment() {
        return None;
    }
    let chamber = vote.chamber;
    let origin = item.origin_chamber();

    match (vote.vote_type, vote.passed()) {
        (VoteType::InitialPassage, true) => Some(if item.item_type.is_simple_resolution() {
            PassedSimpleResolution
        } else {
            PassOver(chamber)
        }),
        (VoteType::InitialPassage, false) => Some(if vote.suspension {
            ProvisionallyKilled(KillReason::SuspensionFailed)
        } else {
            FailOriginating(chamber)
        }),

        (VoteType::SecondPassage | VoteType::PingPong, true) => Some(if vote.amended {
            PassBack(chamber)
        } else {
            final_passage(item)
        }),
        (VoteType::PingPong, false) => Some(ProvisionallyKilled(KillReason::PingPongFailed)),
        (VoteType::SecondPassage, false) => Some(if vote.suspension {
            ProvisionallyKilled(KillReason::SuspensionFailed)
        } else {
            FailSecond(chamber)
        }),

        (VoteType::Cloture, true) => None,
        (VoteType::Cloture, false) => Some(ProvisionallyKilled(KillReason::ClotureFailed)),

        (VoteType::Override, true) if chamber == origin => Some(VetoOverridePassOver(chamber)),
        (VoteType::Override, true) => None,
        (VoteType::Override, false) if chamber == origin => {
            Some(VetoOverrideFailOriginating(chamber))
        }
        (VoteType::Override, false) => Some(VetoOverrideFailSecond(chamber)),

        (VoteType::Conference, true) => {
            if current == ConferencePassed(chamber.other()) {
                Some(final_passage(item))
            } else {
                Some(ConferencePassed(chamber))
            }
        }
        (VoteType::Conference, false) => None,
    }
}

/// Status after a "Became Public/Private Law" line.
fn enactment(
    index: usize,
    action: &ClassifiedAction,
    item: &LegislativeItem,
    current: LifeCycleStatus,
    ten_day_exception: bool,
) -> Result<Option<LifeCycleStatus>> {
    if current.is_enacted() {
        debug!(item = %item.id(), status = %current, "enactment confirms current status");
        return Ok(None);
    }
    if current.is_veto_related() {
        return Ok(Some(EnactedVetoOverride));
    }
    if current.is_terminal() {
        return Err(LegisError::ImpossibleTransition {
            index,
            text: action.text.clone(),
            prior: current,
            reason: "item type does not become law".to_string(),
        });
    }
    if ten_day_exception {
        return Ok(Some(EnactedTenDayRule));
    }
    Err(LegisError::ImpossibleTransition {
        index,
        text: action.text.clone(),
        prior: current,
        reason: "became law without a signature, veto override or ten-day rule".to_string(),
    })
}

/// Status after `action` at position `index`, or `None` for no change.
///
/// `ten_day_exception` marks items known to have become law under the
/// ten-day rule.
pub fn apply(
    index: usize,
    action: &ClassifiedAction,
    item: &LegislativeItem,
    current: LifeCycleStatus,
    ten_day_exception: bool,
) -> Result<Option<LifeCycleStatus>> {
    let next = match (action.kind, &action.detail) {
        (ActionKind::Vote, _) => action
            .vote
            .as_ref()
            .and_then(|vote| next_status(vote, item, current)),

        (ActionKind::Referral, _) if current == Introduced => Some(Referred),
        (ActionKind::CommitteeAction, Some(Detail::Committee(CommitteeStep::Reported))) => {
            matches!(current, Introduced | Referred).then_some(Reported)
        }
        (ActionKind::Discharged | ActionKind::Calendar, _) => {
            matches!(current, Introduced | Referred).then_some(Reported)
        }

        (ActionKind::Vetoed, Some(Detail::Veto { pocket: true })) => Some(VetoedPocket),
        (ActionKind::Vetoed, _) => Some(ProvisionallyKilled(KillReason::Veto)),
        (ActionKind::Signed, _) => (!current.is_enacted()).then_some(EnactedSigned),

        (ActionKind::Enacted, Some(Detail::UnsignedToArchivist)) => {
            (!current.is_enacted()).then_some(EnactedTenDayRule)
        }
        (ActionKind::Enacted, _) => enactment(index, action, item, current, ten_day_exception)?,

        _ => None,
    };
    Ok(next.filter(|status| *status != current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::item::ActionText;
    use crate::types::{Chamber, ItemType};
    use crate::vote::interpret_vote;
    use chrono::NaiveDate;

    fn step(
        text: &str,
        item: &LegislativeItem,
        current: LifeCycleStatus,
    ) -> Result<Option<LifeCycleStatus>> {
        let action = ActionText::new(text, NaiveDate::from_ymd_opt(2010, 3, 23).unwrap(), 0);
        apply(0, &classify(&action, item), item, current, false)
    }

    fn vote_step(text: &str, item: &LegislativeItem, current: LifeCycleStatus) -> Option<LifeCycleStatus> {
        let vote = interpret_vote(text, item.origin_chamber()).unwrap();
        next_status(&vote, item, current)
    }

    #[test]
    fn house_suspension_passage_passes_over() {
        let item = LegislativeItem::new(ItemType::Hr, 3590, 111);
        let next = vote_step(
            "On motion to suspend the rules and pass the bill Agreed to by the Yeas and Nays: (2/3 required): 416 - 0 (Roll no. 768).",
            &item,
            Introduced,
        );
        assert_eq!(next, Some(PassOver(Chamber::House)));
    }

    #[test]
    fn amended_second_passage_passes_back() {
        let item = LegislativeItem::new(ItemType::Hr, 3590, 111);
        let next = vote_step(
            "Passed Senate with an amendment ... by Yea-Nay Vote. 60 - 39. Record Vote Number: 396.",
            &item,
            PassOver(Chamber::House),
        );
        assert_eq!(next, Some(PassBack(Chamber::Senate)));
    }

    #[test]
    fn unamended_second_passage_by_item_type() {
        let text = "Passed Senate without amendment by Unanimous Consent.";
        let bill = LegislativeItem::new(ItemType::Hr, 1, 111);
        assert_eq!(vote_step(text, &bill, PassOver(Chamber::House)), Some(PassedBill));

        let conres = LegislativeItem::new(ItemType::Hconres, 1, 111);
        assert_eq!(
            vote_step(text, &conres, PassOver(Chamber::House)),
            Some(PassedConcurrentResolution)
        );

        let amendment = LegislativeItem::new(ItemType::Hjres, 1, 111).with_title(
            "Proposing an amendment to the Constitution of the United States relative to the line-item veto.",
        );
        assert_eq!(
            vote_step(text, &amendment, PassOver(Chamber::House)),
            Some(PassedConstitutionalAmendment)
        );

        let plain_jres = LegislativeItem::new(ItemType::Hjres, 2, 111).with_title("Making continuing appropriations.");
        assert_eq!(vote_step(text, &plain_jres, PassOver(Chamber::House)), Some(PassedBill));
    }

    #[test]
    fn simple_resolution_passage_is_terminal() {
        let item = LegislativeItem::new(ItemType::Hres, 241, 111);
        let next = vote_step("On agreeing to the resolution Agreed to by voice vote.", &item, Introduced);
        assert_eq!(next, Some(PassedSimpleResolution));
        assert!(PassedSimpleResolution.is_terminal());
    }

    #[test]
    fn failures_in_the_originating_chamber() {
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        assert_eq!(
            vote_step(
                "On motion to suspend the rules and pass the bill Failed by the Yeas and Nays: (2/3 required): 250 - 170 (Roll no. 99).",
                &item,
                Reported
            ),
            Some(ProvisionallyKilled(KillReason::SuspensionFailed))
        );
        assert_eq!(
            vote_step("On passage Failed by the Yeas and Nays: 200 - 220 (Roll no. 100).", &item, Reported),
            Some(FailOriginating(Chamber::House))
        );
        assert_eq!(
            vote_step("Failed of passage in Senate by Voice Vote.", &item, PassOver(Chamber::House)),
            Some(FailSecond(Chamber::Senate))
        );
    }

    #[test]
    fn veto_then_enactment_is_override() {
        let item = LegislativeItem::new(ItemType::Hr, 3590, 111);
        let vetoed = step("Vetoed by President.", &item, PassedBill).unwrap();
        assert_eq!(vetoed, Some(ProvisionallyKilled(KillReason::Veto)));

        let enacted = step("Became Public Law No: 111-148.", &item, ProvisionallyKilled(KillReason::Veto)).unwrap();
        assert_eq!(enacted, Some(EnactedVetoOverride));
    }

    #[test]
    fn cloture_fail_then_pass() {
        let item = LegislativeItem::new(ItemType::S, 1, 111);
        let killed = vote_step(
            "Cloture on the motion to proceed to the measure not invoked in Senate by Yea-Nay Vote. 57 - 41. Record Vote Number: 250.",
            &item,
            Reported,
        );
        assert_eq!(killed, Some(ProvisionallyKilled(KillReason::ClotureFailed)));

        let invoked = vote_step(
            "Cloture on the motion to proceed to the measure invoked in Senate by Yea-Nay Vote. 60 - 39. Record Vote Number: 251.",
            &item,
            ProvisionallyKilled(KillReason::ClotureFailed),
        );
        assert_eq!(invoked, None);
    }

    #[test]
    fn conference_needs_both_chambers() {
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        let house = "On agreeing to the conference report Agreed to by recorded vote: 250 - 180 (Roll no. 402).";
        let senate = "Senate agreed to conference report by Yea-Nay Vote. 60 - 40. Record Vote Number: 12.";

        let first = vote_step(house, &item, PassBack(Chamber::Senate));
        assert_eq!(first, Some(ConferencePassed(Chamber::House)));

        let second = vote_step(senate, &item, ConferencePassed(Chamber::House));
        assert_eq!(second, Some(PassedBill));

        // A repeat vote in the same chamber does not finish the item.
        let repeat = vote_step(house, &item, ConferencePassed(Chamber::House));
        assert_eq!(repeat, Some(ConferencePassed(Chamber::House)));
    }

    #[test]
    fn override_votes_by_chamber() {
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        let house_pass = "On passage, the objections of the President to the contrary notwithstanding Passed by the Yeas and Nays: (2/3 required): 300 - 120 (Roll no. 401).";
        assert_eq!(
            vote_step(house_pass, &item, ProvisionallyKilled(KillReason::Veto)),
            Some(VetoOverridePassOver(Chamber::House))
        );
        assert_eq!(
            vote_step(
                "Passed Senate over veto by Yea-Nay Vote. 70 - 28. Record Vote Number: 300.",
                &item,
                VetoOverridePassOver(Chamber::House)
            ),
            None
        );
        assert_eq!(
            vote_step(
                "Senate sustained the veto by Yea-Nay Vote. 50 - 48. Record Vote Number: 12.",
                &item,
                VetoOverridePassOver(Chamber::House)
            ),
            Some(VetoOverrideFailSecond(Chamber::Senate))
        );
    }

    #[test]
    fn ping_pong_failure_is_recoverable() {
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        let next = vote_step(
            "On motion that the House agree to the Senate amendment Failed by the Yeas and Nays: 200 - 215 (Roll no. 70).",
            &item,
            PassBack(Chamber::Senate),
        );
        assert_eq!(next, Some(ProvisionallyKilled(KillReason::PingPongFailed)));
        assert!(!ProvisionallyKilled(KillReason::PingPongFailed).is_terminal());
    }

    #[test]
    fn presidential_actions_and_committee_stage() {
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        assert_eq!(step("Signed by President.", &item, PassedBill).unwrap(), Some(EnactedSigned));
        assert_eq!(step("Signed by President.", &item, EnactedSigned).unwrap(), None);
        assert_eq!(
            step("Pocket Vetoed by President.", &item, PassedBill).unwrap(),
            Some(VetoedPocket)
        );
        assert_eq!(
            step("Sent to Archivist of the United States unsigned.", &item, PassedBill).unwrap(),
            Some(EnactedTenDayRule)
        );
        assert_eq!(
            step("Referred to the House Committee on Agriculture.", &item, Introduced).unwrap(),
            Some(Referred)
        );
        assert_eq!(
            step("Referred to the Subcommittee on Livestock.", &item, Referred).unwrap(),
            None
        );
        assert_eq!(
            step("Placed on the Union Calendar, Calendar No. 190.", &item, Referred).unwrap(),
            Some(Reported)
        );
        assert_eq!(
            step("Ordered to be Reported by Voice Vote.", &item, Referred).unwrap(),
            None
        );
        assert_eq!(
            step("Presented to President.", &item, PassedBill).unwrap(),
            None
        );
    }

    #[test]
    fn enactment_without_passage_is_an_error() {
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        let err = step("Became Public Law No: 111-1.", &item, Introduced).unwrap_err();
        match err {
            LegisError::ImpossibleTransition { prior, text, .. } => {
                assert_eq!(prior, Introduced);
                assert_eq!(text, "Became Public Law No: 111-1.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn enactment_after_other_terminal_outcomes() {
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        assert_eq!(
            step("Became Public Law No: 111-1.", &item, VetoedPocket).unwrap(),
            Some(EnactedVetoOverride)
        );

        for (item_type, prior) in [
            (ItemType::Hres, PassedSimpleResolution),
            (ItemType::Hconres, PassedConcurrentResolution),
            (ItemType::Hjres, PassedConstitutionalAmendment),
        ] {
            let item = LegislativeItem::new(item_type, 1, 111);
            match step("Became Public Law No: 111-1.", &item, prior).unwrap_err() {
                LegisError::ImpossibleTransition { prior: p, reason, .. } => {
                    assert_eq!(p, prior);
                    assert_eq!(reason, "item type does not become law");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn enactment_confirms_or_uses_ten_day_list() {
        let item = LegislativeItem::new(ItemType::S, 2641, 93);
        assert_eq!(step("Became Public Law No: 93-1.", &item, EnactedSigned).unwrap(), None);

        let action = ActionText::new(
            "Became Public Law No: 93-600.",
            NaiveDate::from_ymd_opt(1975, 1, 2).unwrap(),
            0,
        );
        let classified = classify(&action, &item);
        let next = apply(0, &classified, &item, PassedBill, TEN_DAY_RULE_BILLS.contains(&item.id().as_str())).unwrap();
        assert_eq!(next, Some(EnactedTenDayRule));
    }

    #[test]
    fn amendments_do_not_move_on_votes() {
        let item = LegislativeItem::new(ItemType::Hamdt, 12, 111);
        assert_eq!(
            vote_step("On agreeing to the resolution Agreed to by voice vote.", &item, Introduced),
            None
        );
    }
}
