//! The closed set of life-cycle statuses a bill or resolution can be in.
//!
//! Each value has a stable legacy code (`PASS_OVER:HOUSE`, `PROV_KILL:VETO`)
//! which is what serializes; the enum itself keeps invalid combinations
//! unrepresentable.

use crate::types::Chamber;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// KillReason
// ---------------------------------------------------------------------------

/// Why an item was provisionally killed. All of these are recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KillReason {
    SuspensionFailed,
    ClotureFailed,
    PingPongFailed,
    Veto,
}

// ---------------------------------------------------------------------------
// LifeCycleStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifeCycleStatus {
    #[default]
    Introduced,
    Referred,
    Reported,
    /// Passed the originating chamber; now in the other one.
    PassOver(Chamber),
    /// Passed the second chamber with changes; goes back to the first.
    PassBack(Chamber),
    FailOriginating(Chamber),
    FailSecond(Chamber),
    /// One chamber adopted the conference report.
    ConferencePassed(Chamber),
    ProvisionallyKilled(KillReason),
    PassedBill,
    PassedSimpleResolution,
    PassedConcurrentResolution,
    PassedConstitutionalAmendment,
    EnactedSigned,
    EnactedVetoOverride,
    EnactedTenDayRule,
    VetoedPocket,
    /// The originating chamber overrode the veto; the other chamber has not.
    VetoOverridePassOver(Chamber),
    VetoOverrideFailOriginating(Chamber),
    VetoOverrideFailSecond(Chamber),
}

use Chamber::{House, Senate};
use LifeCycleStatus::*;

impl LifeCycleStatus {
    pub fn all() -> &'static [LifeCycleStatus] {
        &[
            Introduced,
            Referred,
            Reported,
            PassOver(House),
            PassOver(Senate),
            PassBack(House),
            PassBack(Senate),
            FailOriginating(House),
            FailOriginating(Senate),
            FailSecond(House),
            FailSecond(Senate),
            ConferencePassed(House),
            ConferencePassed(Senate),
            ProvisionallyKilled(KillReason::SuspensionFailed),
            ProvisionallyKilled(KillReason::ClotureFailed),
            ProvisionallyKilled(KillReason::PingPongFailed),
            ProvisionallyKilled(KillReason::Veto),
            PassedBill,
            PassedSimpleResolution,
            PassedConcurrentResolution,
            PassedConstitutionalAmendment,
            EnactedSigned,
            EnactedVetoOverride,
            EnactedTenDayRule,
            VetoedPocket,
            VetoOverridePassOver(House),
            VetoOverridePassOver(Senate),
            VetoOverrideFailOriginating(House),
            VetoOverrideFailOriginating(Senate),
            VetoOverrideFailSecond(House),
            VetoOverrideFailSecond(Senate),
        ]
    }

    pub fn code(self) -> &'static str {
        match self {
            Introduced => "INTRODUCED",
            Referred => "REFERRED",
            Reported => "REPORTED",
            PassOver(House) => "PASS_OVER:HOUSE",
            PassOver(Senate) => "PASS_OVER:SENATE",
            PassBack(House) => "PASS_BACK:HOUSE",
            PassBack(Senate) => "PASS_BACK:SENATE",
            FailOriginating(House) => "FAIL:ORIGINATING:HOUSE",
            FailOriginating(Senate) => "FAIL:ORIGINATING:SENATE",
            FailSecond(House) => "FAIL:SECOND:HOUSE",
            FailSecond(Senate) => "FAIL:SECOND:SENATE",
            ConferencePassed(House) => "CONFERENCE:PASSED:HOUSE",
            ConferencePassed(Senate) => "CONFERENCE:PASSED:SENATE",
            ProvisionallyKilled(KillReason::SuspensionFailed) => "PROV_KILL:SUSPENSIONFAILED",
            ProvisionallyKilled(KillReason::ClotureFailed) => "PROV_KILL:CLOTUREFAILED",
            ProvisionallyKilled(KillReason::PingPongFailed) => "PROV_KILL:PINGPONGFAIL",
            ProvisionallyKilled(KillReason::Veto) => "PROV_KILL:VETO",
            PassedBill => "PASSED:BILL",
            PassedSimpleResolution => "PASSED:SIMPLERES",
            PassedConcurrentResolution => "PASSED:CONCURRENTRES",
            PassedConstitutionalAmendment => "PASSED:CONSTAMEND",
            EnactedSigned => "ENACTED:SIGNED",
            EnactedVetoOverride => "ENACTED:VETO_OVERRIDE",
            EnactedTenDayRule => "ENACTED:TENDAYRULE",
            VetoedPocket => "VETOED:POCKET",
            VetoOverridePassOver(House) => "VETOED:OVERRIDE_PASS_OVER:HOUSE",
            VetoOverridePassOver(Senate) => "VETOED:OVERRIDE_PASS_OVER:SENATE",
            VetoOverrideFailOriginating(House) => "VETOED:OVERRIDE_FAIL_ORIGINATING:HOUSE",
            VetoOverrideFailOriginating(Senate) => "VETOED:OVERRIDE_FAIL_ORIGINATING:SENATE",
            VetoOverrideFailSecond(House) => "VETOED:OVERRIDE_FAIL_SECOND:HOUSE",
            VetoOverrideFailSecond(Senate) => "VETOED:OVERRIDE_FAIL_SECOND:SENATE",
        }
    }

    /// No further action is expected once an item reaches one of these.
    ///
    /// `PassedBill` is not terminal: Congress is done with the bill but it
    /// still waits on the President, and a later signature, veto or
    /// enactment line moves it on. Resolutions and constitutional
    /// amendments never go to the President, so their `Passed*` outcomes are.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PassedSimpleResolution
                | PassedConcurrentResolution
                | PassedConstitutionalAmendment
                | EnactedSigned
                | EnactedVetoOverride
                | EnactedTenDayRule
                | VetoedPocket
        )
    }

    /// Still in its originating chamber's committee stage.
    pub fn is_early_stage(self) -> bool {
        matches!(self, Introduced | Referred | Reported)
    }

    pub fn is_enacted(self) -> bool {
        matches!(self, EnactedSigned | EnactedVetoOverride | EnactedTenDayRule)
    }

    pub fn is_veto_related(self) -> bool {
        matches!(
            self,
            ProvisionallyKilled(KillReason::Veto)
                | VetoedPocket
                | VetoOverridePassOver(_)
                | VetoOverrideFailOriginating(_)
                | VetoOverrideFailSecond(_)
        )
    }

    /// Coarse position along the life cycle, for ordering comparisons.
    pub fn stage(self) -> u8 {
        match self {
            Introduced => 0,
            Referred => 1,
            Reported => 2,
            FailOriginating(_)
            | ProvisionallyKilled(KillReason::SuspensionFailed)
            | ProvisionallyKilled(KillReason::ClotureFailed) => 3,
            PassOver(_) | FailSecond(_) => 4,
            PassBack(_) | ProvisionallyKilled(KillReason::PingPongFailed) => 5,
            ConferencePassed(_) => 6,
            PassedBill
            | PassedSimpleResolution
            | PassedConcurrentResolution
            | PassedConstitutionalAmendment => 7,
            ProvisionallyKilled(KillReason::Veto)
            | VetoedPocket
            | VetoOverridePassOver(_)
            | VetoOverrideFailOriginating(_)
            | VetoOverrideFailSecond(_) => 8,
            EnactedSigned | EnactedVetoOverride | EnactedTenDayRule => 9,
        }
    }
}

impl fmt::Display for LifeCycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for LifeCycleStatus {
    type Err = crate::error::LegisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        LifeCycleStatus::all()
            .iter()
            .copied()
            .find(|status| status.code() == wanted)
            .ok_or_else(|| crate::error::LegisError::InvalidStatus(s.to_string()))
    }
}

impl Serialize for LifeCycleStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for LifeCycleStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
