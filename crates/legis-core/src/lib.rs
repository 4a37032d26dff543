/// Declare a lazily compiled, process-wide regex accessor.
macro_rules! regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static regex::Regex {
            static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            RE.get_or_init(|| regex::Regex::new($pattern).unwrap())
        }
    };
}

pub mod action;
pub mod classifier;
pub mod committee;
pub mod config;
pub mod error;
pub mod item;
pub mod processor;
pub mod references;
pub mod rules;
pub mod status;
pub mod summary;
pub mod transition;
pub mod types;
pub mod vote;

pub use action::{ClassifiedAction, Detail, LawReference, ParentLink};
pub use classifier::{Classifier, MatchContext};
pub use committee::{CommitteeRegistry, ResolveContext};
pub use error::{LegisError, Result};
pub use item::{ActionDate, ActionText, LegislativeItem};
pub use processor::{process, Processed, Processor};
pub use status::{KillReason, LifeCycleStatus};
pub use summary::{summarize, HistorySummary};
pub use types::{ActionKind, Chamber, ItemType};
pub use vote::{interpret_vote, VoteOutcome};
