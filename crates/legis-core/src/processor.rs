//! Runs one item's action log through the classifier and the state machine.

use crate::action::{ClassifiedAction, ParentLink};
use crate::classifier::{Classifier, MatchContext};
use crate::committee::CommitteeRegistry;
use crate::config::Config;
use crate::error::Result;
use crate::item::{ActionText, LegislativeItem};
use crate::status::LifeCycleStatus;
use crate::summary::{summarize, HistorySummary};
use crate::transition::{apply, TEN_DAY_RULE_BILLS};
use crate::types::Chamber;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Processed {
    pub actions: Vec<ClassifiedAction>,
    pub status: LifeCycleStatus,
}

/// Full per-item result: processed actions plus the milestone summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub item: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub status: LifeCycleStatus,
    pub summary: HistorySummary,
    pub actions: Vec<ClassifiedAction>,
}

// ---------------------------------------------------------------------------
// Processor
// ---------------------------------------------------------------------------

regex!(
    chamber_cue_re,
    r"(?i)\b(?:in|to) the (?P<a>House|Senate)\b|\b(?P<b>House|Senate) (?:Sub)?[Cc]ommittee\b"
);

pub struct Processor {
    classifier: Classifier,
    ten_day_rule: Vec<String>,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}

impl Processor {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            ten_day_rule: TEN_DAY_RULE_BILLS.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Build from config: loads the committee registry and the extra
    /// ten-day-rule ids.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut classifier = Classifier::default();
        if let Some(path) = &config.registry {
            classifier = classifier.with_registry(CommitteeRegistry::load(path)?);
        }
        Ok(Self {
            classifier,
            ten_day_rule: config.ten_day_rule_ids(),
        })
    }

    pub fn with_ten_day_rule<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ten_day_rule.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    fn is_ten_day_exception(&self, item: &LegislativeItem) -> bool {
        let id = item.id();
        self.ten_day_rule.iter().any(|known| *known == id)
    }

    /// Chamber an action took place in, as far as it says.
    fn chamber_of(&self, action: &ClassifiedAction) -> Option<Chamber> {
        if let Some(vote) = &action.vote {
            return Some(vote.chamber);
        }
        let from_committee = self.classifier.registry().and_then(|registry| {
            action
                .committees
                .iter()
                .flatten()
                .find_map(|id| registry.chamber_of(id))
        });
        from_committee.or_else(|| {
            let caps = chamber_cue_re().captures(&action.text)?;
            caps.name("a")
                .or_else(|| caps.name("b"))
                .and_then(|m| m.as_str().parse().ok())
        })
    }

    pub fn process(&self, actions: &[ActionText], item: &LegislativeItem) -> Result<Processed> {
        let mut ordered: Vec<&ActionText> = actions.iter().collect();
        ordered.sort_by(|a, b| a.date.ordering(&b.date));

        let ten_day_exception = self.is_ten_day_exception(item);
        let mut status = LifeCycleStatus::Introduced;
        let mut out: Vec<ClassifiedAction> = Vec::with_capacity(ordered.len());

        for (index, action) in ordered.into_iter().enumerate() {
            let parent = (action.level > 0).then(|| {
                match out.iter().rposition(|prior| prior.level < action.level) {
                    Some(i) => ParentLink::Resolved(i),
                    None => {
                        warn!(
                            item = %item.id(),
                            index,
                            level = action.level,
                            text = %action.text,
                            "nested action has no parent"
                        );
                        ParentLink::Unresolved
                    }
                }
            });

            let parent_committees: &[String] = parent
                .and_then(ParentLink::index)
                .and_then(|i| out[i].committees.as_deref())
                .unwrap_or(&[]);
            let enclosing_chamber = parent.and_then(ParentLink::index).and_then(|_| {
                let top = out.iter().rposition(|prior| prior.level == 0)?;
                self.chamber_of(&out[top])
            });

            let ctx = MatchContext {
                action,
                item,
                status,
                enclosing_chamber,
                parent_committees,
            };
            let mut classified = self.classifier.classify(&ctx);
            classified.parent = parent;

            if let Some(next) = apply(index, &classified, item, status, ten_day_exception)? {
                debug!(item = %item.id(), from = %status, to = %next, "status transition");
                classified.status = Some(next);
                status = next;
            }
            out.push(classified);
        }

        Ok(Processed {
            actions: out,
            status,
        })
    }

    /// `process` plus the history summary.
    pub fn analyze(&self, actions: &[ActionText], item: &LegislativeItem) -> Result<Report> {
        let processed = self.process(actions, item)?;
        Ok(Report {
            item: item.id(),
            title: item.official_title.clone(),
            status: processed.status,
            summary: summarize(&processed.actions),
            actions: processed.actions,
        })
    }
}

/// Process with the default rule table, no committee registry and the
/// built-in ten-day-rule list.
pub fn process(actions: &[ActionText], item: &LegislativeItem) -> Result<Processed> {
    Processor::default().process(actions, item)
}
