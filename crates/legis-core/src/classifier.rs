use crate::action::{ClassifiedAction, Detail};
use crate::committee::{CommitteeRegistry, ResolveContext};
use crate::item::{ActionText, LegislativeItem};
use crate::references::{clean_text, extract_citations, extract_item_refs};
use crate::rules::default_rules;
use crate::status::LifeCycleStatus;
use crate::types::{ActionKind, Chamber};
use tracing::debug;

// ---------------------------------------------------------------------------
// MatchContext
// ---------------------------------------------------------------------------

/// One action line plus what is known about the item at that point.
pub struct MatchContext<'a> {
    pub action: &'a ActionText,
    pub item: &'a LegislativeItem,
    pub status: LifeCycleStatus,
    /// Chamber of the top-level action this one is nested under.
    pub enclosing_chamber: Option<Chamber>,
    /// Committees resolved on the parent action.
    pub parent_committees: &'a [String],
}

impl<'a> MatchContext<'a> {
    pub fn new(action: &'a ActionText, item: &'a LegislativeItem) -> Self {
        Self {
            action,
            item,
            status: LifeCycleStatus::Introduced,
            enclosing_chamber: None,
            parent_committees: &[],
        }
    }

    pub fn with_status(mut self, status: LifeCycleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn text(&self) -> &'a str {
        &self.action.text
    }

    pub fn origin(&self) -> Chamber {
        self.item.origin_chamber()
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A fn-pointer rule. `detect` returns `Some` when the rule claims the line.
pub struct Rule {
    pub id: &'static str,
    pub kind: ActionKind,
    pub detect: fn(&MatchContext) -> Option<Detail>,
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Ordered rule table; the first rule that matches decides the kind.
pub struct Classifier {
    rules: Vec<Rule>,
    registry: Option<CommitteeRegistry>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Classifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            registry: None,
        }
    }

    pub fn with_registry(mut self, registry: CommitteeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn registry(&self) -> Option<&CommitteeRegistry> {
        self.registry.as_ref()
    }

    pub fn rule_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.id)
    }

    pub fn classify(&self, ctx: &MatchContext) -> ClassifiedAction {
        let text = ctx.text();
        let matched = self
            .rules
            .iter()
            .find_map(|rule| (rule.detect)(ctx).map(|detail| (rule, detail)));

        let (kind, rule, vote, detail) = match matched {
            Some((rule, Detail::Vote(outcome))) => (rule.kind, Some(rule.id), Some(outcome), None),
            Some((rule, Detail::Plain)) => (rule.kind, Some(rule.id), None, None),
            Some((rule, detail)) => (rule.kind, Some(rule.id), None, Some(detail)),
            None => {
                debug!(text = %text, "unrecognized action text");
                (ActionKind::PlainAction, None, None, None)
            }
        };

        let committees = self.registry.as_ref().and_then(|registry| {
            let resolve = ResolveContext {
                item: ctx.item,
                status: ctx.status,
                enclosing_chamber: ctx.enclosing_chamber,
                parent_committees: ctx.parent_committees,
            };
            let ids = registry.resolve_committees(text, &resolve);
            (!ids.is_empty()).then_some(ids)
        });
        let item_refs = extract_item_refs(text, ctx.item);

        ClassifiedAction {
            kind,
            rule: rule.map(str::to_string),
            date: ctx.action.date,
            level: ctx.action.level,
            text: clean_text(text),
            citations: extract_citations(text),
            committees,
            item_refs: (!item_refs.is_empty()).then_some(item_refs),
            parent: None,
            vote,
            detail,
            status: None,
        }
    }
}

/// Classify one line with the default rule table and no committee registry.
pub fn classify(action: &ActionText, item: &LegislativeItem) -> ClassifiedAction {
    Classifier::default().classify(&MatchContext::new(action, item))
}
