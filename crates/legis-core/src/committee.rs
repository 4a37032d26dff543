//! Committee name resolution against a per-Congress registry.
//!
//! The registry is built once per Congress and handed to the classifier as an
//! immutable value. Resolution is best-effort: a name that cannot be pinned
//! to a single committee is logged and left out, since committee data
//! enriches an action but never decides its status.

use crate::error::{LegisError, Result};
use crate::item::LegislativeItem;
use crate::status::LifeCycleStatus;
use crate::types::Chamber;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Registry file formats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chamber: Option<Chamber>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcommittees: Vec<SubcommitteeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcommitteeEntry {
    pub id: String,
    pub name: String,
}

/// Either `{ committees: [...] }` or the flat `"{Chamber} {Name}": ID` /
/// `"{CommitteeID}|{SubcommitteeName}": ID` map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RegistryFile {
    Structured { committees: Vec<CommitteeEntry> },
    Flat(HashMap<String, String>),
}

// ---------------------------------------------------------------------------
// CommitteeRegistry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CommitteeRegistry {
    /// normalized name -> every (chamber, id) carrying that name
    by_name: HashMap<String, Vec<(Option<Chamber>, String)>>,
    /// committee id -> [(normalized subcommittee name, id)]
    subcommittees: HashMap<String, Vec<(String, String)>>,
    chamber_of: HashMap<String, Chamber>,
    /// normalized committee names, longest first, for prefix matching
    names: Vec<String>,
    sub_names: Vec<String>,
}

fn normalize_name(name: &str) -> String {
    let lowered = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let mut s = lowered.as_str();
    for prefix in ["the ", "committee on ", "subcommittee on ", "the "] {
        s = s.strip_prefix(prefix).unwrap_or(s);
    }
    s.to_string()
}

fn split_chamber(key: &str) -> (Option<Chamber>, &str) {
    let trimmed = key.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => match head.parse::<Chamber>() {
            Ok(chamber) if head.len() > 1 => (Some(chamber), rest),
            _ => (None, trimmed),
        },
        None => (None, trimmed),
    }
}

impl CommitteeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml(&data)
    }

    /// Parse a registry document. JSON documents are accepted too.
    pub fn from_yaml(data: &str) -> Result<Self> {
        match serde_yaml::from_str::<RegistryFile>(data)? {
            RegistryFile::Structured { committees } => Self::from_committees(committees),
            RegistryFile::Flat(map) => {
                let mut entries: Vec<(String, String)> = map.into_iter().collect();
                entries.sort();
                Self::from_flat(entries)
            }
        }
    }

    pub fn from_committees(committees: Vec<CommitteeEntry>) -> Result<Self> {
        let mut registry = Self::new();
        for committee in committees {
            registry.insert_committee(committee.chamber, &committee.name, &committee.id)?;
            for sub in &committee.subcommittees {
                registry.insert_subcommittee(&committee.id, &sub.name, &sub.id)?;
            }
        }
        registry.finish();
        Ok(registry)
    }

    pub fn from_flat<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut registry = Self::new();
        let mut subs = Vec::new();
        for (key, id) in entries {
            let key = key.as_ref();
            let id = id.into();
            match key.split_once('|') {
                Some((parent, name)) => subs.push((parent.trim().to_string(), name.to_string(), id)),
                None => {
                    let (chamber, name) = split_chamber(key);
                    registry.insert_committee(chamber, name, &id)?;
                }
            }
        }
        for (parent, name, id) in subs {
            registry.insert_subcommittee(&parent, &name, &id)?;
        }
        registry.finish();
        Ok(registry)
    }

    fn insert_committee(&mut self, chamber: Option<Chamber>, name: &str, id: &str) -> Result<()> {
        let key = normalize_name(name);
        let entries = self.by_name.entry(key.clone()).or_default();
        if let Some((_, existing)) = entries.iter().find(|(c, _)| *c == chamber) {
            if existing != id {
                return Err(LegisError::RegistryConflict {
                    key: format!("{} {}", chamber.map(|c| c.as_str()).unwrap_or(""), name)
                        .trim()
                        .to_string(),
                    existing: existing.clone(),
                    conflicting: id.to_string(),
                });
            }
            return Ok(());
        }
        entries.push((chamber, id.to_string()));
        if let Some(chamber) = chamber {
            self.chamber_of.insert(id.to_string(), chamber);
        }
        Ok(())
    }

    fn insert_subcommittee(&mut self, parent: &str, name: &str, id: &str) -> Result<()> {
        let key = normalize_name(name);
        let subs = self.subcommittees.entry(parent.to_string()).or_default();
        if let Some((_, existing)) = subs.iter().find(|(n, _)| *n == key) {
            if existing != id {
                return Err(LegisError::RegistryConflict {
                    key: format!("{parent}|{name}"),
                    existing: existing.clone(),
                    conflicting: id.to_string(),
                });
            }
            return Ok(());
        }
        subs.push((key, id.to_string()));
        if let Some(&chamber) = self.chamber_of.get(parent) {
            self.chamber_of.insert(id.to_string(), chamber);
        }
        Ok(())
    }

    fn finish(&mut self) {
        self.names = self.by_name.keys().cloned().collect();
        self.names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let mut sub_names: Vec<String> = self
            .subcommittees
            .values()
            .flat_map(|subs| subs.iter().map(|(n, _)| n.clone()))
            .collect();
        sub_names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        sub_names.dedup();
        self.sub_names = sub_names;
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }

    /// Exact `{Chamber} {Name}` lookup.
    pub fn lookup(&self, chamber: Chamber, name: &str) -> Option<&str> {
        self.by_name
            .get(&normalize_name(name))?
            .iter()
            .find(|(c, _)| *c == Some(chamber))
            .map(|(_, id)| id.as_str())
    }

    /// `{CommitteeID}|{SubcommitteeName}` lookup.
    pub fn lookup_subcommittee(&self, committee_id: &str, name: &str) -> Option<&str> {
        let key = normalize_name(name);
        self.subcommittees
            .get(committee_id)?
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, id)| id.as_str())
    }

    pub fn chamber_of(&self, id: &str) -> Option<Chamber> {
        self.chamber_of.get(id).copied()
    }

    fn longest_prefix<'n>(candidates: &'n [String], tail: &str) -> Option<&'n str> {
        let tail = tail.to_lowercase();
        candidates
            .iter()
            .find(|name| {
                tail.starts_with(name.as_str())
                    && !tail[name.len()..]
                        .chars()
                        .next()
                        .map(char::is_alphanumeric)
                        .unwrap_or(false)
            })
            .map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// What the resolver knows about the action beyond its text.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub item: &'a LegislativeItem,
    pub status: LifeCycleStatus,
    /// Chamber of the enclosing top-level action, when nesting gives one.
    pub enclosing_chamber: Option<Chamber>,
    /// Committees resolved on the parent action (for subcommittee keys).
    pub parent_committees: &'a [String],
}

regex!(
    committee_head_re,
    r"(?i)\b(?:(?P<chamber>House|Senate|Joint)\s+)?(?P<kind>Subcommittee|Committee)\s+on\s+(?:the\s+)?"
);
regex!(bare_chamber_head_re, r"\b(?P<chamber>House|Senate)\s+");
regex!(
    chamber_cue_re,
    r"(?i)\b(?:Received in the|Reported to(?: the)?|Referred to the)\s+(?P<chamber>House|Senate)\b"
);

impl CommitteeRegistry {
    /// Resolve every committee and subcommittee named in `text` to its ID.
    pub fn resolve_committees(&self, text: &str, ctx: &ResolveContext<'_>) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        if self.is_empty() {
            return ids;
        }
        fn push(id: &str, ids: &mut Vec<String>) {
            if !ids.iter().any(|existing| existing == id) {
                ids.push(id.to_string());
            }
        }

        for caps in committee_head_re().captures_iter(text) {
            let head_end = caps.get(0).map(|m| m.end()).unwrap_or(0);
            let tail = &text[head_end..];
            let explicit = caps
                .name("chamber")
                .and_then(|m| m.as_str().parse::<Chamber>().ok());
            let is_sub = caps["kind"].eq_ignore_ascii_case("subcommittee");

            if is_sub {
                let parents: Vec<String> = ids
                    .iter()
                    .chain(ctx.parent_committees.iter())
                    .cloned()
                    .collect();
                match self.resolve_subcommittee(tail, &parents) {
                    Some(id) => push(&id, &mut ids),
                    None => info!(text = %text, "unresolved subcommittee reference"),
                }
                continue;
            }

            match self.resolve_committee(tail, explicit, text, ctx) {
                Some(id) => push(&id, &mut ids),
                None => info!(text = %text, "unresolved committee reference"),
            }
        }

        // Older records say "Referred to House Agriculture" with no "Committee on".
        for caps in bare_chamber_head_re().captures_iter(text) {
            let head_end = caps.get(0).map(|m| m.end()).unwrap_or(0);
            let tail = &text[head_end..];
            if tail.starts_with("Committee") || tail.starts_with("Subcommittee") {
                continue;
            }
            let chamber = caps["chamber"].parse::<Chamber>().ok();
            if let Some(name) = Self::longest_prefix(&self.names, tail) {
                if let Some(id) = chamber.and_then(|c| self.lookup(c, name)) {
                    push(id, &mut ids);
                }
            }
        }

        ids
    }

    fn resolve_committee(
        &self,
        tail: &str,
        explicit: Option<Chamber>,
        text: &str,
        ctx: &ResolveContext<'_>,
    ) -> Option<String> {
        let name = Self::longest_prefix(&self.names, tail)?;
        let candidates = self.by_name.get(name)?;

        if let Some(chamber) = explicit {
            return self.lookup(chamber, name).map(str::to_string);
        }
        if let [(_, id)] = candidates.as_slice() {
            return Some(id.clone());
        }

        let cue = chamber_cue_re()
            .captures(text)
            .and_then(|c| c["chamber"].parse::<Chamber>().ok());
        let origin = ctx
            .status
            .is_early_stage()
            .then(|| ctx.item.origin_chamber());

        let chamber = ctx.enclosing_chamber.or(cue).or(origin)?;
        debug!(name, chamber = %chamber, "inferred committee chamber");
        self.lookup(chamber, name).map(str::to_string)
    }

    fn resolve_subcommittee(&self, tail: &str, parents: &[String]) -> Option<String> {
        let name = Self::longest_prefix(&self.sub_names, tail)?;
        for parent in parents {
            if let Some(id) = self.lookup_subcommittee(parent, name) {
                return Some(id.to_string());
            }
        }
        let mut matches = self
            .subcommittees
            .values()
            .flat_map(|subs| subs.iter())
            .filter(|(n, _)| n == name);
        match (matches.next(), matches.next()) {
            (Some((_, id)), None) => Some(id.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemType;

    fn registry() -> CommitteeRegistry {
        CommitteeRegistry::from_flat(vec![
            ("House Agriculture", "HSAG"),
            ("Senate Agriculture, Nutrition, and Forestry", "SSAF"),
            ("House Energy and Commerce", "HSIF"),
            ("House Ways and Means", "HSWM"),
            ("Senate Finance", "SSFI"),
            ("House Rules", "HSRU"),
            ("Senate Rules and Administration", "SSRA"),
            ("House Appropriations", "HSAP"),
            ("Senate Appropriations", "SSAP"),
            ("HSAG|Livestock, Dairy, and Poultry", "HSAG29"),
            ("HSAP|Defense", "HSAP02"),
            ("SSAP|Defense", "SSAP02"),
        ])
        .unwrap()
    }

    fn ctx<'a>(item: &'a LegislativeItem, status: LifeCycleStatus) -> ResolveContext<'a> {
        ResolveContext {
            item,
            status,
            enclosing_chamber: None,
            parent_committees: &[],
        }
    }

    #[test]
    fn explicit_chamber_resolves_exactly() {
        let reg = registry();
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        let ids = reg.resolve_committees(
            "Referred to the House Committee on Energy and Commerce, and in addition to the Committee on Ways and Means, for a period to be subsequently determined by the Speaker.",
            &ctx(&item, LifeCycleStatus::Introduced),
        );
        assert_eq!(ids, vec!["HSIF".to_string(), "HSWM".to_string()]);
    }

    #[test]
    fn ambiguous_name_uses_origin_only_while_early() {
        let reg = registry();
        let item = LegislativeItem::new(ItemType::S, 5, 111);
        let text = "Committee on Appropriations. Ordered to be reported.";

        let early = reg.resolve_committees(text, &ctx(&item, LifeCycleStatus::Referred));
        assert_eq!(early, vec!["SSAP".to_string()]);

        let late = reg.resolve_committees(
            text,
            &ctx(&item, LifeCycleStatus::PassOver(Chamber::Senate)),
        );
        assert!(late.is_empty());
    }

    #[test]
    fn enclosing_chamber_beats_origin() {
        let reg = registry();
        let item = LegislativeItem::new(ItemType::S, 5, 111);
        let mut c = ctx(&item, LifeCycleStatus::Referred);
        c.enclosing_chamber = Some(Chamber::House);
        let ids = reg.resolve_committees("Committee on Appropriations. Hearings held.", &c);
        assert_eq!(ids, vec!["HSAP".to_string()]);
    }

    #[test]
    fn phrase_cue_picks_chamber() {
        let reg = registry();
        let item = LegislativeItem::new(ItemType::S, 5, 111);
        let ids = reg.resolve_committees(
            "Received in the House and referred to the Committee on Appropriations.",
            &ctx(&item, LifeCycleStatus::PassOver(Chamber::Senate)),
        );
        assert_eq!(ids, vec!["HSAP".to_string()]);
    }

    #[test]
    fn subcommittee_uses_parent_committee() {
        let reg = registry();
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        let parents = vec!["HSAP".to_string()];
        let c = ResolveContext {
            item: &item,
            status: LifeCycleStatus::Referred,
            enclosing_chamber: None,
            parent_committees: &parents,
        };
        let ids = reg.resolve_committees("Referred to the Subcommittee on Defense.", &c);
        assert_eq!(ids, vec!["HSAP02".to_string()]);

        let ids = reg.resolve_committees(
            "Referred to the Subcommittee on Livestock, Dairy, and Poultry.",
            &ctx(&item, LifeCycleStatus::Referred),
        );
        assert_eq!(ids, vec!["HSAG29".to_string()]);
    }

    #[test]
    fn bare_chamber_form_and_unknown_names() {
        let reg = registry();
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        let ids = reg.resolve_committees(
            "Referred to House Agriculture",
            &ctx(&item, LifeCycleStatus::Introduced),
        );
        assert_eq!(ids, vec!["HSAG".to_string()]);

        let ids = reg.resolve_committees(
            "Referred to the Committee on Nonexistent Affairs.",
            &ctx(&item, LifeCycleStatus::Introduced),
        );
        assert!(ids.is_empty());
    }

    #[test]
    fn longest_name_wins() {
        let reg = registry();
        let item = LegislativeItem::new(ItemType::S, 1, 111);
        let ids = reg.resolve_committees(
            "Committee on Rules and Administration. Hearings held.",
            &ctx(&item, LifeCycleStatus::Referred),
        );
        assert_eq!(ids, vec!["SSRA".to_string()]);
    }

    #[test]
    fn structured_and_flat_files_load() {
        let structured = r#"
committees:
  - id: HSAG
    chamber: house
    name: Agriculture
    subcommittees:
      - id: HSAG29
        name: Livestock, Dairy, and Poultry
"#;
        let reg = CommitteeRegistry::from_yaml(structured).unwrap();
        assert_eq!(reg.lookup(Chamber::House, "Agriculture"), Some("HSAG"));
        assert_eq!(
            reg.lookup_subcommittee("HSAG", "Livestock, Dairy, and Poultry"),
            Some("HSAG29")
        );
        assert_eq!(reg.chamber_of("HSAG29"), Some(Chamber::House));

        let flat = r#"{"Senate Finance": "SSFI", "SSFI|Taxation": "SSFI11"}"#;
        let reg = CommitteeRegistry::from_yaml(flat).unwrap();
        assert_eq!(reg.lookup(Chamber::Senate, "Committee on Finance"), Some("SSFI"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn conflicting_keys_are_rejected() {
        let err = CommitteeRegistry::from_flat(vec![
            ("House Agriculture", "HSAG"),
            ("House  agriculture", "HSXX"),
        ])
        .unwrap_err();
        assert!(matches!(err, LegisError::RegistryConflict { .. }));
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let reg = CommitteeRegistry::new();
        let item = LegislativeItem::new(ItemType::Hr, 1, 111);
        assert!(reg
            .resolve_committees(
                "Referred to the House Committee on Agriculture.",
                &ctx(&item, LifeCycleStatus::Introduced)
            )
            .is_empty());
    }
}
