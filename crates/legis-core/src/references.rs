//! Congressional Record citations and cross-references to other items.

use crate::item::LegislativeItem;
use crate::types::ItemType;
use serde::{Deserialize, Serialize};

/// A Congressional Record citation pulled out of an action's parentheticals,
/// e.g. `consideration: CR H1234-1240`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub reference: String,
}

regex!(citation_block_re, r"\s*\(([^()]*\bCR\s[^()]*)\)");
regex!(
    citation_part_re,
    r"^\s*(?:(?P<label>[^:]+?):\s*)?(?P<reference>CR\s.+?)\s*$"
);
regex!(
    item_ref_re,
    r"\b(?P<kind>H\.\s?Con\.\s?Res\.|H\.\s?J\.\s?Res\.|H\.\s?Res\.|H\.\s?R\.|S\.\s?Con\.\s?Res\.|S\.\s?J\.\s?Res\.|S\.\s?Res\.|S\.)\s?(?P<number>\d+)\b"
);
regex!(whitespace_re, r"\s+");

/// Every Congressional Record citation in `text`, in order of appearance.
pub fn extract_citations(text: &str) -> Vec<Citation> {
    let mut citations = Vec::new();
    for block in citation_block_re().captures_iter(text) {
        for part in block[1].split(';') {
            if let Some(caps) = citation_part_re().captures(part) {
                citations.push(Citation {
                    label: caps
                        .name("label")
                        .map(|m| m.as_str().trim().to_ascii_lowercase()),
                    reference: caps["reference"].to_string(),
                });
            }
        }
    }
    citations
}

/// Action text with citation parentheticals removed and whitespace collapsed.
pub fn clean_text(text: &str) -> String {
    let stripped = citation_block_re().replace_all(text, "");
    whitespace_re().replace_all(stripped.trim(), " ").into_owned()
}

/// IDs of other legislative items cited in `text` (`H. Res. 241` becomes
/// `hres241-{congress}`), deduplicated, excluding the item itself.
pub fn extract_item_refs(text: &str, item: &LegislativeItem) -> Vec<String> {
    let own_id = item.id();
    let mut ids: Vec<String> = Vec::new();
    for caps in item_ref_re().captures_iter(text) {
        let whole = caps.get(0).map(|m| m.start()).unwrap_or(0);
        // "U.S. 10" is not a Senate bill.
        let preceded_by_word = text[..whole]
            .chars()
            .next_back()
            .map(|c| c == '.' || c.is_alphanumeric())
            .unwrap_or(false);
        if preceded_by_word {
            continue;
        }
        let Ok(item_type) = caps["kind"].parse::<ItemType>() else {
            continue;
        };
        let id = format!("{}{}-{}", item_type, &caps["number"], item.congress);
        if id != own_id && !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
