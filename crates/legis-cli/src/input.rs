use anyhow::Context;
use legis_core::{ActionText, ItemType, LegislativeItem};
use serde::Deserialize;
use std::path::Path;

/// One item and its action log, as stored on disk.
#[derive(Debug, Deserialize)]
pub struct ItemFile {
    pub item_type: ItemType,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub congress: Option<u32>,
    #[serde(default)]
    pub official_title: String,
    #[serde(default)]
    pub actions: Vec<ActionText>,
}

impl ItemFile {
    /// YAML or JSON; JSON parses as YAML.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let file: ItemFile = serde_yaml::from_str(&data)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(file)
    }

    pub fn into_parts(self, default_congress: Option<u32>) -> (LegislativeItem, Vec<ActionText>) {
        let congress = self.congress.or(default_congress).unwrap_or(0);
        let item = LegislativeItem::new(self.item_type, self.number, congress)
            .with_title(self.official_title);
        (item, self.actions)
    }
}
