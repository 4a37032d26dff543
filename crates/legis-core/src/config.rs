use crate::error::Result;
use crate::transition::TEN_DAY_RULE_BILLS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Committee registry for the Congress being processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<PathBuf>,
    /// Congress assumed for items that leave it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congress: Option<u32>,
    /// Extra `{type}{number}-{congress}` ids that became law under the
    /// ten-day rule, on top of the built-in list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ten_day_rule: Vec<String>,
}

regex!(item_id_re, r"^(?:hr|s|hres|sres|hjres|sjres|hconres|sconres|hamdt|samdt)\d+-\d+$");

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Every ten-day-rule id, built-in first.
    pub fn ten_day_rule_ids(&self) -> Vec<String> {
        TEN_DAY_RULE_BILLS
            .iter()
            .map(|id| id.to_string())
            .chain(self.ten_day_rule.iter().cloned())
            .collect()
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for id in &self.ten_day_rule {
            if !item_id_re().is_match(id) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!(
                        "ten_day_rule entry '{}' is not an item id like 'hr1234-101'",
                        id
                    ),
                });
            } else if TEN_DAY_RULE_BILLS.contains(&id.as_str()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("ten_day_rule entry '{}' is already built in", id),
                });
            }
        }

        if let Some(registry) = &self.registry {
            if !registry.exists() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("registry file '{}' does not exist", registry.display()),
                });
            }
        }

        if self.congress == Some(0) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "congress is 0; items without a congress will get ids like 'hr1-0'"
                    .to_string(),
            });
        }

        warnings
    }
}
