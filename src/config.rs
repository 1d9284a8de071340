//! The JSON modifier configuration used for tiered mods.
//!
//! Two shapes are accepted for the ritual categories. The flat shape gives percentages per
//! ritual power id:
//!
//! ```json
//! { "default": 100, "ritpow_modifiers": { "3": 50, "12": 80 } }
//! ```
//!
//! The tier shape gives percentages per named tier, and assigns classes (ritual power names) to
//! tiers:
//!
//! ```json
//! { "tiers": { "S": 150, "A": 100, "B": 75 }, "class_tiers": { "Necromancer": "S" } }
//! ```
//!
//! Either shape can be combined with `level_modifiers`, `spawn_modifier` and `base_mod`.

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use thiserror::Error;

use crate::record::RitpowNames;
use crate::report::{fatal, untidy, warn, ErrorKey};
use crate::token::{FileKind, Loc};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("Could not read config file '{}': {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("Invalid JSON in config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Percentage for {0} must be greater than 0")]
    NonPositive(String),
}

/// The document as it appears on disk. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    description: Option<String>,
    default: Option<u32>,
    ritpow_modifiers: Option<BTreeMap<u32, u32>>,
    tiers: Option<BTreeMap<String, u32>>,
    class_tiers: Option<BTreeMap<String, String>>,
    #[serde(default)]
    level_modifiers: BTreeMap<u32, u32>,
    spawn_modifier: Option<u32>,
    base_mod: Option<String>,
}

/// How ritual categories get their percentage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryModifiers {
    /// Percentages per ritual power id, with a fallback for everything else.
    Flat { default: u32, ritpow_modifiers: BTreeMap<u32, u32> },
    /// Percentages per tier, and tiers per class name.
    Tiered { tiers: BTreeMap<String, u32>, class_tiers: BTreeMap<String, String> },
}

impl Default for CategoryModifiers {
    fn default() -> Self {
        CategoryModifiers::Flat { default: 100, ritpow_modifiers: BTreeMap::new() }
    }
}

#[derive(Debug, Clone)]
pub struct ModConfig {
    /// Where the configuration came from, for reports.
    pub loc: Loc,
    pub description: Option<String>,
    pub categories: CategoryModifiers,
    /// Ritual level to percentage.
    pub level_modifiers: BTreeMap<u32, u32>,
    /// Applied to the spawn traits of all monsters.
    pub spawn_modifier: u32,
    /// File name of a mod in the data directory to prepend to the output.
    pub base_mod: Option<String>,
}

impl ModConfig {
    /// Read and check a configuration file.
    pub fn read(pathname: &Path) -> Result<Self, ConfigError> {
        if !pathname.is_file() {
            return Err(ConfigError::NotFound(pathname.to_path_buf()));
        }
        let text = read_to_string(pathname)
            .map_err(|source| ConfigError::Read { path: pathname.to_path_buf(), source })?;
        Self::from_json(pathname, &text)
    }

    /// Parse a configuration from its JSON text. `pathname` is only used for reports.
    pub fn from_json(pathname: &Path, text: &str) -> Result<Self, ConfigError> {
        let loc = Loc::for_path(pathname, FileKind::Config);
        let file: ConfigFile = match serde_json::from_str(text) {
            Ok(file) => file,
            Err(e) => {
                let mut eloc = loc;
                eloc.line = u32::try_from(e.line()).unwrap_or(0);
                eloc.column = u32::try_from(e.column()).unwrap_or(0);
                let msg = "could not read the configuration";
                fatal(ErrorKey::Config).msg(msg).info(e.to_string()).loc(eloc).push();
                return Err(e.into());
            }
        };

        let categories = match (file.tiers, file.class_tiers) {
            (Some(tiers), Some(class_tiers)) => {
                if file.ritpow_modifiers.is_some() || file.default.is_some() {
                    let msg = "`default` and `ritpow_modifiers` are ignored when tiers are used";
                    warn(ErrorKey::Config).msg(msg).loc(&loc).push();
                }
                CategoryModifiers::Tiered { tiers, class_tiers }
            }
            (tiers, class_tiers) => {
                if tiers.is_some() || class_tiers.is_some() {
                    let msg = "`tiers` and `class_tiers` must both be given; tiers are not used";
                    warn(ErrorKey::Config).msg(msg).loc(&loc).push();
                }
                CategoryModifiers::Flat {
                    default: file.default.unwrap_or(100),
                    ritpow_modifiers: file.ritpow_modifiers.unwrap_or_default(),
                }
            }
        };

        let config = ModConfig {
            loc,
            description: file.description,
            categories,
            level_modifiers: file.level_modifiers,
            spawn_modifier: file.spawn_modifier.unwrap_or(100),
            base_mod: file.base_mod,
        };
        config.check_percentages()?;
        Ok(config)
    }

    fn check_percentages(&self) -> Result<(), ConfigError> {
        fn positive(what: String, pct: u32) -> Result<(), ConfigError> {
            if pct == 0 {
                Err(ConfigError::NonPositive(what))
            } else {
                Ok(())
            }
        }

        match &self.categories {
            CategoryModifiers::Flat { default, ritpow_modifiers } => {
                positive("`default`".to_owned(), *default)?;
                for (id, pct) in ritpow_modifiers {
                    positive(format!("ritual power {id}"), *pct)?;
                }
            }
            CategoryModifiers::Tiered { tiers, .. } => {
                for (tier, pct) in tiers {
                    positive(format!("tier {tier}"), *pct)?;
                }
            }
        }
        for (level, pct) in &self.level_modifiers {
            positive(format!("level {level}"), *pct)?;
        }
        positive("`spawn_modifier`".to_owned(), self.spawn_modifier)
    }

    /// Warn about entries that can't match anything in the parsed ritual data.
    pub fn validate(&self, ritpows: &RitpowNames) {
        match &self.categories {
            CategoryModifiers::Flat { ritpow_modifiers, .. } => {
                for id in ritpow_modifiers.keys() {
                    if !ritpows.contains_id(*id) {
                        let msg = format!("ritual power {id} does not occur in the ritual data");
                        untidy(ErrorKey::UnknownCategory).msg(msg).loc(&self.loc).push();
                    }
                }
            }
            CategoryModifiers::Tiered { tiers, class_tiers } => {
                for (class, tier) in class_tiers {
                    if !tiers.contains_key(tier) {
                        let msg = format!("class `{class}` is assigned to undefined tier `{tier}`");
                        let info = "classes in undefined tiers keep their costs (100%)";
                        warn(ErrorKey::UnknownTier).msg(msg).info(info).loc(&self.loc).push();
                    }
                    if ritpows.ids_named(class).next().is_none() {
                        let msg = format!("class `{class}` does not occur in the ritual data");
                        let info = "class names must match the comments on `ritpow` lines";
                        warn(ErrorKey::UnknownCategory).msg(msg).info(info).loc(&self.loc).push();
                    }
                }
            }
        }
    }
}
