//! The comment blocks at the top of generated mods.

use std::collections::BTreeMap;
use std::io::{Result, Write};

use crate::config::{CategoryModifiers, ModConfig};
use crate::emit::BaseMod;

const SOURCE_NAME: &str = "Ritual Data v5.33.c5m";

pub(crate) fn rule() -> String {
    "=".repeat(50)
}

pub fn write_flat_header<W: Write>(out: &mut W, percent: f64, total: usize) -> Result<()> {
    writeln!(out, "# OBM Ritual Cost Modifier")?;
    writeln!(out, "# ")?;
    writeln!(out, "# This mod adjusts all ritual costs to {percent}% of their original values.")?;
    writeln!(out, "# Generated from {SOURCE_NAME}")?;
    writeln!(out, "# ")?;
    writeln!(out, "# Total rituals modified: {total}")?;
    writeln!(out, "# \n")
}

pub fn write_tiered_header<W: Write>(
    out: &mut W,
    config: &ModConfig,
    base: Option<&BaseMod>,
) -> Result<()> {
    writeln!(out, "# OBM Tiered Ritual Cost Modifier")?;
    writeln!(out, "# ")?;
    writeln!(out, "# This mod adjusts ritual costs by class/ritual power type.")?;
    writeln!(out, "# Generated from {SOURCE_NAME}")?;
    writeln!(out, "# ")?;

    if let Some(base) = base {
        write_base_mod(out, base)?;
    }

    if !config.level_modifiers.is_empty() {
        writeln!(out, "# Ritual Level Modifiers:")?;
        for (level, pct) in &config.level_modifiers {
            writeln!(out, "#   Level {level}: {pct}%")?;
        }
        writeln!(out, "# ")?;
    }

    match &config.categories {
        CategoryModifiers::Tiered { tiers, class_tiers } => {
            writeln!(out, "# Class Tier Definitions:")?;
            for (tier, pct) in tiers {
                writeln!(out, "#   {tier}: {pct}%")?;
            }
            writeln!(out, "# ")?;

            let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
            for (class, tier) in class_tiers {
                groups.entry(tier).or_default().push(class);
            }
            writeln!(out, "# Class Assignments:")?;
            for (tier, classes) in groups {
                writeln!(out, "#   {tier}: {}", classes.join(", "))?;
            }
            writeln!(out, "# \n")
        }
        CategoryModifiers::Flat { default, ritpow_modifiers } if !ritpow_modifiers.is_empty() => {
            writeln!(out, "# Default modifier: {default}%")?;
            writeln!(out, "# ")?;
            writeln!(out, "# Custom modifiers:")?;
            for (id, pct) in ritpow_modifiers {
                writeln!(out, "#   Ritpow {id}: {pct}%")?;
            }
            writeln!(out, "# \n")
        }
        CategoryModifiers::Flat { .. } => writeln!(out),
    }
}

/// The base mod goes in verbatim, between two banners.
fn write_base_mod<W: Write>(out: &mut W, base: &BaseMod) -> Result<()> {
    let rule = rule();
    writeln!(out, "# {rule}")?;
    writeln!(out, "# BASE MOD: {}", base.name)?;
    writeln!(out, "# (Our changes below override any conflicts)")?;
    writeln!(out, "# {rule}\n")?;
    out.write_all(&base.contents)?;
    writeln!(out, "\n\n# {rule}")?;
    writeln!(out, "# OBM MODIFICATIONS START HERE")?;
    writeln!(out, "# {rule}\n")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn header(json: &str, base: Option<&BaseMod>) -> String {
        let config = ModConfig::from_json(Path::new("test.json"), json).unwrap();
        let mut out = Vec::new();
        write_tiered_header(&mut out, &config, base).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_flat_header() {
        let mut out = Vec::new();
        write_flat_header(&mut out, 62.5, 3).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# OBM Ritual Cost Modifier\n# \n"));
        assert!(text.contains("# This mod adjusts all ritual costs to 62.5% of their original"));
        assert!(text.ends_with("# Total rituals modified: 3\n# \n\n"));
    }

    #[test]
    fn test_plain_header() {
        let text = header("{}", None);
        assert!(text.starts_with("# OBM Tiered Ritual Cost Modifier\n"));
        assert!(text.ends_with("# Generated from Ritual Data v5.33.c5m\n# \n\n"));
    }

    #[test]
    fn test_flat_modifiers_are_listed() {
        let text = header(r#"{"default": 90, "ritpow_modifiers": {"12": 80, "3": 50}}"#, None);
        let expected = "# Default modifier: 90%\n# \n# Custom modifiers:\n#   Ritpow 3: 50%\n\
                        #   Ritpow 12: 80%\n# \n\n";
        assert!(text.ends_with(expected));
    }

    #[test]
    fn test_tiers_and_levels_are_listed() {
        let text = header(
            r#"{"tiers": {"S": 150, "B": 75},
                "class_tiers": {"Witch": "B", "Necromancer": "S", "Druid": "B"},
                "level_modifiers": {"10": 90, "2": 120}}"#,
            None,
        );
        let expected = "# Ritual Level Modifiers:\n#   Level 2: 120%\n#   Level 10: 90%\n# \n\
                        # Class Tier Definitions:\n#   B: 75%\n#   S: 150%\n# \n\
                        # Class Assignments:\n#   B: Druid, Witch\n#   S: Necromancer\n# \n\n";
        assert!(text.ends_with(expected));
    }

    #[test]
    fn test_base_mod() {
        let base =
            BaseMod { name: "base.c5m".to_owned(), contents: b"selectritual \"X\"".to_vec() };
        let text = header("{}", Some(&base));
        let rule = rule();
        let expected = format!(
            "# \n# {rule}\n# BASE MOD: base.c5m\n# (Our changes below override any conflicts)\n\
             # {rule}\n\nselectritual \"X\"\n\n# {rule}\n# OBM MODIFICATIONS START HERE\n\
             # {rule}\n\n\n"
        );
        assert!(text.ends_with(&expected));
    }
}
