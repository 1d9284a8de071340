//! Helpers for writing a modifier configuration by hand.

use std::collections::BTreeMap;
use std::fs::write;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::record::RitpowNames;

/// Print all ritual power ids and their names, in id order.
pub fn list_ritpows<W: Write>(out: &mut W, ritpows: &RitpowNames) -> std::io::Result<()> {
    writeln!(out, "\nRitual Power Types:")?;
    writeln!(out, "{}", "=".repeat(50))?;
    for (id, name) in ritpows.iter() {
        writeln!(out, "  {id}: {name}")?;
    }
    writeln!(out)
}

#[derive(Debug, Serialize)]
struct Template {
    description: &'static str,
    default: u32,
    ritpow_modifiers: BTreeMap<u32, u32>,
}

/// The path of the reference file that goes with a config template.
pub fn reference_path(config: &Path) -> PathBuf {
    let stem = config.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    config.with_file_name(format!("{stem}_reference.txt"))
}

/// Write a config template that leaves every ritual power at 100%, and a reference file next to
/// it with the names of the ids. Returns the path of the reference file.
pub fn generate_config_template(ritpows: &RitpowNames, output: &Path) -> Result<PathBuf> {
    let template = Template {
        description: "Tiered ritual cost modifier configuration",
        default: 100,
        ritpow_modifiers: ritpows.iter().map(|(id, _)| (id, 100)).collect(),
    };
    let mut json = serde_json::to_string_pretty(&template)?;
    json.push('\n');
    write(output, json).with_context(|| format!("Could not write {}", output.display()))?;

    let mut reference = format!("Ritual Power ID Reference\n{}\n\n", "=".repeat(50));
    reference.extend(ritpows.iter().map(|(id, name)| format!("{id}: {name}\n")));
    let ref_path = reference_path(output);
    write(&ref_path, reference).with_context(|| format!("Could not write {}", ref_path.display()))?;
    Ok(ref_path)
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use super::*;
    use crate::config::{CategoryModifiers, ModConfig};
    use crate::token::{FileKind, Loc, Token};

    fn ritpows() -> RitpowNames {
        let mut names = RitpowNames::default();
        let loc = Loc::for_path(Path::new("test.c5m"), FileKind::Data);
        names.register(12, &Token::new("Druid".to_owned(), loc.clone()));
        names.register(3, &Token::new("Necromancer".to_owned(), loc));
        names
    }

    #[test]
    fn test_list_ritpows() {
        let mut out = Vec::new();
        list_ritpows(&mut out, &ritpows()).unwrap();
        let expected =
            format!("\nRitual Power Types:\n{}\n  3: Necromancer\n  12: Druid\n\n", "=".repeat(50));
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_reference_path() {
        assert_eq!(
            reference_path(Path::new("out/balance_config.json")),
            Path::new("out/balance_config_reference.txt")
        );
        assert_eq!(reference_path(Path::new("my.cfg")), Path::new("my_reference.txt"));
    }

    #[test]
    fn test_template_loads_as_identity_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("balance_config.json");
        let ref_path = generate_config_template(&ritpows(), &output).unwrap();

        let config = ModConfig::read(&output).unwrap();
        let CategoryModifiers::Flat { default, ritpow_modifiers } = &config.categories else {
            panic!("expected flat config");
        };
        assert_eq!(*default, 100);
        assert_eq!(ritpow_modifiers.len(), 2);
        assert!(ritpow_modifiers.values().all(|pct| *pct == 100));

        let reference = read_to_string(ref_path).unwrap();
        assert!(reference.starts_with("Ritual Power ID Reference\n====="));
        assert!(reference.ends_with("\n\n3: Necromancer\n12: Druid\n"));
    }
}
