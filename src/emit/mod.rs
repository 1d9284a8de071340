//! Writing mod files.
//!
//! A mod file is a sequence of `selectritual` and `selectmonster` blocks that override values in
//! the game's data. The writers here work on any [`Write`]; the `generate_*` functions wrap them
//! for files on disk.

use std::fs::{create_dir_all, read, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::modifier::{Decision, Resolver};
use crate::parse::ParsedData;
use crate::report::{warn, ErrorKey};
use crate::token::{FileKind, Loc};

pub use header::{write_flat_header, write_tiered_header};
pub use rituals::{write_ritual, write_tiered_rituals};
pub use spawns::write_spawns;

mod header;
mod rituals;
mod spawns;

/// Counts from the ritual pass of a tiered mod.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModStats {
    pub modified: usize,
    /// Rituals left out because their percentage came to 100.
    pub skipped: usize,
}

/// An existing mod that is copied into the generated one.
#[derive(Debug, Clone)]
pub struct BaseMod {
    pub name: String,
    /// The file's bytes as they are on disk, whatever their encoding.
    pub contents: Vec<u8>,
}

impl BaseMod {
    /// Load the base mod `name` from `data_dir`. If it doesn't exist, that gets reported and the
    /// result is `None`.
    pub fn load(data_dir: &Path, name: &str) -> Result<Option<Self>> {
        let pathname = data_dir.join(name);
        if !pathname.is_file() {
            let msg = format!("base mod `{name}` not found");
            let info = "the mod is generated without it";
            let loc = Loc::for_path(&pathname, FileKind::Base);
            warn(ErrorKey::MissingBaseMod).msg(msg).info(info).loc(loc).push();
            return Ok(None);
        }
        let contents =
            read(&pathname).with_context(|| format!("Could not read {}", pathname.display()))?;
        Ok(Some(BaseMod { name: name.to_owned(), contents }))
    }
}

fn create_output(output: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .with_context(|| format!("Could not create directory {}", parent.display()))?;
    }
    let file = File::create(output)
        .with_context(|| format!("Could not create {}", output.display()))?;
    Ok(BufWriter::new(file))
}

/// Write a mod that scales every ritual's costs to `percent`. Returns the number of rituals.
pub fn generate_flat_mod(data: &ParsedData, percent: f64, output: &Path) -> Result<usize> {
    let mut out = create_output(output)?;
    let total = data.rituals().count();
    let context = || format!("Could not write {}", output.display());
    write_flat_header(&mut out, percent, total).with_context(context)?;
    for ritual in data.rituals() {
        write_ritual(&mut out, ritual, percent).with_context(context)?;
    }
    out.flush().with_context(context)?;
    Ok(total)
}

/// Write the ritual part of a config-driven mod, replacing whatever was at `output`.
pub fn generate_tiered_mod(
    data: &ParsedData,
    resolver: &Resolver,
    base: Option<&BaseMod>,
    output: &Path,
) -> Result<ModStats> {
    let mut out = create_output(output)?;
    let context = || format!("Could not write {}", output.display());
    write_tiered_header(&mut out, resolver.config(), base).with_context(context)?;
    let stats = write_tiered_rituals(&mut out, data.rituals(), resolver).with_context(context)?;
    out.flush().with_context(context)?;
    Ok(stats)
}

/// Append the spawn section to the mod at `output`. Returns the number of monsters written, or
/// `None` if the spawn modifier is 100 and nothing was appended.
pub fn append_spawn_mods(
    monsters: &ParsedData,
    resolver: &Resolver,
    output: &Path,
) -> Result<Option<usize>> {
    let Decision::Apply(percent) = resolver.spawn() else {
        return Ok(None);
    };
    let context = || format!("Could not write {}", output.display());
    let file = OpenOptions::new().append(true).create(true).open(output).with_context(context)?;
    let mut out = BufWriter::new(file);
    let count = write_spawns(&mut out, monsters.monsters(), percent).with_context(context)?;
    out.flush().with_context(context)?;
    Ok(Some(count))
}
