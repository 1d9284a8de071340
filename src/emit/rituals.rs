//! `selectritual` blocks with rescaled costs.

use std::io::{Result, Write};

use crate::emit::ModStats;
use crate::modifier::{scale, Decision, Resolver};
use crate::record::Ritual;
use crate::tables::resource_name;

/// Write one ritual with all its costs scaled to `percent`.
pub fn write_ritual<W: Write>(out: &mut W, ritual: &Ritual, percent: f64) -> Result<()> {
    writeln!(out, "selectritual \"{}\"", ritual.name)?;
    for cost in &ritual.costs {
        let new = scale(cost.amount, percent);
        let resource = resource_name(cost.resource);
        writeln!(out, "cost {} {new}  # {new} {resource} (was {})", cost.resource, cost.amount)?;
    }
    writeln!(out)
}

fn section_name(ritual: &Ritual) -> String {
    match (&ritual.ritpow_name, ritual.ritpow) {
        (Some(name), _) => name.clone(),
        (None, Some(id)) => format!("Unknown ({id})"),
        (None, None) => "Unknown".to_owned(),
    }
}

/// Write every ritual whose percentage isn't 100, grouped under a comment whenever the
/// ritual power changes from one written ritual to the next.
pub fn write_tiered_rituals<'a, W, I>(out: &mut W, rituals: I, resolver: &Resolver) -> Result<ModStats>
where
    W: Write,
    I: IntoIterator<Item = &'a Ritual>,
{
    let mut stats = ModStats::default();
    let mut current = None;
    for ritual in rituals {
        let Decision::Apply(percent) = resolver.ritual(ritual) else {
            stats.skipped += 1;
            continue;
        };
        if ritual.ritpow != current {
            writeln!(out, "\n# --- {} ({percent}%) ---\n", section_name(ritual))?;
            current = ritual.ritpow;
        }
        write_ritual(out, ritual, f64::from(percent))?;
        stats.modified += 1;
    }
    Ok(stats)
}
