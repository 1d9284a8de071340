//! `selectmonster` blocks with rescaled spawn traits.

use std::io::{Result, Write};

use crate::emit::header::rule;
use crate::modifier::scale;
use crate::record::Monster;

/// Write the spawn section for all `monsters`, and return how many were written.
pub fn write_spawns<'a, W, I>(out: &mut W, monsters: I, percent: u32) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Monster>,
{
    let rule = rule();
    writeln!(out, "\n# {rule}")?;
    writeln!(out, "# SPAWN RATE MODIFICATIONS")?;
    writeln!(out, "# {rule}")?;
    writeln!(out, "# Global spawn modifier: {percent}%")?;
    writeln!(out, "# \n")?;

    let mut count = 0;
    for monster in monsters {
        writeln!(out, "selectmonster \"{}\"", monster.name)?;
        for spawn in &monster.spawns {
            let new = scale(spawn.value, f64::from(percent));
            write!(out, "{} {new}  # was {}", spawn.spawn_trait, spawn.value)?;
            match &spawn.comment {
                Some(comment) => writeln!(out, "; {comment}")?,
                None => writeln!(out)?,
            }
        }
        writeln!(out)?;
        count += 1;
    }
    Ok(count)
}
