//! This library holds the bulk of the code for `coe5-rebalance`.
//!
//! It reads the ritual and monster data files of Conquest of Elysium 5 and generates mod files
//! that rescale ritual costs and monster spawn rates.

#![warn(missing_debug_implementations)]

pub use crate::config::{CategoryModifiers, ConfigError, ModConfig};
pub use crate::datafile::{read_data_file, DataFileError};
pub use crate::emit::{
    append_spawn_mods, generate_flat_mod, generate_tiered_mod, BaseMod, ModStats,
};
pub use crate::modifier::{combine, scale, Decision, Resolver};
pub use crate::parse::{parse_data, parse_data_file, ParsedData};
pub use crate::record::{Cost, Monster, Record, RitpowNames, Ritual, Spawn, SpawnTrait};
pub use crate::tables::resource_name;
pub use crate::token::{FileKind, Loc, Token};
pub use crate::tooling::{generate_config_template, list_ritpows, reference_path};

mod config;
mod datafile;
pub mod emit;
mod modifier;
pub mod parse;
mod record;
pub mod report;
mod tables;
mod token;
mod tooling;
