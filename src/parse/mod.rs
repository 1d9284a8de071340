//! Parser for the line-oriented `.c5m` data format.
//!
//! Only the parts of the format that mods here care about are understood: ritual records with
//! their `cost`, `ritpow` and `level` lines, and monster records with their spawn traits.
//! Everything else is skipped without complaint.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::datafile::read_data_file;
use crate::record::{Monster, Record, RitpowNames, Ritual};
use crate::token::{FileKind, Loc};

pub use line::{lex_line, SourceLine, Word};
pub use records::RecordParser;

mod line;
mod records;

/// Everything extracted from one data file.
#[derive(Debug, Clone, Default)]
pub struct ParsedData {
    /// All records with at least one attribute, in file order.
    pub records: Vec<Record>,
    pub ritpows: RitpowNames,
}

impl ParsedData {
    pub fn rituals(&self) -> impl Iterator<Item = &Ritual> {
        self.records.iter().filter_map(Record::as_ritual)
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.records.iter().filter_map(Record::as_monster)
    }
}

/// Parse the text of a data file. `pathname` is only used for locations in reports.
pub fn parse_data(pathname: &Path, kind: FileKind, contents: &str) -> ParsedData {
    let mut loc = Loc::for_file(Arc::new(pathname.to_path_buf()), kind);
    let mut parser = RecordParser::new();
    for (nr, text) in contents.lines().enumerate() {
        loc.line = u32::try_from(nr + 1).unwrap_or(u32::MAX);
        parser.line(&lex_line(text, loc.clone()));
    }
    let (records, ritpows) = parser.finish();
    ParsedData { records, ritpows }
}

/// Read and parse a data file.
pub fn parse_data_file(pathname: &Path) -> Result<ParsedData> {
    let contents = read_data_file(pathname, FileKind::Data)?;
    Ok(parse_data(pathname, FileKind::Data, &contents))
}
