//! The record state machine. Lines are fed in order; a record-start line closes the record in
//! progress and opens a new one, and attribute lines are added to whatever record is open.

use std::mem::replace;
use std::str::FromStr;

use crate::parse::line::SourceLine;
use crate::record::{Cost, Monster, Record, RitpowNames, Ritual, Spawn, SpawnTrait};
use crate::report::{tips, ErrorKey};
use crate::token::Token;

#[derive(Debug)]
enum State {
    /// Before the first record-start line.
    Outside,
    Inside(Record),
}

#[derive(Debug)]
pub struct RecordParser {
    state: State,
    records: Vec<Record>,
    ritpows: RitpowNames,
}

impl RecordParser {
    pub fn new() -> Self {
        RecordParser { state: State::Outside, records: Vec::new(), ritpows: RitpowNames::default() }
    }

    pub fn line(&mut self, line: &SourceLine) {
        let Some(keyword) = line.keyword() else {
            return;
        };
        let kw = keyword.token.as_str();
        if matches!(kw, "newritual" | "selectritual" | "newmonster" | "selectmonster") {
            self.record_start(kw, line);
            return;
        }
        match &mut self.state {
            State::Outside => (),
            State::Inside(Record::Ritual(ritual)) => {
                ritual_line(ritual, &mut self.ritpows, &keyword.token, line);
            }
            State::Inside(Record::Monster(monster)) => monster_line(monster, &keyword.token, line),
        }
    }

    fn record_start(&mut self, kw: &str, line: &SourceLine) {
        let Some(name) = line.words.get(1).filter(|w| w.quoted && !w.token.as_str().is_empty())
        else {
            let msg = format!("expected a quoted name after `{kw}`");
            tips(ErrorKey::ParseError).msg(msg).loc(&line.words[0].token).push();
            return;
        };
        let record = if kw.ends_with("ritual") {
            Record::Ritual(Ritual::new(name.token.clone()))
        } else {
            Record::Monster(Monster::new(name.token.clone()))
        };
        let previous = replace(&mut self.state, State::Inside(record));
        self.finalize(previous);
    }

    /// Keep the record if it has anything a mod could change.
    fn finalize(&mut self, state: State) {
        let State::Inside(record) = state else {
            return;
        };
        if record.attribute_count() > 0 {
            self.records.push(record);
        } else if let Record::Ritual(ritual) = &record {
            let msg = format!("ritual `{}` has no costs", ritual.name);
            let info = "rituals without costs are left out of the generated mod";
            tips(ErrorKey::EmptyRecord).weak().msg(msg).info(info).loc(&ritual.name).push();
        }
    }

    pub fn finish(mut self) -> (Vec<Record>, RitpowNames) {
        let last = replace(&mut self.state, State::Outside);
        self.finalize(last);
        (self.records, self.ritpows)
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

fn malformed(keyword: &Token, usage: &str) {
    let msg = format!("could not read `{keyword}` line");
    let info = format!("expected `{usage}`; the line is ignored");
    tips(ErrorKey::ParseError).msg(msg).info(info).loc(keyword).push();
}

fn ritual_line(ritual: &mut Ritual, ritpows: &mut RitpowNames, keyword: &Token, line: &SourceLine) {
    match keyword.as_str() {
        "cost" => {
            if let (Some(resource), Some(amount)) = (line.number(1), line.number(2)) {
                ritual.costs.push(Cost { resource, amount });
            } else {
                malformed(keyword, "cost <resource> <amount>");
            }
        }
        "ritpow" => {
            if let Some(id) = line.number(1) {
                ritual.ritpow = Some(id);
                ritual.ritpow_name = line.comment_str().map(str::to_owned);
                if let Some(name) = &line.comment {
                    ritpows.register(id, name);
                }
            } else {
                malformed(keyword, "ritpow <id> # <name>");
            }
        }
        "level" => {
            if let Some(level) = line.number(1) {
                ritual.level = Some(level);
            } else {
                malformed(keyword, "level <n>");
            }
        }
        _ => (),
    }
}

fn monster_line(monster: &mut Monster, keyword: &Token, line: &SourceLine) {
    let Ok(spawn_trait) = SpawnTrait::from_str(keyword.as_str()) else {
        return;
    };
    if let Some(value) = line.number(1) {
        let comment = line.comment_str().map(str::to_owned);
        monster.spawns.push(Spawn { spawn_trait, value, comment });
    } else {
        malformed(keyword, &format!("{spawn_trait} <value>"));
    }
}
