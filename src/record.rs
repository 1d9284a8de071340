//! The records that the parser extracts from data files.

use std::collections::BTreeMap;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::report::{tips, ErrorKey};
use crate::token::Token;

/// A monster attribute controlling how many or how often a monster produces offspring units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[strum(use_phf)]
pub enum SpawnTrait {
    /// General spawn
    Spawnmon,
    /// Spawn 1d6 with a percentage chance
    #[strum(serialize = "spawn1d6mon")]
    Spawn1d6mon,
    Satyrspawn,
    Harpyspawn,
    Centspawn,
    Minospawn,
    /// Various mother spawns
    Motherspawn,
}

/// One `cost <resource> <amount>` line of a ritual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cost {
    pub resource: u32,
    pub amount: u32,
}

/// One spawn trait line of a monster. The comment is kept so it can be re-emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawn {
    pub spawn_trait: SpawnTrait,
    pub value: u32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Ritual {
    pub name: Token,
    pub costs: Vec<Cost>,
    /// Ritual power id. This is the category that tiers and modifiers apply to.
    pub ritpow: Option<u32>,
    /// The name given in the comment of this ritual's own `ritpow` line.
    pub ritpow_name: Option<String>,
    pub level: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Monster {
    pub name: Token,
    pub spawns: Vec<Spawn>,
}

#[derive(Debug, Clone)]
pub enum Record {
    Ritual(Ritual),
    Monster(Monster),
}

impl Ritual {
    pub fn new(name: Token) -> Self {
        Ritual { name, costs: Vec::new(), ritpow: None, ritpow_name: None, level: None }
    }
}

impl Monster {
    pub fn new(name: Token) -> Self {
        Monster { name, spawns: Vec::new() }
    }
}

impl Record {
    /// Number of attributes that a mod could change.
    pub fn attribute_count(&self) -> usize {
        match self {
            Record::Ritual(ritual) => ritual.costs.len(),
            Record::Monster(monster) => monster.spawns.len(),
        }
    }

    pub fn as_ritual(&self) -> Option<&Ritual> {
        match self {
            Record::Ritual(ritual) => Some(ritual),
            Record::Monster(_) => None,
        }
    }

    pub fn as_monster(&self) -> Option<&Monster> {
        match self {
            Record::Monster(monster) => Some(monster),
            Record::Ritual(_) => None,
        }
    }
}

/// Ritual power id to human readable name, as found in the comments of `ritpow` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RitpowNames {
    names: BTreeMap<u32, Token>,
}

impl RitpowNames {
    /// Register a name for an id. The first name seen for an id wins.
    pub fn register(&mut self, id: u32, name: &Token) {
        if let Some(existing) = self.names.get(&id) {
            if existing != name {
                let msg = format!("ritual power {id} is already named `{existing}`");
                let info = "only the first name is used for tiers and section headers";
                tips(ErrorKey::DuplicateName)
                    .msg(msg)
                    .info(info)
                    .loc(name)
                    .loc_msg(existing, "first named here")
                    .push();
            }
            return;
        }
        self.names.insert(id, name.clone());
    }

    pub fn get(&self, id: u32) -> Option<&str> {
        self.names.get(&id).map(Token::as_str)
    }

    /// All ids with a name, in numerical order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }

    /// Find the ids that carry this name. Several ids may share one.
    pub fn ids_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = u32> + 'a {
        self.iter().filter(move |(_, n)| *n == name).map(|(id, _)| id)
    }

    pub fn contains_id(&self, id: u32) -> bool {
        self.names.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::str::FromStr;

    use super::*;
    use crate::token::{FileKind, Loc};

    fn token(s: &str) -> Token {
        Token::new(s.to_owned(), Loc::for_path(Path::new("test.c5m"), FileKind::Data))
    }

    #[test]
    fn test_spawn_trait_names() {
        assert_eq!(SpawnTrait::from_str("spawn1d6mon").ok(), Some(SpawnTrait::Spawn1d6mon));
        assert_eq!(SpawnTrait::from_str("motherspawn").ok(), Some(SpawnTrait::Motherspawn));
        assert_eq!(SpawnTrait::Centspawn.to_string(), "centspawn");
        assert!(SpawnTrait::from_str("spawn").is_err());
    }

    #[test]
    fn test_first_name_wins() {
        let mut names = RitpowNames::default();
        names.register(3, &token("Lore of the Dead"));
        names.register(3, &token("Necromancy"));
        names.register(1, &token("Fire"));
        assert_eq!(names.get(3), Some("Lore of the Dead"));
        assert_eq!(names.iter().collect::<Vec<_>>(), vec![(1, "Fire"), (3, "Lore of the Dead")]);
    }

    #[test]
    fn test_ids_named() {
        let mut names = RitpowNames::default();
        names.register(4, &token("Druid"));
        names.register(9, &token("Druid"));
        names.register(5, &token("Witch"));
        assert_eq!(names.ids_named("Druid").collect::<Vec<_>>(), vec![4, 9]);
        assert_eq!(names.ids_named("Nobody").count(), 0);
    }
}
