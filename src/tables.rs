//! Fixed lookup tables taken from the game's data files.

use std::borrow::Cow;

use phf::phf_map;

/// Resource type names for `cost` lines, as used in Ritual Data v5.33.
static RESOURCE_TYPES: phf::Map<u32, &'static str> = phf_map! {
    0u32 => "Gold",
    1u32 => "Iron",
    2u32 => "Herbs",
    3u32 => "Fungus",
    4u32 => "Sacrifices",
    5u32 => "Hands",
    6u32 => "Blood",
    7u32 => "Prisoners",
    8u32 => "Unburied",
    9u32 => "Coins",
    10u32 => "Silk",
    11u32 => "Relics",
    12u32 => "Gems",
    13u32 => "Monster Parts",
    14u32 => "Corpses (humanoid)",
    15u32 => "Gems",
    16u32 => "Entrails",
    17u32 => "Corpses",
    18u32 => "Hearts",
    19u32 => "Skulls",
};

/// Human readable name of a resource type. Unknown types are named by their id.
pub fn resource_name(id: u32) -> Cow<'static, str> {
    match RESOURCE_TYPES.get(&id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("Resource {id}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name() {
        assert_eq!(resource_name(0), "Gold");
        assert_eq!(resource_name(14), "Corpses (humanoid)");
        assert_eq!(resource_name(19), "Skulls");
        assert_eq!(resource_name(20), "Resource 20");
    }
}
