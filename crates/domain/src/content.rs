//! Named map coordinates
//!
//! Static lookup table mapping well-known content names (monsters,
//! resource nodes, workshops, facilities) to their world coordinates.

use crate::character::Position;

/// Known content locations, by wire content code.
pub static CONTENT_MAPS: &[(&str, Position)] = &[
    ("salmon_fishing_spot", Position::new(-2, -4)),
    ("goblin_wolfrider", Position::new(9, -3)),
    ("orc", Position::new(7, -2)),
    ("ogre", Position::new(8, -2)),
    ("pig", Position::new(-3, -3)),
    ("woodcutting_workshop", Position::new(-2, -3)),
    ("gold_rocks", Position::new(6, -3)),
    ("cyclops", Position::new(8, -3)),
    ("blue_slime", Position::new(2, -1)),
    ("yellow_slime", Position::new(4, -1)),
    ("red_slime", Position::new(1, -1)),
    ("green_slime", Position::new(0, -1)),
    ("goblin", Position::new(9, -2)),
    ("wolf", Position::new(-2, 1)),
    ("ash_tree", Position::new(6, 1)),
    ("copper_rocks", Position::new(2, 0)),
    ("chicken", Position::new(0, 1)),
    ("cooking_workshop", Position::new(1, 1)),
    ("weaponcrafting_workshop", Position::new(2, 1)),
    ("gearcrafting_workshop", Position::new(3, 1)),
    ("bank", Position::new(4, 1)),
    ("grand_exchange", Position::new(5, 1)),
    ("owlbear", Position::new(10, 2)),
    ("cow", Position::new(0, 2)),
    ("taskmaster_monsters", Position::new(1, 2)),
    ("sunflower", Position::new(2, 2)),
    ("gudgeon_fishing_spot", Position::new(4, 2)),
    ("shrimp_fishing_spot", Position::new(5, 2)),
    ("jewelrycrafting_workshop", Position::new(1, 3)),
    ("alchemy_workshop", Position::new(2, 3)),
    ("mushmush", Position::new(6, 4)),
    ("flying_serpent", Position::new(7, 4)),
    ("mining_workshop", Position::new(1, 5)),
    ("birch_tree", Position::new(-1, 6)),
    ("coal_rocks", Position::new(1, 6)),
    ("spruce_tree", Position::new(1, 9)),
    ("skeleton", Position::new(8, 8)),
    ("dead_tree", Position::new(9, 8)),
    ("vampire", Position::new(10, 8)),
    ("iron_rocks", Position::new(1, 7)),
    ("death_knight", Position::new(10, 7)),
    ("lich", Position::new(9, 7)),
    ("bat", Position::new(8, 9)),
    ("demon", Position::new(-4, 9)),
    ("glowstem", Position::new(1, 10)),
    ("imp", Position::new(0, 14)),
    ("maple_tree", Position::new(4, 14)),
    ("bass_fishing_spot", Position::new(6, 12)),
    ("trout_fishing_spot", Position::new(7, 12)),
    ("mithril_rocks", Position::new(-2, 13)),
    ("hellhound", Position::new(1, 14)),
    ("cultist_acolyte", Position::new(-1, 14)),
    ("taskmaster_items", Position::new(4, 13)),
    ("nettle", Position::new(7, 14)),
];

/// Look up the coordinates of a named piece of content.
#[must_use]
pub fn lookup(name: &str) -> Option<Position> {
    CONTENT_MAPS.iter().find(|(code, _)| *code == name).map(|(_, pos)| *pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_content() {
        assert_eq!(lookup("bank"), Some(Position::new(4, 1)));
        assert_eq!(lookup("salmon_fishing_spot"), Some(Position::new(-2, -4)));
        assert_eq!(lookup("nettle"), Some(Position::new(7, 14)));
    }

    #[test]
    fn unknown_content_is_none() {
        assert_eq!(lookup("dragon"), None);
    }

    #[test]
    fn codes_are_unique() {
        for (i, (code, _)) in CONTENT_MAPS.iter().enumerate() {
            assert!(
                !CONTENT_MAPS[i + 1..].iter().any(|(other, _)| other == code),
                "duplicate content code {code}"
            );
        }
    }
}
