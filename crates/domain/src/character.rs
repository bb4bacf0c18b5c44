//! Character snapshot model
//!
//! The full mutable state of one character as last observed from the
//! server. The snapshot is decoded wholesale from the character-fetch
//! endpoint's record; partial updates are never applied because the server
//! is the single source of truth.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A position on the world's 2D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position from grid coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn dist(&self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An occupied inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub slot: u32,
    pub code: String,
    pub quantity: u32,
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}x {}", self.slot, self.quantity, self.code)
    }
}

/// The fourteen equipment slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Shield,
    Helmet,
    BodyArmor,
    LegArmor,
    Boots,
    Ring1,
    Ring2,
    Amulet,
    Artifact1,
    Artifact2,
    Artifact3,
    Utility1,
    Utility2,
}

impl EquipmentSlot {
    /// All slots, in wire order.
    pub const ALL: [Self; 14] = [
        Self::Weapon,
        Self::Shield,
        Self::Helmet,
        Self::BodyArmor,
        Self::LegArmor,
        Self::Boots,
        Self::Ring1,
        Self::Ring2,
        Self::Amulet,
        Self::Artifact1,
        Self::Artifact2,
        Self::Artifact3,
        Self::Utility1,
        Self::Utility2,
    ];

    /// Wire name of the slot, as used in action bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Shield => "shield",
            Self::Helmet => "helmet",
            Self::BodyArmor => "body_armor",
            Self::LegArmor => "leg_armor",
            Self::Boots => "boots",
            Self::Ring1 => "ring1",
            Self::Ring2 => "ring2",
            Self::Amulet => "amulet",
            Self::Artifact1 => "artifact1",
            Self::Artifact2 => "artifact2",
            Self::Artifact3 => "artifact3",
            Self::Utility1 => "utility1",
            Self::Utility2 => "utility2",
        }
    }
}

/// Item codes equipped per slot; an empty code means the slot is free.
///
/// Utility slots additionally carry a stacked quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentSet {
    pub weapon_slot: String,
    pub shield_slot: String,
    pub helmet_slot: String,
    pub body_armor_slot: String,
    pub leg_armor_slot: String,
    pub boots_slot: String,
    pub ring1_slot: String,
    pub ring2_slot: String,
    pub amulet_slot: String,
    pub artifact1_slot: String,
    pub artifact2_slot: String,
    pub artifact3_slot: String,
    pub utility1_slot: String,
    #[serde(rename = "utility1_slot_quantity")]
    pub utility1_quantity: u32,
    pub utility2_slot: String,
    #[serde(rename = "utility2_slot_quantity")]
    pub utility2_quantity: u32,
}

impl EquipmentSet {
    /// Item code equipped in the given slot (empty if free).
    #[must_use]
    pub fn code(&self, slot: EquipmentSlot) -> &str {
        match slot {
            EquipmentSlot::Weapon => &self.weapon_slot,
            EquipmentSlot::Shield => &self.shield_slot,
            EquipmentSlot::Helmet => &self.helmet_slot,
            EquipmentSlot::BodyArmor => &self.body_armor_slot,
            EquipmentSlot::LegArmor => &self.leg_armor_slot,
            EquipmentSlot::Boots => &self.boots_slot,
            EquipmentSlot::Ring1 => &self.ring1_slot,
            EquipmentSlot::Ring2 => &self.ring2_slot,
            EquipmentSlot::Amulet => &self.amulet_slot,
            EquipmentSlot::Artifact1 => &self.artifact1_slot,
            EquipmentSlot::Artifact2 => &self.artifact2_slot,
            EquipmentSlot::Artifact3 => &self.artifact3_slot,
            EquipmentSlot::Utility1 => &self.utility1_slot,
            EquipmentSlot::Utility2 => &self.utility2_slot,
        }
    }

    /// All fourteen slot/code associations, in wire order.
    #[must_use]
    pub fn slots(&self) -> [(EquipmentSlot, &str); 14] {
        EquipmentSlot::ALL.map(|slot| (slot, self.code(slot)))
    }
}

/// The eight gathering and crafting skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Mining,
    Woodcutting,
    Fishing,
    Weaponcrafting,
    Gearcrafting,
    Jewelrycrafting,
    Cooking,
    Alchemy,
}

impl Skill {
    /// All skills.
    pub const ALL: [Self; 8] = [
        Self::Mining,
        Self::Woodcutting,
        Self::Fishing,
        Self::Weaponcrafting,
        Self::Gearcrafting,
        Self::Jewelrycrafting,
        Self::Cooking,
        Self::Alchemy,
    ];

    /// Wire name of the skill.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mining => "mining",
            Self::Woodcutting => "woodcutting",
            Self::Fishing => "fishing",
            Self::Weaponcrafting => "weaponcrafting",
            Self::Gearcrafting => "gearcrafting",
            Self::Jewelrycrafting => "jewelrycrafting",
            Self::Cooking => "cooking",
            Self::Alchemy => "alchemy",
        }
    }
}

/// A level/xp/max_xp triple for one skill (or combat).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillProgress {
    pub level: u32,
    pub xp: u32,
    pub max_xp: u32,
}

impl SkillProgress {
    /// Progress through the current level as a percentage.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.max_xp == 0 {
            return 0.0;
        }
        f64::from(self.xp) / f64::from(self.max_xp) * 100.0
    }
}

/// The authenticated character's full state as last observed.
///
/// `cooldown` and `cooldown_expiration` are always set together by a
/// refresh; `cooldown` is the authoritative wait duration computed at
/// refresh time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub max_xp: u32,
    pub gold: u64,
    pub speed: u32,

    // Skill levels and XP
    pub mining_level: u32,
    pub mining_xp: u32,
    pub mining_max_xp: u32,
    pub woodcutting_level: u32,
    pub woodcutting_xp: u32,
    pub woodcutting_max_xp: u32,
    pub fishing_level: u32,
    pub fishing_xp: u32,
    pub fishing_max_xp: u32,
    pub weaponcrafting_level: u32,
    pub weaponcrafting_xp: u32,
    pub weaponcrafting_max_xp: u32,
    pub gearcrafting_level: u32,
    pub gearcrafting_xp: u32,
    pub gearcrafting_max_xp: u32,
    pub jewelrycrafting_level: u32,
    pub jewelrycrafting_xp: u32,
    pub jewelrycrafting_max_xp: u32,
    pub cooking_level: u32,
    pub cooking_xp: u32,
    pub cooking_max_xp: u32,
    pub alchemy_level: u32,
    pub alchemy_xp: u32,
    pub alchemy_max_xp: u32,

    // Combat stats
    pub hp: i32,
    pub haste: i32,
    pub critical_strike: i32,
    pub stamina: i32,

    // Elemental attributes
    pub attack_fire: i32,
    pub attack_earth: i32,
    pub attack_water: i32,
    pub attack_air: i32,
    pub dmg_fire: i32,
    pub dmg_earth: i32,
    pub dmg_water: i32,
    pub dmg_air: i32,
    pub res_fire: i32,
    pub res_earth: i32,
    pub res_water: i32,
    pub res_air: i32,

    // Position and cooldown state
    #[serde(flatten)]
    pub position: Position,
    pub cooldown: u32,
    pub cooldown_expiration: DateTime<Utc>,

    // Equipment
    #[serde(flatten)]
    pub equipment: EquipmentSet,

    // Task state
    pub task: String,
    pub task_type: String,
    pub task_progress: u32,
    pub task_total: u32,

    // Inventory
    pub inventory_max_items: u32,
    #[serde(default, deserialize_with = "occupied_slots")]
    pub inventory: Vec<InventoryItem>,
}

/// Drop structurally-present but logically-empty slots (empty item code).
fn occupied_slots<'de, D>(deserializer: D) -> Result<Vec<InventoryItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<InventoryItem>::deserialize(deserializer)?;
    Ok(raw.into_iter().filter(|item| !item.code.is_empty()).collect())
}

impl CharacterSnapshot {
    /// Combat level progress.
    #[must_use]
    pub const fn combat(&self) -> SkillProgress {
        SkillProgress { level: self.level, xp: self.xp, max_xp: self.max_xp }
    }

    /// Progress for one skill.
    #[must_use]
    pub const fn skill(&self, skill: Skill) -> SkillProgress {
        let (level, xp, max_xp) = match skill {
            Skill::Mining => (self.mining_level, self.mining_xp, self.mining_max_xp),
            Skill::Woodcutting => {
                (self.woodcutting_level, self.woodcutting_xp, self.woodcutting_max_xp)
            }
            Skill::Fishing => (self.fishing_level, self.fishing_xp, self.fishing_max_xp),
            Skill::Weaponcrafting => {
                (self.weaponcrafting_level, self.weaponcrafting_xp, self.weaponcrafting_max_xp)
            }
            Skill::Gearcrafting => {
                (self.gearcrafting_level, self.gearcrafting_xp, self.gearcrafting_max_xp)
            }
            Skill::Jewelrycrafting => {
                (self.jewelrycrafting_level, self.jewelrycrafting_xp, self.jewelrycrafting_max_xp)
            }
            Skill::Cooking => (self.cooking_level, self.cooking_xp, self.cooking_max_xp),
            Skill::Alchemy => (self.alchemy_level, self.alchemy_xp, self.alchemy_max_xp),
        };
        SkillProgress { level, xp, max_xp }
    }

    /// Number of free inventory slots (max minus sum of held quantities).
    #[must_use]
    pub fn inventory_space(&self) -> u32 {
        let held: u32 = self.inventory.iter().map(|item| item.quantity).sum();
        self.inventory_max_items.saturating_sub(held)
    }

    /// Quantity of an item held in the inventory, if any.
    #[must_use]
    pub fn has_item(&self, code: &str) -> Option<u32> {
        self.inventory.iter().find(|item| item.code == code).map(|item| item.quantity)
    }

    /// Current task completion as a percentage.
    #[must_use]
    pub fn task_progress_percent(&self) -> f64 {
        if self.task_total == 0 {
            return 0.0;
        }
        f64::from(self.task_progress) / f64::from(self.task_total) * 100.0
    }

    /// The server-reported cooldown as a [`Duration`].
    #[must_use]
    pub const fn cooldown_duration(&self) -> Duration {
        Duration::from_secs(self.cooldown as u64)
    }
}

impl fmt::Display for CharacterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Combat Level {} ({}/{} XP)", self.level, self.xp, self.max_xp)?;
        for skill in Skill::ALL {
            let progress = self.skill(skill);
            writeln!(
                f,
                "  {} Level {} ({}/{} XP)",
                skill.as_str(),
                progress.level,
                progress.xp,
                progress.max_xp
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record() -> serde_json::Value {
        let mut data = json!({
            "name": "Zeph",
            "level": 12, "xp": 300, "max_xp": 1000,
            "gold": 250, "speed": 100,
            "hp": 120, "haste": 3, "critical_strike": 5, "stamina": 10,
            "attack_fire": 10, "attack_earth": 0, "attack_water": 0, "attack_air": 4,
            "dmg_fire": 12, "dmg_earth": 0, "dmg_water": 0, "dmg_air": 6,
            "res_fire": 2, "res_earth": -3, "res_water": 0, "res_air": 1,
            "x": 5, "y": 3,
            "cooldown": 12,
            "cooldown_expiration": "2024-11-01T12:00:12Z",
            "weapon_slot": "copper_dagger", "shield_slot": "wooden_shield",
            "helmet_slot": "", "body_armor_slot": "", "leg_armor_slot": "",
            "boots_slot": "copper_boots", "ring1_slot": "copper_ring",
            "ring2_slot": "", "amulet_slot": "", "artifact1_slot": "",
            "artifact2_slot": "", "artifact3_slot": "",
            "utility1_slot": "small_health_potion", "utility1_slot_quantity": 5,
            "utility2_slot": "", "utility2_slot_quantity": 0,
            "task": "chicken", "task_type": "monsters",
            "task_progress": 10, "task_total": 80,
            "inventory_max_items": 100,
            "inventory": [
                {"slot": 1, "code": "copper_ore", "quantity": 12},
                {"slot": 2, "code": "", "quantity": 0},
                {"slot": 3, "code": "feather", "quantity": 4},
            ],
        });
        for skill in Skill::ALL {
            let object = data.as_object_mut().unwrap();
            object.insert(format!("{}_level", skill.as_str()), json!(7));
            object.insert(format!("{}_xp", skill.as_str()), json!(150));
            object.insert(format!("{}_max_xp", skill.as_str()), json!(600));
        }
        data
    }

    #[test]
    fn decodes_the_full_record() {
        let snapshot: CharacterSnapshot = serde_json::from_value(record()).unwrap();
        assert_eq!(snapshot.name, "Zeph");
        assert_eq!(snapshot.position, Position::new(5, 3));
        assert_eq!(snapshot.cooldown, 12);
        assert_eq!(snapshot.skill(Skill::Mining).level, 7);
        assert_eq!(snapshot.equipment.code(EquipmentSlot::Weapon), "copper_dagger");
        assert_eq!(snapshot.equipment.utility1_quantity, 5);
    }

    #[test]
    fn inventory_decode_skips_empty_slots_and_keeps_order() {
        let snapshot: CharacterSnapshot = serde_json::from_value(record()).unwrap();
        let codes: Vec<&str> = snapshot.inventory.iter().map(|item| item.code.as_str()).collect();
        assert_eq!(codes, ["copper_ore", "feather"]);
        assert_eq!(snapshot.inventory[0].slot, 1);
        assert_eq!(snapshot.inventory[1].slot, 3);
    }

    #[test]
    fn inventory_defaults_to_empty_when_absent() {
        let mut data = record();
        data.as_object_mut().unwrap().remove("inventory");
        let snapshot: CharacterSnapshot = serde_json::from_value(data).unwrap();
        assert!(snapshot.inventory.is_empty());
        assert_eq!(snapshot.inventory_space(), 100);
    }

    #[test]
    fn equipment_round_trips_all_fourteen_slots() {
        let snapshot: CharacterSnapshot = serde_json::from_value(record()).unwrap();
        let encoded = serde_json::to_value(&snapshot.equipment).unwrap();
        let decoded: EquipmentSet = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, snapshot.equipment);
        assert_eq!(decoded.slots().len(), 14);
        for (slot, code) in decoded.slots() {
            assert_eq!(code, snapshot.equipment.code(slot));
        }
    }

    #[test]
    fn inventory_space_and_lookup() {
        let snapshot: CharacterSnapshot = serde_json::from_value(record()).unwrap();
        assert_eq!(snapshot.inventory_space(), 100 - 16);
        assert_eq!(snapshot.has_item("copper_ore"), Some(12));
        assert_eq!(snapshot.has_item("iron_ore"), None);
    }

    #[test]
    fn progress_percentages() {
        let snapshot: CharacterSnapshot = serde_json::from_value(record()).unwrap();
        assert!((snapshot.skill(Skill::Cooking).percent() - 25.0).abs() < f64::EPSILON);
        assert!((snapshot.task_progress_percent() - 12.5).abs() < f64::EPSILON);
        let fresh = SkillProgress { level: 1, xp: 0, max_xp: 0 };
        assert!((fresh.percent() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Position::new(0, 0).dist(Position::new(5, 3)), 8);
        assert_eq!(Position::new(-2, -4).dist(Position::new(1, 2)), 9);
        assert_eq!(Position::new(4, 1).to_string(), "(4, 1)");
    }
}
