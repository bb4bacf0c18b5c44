//! Character snapshot store
//!
//! Process-local cache of the bound character's last observed state.
//! Exactly one snapshot is live per session; every refresh replaces it
//! wholesale. One writer (the pipeline's post-action refresh), any number
//! of readers.

use artifacts_domain::{ApiError, CharacterSnapshot, Result};
use parking_lot::RwLock;

/// Single-writer cache for the session's character snapshot.
#[derive(Default)]
pub struct SnapshotStore {
    inner: RwLock<Option<CharacterSnapshot>>,
}

impl SnapshotStore {
    /// Empty store; populated by the first refresh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently stored snapshot, without a network call.
    ///
    /// # Errors
    ///
    /// Fails if no snapshot has ever been fetched for this session.
    pub fn current(&self) -> Result<CharacterSnapshot> {
        self.inner.read().clone().ok_or_else(ApiError::session_not_bound)
    }

    /// Name of the bound character, if a snapshot exists.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.inner.read().as_ref().map(|snapshot| snapshot.name.clone())
    }

    /// Atomically replace the stored snapshot.
    pub fn replace(&self, snapshot: CharacterSnapshot) {
        *self.inner.write() = Some(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use artifacts_domain::ErrorKind;
    use serde_json::json;

    use super::*;

    fn snapshot(name: &str, cooldown: u32) -> CharacterSnapshot {
        let mut data = json!({
            "name": name,
            "level": 1, "xp": 0, "max_xp": 150, "gold": 0, "speed": 100,
            "hp": 100, "haste": 0, "critical_strike": 0, "stamina": 0,
            "attack_fire": 0, "attack_earth": 0, "attack_water": 0, "attack_air": 0,
            "dmg_fire": 0, "dmg_earth": 0, "dmg_water": 0, "dmg_air": 0,
            "res_fire": 0, "res_earth": 0, "res_water": 0, "res_air": 0,
            "x": 0, "y": 0,
            "cooldown": cooldown,
            "cooldown_expiration": "2024-11-01T00:00:00Z",
            "weapon_slot": "", "shield_slot": "", "helmet_slot": "",
            "body_armor_slot": "", "leg_armor_slot": "", "boots_slot": "",
            "ring1_slot": "", "ring2_slot": "", "amulet_slot": "",
            "artifact1_slot": "", "artifact2_slot": "", "artifact3_slot": "",
            "utility1_slot": "", "utility1_slot_quantity": 0,
            "utility2_slot": "", "utility2_slot_quantity": 0,
            "task": "", "task_type": "", "task_progress": 0, "task_total": 0,
            "inventory_max_items": 100, "inventory": [],
        });
        let object = data.as_object_mut().unwrap();
        for skill in artifacts_domain::Skill::ALL {
            object.insert(format!("{}_level", skill.as_str()), json!(1));
            object.insert(format!("{}_xp", skill.as_str()), json!(0));
            object.insert(format!("{}_max_xp", skill.as_str()), json!(150));
        }
        serde_json::from_value(data).unwrap()
    }

    #[test]
    fn empty_store_reports_unbound_session() {
        let store = SnapshotStore::new();
        assert_eq!(store.current().unwrap_err().kind, ErrorKind::SessionNotBound);
        assert_eq!(store.name(), None);
    }

    #[test]
    fn replace_is_wholesale() {
        let store = SnapshotStore::new();
        store.replace(snapshot("Zeph", 0));
        assert_eq!(store.current().unwrap().cooldown, 0);

        store.replace(snapshot("Zeph", 12));
        assert_eq!(store.current().unwrap().cooldown, 12);
        assert_eq!(store.name().as_deref(), Some("Zeph"));
    }
}
