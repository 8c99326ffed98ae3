//! Equipment компоненты: EquippedWeapon, ActiveOverlap, Interactable

use bevy::prelude::*;

/// Описание оружия (definition + equip sound reference)
///
/// Runtime state оружия (durability, заточка) здесь не моделируется —
/// слот хранит сам spec, ownership передаётся персонажу при equip.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct WeaponSpec {
    /// Definition id ("sword_iron", "axe_rusty", ...)
    pub id: String,
    /// Sound effect на equip (OnEquipped в sound коллабораторе)
    pub equip_sound: Option<String>,
}

impl WeaponSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            equip_sound: None,
        }
    }

    pub fn with_equip_sound(mut self, sound: impl Into<String>) -> Self {
        self.equip_sound = Some(sound.into());
        self
    }
}

/// Экипированное оружие (exclusive ownership)
///
/// Replace = предыдущее оружие дропается синхронно, второго владельца
/// у слота не бывает.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct EquippedWeapon(pub Option<WeaponSpec>);

impl EquippedWeapon {
    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }

    /// Экипирует новое оружие, возвращает вытесненное (caller решает судьбу)
    pub fn equip(&mut self, weapon: WeaponSpec) -> Option<WeaponSpec> {
        self.0.replace(weapon)
    }
}

/// Что лежит в overlap зоне персонажа
///
/// Capability-tagged variant вместо runtime downcast: pickup коллаборатор
/// сообщает ЧТО это, matching явный.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub enum Interactable {
    /// Оружие — primary action экипирует его вместо атаки
    Weapon(WeaponSpec),
    /// Монеты — primary action подбирает в CoinPurse
    CoinPickup { amount: u32 },
}

/// Текущий overlapping interactable (выставляется pickup коллаборатором)
///
/// Читается и очищается на primary action edge: equip/pickup pre-empts attack.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct ActiveOverlap(pub Option<Interactable>);

impl ActiveOverlap {
    /// Забирает overlap (ownership transfer, слот очищается)
    pub fn take(&mut self) -> Option<Interactable> {
        self.0.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equip_replaces_previous() {
        let mut slot = EquippedWeapon::default();
        assert!(!slot.is_armed());

        let old = slot.equip(WeaponSpec::new("sword_iron"));
        assert!(old.is_none());
        assert!(slot.is_armed());

        let old = slot.equip(WeaponSpec::new("axe_rusty"));
        assert_eq!(old.unwrap().id, "sword_iron");
        assert_eq!(slot.0.as_ref().unwrap().id, "axe_rusty");
    }

    #[test]
    fn test_active_overlap_take_clears() {
        let mut overlap = ActiveOverlap(Some(Interactable::CoinPickup { amount: 3 }));

        let taken = overlap.take();
        assert!(matches!(taken, Some(Interactable::CoinPickup { amount: 3 })));
        assert!(overlap.0.is_none());
    }

    #[test]
    fn test_weapon_spec_equip_sound() {
        let weapon = WeaponSpec::new("sword_iron").with_equip_sound("sfx_blade_draw");
        assert_eq!(weapon.equip_sound.as_deref(), Some("sfx_blade_draw"));
    }
}
