//! Equipment: weapon equip на pickup edge
//!
//! Flow:
//! - Pickup коллаборатор выставляет ActiveOverlap (capability-tagged)
//! - Primary action edge читает overlap: Weapon → equip (pre-empts attack)
//! - Equip: ownership переходит персонажу, предыдущее оружие дропается,
//!   sound коллаборатору уходит equip sound

use bevy::prelude::*;

use crate::components::{EquippedWeapon, WeaponSpec};

/// Запрос sound effect у host engine (one-way push)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SoundRequested {
    pub entity: Entity,
    pub sound: String,
}

/// Экипирует weapon в слот персонажа
///
/// Предыдущее оружие вытесняется и дропается синхронно (слот владеет
/// оружием эксклюзивно). Equip sound уходит sound коллаборатору.
pub fn equip_weapon(
    entity: Entity,
    spec: WeaponSpec,
    slot: &mut EquippedWeapon,
    sound_events: &mut EventWriter<SoundRequested>,
) {
    if let Some(sound) = spec.equip_sound.clone() {
        sound_events.write(SoundRequested { entity, sound });
    }

    let id = spec.id.clone();
    if let Some(replaced) = slot.equip(spec) {
        crate::log(&format!("Weapon {} dropped (replaced by {})", replaced.id, id));
    }

    crate::log_info(&format!("Weapon {} equipped by {:?}", id, entity));
}

/// Equipment plugin — регистрация sound surface
pub struct EquipmentPlugin;

impl Plugin for EquipmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SoundRequested>();
    }
}
