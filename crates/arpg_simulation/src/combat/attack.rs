//! Attack sequencing: primary action edge, variant roll, combo chain
//!
//! Primary action на одном edge делает одно из двух:
//! - overlap с interactable → equip/pickup (pre-empts attack)
//! - иначе старт атаки: uniform roll одного из 4 вариантов montage section
//!
//! Combo chain: AttackSequenceEnded при зажатой кнопке стартует РОВНО одну
//! новую атаку. Guard — флаг attacking, рекурсии нет: callback сбрасывает
//! флаг и тут же проходит обычный старт.

use bevy::prelude::*;
use rand::Rng;

use crate::animation::{AttackSequenceEnded, JumpToSection, PlaySequence};
use crate::combat::COMBAT_SEQUENCE;
use crate::components::{
    ActiveOverlap, AttackState, CoinPurse, EquippedWeapon, Interactable, MovementStatus, Player,
    PlayerInput,
};
use crate::equipment::{self, SoundRequested};
use crate::input::PrimaryActionPressed;
use crate::DeterministicRng;

/// Дискретные варианты атаки (montage section + playback rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackVariant {
    Slash,
    Backslash,
    Thrust,
    Overhead,
}

impl AttackVariant {
    pub const ALL: [AttackVariant; 4] = [
        AttackVariant::Slash,
        AttackVariant::Backslash,
        AttackVariant::Thrust,
        AttackVariant::Overhead,
    ];

    /// Section внутри combat montage
    pub fn section(&self) -> &'static str {
        match self {
            AttackVariant::Slash => "attack_1",
            AttackVariant::Backslash => "attack_2",
            AttackVariant::Thrust => "attack_3",
            AttackVariant::Overhead => "attack_4",
        }
    }

    /// Playback-rate множитель варианта
    pub fn play_rate(&self) -> f32 {
        match self {
            AttackVariant::Slash => 1.35,
            AttackVariant::Backslash => 1.5,
            AttackVariant::Thrust => 1.6,
            AttackVariant::Overhead => 1.75,
        }
    }
}

/// Uniform выбор варианта атаки
pub fn roll_variant(rng: &mut impl Rng) -> AttackVariant {
    AttackVariant::ALL[rng.gen_range(0..AttackVariant::ALL.len())]
}

/// Система: primary action edge → equip pre-empt или старт атаки
pub fn handle_primary_action(
    mut presses: EventReader<PrimaryActionPressed>,
    mut rng: ResMut<DeterministicRng>,
    mut players: Query<
        (
            Entity,
            &MovementStatus,
            &mut AttackState,
            &mut EquippedWeapon,
            &mut ActiveOverlap,
            &mut CoinPurse,
        ),
        With<Player>,
    >,
    mut play_events: EventWriter<PlaySequence>,
    mut jump_events: EventWriter<JumpToSection>,
    mut sound_events: EventWriter<SoundRequested>,
) {
    for _ in presses.read() {
        for (entity, movement, mut attack, mut weapon, mut overlap, mut purse) in
            players.iter_mut()
        {
            // Мёртвый персонаж не реагирует на input
            if movement.is_dead() {
                continue;
            }

            // Overlap с interactable pre-empts attack
            if let Some(interactable) = overlap.take() {
                match interactable {
                    Interactable::Weapon(spec) => {
                        equipment::equip_weapon(entity, spec, &mut weapon, &mut sound_events);
                    }
                    Interactable::CoinPickup { amount } => {
                        purse.add(amount);
                        crate::log(&format!(
                            "Picked up {} coins (total: {})",
                            amount, purse.coins
                        ));
                    }
                }
                continue;
            }

            try_start_attack(
                entity,
                &mut attack,
                &weapon,
                &mut rng.rng,
                &mut play_events,
                &mut jump_events,
            );
        }
    }
}

/// Система: montage callback конца атаки + combo chain
pub fn handle_attack_end(
    mut end_events: EventReader<AttackSequenceEnded>,
    mut rng: ResMut<DeterministicRng>,
    mut players: Query<(
        &MovementStatus,
        &mut AttackState,
        &EquippedWeapon,
        &PlayerInput,
    )>,
    mut play_events: EventWriter<PlaySequence>,
    mut jump_events: EventWriter<JumpToSection>,
) {
    for end in end_events.read() {
        let Ok((movement, mut attack, weapon, input)) = players.get_mut(end.entity) else {
            continue;
        };

        // Stale callback (атака уже сброшена смертью) — no-op
        if !attack.attacking {
            continue;
        }

        attack.attacking = false;
        attack.interpolating = false;

        // Combo chain: кнопка всё ещё зажата → ровно одна новая атака
        if input.attack_held && !movement.is_dead() {
            try_start_attack(
                end.entity,
                &mut attack,
                weapon,
                &mut rng.rng,
                &mut play_events,
                &mut jump_events,
            );
        }
    }
}

/// Старт атаки за guard'ами: не атакуем поверх атаки и без оружия
///
/// Возвращает true если атака стартовала.
fn try_start_attack(
    entity: Entity,
    attack: &mut AttackState,
    weapon: &EquippedWeapon,
    rng: &mut impl Rng,
    play_events: &mut EventWriter<PlaySequence>,
    jump_events: &mut EventWriter<JumpToSection>,
) -> bool {
    if attack.attacking || !weapon.is_armed() {
        return false;
    }

    let variant = roll_variant(rng);

    attack.attacking = true;
    attack.interpolating = true;

    play_events.write(PlaySequence {
        entity,
        sequence: COMBAT_SEQUENCE.to_string(),
        play_rate: variant.play_rate(),
    });
    jump_events.write(JumpToSection {
        entity,
        section: variant.section().to_string(),
    });

    crate::log(&format!(
        "Attack started: {:?} section={} rate={}",
        entity,
        variant.section(),
        variant.play_rate()
    ));

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_variants_have_distinct_sections_and_rates() {
        for (i, a) in AttackVariant::ALL.iter().enumerate() {
            for b in &AttackVariant::ALL[i + 1..] {
                assert_ne!(a.section(), b.section());
                assert_ne!(a.play_rate(), b.play_rate());
            }
        }
    }

    #[test]
    fn test_roll_is_deterministic_per_seed() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..32 {
            assert_eq!(roll_variant(&mut rng1), roll_variant(&mut rng2));
        }
    }

    #[test]
    fn test_roll_covers_all_variants() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 4];

        for _ in 0..256 {
            let variant = roll_variant(&mut rng);
            let index = AttackVariant::ALL
                .iter()
                .position(|v| *v == variant)
                .unwrap();
            seen[index] = true;
        }

        assert!(seen.iter().all(|s| *s), "uniform roll пропустил вариант");
    }
}
