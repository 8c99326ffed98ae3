//! Damage application и death transition
//!
//! Никакой error taxonomy: все "отказы" — policy no-ops за guard'ами
//! (повторная смерть, урон по мёртвому). Health НЕ обрезается снизу —
//! overkill остаётся в current как отрицательное значение.

use bevy::prelude::*;

use crate::animation::{AnimationFrozen, DeathSequenceEnded, PlaySequence};
use crate::components::{AttackState, Health, MovementSpeed, MovementStatus};
use crate::combat::DEATH_SEQUENCE;

/// Событие: нанести урон персонажу (от hitbox/projectile коллаборатора)
#[derive(Event, Debug, Clone)]
pub struct DamageInflicted {
    pub target: Entity,
    pub amount: f32,
    /// Кто нанёс (для kill log / UI)
    pub instigator: Option<Entity>,
}

/// Событие: персонаж умер (health ≤ 0, переход one-way)
#[derive(Event, Debug, Clone)]
pub struct CharacterDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Система: apply damage от DamageInflicted событий
///
/// Урон вычитается целиком (pass-through, без поглощения). Если health
/// пересёк ноль на этом событии — генерируем CharacterDied ровно один раз.
pub fn apply_damage(
    mut damage_events: EventReader<DamageInflicted>,
    mut died_events: EventWriter<CharacterDied>,
    mut targets: Query<(&mut Health, &MovementStatus)>,
) {
    for damage in damage_events.read() {
        let Ok((mut health, movement)) = targets.get_mut(damage.target) else {
            crate::log_warning(&format!(
                "DamageInflicted: target {:?} has no Health component",
                damage.target
            ));
            continue;
        };

        let was_alive = health.is_alive();
        health.take_damage(damage.amount);

        crate::log(&format!(
            "Damage applied: {:?} −{} (HP: {})",
            damage.target, damage.amount, health.current
        ));

        // Смерть срабатывает только на пересечении нуля; по уже мёртвому
        // дальнейший урон — no-op для статуса
        if was_alive && !health.is_alive() && !movement.is_dead() {
            died_events.write(CharacterDied {
                entity: damage.target,
                killer: damage.instigator,
            });
        }
    }
}

/// Система: death transition (absorbing, идемпотентная)
///
/// Dead перекрывает всё: движение и атаки отклоняются, stamina machine
/// перестаёт тикать. Side effect — запрос death sequence у animation
/// коллаборатора.
pub fn handle_death(
    mut died_events: EventReader<CharacterDied>,
    mut targets: Query<(
        &mut MovementStatus,
        &mut MovementSpeed,
        &mut AttackState,
    )>,
    mut play_events: EventWriter<PlaySequence>,
) {
    for died in died_events.read() {
        let Ok((mut movement, mut speed, mut attack)) = targets.get_mut(died.entity) else {
            continue;
        };

        // Повторная смерть — no-op
        if movement.is_dead() {
            continue;
        }

        *movement = MovementStatus::Dead;
        speed.apply(MovementStatus::Dead);
        attack.attacking = false;
        attack.interpolating = false;

        play_events.write(PlaySequence {
            entity: died.entity,
            sequence: DEATH_SEQUENCE.to_string(),
            play_rate: 1.0,
        });

        crate::log_info(&format!(
            "Character {:?} died (killer: {:?})",
            died.entity, died.killer
        ));
    }
}

/// Система: заморозка анимации после конца death sequence
///
/// Труп остаётся в последней позе навсегда.
pub fn freeze_on_death_end(
    mut commands: Commands,
    mut end_events: EventReader<DeathSequenceEnded>,
    dead: Query<&MovementStatus>,
) {
    for end in end_events.read() {
        let Ok(movement) = dead.get(end.entity) else {
            continue;
        };
        if !movement.is_dead() {
            crate::log_warning(&format!(
                "DeathSequenceEnded for living entity {:?}, ignored",
                end.entity
            ));
            continue;
        }
        if let Ok(mut entity_commands) = commands.get_entity(end.entity) {
            entity_commands.insert(AnimationFrozen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_is_monotonic_non_increasing() {
        let mut health = Health::new(65.0, 100.0);

        health.take_damage(20.0);
        assert_eq!(health.current, 45.0);

        health.take_damage(0.0);
        assert_eq!(health.current, 45.0);

        health.take_damage(50.0);
        assert_eq!(health.current, -5.0);
    }

    #[test]
    fn test_overkill_leaves_negative_health() {
        let mut health = Health::new(65.0, 100.0);
        health.take_damage(70.0);

        // Без нижнего clamp — overkill виден в current
        assert_eq!(health.current, -5.0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_damage_event_carries_instigator() {
        let event = DamageInflicted {
            target: Entity::PLACEHOLDER,
            amount: 15.0,
            instigator: Some(Entity::PLACEHOLDER),
        };

        assert_eq!(event.amount, 15.0);
        assert!(event.instigator.is_some());
    }
}
