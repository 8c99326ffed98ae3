//! Combat controller module
//!
//! ECS ответственность:
//! - Game state: Health, AttackState, CombatTarget
//! - Combat rules: damage application, death transition, combo chain
//! - Events: DamageInflicted, CharacterDied, TargetPositionReported
//!
//! Engine ответственность (через event surface):
//! - Montage playback и notify-точки (animation коллаборатор)
//! - Hitbox collision detection → DamageInflicted события

use bevy::prelude::*;

pub mod attack;
pub mod damage;
pub mod targeting;

// Re-export основных типов
pub use attack::{roll_variant, AttackVariant};
pub use damage::{CharacterDied, DamageInflicted};
pub use targeting::TargetPositionReported;

/// Имя боевого montage (attack sections внутри него)
pub const COMBAT_SEQUENCE: &str = "combat_montage";
/// Имя death sequence
pub const DEATH_SEQUENCE: &str = "death";
/// Скорость доворота к цели (interp-to speed, 1/sec)
pub const ROTATION_INTERP_SPEED: f32 = 15.0;

/// Combat Plugin
///
/// Порядок внутри Combat фазы (после Input и Movement):
/// 1. handle_primary_action — attack trigger / equip pre-empt
/// 2. handle_attack_end — montage callback + combo chain
/// 3. apply_damage — DamageInflicted → health subtraction
/// 4. handle_death — death transition (absorbing)
/// 5. freeze_on_death_end — DeathSequenceEnded → AnimationFrozen
/// 6. face_combat_target — yaw interpolation к цели
/// 7. report_target_position — cache + push в UI коллаборатор
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<DamageInflicted>()
            .add_event::<CharacterDied>()
            .add_event::<TargetPositionReported>();

        // Регистрация систем в FixedUpdate (Combat фаза)
        app.add_systems(
            FixedUpdate,
            (
                attack::handle_primary_action,
                attack::handle_attack_end,
                damage::apply_damage,
                damage::handle_death,
                damage::freeze_on_death_end,
                targeting::face_combat_target,
                targeting::report_target_position,
            )
                .chain()
                .in_set(crate::FramePhase::Combat),
        );
    }
}
