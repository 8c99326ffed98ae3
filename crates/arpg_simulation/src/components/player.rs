//! Player marker + input snapshot

use bevy::prelude::*;

/// Marker component для player-controlled entity
///
/// Required Components подтягивают весь набор состояния персонажа —
/// spawn сводится к `commands.spawn((Player, Transform::default()))`.
///
/// # Single-player
/// В single-player режиме обычно только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(
    crate::components::Health,
    crate::components::Stamina,
    crate::components::StaminaStatus,
    crate::components::MovementStatus,
    crate::components::MovementSpeed,
    crate::components::CoinPurse,
    crate::components::AttackState,
    crate::components::CombatTarget,
    crate::components::EquippedWeapon,
    crate::components::ActiveOverlap,
    PlayerInput,
    Transform
)]
pub struct Player;

/// Pre-frame snapshot input флагов
///
/// Input события приходят между кадрами и мутируют флаги напрямую;
/// оба контроллера внутри кадра читают один и тот же snapshot
/// (input фаза идёт первой в FixedUpdate chain).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    /// Sprint key (shift) удерживается
    pub sprint_held: bool,
    /// Primary action (LMB) удерживается — для combo chain
    pub attack_held: bool,
}
