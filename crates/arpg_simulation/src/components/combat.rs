//! Боевое состояние: AttackState, CombatTarget

use bevy::prelude::*;

/// Состояние атаки персонажа
///
/// attacking и interpolating выставляются вместе при старте атаки и
/// снимаются вместе на AttackSequenceEnded. attacking — guard против
/// повторного старта пока montage играет.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AttackState {
    /// Атака в процессе (montage играет)
    pub attacking: bool,
    /// Доворот к combat target включён
    pub interpolating: bool,
}

/// Текущая боевая цель (non-owning handle)
///
/// Персонаж НЕ владеет lifetime цели — только Entity handle в registry.
/// last_known_position кешируется каждый кадр пока цель установлена и
/// пушится UI-коллаборатору (target lock indicator).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CombatTarget {
    pub target: Option<Entity>,
    pub last_known_position: Option<Vec3>,
}

impl CombatTarget {
    pub fn set(&mut self, target: Entity) {
        self.target = Some(target);
    }

    pub fn clear(&mut self) {
        self.target = None;
        self.last_known_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_state_default() {
        let state = AttackState::default();
        assert!(!state.attacking);
        assert!(!state.interpolating);
    }

    #[test]
    fn test_combat_target_set_clear() {
        let mut target = CombatTarget::default();
        assert!(target.target.is_none());

        target.set(Entity::PLACEHOLDER);
        assert!(target.target.is_some());

        target.last_known_position = Some(Vec3::new(1.0, 0.0, 2.0));
        target.clear();
        assert!(target.target.is_none());
        assert!(target.last_known_position.is_none());
    }
}
