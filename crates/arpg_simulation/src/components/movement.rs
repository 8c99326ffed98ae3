//! Movement компоненты: статусы движения и скоростной cap

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Внешне видимый режим движения (gates максимальную скорость)
///
/// Dead — absorbing state: ставится только death transition'ом combat
/// контроллера, после него оба контроллера перестают обновлять персонажа.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub enum MovementStatus {
    #[default]
    Normal,
    Sprinting,
    Dead,
}

impl MovementStatus {
    pub fn is_dead(&self) -> bool {
        matches!(self, MovementStatus::Dead)
    }
}

/// Внутренняя фаза drain/regen выносливости
///
/// Отдельный enum от MovementStatus: stamina machine решает МОЖНО ли
/// спринтовать, movement status показывает спринтуем ли СЕЙЧАС.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub enum StaminaStatus {
    #[default]
    Normal,
    /// Ниже min_sprint порога, sprint ещё разрешён
    BelowMinimum,
    /// Stamina = 0, sprint принудительно отрезан
    Exhausted,
    /// Принудительная регенерация, sprint key игнорируется полностью
    ExhaustedRecovering,
}

/// Скоростной cap персонажа (units/sec)
///
/// max_speed — derived значение: пересчитывается каждый раз когда
/// выставляется MovementStatus (sprinting → sprinting_speed, иначе running).
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub running: f32,
    pub sprinting: f32,
    /// Текущий cap (derived от MovementStatus)
    pub max_speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self {
            running: 650.0,
            sprinting: 950.0,
            max_speed: 650.0,
        }
    }
}

impl MovementSpeed {
    /// Чистая derivation: status → cap
    pub fn cap_for(&self, status: MovementStatus) -> f32 {
        match status {
            MovementStatus::Sprinting => self.sprinting,
            _ => self.running,
        }
    }

    pub fn apply(&mut self, status: MovementStatus) {
        self.max_speed = self.cap_for(status);
    }
}
