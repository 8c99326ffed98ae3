//! Базовые характеристики персонажа: Health, Stamina, CoinPurse

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Здоровье персонажа
///
/// Инвариант: current ≤ max. Нижней границы НЕТ — overkill урон оставляет
/// current отрицательным (смерть срабатывает на current ≤ 0, значение не
/// обрезается). Heal обрезается сверху.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        // Стартовые stats: персонаж входит в сцену подраненным
        Self {
            current: 65.0,
            max: 100.0,
        }
    }
}

impl Health {
    pub fn new(current: f32, max: f32) -> Self {
        Self { current, max }
    }

    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Вычитает урон целиком (без нижнего clamp) и возвращает применённый amount
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        self.current -= amount;
        amount
    }

    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }
}

/// Выносливость для sprint
///
/// Инвариант: 0.0 ≤ current ≤ max (поддерживается state machine в stamina модуле).
/// drain_rate используется и для drain (sprint) и для regen — симметричная ставка.
/// min_sprint — порог ниже которого sprint считается "на исходе".
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Stamina {
    pub current: f32,
    pub max: f32,
    /// Units per second, drain и regen
    pub drain_rate: f32,
    /// Порог BelowMinimum (units)
    pub min_sprint: f32,
}

impl Default for Stamina {
    fn default() -> Self {
        Self {
            current: 120.0,
            max: 150.0,
            drain_rate: 25.0,
            min_sprint: 50.0,
        }
    }
}

impl Stamina {
    pub fn new(current: f32, max: f32) -> Self {
        Self {
            current,
            max,
            ..Default::default()
        }
    }

    pub fn fraction(&self) -> f32 {
        self.current / self.max
    }
}

/// Кошелёк (coin pickups)
#[derive(Component, Debug, Clone, Copy, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct CoinPurse {
    pub coins: u32,
}

impl CoinPurse {
    pub fn add(&mut self, amount: u32) {
        self.coins += amount;
    }
}
