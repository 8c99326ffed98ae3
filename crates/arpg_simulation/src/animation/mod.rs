//! Animation коллаборатор (event surface)
//!
//! Симуляция НЕ играет анимации — она запрашивает sequences у host engine
//! (PlaySequence / JumpToSection) и реагирует на callbacks из notify-точек
//! montage (AttackSequenceEnded / DeathSequenceEnded).

use bevy::prelude::*;

/// Запрос: играть sequence с playback-rate множителем (ECS → engine)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlaySequence {
    pub entity: Entity,
    /// Имя sequence ("combat_montage", "death")
    pub sequence: String,
    pub play_rate: f32,
}

/// Запрос: прыгнуть на section внутри текущего montage (ECS → engine)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct JumpToSection {
    pub entity: Entity,
    pub section: String,
}

/// Callback: attack montage дошёл до notify-точки конца атаки (engine → ECS)
#[derive(Event, Debug, Clone, Copy)]
pub struct AttackSequenceEnded {
    pub entity: Entity,
}

/// Callback: death sequence доиграл до конца (engine → ECS)
///
/// После него sampling анимации замораживается навсегда (труп лежит).
#[derive(Event, Debug, Clone, Copy)]
pub struct DeathSequenceEnded {
    pub entity: Entity,
}

/// Маркер: animation sampling остановлен (после DeathSequenceEnded)
#[derive(Component, Debug, Clone, Copy)]
pub struct AnimationFrozen;

/// Animation plugin — только регистрация event surface
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaySequence>()
            .add_event::<JumpToSection>()
            .add_event::<AttackSequenceEnded>()
            .add_event::<DeathSequenceEnded>();
    }
}
