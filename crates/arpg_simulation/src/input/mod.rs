//! Input события от host engine
//!
//! Host (engine binding) конвертирует сырые key events в дискретные
//! события; здесь они применяются к PlayerInput snapshot В НАЧАЛЕ кадра,
//! чтобы stamina и combat фазы видели одинаковые флаги.

use bevy::prelude::*;

use crate::components::{Player, PlayerInput};
use crate::FramePhase;

/// Sprint key (shift) нажат
#[derive(Event, Debug, Clone, Copy)]
pub struct SprintPressed;

/// Sprint key отпущен
#[derive(Event, Debug, Clone, Copy)]
pub struct SprintReleased;

/// Primary action (LMB) нажат — attack или equip edge
#[derive(Event, Debug, Clone, Copy)]
pub struct PrimaryActionPressed;

/// Primary action отпущен — конец combo chain
#[derive(Event, Debug, Clone, Copy)]
pub struct PrimaryActionReleased;

/// Система: применяет накопленные input события к PlayerInput флагам
///
/// Press и release одной кнопки внутри одного кадра сворачиваются,
/// release приоритетнее (короткий tap не оставит залипший флаг).
pub fn apply_input_events(
    mut sprint_pressed: EventReader<SprintPressed>,
    mut sprint_released: EventReader<SprintReleased>,
    mut attack_pressed: EventReader<PrimaryActionPressed>,
    mut attack_released: EventReader<PrimaryActionReleased>,
    mut players: Query<&mut PlayerInput, With<Player>>,
) {
    // Редуцируем события в последнее состояние каждой кнопки
    let mut sprint = None;
    for _ in sprint_pressed.read() {
        sprint = Some(true);
    }
    for _ in sprint_released.read() {
        sprint = Some(false);
    }

    let mut attack = None;
    for _ in attack_pressed.read() {
        attack = Some(true);
    }
    for _ in attack_released.read() {
        attack = Some(false);
    }

    if sprint.is_none() && attack.is_none() {
        return;
    }

    for mut input in players.iter_mut() {
        if let Some(held) = sprint {
            input.sprint_held = held;
        }
        if let Some(held) = attack {
            input.attack_held = held;
        }
    }
}

/// Input plugin — события + snapshot фаза
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SprintPressed>()
            .add_event::<SprintReleased>()
            .add_event::<PrimaryActionPressed>()
            .add_event::<PrimaryActionReleased>()
            .add_systems(FixedUpdate, apply_input_events.in_set(FramePhase::Input));
    }
}
