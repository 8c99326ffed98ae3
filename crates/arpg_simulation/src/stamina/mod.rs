//! Stamina/movement state machine
//!
//! Четыре фазы: Normal → BelowMinimum → Exhausted → ExhaustedRecovering → Normal.
//! Drain и regen идут по одной ставке (drain_rate × Δt). Переход считается
//! чистой функцией один раз за FixedUpdate tick; для мёртвого персонажа
//! машина полностью no-op.
//!
//! Policy детали:
//! - Кадр входа в BelowMinimum stamina УЖЕ уменьшена (движение остаётся Sprinting)
//! - Exhausted при зажатом sprint: stamina прибита к 0, регенерации нет
//! - ExhaustedRecovering вообще не читает sprint key — принудительная
//!   регенерация до min_sprint порога

use bevy::prelude::*;

use crate::components::{MovementSpeed, MovementStatus, PlayerInput, Stamina, StaminaStatus};
use crate::FramePhase;

/// Результат одного шага stamina machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaminaTransition {
    pub status: StaminaStatus,
    pub stamina: f32,
    pub movement: MovementStatus,
}

/// Чистая transition функция: (status, stamina, sprint_held, Δt) → (status', stamina', movement')
///
/// Тотальная: любая комбинация входов даёт ровно один результат.
/// Гарантирует 0 ≤ stamina' ≤ max для любого Δt ≥ 0.
pub fn tick_stamina(
    status: StaminaStatus,
    stamina: &Stamina,
    sprint_held: bool,
    delta: f32,
) -> StaminaTransition {
    let ds = stamina.drain_rate * delta;
    let current = stamina.current;

    match status {
        StaminaStatus::Normal => {
            if sprint_held {
                // Порог проверяется по post-subtraction значению,
                // но stamina уменьшается в любом случае
                let next = (current - ds).max(0.0);
                let next_status = if current - ds <= stamina.min_sprint {
                    StaminaStatus::BelowMinimum
                } else {
                    StaminaStatus::Normal
                };
                StaminaTransition {
                    status: next_status,
                    stamina: next,
                    movement: MovementStatus::Sprinting,
                }
            } else {
                StaminaTransition {
                    status: StaminaStatus::Normal,
                    stamina: (current + ds).min(stamina.max),
                    movement: MovementStatus::Normal,
                }
            }
        }

        StaminaStatus::BelowMinimum => {
            if sprint_held {
                if current - ds <= 0.0 {
                    // Sprint принудительно отрезан хотя key всё ещё зажат
                    StaminaTransition {
                        status: StaminaStatus::Exhausted,
                        stamina: 0.0,
                        movement: MovementStatus::Normal,
                    }
                } else {
                    StaminaTransition {
                        status: StaminaStatus::BelowMinimum,
                        stamina: current - ds,
                        movement: MovementStatus::Sprinting,
                    }
                }
            } else {
                let next = (current + ds).min(stamina.max);
                let next_status = if next >= stamina.min_sprint {
                    StaminaStatus::Normal
                } else {
                    StaminaStatus::BelowMinimum
                };
                StaminaTransition {
                    status: next_status,
                    stamina: next,
                    movement: MovementStatus::Normal,
                }
            }
        }

        StaminaStatus::Exhausted => {
            if sprint_held {
                // Зажатый key блокирует регенерацию полностью
                StaminaTransition {
                    status: StaminaStatus::Exhausted,
                    stamina: 0.0,
                    movement: MovementStatus::Normal,
                }
            } else {
                StaminaTransition {
                    status: StaminaStatus::ExhaustedRecovering,
                    stamina: (current + ds).min(stamina.max),
                    movement: MovementStatus::Normal,
                }
            }
        }

        StaminaStatus::ExhaustedRecovering => {
            // Key state не читается вообще — регенерация до порога принудительная
            let next = (current + ds).min(stamina.max);
            let next_status = if next >= stamina.min_sprint {
                StaminaStatus::Normal
            } else {
                StaminaStatus::ExhaustedRecovering
            };
            StaminaTransition {
                status: next_status,
                stamina: next,
                movement: MovementStatus::Normal,
            }
        }
    }
}

/// Система: один шаг stamina machine за FixedUpdate tick
///
/// Dead — absorbing: stamina, статусы и скорость мёртвого персонажа
/// не трогаются. Movement status side effect: пересчёт max_speed.
pub fn tick_stamina_system(
    mut query: Query<(
        &mut Stamina,
        &mut StaminaStatus,
        &mut MovementStatus,
        &mut MovementSpeed,
        &PlayerInput,
    )>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut stamina, mut status, mut movement, mut speed, input) in query.iter_mut() {
        if movement.is_dead() {
            continue;
        }

        let next = tick_stamina(*status, &stamina, input.sprint_held, delta);

        stamina.current = next.stamina;
        *status = next.status;
        *movement = next.movement;
        speed.apply(next.movement);
    }
}

/// Stamina plugin — движение обновляется до combat фазы
pub struct StaminaPlugin;

impl Plugin for StaminaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            tick_stamina_system.in_set(FramePhase::Movement),
        );
    }
}
