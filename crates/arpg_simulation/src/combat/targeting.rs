//! Target-facing interpolation и target position push
//!
//! Пока атака идёт и цель установлена — каждый кадр плавный yaw-only
//! доворот к текущей позиции цели (smooth turn-to-face, не snap).
//! Позиция цели кешируется и пушится UI коллаборатору (lock indicator).

use bevy::prelude::*;

use crate::combat::ROTATION_INTERP_SPEED;
use crate::components::{AttackState, CombatTarget, MovementStatus, Player};

/// Событие: позиция цели для UI/lock коллаборатора (one-way push)
#[derive(Event, Debug, Clone, Copy)]
pub struct TargetPositionReported {
    pub entity: Entity,
    pub position: Vec3,
}

/// Система: yaw-only доворот к combat target
///
/// Null target / цель без Transform → кадр просто пропускается.
pub fn face_combat_target(
    mut players: Query<
        (&AttackState, &CombatTarget, &MovementStatus, &mut Transform),
        With<Player>,
    >,
    targets: Query<&Transform, Without<Player>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (attack, combat_target, movement, mut transform) in players.iter_mut() {
        if movement.is_dead() || !attack.interpolating {
            continue;
        }
        let Some(target_entity) = combat_target.target else {
            continue;
        };
        let Ok(target_transform) = targets.get(target_entity) else {
            continue;
        };

        // Yaw-only: вертикальная составляющая отбрасывается
        let mut to_target = target_transform.translation - transform.translation;
        to_target.y = 0.0;
        if to_target.length_squared() < 1e-6 {
            continue;
        }

        // Forward в Bevy — −Z: yaw так, чтобы −Z смотрел на цель
        let desired = Quat::from_rotation_y((-to_target.x).atan2(-to_target.z));
        let alpha = (ROTATION_INTERP_SPEED * delta).min(1.0);
        transform.rotation = transform.rotation.slerp(desired, alpha);
    }
}

/// Система: кеш позиции цели + push в UI коллаборатор
///
/// One-way data push раз в кадр пока цель установлена.
pub fn report_target_position(
    mut players: Query<(Entity, &mut CombatTarget), With<Player>>,
    targets: Query<&Transform, Without<Player>>,
    mut report_events: EventWriter<TargetPositionReported>,
) {
    for (entity, mut combat_target) in players.iter_mut() {
        let Some(target_entity) = combat_target.target else {
            continue;
        };
        let Ok(target_transform) = targets.get(target_entity) else {
            continue;
        };

        combat_target.last_known_position = Some(target_transform.translation);
        report_events.write(TargetPositionReported {
            entity,
            position: target_transform.translation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yaw для направления на цель (тот же расчёт что в face_combat_target)
    fn desired_yaw(from: Vec3, to: Vec3) -> Quat {
        let mut dir = to - from;
        dir.y = 0.0;
        Quat::from_rotation_y((-dir.x).atan2(-dir.z))
    }

    #[test]
    fn test_desired_yaw_points_forward_at_target() {
        let from = Vec3::ZERO;
        let to = Vec3::new(3.0, 0.0, -4.0);

        let rotation = desired_yaw(from, to);
        let forward = rotation * Vec3::NEG_Z;

        let expected = (to - from).normalize();
        assert!((forward - expected).length() < 1e-5, "forward = {:?}", forward);
    }

    #[test]
    fn test_desired_yaw_ignores_height_difference() {
        let flat = desired_yaw(Vec3::ZERO, Vec3::new(2.0, 0.0, 5.0));
        let raised = desired_yaw(Vec3::ZERO, Vec3::new(2.0, 10.0, 5.0));

        assert!((flat.angle_between(raised)) < 1e-5);
    }

    #[test]
    fn test_slerp_converges_without_snap() {
        let start = Quat::from_rotation_y(0.0);
        let desired = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);

        let alpha = (ROTATION_INTERP_SPEED * (1.0 / 60.0)).min(1.0);
        let mut rotation = start;
        let first = rotation.slerp(desired, alpha);

        // Первый шаг двигает, но не телепортирует
        assert!(first.angle_between(start) > 0.0);
        assert!(first.angle_between(desired) > 1e-3);

        // За секунду интерполяция сходится
        for _ in 0..60 {
            rotation = rotation.slerp(desired, alpha);
        }
        assert!(rotation.angle_between(desired) < 1e-2);
    }
}
