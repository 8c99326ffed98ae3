//! ECS Components для player character
//!
//! Организация по доменам:
//! - actor: базовые характеристики (Health, Stamina, CoinPurse)
//! - movement: статусы движения и скорость (MovementStatus, StaminaStatus, MovementSpeed)
//! - player: player marker + input snapshot (Player, PlayerInput)
//! - combat: боевое состояние (AttackState, CombatTarget)
//! - equipment: экипировка и pickup (EquippedWeapon, ActiveOverlap, Interactable)

pub mod actor;
pub mod combat;
pub mod equipment;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use combat::*;
pub use equipment::*;
pub use movement::*;
pub use player::*;
