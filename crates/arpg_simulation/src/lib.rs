//! ActionRPG Player Simulation Core
//!
//! ECS-симуляция player character на Bevy 0.16 (headless, deterministic):
//! - Stamina/movement state machine (sprint drain, exhaustion, recovery)
//! - Combat controller (health/death, attack montage sequencing, target-facing)
//! - Equipment pickup (weapon equip pre-empts attack)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = game state + rules (этот crate)
//! - Engine = tactical layer (physics, rendering, animation playback) —
//!   моделируется event-коллабораторами (animation, UI, sound)

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod animation;
pub mod combat;
pub mod components;
pub mod equipment;
pub mod input;
pub mod logger;
pub mod stamina;

// Re-export базовых типов для удобства
pub use animation::{
    AnimationFrozen, AnimationPlugin, AttackSequenceEnded, DeathSequenceEnded, JumpToSection,
    PlaySequence,
};
pub use combat::{
    roll_variant, AttackVariant, CharacterDied, CombatPlugin, DamageInflicted,
    TargetPositionReported, COMBAT_SEQUENCE, DEATH_SEQUENCE, ROTATION_INTERP_SPEED,
};
pub use components::*;
pub use equipment::{EquipmentPlugin, SoundRequested};
pub use input::{
    InputPlugin, PrimaryActionPressed, PrimaryActionReleased, SprintPressed, SprintReleased,
};
pub use logger::{log, log_error, log_info, log_warning};
pub use stamina::{tick_stamina, StaminaPlugin, StaminaTransition};

/// Фазы симуляции внутри одного FixedUpdate тика
///
/// Порядок гарантирован: input snapshot → stamina/movement → combat.
/// Оба контроллера видят один и тот же pre-frame snapshot input флагов.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramePhase {
    /// Применение input событий к PlayerInput флагам
    Input,
    /// Stamina/movement state machine (до combat)
    Movement,
    /// Combat: attack sequencing, damage, death, target-facing
    Combat,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG (не перетирает seed из create_headless_app)
            .init_resource::<DeterministicRng>()
            // Фазы кадра: stamina до combat, input до обоих
            .configure_sets(
                FixedUpdate,
                (FramePhase::Input, FramePhase::Movement, FramePhase::Combat).chain(),
            )
            // Подсистемы
            .add_plugins((
                InputPlugin,
                StaminaPlugin,
                CombatPlugin,
                EquipmentPlugin,
                AnimationPlugin,
            ));
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Используется для uniform выбора attack variant. Один RNG на весь мир —
/// одинаковый seed даёт одинаковую последовательность комбо.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(42)
    }
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Spawn player character с дефолтными stats (health 65/100, stamina 120/150)
///
/// Required components на Player marker подтягивают весь набор:
/// Health, Stamina, статусы, input флаги, attack state, equipment слот.
pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((Player, Transform::from_translation(position)))
        .id()
}
