//! Headless симуляция player character
//!
//! Запускает Bevy App без рендера: спринт до exhaustion и обратно

use arpg_simulation::{
    create_headless_app, spawn_player, SimulationPlugin, SprintPressed, SprintReleased, Stamina,
    StaminaStatus,
};
use bevy::prelude::*;

fn main() {
    let seed = 42;
    println!("Starting ActionRPG headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    let player = {
        let mut commands = app.world_mut().commands();
        spawn_player(&mut commands, Vec3::ZERO)
    };

    // Зажимаем sprint на старте, отпускаем на полпути
    app.world_mut().send_event(SprintPressed);

    for tick in 0..1000 {
        if tick == 500 {
            app.world_mut().send_event(SprintReleased);
        }

        app.update();

        if tick % 100 == 0 {
            let stamina = app.world().get::<Stamina>(player);
            let status = app.world().get::<StaminaStatus>(player);
            println!(
                "Tick {}: stamina={:?} status={:?}",
                tick,
                stamina.map(|s| s.current),
                status
            );
        }
    }

    println!("Simulation complete!");
}
