pub mod components;
pub mod config;
pub mod resources;
pub mod session;
pub mod systems;
pub mod track;

pub use components::*;
pub use config::*;
pub use resources::*;
pub use session::*;
pub use track::*;

use glam::Vec2;
use hecs::World;
use systems::*;
use tracing::info;

/// Run one frame of the driving simulation
///
/// A synchronous, atomic pass: input -> motion -> spawn -> update ->
/// collision. Returns `Halt` when the phase is (or becomes) `GameOver`
/// so the driver stops requesting frames.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    track: &Track,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    difficulty: &mut Difficulty,
    camera: &mut Camera,
    phase: &mut Phase,
    events: &mut Events,
    rng: &mut GameRng,
) -> Control {
    if phase.is_game_over() {
        return Control::Halt;
    }

    // Clamp dt to bound any single integration step after a long pause
    let dt = time.dt.min(Params::MAX_DT);
    let dm = dt * Params::FRAME_RATE;

    events.clear();

    // 1. Input & motion integration
    steer_player(world, input, difficulty, config, dm);
    move_player(world, track, config, dm);
    follow_camera(world, camera, dm);

    // 2. Opponent spawning
    spawn_opponents(world, track, config, camera, difficulty, rng, events, dt);

    // 3. Entity update, pass scoring, off-screen cleanup
    move_traffic(world, config, dm);
    score_passes(world, track, config, camera, score, difficulty, events, rng);
    despawn_offscreen(world, config, camera);

    // 4. Collisions. The fatal decision is applied last so coin pickups
    //    on the fatal frame still count.
    let fatal = check_collisions(world, config, score, difficulty, events);

    time.now += dt;

    if fatal.is_some() {
        for (_entity, car) in world.query_mut::<&mut PlayerCar>() {
            car.vel = Vec2::ZERO;
        }
        *phase = Phase::GameOver;
        events.crashed = true;
        info!(score = score.points, "game over");
        return Control::Halt;
    }

    Control::Continue
}

/// Helper to create the player car entity
pub fn create_player(world: &mut World, pos: Vec2) -> hecs::Entity {
    world.spawn((PlayerCar::new(pos),))
}

/// Helper to create an opponent entity
pub fn create_opponent(world: &mut World, pos: Vec2, seq: u64) -> hecs::Entity {
    world.spawn((Opponent::new(pos, seq),))
}

/// Helper to create a coin entity
pub fn create_coin(world: &mut World, pos: Vec2) -> hecs::Entity {
    world.spawn((Coin::new(pos),))
}
