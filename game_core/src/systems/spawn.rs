use glam::Vec2;
use hecs::World;
use tracing::debug;

use crate::{Camera, Coin, Config, Difficulty, Events, GameRng, Opponent, Track};

/// Opponent spawner: accumulate elapsed time, fire when it exceeds a
/// randomized interval (base + jitter, recomputed every frame)
pub fn spawn_opponents(
    world: &mut World,
    track: &Track,
    config: &Config,
    camera: &Camera,
    difficulty: &mut Difficulty,
    rng: &mut GameRng,
    events: &mut Events,
    dt: f32,
) {
    difficulty.spawn_timer += dt;
    let interval = difficulty.spawn_interval_base + rng.unit() * config.spawn_jitter;
    if difficulty.spawn_timer > interval {
        spawn_opponent(world, track, config, camera, difficulty, rng);
        events.opponent_spawned = true;
        difficulty.spawn_timer = 0.0;
    }
}

/// Create one opponent at a random lateral offset, just above the
/// visible top edge
pub fn spawn_opponent(
    world: &mut World,
    track: &Track,
    config: &Config,
    camera: &Camera,
    difficulty: &mut Difficulty,
    rng: &mut GameRng,
) -> hecs::Entity {
    let x = track.spawn_x(config.car_half_width(), rng);
    let y = camera.top() + config.car_height;
    let seq = difficulty.next_seq();
    debug!(seq, x, "opponent spawned");
    world.spawn((Opponent::new(Vec2::new(x, y), seq),))
}

/// Create one coin above the visible top edge
pub fn spawn_coin(
    world: &mut World,
    track: &Track,
    config: &Config,
    camera: &Camera,
    rng: &mut GameRng,
) -> hecs::Entity {
    let x = track.spawn_x(config.coin_radius, rng);
    let y = camera.top() + config.coin_radius * 2.0;
    debug!(x, "coin spawned");
    world.spawn((Coin::new(Vec2::new(x, y)),))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;

    fn setup() -> (World, Track, Config, Camera, Difficulty, GameRng, Events) {
        (
            World::new(),
            Track::new(),
            Config::new(),
            Camera::new(1.0),
            Difficulty::new(),
            GameRng::new(12345),
            Events::new(),
        )
    }

    fn opponent_count(world: &mut World) -> usize {
        world.query_mut::<&Opponent>().into_iter().count()
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let (mut world, track, config, camera, mut difficulty, mut rng, mut events) = setup();
        spawn_opponents(
            &mut world,
            &track,
            &config,
            &camera,
            &mut difficulty,
            &mut rng,
            &mut events,
            0.1,
        );
        assert_eq!(opponent_count(&mut world), 0);
        assert!(!events.opponent_spawned);
        assert!(difficulty.spawn_timer > 0.0, "Timer accumulates");
    }

    #[test]
    fn test_spawn_fires_and_resets_timer() {
        let (mut world, track, config, camera, mut difficulty, mut rng, mut events) = setup();
        // One big dt past base + max jitter
        let dt = difficulty.spawn_interval_base + config.spawn_jitter + 0.01;
        spawn_opponents(
            &mut world,
            &track,
            &config,
            &camera,
            &mut difficulty,
            &mut rng,
            &mut events,
            dt,
        );
        assert_eq!(opponent_count(&mut world), 1);
        assert!(events.opponent_spawned);
        assert_eq!(difficulty.spawn_timer, 0.0, "Timer resets to zero");
    }

    #[test]
    fn test_spawned_opponent_above_view_and_inside_margins() {
        let (mut world, track, config, camera, mut difficulty, mut rng, _events) = setup();
        for _ in 0..50 {
            spawn_opponent(&mut world, &track, &config, &camera, &mut difficulty, &mut rng);
        }
        let limit = track.half_width() - config.car_half_width() - Params::SPAWN_MARGIN;
        for (_e, opponent) in world.query::<&Opponent>().iter() {
            assert_eq!(opponent.pos.y, camera.top() + config.car_height);
            assert!(opponent.pos.x.abs() <= limit + 1e-5);
            assert!(!opponent.passed);
        }
    }

    #[test]
    fn test_opponent_seq_is_spawn_order() {
        let (mut world, track, config, camera, mut difficulty, mut rng, _events) = setup();
        let a = spawn_opponent(&mut world, &track, &config, &camera, &mut difficulty, &mut rng);
        let b = spawn_opponent(&mut world, &track, &config, &camera, &mut difficulty, &mut rng);
        let seq_a = world.get::<&Opponent>(a).unwrap().seq;
        let seq_b = world.get::<&Opponent>(b).unwrap().seq;
        assert!(seq_a < seq_b);
    }

    #[test]
    fn test_coin_spawns_above_view() {
        let (mut world, track, config, camera, _difficulty, mut rng, _events) = setup();
        let entity = spawn_coin(&mut world, &track, &config, &camera, &mut rng);
        let coin = world.get::<&Coin>(entity).unwrap();
        assert_eq!(coin.pos.y, camera.top() + config.coin_radius * 2.0);
    }
}
