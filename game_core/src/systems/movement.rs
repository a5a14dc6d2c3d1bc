use glam::Vec2;
use hecs::World;

use crate::{Camera, Coin, Config, Difficulty, InputState, Key, Opponent, PlayerCar, Track};

/// Blend player velocity toward the held-key target, then apply friction
///
/// `dm` is the 60fps-normalized delta multiplier. The exponential blend
/// plus friction gives the car its inertial, slightly floaty feel rather
/// than instant direction changes.
pub fn steer_player(
    world: &mut World,
    input: &InputState,
    difficulty: &Difficulty,
    config: &Config,
    dm: f32,
) {
    for (_entity, car) in world.query_mut::<&mut PlayerCar>() {
        let speed = difficulty.move_speed;
        let mut target = Vec2::ZERO;
        if input.is_held(Key::Up) {
            target.y = speed;
        } else if input.is_held(Key::Down) {
            target.y = -speed * config.reverse_factor;
        }
        if input.is_held(Key::Left) {
            target.x = -speed;
        } else if input.is_held(Key::Right) {
            target.x = speed;
        }

        car.vel += (target - car.vel) * config.steer_blend * dm;
        car.vel *= config.friction.powf(dm);

        // Snap near-zero velocities to exactly zero to prevent drift
        if car.vel.x.abs() < config.vel_snap {
            car.vel.x = 0.0;
        }
        if car.vel.y.abs() < config.vel_snap {
            car.vel.y = 0.0;
        }
    }
}

/// Integrate player position and clamp laterally to the drivable track
pub fn move_player(world: &mut World, track: &Track, config: &Config, dm: f32) {
    for (_entity, car) in world.query_mut::<&mut PlayerCar>() {
        car.pos += car.vel * dm;
        car.pos.x = track.clamp_x(car.pos.x, config.car_half_width());
    }
}

/// Smoothly track the player with the viewport
pub fn follow_camera(world: &mut World, camera: &mut Camera, dm: f32) {
    let player_pos = world
        .query_mut::<&PlayerCar>()
        .into_iter()
        .next()
        .map(|(_e, car)| car.pos);
    if let Some(pos) = player_pos {
        camera.follow(pos, dm);
    }
}

/// Scroll opponents and coins down the track
pub fn move_traffic(world: &mut World, config: &Config, dm: f32) {
    for (_entity, opponent) in world.query_mut::<&mut Opponent>() {
        opponent.pos.y -= config.opponent_speed * dm;
    }
    for (_entity, coin) in world.query_mut::<&mut Coin>() {
        coin.pos.y -= config.coin_speed * dm;
    }
}
