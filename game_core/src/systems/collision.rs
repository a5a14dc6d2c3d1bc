use glam::Vec2;
use hecs::{Entity, World};
use tracing::debug;

use crate::{Aabb, Coin, Config, Difficulty, Events, Opponent, PlayerCar, Score};

/// Collision pass: player box vs every opponent and coin
///
/// The player's box is computed once. The first overlapping opponent in
/// spawn order is returned as the fatal collision; the caller applies
/// the game-over transition last, after coins are handled. Overlapping
/// coins are collected here: bonus awarded, milestones evaluated, and
/// the coin despawned within the same pass.
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    difficulty: &mut Difficulty,
    events: &mut Events,
) -> Option<Entity> {
    let car_size = Vec2::new(config.car_width, config.car_height);
    let player_box = world
        .query_mut::<&PlayerCar>()
        .into_iter()
        .next()
        .map(|(_e, car)| Aabb::from_center_size(car.pos, car_size))?;

    let mut opponents: Vec<(Entity, u64, Aabb)> = world
        .query::<&Opponent>()
        .iter()
        .map(|(e, o)| (e, o.seq, Aabb::from_center_size(o.pos, car_size)))
        .collect();
    opponents.sort_by_key(|(_e, seq, _box_)| *seq);
    let fatal = opponents
        .iter()
        .find(|(_e, _seq, aabb)| player_box.intersects(aabb))
        .map(|(e, _seq, _aabb)| *e);

    let coin_size = Vec2::splat(config.coin_radius * 2.0);
    let collected: Vec<Entity> = world
        .query::<&Coin>()
        .iter()
        .filter(|(_e, coin)| player_box.intersects(&Aabb::from_center_size(coin.pos, coin_size)))
        .map(|(e, _coin)| e)
        .collect();

    for entity in collected {
        score.add(config.coin_bonus);
        events.coins_collected += 1;
        debug!(score = score.points, "coin collected");
        difficulty.on_score(score.points, config, events);
        let _ = world.despawn(entity);
    }

    fatal
}
