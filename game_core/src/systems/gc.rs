use hecs::World;
use tracing::debug;

use crate::{Camera, Coin, Config, Opponent};

/// Despawn entities that scrolled past the bottom of the visible area
///
/// The world is the single source of truth for the renderable scene, so
/// despawning here removes an entity from tracking and rendering in one
/// operation.
pub fn despawn_offscreen(world: &mut World, config: &Config, camera: &Camera) {
    let mut to_remove = Vec::new();

    let opponent_cutoff = camera.bottom() - config.car_height * 2.0;
    for (entity, opponent) in world.query::<&Opponent>().iter() {
        if opponent.pos.y < opponent_cutoff {
            to_remove.push(entity);
            debug!(seq = opponent.seq, "opponent despawned off-screen");
        }
    }

    // Extra buffer for coins
    let coin_cutoff = camera.bottom() - config.coin_radius * 4.0;
    for (entity, coin) in world.query::<&Coin>().iter() {
        if coin.pos.y < coin_cutoff {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_coin, create_opponent};
    use glam::Vec2;

    #[test]
    fn test_offscreen_opponent_removed() {
        let mut world = World::new();
        let config = Config::new();
        let camera = Camera::new(1.0);

        create_opponent(&mut world, Vec2::new(0.0, camera.bottom() - 20.0), 0);
        let kept = create_opponent(&mut world, Vec2::new(0.0, camera.bottom() - 1.0), 1);

        despawn_offscreen(&mut world, &config, &camera);

        assert_eq!(world.query_mut::<&Opponent>().into_iter().count(), 1);
        assert!(world.contains(kept), "Just-below-view opponent survives");
    }

    #[test]
    fn test_offscreen_coin_removed() {
        let mut world = World::new();
        let config = Config::new();
        let camera = Camera::new(1.0);

        create_coin(&mut world, Vec2::new(0.0, camera.bottom() - 10.0));
        let kept = create_coin(&mut world, Vec2::new(0.0, camera.bottom() - 3.0));

        despawn_offscreen(&mut world, &config, &camera);

        assert_eq!(world.query_mut::<&Coin>().into_iter().count(), 1);
        assert!(world.contains(kept));
    }
}
