use hecs::World;
use tracing::debug;

use crate::systems::spawn::spawn_coin;
use crate::{Camera, Config, Difficulty, Events, GameRng, Opponent, PlayerCar, Score, Track};

/// Score opponents the player has overtaken
///
/// An opponent whose y drops below the player's is marked `passed` (one
/// shot) and worth one point. Each pass event evaluates difficulty
/// milestones and, at coin-score multiples, rolls a single coin-spawn
/// chance.
#[allow(clippy::too_many_arguments)]
pub fn score_passes(
    world: &mut World,
    track: &Track,
    config: &Config,
    camera: &Camera,
    score: &mut Score,
    difficulty: &mut Difficulty,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let player_y = match world.query_mut::<&PlayerCar>().into_iter().next() {
        Some((_e, car)) => car.pos.y,
        None => return,
    };

    // Collect in spawn order so multi-pass frames score deterministically
    let mut passed: Vec<(hecs::Entity, u64)> = world
        .query::<&Opponent>()
        .iter()
        .filter(|(_e, o)| !o.passed && o.pos.y < player_y)
        .map(|(e, o)| (e, o.seq))
        .collect();
    passed.sort_by_key(|(_e, seq)| *seq);

    for (entity, seq) in passed {
        if let Ok(mut opponent) = world.get::<&mut Opponent>(entity) {
            opponent.passed = true;
        }
        score.add(1);
        events.passes += 1;
        debug!(seq, score = score.points, "opponent passed");

        difficulty.on_score(score.points, config, events);

        // At most one coin-spawn attempt per pass event
        if score.points > 0
            && score.points % config.coin_score_step == 0
            && rng.chance(config.coin_chance)
        {
            spawn_coin(world, track, config, camera, rng);
            events.coin_spawned = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_opponent, create_player, Coin};
    use glam::Vec2;

    fn setup() -> (World, Track, Config, Camera, Score, Difficulty, Events, GameRng) {
        (
            World::new(),
            Track::new(),
            Config::new(),
            Camera::new(1.0),
            Score::new(),
            Difficulty::new(),
            Events::new(),
            GameRng::new(12345),
        )
    }

    #[test]
    fn test_pass_scores_exactly_once() {
        let (mut world, track, config, camera, mut score, mut difficulty, mut events, mut rng) =
            setup();
        create_player(&mut world, Vec2::new(0.0, 0.0));
        let entity = create_opponent(&mut world, Vec2::new(5.0, -1.0), 0);

        score_passes(
            &mut world,
            &track,
            &config,
            &camera,
            &mut score,
            &mut difficulty,
            &mut events,
            &mut rng,
        );
        assert_eq!(score.points, 1);
        assert_eq!(events.passes, 1);
        assert!(world.get::<&Opponent>(entity).unwrap().passed);

        // Second evaluation: still one point
        score_passes(
            &mut world,
            &track,
            &config,
            &camera,
            &mut score,
            &mut difficulty,
            &mut events,
            &mut rng,
        );
        assert_eq!(score.points, 1, "Pass must score exactly once");
    }

    #[test]
    fn test_opponent_above_player_not_scored() {
        let (mut world, track, config, camera, mut score, mut difficulty, mut events, mut rng) =
            setup();
        create_player(&mut world, Vec2::new(0.0, 0.0));
        create_opponent(&mut world, Vec2::new(5.0, 1.0), 0);

        score_passes(
            &mut world,
            &track,
            &config,
            &camera,
            &mut score,
            &mut difficulty,
            &mut events,
            &mut rng,
        );
        assert_eq!(score.points, 0);
    }

    #[test]
    fn test_multiple_passes_in_one_frame() {
        let (mut world, track, config, camera, mut score, mut difficulty, mut events, mut rng) =
            setup();
        create_player(&mut world, Vec2::new(0.0, 0.0));
        create_opponent(&mut world, Vec2::new(5.0, -1.0), 0);
        create_opponent(&mut world, Vec2::new(-5.0, -2.0), 1);

        score_passes(
            &mut world,
            &track,
            &config,
            &camera,
            &mut score,
            &mut difficulty,
            &mut events,
            &mut rng,
        );
        assert_eq!(score.points, 2);
        assert_eq!(events.passes, 2);
    }

    #[test]
    fn test_speed_milestone_fires_at_ten_passes() {
        let (mut world, track, config, camera, mut score, mut difficulty, mut events, mut rng) =
            setup();
        create_player(&mut world, Vec2::new(0.0, 0.0));
        let initial_speed = difficulty.move_speed;

        for seq in 0..10 {
            create_opponent(&mut world, Vec2::new(5.0, -1.0 - seq as f32), seq);
        }
        score_passes(
            &mut world,
            &track,
            &config,
            &camera,
            &mut score,
            &mut difficulty,
            &mut events,
            &mut rng,
        );

        assert_eq!(score.points, 10);
        assert!(events.speed_increased);
        assert!((difficulty.move_speed - (initial_speed + config.speed_increment)).abs() < 1e-6);
    }

    #[test]
    fn test_coin_spawn_only_at_score_multiples() {
        let (mut world, track, config, camera, mut score, mut difficulty, mut events, mut rng) =
            setup();
        create_player(&mut world, Vec2::new(0.0, 0.0));

        // Score 1..=4: no multiple of 5, so never a coin regardless of rng
        for seq in 0..4 {
            create_opponent(&mut world, Vec2::new(5.0, -1.0 - seq as f32), seq);
        }
        score_passes(
            &mut world,
            &track,
            &config,
            &camera,
            &mut score,
            &mut difficulty,
            &mut events,
            &mut rng,
        );
        let coins = world.query_mut::<&Coin>().into_iter().count();
        assert_eq!(coins, 0, "No coin chance below the first multiple of 5");
    }

    #[test]
    fn test_coin_spawn_chance_at_milestone() {
        // With enough milestone events the 40% chance must fire at least once
        let (mut world, track, config, camera, mut score, mut difficulty, mut events, mut rng) =
            setup();
        create_player(&mut world, Vec2::new(0.0, 0.0));

        let mut seq = 0;
        let mut spawned = false;
        for _ in 0..20 {
            for _ in 0..5 {
                create_opponent(&mut world, Vec2::new(5.0, -1.0), seq);
                seq += 1;
            }
            score_passes(
                &mut world,
                &track,
                &config,
                &camera,
                &mut score,
                &mut difficulty,
                &mut events,
                &mut rng,
            );
            if world.query_mut::<&Coin>().into_iter().count() > 0 {
                spawned = true;
                break;
            }
        }
        assert!(spawned, "Coin chance should fire within 20 milestones");
    }
}
