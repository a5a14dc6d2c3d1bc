use glam::Vec2;
use hecs::{Entity, World};
use tracing::info;

use crate::{
    create_player, step, Camera, Coin, Config, Control, Difficulty, Events, GameRng, InputState,
    Key, Opponent, Phase, PlayerCar, Score, Time, Track,
};

/// One full game session: the world plus every resource the frame loop
/// touches, owned in one place and passed by exclusive reference into
/// each sub-pass
pub struct Game {
    pub world: World,
    pub time: Time,
    pub track: Track,
    pub config: Config,
    pub input: InputState,
    pub score: Score,
    pub difficulty: Difficulty,
    pub camera: Camera,
    pub phase: Phase,
    pub events: Events,
    pub rng: GameRng,
}

/// Positions extracted for the host renderer. The world is the single
/// source of truth, so this is always consistent with the tracked
/// entity set.
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    pub player_pos: Vec2,
    pub player_vel: Vec2,
    pub opponents: Vec<Vec2>,
    pub coins: Vec<Vec2>,
    pub camera_pos: Vec2,
    pub view_width: f32,
    pub view_height: f32,
}

impl Game {
    pub fn new(seed: u64, aspect: f32) -> Self {
        let config = Config::new();
        let mut world = World::new();
        create_player(&mut world, Vec2::new(0.0, config.player_start_y));

        Self {
            world,
            time: Time::default(),
            track: Track::new(),
            config,
            input: InputState::new(),
            score: Score::new(),
            difficulty: Difficulty::new(),
            camera: Camera::new(aspect),
            phase: Phase::Playing,
            events: Events::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) -> Control {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.track,
            &self.config,
            &self.input,
            &mut self.score,
            &mut self.difficulty,
            &mut self.camera,
            &mut self.phase,
            &mut self.events,
            &mut self.rng,
        )
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.press(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Explicit restart request: back to `Playing` with initial state
    pub fn restart(&mut self) {
        self.score.reset();
        self.difficulty.reset();
        self.camera.reset();
        self.events.clear();
        self.phase = Phase::Playing;

        let mut stale: Vec<Entity> = self
            .world
            .query_mut::<&Opponent>()
            .into_iter()
            .map(|(e, _o)| e)
            .collect();
        stale.extend(
            self.world
                .query_mut::<&Coin>()
                .into_iter()
                .map(|(e, _c)| e),
        );
        for entity in stale {
            let _ = self.world.despawn(entity);
        }

        let start = Vec2::new(0.0, self.config.player_start_y);
        for (_entity, car) in self.world.query_mut::<&mut PlayerCar>() {
            car.reset(start);
        }

        info!("game restarted");
    }

    /// Viewport resize: recompute projection without touching game state
    pub fn resize(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }

    pub fn score(&self) -> u32 {
        self.score.points
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> Option<PlayerCar> {
        self.world
            .query::<&PlayerCar>()
            .iter()
            .next()
            .map(|(_e, car)| *car)
    }

    pub fn opponent_count(&self) -> usize {
        self.world.query::<&Opponent>().iter().count()
    }

    pub fn coin_count(&self) -> usize {
        self.world.query::<&Coin>().iter().count()
    }

    pub fn render_snapshot(&self) -> RenderSnapshot {
        let (player_pos, player_vel) = self
            .world
            .query::<&PlayerCar>()
            .iter()
            .next()
            .map(|(_e, car)| (car.pos, car.vel))
            .unwrap_or((Vec2::ZERO, Vec2::ZERO));

        let mut tagged: Vec<(u64, Vec2)> = self
            .world
            .query::<&Opponent>()
            .iter()
            .map(|(_e, o)| (o.seq, o.pos))
            .collect();
        tagged.sort_by_key(|(seq, _pos)| *seq);
        let opponents = tagged.into_iter().map(|(_seq, pos)| pos).collect();

        let coins = self
            .world
            .query::<&Coin>()
            .iter()
            .map(|(_e, coin)| coin.pos)
            .collect();

        RenderSnapshot {
            player_pos,
            player_vel,
            opponents,
            coins,
            camera_pos: self.camera.pos,
            view_width: self.camera.view_width(),
            view_height: self.camera.view_height,
        }
    }
}
