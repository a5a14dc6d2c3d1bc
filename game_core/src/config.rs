/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Viewport
    pub const VIEW_HEIGHT: f32 = 60.0;

    // Track
    pub const TRACK_WIDTH: f32 = 25.0;
    pub const SPAWN_MARGIN: f32 = 0.5;

    // Cars (player and opponents share one footprint)
    pub const CAR_WIDTH: f32 = 3.0;
    pub const CAR_HEIGHT: f32 = 5.0;
    pub const PLAYER_START_Y: f32 = -Params::VIEW_HEIGHT / 4.0;

    // Player handling
    pub const MOVE_SPEED_INITIAL: f32 = 0.5;
    pub const REVERSE_FACTOR: f32 = 0.6;
    pub const STEER_BLEND: f32 = 0.15;
    pub const FRICTION: f32 = 0.92;
    pub const VEL_SNAP: f32 = 0.01;

    // Traffic
    pub const OPPONENT_SPEED: f32 = 0.45;
    pub const SPAWN_INTERVAL_INITIAL: f32 = 1.4;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.4;
    pub const SPAWN_JITTER: f32 = 0.4;

    // Coins
    pub const COIN_RADIUS: f32 = 1.0;
    pub const COIN_SPEED: f32 = 0.35;
    pub const COIN_BONUS: u32 = 5;
    pub const COIN_CHANCE: f32 = 0.4;
    pub const COIN_SCORE_STEP: u32 = 5;

    // Difficulty
    pub const SPEED_SCORE_STEP: u32 = 10;
    pub const SPEED_INCREMENT: f32 = 0.03;
    pub const TRAFFIC_SCORE_STEP: u32 = 50;
    pub const TRAFFIC_DECREMENT: f32 = 0.15;

    // Camera follow
    pub const CAMERA_AHEAD_Y: f32 = 0.15; // Fraction of view height ahead of the car
    pub const CAMERA_BLEND_Y: f32 = 0.08;
    pub const CAMERA_LEAD_X: f32 = 0.1;
    pub const CAMERA_BLEND_X: f32 = 0.1;

    // Integration
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps after tab-suspend
    pub const FRAME_RATE: f32 = 60.0; // Speeds are in units per 60fps frame
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub car_width: f32,
    pub car_height: f32,
    pub player_start_y: f32,
    pub reverse_factor: f32,
    pub steer_blend: f32,
    pub friction: f32,
    pub vel_snap: f32,
    pub opponent_speed: f32,
    pub spawn_jitter: f32,
    pub coin_radius: f32,
    pub coin_speed: f32,
    pub coin_bonus: u32,
    pub coin_chance: f32,
    pub coin_score_step: u32,
    pub speed_score_step: u32,
    pub speed_increment: f32,
    pub traffic_score_step: u32,
    pub traffic_decrement: f32,
    pub spawn_interval_min: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            car_width: Params::CAR_WIDTH,
            car_height: Params::CAR_HEIGHT,
            player_start_y: Params::PLAYER_START_Y,
            reverse_factor: Params::REVERSE_FACTOR,
            steer_blend: Params::STEER_BLEND,
            friction: Params::FRICTION,
            vel_snap: Params::VEL_SNAP,
            opponent_speed: Params::OPPONENT_SPEED,
            spawn_jitter: Params::SPAWN_JITTER,
            coin_radius: Params::COIN_RADIUS,
            coin_speed: Params::COIN_SPEED,
            coin_bonus: Params::COIN_BONUS,
            coin_chance: Params::COIN_CHANCE,
            coin_score_step: Params::COIN_SCORE_STEP,
            speed_score_step: Params::SPEED_SCORE_STEP,
            speed_increment: Params::SPEED_INCREMENT,
            traffic_score_step: Params::TRAFFIC_SCORE_STEP,
            traffic_decrement: Params::TRAFFIC_DECREMENT,
            spawn_interval_min: Params::SPAWN_INTERVAL_MIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn car_half_width(&self) -> f32 {
        self.car_width / 2.0
    }

    pub fn car_half_height(&self) -> f32 {
        self.car_height / 2.0
    }
}
